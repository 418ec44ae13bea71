use super::wheelchair_boarding::WheelchairBoarding;

#[derive(Clone, Debug, PartialEq)]
pub struct Stop {
    pub name: String,
    pub wheelchair_boarding: WheelchairBoarding,
}
