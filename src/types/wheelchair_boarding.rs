/// MBTA `wheelchair_boarding` vocabulary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelchairBoarding {
    Unknown,
    Accessible,
    NotAccessible,
}

#[derive(Debug, PartialEq)]
pub struct UnrecognizedWheelchairBoarding(pub i64);

impl TryFrom<i64> for WheelchairBoarding {
    type Error = UnrecognizedWheelchairBoarding;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(WheelchairBoarding::Unknown),
            1 => Ok(WheelchairBoarding::Accessible),
            2 => Ok(WheelchairBoarding::NotAccessible),
            other => Err(UnrecognizedWheelchairBoarding(other)),
        }
    }
}

impl WheelchairBoarding {
    pub fn code(self) -> i64 {
        match self {
            WheelchairBoarding::Unknown => 0,
            WheelchairBoarding::Accessible => 1,
            WheelchairBoarding::NotAccessible => 2,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            WheelchairBoarding::Unknown => "There is no information about wheelchair accessibility.",
            WheelchairBoarding::Accessible => "This stop is wheelchair accessible.",
            WheelchairBoarding::NotAccessible => "This stop is not wheelchair accessible.",
        }
    }
}
