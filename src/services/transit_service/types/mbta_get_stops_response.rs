use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
pub struct MbtaStopAttributes {
    pub name: String,
    /// 0 = no information, 1 = accessible, 2 = inaccessible
    pub wheelchair_boarding: i64,
}

#[derive(Deserialize, Serialize)]
pub struct MbtaStop {
    pub id: String,
    pub attributes: MbtaStopAttributes,
}

#[derive(Deserialize, Serialize)]
pub struct MbtaGetStopsResponse {
    pub data: Vec<MbtaStop>,
}
