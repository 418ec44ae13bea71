use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct MapboxGeocodingResponseFeature {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_name: Option<String>,
    /// `[longitude, latitude]`
    pub center: [f64; 2],
}

#[derive(Serialize, Deserialize)]
pub struct MapboxGeocodingResponse {
    pub features: Vec<MapboxGeocodingResponseFeature>,
}
