/// Decimal-degree coordinates, kept as the strings the providers are queried with.
#[derive(Clone, Debug, PartialEq)]
pub struct Coordinate {
    pub latitude: String,
    pub longitude: String,
}

impl Coordinate {
    /// Mapbox and GeoJSON order positions as `[longitude, latitude]`.
    pub fn from_lon_lat(longitude: f64, latitude: f64) -> Self {
        Coordinate {
            latitude: latitude.to_string(),
            longitude: longitude.to_string(),
        }
    }
}
