use serde::{Deserialize, Serialize};

/// Represents a geographical coordinate with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Creates a new LatLng coordinate
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Validates that the coordinates are within valid ranges
    pub fn is_valid(&self) -> bool {
        self.lat >= -90.0 && self.lat <= 90.0 && self.lng >= -180.0 && self.lng <= 180.0
    }
}

impl Default for LatLng {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// `[longitude, latitude]`, the order deck.gl accessors use.
impl From<[f64; 2]> for LatLng {
    fn from([lng, lat]: [f64; 2]) -> Self {
        Self::new(lat, lng)
    }
}

impl From<LatLng> for geo_types::Point<f64> {
    fn from(value: LatLng) -> Self {
        geo_types::Point::new(value.lng, value.lat)
    }
}

impl From<geo_types::Point<f64>> for LatLng {
    fn from(point: geo_types::Point<f64>) -> Self {
        Self::new(point.y(), point.x())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lng_lat_pair_order() {
        let coord = LatLng::from([-122.4, 37.8]);
        assert_eq!(coord.lng, -122.4);
        assert_eq!(coord.lat, 37.8);
        assert!(coord.is_valid());
        assert!(!LatLng::new(95.0, 0.0).is_valid());
    }

    #[test]
    fn test_geo_point_conversion() {
        let point: geo_types::Point<f64> = LatLng::new(10.0, 20.0).into();
        assert_eq!(point.x(), 20.0);
        assert_eq!(point.y(), 10.0);
        assert_eq!(LatLng::from(point), LatLng::new(10.0, 20.0));
    }
}
