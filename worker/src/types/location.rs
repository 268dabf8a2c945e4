//! Location types

use serde::{Deserialize, Serialize};

/// Coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Check WGS84 ranges: lat in [-90, 90], lng in [-180, 180].
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

/// Result of resolving a place name
#[derive(Debug, Clone)]
pub struct ResolvedPlace {
    pub coordinates: Coordinates,
    /// Display name returned by the geocoder
    pub display_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_ranges_accepted() {
        assert!(Coordinates { lat: 17.53, lng: 73.52 }.is_valid());
        assert!(Coordinates { lat: -90.0, lng: 180.0 }.is_valid());
    }

    #[test]
    fn out_of_range_rejected() {
        assert!(!Coordinates { lat: 91.0, lng: 0.0 }.is_valid());
        assert!(!Coordinates { lat: 0.0, lng: -180.5 }.is_valid());
    }
}
