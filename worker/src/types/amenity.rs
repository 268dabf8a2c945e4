//! Emergency amenity types

use serde::{Deserialize, Serialize};

use super::Coordinates;

/// Amenity category queried against the point-of-interest index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Amenity {
    Hospital,
    Police,
    Ngo,
}

impl Amenity {
    /// Every category the emergency lookup fans out to, in output order.
    pub const ALL: [Amenity; 3] = [Amenity::Hospital, Amenity::Police, Amenity::Ngo];

    pub const fn as_str(self) -> &'static str {
        match self {
            Amenity::Hospital => "hospital",
            Amenity::Police => "police",
            Amenity::Ngo => "ngo",
        }
    }
}

/// Raw point as returned by the index; name and phone tags may be absent
#[derive(Debug, Clone)]
pub struct PoiPoint {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub location: Coordinates,
}

/// One row of the emergency contact log.
///
/// Always complete: missing tags are substituted with placeholders before a
/// record is built. Field renames match the exported CSV column layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Phone")]
    pub phone: String,
    #[serde(rename = "Amenity")]
    pub amenity: Amenity,
    #[serde(rename = "Latitude")]
    pub lat: f64,
    #[serde(rename = "Longitude")]
    pub lng: f64,
    #[serde(rename = "Distance (km)")]
    pub distance_km: f64,
}
