//! Nearby emergency amenity lookup
//!
//! Turns raw index points into complete contact records: placeholder name
//! and phone where tags are missing, great-circle distance rounded to two
//! decimals, index order preserved. Callers wanting nearest-first must sort
//! the result themselves.

use tracing::warn;

use crate::error::ServiceError;
use crate::services::geo;
use crate::services::overpass::PoiIndex;
use crate::types::{Amenity, Coordinates, ServiceRecord};

/// Placeholder for points the index returns without a name tag
pub const UNNAMED: &str = "Unnamed";

/// Placeholder for points without a phone tag
pub const NO_PHONE: &str = "Not Available";

/// Find points of one amenity category around `origin`.
///
/// Every returned record is complete; order is exactly the index's order.
pub async fn find_nearby(
    index: &dyn PoiIndex,
    origin: Coordinates,
    amenity: Amenity,
    radius_m: u32,
) -> Result<Vec<ServiceRecord>, ServiceError> {
    let points = index.query(origin, amenity, radius_m).await?;

    Ok(points
        .into_iter()
        .map(|point| ServiceRecord {
            name: point.name.unwrap_or_else(|| UNNAMED.to_string()),
            phone: point.phone.unwrap_or_else(|| NO_PHONE.to_string()),
            amenity,
            lat: point.location.lat,
            lng: point.location.lng,
            distance_km: geo::rounded_distance_km(&origin, &point.location),
        })
        .collect())
}

/// Query every amenity category concurrently and concatenate the results in
/// hospital, police, ngo order. No deduplication across categories.
///
/// A failed category aborts only that branch: it is logged and skipped while
/// the sibling categories still contribute. Callers that need the strict
/// error use `find_nearby` per category.
pub async fn gather_contacts(
    index: &dyn PoiIndex,
    origin: Coordinates,
    radius_m: u32,
) -> Vec<ServiceRecord> {
    let [hospital, police, ngo] = Amenity::ALL;

    let (hospitals, police_stations, ngos) = futures::join!(
        find_nearby(index, origin, hospital, radius_m),
        find_nearby(index, origin, police, radius_m),
        find_nearby(index, origin, ngo, radius_m),
    );

    let mut contacts = Vec::new();
    for (amenity, result) in [
        (hospital, hospitals),
        (police, police_stations),
        (ngo, ngos),
    ] {
        match result {
            Ok(records) => contacts.extend(records),
            Err(e) => warn!("{} lookup failed, skipping category: {}", amenity.as_str(), e),
        }
    }

    contacts
}
