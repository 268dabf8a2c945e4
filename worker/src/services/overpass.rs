//! Overpass point-of-interest client
//!
//! One HTTP POST per query: Overpass QL carried in the `data` form field,
//! JSON out. Only the `name` and `phone` tags of each node are consumed.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::ServiceError;
use crate::types::{Amenity, Coordinates, PoiPoint};

/// Abstraction over the point-of-interest index.
#[async_trait]
pub trait PoiIndex: Send + Sync {
    /// Query one amenity category within a circular radius around `origin`.
    ///
    /// Zero matches is `Ok` with an empty vector; an unreachable endpoint or
    /// a malformed response is `ServiceError::QueryFailed`. The two are
    /// never conflated.
    async fn query(
        &self,
        origin: Coordinates,
        amenity: Amenity,
        radius_m: u32,
    ) -> Result<Vec<PoiPoint>, ServiceError>;
}

/// Overpass API response
#[derive(Debug, Deserialize)]
struct OverpassResponse {
    #[serde(default)]
    elements: Vec<OverpassElement>,
}

#[derive(Debug, Deserialize)]
struct OverpassElement {
    lat: f64,
    lon: f64,
    #[serde(default)]
    tags: HashMap<String, String>,
}

/// Overpass API client
pub struct OverpassClient {
    base_url: String,
    client: reqwest::Client,
}

impl OverpassClient {
    pub fn new(base_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .user_agent("SurakshaWorker/1.0 (emergency response)")
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.to_string(),
            client,
        }
    }

    fn build_query(origin: Coordinates, amenity: Amenity, radius_m: u32) -> String {
        format!(
            "[out:json];\nnode\n  [amenity={}]\n  (around:{},{},{});\nout;",
            amenity.as_str(),
            radius_m,
            origin.lat,
            origin.lng
        )
    }

    fn parse_response(body: OverpassResponse) -> Vec<PoiPoint> {
        body.elements
            .into_iter()
            .map(|element| PoiPoint {
                name: element.tags.get("name").cloned(),
                phone: element.tags.get("phone").cloned(),
                location: Coordinates {
                    lat: element.lat,
                    lng: element.lon,
                },
            })
            .collect()
    }
}

#[async_trait]
impl PoiIndex for OverpassClient {
    async fn query(
        &self,
        origin: Coordinates,
        amenity: Amenity,
        radius_m: u32,
    ) -> Result<Vec<PoiPoint>, ServiceError> {
        let query = Self::build_query(origin, amenity, radius_m);

        let response = self
            .client
            .post(&self.base_url)
            .form(&[("data", query.as_str())])
            .send()
            .await
            .map_err(|e| ServiceError::QueryFailed(format!("overpass request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(ServiceError::QueryFailed(format!(
                "overpass returned {}",
                response.status()
            )));
        }

        let body: OverpassResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::QueryFailed(format!("invalid overpass response: {e}")))?;

        Ok(Self::parse_response(body))
    }
}

// ==========================================================================
// StaticPoiIndex - in-memory index for tests and offline runs
// ==========================================================================

/// Serves pre-loaded points per category; categories without points return
/// an empty vector.
#[derive(Default)]
pub struct StaticPoiIndex {
    points: HashMap<Amenity, Vec<PoiPoint>>,
}

impl StaticPoiIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_points(mut self, amenity: Amenity, points: Vec<PoiPoint>) -> Self {
        self.points.insert(amenity, points);
        self
    }
}

#[async_trait]
impl PoiIndex for StaticPoiIndex {
    async fn query(
        &self,
        _origin: Coordinates,
        amenity: Amenity,
        _radius_m: u32,
    ) -> Result<Vec<PoiPoint>, ServiceError> {
        Ok(self.points.get(&amenity).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_text_targets_amenity_and_radius() {
        let origin = Coordinates { lat: 17.5320, lng: 73.5209 };

        let query = OverpassClient::build_query(origin, Amenity::Hospital, 20_000);

        assert!(query.starts_with("[out:json];"));
        assert!(query.contains("[amenity=hospital]"));
        assert!(query.contains("around:20000,17.532,73.5209"));
    }

    #[test]
    fn response_elements_parse_with_missing_tags() {
        let payload = r#"{
            "elements": [
                {"lat": 17.54, "lon": 73.51, "tags": {"name": "District Hospital", "phone": "+91 2355 252"}},
                {"lat": 17.55, "lon": 73.50, "tags": {"amenity": "hospital"}},
                {"lat": 17.56, "lon": 73.49}
            ]
        }"#;

        let body: OverpassResponse = serde_json::from_str(payload).unwrap();
        let points = OverpassClient::parse_response(body);

        assert_eq!(points.len(), 3);
        assert_eq!(points[0].name.as_deref(), Some("District Hospital"));
        assert_eq!(points[0].phone.as_deref(), Some("+91 2355 252"));
        assert!(points[1].name.is_none());
        assert!(points[2].name.is_none());
        assert!(points[2].phone.is_none());
    }

    #[test]
    fn empty_payload_parses_to_no_points() {
        let body: OverpassResponse = serde_json::from_str("{}").unwrap();
        assert!(OverpassClient::parse_response(body).is_empty());
    }

    #[tokio::test]
    async fn static_index_returns_empty_for_unknown_category() {
        let index = StaticPoiIndex::new();
        let origin = Coordinates { lat: 17.5, lng: 73.5 };

        let points = index.query(origin, Amenity::Ngo, 20_000).await.unwrap();

        assert!(points.is_empty());
    }
}
