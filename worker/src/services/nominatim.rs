//! Nominatim geocoding client

use std::time::Duration;

use serde::Deserialize;

use crate::error::ServiceError;
use crate::types::{Coordinates, ResolvedPlace};

/// Nominatim API response row
#[derive(Debug, Deserialize)]
pub struct NominatimResult {
    pub lat: String,
    pub lon: String,
    pub display_name: String,
}

/// Nominatim geocoding client
pub struct NominatimClient {
    base_url: String,
    client: reqwest::Client,
}

impl NominatimClient {
    /// Create a client with the default 10 second request timeout
    pub fn new(base_url: &str) -> Self {
        Self::with_timeout(base_url, Duration::from_secs(10))
    }

    /// Create a client with a caller-supplied request timeout
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .user_agent("SurakshaWorker/1.0 (emergency response)")
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Resolve a free-form place name to coordinates.
    ///
    /// The optional hint is appended to the query to disambiguate, e.g. a
    /// country for towns or a city for venue lookups. `Ok(None)` means the
    /// service had no match for the query.
    pub async fn search(
        &self,
        place: &str,
        hint: Option<&str>,
    ) -> Result<Option<ResolvedPlace>, ServiceError> {
        let query = match hint {
            Some(hint) => format!("{}, {}", place, hint),
            None => place.to_string(),
        };

        let url = format!(
            "{}/search?q={}&format=json&limit=1",
            self.base_url,
            urlencoding::encode(&query)
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ServiceError::Recoverable(format!("geocoding request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(ServiceError::Recoverable(format!(
                "geocoding service returned {}",
                response.status()
            )));
        }

        let results: Vec<NominatimResult> = response
            .json()
            .await
            .map_err(|e| ServiceError::Recoverable(format!("invalid geocoding response: {e}")))?;

        let Some(result) = results.into_iter().next() else {
            return Ok(None);
        };

        let lat: f64 = result
            .lat
            .parse()
            .map_err(|_| ServiceError::Recoverable(format!("invalid latitude '{}'", result.lat)))?;
        let lng: f64 = result
            .lon
            .parse()
            .map_err(|_| ServiceError::Recoverable(format!("invalid longitude '{}'", result.lon)))?;

        let coordinates = Coordinates { lat, lng };
        if !coordinates.is_valid() {
            return Err(ServiceError::Recoverable(format!(
                "coordinates out of range: {}, {}",
                lat, lng
            )));
        }

        Ok(Some(ResolvedPlace {
            coordinates,
            display_name: result.display_name,
        }))
    }
}
