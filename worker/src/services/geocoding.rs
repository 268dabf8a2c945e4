//! Geocoding abstraction layer with safety features
//!
//! Place-name resolution sits behind the `Geocoder` trait so pipelines can
//! run against:
//! - MockGeocoder for tests and development (deterministic, no network)
//! - RateLimitedNominatimGeocoder for production (strict rate limiting,
//!   circuit breaker against a failing upstream)
//!
//! Backend selection via the GEOCODER_BACKEND configuration value:
//! - "mock" → MockGeocoder
//! - "nominatim" → RateLimitedNominatimGeocoder

use async_trait::async_trait;

use crate::error::ServiceError;
use crate::types::{Coordinates, ResolvedPlace};

/// Geocoder trait - abstraction for all geocoding implementations
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Resolve a place name to coordinates.
    ///
    /// `Ok(None)` means the service found no match; callers must branch on
    /// it before using the coordinates. Transient failures surface as
    /// `ServiceError::Recoverable`; no retry is performed here, that policy
    /// belongs to the caller.
    async fn resolve(
        &self,
        place: &str,
        country_hint: Option<&str>,
    ) -> Result<Option<ResolvedPlace>, ServiceError>;

    /// Get the name of this geocoder implementation
    fn name(&self) -> &'static str;
}

// ==========================================================================
// MockGeocoder Implementation
// ==========================================================================

/// Mock geocoder for testing - returns deterministic fake coordinates
pub struct MockGeocoder;

impl MockGeocoder {
    pub fn new() -> Self {
        Self
    }

    /// Generate deterministic coordinates from a hash of the query.
    /// Coordinates stay well inside India, away from borders and open sea.
    fn hash_to_coordinates(place: &str, country_hint: Option<&str>) -> Coordinates {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        place.hash(&mut hasher);
        country_hint.hash(&mut hasher);
        let hash = hasher.finish();

        // Inner India bounds (full extent: lat 8.0-35.0, lng 68.0-97.0)
        const LAT_MIN: f64 = 10.0;
        const LAT_MAX: f64 = 28.0;
        const LNG_MIN: f64 = 72.0;
        const LNG_MAX: f64 = 88.0;

        let lat_range = LAT_MAX - LAT_MIN;
        let lng_range = LNG_MAX - LNG_MIN;

        // Use different parts of the hash for lat and lng
        let lat_normalized = ((hash >> 32) as f64) / (u32::MAX as f64);
        let lng_normalized = ((hash & 0xFFFFFFFF) as f64) / (u32::MAX as f64);

        Coordinates {
            lat: LAT_MIN + (lat_normalized * lat_range),
            lng: LNG_MIN + (lng_normalized * lng_range),
        }
    }
}

impl Default for MockGeocoder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Geocoder for MockGeocoder {
    async fn resolve(
        &self,
        place: &str,
        country_hint: Option<&str>,
    ) -> Result<Option<ResolvedPlace>, ServiceError> {
        let coordinates = Self::hash_to_coordinates(place, country_hint);

        let display_name = match country_hint {
            Some(hint) => format!("{}, {}", place, hint),
            None => place.to_string(),
        };

        Ok(Some(ResolvedPlace {
            coordinates,
            display_name,
        }))
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

// ==========================================================================
// RateLimiter Implementation
// ==========================================================================

use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

/// Rate limiter that enforces minimum interval between calls
pub struct RateLimiter {
    last_call: Arc<Mutex<Option<Instant>>>,
    min_interval: Duration,
}

impl RateLimiter {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            last_call: Arc::new(Mutex::new(None)),
            min_interval,
        }
    }

    /// Wait until it's safe to make another call
    pub async fn wait(&self) {
        let mut last = self.last_call.lock().await;

        if let Some(last_time) = *last {
            let elapsed = last_time.elapsed();
            if elapsed < self.min_interval {
                let wait_time = self.min_interval - elapsed;
                drop(last); // Release lock while sleeping
                tokio::time::sleep(wait_time).await;
                last = self.last_call.lock().await;
            }
        }

        *last = Some(Instant::now());
    }
}

// ==========================================================================
// CircuitBreaker Implementation
// ==========================================================================

use std::sync::atomic::{AtomicU32, Ordering};

/// Circuit breaker to prevent hammering a failing service
pub struct CircuitBreaker {
    failure_count: AtomicU32,
    threshold: u32,
    last_failure: std::sync::Mutex<Option<Instant>>,
    recovery_time: Duration,
}

impl CircuitBreaker {
    pub fn new(threshold: u32, recovery_time: Duration) -> Self {
        Self {
            failure_count: AtomicU32::new(0),
            threshold,
            last_failure: std::sync::Mutex::new(None),
            recovery_time,
        }
    }

    /// Check if circuit is open (blocking calls)
    pub fn is_open(&self) -> bool {
        let count = self.failure_count.load(Ordering::Relaxed);
        if count >= self.threshold {
            if let Ok(last) = self.last_failure.lock() {
                if let Some(last_time) = *last {
                    if last_time.elapsed() >= self.recovery_time {
                        return false; // Allow retry (half-open)
                    }
                }
            }
            return true;
        }
        false
    }

    /// Record a failure
    pub fn record_failure(&self) {
        self.failure_count.fetch_add(1, Ordering::Relaxed);
        if let Ok(mut last) = self.last_failure.lock() {
            *last = Some(Instant::now());
        }
    }

    /// Record a success (resets failure count)
    pub fn record_success(&self) {
        self.failure_count.store(0, Ordering::Relaxed);
    }
}

// ==========================================================================
// RateLimitedNominatimGeocoder Implementation
// ==========================================================================

use crate::services::nominatim::NominatimClient;
use tracing::{error, warn};

/// Default rate limit interval (1.5 seconds - Nominatim allows 1 req/s)
const DEFAULT_RATE_LIMIT_MS: u64 = 1500;

/// Default circuit breaker threshold (3 failures)
const DEFAULT_CIRCUIT_BREAKER_THRESHOLD: u32 = 3;

/// Default circuit breaker recovery time (5 minutes)
const DEFAULT_CIRCUIT_BREAKER_RECOVERY_SECS: u64 = 300;

/// Default per-request timeout passed to the HTTP client
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Rate-limited Nominatim geocoder with circuit breaker protection
pub struct RateLimitedNominatimGeocoder {
    client: NominatimClient,
    rate_limiter: RateLimiter,
    /// Circuit breaker - pub(crate) for testing
    pub(crate) circuit_breaker: CircuitBreaker,
}

impl RateLimitedNominatimGeocoder {
    /// Create a new rate-limited Nominatim geocoder with default settings
    pub fn new(base_url: &str) -> Self {
        Self::with_config(
            base_url,
            Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            Duration::from_millis(DEFAULT_RATE_LIMIT_MS),
            DEFAULT_CIRCUIT_BREAKER_THRESHOLD,
            Duration::from_secs(DEFAULT_CIRCUIT_BREAKER_RECOVERY_SECS),
        )
    }

    /// Create with custom configuration
    pub fn with_config(
        base_url: &str,
        request_timeout: Duration,
        rate_limit_interval: Duration,
        circuit_breaker_threshold: u32,
        circuit_breaker_recovery: Duration,
    ) -> Self {
        Self {
            client: NominatimClient::with_timeout(base_url, request_timeout),
            rate_limiter: RateLimiter::new(rate_limit_interval),
            circuit_breaker: CircuitBreaker::new(
                circuit_breaker_threshold,
                circuit_breaker_recovery,
            ),
        }
    }
}

#[async_trait]
impl Geocoder for RateLimitedNominatimGeocoder {
    async fn resolve(
        &self,
        place: &str,
        country_hint: Option<&str>,
    ) -> Result<Option<ResolvedPlace>, ServiceError> {
        if self.circuit_breaker.is_open() {
            warn!("Circuit breaker is open, rejecting geocoding request");
            return Err(ServiceError::Recoverable(
                "geocoding circuit breaker open".to_string(),
            ));
        }

        self.rate_limiter.wait().await;

        match self.client.search(place, country_hint).await {
            Ok(result) => {
                // No match is still a healthy upstream
                self.circuit_breaker.record_success();
                Ok(result)
            }
            Err(e) => {
                self.circuit_breaker.record_failure();
                error!("Geocoding failed: {}", e);
                Err(e)
            }
        }
    }

    fn name(&self) -> &'static str {
        "nominatim"
    }
}

// ==========================================================================
// Factory function
// ==========================================================================

/// Create a geocoder for the configured backend ("mock" or "nominatim")
pub fn create_geocoder(backend: &str, nominatim_url: &str) -> Box<dyn Geocoder> {
    match backend {
        "nominatim" => {
            tracing::info!("Using RateLimitedNominatimGeocoder");
            Box::new(RateLimitedNominatimGeocoder::new(nominatim_url))
        }
        "mock" => {
            tracing::info!("Using MockGeocoder");
            Box::new(MockGeocoder::new())
        }
        _ => {
            tracing::warn!("Unknown geocoder backend '{}', using mock", backend);
            Box::new(MockGeocoder::new())
        }
    }
}
