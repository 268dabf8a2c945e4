//! Configuration management

use anyhow::Result;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Nominatim API URL (geocoding)
    pub nominatim_url: String,

    /// Overpass API URL (point-of-interest queries)
    pub overpass_url: String,

    /// Geocoder backend: "mock" or "nominatim"
    pub geocoder_backend: String,

    /// Directory holding the relation CSV tables
    pub relations_dir: String,

    /// Recipient for incident alert emails (alerts are skipped when unset)
    pub alert_recipient: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let nominatim_url = std::env::var("NOMINATIM_URL")
            .unwrap_or_else(|_| "https://nominatim.openstreetmap.org".to_string());

        let overpass_url = std::env::var("OVERPASS_URL")
            .unwrap_or_else(|_| "https://overpass-api.de/api/interpreter".to_string());

        let geocoder_backend =
            std::env::var("GEOCODER_BACKEND").unwrap_or_else(|_| "nominatim".to_string());
        if !matches!(geocoder_backend.as_str(), "mock" | "nominatim") {
            anyhow::bail!(
                "GEOCODER_BACKEND must be 'mock' or 'nominatim' (got '{}')",
                geocoder_backend
            );
        }

        let relations_dir = std::env::var("RELATIONS_DIR").unwrap_or_else(|_| "data".to_string());

        let alert_recipient = std::env::var("ALERT_EMAIL_TO").ok().filter(|v| !v.is_empty());
        if let Some(recipient) = &alert_recipient {
            // Misconfigured alerting should fail at startup, not mid-pipeline
            if !recipient.contains('@') {
                anyhow::bail!("ALERT_EMAIL_TO is not an email address: '{}'", recipient);
            }
        }

        Ok(Self {
            nominatim_url,
            overpass_url,
            geocoder_backend,
            relations_dir,
            alert_recipient,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[ignore] // requires --test-threads=1 due to env var race
    fn test_config_defaults_to_public_endpoints() {
        std::env::remove_var("NOMINATIM_URL");
        std::env::remove_var("OVERPASS_URL");
        std::env::remove_var("GEOCODER_BACKEND");
        std::env::remove_var("ALERT_EMAIL_TO");

        let config = Config::from_env().unwrap();
        assert_eq!(config.nominatim_url, "https://nominatim.openstreetmap.org");
        assert_eq!(config.overpass_url, "https://overpass-api.de/api/interpreter");
        assert_eq!(config.geocoder_backend, "nominatim");
        assert!(config.alert_recipient.is_none());
    }

    #[test]
    fn test_config_overpass_url_uses_local_when_set() {
        std::env::set_var("OVERPASS_URL", "http://localhost:12345/api/interpreter");

        let config = Config::from_env().unwrap();
        assert_eq!(
            config.overpass_url,
            "http://localhost:12345/api/interpreter"
        );

        // Cleanup
        std::env::remove_var("OVERPASS_URL");
    }

    #[test]
    #[ignore] // requires --test-threads=1 due to env var race
    fn test_config_rejects_unknown_geocoder_backend() {
        std::env::set_var("GEOCODER_BACKEND", "carrier-pigeon");

        let result = Config::from_env();
        assert!(result.is_err());

        std::env::remove_var("GEOCODER_BACKEND");
    }

    #[test]
    #[ignore] // requires --test-threads=1 due to env var race
    fn test_config_rejects_bad_alert_recipient() {
        std::env::set_var("ALERT_EMAIL_TO", "not-an-address");

        let result = Config::from_env();
        assert!(result.is_err());

        std::env::remove_var("ALERT_EMAIL_TO");
    }
}
