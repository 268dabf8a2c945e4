//! City event risk report pipeline
//!
//! For each requested city: classify every scheduled event, derive its risk
//! level, geocode the venue, print the assessment. A city without a
//! schedule or a venue that fails to geocode only loses its own branch.

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::warn;

use crate::config::Config;
use crate::defaults;
use crate::services::{geocoding, risk};

pub struct EventsArgs {
    pub cities: Vec<String>,
    pub seed: Option<u64>,
}

pub async fn run(config: &Config, args: EventsArgs) -> Result<()> {
    let schedule = defaults::city_events();
    let incidents = defaults::past_incidents();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let geocoder = geocoding::create_geocoder(&config.geocoder_backend, &config.nominatim_url);

    let cities: Vec<String> = if args.cities.is_empty() {
        let mut names: Vec<String> = schedule.keys().cloned().collect();
        names.sort();
        names
    } else {
        args.cities.iter().map(|city| normalize_city(city)).collect()
    };

    for city in &cities {
        let Some(events) = schedule.get(city) else {
            warn!("No events configured for {}, skipping", city);
            continue;
        };

        println!("Analyzing {} events...", city);

        for event in events {
            let assessment = risk::assess_event(&event.name, &event.venue, &incidents, &mut rng);

            // Venue coordinates are informational; a geocoding failure
            // only affects this event
            let coordinates = match geocoder.resolve(&event.venue, Some(city.as_str())).await {
                Ok(Some(resolved)) => Some(resolved.coordinates),
                Ok(None) => None,
                Err(e) => {
                    warn!("Could not geocode {}: {}", event.venue, e);
                    None
                }
            };

            println!("Event: {}", event.name);
            println!("    Venue: {}", event.venue);
            println!("    Date: {}", event.date);
            println!("    Type: {}", assessment.event_type.as_str());
            println!("    Predicted risk: {}", assessment.risk.as_str());
            if let Some(coordinates) = coordinates {
                println!(
                    "    Location: {:.4}, {:.4}",
                    coordinates.lat, coordinates.lng
                );
            }
            if !assessment.past_incidents.is_empty() {
                println!(
                    "    Past incidents: {}",
                    assessment.past_incidents.join("; ")
                );
            }
            println!("    Precautions: {}", risk::precautions(assessment.risk));
            println!("{}", "-".repeat(60));
        }
    }

    Ok(())
}

/// "mumbai " and "MUMBAI" both select the configured "Mumbai" schedule
fn normalize_city(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_city_capitalizes_and_trims() {
        assert_eq!(normalize_city(" mumbai "), "Mumbai");
        assert_eq!(normalize_city("DELHI"), "Delhi");
        assert_eq!(normalize_city("Pune"), "Pune");
        assert_eq!(normalize_city(""), "");
    }
}
