//! Built-in demo data for the events pipeline.
//!
//! Loaded once at startup and passed into the pipeline as explicit
//! arguments; nothing here is mutable module state.

use std::collections::HashMap;

use crate::types::CityEvent;

/// Default search radius for the nearby pipeline (meters)
pub const DEFAULT_RADIUS_M: u32 = 20_000;

/// Default number of supporters listed per actor
pub const DEFAULT_TOP_N: usize = 5;

/// Demo event schedule per city.
pub fn city_events() -> HashMap<String, Vec<CityEvent>> {
    let mut events = HashMap::new();

    events.insert(
        "Mumbai".to_string(),
        vec![
            CityEvent::new("MI vs CSK Match", "Wankhede Stadium", "April 28, 2025"),
            CityEvent::new("Siddhivinayak Darshan", "Siddhivinayak Temple", "April 29, 2025"),
            CityEvent::new("Marine Drive Food Festival", "Marine Drive", "April 30, 2025"),
        ],
    );
    events.insert(
        "Pune".to_string(),
        vec![
            CityEvent::new("Marathon for Charity", "Shivaji Nagar", "April 28, 2025"),
            CityEvent::new("Ganpati Utsav", "Dagadusheth Temple", "April 29, 2025"),
            CityEvent::new("Rock Music Concert", "Balewadi Stadium", "April 30, 2025"),
        ],
    );
    events.insert(
        "Delhi".to_string(),
        vec![
            CityEvent::new("Political Rally", "India Gate", "April 28, 2025"),
            CityEvent::new("International Trade Fair", "Pragati Maidan", "April 29, 2025"),
            CityEvent::new("Cultural Dance Show", "Siri Fort Auditorium", "April 30, 2025"),
        ],
    );
    events.insert(
        "Bangalore".to_string(),
        vec![
            CityEvent::new("Startup Conclave", "Nimhans Convention Centre", "April 28, 2025"),
            CityEvent::new("IPL Match RCB vs CSK", "Chinnaswamy Stadium", "April 29, 2025"),
            CityEvent::new("Food Carnival", "Indiranagar", "April 30, 2025"),
        ],
    );
    events.insert(
        "Chennai".to_string(),
        vec![
            CityEvent::new("Classical Music Night", "Music Academy", "April 28, 2025"),
            CityEvent::new("Marathon for Unity", "Marina Beach", "April 29, 2025"),
            CityEvent::new("CSK Fan Meet", "M.A. Chidambaram Stadium", "April 30, 2025"),
        ],
    );

    events
}

/// Venues with recorded past incidents.
pub fn past_incidents() -> HashMap<String, Vec<String>> {
    let mut incidents = HashMap::new();

    incidents.insert(
        "Wankhede Stadium".to_string(),
        vec!["Stampede during MI match".to_string()],
    );
    incidents.insert(
        "Siddhivinayak Temple".to_string(),
        vec!["Overcrowding during darshan".to_string()],
    );
    incidents.insert(
        "Marine Drive".to_string(),
        vec!["New Year overcrowding".to_string()],
    );
    incidents.insert("India Gate".to_string(), vec!["Protest chaos".to_string()]);
    incidents.insert(
        "Chinnaswamy Stadium".to_string(),
        vec!["Stampede after IPL match".to_string()],
    );
    incidents.insert(
        "Marina Beach".to_string(),
        vec!["Overcrowding during festivals".to_string()],
    );

    incidents
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_city_has_events() {
        let events = city_events();
        assert_eq!(events.len(), 5);
        for (city, list) in &events {
            assert!(!list.is_empty(), "{} has no events", city);
        }
    }

    #[test]
    fn incident_venues_appear_in_the_schedule() {
        let events = city_events();
        let venues: Vec<String> = events
            .values()
            .flatten()
            .map(|event| event.venue.clone())
            .collect();

        for venue in past_incidents().keys() {
            assert!(venues.contains(venue), "{} not in any schedule", venue);
        }
    }
}
