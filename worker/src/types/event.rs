//! Event risk types

use serde::{Deserialize, Serialize};

/// Event category derived from the event name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    CricketMatch,
    ReligiousGathering,
    MusicConcert,
    PoliticalRally,
    Marathon,
    FoodFestival,
    TradeFair,
    CulturalShow,
    Other,
}

impl EventType {
    pub const fn as_str(self) -> &'static str {
        match self {
            EventType::CricketMatch => "Cricket Match",
            EventType::ReligiousGathering => "Religious Gathering",
            EventType::MusicConcert => "Music Concert",
            EventType::PoliticalRally => "Political Rally",
            EventType::Marathon => "Marathon",
            EventType::FoodFestival => "Food Festival",
            EventType::TradeFair => "Trade Fair",
            EventType::CulturalShow => "Cultural Show",
            EventType::Other => "Other",
        }
    }
}

/// Predicted crowd risk level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub const fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
        }
    }

    /// One step up; High saturates.
    pub const fn escalate(self) -> Self {
        match self {
            RiskLevel::Low => RiskLevel::Moderate,
            RiskLevel::Moderate => RiskLevel::High,
            RiskLevel::High => RiskLevel::High,
        }
    }
}

/// One scheduled event in a city
#[derive(Debug, Clone)]
pub struct CityEvent {
    pub name: String,
    pub venue: String,
    pub date: String,
}

impl CityEvent {
    pub fn new(name: &str, venue: &str, date: &str) -> Self {
        Self {
            name: name.to_string(),
            venue: venue.to_string(),
            date: date.to_string(),
        }
    }
}

/// Outcome of assessing a single event
#[derive(Debug, Clone)]
pub struct EventAssessment {
    pub event_type: EventType,
    pub risk: RiskLevel,
    pub past_incidents: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escalate_steps_up_and_saturates() {
        assert_eq!(RiskLevel::Low.escalate(), RiskLevel::Moderate);
        assert_eq!(RiskLevel::Moderate.escalate(), RiskLevel::High);
        assert_eq!(RiskLevel::High.escalate(), RiskLevel::High);
    }

    #[test]
    fn risk_levels_are_ordered() {
        assert!(RiskLevel::Low < RiskLevel::Moderate);
        assert!(RiskLevel::Moderate < RiskLevel::High);
    }
}
