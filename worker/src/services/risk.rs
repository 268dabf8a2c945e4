//! Event risk classification
//!
//! Keyword rules are checked in a fixed order and the first match wins, so
//! an event name hitting several rules always lands on the earliest one.

use std::collections::HashMap;

use rand::Rng;

use crate::types::{EventAssessment, EventType, RiskLevel};

/// Probability that a Moderate assessment is nudged up to High
const ESCALATION_PROBABILITY: f64 = 0.10;

/// Ordered classification rules; the order is part of the contract.
const CLASSIFICATION_RULES: &[(EventType, &[&str])] = &[
    (EventType::CricketMatch, &["cricket", "match"]),
    (EventType::ReligiousGathering, &["darshan", "temple", "pooja"]),
    (EventType::MusicConcert, &["music", "concert"]),
    (EventType::PoliticalRally, &["rally", "protest"]),
    (EventType::Marathon, &["marathon", "run"]),
    (EventType::FoodFestival, &["food", "carnival", "festival"]),
    (EventType::TradeFair, &["trade", "fair"]),
    (EventType::CulturalShow, &["dance", "show"]),
];

/// Classify an event name by case-insensitive keyword match.
pub fn classify_event(name: &str) -> EventType {
    let name = name.to_lowercase();

    for (event_type, keywords) in CLASSIFICATION_RULES {
        if keywords.iter().any(|keyword| name.contains(keyword)) {
            return *event_type;
        }
    }

    EventType::Other
}

/// Base risk level per event type
pub const fn base_risk(event_type: EventType) -> RiskLevel {
    match event_type {
        EventType::CricketMatch | EventType::PoliticalRally => RiskLevel::High,
        EventType::ReligiousGathering
        | EventType::MusicConcert
        | EventType::Marathon
        | EventType::TradeFair => RiskLevel::Moderate,
        EventType::FoodFestival | EventType::CulturalShow | EventType::Other => RiskLevel::Low,
    }
}

/// Random fluctuation: with fixed probability a Moderate outcome escalates
/// to High. The caller supplies the random source so reports can be
/// replayed with a seed.
pub fn nudge_risk<R: Rng>(risk: RiskLevel, rng: &mut R) -> RiskLevel {
    if rng.gen::<f64>() < ESCALATION_PROBABILITY && risk == RiskLevel::Moderate {
        RiskLevel::High
    } else {
        risk
    }
}

/// Assess one event: classify it, look up past incidents for the venue,
/// escalate one step when the venue has history, then apply the nudge.
pub fn assess_event<R: Rng>(
    name: &str,
    venue: &str,
    incidents: &HashMap<String, Vec<String>>,
    rng: &mut R,
) -> EventAssessment {
    let event_type = classify_event(name);
    let past_incidents = incidents.get(venue).cloned().unwrap_or_default();

    let mut risk = base_risk(event_type);
    if !past_incidents.is_empty() {
        risk = risk.escalate();
    }
    let risk = nudge_risk(risk, rng);

    EventAssessment {
        event_type,
        risk,
        past_incidents,
    }
}

/// Suggested precautions for a final risk level
pub const fn precautions(risk: RiskLevel) -> &'static str {
    match risk {
        RiskLevel::High => "Increase police presence, keep emergency exits clear, deploy drone surveillance.",
        RiskLevel::Moderate => "Schedule extra staff and manage entry gates.",
        RiskLevel::Low => "Basic security is sufficient.",
    }
}
