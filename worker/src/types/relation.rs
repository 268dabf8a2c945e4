//! Country relation types

use serde::{Deserialize, Serialize};

/// Canonical unordered country pair.
///
/// `(A, B)` and `(B, A)` build the same pair: the two identifiers are stored
/// lexicographically sorted, so the pair is usable as a join key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CountryPair {
    first: String,
    second: String,
}

impl CountryPair {
    pub fn new(a: &str, b: &str) -> Self {
        if a <= b {
            Self {
                first: a.to_string(),
                second: b.to_string(),
            }
        } else {
            Self {
                first: b.to_string(),
                second: a.to_string(),
            }
        }
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn second(&self) -> &str {
        &self.second
    }
}

/// Joined feature row for one country pair.
///
/// Built once from the three per-feature tables; a feature missing from its
/// table stays at 0.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PairRelation {
    pub alliance_strength: f64,
    pub conflict_severity: f64,
    pub trade_volume_usd_billion: f64,
}

/// Support score of one country toward an actor
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportScore {
    pub country: String,
    pub score: f64,
}

/// Ranked supporter lists for the two actors of a conflict
#[derive(Debug, Clone)]
pub struct SupportComparison {
    pub actor_a: String,
    pub actor_b: String,
    pub supports_a: Vec<SupportScore>,
    pub supports_b: Vec<SupportScore>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_is_order_independent() {
        assert_eq!(CountryPair::new("India", "France"), CountryPair::new("France", "India"));
    }

    #[test]
    fn pair_canonicalization_is_idempotent() {
        let pair = CountryPair::new("Russia", "China");
        let again = CountryPair::new(pair.first(), pair.second());
        assert_eq!(pair, again);
    }

    #[test]
    fn pair_sorts_lexicographically() {
        let pair = CountryPair::new("India", "France");
        assert_eq!(pair.first(), "France");
        assert_eq!(pair.second(), "India");
    }
}
