//! Support score calculation
//!
//! Ranks third countries by their estimated alignment toward each of two
//! actors, from alliance, trade and conflict signals.

use crate::services::relations::RelationTable;
use crate::types::{CountryPair, SupportComparison, SupportScore};

/// Fixed trade normalization divisor (USD billions)
const TRADE_NORMALIZER: f64 = 700.0;

/// Score of `country` toward `actor`. An absent pair scores 0.
///
/// Scores are intentionally unbounded: severity dominance is expressed
/// through magnitude, not a normalized probability.
pub fn support_score(relations: &RelationTable, country: &str, actor: &str) -> f64 {
    match relations.get(&CountryPair::new(country, actor)) {
        Some(relation) => {
            0.5 * relation.alliance_strength
                + 0.3 * (relation.trade_volume_usd_billion / TRADE_NORMALIZER)
                - 0.2 * relation.conflict_severity
        }
        None => 0.0,
    }
}

/// Rank every third country by support toward each actor.
///
/// The candidate pool is every country appearing in any pair, minus the two
/// actors. Each list is stable-sorted descending by score and truncated to
/// `top_n`; candidates iterate in lexicographic order, so ties keep a
/// deterministic order across runs.
pub fn compute_support(
    relations: &RelationTable,
    actor_a: &str,
    actor_b: &str,
    top_n: usize,
) -> SupportComparison {
    let mut supports_a = Vec::new();
    let mut supports_b = Vec::new();

    for country in relations.countries() {
        if country == actor_a || country == actor_b {
            continue;
        }

        supports_a.push(SupportScore {
            country: country.clone(),
            score: support_score(relations, &country, actor_a),
        });
        supports_b.push(SupportScore {
            score: support_score(relations, &country, actor_b),
            country,
        });
    }

    rank(&mut supports_a, top_n);
    rank(&mut supports_b, top_n);

    SupportComparison {
        actor_a: actor_a.to_string(),
        actor_b: actor_b.to_string(),
        supports_a,
        supports_b,
    }
}

fn rank(scores: &mut Vec<SupportScore>, top_n: usize) {
    // sort_by is stable, so equal scores keep candidate order
    scores.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    scores.truncate(top_n);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worked_example_scores_0_41() {
        let mut relations = RelationTable::default();
        relations.set_alliance("France", "India", 0.8);
        relations.set_trade("France", "India", 70.0);
        relations.set_conflict("France", "India", 0.1);

        let score = support_score(&relations, "France", "India");

        // 0.5*0.8 + 0.3*(70/700) - 0.2*0.1 = 0.41
        assert!((score - 0.41).abs() < 1e-9);
    }

    #[test]
    fn absent_pair_scores_zero() {
        let relations = RelationTable::default();

        assert_eq!(support_score(&relations, "Nepal", "India"), 0.0);
        assert_eq!(support_score(&relations, "Nepal", "Pakistan"), 0.0);
    }

    #[test]
    fn score_lookup_is_order_independent() {
        let mut relations = RelationTable::default();
        relations.set_alliance("India", "France", 0.8);

        let forward = support_score(&relations, "France", "India");
        let backward = support_score(&relations, "India", "France");

        assert_eq!(forward, backward);
    }

    #[test]
    fn actors_are_excluded_from_candidates() {
        let mut relations = RelationTable::default();
        relations.set_alliance("India", "France", 0.8);
        relations.set_alliance("Pakistan", "China", 0.9);

        let comparison = compute_support(&relations, "India", "Pakistan", 10);

        for entry in comparison.supports_a.iter().chain(&comparison.supports_b) {
            assert_ne!(entry.country, "India");
            assert_ne!(entry.country, "Pakistan");
        }
        assert_eq!(comparison.supports_a.len(), 2); // China, France
    }

    #[test]
    fn rankings_truncate_to_top_n() {
        let mut relations = RelationTable::default();
        for (i, country) in [
            "Australia", "Brazil", "Canada", "Egypt", "France", "Germany",
            "Israel", "Japan", "Kenya", "Mexico", "Norway", "Oman",
        ]
        .iter()
        .enumerate()
        {
            relations.set_alliance(country, "India", 0.1 * (i as f64 + 1.0));
        }

        let comparison = compute_support(&relations, "India", "Pakistan", 5);

        assert_eq!(comparison.supports_a.len(), 5);
        for window in comparison.supports_a.windows(2) {
            assert!(window[0].score >= window[1].score);
        }
        // Strongest ally first
        assert_eq!(comparison.supports_a[0].country, "Oman");
    }

    #[test]
    fn empty_table_yields_empty_rankings() {
        let relations = RelationTable::default();

        let comparison = compute_support(&relations, "India", "Pakistan", 5);

        assert!(comparison.supports_a.is_empty());
        assert!(comparison.supports_b.is_empty());
    }

    #[test]
    fn conflict_heavy_relation_can_go_negative() {
        let mut relations = RelationTable::default();
        relations.set_conflict("China", "India", 0.9);

        let score = support_score(&relations, "China", "India");

        assert!(score < 0.0);
        assert!((score - (-0.18)).abs() < 1e-9);
    }
}
