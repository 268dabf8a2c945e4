//! Actor extraction from free-text conflict statements
//!
//! Matching runs against the lexicon of countries present in the relation
//! tables, in token order; the first two distinct hits become the actors.

use std::collections::BTreeSet;

use crate::error::ServiceError;

/// Pull the first two distinct known countries out of a statement.
///
/// Fewer than two hits is `ServiceError::InputMalformed`: the statement
/// cannot drive the support pipeline and only this input is aborted.
pub fn extract_actors(
    statement: &str,
    lexicon: &BTreeSet<String>,
) -> Result<(String, String), ServiceError> {
    let mut found: Vec<String> = Vec::new();

    for token in statement.split(|c: char| !c.is_alphanumeric()) {
        if token.is_empty() {
            continue;
        }

        if let Some(country) = lexicon.iter().find(|c| c.eq_ignore_ascii_case(token)) {
            if !found.contains(country) {
                found.push(country.clone());
                if found.len() == 2 {
                    break;
                }
            }
        }
    }

    let mut actors = found.into_iter();
    match (actors.next(), actors.next()) {
        (Some(first), Some(second)) => Ok((first, second)),
        _ => Err(ServiceError::InputMalformed(format!(
            "could not identify two countries in '{}'",
            statement
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> BTreeSet<String> {
        ["India", "China", "Pakistan", "France"]
            .iter()
            .map(|c| c.to_string())
            .collect()
    }

    #[test]
    fn extracts_actors_in_order_of_appearance() {
        let (attacker, defender) = extract_actors("China attacked India", &lexicon()).unwrap();

        assert_eq!(attacker, "China");
        assert_eq!(defender, "India");
    }

    #[test]
    fn matching_ignores_case_and_punctuation() {
        let (attacker, defender) =
            extract_actors("Yesterday, INDIA clashed with pakistan.", &lexicon()).unwrap();

        assert_eq!(attacker, "India");
        assert_eq!(defender, "Pakistan");
    }

    #[test]
    fn repeated_country_counts_once() {
        let result = extract_actors("India and India again", &lexicon());

        assert!(matches!(result, Err(ServiceError::InputMalformed(_))));
    }

    #[test]
    fn one_country_is_malformed_input() {
        let result = extract_actors("China mobilized its navy", &lexicon());

        assert!(matches!(result, Err(ServiceError::InputMalformed(_))));
    }

    #[test]
    fn unknown_countries_are_ignored() {
        let (attacker, defender) =
            extract_actors("Wakanda backed China against France", &lexicon()).unwrap();

        assert_eq!(attacker, "China");
        assert_eq!(defender, "France");
    }
}
