//! Country relation tables
//!
//! Three independent per-feature CSVs (alliance strength, conflict history,
//! trade volume) are loaded once and outer-joined on the canonical pair key:
//! the union of all pairs appears, and a pair missing from a table keeps 0
//! for that feature.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::types::{CountryPair, PairRelation};

const ALLIANCES_FILE: &str = "alliances.csv";
const CONFLICTS_FILE: &str = "conflict_history.csv";
const TRADE_FILE: &str = "trade_volumes.csv";

#[derive(Debug, Deserialize)]
struct AllianceRow {
    country_a: String,
    country_b: String,
    alliance_strength: f64,
}

#[derive(Debug, Deserialize)]
struct ConflictRow {
    country_a: String,
    country_b: String,
    conflict_severity: f64,
}

#[derive(Debug, Deserialize)]
struct TradeRow {
    country_a: String,
    country_b: String,
    trade_volume_usd_billion: f64,
}

/// Outer-joined relation table keyed by canonical pair
#[derive(Debug, Default)]
pub struct RelationTable {
    relations: HashMap<CountryPair, PairRelation>,
}

impl RelationTable {
    /// Load and join the three feature tables from `dir`.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        let mut table = Self::default();

        for row in read_rows::<AllianceRow>(&dir.join(ALLIANCES_FILE))? {
            table
                .entry(&row.country_a, &row.country_b)
                .alliance_strength = row.alliance_strength;
        }

        for row in read_rows::<ConflictRow>(&dir.join(CONFLICTS_FILE))? {
            table
                .entry(&row.country_a, &row.country_b)
                .conflict_severity = row.conflict_severity;
        }

        for row in read_rows::<TradeRow>(&dir.join(TRADE_FILE))? {
            table
                .entry(&row.country_a, &row.country_b)
                .trade_volume_usd_billion = row.trade_volume_usd_billion;
        }

        Ok(table)
    }

    fn entry(&mut self, a: &str, b: &str) -> &mut PairRelation {
        self.relations
            .entry(CountryPair::new(a, b))
            .or_default()
    }

    pub fn get(&self, pair: &CountryPair) -> Option<&PairRelation> {
        self.relations.get(pair)
    }

    pub fn len(&self) -> usize {
        self.relations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }

    /// All distinct countries across every pair, sorted.
    pub fn countries(&self) -> BTreeSet<String> {
        let mut countries = BTreeSet::new();
        for pair in self.relations.keys() {
            countries.insert(pair.first().to_string());
            countries.insert(pair.second().to_string());
        }
        countries
    }

    // In-memory builders, used by tests and programmatic callers.

    pub fn set_alliance(&mut self, a: &str, b: &str, strength: f64) {
        self.entry(a, b).alliance_strength = strength;
    }

    pub fn set_conflict(&mut self, a: &str, b: &str, severity: f64) {
        self.entry(a, b).conflict_severity = severity;
    }

    pub fn set_trade(&mut self, a: &str, b: &str, volume_usd_billion: f64) {
        self.entry(a, b).trade_volume_usd_billion = volume_usd_billion;
    }
}

fn read_rows<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<Vec<T>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row: T = result.with_context(|| format!("bad row in {}", path.display()))?;
        rows.push(row);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_unions_pairs_across_tables() {
        let mut table = RelationTable::default();
        table.set_alliance("India", "France", 0.8);
        table.set_trade("India", "Japan", 20.0);

        assert_eq!(table.len(), 2);

        let france = table.get(&CountryPair::new("India", "France")).unwrap();
        assert_eq!(france.alliance_strength, 0.8);
        assert_eq!(france.conflict_severity, 0.0);
        assert_eq!(france.trade_volume_usd_billion, 0.0);

        let japan = table.get(&CountryPair::new("Japan", "India")).unwrap();
        assert_eq!(japan.trade_volume_usd_billion, 20.0);
        assert_eq!(japan.alliance_strength, 0.0);
    }

    #[test]
    fn lookup_is_order_independent() {
        let mut table = RelationTable::default();
        table.set_conflict("China", "India", 0.6);

        assert!(table.get(&CountryPair::new("India", "China")).is_some());
        assert!(table.get(&CountryPair::new("China", "India")).is_some());
    }

    #[test]
    fn reversed_rows_merge_into_one_relation() {
        let mut table = RelationTable::default();
        table.set_alliance("India", "France", 0.8);
        table.set_trade("France", "India", 70.0);

        assert_eq!(table.len(), 1);
        let relation = table.get(&CountryPair::new("France", "India")).unwrap();
        assert_eq!(relation.alliance_strength, 0.8);
        assert_eq!(relation.trade_volume_usd_billion, 70.0);
    }

    #[test]
    fn countries_lists_every_participant_sorted() {
        let mut table = RelationTable::default();
        table.set_alliance("India", "France", 0.8);
        table.set_conflict("China", "India", 0.6);

        let countries: Vec<String> = table.countries().into_iter().collect();
        assert_eq!(countries, vec!["China", "France", "India"]);
    }

    #[test]
    fn csv_rows_deserialize_with_headers() {
        let data = "country_a,country_b,alliance_strength\nIndia,France,0.8\nRussia , India ,0.9\n";
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(data.as_bytes());

        let rows: Vec<AllianceRow> = reader.deserialize().map(|r| r.unwrap()).collect();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].country_a, "Russia");
        assert_eq!(rows[1].alliance_strength, 0.9);
    }
}
