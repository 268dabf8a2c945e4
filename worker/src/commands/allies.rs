//! Geopolitical support ranking pipeline
//!
//! relation CSVs → actor extraction → per-country support scores → two
//! ranked top-N lists on the console.

use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::{info, warn};

use crate::config::Config;
use crate::services::relations::RelationTable;
use crate::services::{actors, alliance};
use crate::types::SupportScore;

pub struct AlliesArgs {
    pub statement: Option<String>,
    pub attacker: Option<String>,
    pub defender: Option<String>,
    pub top_n: usize,
}

pub async fn run(config: &Config, args: AlliesArgs) -> Result<()> {
    let relations = RelationTable::load_dir(Path::new(&config.relations_dir))
        .context("failed to load relation tables")?;
    if relations.is_empty() {
        warn!("Relation tables are empty, rankings will be empty");
    }
    info!("Loaded {} country pair relations", relations.len());

    let (attacker, defender) = match (args.statement, args.attacker, args.defender) {
        (Some(statement), _, _) => {
            let lexicon = relations.countries();
            actors::extract_actors(&statement, &lexicon)?
        }
        (None, Some(attacker), Some(defender)) => (attacker, defender),
        _ => bail!("provide either --statement or both --attacker and --defender"),
    };

    if attacker == defender {
        bail!("the two actors must differ (got '{}' twice)", attacker);
    }

    info!(%attacker, %defender, "Computing support rankings");

    let comparison = alliance::compute_support(&relations, &attacker, &defender, args.top_n);

    print_ranking(&comparison.actor_a, &comparison.supports_a);
    print_ranking(&comparison.actor_b, &comparison.supports_b);

    Ok(())
}

fn print_ranking(actor: &str, supporters: &[SupportScore]) {
    println!("{} is supported by:", actor);
    if supporters.is_empty() {
        println!("  (no known relations)");
    }
    for entry in supporters {
        println!("  {} (score: {:.2})", entry.country, entry.score);
    }
    println!();
}
