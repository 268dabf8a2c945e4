//! CLI argument parsing for the suraksha-worker binary.

use clap::{Parser, Subcommand};

use crate::defaults;

#[derive(Parser)]
#[command(name = "suraksha-worker", about = "Suraksha emergency response worker")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Locate emergency amenities around a place and export the contact log
    Nearby {
        /// Place name to resolve (e.g. the town nearest the incident)
        place: String,

        /// Country or region appended to the geocoding query
        #[arg(long)]
        country: Option<String>,

        /// Search radius in meters
        #[arg(long, default_value_t = defaults::DEFAULT_RADIUS_M)]
        radius_m: u32,

        /// Output CSV path for the contact log
        #[arg(long, default_value = "emergency_contacts.csv")]
        out: String,

        /// Train number included in the alert email
        #[arg(long)]
        train_number: Option<String>,

        /// Train name included in the alert email
        #[arg(long)]
        train_name: Option<String>,

        /// Journey start city
        #[arg(long)]
        origin: Option<String>,

        /// Journey destination city
        #[arg(long)]
        destination: Option<String>,
    },

    /// Rank likely supporters of the two actors in a conflict
    Allies {
        /// Free-text statement to extract the two actors from
        #[arg(long, conflicts_with_all = ["attacker", "defender"])]
        statement: Option<String>,

        /// First actor
        #[arg(long, requires = "defender")]
        attacker: Option<String>,

        /// Second actor
        #[arg(long, requires = "attacker")]
        defender: Option<String>,

        /// Number of supporters listed per actor
        #[arg(long, default_value_t = defaults::DEFAULT_TOP_N)]
        top_n: usize,
    },

    /// Assess crowd risk for scheduled city events
    Events {
        /// Cities to analyze, comma separated (defaults to every configured city)
        #[arg(long, value_delimiter = ',')]
        cities: Vec<String>,

        /// Seed for the risk nudge, for reproducible reports
        #[arg(long)]
        seed: Option<u64>,
    },
}
