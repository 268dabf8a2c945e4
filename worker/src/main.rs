//! Suraksha Worker - emergency response pipelines
//!
//! Three independent pipelines behind one CLI: nearby amenity lookup,
//! geopolitical support ranking, and city event risk reports.

mod cli;
mod commands;
mod config;
mod defaults;
mod error;
mod services;
mod types;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs directory - use LOGS_DIR env var or default to ./logs
    let logs_dir = std::env::var("LOGS_DIR").unwrap_or_else(|_| "logs".to_string());
    std::fs::create_dir_all(&logs_dir).ok();

    // File appender for persistent logs (daily rotation)
    let file_appender = RollingFileAppender::new(Rotation::DAILY, &logs_dir, "worker.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    // Initialize logging - both stderr and file, keeping stdout for reports
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,suraksha_worker=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false),
        )
        .init();

    info!("Starting Suraksha Worker...");

    // Load configuration; invalid settings fail here, never mid-pipeline
    let config = config::Config::from_env()?;
    info!("Configuration loaded");

    let cli = cli::Cli::parse();

    match cli.command {
        cli::Command::Nearby {
            place,
            country,
            radius_m,
            out,
            train_number,
            train_name,
            origin,
            destination,
        } => {
            commands::nearby::run(
                &config,
                commands::nearby::NearbyArgs {
                    place,
                    country,
                    radius_m,
                    out,
                    train_number,
                    train_name,
                    origin,
                    destination,
                },
            )
            .await
        }
        cli::Command::Allies {
            statement,
            attacker,
            defender,
            top_n,
        } => {
            commands::allies::run(
                &config,
                commands::allies::AlliesArgs {
                    statement,
                    attacker,
                    defender,
                    top_n,
                },
            )
            .await
        }
        cli::Command::Events { cities, seed } => {
            commands::events::run(&config, commands::events::EventsArgs { cities, seed }).await
        }
    }
}
