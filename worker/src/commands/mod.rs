//! Pipeline commands dispatched from the CLI
//!
//! Each command is one independent pipeline: resolve inputs, call the
//! services, print the report. Failures abort only the branch they occur
//! in, except configuration problems which fail the whole run.

pub mod allies;
pub mod events;
pub mod nearby;
