//! Campaign Graphs
//!
//! Time-aligned series for fuzzing campaign dashboards.
//!
//! Fuzzer runs of a campaign are laid out on one campaign-relative time
//! axis with the idle periods between runs removed. On that axis the crate
//! produces per-run snapshot metric series and the cumulative number of
//! distinct crashes (by address or backtrace), wrapped into chart documents
//! for the dashboard frontend.
//!
//! ## Getting Started
//!
//! ```bash
//! campaign-graphs aggregated --data campaign.json --campaign 1
//! campaign-graphs property --data campaign.json --campaign 1 --name execs_per_sec
//! ```

pub mod aggregator;
pub mod chart;
pub mod commands;
pub mod graphs;
pub mod model;
pub mod store;
pub mod utils;
