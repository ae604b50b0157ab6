//! Command-line interface definitions and helpers for the perfeval CLI.

pub mod args;
pub mod evaluate;
pub mod helpers;
pub mod select;
pub mod sweep;

pub use args::{Cli, Commands};
pub use evaluate::evaluate_predictions;
pub use select::select_fasta_records;
pub use sweep::run_threshold_sweep;
