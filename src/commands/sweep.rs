//! Threshold sweep command.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use perfeval::{
    load_predictions, run_sweep, write_sweep, ConfusionMatrix, OutputFormat, SweepConfig,
};

use super::helpers::format_threshold_block;

/// Divider printed after each per-threshold block.
const BLOCK_DIVIDER: &str = "----------------------------------------------------";

/// Sweep a geometric threshold ladder over the predictions, print the
/// per-threshold blocks, and persist the metric table.
///
/// With a file target the blocks go to stdout and the table to the file.
/// With a stdout target only the table is written, so it stays parseable.
pub fn run_threshold_sweep(
    predictions: &Path,
    output: Option<&PathBuf>,
    points: usize,
    base: f64,
) -> Result<()> {
    let records = load_predictions(predictions)
        .with_context(|| format!("Failed to load predictions from {:?}", predictions))?;

    let config = SweepConfig { base, points };
    let results = run_sweep(&records, &config)?;

    if !OutputFormat::is_stdout(output) {
        for metrics in &results {
            let cm = ConfusionMatrix::from_records(&records, metrics.threshold);
            print!("{}", format_threshold_block(&cm, metrics));
            println!("{}", BLOCK_DIVIDER);
        }
    }

    write_sweep(output, &results).context("Failed to write sweep results")?;

    if !OutputFormat::is_stdout(output) {
        let p = output.unwrap(); // Safe: not stdout means path exists
        log::info!("Wrote {} thresholds to {}", results.len(), p.display());
    }

    Ok(())
}
