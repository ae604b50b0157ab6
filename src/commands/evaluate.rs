//! Single-threshold evaluation command.

use anyhow::{Context, Result};
use std::path::Path;

use perfeval::{format_metric, load_predictions, ConfusionMatrix, ThresholdMetrics};

use super::helpers::format_threshold_block;

/// Evaluate predictions at one threshold, printing the confusion matrix
/// and derived metrics to stdout.
pub fn evaluate_predictions(predictions: &Path, threshold: f64, full: bool) -> Result<()> {
    let records = load_predictions(predictions)
        .with_context(|| format!("Failed to load predictions from {:?}", predictions))?;

    let cm = ConfusionMatrix::from_records(&records, threshold);
    let metrics = ThresholdMetrics::from_matrix(threshold, &cm);

    print!("{}", format_threshold_block(&cm, &metrics));
    if full {
        println!(
            "TPR={} FPR={}",
            format_metric(metrics.tpr),
            format_metric(metrics.fpr)
        );
    }

    Ok(())
}
