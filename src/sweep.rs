//! Geometric threshold sweeps.
//!
//! A sweep evaluates the same record set at a descending geometric series of
//! thresholds, `base^-1 .. base^-points`. The historical default (base 10,
//! 15 points) covers the e-value range 1e-1 down to 1e-15.

use crate::error::{EvalError, Result};
use crate::matrix::ConfusionMatrix;
use crate::metrics::ThresholdMetrics;
use crate::records::PredictionRecord;
use rayon::prelude::*;

/// Configuration for a geometric threshold sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepConfig {
    /// Geometric base; threshold i is `base^-i`.
    pub base: f64,
    /// Number of thresholds to evaluate.
    pub points: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            base: 10.0,
            points: 15,
        }
    }
}

impl SweepConfig {
    /// Check the configuration describes a usable sweep.
    pub fn validate(&self) -> Result<()> {
        if !self.base.is_finite() || self.base <= 0.0 {
            return Err(EvalError::validation(format!(
                "sweep base must be finite and > 0, got {}",
                self.base
            )));
        }
        if self.base == 1.0 {
            return Err(EvalError::validation(
                "sweep base 1 produces a constant threshold sequence",
            ));
        }
        if self.points == 0 {
            return Err(EvalError::validation("sweep must have at least 1 point"));
        }
        Ok(())
    }

    /// The threshold sequence `base^-1, base^-2, .., base^-points`.
    pub fn thresholds(&self) -> Vec<f64> {
        (1..=self.points)
            .map(|i| self.base.powi(-(i as i32)))
            .collect()
    }
}

/// Evaluate `records` at every threshold of `config`.
///
/// Thresholds are independent, so they are evaluated in parallel over the
/// shared record slice; results come back in threshold order regardless.
pub fn run_sweep(
    records: &[PredictionRecord],
    config: &SweepConfig,
) -> Result<Vec<ThresholdMetrics>> {
    config.validate()?;

    log::info!(
        "Sweeping {} thresholds (base {}) over {} records",
        config.points,
        config.base,
        records.len()
    );

    let results = config
        .thresholds()
        .par_iter()
        .map(|&th| ThresholdMetrics::from_matrix(th, &ConfusionMatrix::from_records(records, th)))
        .collect();

    Ok(results)
}

// ============================================================================
// Tests
// ============================================================================
