//! Per-threshold metric records.

use crate::matrix::ConfusionMatrix;
use serde::{Deserialize, Serialize};

/// Metrics derived from one confusion matrix at a specific threshold.
///
/// Every metric is `Option<f64>`: `None` marks an undefined value (zero
/// denominator in the underlying formula). Serializes to JSON with `null`
/// for undefined entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdMetrics {
    /// Decision threshold the matrix was built with.
    pub threshold: f64,
    /// Overall accuracy (Q2).
    pub accuracy: Option<f64>,
    /// Matthews correlation coefficient.
    pub mcc: Option<f64>,
    /// True positive rate (sensitivity).
    pub tpr: Option<f64>,
    /// False positive rate.
    pub fpr: Option<f64>,
}

impl ThresholdMetrics {
    /// Bundle the derived metrics of `matrix` with its threshold.
    pub fn from_matrix(threshold: f64, matrix: &ConfusionMatrix) -> Self {
        Self {
            threshold,
            accuracy: matrix.accuracy(),
            mcc: matrix.matthews_corrcoef(),
            tpr: matrix.true_positive_rate(),
            fpr: matrix.false_positive_rate(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
