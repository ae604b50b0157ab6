//! Confusion matrix construction and derived metrics.
//!
//! The matrix is indexed `(predicted, actual)`: cell `[1][1]` counts true
//! positives, `[0][0]` true negatives, `[0][1]` false negatives and `[1][0]`
//! false positives. A record is predicted positive when its score is at or
//! below the decision threshold (scores are e-value-like, so smaller means
//! more confident).
//!
//! All derived metrics return `Option<f64>`: `None` is the undefined outcome
//! for a degenerate matrix (zero denominator) and is never conflated with a
//! legitimate 0.0.

use crate::records::{Label, PredictionRecord};

/// 2x2 confusion matrix over `(predicted, actual)` label pairs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfusionMatrix {
    counts: [[u64; 2]; 2],
}

impl ConfusionMatrix {
    /// Create an empty (all-zero) matrix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a matrix by classifying every record against `threshold`.
    ///
    /// The boundary is inclusive: `score <= threshold` predicts positive.
    /// A NaN score never satisfies the comparison and classifies negative.
    pub fn from_records(records: &[PredictionRecord], threshold: f64) -> Self {
        let mut cm = Self::new();
        for rec in records {
            let predicted = if rec.score <= threshold {
                Label::Positive
            } else {
                Label::Negative
            };
            cm.record(predicted, rec.label);
        }
        cm
    }

    /// Count one `(predicted, actual)` observation.
    pub fn record(&mut self, predicted: Label, actual: Label) {
        self.counts[predicted.as_index()][actual.as_index()] += 1;
    }

    /// Predicted positive, actually positive.
    pub fn true_positives(&self) -> u64 {
        self.counts[1][1]
    }

    /// Predicted negative, actually negative.
    pub fn true_negatives(&self) -> u64 {
        self.counts[0][0]
    }

    /// Predicted positive, actually negative.
    pub fn false_positives(&self) -> u64 {
        self.counts[1][0]
    }

    /// Predicted negative, actually positive.
    pub fn false_negatives(&self) -> u64 {
        self.counts[0][1]
    }

    /// Total number of observations. Always equals the record count the
    /// matrix was built from.
    pub fn total(&self) -> u64 {
        self.counts.iter().flatten().sum()
    }

    /// Overall accuracy (Q2): `(TP + TN) / total`.
    ///
    /// `None` when the matrix is empty.
    pub fn accuracy(&self) -> Option<f64> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        Some((self.true_positives() + self.true_negatives()) as f64 / total as f64)
    }

    /// Matthews correlation coefficient:
    /// `(TP*TN - FP*FN) / sqrt((TP+FP)(TP+FN)(TN+FP)(TN+FN))`.
    ///
    /// `None` when any marginal sum is zero (single-class input, or a
    /// threshold that sends every record to one side). Counts are widened to
    /// f64 before multiplying so large inputs cannot overflow.
    pub fn matthews_corrcoef(&self) -> Option<f64> {
        let tp = self.true_positives() as f64;
        let tn = self.true_negatives() as f64;
        let fp = self.false_positives() as f64;
        let fn_ = self.false_negatives() as f64;

        let denom_sq = (tp + fp) * (tp + fn_) * (tn + fp) * (tn + fn_);
        if denom_sq == 0.0 {
            return None;
        }
        Some((tp * tn - fp * fn_) / denom_sq.sqrt())
    }

    /// True positive rate (sensitivity): `TP / (TP + FN)`.
    ///
    /// `None` when there are no actual positives.
    pub fn true_positive_rate(&self) -> Option<f64> {
        let actual_pos = self.true_positives() + self.false_negatives();
        if actual_pos == 0 {
            return None;
        }
        Some(self.true_positives() as f64 / actual_pos as f64)
    }

    /// False positive rate: `FP / (FP + TN)`.
    ///
    /// `None` when there are no actual negatives.
    pub fn false_positive_rate(&self) -> Option<f64> {
        let actual_neg = self.false_positives() + self.true_negatives();
        if actual_neg == 0 {
            return None;
        }
        Some(self.false_positives() as f64 / actual_neg as f64)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(id: &str, score: f64, label: Label) -> PredictionRecord {
        PredictionRecord {
            id: id.to_string(),
            score,
            label,
        }
    }

    /// Records from the canonical worked example: threshold 0.05 separates
    /// them perfectly.
    fn sample_records() -> Vec<PredictionRecord> {
        vec![
            rec("a", 0.01, Label::Positive),
            rec("b", 0.2, Label::Negative),
            rec("c", 0.001, Label::Positive),
            rec("d", 0.5, Label::Negative),
        ]
    }

    #[test]
    fn test_perfect_separation() {
        let cm = ConfusionMatrix::from_records(&sample_records(), 0.05);

        assert_eq!(cm.true_positives(), 2);
        assert_eq!(cm.true_negatives(), 2);
        assert_eq!(cm.false_negatives(), 0);
        assert_eq!(cm.false_positives(), 0);
        assert_eq!(cm.accuracy(), Some(1.0));
        assert_eq!(cm.matthews_corrcoef(), Some(1.0));
    }

    #[test]
    fn test_cell_sum_equals_record_count() {
        let records = sample_records();
        for th in [0.0, 1e-3, 0.05, 0.2, 1.0, 1e9] {
            let cm = ConfusionMatrix::from_records(&records, th);
            assert_eq!(cm.total(), records.len() as u64, "threshold {}", th);
        }
    }

    #[test]
    fn test_empty_input_gives_zero_matrix() {
        let cm = ConfusionMatrix::from_records(&[], 0.05);

        assert_eq!(cm.total(), 0);
        assert_eq!(cm.accuracy(), None);
        assert_eq!(cm.matthews_corrcoef(), None);
        assert_eq!(cm.true_positive_rate(), None);
        assert_eq!(cm.false_positive_rate(), None);
    }

    #[test]
    fn test_threshold_boundary_is_inclusive() {
        // A score exactly at the threshold classifies positive.
        let records = vec![rec("x", 0.05, Label::Positive)];
        let cm = ConfusionMatrix::from_records(&records, 0.05);

        assert_eq!(cm.true_positives(), 1);
        assert_eq!(cm.false_negatives(), 0);
    }

    #[test]
    fn test_nan_score_classifies_negative() {
        let records = vec![rec("x", f64::NAN, Label::Positive)];
        let cm = ConfusionMatrix::from_records(&records, 0.05);

        assert_eq!(cm.false_negatives(), 1);
        assert_eq!(cm.total(), 1);
    }

    #[test]
    fn test_accuracy_invariant_under_permutation() {
        let mut records = sample_records();
        let before = ConfusionMatrix::from_records(&records, 0.05);
        records.reverse();
        let after = ConfusionMatrix::from_records(&records, 0.05);

        assert_eq!(before, after);
        assert_eq!(before.accuracy(), after.accuracy());
    }

    #[test]
    fn test_misclassification_cells() {
        // Threshold 0.1: "b" (0.2, negative) is correct; "e" (0.05, negative)
        // lands in FP; "f" (0.3, positive) lands in FN.
        let records = vec![
            rec("b", 0.2, Label::Negative),
            rec("e", 0.05, Label::Negative),
            rec("f", 0.3, Label::Positive),
        ];
        let cm = ConfusionMatrix::from_records(&records, 0.1);

        assert_eq!(cm.true_negatives(), 1);
        assert_eq!(cm.false_positives(), 1);
        assert_eq!(cm.false_negatives(), 1);
        assert_eq!(cm.true_positives(), 0);
    }

    #[test]
    fn test_mcc_known_value() {
        // TP=4, TN=2, FP=1, FN=1:
        // MCC = (4*2 - 1*1) / sqrt(5*5*3*3) = 7/15
        let mut cm = ConfusionMatrix::new();
        for _ in 0..4 {
            cm.record(Label::Positive, Label::Positive);
        }
        for _ in 0..2 {
            cm.record(Label::Negative, Label::Negative);
        }
        cm.record(Label::Positive, Label::Negative);
        cm.record(Label::Negative, Label::Positive);

        let mcc = cm.matthews_corrcoef().unwrap();
        assert!((mcc - 7.0 / 15.0).abs() < 1e-12, "mcc = {}", mcc);
    }

    #[test]
    fn test_mcc_bounded() {
        let records = vec![
            rec("a", 0.01, Label::Negative),
            rec("b", 0.2, Label::Positive),
            rec("c", 0.001, Label::Negative),
            rec("d", 0.5, Label::Positive),
        ];
        // Perfectly inverted predictions.
        let cm = ConfusionMatrix::from_records(&records, 0.05);
        assert_eq!(cm.matthews_corrcoef(), Some(-1.0));

        for th in [1e-6, 0.05, 0.3, 10.0] {
            let cm = ConfusionMatrix::from_records(&sample_records(), th);
            if let Some(mcc) = cm.matthews_corrcoef() {
                assert!((-1.0..=1.0).contains(&mcc), "mcc {} at threshold {}", mcc, th);
            }
        }
    }

    #[test]
    fn test_mcc_undefined_when_marginal_zero() {
        // All records actually positive: TN+FP marginal is zero.
        let records = vec![
            rec("a", 0.01, Label::Positive),
            rec("b", 0.2, Label::Positive),
        ];
        let cm = ConfusionMatrix::from_records(&records, 0.05);

        assert_eq!(cm.matthews_corrcoef(), None);
    }

    #[test]
    fn test_tpr_undefined_distinct_from_zero() {
        // No actual positives: TPR must be None, not Some(0.0).
        let records = vec![
            rec("a", 0.01, Label::Negative),
            rec("b", 0.2, Label::Negative),
        ];
        let cm = ConfusionMatrix::from_records(&records, 0.05);

        assert_eq!(cm.true_positive_rate(), None);
        assert_ne!(cm.true_positive_rate(), Some(0.0));
        // FPR is still defined here.
        assert_eq!(cm.false_positive_rate(), Some(0.5));
    }

    #[test]
    fn test_rates_on_mixed_input() {
        // TP=1 FN=1 FP=1 TN=1 at threshold 0.1.
        let records = vec![
            rec("tp", 0.05, Label::Positive),
            rec("fn", 0.5, Label::Positive),
            rec("fp", 0.05, Label::Negative),
            rec("tn", 0.5, Label::Negative),
        ];
        let cm = ConfusionMatrix::from_records(&records, 0.1);

        assert_eq!(cm.true_positive_rate(), Some(0.5));
        assert_eq!(cm.false_positive_rate(), Some(0.5));
        assert_eq!(cm.accuracy(), Some(0.5));
        assert_eq!(cm.matthews_corrcoef(), Some(0.0));
    }

    #[test]
    fn test_large_counts_do_not_overflow() {
        // 4M records per cell would overflow the MCC product in u64 math.
        let mut cm = ConfusionMatrix::new();
        let n = 4_000_000u64;
        for _ in 0..n {
            cm.record(Label::Positive, Label::Positive);
            cm.record(Label::Negative, Label::Negative);
            cm.record(Label::Positive, Label::Negative);
            cm.record(Label::Negative, Label::Positive);
        }

        let mcc = cm.matthews_corrcoef().unwrap();
        assert!(mcc.is_finite());
        assert!((mcc - 0.0).abs() < 1e-12);
    }
}
