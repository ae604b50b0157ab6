//! Argument parsing and output helpers for the perfeval CLI.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use perfeval::{format_metric, format_threshold, ConfusionMatrix, OutputFormat, ThresholdMetrics};

/// Parse a decision threshold, validating it is a finite non-negative number.
pub fn parse_threshold(s: &str) -> Result<f64, String> {
    let th: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if !th.is_finite() || th < 0.0 {
        return Err(format!(
            "threshold must be a finite non-negative number, got {}",
            th
        ));
    }
    Ok(th)
}

/// Parse the sweep base, validating it is finite, positive, and not 1.
pub fn parse_sweep_base(s: &str) -> Result<f64, String> {
    let base: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if !base.is_finite() || base <= 0.0 {
        return Err(format!("sweep base must be finite and > 0, got {}", base));
    }
    if base == 1.0 {
        return Err("sweep base must not be 1".to_string());
    }
    Ok(base)
}

/// Parse the sweep point count, requiring at least 1.
pub fn parse_sweep_points(s: &str) -> Result<usize, String> {
    let points: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid positive integer", s))?;
    if points == 0 {
        return Err("points must be greater than 0".to_string());
    }
    Ok(points)
}

/// Parse a 1-based header field number.
pub fn parse_field_number(s: &str) -> Result<usize, String> {
    let field: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid positive integer", s))?;
    if field == 0 {
        return Err("field numbering starts at 1".to_string());
    }
    Ok(field)
}

/// Open a text output target: the named file, or stdout for None / "-".
pub fn open_text_output(path: Option<&PathBuf>) -> Result<Box<dyn Write>> {
    if OutputFormat::is_stdout(path) {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    let p = path.unwrap(); // Safe: not stdout means path exists
    let file =
        File::create(p).with_context(|| format!("Failed to create output file: {:?}", p))?;
    Ok(Box::new(BufWriter::new(file)))
}

/// Format the two-line block reported for each evaluated threshold.
///
/// Line 1 is the confusion matrix, line 2 the threshold and its metrics:
///
/// ```text
/// TP=2 TN=2 FN=0 FP=0
/// TH=1e-5 Q2=1 MCC=1
/// ```
pub fn format_threshold_block(cm: &ConfusionMatrix, metrics: &ThresholdMetrics) -> String {
    format!(
        "TP={} TN={} FN={} FP={}\nTH={} Q2={} MCC={}\n",
        cm.true_positives(),
        cm.true_negatives(),
        cm.false_negatives(),
        cm.false_positives(),
        format_threshold(metrics.threshold),
        format_metric(metrics.accuracy),
        format_metric(metrics.mcc)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use perfeval::{Label, PredictionRecord};

    #[test]
    fn test_parse_threshold_valid() {
        assert_eq!(parse_threshold("1e-5").unwrap(), 1e-5);
        assert_eq!(parse_threshold("0.5").unwrap(), 0.5);
        assert_eq!(parse_threshold("0").unwrap(), 0.0);
    }

    #[test]
    fn test_parse_threshold_rejects_negative() {
        let err = parse_threshold("-0.1").unwrap_err();
        assert!(err.contains("non-negative"));
    }

    #[test]
    fn test_parse_threshold_rejects_non_numeric() {
        let err = parse_threshold("abc").unwrap_err();
        assert!(err.contains("not a valid number"));
    }

    #[test]
    fn test_parse_threshold_rejects_infinite() {
        let err = parse_threshold("inf").unwrap_err();
        assert!(err.contains("finite"));
    }

    #[test]
    fn test_parse_sweep_base_valid() {
        assert_eq!(parse_sweep_base("10").unwrap(), 10.0);
        assert_eq!(parse_sweep_base("2.5").unwrap(), 2.5);
    }

    #[test]
    fn test_parse_sweep_base_rejects_one_and_zero() {
        assert!(parse_sweep_base("1").unwrap_err().contains("not be 1"));
        assert!(parse_sweep_base("0").unwrap_err().contains("> 0"));
        assert!(parse_sweep_base("-2").unwrap_err().contains("> 0"));
    }

    #[test]
    fn test_parse_sweep_points_valid() {
        assert_eq!(parse_sweep_points("15").unwrap(), 15);
        assert_eq!(parse_sweep_points("1").unwrap(), 1);
    }

    #[test]
    fn test_parse_sweep_points_rejects_zero() {
        let err = parse_sweep_points("0").unwrap_err();
        assert!(err.contains("greater than 0"));
    }

    #[test]
    fn test_parse_field_number_rejects_zero() {
        assert_eq!(parse_field_number("2").unwrap(), 2);
        let err = parse_field_number("0").unwrap_err();
        assert!(err.contains("starts at 1"));
    }

    #[test]
    fn test_format_threshold_block_exact_layout() {
        let records = vec![
            PredictionRecord {
                id: "a".to_string(),
                score: 1e-8,
                label: Label::Positive,
            },
            PredictionRecord {
                id: "b".to_string(),
                score: 1e-7,
                label: Label::Positive,
            },
            PredictionRecord {
                id: "c".to_string(),
                score: 0.2,
                label: Label::Negative,
            },
            PredictionRecord {
                id: "d".to_string(),
                score: 0.9,
                label: Label::Negative,
            },
        ];
        let cm = ConfusionMatrix::from_records(&records, 1e-5);
        let metrics = ThresholdMetrics::from_matrix(1e-5, &cm);

        assert_eq!(
            format_threshold_block(&cm, &metrics),
            "TP=2 TN=2 FN=0 FP=0\nTH=1e-5 Q2=1 MCC=1\n"
        );
    }

    #[test]
    fn test_format_threshold_block_undefined_mcc_prints_na() {
        let records = vec![PredictionRecord {
            id: "a".to_string(),
            score: 0.5,
            label: Label::Negative,
        }];
        let cm = ConfusionMatrix::from_records(&records, 1e-5);
        let metrics = ThresholdMetrics::from_matrix(1e-5, &cm);

        assert_eq!(
            format_threshold_block(&cm, &metrics),
            "TP=0 TN=1 FN=0 FP=0\nTH=1e-5 Q2=1 MCC=NA\n"
        );
    }
}
