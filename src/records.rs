//! Prediction record parsing and loading.
//!
//! Input is line-oriented text, one prediction per line:
//!
//! ```text
//! <id> <score> <label>
//! ```
//!
//! where `score` is an e-value-like confidence (smaller = more confidently
//! positive) and `label` is the ground truth (1 = positive, 0 = negative).
//! Fields are whitespace-separated; trailing extra fields are ignored.
//! Gzip-compressed input (`.gz`) is decompressed transparently.

use crate::error::{EvalError, Result};
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Ground-truth class of a prediction record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Negative,
    Positive,
}

impl Label {
    /// Matrix index of this label: 0 for negative, 1 for positive.
    pub fn as_index(self) -> usize {
        match self {
            Label::Negative => 0,
            Label::Positive => 1,
        }
    }

    /// Parse a label from its integer field. Only 0 and 1 are valid.
    fn from_field(field: &str) -> Option<Self> {
        match field.parse::<i64>() {
            Ok(0) => Some(Label::Negative),
            Ok(1) => Some(Label::Positive),
            _ => None,
        }
    }
}

/// One scored, labeled prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionRecord {
    /// Sequence or sample identifier. Not required to be unique.
    pub id: String,
    /// E-value-like score; smaller means more confidently positive.
    pub score: f64,
    /// Ground-truth class.
    pub label: Label,
}

/// Parse prediction records from a line-oriented reader.
///
/// Fails on the first malformed line (fewer than three fields, unparseable
/// score, or a label other than 0/1) with the 1-based line number.
/// Input order is preserved. An empty reader yields an empty vector.
pub fn parse_predictions(reader: impl BufRead) -> Result<Vec<PredictionRecord>> {
    let mut records = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|e| EvalError::parse(line_no, e.to_string()))?;

        let mut fields = line.split_whitespace();
        let (Some(id), Some(score_field), Some(label_field)) =
            (fields.next(), fields.next(), fields.next())
        else {
            return Err(EvalError::parse(
                line_no,
                format!(
                    "expected at least 3 fields (id, score, label), found {}",
                    line.split_whitespace().count()
                ),
            ));
        };

        let score: f64 = score_field.parse().map_err(|_| {
            EvalError::parse(line_no, format!("invalid score '{}'", score_field))
        })?;

        let Some(label) = Label::from_field(label_field) else {
            return Err(EvalError::parse(
                line_no,
                format!("invalid label '{}' (expected 0 or 1)", label_field),
            ));
        };

        records.push(PredictionRecord {
            id: id.to_string(),
            score,
            label,
        });
    }

    Ok(records)
}

/// Load prediction records from a file, decompressing `.gz` transparently.
pub fn load_predictions(path: &Path) -> Result<Vec<PredictionRecord>> {
    let file = File::open(path).map_err(|e| EvalError::io(path, "open", e))?;

    let records = if path.extension().and_then(|e| e.to_str()) == Some("gz") {
        parse_predictions(BufReader::new(GzDecoder::new(file)))?
    } else {
        parse_predictions(BufReader::new(file))?
    };

    log::info!(
        "Loaded {} prediction records from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}

// ============================================================================
// Tests
// ============================================================================
