//! perfeval: threshold-sweep performance evaluation for binary classifiers.
//!
//! The library evaluates score/label predictions against a decision
//! threshold: a record is called positive when its score is at or below the
//! threshold (scores are e-value-like, smaller means more confident). From
//! the resulting confusion matrix it derives accuracy, Matthews correlation,
//! and the true/false positive rates, each typed as `Option<f64>` so that
//! degenerate inputs stay explicit instead of turning into NaN.
//!
//! A geometric sweep evaluates a whole threshold ladder at once (by default
//! 1e-1 down to 1e-15) and the resulting table can be persisted as TSV,
//! gzip-compressed TSV, or JSON, and reloaded bit-exact.

pub mod error;
pub mod logging;
pub mod matrix;
pub mod metrics;
pub mod records;
pub mod report;
pub mod selection;
pub mod sweep;

pub use error::{EvalError, Result};
pub use logging::init_logger;
pub use matrix::ConfusionMatrix;
pub use metrics::ThresholdMetrics;
pub use records::{load_predictions, parse_predictions, Label, PredictionRecord};
pub use report::{format_metric, format_threshold, read_sweep, write_sweep, OutputFormat};
pub use selection::{select_records, write_fasta, FastaRecord};
pub use sweep::{run_sweep, SweepConfig};
