//! Command-line argument definitions for the perfeval CLI.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::helpers::{parse_field_number, parse_sweep_base, parse_sweep_points, parse_threshold};

#[derive(Parser)]
#[command(name = "perfeval")]
#[command(about = "Threshold-sweep performance evaluation for binary classifiers")]
#[command(
    long_about = "Perfeval: confusion-matrix evaluation of binary classifier predictions
over e-value-like score thresholds.

PREDICTION FORMAT:
  One record per line, whitespace-separated: <id> <score> <label>
  - id:    record identifier (free text, no whitespace)
  - score: e-value-like confidence; SMALLER means more confidently positive
  - label: ground truth, 0 (negative) or 1 (positive)
  Extra trailing fields are ignored. Gzip input (.gz) is detected by extension.

  A record is predicted positive when score <= threshold (inclusive).

METRICS:
  Q2 (accuracy), MCC, TPR and FPR are reported as numbers when defined and
  as NA when the input makes them undefined (e.g. MCC with an empty class).

SWEEP OUTPUT FORMAT:
  Format auto-detected from extension:
  - .tsv or no extension: Plain TSV
  - .tsv.gz: Gzip-compressed TSV
  - .json: JSON array of metric objects
  - -: stdout (TSV)

  Tab-separated columns: threshold<TAB>accuracy<TAB>mcc<TAB>tpr<TAB>fpr"
)]
#[command(after_help = "EXAMPLES:
  # Evaluate at one threshold
  perfeval evaluate -p preds.txt -t 1e-5

  # Evaluate with TPR/FPR as well
  perfeval evaluate -p preds.txt -t 1e-5 --full

  # Default sweep: 15 thresholds, 1e-1 down to 1e-15
  perfeval sweep -p preds.txt -o sweep.tsv

  # Finer sweep over gzipped predictions
  perfeval sweep -p preds.txt.gz -o sweep.json --base 2 --points 30

  # Extract validation set sequences by UniProt accession
  perfeval select --ids validation.ids --fasta db.fasta --field 2 -o subset.fasta")]
pub struct Cli {
    /// Enable verbose progress output with timestamps
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate predictions at a single threshold
    #[command(after_help = "OUTPUT FORMAT:
  Two lines on stdout:
    TP=<n> TN=<n> FN=<n> FP=<n>
    TH=<threshold> Q2=<accuracy> MCC=<mcc>

  With --full, a third line:
    TPR=<tpr> FPR=<fpr>

  Undefined metrics are printed as NA.")]
    Evaluate {
        /// Prediction file: <id> <score> <label> per line (.gz supported)
        #[arg(short, long)]
        predictions: PathBuf,

        /// Decision threshold. Records with score <= threshold are
        /// predicted positive.
        #[arg(short, long, value_parser = parse_threshold)]
        threshold: f64,

        /// Also report TPR and FPR on a third line
        #[arg(long)]
        full: bool,
    },

    /// Evaluate a geometric ladder of thresholds and persist the metric table
    #[command(after_help = "SWEEP:
  Thresholds are base^-1, base^-2, .., base^-points. The defaults
  (base 10, 15 points) cover 1e-1 down to 1e-15.

  When --output names a file, the per-threshold blocks are printed to
  stdout and the full metric table is written to the file. With no
  --output (or '-'), only the table is written, to stdout.")]
    Sweep {
        /// Prediction file: <id> <score> <label> per line (.gz supported)
        #[arg(short, long)]
        predictions: PathBuf,

        /// Metric table output path. Format auto-detected from extension:
        /// - `.tsv` or no extension: Plain TSV
        /// - `.tsv.gz`: Gzip-compressed TSV
        /// - `.json`: JSON array
        /// - `-`: stdout (TSV)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number of thresholds in the ladder
        #[arg(long, default_value_t = 15, value_parser = parse_sweep_points)]
        points: usize,

        /// Geometric base of the ladder. Must be positive and not 1.
        #[arg(long, default_value_t = 10.0, value_parser = parse_sweep_base)]
        base: f64,
    },

    /// Extract named records from a FASTA file, in ID-list order
    #[command(after_help = "RECORD KEYS:
  The key of a FASTA record is a '|'-delimited field of its header.
  With --field 1 (default) the whole header up to the first '|' is the
  key; UniProt-style headers (>sp|P12345|NAME) use --field 2 to key by
  accession. IDs missing from the FASTA are logged and skipped.")]
    Select {
        /// File with record IDs to extract, one per line
        #[arg(short, long)]
        ids: PathBuf,

        /// FASTA file to extract from
        #[arg(short, long)]
        fasta: PathBuf,

        /// 1-based '|'-delimited header field used as the record key
        #[arg(long, default_value_t = 1, value_parser = parse_field_number)]
        field: usize,

        /// Output FASTA path (stdout if omitted or '-')
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
