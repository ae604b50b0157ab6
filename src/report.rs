//! Persistence and formatting of sweep results.
//!
//! Sweep tables are written as TSV (optionally gzip-compressed) or JSON,
//! chosen by output file extension. Readers accept the same formats, so a
//! persisted sweep can be reloaded without loss.

use crate::error::{EvalError, Result};
use crate::metrics::ThresholdMetrics;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Column header of the TSV table layout.
const TSV_HEADER: &str = "threshold\taccuracy\tmcc\ttpr\tfpr";

/// Output format auto-detected from file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain TSV (default, .tsv, or no extension)
    Tsv,
    /// Gzip-compressed TSV (.tsv.gz or .gz)
    TsvGz,
    /// JSON array of metric objects (.json)
    Json,
}

impl OutputFormat {
    /// Detect output format from file path.
    ///
    /// `None` or `"-"` means TSV to stdout; a `.gz` extension (including
    /// `.tsv.gz`) selects gzip-compressed TSV; `.json` selects JSON; any
    /// other path is written as plain TSV.
    pub fn detect(path: Option<&PathBuf>) -> Self {
        let Some(p) = path else {
            return OutputFormat::Tsv;
        };

        if p.as_os_str() == "-" {
            return OutputFormat::Tsv;
        }

        match p.extension().and_then(|e| e.to_str()) {
            Some("gz") => OutputFormat::TsvGz,
            Some("json") => OutputFormat::Json,
            _ => OutputFormat::Tsv,
        }
    }

    /// Returns true if this path means stdout (None or "-").
    pub fn is_stdout(path: Option<&PathBuf>) -> bool {
        match path {
            None => true,
            Some(p) => p.as_os_str() == "-",
        }
    }
}

/// Render a threshold for display.
///
/// Small magnitudes switch to scientific notation, matching how the
/// sweep thresholds were historically reported (1e-5, not 0.00001).
pub fn format_threshold(th: f64) -> String {
    if th != 0.0 && th.abs() < 1e-4 {
        format!("{:e}", th)
    } else {
        format!("{}", th)
    }
}

/// Render an optional metric, using `NA` for undefined values.
pub fn format_metric(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{}", v),
        None => "NA".to_string(),
    }
}

fn write_table(mut w: impl Write, results: &[ThresholdMetrics]) -> io::Result<()> {
    writeln!(w, "{}", TSV_HEADER)?;
    for m in results {
        // {:e} and {} both print shortest round-trippable floats, so the
        // table reloads bit-exact.
        writeln!(
            w,
            "{:e}\t{}\t{}\t{}\t{}",
            m.threshold,
            format_metric(m.accuracy),
            format_metric(m.mcc),
            format_metric(m.tpr),
            format_metric(m.fpr),
        )?;
    }
    w.flush()
}

/// Write sweep results to `path` in the format its extension selects.
///
/// `None` or `"-"` writes plain TSV to stdout. Gzip streams are finished
/// explicitly so the trailer is always present.
pub fn write_sweep(path: Option<&PathBuf>, results: &[ThresholdMetrics]) -> Result<()> {
    if OutputFormat::is_stdout(path) {
        return write_table(io::stdout().lock(), results)
            .map_err(|e| EvalError::io("-", "write", e));
    }

    let p = path.unwrap(); // Safe: not stdout means path exists
    let file = File::create(p).map_err(|e| EvalError::io(p, "create", e))?;

    match OutputFormat::detect(path) {
        OutputFormat::Tsv => write_table(BufWriter::new(file), results)
            .map_err(|e| EvalError::io(p, "write", e)),
        OutputFormat::TsvGz => {
            let mut w = BufWriter::new(GzEncoder::new(file, Compression::default()));
            write_table(&mut w, results).map_err(|e| EvalError::io(p, "write", e))?;
            let encoder = w
                .into_inner()
                .map_err(|e| EvalError::io(p, "flush", e.into_error()))?;
            // finish() writes the gzip trailer; dropping would lose it on error.
            encoder
                .finish()
                .map_err(|e| EvalError::io(p, "finish", e))?;
            Ok(())
        }
        OutputFormat::Json => {
            let mut w = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut w, results)
                .map_err(|e| EvalError::format(p, e.to_string()))?;
            writeln!(w).map_err(|e| EvalError::io(p, "write", e))?;
            w.flush().map_err(|e| EvalError::io(p, "flush", e))
        }
    }
}

fn parse_metric(field: &str, column: &str, line: usize, path: &Path) -> Result<Option<f64>> {
    if field == "NA" {
        return Ok(None);
    }
    field.parse::<f64>().map(Some).map_err(|_| {
        EvalError::format(
            path,
            format!("line {}: invalid {} value '{}'", line, column, field),
        )
    })
}

fn read_table(reader: impl BufRead, path: &Path) -> Result<Vec<ThresholdMetrics>> {
    let mut lines = reader.lines().enumerate();

    let Some((_, header)) = lines.next() else {
        return Err(EvalError::format(path, "empty sweep table"));
    };
    let header = header.map_err(|e| EvalError::io(path, "read", e))?;
    if header != TSV_HEADER {
        return Err(EvalError::format(
            path,
            format!("expected header '{}', found '{}'", TSV_HEADER, header),
        ));
    }

    let mut results = Vec::new();
    for (idx, line) in lines {
        let line = line.map_err(|e| EvalError::io(path, "read", e))?;
        if line.is_empty() {
            continue;
        }
        let lineno = idx + 1;

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != 5 {
            return Err(EvalError::format(
                path,
                format!("line {}: expected 5 columns, found {}", lineno, fields.len()),
            ));
        }

        let threshold: f64 = fields[0].parse().map_err(|_| {
            EvalError::format(
                path,
                format!("line {}: invalid threshold value '{}'", lineno, fields[0]),
            )
        })?;

        results.push(ThresholdMetrics {
            threshold,
            accuracy: parse_metric(fields[1], "accuracy", lineno, path)?,
            mcc: parse_metric(fields[2], "mcc", lineno, path)?,
            tpr: parse_metric(fields[3], "tpr", lineno, path)?,
            fpr: parse_metric(fields[4], "fpr", lineno, path)?,
        });
    }

    Ok(results)
}

/// Read a persisted sweep table, detecting the format from the extension.
pub fn read_sweep(path: &Path) -> Result<Vec<ThresholdMetrics>> {
    let file = File::open(path).map_err(|e| EvalError::io(path, "open", e))?;

    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => serde_json::from_reader(BufReader::new(file))
            .map_err(|e| EvalError::format(path, e.to_string())),
        Some("gz") => read_table(BufReader::new(GzDecoder::new(file)), path),
        _ => read_table(BufReader::new(file), path),
    }
}

// ============================================================================
// Tests
// ============================================================================
