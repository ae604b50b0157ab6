//! FASTA subset selection by record ID.
//!
//! Given an ID list and a FASTA file, pulls out the named records in ID-list
//! order. Record keys come from a `|`-delimited field of the header, so both
//! plain headers (`>seq1`) and UniProt-style headers (`>sp|P12345|NAME`) work.

use crate::error::{EvalError, Result};
use needletail::parse_fastx_file;
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

/// A selected FASTA record, keyed by its extracted header field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    pub id: String,
    pub sequence: Vec<u8>,
}

/// Read one ID per line, trimming whitespace and skipping blank lines.
pub fn read_id_list(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|e| EvalError::io(path, "open", e))?;
    let ids = BufReader::new(file)
        .lines()
        .map_while(std::result::Result::ok)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    Ok(ids)
}

/// Extract the 1-based `|`-delimited key field from a FASTA header.
fn header_key(header: &str, field: usize) -> Option<&str> {
    header.split('|').nth(field - 1)
}

/// Index a FASTA file by header key. A repeated key keeps the last record.
fn index_fasta(path: &Path, field: usize) -> Result<HashMap<String, Vec<u8>>> {
    let mut reader =
        parse_fastx_file(path).map_err(|e| EvalError::format(path, format!("failed to open FASTA: {}", e)))?;

    let mut index = HashMap::new();
    while let Some(record) = reader.next() {
        let record = record
            .map_err(|e| EvalError::format(path, format!("invalid FASTA record: {}", e)))?;

        let header = String::from_utf8_lossy(record.id());
        let Some(key) = header_key(&header, field) else {
            return Err(EvalError::format(
                path,
                format!("header '{}' has no '|'-delimited field {}", header, field),
            ));
        };

        index.insert(key.to_string(), record.seq().into_owned());
    }

    Ok(index)
}

/// Select records named in `ids_path` from `fasta_path`, in ID-list order.
///
/// `field` is the 1-based `|` field of the header used as the record key.
/// IDs absent from the FASTA are logged and skipped; an ID listed twice is
/// emitted twice.
pub fn select_records(ids_path: &Path, fasta_path: &Path, field: usize) -> Result<Vec<FastaRecord>> {
    if field == 0 {
        return Err(EvalError::validation("header field numbering starts at 1"));
    }

    let ids = read_id_list(ids_path)?;
    let index = index_fasta(fasta_path, field)?;
    log::info!(
        "Indexed {} records from {}, selecting {} IDs",
        index.len(),
        fasta_path.display(),
        ids.len()
    );

    let mut selected = Vec::with_capacity(ids.len());
    for id in ids {
        match index.get(&id) {
            Some(seq) => selected.push(FastaRecord {
                id,
                sequence: seq.clone(),
            }),
            None => log::warn!("ID '{}' not found in {}", id, fasta_path.display()),
        }
    }

    log::info!("Selected {} records", selected.len());
    Ok(selected)
}

/// Write records as FASTA, one header line and one sequence line each.
pub fn write_fasta(mut w: impl Write, records: &[FastaRecord]) -> io::Result<()> {
    for record in records {
        writeln!(w, ">{}", record.id)?;
        w.write_all(&record.sequence)?;
        writeln!(w)?;
    }
    w.flush()
}

// ============================================================================
// Tests
// ============================================================================
