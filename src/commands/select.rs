//! FASTA subset selection command.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use perfeval::{select_records, write_fasta};

use super::helpers::open_text_output;

/// Extract the records named in the ID list from a FASTA file and write
/// them to the output target in ID-list order.
pub fn select_fasta_records(
    ids: &Path,
    fasta: &Path,
    field: usize,
    output: Option<&PathBuf>,
) -> Result<()> {
    let records = select_records(ids, fasta, field)?;

    let mut out = open_text_output(output)?;
    write_fasta(&mut out, &records).context("Failed to write FASTA output")?;

    Ok(())
}
