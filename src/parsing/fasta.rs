//! FASTA reading and writing.
//!
//! Reading goes through noodles and supports both uncompressed and
//! gzip/bgzip compressed files. Writing produces one unwrapped line per
//! sequence.

use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use flate2::read::GzDecoder;
use noodles::fasta;

use crate::parsing::ParseError;

/// A named nucleotide sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    /// Record name (definition line up to the first whitespace)
    pub name: String,
    pub sequence: Vec<u8>,
}

impl FastaRecord {
    pub fn new(name: impl Into<String>, sequence: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            sequence: sequence.into(),
        }
    }
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Read every record of a FASTA file.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Noodles` if
/// parsing fails, or `ParseError::InvalidFormat` if no records are found.
pub fn read_fasta_file(path: &Path) -> Result<Vec<FastaRecord>, ParseError> {
    let file = std::fs::File::open(path)?;
    if is_gzipped(path) {
        let reader = BufReader::new(GzDecoder::new(file));
        read_fasta(&mut fasta::io::Reader::new(reader))
    } else {
        let reader = BufReader::new(file);
        read_fasta(&mut fasta::io::Reader::new(reader))
    }
}

fn read_fasta<R: BufRead>(
    reader: &mut fasta::io::Reader<R>,
) -> Result<Vec<FastaRecord>, ParseError> {
    let mut records = Vec::new();

    for result in reader.records() {
        let record = result
            .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?;

        let name = String::from_utf8_lossy(record.name()).to_string();
        let sequence = record.sequence().as_ref().to_vec();
        records.push(FastaRecord::new(name, sequence));
    }

    if records.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No sequences found in FASTA file".to_string(),
        ));
    }

    Ok(records)
}

/// Write records as unwrapped FASTA
///
/// # Errors
///
/// Returns any I/O error from the writer.
pub fn write_fasta<W: Write>(writer: &mut W, records: &[FastaRecord]) -> std::io::Result<()> {
    for record in records {
        writeln!(writer, ">{}", record.name)?;
        writer.write_all(&record.sequence)?;
        writeln!(writer)?;
    }
    writer.flush()
}
