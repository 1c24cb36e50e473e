use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::annotation::completeness::{check_sequence_completeness, Completeness, PrematureStop};
use crate::parsing::fasta::FastaRecord;

/// Header of the mutations CSV
pub const MUTATIONS_HEADER: &str = "position,contig";

/// Premature stop codons across a set of CDS sequences, in input order.
///
/// CDS that are not a whole number of codons are not reported.
pub fn find_premature_stops(cds: &[FastaRecord]) -> Vec<PrematureStop> {
    let stops: Vec<PrematureStop> = cds
        .iter()
        .filter_map(
            |record| match check_sequence_completeness(&record.sequence, &record.name) {
                Completeness::PrematureStop(stop) => Some(stop),
                Completeness::Complete | Completeness::PartialCodon => None,
            },
        )
        .collect();

    info!(
        cds = cds.len(),
        premature_stops = stops.len(),
        "Checked CDS completeness"
    );
    stops
}

/// Write premature stops as `position,contig` CSV
///
/// # Errors
///
/// Returns any I/O error from the writer.
pub fn write_mutations_csv<W: Write>(writer: &mut W, stops: &[PrematureStop]) -> std::io::Result<()> {
    writeln!(writer, "{MUTATIONS_HEADER}")?;
    for stop in stops {
        writeln!(writer, "{},{}", stop.position(), stop.contig)?;
    }
    writer.flush()
}

/// Write premature stops to a CSV file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_mutations_file(path: &Path, stops: &[PrematureStop]) -> std::io::Result<()> {
    let mut file = std::io::BufWriter::new(std::fs::File::create(path)?);
    write_mutations_csv(&mut file, stops)
}
