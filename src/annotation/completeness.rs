use serde::Serialize;
use tracing::info;

/// Stop codons of the standard bacterial code
pub const STOP_CODONS: [&[u8; 3]; 3] = [b"TAA", b"TGA", b"TAG"];

/// A stop codon found before the final codon of a CDS
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrematureStop {
    /// Name of the CDS record
    pub contig: String,
    pub codon: String,
    /// 1-based position of the codon's first base within the CDS
    pub start: usize,
    /// 1-based position of the codon's last base within the CDS
    pub end: usize,
}

impl PrematureStop {
    /// `start-end`, as written to the mutations file
    pub fn position(&self) -> String {
        format!("{}-{}", self.start, self.end)
    }
}

impl std::fmt::Display for PrematureStop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "stop codon {} at position {} in {}",
            self.codon,
            self.position(),
            self.contig
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completeness {
    Complete,
    /// Length is not a multiple of three
    PartialCodon,
    PrematureStop(PrematureStop),
}

impl Completeness {
    pub fn is_complete(&self) -> bool {
        matches!(self, Completeness::Complete)
    }
}

/// Check that a CDS is a whole number of codons with no early stop.
///
/// The final codon is not scanned since it is expected to be the stop.
pub fn check_sequence_completeness(sequence: &[u8], sequence_id: &str) -> Completeness {
    if sequence.len() % 3 != 0 {
        return Completeness::PartialCodon;
    }

    let mut i = 0;
    while i + 6 <= sequence.len() {
        let codon = sequence[i..i + 3].to_ascii_uppercase();
        if STOP_CODONS.iter().any(|stop| stop[..] == codon[..]) {
            let stop = PrematureStop {
                contig: sequence_id.to_string(),
                codon: String::from_utf8_lossy(&codon).into_owned(),
                start: i + 1,
                end: i + 3,
            };
            info!("{stop}");
            return Completeness::PrematureStop(stop);
        }
        i += 3;
    }

    Completeness::Complete
}
