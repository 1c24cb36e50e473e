//! Checks on the annotated consensus sequence.
//!
//! After the consensus is annotated (by bakta), each predicted CDS is pulled
//! out of the annotated contigs and scanned for stop codons before its final
//! codon. Those premature stops are reported as disruptive mutations.
//!
//! - [`gff`]: select `CDS` rows from GFF3 annotation
//! - [`cds`]: cut CDS sequences out of the annotated contigs
//! - [`completeness`]: frame and premature stop codon checks
//! - [`mutations`]: collect premature stops and write them as CSV

use thiserror::Error;

pub mod cds;
pub mod completeness;
pub mod gff;
pub mod mutations;

#[derive(Error, Debug)]
pub enum AnnotationError {
    #[error("Invalid GFF3: {0}")]
    InvalidFormat(String),

    #[error("CDS {feature} is on contig '{seqid}', which is not in the FASTA file")]
    UnknownContig { feature: String, seqid: String },

    #[error("CDS {feature} lies outside its contig of length {contig_len}")]
    OutOfBounds { feature: String, contig_len: usize },
}
