//! Parsers for the files exchanged with external tools.
//!
//! - **BLAST XML reports**: `blastn -outfmt 5` output, turned into [`Hit`]s
//! - **FASTA**: reading annotated contigs, writing extracted sequences
//!
//! GFF3 annotation lives with the rest of the annotation code in
//! [`crate::annotation::gff`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use cps_extractor::parsing::blast_xml::{parse_blast_xml_file, ReportFilter};
//! use std::path::Path;
//!
//! let hits = parse_blast_xml_file(Path::new("sample_blast_results.xml"), &ReportFilter::default())
//!     .unwrap();
//! println!("{} hits admitted", hits.len());
//! ```
//!
//! [`Hit`]: crate::core::hit::Hit

use thiserror::Error;

pub mod blast_xml;
pub mod fasta;

/// Errors from reading BLAST reports and FASTA files
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid BLAST XML: {0}")]
    Xml(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("noodles error: {0}")]
    Noodles(String),
}
