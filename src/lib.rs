//! # cps-extractor
//!
//! A library for assembling the capsular polysaccharide (CPS) locus of a
//! bacterial assembly from its BLAST hits against a reference database.
//!
//! BLAST reports a locus as a set of local alignments (HSPs) that may be
//! nested, overlapping, on either strand, and spread across several similar
//! references. `cps-extractor` curates them into one sequence:
//!
//! ## Features
//!
//! - **Single reference**: Keeps only hits against the reference of the longest hit
//! - **Containment filtering**: Drops hits nested strictly inside a longer hit
//! - **Orientation**: Reverse complements reverse strand hits
//! - **Overlap resolution**: The longer of two overlapping hits keeps the overlap
//! - **Annotation checks**: Reports premature stop codons in annotated CDS
//!
//! ## Example
//!
//! ```rust,no_run
//! use cps_extractor::assemble;
//! use cps_extractor::parsing::blast_xml::{parse_blast_xml_file, ReportFilter};
//! use std::path::Path;
//!
//! let hits = parse_blast_xml_file(Path::new("sample_blast_results.xml"), &ReportFilter::default())
//!     .unwrap();
//! let report = assemble(hits).unwrap();
//!
//! let mut out = std::io::stdout();
//! report.consensus.write_fasta(&mut out, "sample").unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Hit, hit set and sequence types
//! - [`curation`]: Containment filter, orientation, stitching and gap removal
//! - [`parsing`]: BLAST XML and FASTA parsers
//! - [`annotation`]: CDS extraction and completeness checks
//! - [`tools`]: blastn and bakta runners
//! - [`cli`]: Command-line interface implementation

pub mod annotation;
pub mod cli;
pub mod core;
pub mod curation;
pub mod parsing;
pub mod tools;
pub mod utils;

// Re-export commonly used types for convenience
pub use core::hit::{Hit, HitSet, Strand};
pub use core::sequence::ConsensusSequence;
pub use curation::engine::{assemble, ConsensusReport};
pub use curation::CurationError;
