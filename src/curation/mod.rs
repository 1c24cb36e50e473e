//! Hit curation and consensus assembly.
//!
//! The pipeline turns a raw BLAST hit list into one gap-free sequence:
//!
//! 1. [`containment`]: keep only hits against the reference of the longest
//!    hit, then drop hits strictly nested inside a longer one
//! 2. [`orientation`]: reverse complement `-1` frame hits and sort by start
//! 3. [`stitcher`]: merge adjacent hits, the longer hit owning any overlap
//! 4. [`emitter`]: strip alignment gaps
//!
//! [`engine::assemble`] runs all four stages and returns a
//! [`engine::ConsensusReport`] carrying both the sequence and the diagnostics
//! gathered along the way.
//!
//! ## Example
//!
//! ```rust
//! use cps_extractor::core::hit::{Hit, Strand};
//! use cps_extractor::curation::engine::assemble;
//!
//! let hits = vec![
//!     Hit::new("query", "cps_ref", 1, 10, Strand::Forward, "AAAAAAAAAA"),
//!     Hit::new("query", "cps_ref", 20, 30, Strand::Forward, "CCCCCCCCCCC"),
//! ];
//! let report = assemble(hits).unwrap();
//! assert_eq!(report.consensus.as_str(), "AAAAAAAAAACCCCCCCCCCC");
//! ```

use thiserror::Error;

use crate::core::sequence::MalformedSequence;

pub mod containment;
pub mod emitter;
pub mod engine;
pub mod orientation;
pub mod stitcher;

#[derive(Error, Debug)]
pub enum CurationError {
    #[error("No BLAST hits found to assemble, please check the BLAST XML report")]
    EmptyInput,

    #[error("Malformed sequence in hit {hit}: {source}")]
    MalformedSequence {
        hit: String,
        #[source]
        source: MalformedSequence,
    },
}
