//! Core data types for consensus assembly.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`Hit`]: A single BLAST HSP against a reference sequence
//! - [`Strand`]: The hit frame reported by BLAST (`+1` / `-1`)
//! - [`HitSet`]: Orientation-normalized hits sorted by reference start
//! - [`ConsensusSequence`]: The gap-free stitched output
//!
//! ## Coordinates
//!
//! Hit coordinates are 1-based and refer to the *reference* sequence, exactly
//! as BLAST reports them in `Hsp_hit-from` / `Hsp_hit-to`:
//!
//! | Strand  | Raw record            | After normalization   |
//! |---------|-----------------------|-----------------------|
//! | Forward | `hit_start < hit_end` | unchanged             |
//! | Reverse | `hit_start > hit_end` | `hit_start < hit_end` |
//!
//! [`Hit`]: hit::Hit
//! [`Strand`]: hit::Strand
//! [`HitSet`]: hit::HitSet
//! [`ConsensusSequence`]: sequence::ConsensusSequence

pub mod hit;
pub mod sequence;
