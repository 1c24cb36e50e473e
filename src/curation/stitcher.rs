//! Overlap-aware stitching of sorted hits.
//!
//! Hits are merged left to right, one adjacent pair at a time. When two
//! neighbours overlap on the reference, the longer hit keeps the overlapping
//! bases:
//!
//! | Pair          | Longer hit       | Action                                            |
//! |---------------|------------------|---------------------------------------------------|
//! | any           | no overlap       | append the later sequence                         |
//! | any           | earlier          | append the later sequence minus `overlap` bases   |
//! | first         | later (or equal) | cut the first sequence to `later.start - 1` bases |
//! | second onward | later (or equal) | drop `overlap` bases from the end, append later   |
//!
//! where `overlap = earlier.end - later.start + 1`. The first pair cuts by the
//! later hit's absolute start rather than by the overlap length; both rules
//! are kept as is.
//!
//! Each decision only looks at the two hits involved, so three mutually
//! overlapping hits are resolved pair by pair.

use tracing::debug;

use crate::core::hit::{Hit, HitSet};
use crate::curation::CurationError;

/// How one adjacent pair is joined onto the accumulated sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Merge {
    /// No overlap, append the later sequence in full
    Append,

    /// Earlier hit is longer: skip the first `overlap` bases of the later hit
    TrimLater { overlap: usize },

    /// Later hit is longer: remove `overlap` bases from the end of the
    /// accumulated sequence, then append the later hit in full
    TrimAccumulated { overlap: usize },

    /// First pair with the later hit longer: keep only the first `keep` bases
    /// of the accumulated sequence, then append the later hit in full
    TruncateFirst { keep: usize },
}

impl Merge {
    /// Decide how `later` joins `earlier`. `first_pair` is true for the pair
    /// that seeds the accumulator.
    pub fn resolve(earlier: &Hit, later: &Hit, first_pair: bool) -> Self {
        if !earlier.overlaps_next(later) {
            return Merge::Append;
        }

        let overlap = to_len(earlier.hit_end - later.hit_start + 1);
        if earlier.seq_length > later.seq_length {
            Merge::TrimLater { overlap }
        } else if first_pair {
            Merge::TruncateFirst {
                keep: to_len(later.hit_start.saturating_sub(1)),
            }
        } else {
            Merge::TrimAccumulated { overlap }
        }
    }
}

fn to_len(n: u64) -> usize {
    usize::try_from(n).unwrap_or(usize::MAX)
}

/// Growing buffer for the stitched sequence.
///
/// Cuts past either end clamp to the buffer bounds.
#[derive(Debug, Default)]
pub struct SequenceBuilder {
    buf: Vec<u8>,
}

impl SequenceBuilder {
    pub fn seeded(seq: &[u8]) -> Self {
        Self { buf: seq.to_vec() }
    }

    pub fn push(&mut self, seq: &[u8]) {
        self.buf.extend_from_slice(seq);
    }

    /// Append `seq` without its first `skip` bases
    pub fn push_skipping(&mut self, seq: &[u8], skip: usize) {
        self.buf.extend_from_slice(seq.get(skip..).unwrap_or_default());
    }

    /// Remove `n` bases from the end
    pub fn trim_end(&mut self, n: usize) {
        self.buf.truncate(self.buf.len().saturating_sub(n));
    }

    /// Keep only the first `len` bases
    pub fn keep_first(&mut self, len: usize) {
        self.buf.truncate(len);
    }

    pub fn apply(&mut self, merge: Merge, later: &[u8]) {
        match merge {
            Merge::Append => self.push(later),
            Merge::TrimLater { overlap } => self.push_skipping(later, overlap),
            Merge::TrimAccumulated { overlap } => {
                self.trim_end(overlap);
                self.push(later);
            }
            Merge::TruncateFirst { keep } => {
                self.keep_first(keep);
                self.push(later);
            }
        }
    }

    pub fn finish(self) -> Vec<u8> {
        self.buf
    }
}

/// Stitch a sorted hit set into one sequence, gaps still included.
///
/// # Errors
///
/// Returns `CurationError::EmptyInput` when there are no hits.
pub fn stitch(hits: &HitSet) -> Result<Vec<u8>, CurationError> {
    let hits = hits.hits();
    let first = hits.first().ok_or(CurationError::EmptyInput)?;

    let mut builder = SequenceBuilder::seeded(first.seq.as_bytes());
    for (i, pair) in hits.windows(2).enumerate() {
        let (earlier, later) = (&pair[0], &pair[1]);
        let merge = Merge::resolve(earlier, later, i == 0);
        debug!(earlier = %earlier, later = %later, ?merge, "Merging hits");
        builder.apply(merge, later.seq.as_bytes());
    }

    Ok(builder.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::hit::Strand;

    fn hit(start: u64, end: u64, seq: &str) -> Hit {
        Hit::new("query", "ref", start, end, Strand::Forward, seq)
    }

    fn stitch_str(hits: Vec<Hit>) -> String {
        String::from_utf8(stitch(&HitSet::new(hits)).unwrap()).unwrap()
    }

    #[test]
    fn test_empty_input_fails() {
        let result = stitch(&HitSet::default());
        assert!(matches!(result, Err(CurationError::EmptyInput)));
    }

    #[test]
    fn test_single_hit_identity() {
        assert_eq!(stitch_str(vec![hit(1, 8, "ACGTACGT")]), "ACGTACGT");
    }

    #[test]
    fn test_single_hit_keeps_gaps() {
        assert_eq!(stitch_str(vec![hit(1, 8, "ACG-TACGT")]), "ACG-TACGT");
    }

    #[test]
    fn test_non_overlapping_concatenation() {
        let a = "A".repeat(10);
        let c = "C".repeat(11);
        let hits = vec![hit(1, 10, &a), hit(20, 30, &c)];
        assert_eq!(stitch_str(hits), format!("{a}{c}"));
    }

    #[test]
    fn test_adjacent_hits_do_not_overlap() {
        let hits = vec![hit(1, 4, "AAAA"), hit(5, 8, "CCCC")];
        assert_eq!(stitch_str(hits), "AAAACCCC");
    }

    #[test]
    fn test_first_pair_longer_later_wins() {
        // A covers 1-10 (seq_length 9), B covers 8-20 (seq_length 12)
        let a = hit(1, 10, "ACGTACGTAC");
        let b = hit(8, 20, &"G".repeat(13));
        assert_eq!(
            Merge::resolve(&a, &b, true),
            Merge::TruncateFirst { keep: 7 }
        );

        let stitched = stitch_str(vec![a, b]);
        assert_eq!(stitched, format!("ACGTACG{}", "G".repeat(13)));
        // One base per reference position 1-20
        assert_eq!(stitched.len(), 20);
    }

    #[test]
    fn test_first_pair_equal_length_later_wins() {
        let a = hit(1, 5, "AAAAA");
        let b = hit(4, 8, "CCCCC");
        assert_eq!(stitch_str(vec![a, b]), "AAACCCCC");
    }

    #[test]
    fn test_first_pair_longer_earlier_wins() {
        let a = hit(1, 20, &"A".repeat(20));
        let b = hit(18, 25, &"C".repeat(8));
        assert_eq!(Merge::resolve(&a, &b, true), Merge::TrimLater { overlap: 3 });
        assert_eq!(
            stitch_str(vec![a, b]),
            format!("{}{}", "A".repeat(20), "C".repeat(5))
        );
    }

    #[test]
    fn test_later_pair_longer_later_wins() {
        let hits = vec![
            hit(1, 10, &"A".repeat(10)),
            hit(20, 30, &"C".repeat(11)),
            hit(28, 50, &"G".repeat(23)),
        ];
        let expected = format!("{}{}{}", "A".repeat(10), "C".repeat(8), "G".repeat(23));
        assert_eq!(stitch_str(hits), expected);
    }

    #[test]
    fn test_later_pair_longer_earlier_wins() {
        let hits = vec![
            hit(1, 10, &"A".repeat(10)),
            hit(20, 40, &"C".repeat(21)),
            hit(38, 45, &"G".repeat(8)),
        ];
        let expected = format!("{}{}{}", "A".repeat(10), "C".repeat(21), "G".repeat(5));
        assert_eq!(stitch_str(hits), expected);
    }

    #[test]
    fn test_first_pair_rule_differs_from_later_pairs() {
        // The same geometry resolved as the first pair and as a later pair
        let a = hit(101, 110, &"A".repeat(10));
        let b = hit(108, 130, &"C".repeat(23));
        assert_eq!(
            Merge::resolve(&a, &b, true),
            Merge::TruncateFirst { keep: 107 }
        );
        assert_eq!(
            Merge::resolve(&a, &b, false),
            Merge::TrimAccumulated { overlap: 3 }
        );

        // As the first pair the cut is by absolute start and clamps to the
        // whole of A here
        assert_eq!(
            stitch_str(vec![a, b]),
            format!("{}{}", "A".repeat(10), "C".repeat(23))
        );
    }

    #[test]
    fn test_overlap_longer_than_sequence_clamps() {
        let mut builder = SequenceBuilder::seeded(b"ACGT");
        builder.apply(Merge::TrimAccumulated { overlap: 10 }, b"GG");
        assert_eq!(builder.finish(), b"GG".to_vec());

        let mut builder = SequenceBuilder::seeded(b"ACGT");
        builder.apply(Merge::TrimLater { overlap: 10 }, b"GG");
        assert_eq!(builder.finish(), b"ACGT".to_vec());
    }
}
