use serde::{Deserialize, Serialize};

/// Orientation of a hit on the reference, as reported in `Hsp_hit-frame`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strand {
    Forward,
    Reverse,
}

impl Strand {
    /// Parse a BLAST frame value. Only `1` and `-1` are meaningful for blastn.
    pub fn from_frame(frame: i32) -> Option<Self> {
        match frame {
            1 => Some(Strand::Forward),
            -1 => Some(Strand::Reverse),
            _ => None,
        }
    }
}

impl std::fmt::Display for Strand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Forward => write!(f, "+"),
            Self::Reverse => write!(f, "-"),
        }
    }
}

/// A single alignment (HSP) between the query and one reference sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hit {
    /// Start on the reference (1-based, `Hsp_hit-from`)
    pub hit_start: u64,

    /// End on the reference (1-based, `Hsp_hit-to`)
    pub hit_end: u64,

    /// Strand of the hit on the reference
    pub hit_frame: Strand,

    /// Span on the reference, `|hit_end - hit_start|`
    pub seq_length: u64,

    /// Query definition line (`Iteration_query-def`)
    pub query_id: String,

    /// Reference definition line (`Hit_def`)
    pub hit_def: String,

    /// Aligned query sequence (`Hsp_qseq`), may contain `-` gaps
    pub seq: String,
}

impl Hit {
    pub fn new(
        query_id: impl Into<String>,
        hit_def: impl Into<String>,
        hit_start: u64,
        hit_end: u64,
        hit_frame: Strand,
        seq: impl Into<String>,
    ) -> Self {
        Self {
            hit_start,
            hit_end,
            hit_frame,
            seq_length: hit_start.abs_diff(hit_end),
            query_id: query_id.into(),
            hit_def: hit_def.into(),
            seq: seq.into(),
        }
    }

    /// True when the interval is increasing in its current orientation
    pub fn is_well_formed(&self) -> bool {
        self.hit_start < self.hit_end
    }

    /// True when `self` strictly encloses `other` on the reference
    pub fn encloses(&self, other: &Hit) -> bool {
        self.hit_start < other.hit_start && other.hit_end < self.hit_end
    }

    /// True when `self` (earlier by start) reaches into `next`
    pub fn overlaps_next(&self, next: &Hit) -> bool {
        self.hit_end >= next.hit_start
    }
}

impl std::fmt::Display for Hit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}-{}({}) len={}",
            self.hit_def, self.hit_start, self.hit_end, self.hit_frame, self.seq_length
        )
    }
}

/// Forward-oriented hits sorted by `hit_start`, ready for stitching.
///
/// Construction always sorts (stably), so adjacency in a `HitSet` is adjacency
/// on the reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HitSet(Vec<Hit>);

impl HitSet {
    pub fn new(mut hits: Vec<Hit>) -> Self {
        hits.sort_by_key(|h| h.hit_start);
        Self(hits)
    }

    pub fn hits(&self) -> &[Hit] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Hit> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a HitSet {
    type Item = &'a Hit;
    type IntoIter = std::slice::Iter<'a, Hit>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
