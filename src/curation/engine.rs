use serde::Serialize;
use tracing::info;

use crate::core::hit::{Hit, HitSet};
use crate::core::sequence::ConsensusSequence;
use crate::curation::containment::filter_contained;
use crate::curation::emitter::emit;
use crate::curation::orientation::normalize_and_sort;
use crate::curation::stitcher::stitch;
use crate::curation::CurationError;

/// Result of assembling one query against its best reference
#[derive(Debug, Clone, Serialize)]
pub struct ConsensusReport {
    /// Reference the consensus was built against
    pub reference: Option<String>,

    /// Number of hits handed to the engine
    pub input_hits: usize,

    /// Hits discarded for matching a different reference
    pub other_reference_hits: usize,

    /// Hits discarded for lying inside a longer hit
    pub dropped: Vec<Hit>,

    /// Forward-oriented, sorted hits that were stitched
    pub curated: HitSet,

    /// The stitched, gap-free sequence
    pub consensus: ConsensusSequence,
}

/// Run containment filtering, orientation, stitching and gap removal.
///
/// # Errors
///
/// Returns `CurationError::EmptyInput` if no hits survive filtering and
/// `CurationError::MalformedSequence` if a reverse strand hit cannot be
/// complemented.
pub fn assemble(hits: Vec<Hit>) -> Result<ConsensusReport, CurationError> {
    let input_hits = hits.len();
    let outcome = filter_contained(hits);

    let curated = normalize_and_sort(outcome.retained)?;
    for hit in &curated {
        info!(hit = %hit, "Curated hit");
    }

    let stitched = stitch(&curated)?;
    let consensus = emit(&stitched);

    info!(
        hits = curated.len(),
        consensus_len = consensus.len(),
        "Consensus assembled"
    );

    Ok(ConsensusReport {
        reference: outcome.reference,
        input_hits,
        other_reference_hits: outcome.other_reference_hits,
        dropped: outcome.dropped,
        curated,
        consensus,
    })
}
