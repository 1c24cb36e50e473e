use tracing::debug;

use crate::core::sequence::ConsensusSequence;

/// Turn the stitched buffer into the final gap-free consensus
pub fn emit(stitched: &[u8]) -> ConsensusSequence {
    let consensus = ConsensusSequence::from_stitched(stitched);
    debug!(
        stitched_len = stitched.len(),
        consensus_len = consensus.len(),
        "Removed alignment gaps"
    );
    consensus
}
