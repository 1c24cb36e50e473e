use tracing::debug;

use crate::core::hit::{Hit, HitSet, Strand};
use crate::core::sequence::reverse_complement;
use crate::curation::CurationError;

/// Put a single hit on the forward strand.
///
/// Reverse strand hits get their sequence reverse complemented and their
/// coordinates swapped so that `hit_start <= hit_end`. Forward hits are
/// returned untouched.
///
/// # Errors
///
/// Returns `CurationError::MalformedSequence` if a reverse strand sequence
/// contains anything other than `A`, `C`, `G`, `T` or `-`.
pub fn normalize_hit(mut hit: Hit) -> Result<Hit, CurationError> {
    if hit.hit_frame != Strand::Reverse {
        return Ok(hit);
    }

    hit.seq = reverse_complement(&hit.seq).map_err(|source| CurationError::MalformedSequence {
        hit: hit.to_string(),
        source,
    })?;
    if hit.hit_start > hit.hit_end {
        std::mem::swap(&mut hit.hit_start, &mut hit.hit_end);
    }
    debug!(hit = %hit, "Reverse complemented hit");
    Ok(hit)
}

/// Normalize every hit and sort the result by `hit_start`.
///
/// # Errors
///
/// Fails on the first malformed reverse strand sequence.
pub fn normalize_and_sort(hits: Vec<Hit>) -> Result<HitSet, CurationError> {
    let normalized = hits
        .into_iter()
        .map(normalize_hit)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(HitSet::new(normalized))
}
