//! Containment filtering.
//!
//! Only hits against the reference of the single longest hit are considered.
//! A hit is dropped when another well-formed hit against that reference
//! strictly encloses it (`outer.start < inner.start` and
//! `inner.end < outer.end`). Hits written with `start > end` (raw reverse
//! strand records) never take part in containment.
//!
//! For well-formed intervals, strict enclosure already implies the outer hit
//! is strictly longer, so equal-length hits can never contain each other.
//! That lets the check run as a sweep over hits sorted by start instead of
//! comparing every pair.

use serde::Serialize;
use tracing::{debug, info};

use crate::core::hit::Hit;

/// Result of containment filtering
#[derive(Debug, Clone, Default, Serialize)]
pub struct ContainmentOutcome {
    /// `hit_def` of the longest input hit, `None` for empty input
    pub reference: Option<String>,

    /// Hits against `reference` that no other hit encloses, in input order
    pub retained: Vec<Hit>,

    /// Hits against `reference` enclosed by a longer hit, in input order
    pub dropped: Vec<Hit>,

    /// Number of hits discarded because they matched another reference
    pub other_reference_hits: usize,
}

/// Reference definition of the longest hit. The first hit wins ties.
pub fn select_reference(hits: &[Hit]) -> Option<&str> {
    let mut longest: Option<&Hit> = None;
    for hit in hits {
        if longest.map_or(true, |best| hit.seq_length > best.seq_length) {
            longest = Some(hit);
        }
    }
    longest.map(|h| h.hit_def.as_str())
}

/// Restrict to the longest hit's reference and drop contained hits
pub fn filter_contained(hits: Vec<Hit>) -> ContainmentOutcome {
    let Some(reference) = select_reference(&hits).map(str::to_string) else {
        return ContainmentOutcome::default();
    };

    let total = hits.len();
    let candidates: Vec<Hit> = hits
        .into_iter()
        .filter(|h| h.hit_def == reference)
        .collect();
    let other_reference_hits = total - candidates.len();

    let flags = contained_flags(&candidates);
    let mut retained = Vec::with_capacity(candidates.len());
    let mut dropped = Vec::new();
    for (hit, contained) in candidates.into_iter().zip(flags) {
        if contained {
            debug!(hit = %hit, "Dropping hit contained in a longer hit");
            dropped.push(hit);
        } else {
            retained.push(hit);
        }
    }

    info!(
        reference = %reference,
        retained = retained.len(),
        dropped = dropped.len(),
        other_reference_hits,
        "Containment filtering complete"
    );

    ContainmentOutcome {
        reference: Some(reference),
        retained,
        dropped,
        other_reference_hits,
    }
}

/// Mark every hit that some other well-formed hit strictly encloses.
///
/// Well-formed hits are visited in start order, one group of equal starts at
/// a time. A hit is enclosed exactly when a hit with a smaller start reaches
/// past its end, so tracking the furthest end seen in earlier groups suffices.
fn contained_flags(hits: &[Hit]) -> Vec<bool> {
    let mut flags = vec![false; hits.len()];

    let mut order: Vec<usize> = (0..hits.len())
        .filter(|&i| hits[i].is_well_formed())
        .collect();
    order.sort_by_key(|&i| hits[i].hit_start);

    let mut furthest_end: Option<u64> = None;
    let mut group_start = 0;
    while group_start < order.len() {
        let start = hits[order[group_start]].hit_start;
        let group_end = order[group_start..]
            .iter()
            .position(|&i| hits[i].hit_start != start)
            .map_or(order.len(), |offset| group_start + offset);
        let group = &order[group_start..group_end];

        for &i in group {
            if furthest_end.is_some_and(|end| end > hits[i].hit_end) {
                flags[i] = true;
            }
        }

        let group_furthest = group.iter().map(|&i| hits[i].hit_end).max();
        furthest_end = furthest_end.max(group_furthest);
        group_start = group_end;
    }

    flags
}
