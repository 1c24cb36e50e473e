use std::collections::HashMap;

use tracing::debug;

use crate::annotation::gff::CdsFeature;
use crate::annotation::AnnotationError;
use crate::core::hit::Strand;
use crate::core::sequence::reverse_complement_lenient;
use crate::parsing::fasta::FastaRecord;

/// Cut each CDS out of its contig, reverse complementing `-` strand features.
///
/// Records are named with [`CdsFeature::name`].
///
/// # Errors
///
/// Returns `AnnotationError::UnknownContig` if a feature's contig is missing
/// and `AnnotationError::OutOfBounds` if its interval does not fit the contig.
pub fn extract_cds_sequences(
    features: &[CdsFeature],
    contigs: &[FastaRecord],
) -> Result<Vec<FastaRecord>, AnnotationError> {
    let by_name: HashMap<&str, &[u8]> = contigs
        .iter()
        .map(|c| (c.name.as_str(), c.sequence.as_slice()))
        .collect();

    features
        .iter()
        .map(|feature| {
            let name = feature.name();
            let contig = by_name.get(feature.seqid.as_str()).ok_or_else(|| {
                AnnotationError::UnknownContig {
                    feature: name.clone(),
                    seqid: feature.seqid.clone(),
                }
            })?;

            let range = usize::try_from(feature.start)
                .ok()
                .zip(usize::try_from(feature.end).ok())
                .filter(|&(start, end)| start >= 1 && start <= end && end <= contig.len())
                .map(|(start, end)| start - 1..end)
                .ok_or_else(|| AnnotationError::OutOfBounds {
                    feature: name.clone(),
                    contig_len: contig.len(),
                })?;

            let slice = &contig[range];
            let sequence = match feature.strand {
                Strand::Forward => slice.to_ascii_uppercase(),
                Strand::Reverse => reverse_complement_lenient(slice),
            };
            debug!(cds = %name, len = sequence.len(), "Extracted CDS");
            Ok(FastaRecord::new(name, sequence))
        })
        .collect()
}
