use serde::Serialize;

use crate::annotation::AnnotationError;
use crate::core::hit::Strand;

/// GFF3 feature type of coding sequences
pub const CDS_TYPE: &str = "CDS";

/// One CDS row of a GFF3 file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CdsFeature {
    /// Contig the feature is on (column 1)
    pub seqid: String,
    /// 1-based inclusive start (column 4)
    pub start: u64,
    /// 1-based inclusive end (column 5)
    pub end: u64,
    /// `-` in column 7 is reverse, anything else is read as forward
    pub strand: Strand,
    /// `ID` attribute, if present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl CdsFeature {
    /// bedtools-style name: `seqid:start-end(strand)` with a 0-based start
    pub fn name(&self) -> String {
        format!(
            "{}:{}-{}({})",
            self.seqid,
            self.start.saturating_sub(1),
            self.end,
            self.strand
        )
    }
}

fn is_cds_row(line: &str) -> bool {
    let mut fields = line.split('\t');
    fields.nth(2) == Some(CDS_TYPE)
}

/// Keep only the `CDS` rows of GFF3 text, one per line
pub fn filter_cds_rows(text: &str) -> String {
    let mut out = String::new();
    for line in text.lines().filter(|l| is_cds_row(l)) {
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Parse the `CDS` rows of GFF3 text.
///
/// # Errors
///
/// Returns `AnnotationError::InvalidFormat` if a CDS row has fewer than 7
/// columns or non-numeric coordinates.
pub fn parse_cds_features(text: &str) -> Result<Vec<CdsFeature>, AnnotationError> {
    let mut features = Vec::new();

    for (i, line) in text.lines().enumerate() {
        if !is_cds_row(line) {
            continue;
        }

        // Line numbers in errors are 1-based for user friendliness
        let line_num = i + 1;
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < 7 {
            return Err(AnnotationError::InvalidFormat(format!(
                "Line {line_num} has fewer than 7 fields"
            )));
        }

        let coordinate = |idx: usize| -> Result<u64, AnnotationError> {
            fields[idx].trim().parse().map_err(|_| {
                AnnotationError::InvalidFormat(format!(
                    "Invalid coordinate on line {}: '{}'",
                    line_num, fields[idx]
                ))
            })
        };

        let strand = if fields[6].trim() == "-" {
            Strand::Reverse
        } else {
            Strand::Forward
        };

        features.push(CdsFeature {
            seqid: fields[0].to_string(),
            start: coordinate(3)?,
            end: coordinate(4)?,
            strand,
            id: fields.get(8).and_then(|attrs| attribute(attrs, "ID")),
        });
    }

    Ok(features)
}

/// Look up a `key=value` attribute in column 9
fn attribute(attributes: &str, key: &str) -> Option<String> {
    attributes
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const GFF: &str = "##gff-version 3\n\
##sequence-region contig_1 1 3000\n\
contig_1\tbakta\tregion\t1\t3000\t.\t+\t.\tID=contig_1\n\
contig_1\tPyrodigal\tCDS\t10\t99\t.\t+\t0\tID=ABC_0001;Name=wzg;gene=wzg\n\
contig_1\tPyrodigal\tgene\t10\t99\t.\t+\t.\tID=ABC_0001_gene\n\
contig_1\tPyrodigal\tCDS\t200\t400\t.\t-\t0\tID=ABC_0002;product=hypothetical protein\n\
##FASTA\n\
>contig_1\n\
ACGT\n";

    #[test]
    fn test_filter_cds_rows() {
        let cds = filter_cds_rows(GFF);
        let lines: Vec<&str> = cds.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| l.split('\t').nth(2) == Some("CDS")));
    }

    #[test]
    fn test_parse_cds_features() {
        let features = parse_cds_features(GFF).unwrap();
        assert_eq!(features.len(), 2);

        assert_eq!(features[0].seqid, "contig_1");
        assert_eq!((features[0].start, features[0].end), (10, 99));
        assert_eq!(features[0].strand, Strand::Forward);
        assert_eq!(features[0].id.as_deref(), Some("ABC_0001"));
        assert_eq!(features[0].name(), "contig_1:9-99(+)");

        assert_eq!(features[1].strand, Strand::Reverse);
        assert_eq!(features[1].name(), "contig_1:199-400(-)");
    }

    #[test]
    fn test_parse_invalid_coordinate() {
        let gff = "contig_1\tPyrodigal\tCDS\tten\t99\t.\t+\t0\tID=x\n";
        assert!(matches!(
            parse_cds_features(gff),
            Err(AnnotationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_parse_short_row() {
        let gff = "contig_1\tPyrodigal\tCDS\t10\n";
        assert!(parse_cds_features(gff).is_err());
    }
}
