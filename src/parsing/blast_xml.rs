//! Parser for BLAST XML reports (`-outfmt 5`).
//!
//! The relevant part of the report is a tree of iterations (one per query),
//! hits (one per reference sequence) and HSPs (one per local alignment):
//!
//! ```text
//! BlastOutput
//! └── BlastOutput_iterations
//!     └── Iteration            Iteration_query-def
//!         └── Iteration_hits
//!             └── Hit          Hit_def, Hit_len
//!                 └── Hit_hsps
//!                     └── Hsp  Hsp_hit-from, Hsp_hit-to, Hsp_hit-frame,
//!                              Hsp_align-len, Hsp_qseq
//! ```
//!
//! Every HSP that passes the [`ReportFilter`] becomes one [`Hit`].

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::core::hit::{Hit, Strand};
use crate::parsing::ParseError;

/// Default minimum for both the reference hit length and the HSP alignment length
pub const DEFAULT_MIN_LENGTH: u64 = 5000;

/// Admission thresholds applied while reading a report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportFilter {
    /// Minimum `Hit_len`; shorter references are skipped entirely
    pub min_hit_length: u64,
    /// Minimum `Hsp_align-len`; shorter HSPs are skipped
    pub min_alignment_length: u64,
}

impl Default for ReportFilter {
    fn default() -> Self {
        Self {
            min_hit_length: DEFAULT_MIN_LENGTH,
            min_alignment_length: DEFAULT_MIN_LENGTH,
        }
    }
}

impl ReportFilter {
    /// Filter that admits every HSP
    pub fn none() -> Self {
        Self {
            min_hit_length: 0,
            min_alignment_length: 0,
        }
    }
}

#[derive(Debug, Deserialize)]
struct BlastOutputXml {
    #[serde(rename = "BlastOutput_iterations", default)]
    iterations: IterationsXml,
}

#[derive(Debug, Default, Deserialize)]
struct IterationsXml {
    #[serde(rename = "Iteration", default)]
    items: Vec<IterationXml>,
}

#[derive(Debug, Deserialize)]
struct IterationXml {
    #[serde(rename = "Iteration_query-def", default)]
    query_def: String,
    #[serde(rename = "Iteration_hits", default)]
    hits: HitsXml,
}

#[derive(Debug, Default, Deserialize)]
struct HitsXml {
    #[serde(rename = "Hit", default)]
    items: Vec<HitXml>,
}

#[derive(Debug, Deserialize)]
struct HitXml {
    #[serde(rename = "Hit_def", default)]
    def: String,
    #[serde(rename = "Hit_len")]
    len: u64,
    #[serde(rename = "Hit_hsps", default)]
    hsps: HspsXml,
}

#[derive(Debug, Default, Deserialize)]
struct HspsXml {
    #[serde(rename = "Hsp", default)]
    items: Vec<HspXml>,
}

#[derive(Debug, Deserialize)]
struct HspXml {
    #[serde(rename = "Hsp_hit-from")]
    hit_from: u64,
    #[serde(rename = "Hsp_hit-to")]
    hit_to: u64,
    #[serde(rename = "Hsp_hit-frame", default = "forward_frame")]
    hit_frame: i32,
    #[serde(rename = "Hsp_align-len")]
    align_len: u64,
    #[serde(rename = "Hsp_qseq", default)]
    qseq: String,
}

fn forward_frame() -> i32 {
    1
}

/// Parse a BLAST XML report file into hits.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Xml` if
/// it is not a BLAST XML report, or `ParseError::InvalidFormat` for an HSP
/// frame other than `1` or `-1`.
pub fn parse_blast_xml_file(path: &Path, filter: &ReportFilter) -> Result<Vec<Hit>, ParseError> {
    let text = std::fs::read_to_string(path)?;
    let hits = parse_blast_xml_text(&text, filter)?;
    info!(path = %path.display(), hits = hits.len(), "Parsed BLAST report");
    Ok(hits)
}

/// Parse BLAST XML report text into hits.
///
/// # Errors
///
/// See [`parse_blast_xml_file`].
pub fn parse_blast_xml_text(xml: &str, filter: &ReportFilter) -> Result<Vec<Hit>, ParseError> {
    let report: BlastOutputXml =
        quick_xml::de::from_str(xml).map_err(|e| ParseError::Xml(e.to_string()))?;

    let mut hits = Vec::new();
    for iteration in report.iterations.items {
        for hit in iteration.hits.items {
            if hit.len < filter.min_hit_length {
                debug!(
                    reference = %hit.def,
                    length = hit.len,
                    "Skipping reference below minimum hit length"
                );
                continue;
            }

            for hsp in hit.hsps.items {
                if hsp.align_len < filter.min_alignment_length {
                    debug!(
                        reference = %hit.def,
                        align_len = hsp.align_len,
                        "Skipping HSP below minimum alignment length"
                    );
                    continue;
                }

                let strand = Strand::from_frame(hsp.hit_frame).ok_or_else(|| {
                    ParseError::InvalidFormat(format!(
                        "Unexpected Hsp_hit-frame {} for hit '{}'",
                        hsp.hit_frame, hit.def
                    ))
                })?;

                hits.push(Hit::new(
                    iteration.query_def.as_str(),
                    hit.def.as_str(),
                    hsp.hit_from,
                    hsp.hit_to,
                    strand,
                    hsp.qseq,
                ));
            }
        }
    }

    Ok(hits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const REPORT: &str = r#"<?xml version="1.0"?>
<!DOCTYPE BlastOutput PUBLIC "-//NCBI//NCBI BlastOutput/EN" "http://www.ncbi.nlm.nih.gov/dtd/NCBI_BlastOutput.dtd">
<BlastOutput>
  <BlastOutput_program>blastn</BlastOutput_program>
  <BlastOutput_query-def>sample_1</BlastOutput_query-def>
  <BlastOutput_iterations>
    <Iteration>
      <Iteration_iter-num>1</Iteration_iter-num>
      <Iteration_query-ID>Query_1</Iteration_query-ID>
      <Iteration_query-def>sample_1 contig_7</Iteration_query-def>
      <Iteration_query-len>20000</Iteration_query-len>
      <Iteration_hits>
        <Hit>
          <Hit_num>1</Hit_num>
          <Hit_id>gnl|BL_ORD_ID|0</Hit_id>
          <Hit_def>serotype_19F</Hit_def>
          <Hit_len>120</Hit_len>
          <Hit_hsps>
            <Hsp>
              <Hsp_num>1</Hsp_num>
              <Hsp_bit-score>100</Hsp_bit-score>
              <Hsp_hit-from>1</Hsp_hit-from>
              <Hsp_hit-to>10</Hsp_hit-to>
              <Hsp_query-frame>1</Hsp_query-frame>
              <Hsp_hit-frame>1</Hsp_hit-frame>
              <Hsp_align-len>10</Hsp_align-len>
              <Hsp_qseq>ACGTACGTAC</Hsp_qseq>
              <Hsp_hseq>ACGTACGTAC</Hsp_hseq>
            </Hsp>
            <Hsp>
              <Hsp_num>2</Hsp_num>
              <Hsp_hit-from>60</Hsp_hit-from>
              <Hsp_hit-to>40</Hsp_hit-to>
              <Hsp_query-frame>1</Hsp_query-frame>
              <Hsp_hit-frame>-1</Hsp_hit-frame>
              <Hsp_align-len>21</Hsp_align-len>
              <Hsp_qseq>AAAAACCCCC-GGGGGTTTTT</Hsp_qseq>
            </Hsp>
            <Hsp>
              <Hsp_num>3</Hsp_num>
              <Hsp_hit-from>90</Hsp_hit-from>
              <Hsp_hit-to>93</Hsp_hit-to>
              <Hsp_hit-frame>1</Hsp_hit-frame>
              <Hsp_align-len>4</Hsp_align-len>
              <Hsp_qseq>ACGT</Hsp_qseq>
            </Hsp>
          </Hit_hsps>
        </Hit>
        <Hit>
          <Hit_num>2</Hit_num>
          <Hit_def>serotype_6A</Hit_def>
          <Hit_len>8</Hit_len>
          <Hit_hsps>
            <Hsp>
              <Hsp_hit-from>1</Hsp_hit-from>
              <Hsp_hit-to>8</Hsp_hit-to>
              <Hsp_hit-frame>1</Hsp_hit-frame>
              <Hsp_align-len>8</Hsp_align-len>
              <Hsp_qseq>ACGTACGT</Hsp_qseq>
            </Hsp>
          </Hit_hsps>
        </Hit>
      </Iteration_hits>
    </Iteration>
  </BlastOutput_iterations>
</BlastOutput>
"#;

    fn filter(min: u64) -> ReportFilter {
        ReportFilter {
            min_hit_length: min,
            min_alignment_length: min,
        }
    }

    #[test]
    fn test_parse_all_hsps() {
        let hits = parse_blast_xml_text(REPORT, &ReportFilter::none()).unwrap();
        assert_eq!(hits.len(), 4);

        let first = &hits[0];
        assert_eq!(first.query_id, "sample_1 contig_7");
        assert_eq!(first.hit_def, "serotype_19F");
        assert_eq!((first.hit_start, first.hit_end), (1, 10));
        assert_eq!(first.hit_frame, Strand::Forward);
        assert_eq!(first.seq_length, 9);
        assert_eq!(first.seq, "ACGTACGTAC");

        let reverse = &hits[1];
        assert_eq!(reverse.hit_frame, Strand::Reverse);
        assert_eq!((reverse.hit_start, reverse.hit_end), (60, 40));
        assert_eq!(reverse.seq_length, 20);
        assert_eq!(reverse.seq, "AAAAACCCCC-GGGGGTTTTT");

        assert_eq!(hits[3].hit_def, "serotype_6A");
    }

    #[test]
    fn test_thresholds() {
        // Hit_len 8 is dropped; HSPs 10 and 21 pass, HSP 4 does not
        let hits = parse_blast_xml_text(REPORT, &filter(10)).unwrap();
        let spans: Vec<(u64, u64)> = hits.iter().map(|h| (h.hit_start, h.hit_end)).collect();
        assert_eq!(spans, vec![(1, 10), (60, 40)]);

        // Threshold applies to both lengths independently
        let hits = parse_blast_xml_text(
            REPORT,
            &ReportFilter {
                min_hit_length: 0,
                min_alignment_length: 21,
            },
        )
        .unwrap();
        assert_eq!(hits.len(), 1);

        // Default threshold drops everything in this small report
        let hits = parse_blast_xml_text(REPORT, &ReportFilter::default()).unwrap();
        assert!(hits.is_empty());
    }

    #[test]
    fn test_no_hits() {
        let xml = r#"<?xml version="1.0"?>
<BlastOutput>
  <BlastOutput_iterations>
    <Iteration>
      <Iteration_query-def>sample_2</Iteration_query-def>
      <Iteration_hits>
      </Iteration_hits>
      <Iteration_message>No hits found</Iteration_message>
    </Iteration>
  </BlastOutput_iterations>
</BlastOutput>
"#;
        let hits = parse_blast_xml_text(xml, &ReportFilter::none()).unwrap();
        assert!(hits.is_empty());
    }

    #[test]
    fn test_invalid_frame() {
        let xml = REPORT.replace(
            "<Hsp_hit-frame>-1</Hsp_hit-frame>",
            "<Hsp_hit-frame>2</Hsp_hit-frame>",
        );
        let result = parse_blast_xml_text(&xml, &ReportFilter::none());
        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));
    }

    #[test]
    fn test_not_xml() {
        let result = parse_blast_xml_text("<BlastOutput><unclosed>", &ReportFilter::none());
        assert!(matches!(result, Err(ParseError::Xml(_))));
    }

    #[test]
    fn test_parse_file() {
        let mut temp = NamedTempFile::with_suffix(".xml").unwrap();
        temp.write_all(REPORT.as_bytes()).unwrap();
        temp.flush().unwrap();

        let hits = parse_blast_xml_file(temp.path(), &filter(10)).unwrap();
        assert_eq!(hits.len(), 2);
    }
}
