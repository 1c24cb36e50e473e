use std::io::Write;

use serde::Serialize;
use thiserror::Error;

/// Alignment gap character used by BLAST in `Hsp_qseq`
pub const GAP: u8 = b'-';

/// A base outside the `{A, C, G, T, -}` alphabet
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot complement '{base}' at position {position}: expected one of A, C, G, T, -")]
pub struct MalformedSequence {
    pub base: char,
    /// 0-based character index in the input sequence
    pub position: usize,
}

/// Complement a single base. Gaps map to themselves.
pub fn complement(base: u8) -> Option<u8> {
    match base {
        b'A' => Some(b'T'),
        b'T' => Some(b'A'),
        b'C' => Some(b'G'),
        b'G' => Some(b'C'),
        GAP => Some(GAP),
        _ => None,
    }
}

/// Reverse complement a sequence, keeping gap characters as they are.
///
/// # Errors
///
/// Returns `MalformedSequence` naming a character that has no complement.
pub fn reverse_complement(seq: &str) -> Result<String, MalformedSequence> {
    let len = seq.chars().count();
    let mut out = String::with_capacity(seq.len());
    for (i, base) in seq.chars().rev().enumerate() {
        let position = len - 1 - i;
        let c = u8::try_from(base)
            .ok()
            .and_then(complement)
            .ok_or(MalformedSequence { base, position })?;
        out.push(char::from(c));
    }
    Ok(out)
}

/// Reverse complement raw nucleotides, turning anything without a
/// complement (ambiguity codes, lowercase) into `N` after uppercasing.
pub fn reverse_complement_lenient(seq: &[u8]) -> Vec<u8> {
    seq.iter()
        .rev()
        .map(|&b| complement(b.to_ascii_uppercase()).unwrap_or(b'N'))
        .collect()
}

/// Remove all alignment gap characters
pub fn strip_gaps(seq: &[u8]) -> Vec<u8> {
    seq.iter().copied().filter(|&b| b != GAP).collect()
}

/// The final stitched, gap-free sequence
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ConsensusSequence(String);

impl ConsensusSequence {
    /// Build from a stitched buffer, dropping any gap characters
    pub fn from_stitched(buf: &[u8]) -> Self {
        Self(String::from_utf8_lossy(&strip_gaps(buf)).into_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Write as a single unwrapped FASTA record: `>id` then the sequence.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from the writer.
    pub fn write_fasta<W: Write>(&self, writer: &mut W, id: &str) -> std::io::Result<()> {
        writeln!(writer, ">{id}")?;
        writer.write_all(self.0.as_bytes())?;
        writer.flush()
    }
}

impl std::fmt::Display for ConsensusSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_complement_keeps_gaps() {
        assert_eq!(reverse_complement("ACGT-").unwrap(), "-ACGT");
        assert_eq!(reverse_complement("AAC-G").unwrap(), "C-GTT");
        assert_eq!(reverse_complement("").unwrap(), "");
    }

    #[test]
    fn test_reverse_complement_rejects_unknown_base() {
        let err = reverse_complement("ACNGT").unwrap_err();
        assert_eq!(err.base, 'N');
        assert_eq!(err.position, 2);

        // Lowercase is outside the alphabet too
        assert!(reverse_complement("acgt").is_err());
    }

    #[test]
    fn test_malformed_position_counts_characters() {
        let err = reverse_complement("AéCµGT").unwrap_err();
        assert_eq!(err.base, 'µ');
        assert_eq!(err.position, 3);
    }

    #[test]
    fn test_reverse_complement_lenient() {
        assert_eq!(reverse_complement_lenient(b"acgRT"), b"ANCGT".to_vec());
    }

    #[test]
    fn test_strip_gaps() {
        assert_eq!(strip_gaps(b"A-C--G-T"), b"ACGT".to_vec());
        assert_eq!(strip_gaps(b"----"), Vec::<u8>::new());
    }

    #[test]
    fn test_write_fasta_is_unwrapped() {
        let consensus = ConsensusSequence::from_stitched("A".repeat(200).as_bytes());
        let mut out = Vec::new();
        consensus.write_fasta(&mut out, "sample").unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], ">sample");
        assert_eq!(lines[1].len(), 200);
    }
}
