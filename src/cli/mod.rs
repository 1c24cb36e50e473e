//! Command-line interface for cps-extractor.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **extract**: Run blastn, assemble the consensus and optionally annotate it
//! - **curate**: Assemble the consensus from an existing BLAST XML report
//! - **check-cds**: Report premature stop codons in an existing annotation
//!
//! ## Usage
//!
//! ```text
//! # Full pipeline
//! cps-extractor extract -r cps_db -q sample_1.fasta -o sample_1_cps.fa -t spn.trn
//!
//! # Consensus only, from a report produced elsewhere
//! cps-extractor curate --blast-xml sample_1_blast_results.xml -o sample_1_cps.fa
//!
//! # JSON summary for scripting
//! cps-extractor --format json curate --blast-xml report.xml -o out.fa
//!
//! # Mutations from a bakta run
//! cps-extractor check-cds --gff out.gff3 --fasta out.fna -o out_mutations.csv
//! ```

use clap::{Parser, Subcommand};

use crate::parsing::blast_xml::{ReportFilter, DEFAULT_MIN_LENGTH};

pub mod check_cds;
pub mod curate;
pub mod extract;

#[derive(Parser)]
#[command(name = "cps-extractor")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Assemble a consensus CPS locus sequence from BLAST hits")]
#[command(
    long_about = "cps-extractor builds one consensus sequence for a query from its BLAST hits against a reference database.\n\nIt keeps hits against the best-matching reference only and then:\n- Drops hits contained in longer hits\n- Reverse complements reverse strand hits\n- Stitches the remaining hits, the longer hit winning any overlap\n- Optionally annotates the result and reports premature stop codons"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run blastn and assemble the consensus, optionally annotating it
    Extract(extract::ExtractArgs),

    /// Assemble the consensus from an existing BLAST XML report
    Curate(curate::CurateArgs),

    /// Report premature stop codons in annotated CDS
    CheckCds(check_cds::CheckCdsArgs),
}

/// Admission thresholds for BLAST hits
#[derive(clap::Args, Debug, Clone)]
pub struct ThresholdArgs {
    /// Minimum reference length and alignment length for a hit to be used
    #[arg(long, default_value_t = DEFAULT_MIN_LENGTH)]
    pub min_length: u64,

    /// Minimum reference length (`Hit_len`), overrides --min-length
    #[arg(long)]
    pub min_hit_length: Option<u64>,

    /// Minimum alignment length (`Hsp_align-len`), overrides --min-length
    #[arg(long)]
    pub min_alignment_length: Option<u64>,
}

impl ThresholdArgs {
    pub fn to_filter(&self) -> ReportFilter {
        ReportFilter {
            min_hit_length: self.min_hit_length.unwrap_or(self.min_length),
            min_alignment_length: self.min_alignment_length.unwrap_or(self.min_length),
        }
    }
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_overrides() {
        let args = ThresholdArgs {
            min_length: 1000,
            min_hit_length: None,
            min_alignment_length: Some(200),
        };
        assert_eq!(
            args.to_filter(),
            ReportFilter {
                min_hit_length: 1000,
                min_alignment_length: 200,
            }
        );
    }

    #[test]
    fn test_cli_parses_curate() {
        let cli = Cli::try_parse_from([
            "cps-extractor",
            "--format",
            "json",
            "curate",
            "--blast-xml",
            "report.xml",
            "-o",
            "out.fa",
            "--min-length",
            "10",
        ])
        .unwrap();
        assert!(matches!(cli.format, OutputFormat::Json));
        match cli.command {
            Commands::Curate(args) => {
                assert_eq!(args.thresholds.to_filter(), ReportFilter {
                    min_hit_length: 10,
                    min_alignment_length: 10,
                });
            }
            _ => panic!("expected curate"),
        }
    }
}
