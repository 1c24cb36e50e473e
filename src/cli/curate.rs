use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use tracing::info;

use crate::cli::{OutputFormat, ThresholdArgs};
use crate::curation::engine::{assemble, ConsensusReport};
use crate::parsing::blast_xml::{parse_blast_xml_file, ReportFilter};
use crate::utils::paths::sample_name;

#[derive(Args)]
pub struct CurateArgs {
    /// BLAST XML report (blastn -outfmt 5)
    #[arg(long = "blast-xml", value_name = "XML")]
    pub blast_xml: PathBuf,

    /// Output FASTA file for the consensus sequence
    #[arg(short, long, value_name = "FASTA")]
    pub output: PathBuf,

    /// FASTA record name [default: output file name up to its first '.']
    #[arg(long)]
    pub id: Option<String>,

    #[command(flatten)]
    pub thresholds: ThresholdArgs,
}

pub fn run(args: CurateArgs, format: OutputFormat) -> anyhow::Result<()> {
    let report = build_consensus(
        &args.blast_xml,
        &args.thresholds.to_filter(),
        &args.output,
        args.id.as_deref(),
    )?;
    print_report(&report, &args.output, format)
}

/// Parse a BLAST report, assemble its hits and write the consensus FASTA
pub fn build_consensus(
    blast_xml: &Path,
    filter: &ReportFilter,
    output: &Path,
    id: Option<&str>,
) -> anyhow::Result<ConsensusReport> {
    let hits = parse_blast_xml_file(blast_xml, filter)
        .with_context(|| format!("Failed to read BLAST report {}", blast_xml.display()))?;

    let report = assemble(hits)?;

    let id = id.map_or_else(|| sample_name(output), str::to_string);
    let mut writer = File::create(output)
        .map(BufWriter::new)
        .with_context(|| format!("Failed to create {}", output.display()))?;
    report
        .consensus
        .write_fasta(&mut writer, &id)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    info!(output = %output.display(), id = %id, "Wrote consensus sequence");
    Ok(report)
}

fn print_report(
    report: &ConsensusReport,
    output: &Path,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => print_text_report(report, output),
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&report_json(report, output))?
            );
        }
    }
    Ok(())
}

pub fn print_text_report(report: &ConsensusReport, output: &Path) {
    println!("Consensus Assembly");
    println!("{}", "=".repeat(60));

    println!(
        "\nReference: {}",
        report.reference.as_deref().unwrap_or("-")
    );
    println!("  Input hits: {}", report.input_hits);
    println!("  Other reference hits: {}", report.other_reference_hits);
    println!("  Contained hits dropped: {}", report.dropped.len());
    println!("  Hits stitched: {}", report.curated.len());

    println!("\nStitched hits:");
    for hit in &report.curated {
        println!("  {hit}");
    }

    println!("\nConsensus length: {}", report.consensus.len());
    println!("Written to: {}", output.display());
}

pub fn report_json(report: &ConsensusReport, output: &Path) -> serde_json::Value {
    serde_json::json!({
        "output": output.display().to_string(),
        "reference": report.reference,
        "input_hits": report.input_hits,
        "other_reference_hits": report.other_reference_hits,
        "dropped": report.dropped,
        "curated": report.curated,
        "consensus_length": report.consensus.len(),
        "consensus": report.consensus,
    })
}
