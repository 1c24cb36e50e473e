use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use tracing::info;

use crate::annotation::cds::extract_cds_sequences;
use crate::annotation::completeness::PrematureStop;
use crate::annotation::gff::{filter_cds_rows, parse_cds_features};
use crate::annotation::mutations::{find_premature_stops, write_mutations_file};
use crate::cli::OutputFormat;
use crate::parsing::fasta::{read_fasta_file, write_fasta};

#[derive(Args)]
pub struct CheckCdsArgs {
    /// GFF3 annotation of the consensus (e.g. from bakta)
    #[arg(long, value_name = "GFF3")]
    pub gff: PathBuf,

    /// Annotated contigs (e.g. bakta .fna)
    #[arg(long, value_name = "FASTA")]
    pub fasta: PathBuf,

    /// Output CSV of premature stop codons
    #[arg(short, long, value_name = "CSV")]
    pub output: PathBuf,

    /// Also write the CDS rows of the annotation here
    #[arg(long, value_name = "GFF3")]
    pub cds_gff: Option<PathBuf>,

    /// Also write the extracted CDS sequences here
    #[arg(long, value_name = "FASTA")]
    pub cds_fasta: Option<PathBuf>,
}

/// Outcome of checking every CDS of an annotation
#[derive(Debug)]
pub struct CdsCheck {
    pub cds_count: usize,
    pub premature_stops: Vec<PrematureStop>,
}

pub fn run(args: CheckCdsArgs, format: OutputFormat) -> anyhow::Result<()> {
    let check = check_annotation(
        &args.gff,
        &args.fasta,
        &args.output,
        args.cds_gff.as_deref(),
        args.cds_fasta.as_deref(),
    )?;
    print_check(&check, &args.output, format)
}

/// Extract every CDS of an annotation, check it and write the mutations CSV
pub fn check_annotation(
    gff: &Path,
    fasta: &Path,
    output: &Path,
    cds_gff: Option<&Path>,
    cds_fasta: Option<&Path>,
) -> anyhow::Result<CdsCheck> {
    let gff_text = std::fs::read_to_string(gff)
        .with_context(|| format!("Failed to read {}", gff.display()))?;

    if let Some(path) = cds_gff {
        std::fs::write(path, filter_cds_rows(&gff_text))
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    let features = parse_cds_features(&gff_text)
        .with_context(|| format!("Failed to parse {}", gff.display()))?;
    let contigs = read_fasta_file(fasta)
        .with_context(|| format!("Failed to read {}", fasta.display()))?;
    let cds = extract_cds_sequences(&features, &contigs)?;

    if let Some(path) = cds_fasta {
        let mut writer = File::create(path)
            .map(BufWriter::new)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        write_fasta(&mut writer, &cds)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    let premature_stops = find_premature_stops(&cds);
    write_mutations_file(output, &premature_stops)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    info!(output = %output.display(), "Wrote disruptive mutations");

    Ok(CdsCheck {
        cds_count: cds.len(),
        premature_stops,
    })
}

fn print_check(check: &CdsCheck, output: &Path, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => print_text_check(check, output),
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&check_json(check, output))?
            );
        }
    }
    Ok(())
}

pub fn print_text_check(check: &CdsCheck, output: &Path) {
    println!("CDS checked: {}", check.cds_count);
    println!("Premature stop codons: {}", check.premature_stops.len());
    for stop in &check.premature_stops {
        println!("  {stop}");
    }
    println!("Written to: {}", output.display());
}

pub fn check_json(check: &CdsCheck, output: &Path) -> serde_json::Value {
    serde_json::json!({
        "output": output.display().to_string(),
        "cds_count": check.cds_count,
        "premature_stops": check.premature_stops,
    })
}
