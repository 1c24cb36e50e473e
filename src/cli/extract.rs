use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::cli::check_cds::{check_annotation, check_json, print_text_check};
use crate::cli::curate::{build_consensus, print_text_report, report_json};
use crate::cli::{OutputFormat, ThresholdArgs};
use crate::tools::bakta::BaktaCommand;
use crate::tools::blastn::BlastnCommand;
use crate::utils::paths::{sample_name, sibling_path};

#[derive(Args)]
pub struct ExtractArgs {
    /// Path of the reference blastn database
    #[arg(short, long, value_name = "DB")]
    pub reference: PathBuf,

    /// Path to the query sequence
    #[arg(short, long, value_name = "FASTA")]
    pub query: PathBuf,

    /// Output FASTA file for the consensus sequence
    #[arg(short, long, value_name = "FASTA")]
    pub output: PathBuf,

    /// Prodigal training file; when given, the consensus is annotated with
    /// bakta and checked for premature stop codons
    #[arg(short, long, value_name = "TRN")]
    pub training_file: Option<PathBuf>,

    /// FASTA record name [default: output file name up to its first '.']
    #[arg(long)]
    pub id: Option<String>,

    #[command(flatten)]
    pub thresholds: ThresholdArgs,
}

pub fn run(args: ExtractArgs, format: OutputFormat) -> anyhow::Result<()> {
    let blast_xml = BlastnCommand::new(&args.query, &args.reference).run()?;

    let report = build_consensus(
        &blast_xml,
        &args.thresholds.to_filter(),
        &args.output,
        args.id.as_deref(),
    )?;

    let annotation = match &args.training_file {
        Some(training_file) => {
            let bakta = BaktaCommand::new(&args.output, training_file).run()?;
            let prefix = sample_name(&args.output);
            let mutations = sibling_path(&args.output, "_mutations.csv");
            let cds_gff = bakta.dir.join(format!("{prefix}_cds.gff3"));
            let cds_fasta = bakta.dir.join(format!("{prefix}_cds.fna"));
            let check = check_annotation(
                &bakta.gff3,
                &bakta.fna,
                &mutations,
                Some(cds_gff.as_path()),
                Some(cds_fasta.as_path()),
            )?;
            Some((check, mutations))
        }
        None => {
            info!("No training file given, skipping annotation");
            None
        }
    };

    match format {
        OutputFormat::Text => {
            print_text_report(&report, &args.output);
            if let Some((check, mutations)) = &annotation {
                println!();
                print_text_check(check, mutations);
            }
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "blast_report": blast_xml.display().to_string(),
                "consensus": report_json(&report, &args.output),
                "annotation": annotation
                    .as_ref()
                    .map(|(check, mutations)| check_json(check, mutations)),
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }

    Ok(())
}
