use clap::Parser;
use cps_extractor::cli;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // RUST_LOG wins over the verbosity flags
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("cps_extractor=debug,info")
        } else if cli.quiet {
            EnvFilter::new("warn")
        } else {
            EnvFilter::new("cps_extractor=info")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Extract(args) => {
            cli::extract::run(args, cli.format)?;
        }
        cli::Commands::Curate(args) => {
            cli::curate::run(args, cli.format)?;
        }
        cli::Commands::CheckCds(args) => {
            cli::check_cds::run(args, cli.format)?;
        }
    }

    Ok(())
}
