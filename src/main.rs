use clap::Parser;
use tracing_subscriber::EnvFilter;

use primaschema::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("primaschema=debug,info")
    } else {
        EnvFilter::new("primaschema=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::HashBed(args) => cli::hash::run_bed(args, cli.format, cli.verbose)?,
        cli::Commands::HashRef(args) => cli::hash::run_ref(args, cli.format, cli.verbose)?,
        cli::Commands::Validate(args) => cli::validate::run(args, cli.format, cli.verbose)?,
        cli::Commands::Build(args) => cli::build::run(args, cli.format, cli.verbose)?,
        cli::Commands::SequenceBed(args) => {
            cli::convert::run_sequence(args, cli.format, cli.verbose)?;
        }
        cli::Commands::CoordinateBed(args) => {
            cli::convert::run_coordinate(args, cli.format, cli.verbose)?;
        }
        cli::Commands::FormatBed(args) => cli::convert::run_format(args, cli.format, cli.verbose)?,
        cli::Commands::ShowIntervals(args) => {
            cli::inspect::run_intervals(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Diff(args) => cli::inspect::run_diff(args, cli.format, cli.verbose)?,
    }

    Ok(())
}
