use std::time::Instant;

use anyhow::Context;
use clap::Parser;

use ncinspect::cli::{self, Cli, Commands, OutputFormat};
use ncinspect::inspect::{
    print_report_csv, print_report_human, print_report_json, print_report_yaml,
};
use ncinspect::inspect_dataset;
use ncinspect::log::{init_logging, show_farewell_with_timing};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let start_time = Instant::now();

    match cli.command {
        Commands::Dims {
            file,
            record_dim,
            detailed,
            format,
        } => {
            let config =
                cli::resolve_config(cli.config.as_deref(), file, record_dim, detailed)?;
            let report = inspect_dataset(&config)
                .with_context(|| format!("Failed to inspect '{}'", config.path))?;

            match format {
                OutputFormat::Human => print_report_human(&report, config.detailed),
                OutputFormat::Json => print_report_json(&report)?,
                OutputFormat::Yaml => print_report_yaml(&report)?,
                OutputFormat::Csv => print_report_csv(&report),
            }
        }
        Commands::Completions { shell, output } => {
            cli::write_completions(shell, output)?;
        }
    }

    show_farewell_with_timing(start_time.elapsed());
    Ok(())
}
