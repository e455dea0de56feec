//! # CLI Module
//!
//! This module provides the command-line interface for ncinspect, including:
//! - Argument parsing with clap
//! - Configuration file loading (JSON/YAML)
//! - Environment variable support with NCINSPECT_ prefix
//! - Multi-source configuration merging with priority system
//! - Shell completion generation

use crate::input::InspectConfig;
use anyhow::{Context, Result, bail};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// NetCDF dimension inspector with configurable record-dimension lookup
#[derive(Parser, Debug)]
#[command(name = "ncinspect")]
#[command(about = "Inspect the dimensions of netCDF datasets")]
#[command(version)]
#[command(author = "Rogerio Alves <rjmalves@users.noreply.github.com>")]
#[command(long_about = "
ncinspect is a command-line tool for inspecting the dimensions of netCDF
datasets. It reports the current length of a conventionally named record
dimension and lists every dimension with its length, in the order the
dimensions were defined in the file.

FEATURES:
  • Record-dimension lookup: configurable name, defaults to 'N_REC'
  • Container detection: classic CDF-1/CDF-2/CDF-5 and HDF5-based netCDF-4
  • Configuration files: JSON and YAML format support
  • Structured output: human, JSON, YAML, and CSV formats

EXAMPLES:
  # Basic inspection
  ncinspect dims profile.nc

  # Producer that names its record dimension 'time'
  ncinspect dims model_output.nc --record-dim time

  # Dataset context and unlimited-dimension markers
  ncinspect dims profile.nc --detailed

  # JSON output for scripting
  ncinspect dims profile.nc --format json

  # Using a config file
  ncinspect --config argo.yaml dims

  # Generate completions
  ncinspect completions bash > ~/.bash_completion.d/ncinspect
")]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode - suppress all logging except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Configuration file path (JSON or YAML)
    #[arg(short, long, global = true, env = "NCINSPECT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report the record dimension and all dimensions of a dataset
    #[command(long_about = "
Report the record dimension and all dimensions of a netCDF dataset.

The record dimension is looked up by name (default 'N_REC'); when the
dataset defines no dimension of that name the report states 'No unlimited'
instead of failing, since many producers define none. All dimensions are
listed with their lengths in the order they were defined in the file.

EXAMPLES:
  # Argo float profile
  ncinspect dims nodc_D1900975_339.nc

  # Different record-dimension convention
  ncinspect dims reanalysis.nc --record-dim time

  # Machine-readable listing
  ncinspect dims profile.nc --format csv
")]
    Dims {
        /// NetCDF file path
        #[arg(value_name = "FILE", env = "NCINSPECT_INPUT")]
        file: Option<String>,

        /// Record-dimension name to look up
        #[arg(short = 'r', long, env = "NCINSPECT_RECORD_DIM")]
        record_dim: Option<String>,

        /// Show dataset context (path, format, file size, unlimited markers)
        #[arg(long)]
        detailed: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
        format: OutputFormat,
    },

    /// Generate shell completions
    #[command(long_about = "
Generate shell completion scripts for various shells.

Supports bash, zsh, fish, and PowerShell completion generation.

EXAMPLES:
  # Bash (add to ~/.bashrc or /etc/bash_completion.d/)
  ncinspect completions bash > ~/.bash_completion.d/ncinspect

  # Zsh (add to fpath)
  ncinspect completions zsh > ~/.zsh/completions/_ncinspect

  # Fish
  ncinspect completions fish > ~/.config/fish/completions/ncinspect.fish
")]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON structured output
    Json,
    /// YAML structured output
    Yaml,
    /// CSV output (dimension listing)
    Csv,
}

/// Resolves the effective job configuration from a config file and CLI
/// arguments.
///
/// Priority: CLI arguments > environment variables (applied by clap) >
/// configuration file > built-in defaults (record dimension `N_REC`).
pub fn resolve_config(
    config_path: Option<&Path>,
    file: Option<String>,
    record_dim: Option<String>,
    detailed: bool,
) -> Result<InspectConfig> {
    let mut config = match config_path {
        Some(path) => InspectConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => match &file {
            Some(path) => InspectConfig::new(path.clone()),
            None => bail!("No input file given: pass FILE or use --config"),
        },
    };

    if let Some(path) = file {
        config.path = path;
    }
    if let Some(name) = record_dim {
        config.record_dim = name;
    }
    if detailed {
        config.detailed = true;
    }

    Ok(config)
}

/// Writes completion script for `shell` to `output`, or stdout when no
/// path is given.
pub fn write_completions(shell: Shell, output: Option<PathBuf>) -> Result<()> {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();

    match output {
        Some(path) => {
            let mut file = std::fs::File::create(&path).with_context(|| {
                format!("Failed to create completion file {}", path.display())
            })?;
            clap_complete::generate(shell, &mut cmd, bin_name, &mut file);
        }
        None => {
            clap_complete::generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
        }
    }
    Ok(())
}
