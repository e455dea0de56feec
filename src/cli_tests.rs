use crate::cli::{Cli, Commands, OutputFormat, resolve_config};
use crate::input::DEFAULT_RECORD_DIM;
use clap::Parser;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_dims_command_basic() {
    let cli = Cli::try_parse_from(["ncinspect", "dims", "profile.nc"]).unwrap();
    assert!(!cli.verbose);
    assert!(!cli.quiet);

    if let Commands::Dims {
        file,
        record_dim,
        detailed,
        format,
    } = cli.command
    {
        assert_eq!(file, Some("profile.nc".to_string()));
        assert_eq!(record_dim, None);
        assert!(!detailed);
        assert_eq!(format, OutputFormat::Human);
    } else {
        panic!("Expected Dims command");
    }
}

#[test]
fn test_dims_command_with_flags() {
    let cli = Cli::try_parse_from([
        "ncinspect",
        "dims",
        "model_output.nc",
        "--record-dim",
        "time",
        "--detailed",
        "--format",
        "json",
    ])
    .unwrap();

    if let Commands::Dims {
        file,
        record_dim,
        detailed,
        format,
    } = cli.command
    {
        assert_eq!(file, Some("model_output.nc".to_string()));
        assert_eq!(record_dim, Some("time".to_string()));
        assert!(detailed);
        assert_eq!(format, OutputFormat::Json);
    } else {
        panic!("Expected Dims command");
    }
}

#[test]
fn test_dims_command_short_record_dim() {
    let cli =
        Cli::try_parse_from(["ncinspect", "dims", "profile.nc", "-r", "N_PROF"]).unwrap();
    if let Commands::Dims { record_dim, .. } = cli.command {
        assert_eq!(record_dim, Some("N_PROF".to_string()));
    } else {
        panic!("Expected Dims command");
    }
}

#[test]
fn test_verbose_and_quiet_conflict() {
    let result = Cli::try_parse_from(["ncinspect", "dims", "profile.nc", "-v", "-q"]);
    assert!(result.is_err());
}

#[test]
fn test_output_format_values() {
    for (value, expected) in [
        ("human", OutputFormat::Human),
        ("json", OutputFormat::Json),
        ("yaml", OutputFormat::Yaml),
        ("csv", OutputFormat::Csv),
    ] {
        let cli =
            Cli::try_parse_from(["ncinspect", "dims", "profile.nc", "--format", value])
                .unwrap();
        if let Commands::Dims { format, .. } = cli.command {
            assert_eq!(format, expected);
        } else {
            panic!("Expected Dims command");
        }
    }

    assert!(Cli::try_parse_from(["ncinspect", "dims", "x.nc", "--format", "xml"]).is_err());
}

#[test]
fn test_completions_command() {
    let cli = Cli::try_parse_from(["ncinspect", "completions", "bash"]).unwrap();
    assert!(matches!(cli.command, Commands::Completions { .. }));
}

#[test]
fn test_resolve_config_requires_input() {
    let result = resolve_config(None, None, None, false);
    assert!(result.is_err());
}

#[test]
fn test_resolve_config_from_positional_file() {
    let config = resolve_config(None, Some("profile.nc".to_string()), None, false).unwrap();
    assert_eq!(config.path, "profile.nc");
    assert_eq!(config.record_dim, DEFAULT_RECORD_DIM);
    assert!(!config.detailed);
}

#[test]
fn test_resolve_config_cli_overrides_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let config_path = dir.path().join("argo.json");
    fs::write(
        &config_path,
        r#"{"path": "from_config.nc", "record_dim": "N_PROF"}"#,
    )?;

    // File values apply when the CLI leaves them unset
    let config = resolve_config(Some(config_path.as_path()), None, None, false)?;
    assert_eq!(config.path, "from_config.nc");
    assert_eq!(config.record_dim, "N_PROF");

    // CLI arguments win over config-file values
    let config = resolve_config(
        Some(config_path.as_path()),
        Some("override.nc".to_string()),
        Some("time".to_string()),
        true,
    )?;
    assert_eq!(config.path, "override.nc");
    assert_eq!(config.record_dim, "time");
    assert!(config.detailed);
    Ok(())
}

#[test]
fn test_resolve_config_missing_config_file() {
    let path = std::path::Path::new("no/such/config.yaml");
    assert!(resolve_config(Some(path), None, None, false).is_err());
}
