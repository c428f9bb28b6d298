//! Integration tests for CLI
//!
//! These tests verify CLI functionality without running actual commands,
//! but instead test the command parsing and structure.

#![allow(clippy::panic)] // Allow panic! in tests for clear failure messages

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

// Mock CLI structure for testing (mirrors main.rs)
#[derive(Parser)]
#[command(name = "typed-values")]
#[command(author, version, about = "Validate and canonicalize typed values", long_about = None)]
struct Cli {
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[arg(short, long, value_enum, global = true)]
    output: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    Kinds,
    Check {
        #[arg(short, long)]
        kind: String,
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<String>,
    },
    Normalize {
        #[arg(short, long)]
        kind: String,
        #[arg(long)]
        tolerant: bool,
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<String>,
    },
    Collect {
        #[arg(short, long)]
        kind: String,
        #[arg(long)]
        tolerant: bool,
        json: String,
    },
    Config,
}

fn parse_args(args: &[&str]) -> Result<Cli, clap::Error> {
    let os_args: Vec<OsString> = args.iter().map(OsString::from).collect();
    Cli::try_parse_from(os_args)
}

#[test]
fn cli_parses_kinds_command() {
    let cli = parse_args(&["typed-values", "kinds"]).unwrap();
    assert!(matches!(cli.command, Commands::Kinds));
    assert_eq!(cli.verbose, 0);
    assert!(cli.config.is_none());
    assert!(cli.output.is_none());
}

#[test]
fn cli_parses_check_with_values() {
    let cli = parse_args(&["typed-values", "check", "--kind", "tinyint", "127", "-128"]).unwrap();
    if let Commands::Check { kind, values } = cli.command {
        assert_eq!(kind, "tinyint");
        assert_eq!(values, vec!["127", "-128"]);
    } else {
        panic!("Expected Check command");
    }
}

#[test]
fn cli_check_requires_values() {
    assert!(parse_args(&["typed-values", "check", "--kind", "integer"]).is_err());
}

#[test]
fn cli_check_requires_kind() {
    assert!(parse_args(&["typed-values", "check", "42"]).is_err());
}

#[test]
fn cli_parses_normalize_tolerant() {
    let cli = parse_args(&[
        "typed-values",
        "normalize",
        "--kind",
        "float",
        "--tolerant",
        "5.0",
        "5.00",
    ])
    .unwrap();
    if let Commands::Normalize {
        kind,
        tolerant,
        values,
    } = cli.command
    {
        assert_eq!(kind, "float");
        assert!(tolerant);
        assert_eq!(values.len(), 2);
    } else {
        panic!("Expected Normalize command");
    }
}

#[test]
fn cli_normalize_defaults_to_strict() {
    let cli = parse_args(&["typed-values", "normalize", "-k", "email", "a@b.de"]).unwrap();
    if let Commands::Normalize { tolerant, .. } = cli.command {
        assert!(!tolerant);
    } else {
        panic!("Expected Normalize command");
    }
}

#[test]
fn cli_parses_collect_json() {
    let cli = parse_args(&[
        "typed-values",
        "collect",
        "--kind",
        "integer",
        r#"[1, "bad", 3]"#,
    ])
    .unwrap();
    if let Commands::Collect {
        kind,
        tolerant,
        json,
    } = cli.command
    {
        assert_eq!(kind, "integer");
        assert!(!tolerant);
        assert_eq!(json, r#"[1, "bad", 3]"#);
    } else {
        panic!("Expected Collect command");
    }
}

#[test]
fn cli_parses_config_command() {
    let cli = parse_args(&["typed-values", "config"]).unwrap();
    assert!(matches!(cli.command, Commands::Config));
}

#[test]
fn cli_global_flags_after_subcommand() {
    let cli = parse_args(&[
        "typed-values",
        "kinds",
        "-vv",
        "--output",
        "json",
        "--config",
        "custom.toml",
    ])
    .unwrap();
    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.output, Some(OutputFormat::Json));
    assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
}

#[test]
fn cli_rejects_unknown_output_format() {
    assert!(parse_args(&["typed-values", "--output", "yaml", "kinds"]).is_err());
}

#[test]
fn cli_rejects_unknown_command() {
    assert!(parse_args(&["typed-values", "convert"]).is_err());
}

#[test]
fn cli_requires_subcommand() {
    assert!(parse_args(&["typed-values"]).is_err());
}

#[test]
fn cli_verbose_stacks() {
    let cli = parse_args(&["typed-values", "-vvv", "kinds"]).unwrap();
    assert_eq!(cli.verbose, 3);
}
