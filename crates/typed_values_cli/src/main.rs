//! typed-values CLI
//!
//! Validate and canonicalize values of any catalogued kind from the command line.

mod config;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use typed_values::{Mixed, Undefined};
use typed_values::kinds::{self, Construction, KindEntry};

use crate::config::{CliConfig, OutputFormat};

/// typed-values CLI
#[derive(Parser)]
#[command(name = "typed-values")]
#[command(author, version, about = "Validate and canonicalize typed values", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a TOML config file (default: ./typed-values.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format, overrides the configured one
    #[arg(short, long, value_enum, global = true)]
    output: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available kinds
    Kinds,

    /// Strictly validate values, exiting with status 1 if any is rejected
    ///
    /// Example: typed-values check --kind tinyint 127 128
    Check {
        /// Kind name (see `typed-values kinds`)
        #[arg(short, long)]
        kind: String,

        /// Values to validate
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<String>,
    },

    /// Print the canonical form of each value
    ///
    /// With --tolerant, rejected values print as `undefined`.
    Normalize {
        /// Kind name (see `typed-values kinds`)
        #[arg(short, long)]
        kind: String,

        /// Replace rejected values with `undefined` instead of failing
        #[arg(long)]
        tolerant: bool,

        /// Values to normalize
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<String>,
    },

    /// Build a collection from a JSON array and summarize it
    ///
    /// Example: typed-values collect --kind integer --tolerant '[1, "bad", 3]'
    Collect {
        /// Kind name (see `typed-values kinds`)
        #[arg(short, long)]
        kind: String,

        /// Replace rejected elements with `undefined` instead of failing
        #[arg(long)]
        tolerant: bool,

        /// JSON array of elements
        json: String,
    },

    /// Print the effective configuration as TOML
    Config,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Pick the log filter: `-v` wins, then the configured level
fn log_filter(verbose: u8, configured: Option<&str>) -> String {
    match (verbose, configured) {
        (0, Some(level)) => level.to_string(),
        _ => log_filter_from_verbosity(verbose).to_string(),
    }
}

fn find_kind(name: &str) -> anyhow::Result<&'static KindEntry> {
    kinds::lookup(name)
        .with_context(|| format!("unknown kind `{name}`; run `typed-values kinds` to list them"))
}

/// Text form of a projection: strings unquoted, everything else as JSON
fn plain(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[derive(Serialize)]
struct KindSummary {
    name: &'static str,
    summary: &'static str,
}

#[derive(Serialize)]
struct CheckOutcome<'a> {
    input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn list_kinds(out: &mut impl Write, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            for entry in kinds::catalog() {
                writeln!(out, "{:<20} {}", entry.name(), entry.summary())?;
            }
        },
        OutputFormat::Json => {
            let summaries: Vec<_> = kinds::catalog()
                .iter()
                .map(|entry| KindSummary {
                    name: entry.name(),
                    summary: entry.summary(),
                })
                .collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&summaries)?)?;
        },
    }
    Ok(())
}

/// Returns whether every value was accepted
fn check_values(
    out: &mut impl Write,
    format: OutputFormat,
    entry: &KindEntry,
    values: &[String],
) -> anyhow::Result<bool> {
    let outcomes: Vec<_> = values
        .iter()
        .map(|input| match entry.canonicalize(&Mixed::from(input.as_str())) {
            Ok(value) => CheckOutcome {
                input,
                value: Some(value),
                error: None,
            },
            Err(e) => CheckOutcome {
                input,
                value: None,
                error: Some(e.to_string()),
            },
        })
        .collect();

    match format {
        OutputFormat::Text => {
            for outcome in &outcomes {
                match (&outcome.value, &outcome.error) {
                    (Some(value), _) => writeln!(out, "✅ {} -> {}", outcome.input, plain(value))?,
                    (None, Some(error)) => writeln!(out, "❌ {}: {error}", outcome.input)?,
                    (None, None) => {},
                }
            }
        },
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&outcomes)?)?;
        },
    }

    Ok(outcomes.iter().all(|outcome| outcome.error.is_none()))
}

fn normalize_values(
    out: &mut impl Write,
    format: OutputFormat,
    entry: &KindEntry,
    values: &[String],
    tolerant: bool,
) -> anyhow::Result<()> {
    let normalized = values
        .iter()
        .map(|input| {
            let mixed = Mixed::from(input.as_str());
            if tolerant {
                Ok(entry.normalize(&mixed))
            } else {
                entry
                    .canonicalize(&mixed)
                    .map(Some)
                    .with_context(|| format!("`{input}` is not a valid {}", entry.name()))
            }
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    match format {
        OutputFormat::Text => {
            for value in &normalized {
                match value {
                    Some(value) => writeln!(out, "{}", plain(value))?,
                    None => writeln!(out, "{}", Undefined::NAME)?,
                }
            }
        },
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&normalized)?)?;
        },
    }
    Ok(())
}

fn collect_values(
    out: &mut impl Write,
    format: OutputFormat,
    entry: &KindEntry,
    json: &str,
    tolerant: bool,
) -> anyhow::Result<()> {
    let raw: Vec<Mixed> =
        serde_json::from_str(json).context("collect expects a JSON array of elements")?;
    let construction = if tolerant {
        Construction::Tolerant
    } else {
        Construction::Strict
    };
    let report = entry
        .collect(raw, construction)
        .with_context(|| format!("not a valid {} collection", entry.name()))?;

    match format {
        OutputFormat::Text => {
            let defined: Vec<_> = report.defined.iter().map(plain).collect();
            writeln!(out, "count: {}", report.count)?;
            writeln!(out, "has_undefined: {}", report.has_undefined)?;
            writeln!(out, "undefined: {}", report.undefined)?;
            writeln!(out, "defined: [{}]", defined.join(", "))?;
        },
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        },
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::load(cli.config.as_deref()).context("failed to load configuration")?;

    // Set up logging based on verbosity
    let filter = log_filter(cli.verbose, config.log_level.as_deref());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let format = cli.output.unwrap_or(config.output);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Kinds => list_kinds(&mut out, format)?,

        Commands::Check { kind, values } => {
            let entry = find_kind(&kind)?;
            if !check_values(&mut out, format, entry, &values)? {
                out.flush()?;
                std::process::exit(1);
            }
        },

        Commands::Normalize {
            kind,
            tolerant,
            values,
        } => {
            let entry = find_kind(&kind)?;
            normalize_values(&mut out, format, entry, &values, tolerant || config.tolerant)?;
        },

        Commands::Collect {
            kind,
            tolerant,
            json,
        } => {
            let entry = find_kind(&kind)?;
            collect_values(&mut out, format, entry, &json, tolerant || config.tolerant)?;
        },

        Commands::Config => {
            let mut effective = config;
            effective.output = format;
            write!(out, "{}", effective.to_toml()?)?;
        },
    }

    Ok(())
}
