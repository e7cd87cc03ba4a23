//! # ssml CLI entry point
//!
//! Parses command-line arguments, resolves configuration, and dispatches
//! to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ssml_cli::config::{CliConfig, LogFormat};
use ssml_cli::render::{run_render, RenderArgs};
use ssml_cli::tags::{run_tags, TagsArgs};
use ssml_cli::validate::{run_validate, ValidateArgs};
use ssml_schema::Profile;

/// Render and validate SSML node trees.
///
/// Trees are JSON or YAML documents of the form
/// `{tag, attributes, children}`, checked against the tag table of the
/// selected profile.
#[derive(Parser, Debug)]
#[command(name = "ssml", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Tag profile: standard or alexa.
    #[arg(long, global = true)]
    profile: Option<Profile>,

    /// Log output format.
    #[arg(long, value_enum, global = true)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a node tree to an SSML string.
    Render(RenderArgs),

    /// Validate node trees against the profile's tag table.
    Validate(ValidateArgs),

    /// List the tags registered for the profile.
    Tags(TagsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.config.as_deref().map(CliConfig::load).transpose() {
        Ok(config) => config
            .unwrap_or_default()
            .with_overrides(cli.profile, cli.log_format),
        Err(e) => {
            eprintln!("error: {e:#}");
            return ExitCode::from(2);
        }
    };

    init_tracing(&config, cli.verbose);

    tracing::debug!(profile = %config.profile, "ssml CLI starting");

    let result = match cli.command {
        Commands::Render(args) => run_render(&args, &config),
        Commands::Validate(args) => run_validate(&args, &config),
        Commands::Tags(args) => run_tags(&args, &config),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}

/// Install the global subscriber. Logs go to stderr so stdout carries only
/// command output. `RUST_LOG`, when set, wins over flags and config.
fn init_tracing(config: &CliConfig, verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.filter_directive(verbose)));

    match config.log_format {
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init(),
    }
}
