//! # Render Subcommand
//!
//! Loads one node tree and writes its SSML rendering to stdout or a file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use ssml_core::SsmlError;
use ssml_render::Renderer;

use crate::config::CliConfig;

/// Arguments for the `ssml render` subcommand.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Node tree to render (.json, .yaml or .yml).
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Write the SSML here instead of stdout.
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

/// Execute the render subcommand.
///
/// Returns exit code: 0 on success, 1 when the tree violates the profile.
/// Unreadable input or output is an error.
pub fn run_render(args: &RenderArgs, config: &CliConfig) -> Result<u8> {
    let ssml = match Renderer::for_profile(config.profile).render_document(&args.path) {
        Ok(ssml) => ssml,
        Err(SsmlError::Schema(e)) => {
            eprintln!("FAIL: {}: {}", args.path.display(), e);
            return Ok(1);
        }
        Err(e) => {
            return Err(e)
                .with_context(|| format!("failed to load node tree {}", args.path.display()))
        }
    };

    match &args.output {
        Some(output) => write_output(output, &ssml)?,
        None => println!("{ssml}"),
    }
    Ok(0)
}

fn write_output(path: &Path, ssml: &str) -> Result<()> {
    std::fs::write(path, ssml).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = ssml.len(), "wrote SSML");
    Ok(())
}
