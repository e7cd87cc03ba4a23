//! # Validate Subcommand
//!
//! Checks node trees against the selected profile without rendering them.
//! A path may be a single document or a directory, which is searched
//! recursively for `.json`, `.yaml` and `.yml` files.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;

use ssml_core::load_document;
use ssml_schema::SchemaRegistry;

use crate::config::CliConfig;

/// Arguments for the `ssml validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Documents or directories to validate.
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,
}

/// Execute the validate subcommand.
///
/// Returns exit code: 0 when every document passes, 1 otherwise.
pub fn run_validate(args: &ValidateArgs, config: &CliConfig) -> Result<u8> {
    let registry = SchemaRegistry::builtin(config.profile);

    tracing::info!(
        profile = %config.profile,
        tag_count = registry.len(),
        "loaded schema registry"
    );

    let mut total = 0usize;
    let mut failed = 0usize;

    for path in &args.paths {
        let documents = if path.is_dir() {
            crate::find_documents(path)
        } else {
            vec![path.clone()]
        };
        if documents.is_empty() {
            println!("WARN: no documents found under {}", path.display());
        }
        for document in &documents {
            total += 1;
            if !validate_single_path(registry, document) {
                failed += 1;
            }
        }
    }

    println!("Documents: {}/{} passed", total - failed, total);

    if failed > 0 {
        Ok(1)
    } else {
        Ok(0)
    }
}

/// Validate one document, printing an `OK:` or `FAIL:` line. Returns
/// whether it passed.
fn validate_single_path(registry: &SchemaRegistry, path: &Path) -> bool {
    let result = load_document(path)
        .map_err(|e| e.to_string())
        .and_then(|tree| registry.validate_tree(&tree).map_err(|e| e.to_string()));

    match result {
        Ok(()) => {
            println!("OK: {}", path.display());
            true
        }
        Err(e) => {
            println!("FAIL: {}: {}", path.display(), e);
            false
        }
    }
}
