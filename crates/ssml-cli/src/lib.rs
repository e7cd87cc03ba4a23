//! # ssml-cli: CLI Tool for SSML Node Trees
//!
//! Provides the `ssml` command-line interface over the schema registry and
//! the renderer. Node trees are read from JSON or YAML files.
//!
//! ## Subcommands
//!
//! - `ssml render`: Render one tree to an SSML string.
//! - `ssml validate`: Check trees (or directories of trees) against a profile.
//! - `ssml tags`: List the tags a profile registers.
//!
//! ```bash
//! ssml render greeting.yaml
//! ssml --profile alexa validate prompts/
//! ssml tags --json
//! ```
//!
//! ## Exit Codes
//!
//! `0` on success, `1` when a tree fails validation or rendering, `2` on
//! operational errors such as unreadable files or a bad config file.

pub mod config;
pub mod render;
pub mod tags;
pub mod validate;

use std::path::{Path, PathBuf};

/// Recursively collect node-tree documents (`.json`, `.yaml`, `.yml`) under
/// a directory, sorted.
pub fn find_documents(dir: &Path) -> Vec<PathBuf> {
    let mut results = Vec::new();
    walk_for_documents(dir, &mut results);
    results.sort();
    results
}

fn walk_for_documents(dir: &Path, acc: &mut Vec<PathBuf>) {
    let entries = match std::fs::read_dir(dir) {
        Ok(e) => e,
        Err(e) => {
            tracing::warn!(
                dir = %dir.display(),
                error = %e,
                "failed to read directory during document walk"
            );
            return;
        }
    };
    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "failed to read directory entry");
                continue;
            }
        };
        let path = entry.path();
        if path.is_dir() {
            walk_for_documents(&path, acc);
        } else if ssml_core::DocumentFormat::from_path(&path).is_some() {
            acc.push(path);
        }
    }
}
