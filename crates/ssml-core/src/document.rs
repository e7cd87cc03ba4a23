//! # Document Loading
//!
//! Reads a node tree written as a JSON or YAML data literal:
//!
//! ```yaml
//! tag: speak
//! children:
//!   - tag: s
//!     children: ["Hello world"]
//!   - tag: break
//!     attributes: { time: 2s }
//! ```
//!
//! Loading only checks the shape of the document. Whether the tree is valid
//! SSML is decided by the schema registry.

use std::path::Path;

use crate::error::DocumentError;
use crate::node::Node;

/// Supported data-literal formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// JSON (`.json`).
    Json,
    /// YAML (`.yaml`, `.yml`).
    Yaml,
}

impl DocumentFormat {
    /// Determine the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Some(Self::Json),
            Some("yaml" | "yml") => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Lowercase format name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

/// Parse a node tree from a string in the given format.
///
/// # Errors
///
/// Returns [`DocumentError::Parse`] if the text is not a node tree.
pub fn parse_document(content: &str, format: DocumentFormat) -> Result<Node, DocumentError> {
    let parsed = match format {
        DocumentFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        DocumentFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
    };
    parsed.map_err(|reason| DocumentError::Parse {
        format: format.as_str(),
        reason,
    })
}

/// Load a node tree from a `.json`, `.yaml` or `.yml` file.
///
/// # Errors
///
/// Returns [`DocumentError::UnsupportedFormat`] for any other extension,
/// [`DocumentError::Read`] if the file cannot be read, and
/// [`DocumentError::Parse`] if its content is not a node tree.
pub fn load_document(path: &Path) -> Result<Node, DocumentError> {
    let format =
        DocumentFormat::from_path(path).ok_or_else(|| DocumentError::UnsupportedFormat {
            path: path.display().to_string(),
        })?;

    let content = std::fs::read_to_string(path).map_err(|source| DocumentError::Read {
        path: path.display().to_string(),
        source,
    })?;

    parse_document(&content, format)
}
