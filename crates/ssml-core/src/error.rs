//! # Error Types: Structured Error Hierarchy
//!
//! Defines the error types used throughout the SSML workspace. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Schema errors name the offending tag, the attribute or child, and
//!   the expected vs actual value where one exists.
//! - Errors are raised at the first violation of a pre-order walk and
//!   travel to the caller unmodified. A render either produces a complete
//!   string or one of these errors, never both.

use std::fmt;

use thiserror::Error;

/// Top-level error type for the SSML workspace.
#[derive(Error, Debug)]
pub enum SsmlError {
    /// A node violated its tag's schema.
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),

    /// A node tree document could not be loaded.
    #[error("document error: {0}")]
    Document(#[from] DocumentError),
}

/// A node tree violated the schema registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// The tag is not registered.
    #[error("unknown tag <{tag}>")]
    UnknownTag {
        /// The unregistered tag name.
        tag: String,
    },

    /// An attribute was unknown, missing, or of the wrong kind.
    #[error("invalid attribute '{attribute}' on <{tag}>: {violation}")]
    InvalidAttribute {
        /// Tag of the node carrying the attribute.
        tag: String,
        /// Attribute name.
        attribute: String,
        /// What was wrong with it.
        violation: AttributeViolation,
    },

    /// A child was not permitted by the tag's child constraint.
    #[error("invalid child of <{tag}>: {violation}")]
    InvalidChild {
        /// Tag of the parent node.
        tag: String,
        /// What was wrong with the children.
        violation: ChildViolation,
    },
}

impl SchemaError {
    /// The tag of the node at which validation failed.
    pub fn tag(&self) -> &str {
        match self {
            Self::UnknownTag { tag }
            | Self::InvalidAttribute { tag, .. }
            | Self::InvalidChild { tag, .. } => tag,
        }
    }
}

/// Reason an attribute failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeViolation {
    /// The tag declares no attribute of this name.
    Unknown,
    /// A required attribute is absent.
    Missing,
    /// The value does not match the declared kind.
    WrongKind {
        /// Description of the declared kind.
        expected: String,
        /// The offending value, as written.
        found: String,
    },
}

impl fmt::Display for AttributeViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => write!(f, "not declared for this tag"),
            Self::Missing => write!(f, "required attribute is missing"),
            Self::WrongKind { expected, found } => {
                write!(f, "expected {expected}, found {found:?}")
            }
        }
    }
}

/// Reason a node's children failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChildViolation {
    /// The tag permits no children at all.
    ChildrenNotAllowed,
    /// The tag permits only text, but an element was nested.
    ElementInTextOnly {
        /// Tag of the nested element.
        child: String,
    },
    /// The tag requires non-empty text content, but none was given.
    EmptyTextOnly,
    /// The element is not in the tag's permitted set.
    TagNotPermitted {
        /// Tag of the rejected child element.
        child: String,
    },
}

impl fmt::Display for ChildViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ChildrenNotAllowed => write!(f, "children are not allowed"),
            Self::ElementInTextOnly { child } => {
                write!(f, "only text is allowed, found <{child}>")
            }
            Self::EmptyTextOnly => write!(f, "text content is required"),
            Self::TagNotPermitted { child } => write!(f, "<{child}> is not permitted here"),
        }
    }
}

/// Error while loading a node tree from a JSON or YAML document.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The document file could not be read.
    #[error("cannot read '{path}': {source}")]
    Read {
        /// Path to the document.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The document text is not a valid node tree.
    #[error("invalid {format} node tree: {reason}")]
    Parse {
        /// Format that was being parsed.
        format: &'static str,
        /// Parser message.
        reason: String,
    },

    /// The file extension names no supported format.
    #[error("unsupported document format for '{path}': expected .json, .yaml or .yml")]
    UnsupportedFormat {
        /// Path to the document.
        path: String,
    },
}
