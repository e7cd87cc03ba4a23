//! # ssml-core: Foundational Types for SSML Rendering
//!
//! This crate defines the types every other crate in the workspace builds
//! on: the input node tree, attribute values, XML escaping, document loading,
//! and the structured error hierarchy. It depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **One tree type.** A [`Node`] holds a tag, an attribute map, and an
//!    ordered list of [`Child`]ren. Text leaves are plain strings; they are
//!    escaped on output, never on input.
//!
//! 2. **Schema-agnostic construction.** Building a tree never fails. Tags,
//!    attributes and children are checked against a schema registry at
//!    render time (or eagerly, on request) by `ssml-schema`.
//!
//! 3. **Structured errors.** [`SchemaError`] names the tag and the offending
//!    attribute or child, so callers can report violations without parsing
//!    messages.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `ssml-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod document;
pub mod error;
pub mod escape;
pub mod node;

// Re-export primary types for ergonomic imports.
pub use document::{load_document, parse_document, DocumentFormat};
pub use error::{AttributeViolation, ChildViolation, DocumentError, SchemaError, SsmlError};
pub use escape::{escape_attr, escape_text, write_escaped_attr, write_escaped_text};
pub use node::{AttrValue, Child, Node};
