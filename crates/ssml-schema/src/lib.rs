//! # ssml-schema: Schema Registry for SSML Tags
//!
//! Declares which tags exist, which attributes each accepts, and which
//! children each permits, and validates [`ssml_core::Node`]s against those
//! rules.
//!
//! ## Descriptors (`descriptor`)
//!
//! A [`SchemaDescriptor`] lists a tag's attributes in declaration order,
//! each with an [`AttrKind`] and a required flag, plus a
//! [`ChildConstraint`]: no children, text only, or text and any of a set of
//! tags. Declaration order is also the order the renderer writes attributes.
//!
//! ## Registry (`registry`)
//!
//! [`SchemaRegistry::builtin`] hands out the shared, immutable table for a
//! [`Profile`]. Key functions:
//!
//! - [`SchemaRegistry::lookup`]: fails with `UnknownTag` for unregistered tags.
//! - [`SchemaRegistry::validate`]: checks one node and its immediate children;
//!   unregistered child tags fail with `UnknownTag`.
//! - [`SchemaRegistry::resolve`]: `validate`, returning the node's descriptor.
//! - [`SchemaRegistry::validate_tree`]: eager pre-order check of a whole tree.
//!
//! ## Crate Policy
//!
//! - Depends only on `ssml-core` internally.
//! - Validation is a trust boundary: the first violation is returned with
//!   the tag and the offending attribute or child, never coerced away.

mod builtin;
pub mod descriptor;
pub mod profile;
pub mod registry;

pub use descriptor::{AttrKind, AttributeSpec, ChildConstraint, SchemaDescriptor};
pub use profile::{Profile, UnknownProfile};
pub use registry::{AuditFinding, SchemaRegistry};
