//! # ssml-render: SSML Tree Renderer
//!
//! Turns a validated [`ssml_core::Node`] tree into a compact SSML string:
//!
//! ```
//! use ssml_core::Node;
//! use ssml_render::render_to_string;
//!
//! let speech = Node::new("speak")
//!     .child(Node::new("s").text("Hello world"))
//!     .child(Node::new("break").attr("time", "2s"));
//!
//! assert_eq!(
//!     render_to_string(&speech).unwrap(),
//!     r#"<speak><s>Hello world</s><break time="2s"/></speak>"#
//! );
//! ```
//!
//! ## Guarantees
//!
//! - Deterministic: the same tree always renders to the same bytes.
//!   Attributes are written in schema declaration order.
//! - All or nothing: a schema violation anywhere in the tree returns the
//!   registry's error unchanged and no output.
//! - Side-effect free: rendering never mutates the tree or the registry, so
//!   a [`Renderer`] may be shared across threads.

pub mod render;

pub use render::{render_to_string, Renderer};
