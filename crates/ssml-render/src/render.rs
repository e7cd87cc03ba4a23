//! # Tree Renderer
//!
//! Serializes a [`Node`] tree to an SSML string in one pre-order walk.
//!
//! For each node the renderer resolves the tag's descriptor through the
//! registry, which validates the node and its child tags, and writes:
//!
//! - `<tag`, then each present attribute as ` name="value"` in the
//!   descriptor's declaration order, values XML-escaped;
//! - `/>` if the node has no children;
//! - otherwise `>`, each child in order (text escaped, nodes recursed),
//!   and `</tag>`.
//!
//! No whitespace is inserted between elements. Output is accumulated in a
//! buffer owned by the call, so a failed render returns only the error.

use std::path::Path;

use ssml_core::{
    load_document, write_escaped_attr, write_escaped_text, AttrValue, Child, Node, SchemaError,
    SsmlError,
};
use ssml_schema::{Profile, SchemaRegistry};

/// Render `root` with the standard built-in registry.
///
/// ```
/// use ssml_core::Node;
/// use ssml_render::render_to_string;
///
/// let speech = Node::new("speak").child(Node::new("break").attr("time", "2s"));
/// assert_eq!(
///     render_to_string(&speech).unwrap(),
///     r#"<speak><break time="2s"/></speak>"#
/// );
/// ```
///
/// # Errors
///
/// The first [`SchemaError`] met in pre-order, unchanged.
pub fn render_to_string(root: &Node) -> Result<String, SchemaError> {
    Renderer::for_profile(Profile::Standard).render(root)
}

/// Renders node trees against a schema registry.
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'r> {
    registry: &'r SchemaRegistry,
}

impl Renderer<'static> {
    /// A renderer over a profile's shared built-in registry.
    pub fn for_profile(profile: Profile) -> Self {
        Self::new(SchemaRegistry::builtin(profile))
    }
}

impl<'r> Renderer<'r> {
    /// A renderer over any registry.
    pub fn new(registry: &'r SchemaRegistry) -> Self {
        Self { registry }
    }

    /// The registry nodes are validated against.
    pub fn registry(&self) -> &'r SchemaRegistry {
        self.registry
    }

    /// Render a tree to a string.
    ///
    /// # Errors
    ///
    /// The first [`SchemaError`] met in pre-order, unchanged. No partial
    /// output is returned.
    pub fn render(&self, root: &Node) -> Result<String, SchemaError> {
        let mut out = String::new();
        self.write_node(root, &mut out)?;
        tracing::debug!(
            root = root.tag(),
            nodes = root.node_count(),
            bytes = out.len(),
            "rendered SSML"
        );
        Ok(out)
    }

    /// Load a `.json`, `.yaml` or `.yml` node tree and render it.
    ///
    /// # Errors
    ///
    /// [`SsmlError::Document`] if the file cannot be loaded,
    /// [`SsmlError::Schema`] if the tree fails validation.
    pub fn render_document(&self, path: &Path) -> Result<String, SsmlError> {
        let tree = load_document(path)?;
        Ok(self.render(&tree)?)
    }

    fn write_node(&self, node: &Node, out: &mut String) -> Result<(), SchemaError> {
        let descriptor = self.registry.resolve(node)?;
        tracing::trace!(tag = node.tag(), children = node.children().len(), "writing node");

        out.push('<');
        out.push_str(node.tag());

        for spec in descriptor.attributes() {
            let Some(value) = node.attribute(spec.name()) else {
                continue;
            };
            out.push(' ');
            out.push_str(spec.name());
            out.push_str("=\"");
            match value {
                AttrValue::Text(s) => write_escaped_attr(out, s),
                AttrValue::Number(_) => write_escaped_attr(out, &value.to_string()),
            }
            out.push('"');
        }

        if node.is_leaf() {
            out.push_str("/>");
            return Ok(());
        }

        out.push('>');
        for child in node.children() {
            match child {
                Child::Text(text) => write_escaped_text(out, text),
                Child::Node(element) => self.write_node(element, out)?,
            }
        }
        out.push_str("</");
        out.push_str(node.tag());
        out.push('>');

        Ok(())
    }
}
