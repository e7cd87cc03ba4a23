//! # Node Tree
//!
//! The input representation for rendering: a [`Node`] carries a tag name,
//! an attribute mapping, and an ordered list of [`Child`]ren, each either a
//! nested node or a raw text leaf.
//!
//! Trees are built with the chained builder methods on [`Node`] or
//! deserialized from a data literal (see [`crate::document`]). Nothing here
//! checks the tree against a schema; that happens when the tree is rendered
//! or explicitly validated.
//!
//! ```
//! use ssml_core::Node;
//!
//! let speech = Node::new("speak")
//!     .child(Node::new("s").text("Hello world"))
//!     .child(Node::new("break").attr("time", "2s"));
//!
//! assert_eq!(speech.tag(), "speak");
//! assert_eq!(speech.children().len(), 2);
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single markup element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Node {
    tag: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    attributes: BTreeMap<String, AttrValue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<Child>,
}

impl Node {
    /// Create a node with no attributes and no children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    /// Create a node from its three parts in one go.
    pub fn from_parts(
        tag: impl Into<String>,
        attributes: BTreeMap<String, AttrValue>,
        children: Vec<Child>,
    ) -> Self {
        Self {
            tag: tag.into(),
            attributes,
            children,
        }
    }

    /// Set an attribute, replacing any previous value under the same name.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Append a child node or text leaf.
    pub fn child(mut self, child: impl Into<Child>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append a text leaf.
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Child::Text(text.into()))
    }

    /// Append every child yielded by `children`, in order.
    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Child>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// The tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// All attributes, keyed by name.
    pub fn attributes(&self) -> &BTreeMap<String, AttrValue> {
        &self.attributes
    }

    /// Look up one attribute by name.
    pub fn attribute(&self, name: &str) -> Option<&AttrValue> {
        self.attributes.get(name)
    }

    /// Children in document order.
    pub fn children(&self) -> &[Child] {
        &self.children
    }

    /// Returns true if the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Iterate over the element children, skipping text leaves.
    pub fn child_nodes(&self) -> impl Iterator<Item = &Node> {
        self.children.iter().filter_map(Child::as_node)
    }

    /// Number of nodes in the tree rooted here, including this one.
    pub fn node_count(&self) -> usize {
        1 + self.child_nodes().map(Node::node_count).sum::<usize>()
    }
}

/// One entry in a node's child list.
///
/// Deserializes untagged: a string is a text leaf, a mapping is a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Child {
    /// Raw text, escaped on output.
    Text(String),
    /// A nested element.
    Node(Node),
}

impl Child {
    /// The nested node, if this child is one.
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Self::Node(node) => Some(node),
            Self::Text(_) => None,
        }
    }

    /// The text content, if this child is a text leaf.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Node(_) => None,
        }
    }
}

impl From<Node> for Child {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Child {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// An attribute value: a string, copied exactly, or a number, written in
/// its natural textual form (`2.0` as `2`, `1.5` as `1.5`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// A string value.
    Text(String),
    /// A numeric value.
    Number(f64),
}

impl AttrValue {
    /// The string value, if this is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Number(_) => None,
        }
    }

    /// The numeric value, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for AttrValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}
