//! # Schema Descriptors
//!
//! A [`SchemaDescriptor`] holds the validation rules for one tag: which
//! attributes it accepts (in declaration order, with a kind and a required
//! flag) and which children it permits.
//!
//! Declaration order matters beyond validation: the renderer writes
//! attributes in the order they are declared here, not in the order the
//! caller supplied them.

use std::collections::BTreeSet;
use std::fmt;

use ssml_core::{AttrValue, AttributeViolation, ChildViolation, Node, SchemaError};

/// The kind of value an attribute accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrKind {
    /// Any string, or a finite number written in its textual form.
    Text,
    /// A finite number, or a string that parses as one.
    Number,
    /// An SSML time designation: a non-negative decimal followed by `s` or `ms`.
    Duration,
    /// One of a fixed set of strings.
    Enumerated(Vec<String>),
}

impl AttrKind {
    /// Build an [`AttrKind::Enumerated`] from any list of strings.
    pub fn enumerated<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Enumerated(values.into_iter().map(Into::into).collect())
    }

    /// Check a value against this kind.
    ///
    /// # Errors
    ///
    /// Returns [`AttributeViolation::WrongKind`] describing the expected
    /// kind and the value as it would have been written.
    pub fn check(&self, value: &AttrValue) -> Result<(), AttributeViolation> {
        let accepted = match (self, value) {
            (Self::Text, AttrValue::Text(_)) => true,
            (Self::Text | Self::Number, AttrValue::Number(n)) => n.is_finite(),
            (Self::Number, AttrValue::Text(s)) => s.parse::<f64>().is_ok_and(f64::is_finite),
            (Self::Duration, AttrValue::Text(s)) => is_time_designation(s),
            (Self::Enumerated(values), AttrValue::Text(s)) => values.iter().any(|v| v == s),
            (Self::Duration | Self::Enumerated(_), AttrValue::Number(_)) => false,
        };

        if accepted {
            Ok(())
        } else {
            Err(AttributeViolation::WrongKind {
                expected: self.to_string(),
                found: value.to_string(),
            })
        }
    }
}

impl fmt::Display for AttrKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "a string"),
            Self::Number => write!(f, "a number"),
            Self::Duration => write!(f, "a duration such as 2s or 500ms"),
            Self::Enumerated(values) => write!(f, "one of {}", values.join(", ")),
        }
    }
}

/// `[0-9]*(\.[0-9]+)?(s|ms)` with at least one digit.
fn is_time_designation(s: &str) -> bool {
    s.strip_suffix("ms")
        .or_else(|| s.strip_suffix('s'))
        .is_some_and(is_unsigned_decimal)
}

fn is_unsigned_decimal(s: &str) -> bool {
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    match s.split_once('.') {
        Some((int, frac)) => !frac.is_empty() && all_digits(int) && all_digits(frac),
        None => !s.is_empty() && all_digits(s),
    }
}

/// One declared attribute of a tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeSpec {
    name: String,
    kind: AttrKind,
    required: bool,
}

impl AttributeSpec {
    /// An attribute that must be present.
    pub fn required(name: impl Into<String>, kind: AttrKind) -> Self {
        Self {
            name: name.into(),
            kind,
            required: true,
        }
    }

    /// An attribute that may be omitted.
    pub fn optional(name: impl Into<String>, kind: AttrKind) -> Self {
        Self {
            name: name.into(),
            kind,
            required: false,
        }
    }

    /// Attribute name as written in markup.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Accepted value kind.
    pub fn kind(&self) -> &AttrKind {
        &self.kind
    }

    /// Whether the attribute must be present.
    pub fn is_required(&self) -> bool {
        self.required
    }
}

/// What a tag accepts as children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChildConstraint {
    /// No children at all; the element always self-closes.
    None,
    /// Text leaves only, at least one of them non-empty.
    TextOnly,
    /// Text leaves plus elements whose tag is in the set.
    AnyOf(BTreeSet<String>),
}

impl ChildConstraint {
    /// Build an [`ChildConstraint::AnyOf`] from any list of tag names.
    pub fn any_of<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::AnyOf(tags.into_iter().map(Into::into).collect())
    }

    /// Whether an element child with `tag` may appear under this constraint.
    pub fn permits(&self, tag: &str) -> bool {
        match self {
            Self::AnyOf(tags) => tags.contains(tag),
            Self::None | Self::TextOnly => false,
        }
    }
}

impl fmt::Display for ChildConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::TextOnly => write!(f, "text"),
            Self::AnyOf(tags) => {
                let tags: Vec<&str> = tags.iter().map(String::as_str).collect();
                write!(f, "text, {}", tags.join(", "))
            }
        }
    }
}

/// Validation rules for one tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaDescriptor {
    tag: String,
    attributes: Vec<AttributeSpec>,
    children: ChildConstraint,
}

impl SchemaDescriptor {
    /// A descriptor with no attributes.
    pub fn new(tag: impl Into<String>, children: ChildConstraint) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children,
        }
    }

    /// Declare an attribute. Redeclaring a name replaces the earlier spec
    /// in its original position.
    pub fn attribute(mut self, spec: AttributeSpec) -> Self {
        match self.attributes.iter_mut().find(|a| a.name == spec.name) {
            Some(existing) => *existing = spec,
            None => self.attributes.push(spec),
        }
        self
    }

    /// The tag this descriptor governs.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Declared attributes, in declaration order.
    pub fn attributes(&self) -> &[AttributeSpec] {
        &self.attributes
    }

    /// Look up one declared attribute.
    pub fn attribute_spec(&self, name: &str) -> Option<&AttributeSpec> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// The child constraint.
    pub fn child_constraint(&self) -> &ChildConstraint {
        &self.children
    }

    /// Validate one node's attributes and immediate children.
    ///
    /// Does not descend into child elements.
    ///
    /// # Errors
    ///
    /// Returns the first violation: unknown attribute names (in name order),
    /// then missing or mistyped declared attributes (in declaration order),
    /// then child violations (in child order).
    pub fn validate(&self, node: &Node) -> Result<(), SchemaError> {
        self.validate_attributes(node)?;
        self.validate_children(node)
    }

    fn validate_attributes(&self, node: &Node) -> Result<(), SchemaError> {
        let invalid = |attribute: &str, violation: AttributeViolation| SchemaError::InvalidAttribute {
            tag: self.tag.clone(),
            attribute: attribute.to_string(),
            violation,
        };

        if let Some(unknown) = node
            .attributes()
            .keys()
            .find(|name| self.attribute_spec(name).is_none())
        {
            return Err(invalid(unknown.as_str(), AttributeViolation::Unknown));
        }

        for spec in &self.attributes {
            match node.attribute(&spec.name) {
                Some(value) => spec
                    .kind
                    .check(value)
                    .map_err(|violation| invalid(spec.name.as_str(), violation))?,
                None if spec.required => {
                    return Err(invalid(spec.name.as_str(), AttributeViolation::Missing));
                }
                None => {}
            }
        }

        Ok(())
    }

    fn validate_children(&self, node: &Node) -> Result<(), SchemaError> {
        let invalid = |violation: ChildViolation| SchemaError::InvalidChild {
            tag: self.tag.clone(),
            violation,
        };

        match &self.children {
            ChildConstraint::None => {
                if !node.children().is_empty() {
                    return Err(invalid(ChildViolation::ChildrenNotAllowed));
                }
            }
            ChildConstraint::TextOnly => {
                if let Some(element) = node.child_nodes().next() {
                    return Err(invalid(ChildViolation::ElementInTextOnly {
                        child: element.tag().to_string(),
                    }));
                }
                let has_text = node
                    .children()
                    .iter()
                    .any(|c| c.as_text().is_some_and(|t| !t.is_empty()));
                if !has_text {
                    return Err(invalid(ChildViolation::EmptyTextOnly));
                }
            }
            ChildConstraint::AnyOf(tags) => {
                if let Some(element) = node.child_nodes().find(|c| !tags.contains(c.tag())) {
                    return Err(invalid(ChildViolation::TagNotPermitted {
                        child: element.tag().to_string(),
                    }));
                }
            }
        }

        Ok(())
    }
}
