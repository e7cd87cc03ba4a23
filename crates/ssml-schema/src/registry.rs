//! # Schema Registry
//!
//! Maps tag names to [`SchemaDescriptor`]s and validates nodes against them.
//!
//! ## Lifecycle
//!
//! The built-in registries are populated once, on first use, from the fixed
//! built-in tag tables and are read-only afterwards. Callers that
//! need extra tags take an owned copy with [`SchemaRegistry::for_profile`]
//! and [`register`](SchemaRegistry::register) their own descriptors before
//! rendering.
//!
//! ## Thread Safety
//!
//! `SchemaRegistry` is `Send + Sync`. Validation never mutates the registry,
//! so a single instance can serve concurrent renders.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use ssml_core::{Node, SchemaError};

use crate::builtin;
use crate::descriptor::{ChildConstraint, SchemaDescriptor};
use crate::profile::Profile;

static STANDARD: OnceLock<SchemaRegistry> = OnceLock::new();
static ALEXA: OnceLock<SchemaRegistry> = OnceLock::new();

/// Tag name to descriptor mapping.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    descriptors: HashMap<String, SchemaDescriptor>,
}

impl SchemaRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The shared built-in registry for a profile.
    pub fn builtin(profile: Profile) -> &'static SchemaRegistry {
        let cell = match profile {
            Profile::Standard => &STANDARD,
            Profile::Alexa => &ALEXA,
        };
        cell.get_or_init(|| Self::for_profile(profile))
    }

    /// An owned copy of a profile's built-in table, open for extension.
    pub fn for_profile(profile: Profile) -> Self {
        let mut registry = Self::new();
        for descriptor in builtin::descriptors(profile) {
            registry.register(descriptor);
        }
        tracing::debug!(%profile, tags = registry.len(), "populated schema registry");
        registry
    }

    /// Add a descriptor, returning the one it replaced, if any.
    pub fn register(&mut self, descriptor: SchemaDescriptor) -> Option<SchemaDescriptor> {
        self.descriptors
            .insert(descriptor.tag().to_string(), descriptor)
    }

    /// Look up the descriptor for `tag`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::UnknownTag`] if the tag is not registered.
    pub fn lookup(&self, tag: &str) -> Result<&SchemaDescriptor, SchemaError> {
        self.descriptors
            .get(tag)
            .ok_or_else(|| SchemaError::UnknownTag {
                tag: tag.to_string(),
            })
    }

    /// Returns true if `tag` is registered.
    pub fn contains(&self, tag: &str) -> bool {
        self.descriptors.contains_key(tag)
    }

    /// Returns the number of registered tags.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Returns true if no tags are registered.
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Registered tag names, sorted alphabetically.
    pub fn tag_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.descriptors.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Registered descriptors, sorted by tag.
    pub fn descriptors(&self) -> Vec<&SchemaDescriptor> {
        let mut all: Vec<&SchemaDescriptor> = self.descriptors.values().collect();
        all.sort_unstable_by(|a, b| a.tag().cmp(b.tag()));
        all
    }

    /// Validate one node: its tag, the tags of its child elements, its
    /// attributes, and its children against the child constraint. The
    /// attributes and children of child elements are checked when the walk
    /// reaches them.
    ///
    /// # Errors
    ///
    /// [`SchemaError::UnknownTag`], [`SchemaError::InvalidAttribute`] or
    /// [`SchemaError::InvalidChild`] for the first violation found.
    pub fn validate(&self, node: &Node) -> Result<(), SchemaError> {
        self.resolve(node).map(|_| ())
    }

    /// Validate one node as [`validate`](Self::validate) does and return
    /// its descriptor.
    ///
    /// Unregistered child tags fail as [`SchemaError::UnknownTag`] before
    /// the child constraint is applied, so
    /// [`ChildViolation::TagNotPermitted`](ssml_core::ChildViolation::TagNotPermitted)
    /// only ever names registered tags.
    ///
    /// # Errors
    ///
    /// The first violation found.
    pub fn resolve(&self, node: &Node) -> Result<&SchemaDescriptor, SchemaError> {
        let result = self.lookup(node.tag()).and_then(|descriptor| {
            node.child_nodes()
                .try_for_each(|child| self.lookup(child.tag()).map(|_| ()))?;
            descriptor.validate(node)?;
            Ok(descriptor)
        });
        if let Err(ref e) = result {
            tracing::debug!(tag = node.tag(), error = %e, "node failed validation");
        }
        result
    }

    /// Validate a whole tree eagerly, in pre-order.
    ///
    /// Reports the same error the renderer would hit first for this tree.
    ///
    /// # Errors
    ///
    /// The first violation in pre-order.
    pub fn validate_tree(&self, root: &Node) -> Result<(), SchemaError> {
        self.validate(root)?;
        root.child_nodes()
            .try_for_each(|child| self.validate_tree(child))
    }

    /// Check the registry for child constraints that name unregistered tags.
    ///
    /// Such a tag passes its parent's constraint and then fails as unknown,
    /// which usually means a descriptor was left out by mistake.
    pub fn audit(&self) -> Vec<AuditFinding> {
        let mut findings = Vec::new();
        for descriptor in self.descriptors() {
            if let ChildConstraint::AnyOf(tags) = descriptor.child_constraint() {
                for child in tags.iter().filter(|t| !self.contains(t)) {
                    findings.push(AuditFinding {
                        parent: descriptor.tag().to_string(),
                        child: child.clone(),
                    });
                }
            }
        }
        findings
    }
}

/// A child constraint that names an unregistered tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditFinding {
    /// Tag whose constraint names the missing tag.
    pub parent: String,
    /// The unregistered tag.
    pub child: String,
}

impl fmt::Display for AuditFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}> permits unregistered <{}>", self.parent, self.child)
    }
}
