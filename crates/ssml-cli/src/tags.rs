//! # Tags Subcommand
//!
//! Lists the tags a profile registers, with their attributes and child
//! constraints, as a table or as JSON.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use ssml_schema::{AttrKind, SchemaRegistry};

use crate::config::CliConfig;

/// Arguments for the `ssml tags` subcommand.
#[derive(Args, Debug)]
pub struct TagsArgs {
    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// One registered tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagSummary {
    /// Tag name.
    pub tag: String,
    /// Declared attributes, in declaration order.
    pub attributes: Vec<AttributeSummary>,
    /// Child constraint, e.g. `none`, `text`, or `text, p, s`.
    pub children: String,
}

/// One declared attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeSummary {
    /// Attribute name.
    pub name: String,
    /// `text`, `number`, `duration` or `enum`.
    pub kind: String,
    /// Permitted values of an `enum` attribute; empty otherwise.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
    /// Whether the attribute must be present.
    pub required: bool,
}

/// Execute the tags subcommand.
pub fn run_tags(args: &TagsArgs, config: &CliConfig) -> Result<u8> {
    let summaries = summarize(SchemaRegistry::builtin(config.profile));

    if args.json {
        let json = serde_json::to_string_pretty(&summaries).context("failed to encode tags")?;
        println!("{json}");
    } else {
        for summary in &summaries {
            println!("{}", table_row(summary));
        }
    }
    Ok(0)
}

/// Summaries of every tag in a registry, sorted by tag name. Attributes keep
/// declaration order.
pub fn summarize(registry: &SchemaRegistry) -> Vec<TagSummary> {
    registry
        .descriptors()
        .into_iter()
        .map(|descriptor| TagSummary {
            tag: descriptor.tag().to_string(),
            attributes: descriptor
                .attributes()
                .iter()
                .map(|spec| {
                    let (kind, values) = match spec.kind() {
                        AttrKind::Text => ("text", Vec::new()),
                        AttrKind::Number => ("number", Vec::new()),
                        AttrKind::Duration => ("duration", Vec::new()),
                        AttrKind::Enumerated(values) => ("enum", values.clone()),
                    };
                    AttributeSummary {
                        name: spec.name().to_string(),
                        kind: kind.to_string(),
                        values,
                        required: spec.is_required(),
                    }
                })
                .collect(),
            children: descriptor.child_constraint().to_string(),
        })
        .collect()
}

/// `tag  attr*, attr  children: ...`, required attributes starred.
fn table_row(summary: &TagSummary) -> String {
    let attributes: Vec<String> = summary
        .attributes
        .iter()
        .map(|a| {
            if a.required {
                format!("{}*", a.name)
            } else {
                a.name.clone()
            }
        })
        .collect();
    let attributes = if attributes.is_empty() {
        "-".to_string()
    } else {
        attributes.join(", ")
    };
    format!(
        "{:<16} {:<40} children: {}",
        summary.tag, attributes, summary.children
    )
}
