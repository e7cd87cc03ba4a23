//! # Built-in Tag Tables
//!
//! The fixed descriptor tables behind [`SchemaRegistry::builtin`]. Each
//! profile gets its own table; tags shared by both profiles are declared once
//! and specialized where the dialects disagree.
//!
//! ## Content Models
//!
//! | Tag | Children |
//! |-----|----------|
//! | `speak`, `lang`, `prosody`, `voice` | text, phrase content, `p`, `s` |
//! | `p` | text, phrase content, `s` |
//! | `s`, `emphasis` | text, phrase content |
//! | `say-as`, `phoneme`, `sub`, `w` | text only |
//! | `audio`, `break`, `mark` | none |
//!
//! Phrase content is `audio`, `break`, `emphasis`, `lang`, `phoneme`,
//! `prosody`, `say-as`, `sub`, `voice`, plus `mark` (standard) or
//! `amazon:effect`, `amazon:emotion`, `w` (alexa). `amazon:domain` may only
//! appear directly under `speak`.
//!
//! [`SchemaRegistry::builtin`]: crate::SchemaRegistry::builtin

use crate::descriptor::{AttrKind, AttributeSpec, ChildConstraint, SchemaDescriptor};
use crate::profile::Profile;

const PHRASE_CONTENT: &[&str] = &[
    "audio", "break", "emphasis", "lang", "phoneme", "prosody", "say-as", "sub", "voice",
];

const BREAK_STRENGTHS: &[&str] = &["none", "x-weak", "weak", "medium", "strong", "x-strong"];
const EMPHASIS_LEVELS: &[&str] = &["strong", "moderate", "none", "reduced"];
const VOICE_GENDERS: &[&str] = &["female", "male", "neutral"];

const ALEXA_INTERPRET_AS: &[&str] = &[
    "characters",
    "spell-out",
    "cardinal",
    "number",
    "ordinal",
    "digits",
    "fraction",
    "unit",
    "date",
    "time",
    "telephone",
    "address",
    "interjection",
    "expletive",
];
const ALEXA_ALPHABETS: &[&str] = &["ipa", "x-sampa"];
const ALEXA_DOMAINS: &[&str] = &["conversational", "long-form", "music", "news", "fun"];
const ALEXA_EFFECTS: &[&str] = &["whispered"];
const ALEXA_EMOTIONS: &[&str] = &["excited", "disappointed"];
const ALEXA_INTENSITIES: &[&str] = &["low", "medium", "high"];
const ALEXA_WORD_ROLES: &[&str] = &["amazon:VB", "amazon:VBD", "amazon:NN", "amazon:SENSE_1"];

fn phrase_content(profile: Profile) -> Vec<&'static str> {
    let mut tags = PHRASE_CONTENT.to_vec();
    match profile {
        Profile::Standard => tags.push("mark"),
        Profile::Alexa => tags.extend(["amazon:effect", "amazon:emotion", "w"]),
    }
    tags
}

fn text(name: &str) -> AttributeSpec {
    AttributeSpec::optional(name, AttrKind::Text)
}

fn one_of(name: &str, values: &[&str]) -> AttributeSpec {
    AttributeSpec::optional(name, AttrKind::enumerated(values.iter().copied()))
}

fn required_one_of(name: &str, values: &[&str]) -> AttributeSpec {
    AttributeSpec::required(name, AttrKind::enumerated(values.iter().copied()))
}

/// All descriptors for a profile, in table order.
pub(crate) fn descriptors(profile: Profile) -> Vec<SchemaDescriptor> {
    let phrase = phrase_content(profile);
    let with = |extra: &[&'static str]| {
        ChildConstraint::any_of(phrase.iter().chain(extra.iter()).copied())
    };

    let speak_children = match profile {
        Profile::Standard => with(&["p", "s"]),
        Profile::Alexa => with(&["p", "s", "amazon:domain"]),
    };

    let mut table = vec![
        SchemaDescriptor::new("speak", speak_children)
            .attribute(text("version"))
            .attribute(text("xml:lang"))
            .attribute(text("xmlns")),
        SchemaDescriptor::new("p", with(&["s"])).attribute(text("xml:lang")),
        SchemaDescriptor::new("s", with(&[])).attribute(text("xml:lang")),
        SchemaDescriptor::new("break", ChildConstraint::None)
            .attribute(one_of("strength", BREAK_STRENGTHS))
            .attribute(AttributeSpec::optional("time", AttrKind::Duration)),
        SchemaDescriptor::new("audio", ChildConstraint::None)
            .attribute(AttributeSpec::required("src", AttrKind::Text)),
        SchemaDescriptor::new("emphasis", with(&[])).attribute(one_of("level", EMPHASIS_LEVELS)),
        SchemaDescriptor::new("lang", with(&["p", "s"]))
            .attribute(AttributeSpec::required("xml:lang", AttrKind::Text)),
        SchemaDescriptor::new("sub", ChildConstraint::TextOnly)
            .attribute(AttributeSpec::required("alias", AttrKind::Text)),
    ];

    match profile {
        Profile::Standard => table.extend([
            SchemaDescriptor::new("say-as", ChildConstraint::TextOnly)
                .attribute(AttributeSpec::required("interpret-as", AttrKind::Text))
                .attribute(text("format"))
                .attribute(text("detail")),
            SchemaDescriptor::new("phoneme", ChildConstraint::TextOnly)
                .attribute(text("alphabet"))
                .attribute(AttributeSpec::required("ph", AttrKind::Text)),
            SchemaDescriptor::new("prosody", with(&["p", "s"]))
                .attribute(text("rate"))
                .attribute(text("pitch"))
                .attribute(text("volume"))
                .attribute(AttributeSpec::optional("duration", AttrKind::Duration)),
            SchemaDescriptor::new("voice", with(&["p", "s"]))
                .attribute(text("name"))
                .attribute(one_of("gender", VOICE_GENDERS))
                .attribute(AttributeSpec::optional("age", AttrKind::Number))
                .attribute(AttributeSpec::optional("variant", AttrKind::Number))
                .attribute(text("languages")),
            SchemaDescriptor::new("mark", ChildConstraint::None)
                .attribute(AttributeSpec::required("name", AttrKind::Text)),
        ]),
        Profile::Alexa => table.extend([
            SchemaDescriptor::new("say-as", ChildConstraint::TextOnly)
                .attribute(required_one_of("interpret-as", ALEXA_INTERPRET_AS))
                .attribute(text("format")),
            SchemaDescriptor::new("phoneme", ChildConstraint::TextOnly)
                .attribute(required_one_of("alphabet", ALEXA_ALPHABETS))
                .attribute(AttributeSpec::required("ph", AttrKind::Text)),
            SchemaDescriptor::new("prosody", with(&["p", "s"]))
                .attribute(text("rate"))
                .attribute(text("pitch"))
                .attribute(text("volume")),
            SchemaDescriptor::new("voice", with(&["p", "s"]))
                .attribute(AttributeSpec::required("name", AttrKind::Text)),
            SchemaDescriptor::new("amazon:domain", with(&["p", "s"]))
                .attribute(required_one_of("name", ALEXA_DOMAINS)),
            SchemaDescriptor::new("amazon:effect", with(&["p", "s"]))
                .attribute(required_one_of("name", ALEXA_EFFECTS)),
            SchemaDescriptor::new("amazon:emotion", with(&["p", "s"]))
                .attribute(required_one_of("name", ALEXA_EMOTIONS))
                .attribute(required_one_of("intensity", ALEXA_INTENSITIES)),
            SchemaDescriptor::new("w", ChildConstraint::TextOnly)
                .attribute(required_one_of("role", ALEXA_WORD_ROLES)),
        ]),
    }

    table
}
