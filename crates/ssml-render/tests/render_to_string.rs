//! # Rendering Tests
//!
//! End-to-end checks of `render_to_string` over the built-in registry:
//! one test per common tag, the error taxonomy, escaping, and property
//! tests for determinism over generated valid trees.

use ssml_core::{AttributeViolation, ChildViolation, Node, SchemaError};
use ssml_render::{render_to_string, Renderer};
use ssml_schema::{Profile, SchemaRegistry};

// ---------------------------------------------------------------------------
// One tag at a time
// ---------------------------------------------------------------------------

#[test]
fn renders_speak() {
    let speech = Node::new("speak").text("Hello world");
    assert_eq!(render_to_string(&speech).unwrap(), "<speak>Hello world</speak>");
}

#[test]
fn renders_s() {
    let speech = Node::new("speak").child(Node::new("s").text("Hello world"));
    assert_eq!(
        render_to_string(&speech).unwrap(),
        "<speak><s>Hello world</s></speak>"
    );
}

#[test]
fn renders_p() {
    let speech = Node::new("speak").child(Node::new("p").text("Hello world"));
    assert_eq!(
        render_to_string(&speech).unwrap(),
        "<speak><p>Hello world</p></speak>"
    );
}

#[test]
fn renders_break() {
    let speech = Node::new("speak")
        .child(Node::new("s").text("Hello world"))
        .child(Node::new("break").attr("time", "2s"));
    assert_eq!(
        render_to_string(&speech).unwrap(),
        r#"<speak><s>Hello world</s><break time="2s"/></speak>"#
    );
}

#[test]
fn renders_break_alone() {
    let speech = Node::new("speak").child(Node::new("break").attr("time", "2s"));
    assert_eq!(
        render_to_string(&speech).unwrap(),
        r#"<speak><break time="2s"/></speak>"#
    );
}

#[test]
fn renders_say_as() {
    let speech = Node::new("speak").child(
        Node::new("say-as")
            .attr("interpret-as", "characters")
            .text("Hello world"),
    );
    assert_eq!(
        render_to_string(&speech).unwrap(),
        r#"<speak><say-as interpret-as="characters">Hello world</say-as></speak>"#
    );
}

#[test]
fn renders_deeply() {
    let speech = Node::new("speak").child(
        Node::new("p")
            .child(Node::new("s").text("Hello"))
            .child(Node::new("s").text("world")),
    );
    assert_eq!(
        render_to_string(&speech).unwrap(),
        "<speak><p><s>Hello</s><s>world</s></p></speak>"
    );
}

#[test]
fn renders_audio() {
    let speech = Node::new("speak")
        .text("Welcome back. ")
        .child(Node::new("audio").attr("src", "https://example.com/chime.mp3"));
    assert_eq!(
        render_to_string(&speech).unwrap(),
        r#"<speak>Welcome back. <audio src="https://example.com/chime.mp3"/></speak>"#
    );
}

#[test]
fn renders_mixed_prosody_and_emphasis() {
    let speech = Node::new("speak").child(
        Node::new("prosody")
            .attr("rate", "slow")
            .attr("pitch", "+10%")
            .text("This is ")
            .child(Node::new("emphasis").attr("level", "strong").text("very"))
            .text(" important."),
    );
    assert_eq!(
        render_to_string(&speech).unwrap(),
        r#"<speak><prosody rate="slow" pitch="+10%">This is <emphasis level="strong">very</emphasis> important.</prosody></speak>"#
    );
}

#[test]
fn renders_data_literal_tree() {
    let speech: Node = serde_json::from_str(
        r#"{
            "tag": "speak",
            "children": [
                {"tag": "s", "children": ["Hello world"]},
                {"tag": "break", "attributes": {"time": "2s"}}
            ]
        }"#,
    )
    .unwrap();
    assert_eq!(
        render_to_string(&speech).unwrap(),
        r#"<speak><s>Hello world</s><break time="2s"/></speak>"#
    );
}

// ---------------------------------------------------------------------------
// Escaping
// ---------------------------------------------------------------------------

#[test]
fn escapes_ampersand_in_text() {
    let speech = Node::new("speak").child(Node::new("s").text("Tom & Jerry"));
    assert_eq!(
        render_to_string(&speech).unwrap(),
        "<speak><s>Tom &amp; Jerry</s></speak>"
    );
}

#[test]
fn escapes_markup_and_quotes_in_text() {
    let speech = Node::new("speak").text(r#"1 < 2 and "yes""#);
    assert_eq!(
        render_to_string(&speech).unwrap(),
        "<speak>1 &lt; 2 and &quot;yes&quot;</speak>"
    );
}

#[test]
fn text_that_looks_like_markup_stays_text() {
    let speech = Node::new("speak").text("<break time=\"9s\"/>");
    let out = render_to_string(&speech).unwrap();
    assert!(!out.contains("<break"));
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[test]
fn unknown_tag_is_rejected() {
    let unknown = || SchemaError::UnknownTag {
        tag: "whisper".to_string(),
    };
    assert_eq!(render_to_string(&Node::new("whisper")).unwrap_err(), unknown());

    let speech = Node::new("speak").child(Node::new("whisper").text("psst"));
    assert_eq!(render_to_string(&speech).unwrap_err(), unknown());

    let deep = Node::new("speak").child(
        Node::new("p").child(Node::new("s").child(Node::new("emphasis").child(Node::new("whisper")))),
    );
    assert_eq!(render_to_string(&deep).unwrap_err(), unknown());
}

#[test]
fn registered_tag_in_wrong_place_is_an_invalid_child() {
    let speech = Node::new("speak").child(Node::new("p").child(Node::new("p").text("nested")));
    assert_eq!(
        render_to_string(&speech).unwrap_err(),
        SchemaError::InvalidChild {
            tag: "p".to_string(),
            violation: ChildViolation::TagNotPermitted {
                child: "p".to_string()
            },
        }
    );
}

#[test]
fn say_as_with_only_empty_text_is_rejected() {
    let speech = Node::new("speak").child(
        Node::new("say-as")
            .attr("interpret-as", "characters")
            .text(""),
    );
    assert_eq!(
        render_to_string(&speech).unwrap_err(),
        SchemaError::InvalidChild {
            tag: "say-as".to_string(),
            violation: ChildViolation::EmptyTextOnly,
        }
    );
}

#[test]
fn audio_with_children_is_rejected() {
    let speech = Node::new("speak").child(
        Node::new("audio")
            .attr("src", "https://example.com/chime.mp3")
            .text("fallback"),
    );
    assert_eq!(
        render_to_string(&speech).unwrap_err(),
        SchemaError::InvalidChild {
            tag: "audio".to_string(),
            violation: ChildViolation::ChildrenNotAllowed,
        }
    );
}

#[test]
fn missing_required_attribute_is_rejected() {
    let speech = Node::new("speak").child(Node::new("audio"));
    assert_eq!(
        render_to_string(&speech).unwrap_err(),
        SchemaError::InvalidAttribute {
            tag: "audio".to_string(),
            attribute: "src".to_string(),
            violation: AttributeViolation::Missing,
        }
    );
}

#[test]
fn unknown_attribute_is_rejected() {
    let speech = Node::new("speak").child(Node::new("s").attr("volume", "loud").text("Hi"));
    assert_eq!(
        render_to_string(&speech).unwrap_err(),
        SchemaError::InvalidAttribute {
            tag: "s".to_string(),
            attribute: "volume".to_string(),
            violation: AttributeViolation::Unknown,
        }
    );
}

#[test]
fn say_as_rejects_nested_elements() {
    let speech = Node::new("speak").child(
        Node::new("say-as")
            .attr("interpret-as", "characters")
            .child(Node::new("break")),
    );
    assert!(matches!(
        render_to_string(&speech).unwrap_err(),
        SchemaError::InvalidChild {
            violation: ChildViolation::ElementInTextOnly { .. },
            ..
        }
    ));
}

#[test]
fn render_agrees_with_eager_validation() {
    let registry = SchemaRegistry::builtin(Profile::Standard);
    let speech = Node::new("speak")
        .child(Node::new("p").child(Node::new("s").text("ok")))
        .child(Node::new("break").attr("time", "forever"));
    assert_eq!(
        render_to_string(&speech).unwrap_err(),
        registry.validate_tree(&speech).unwrap_err()
    );
}

#[test]
fn concurrent_renders_share_the_registry() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let speech = Node::new("speak").child(Node::new("s").text(format!("Item {i}")));
                Renderer::for_profile(Profile::Standard).render(&speech)
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(
            handle.join().unwrap().unwrap(),
            format!("<speak><s>Item {i}</s></speak>")
        );
    }
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

mod proptests {
    use super::*;
    use proptest::prelude::*;
    use ssml_core::Child;

    fn text_leaf() -> impl Strategy<Value = Child> {
        "[a-zA-Z0-9 .,&<>\"]{0,16}".prop_map(Child::Text)
    }

    fn break_node() -> impl Strategy<Value = Child> {
        (
            proptest::option::of("[0-9]{1,4}(s|ms)"),
            proptest::option::of(prop_oneof![Just("weak"), Just("medium"), Just("strong")]),
        )
            .prop_map(|(time, strength)| {
                let mut node = Node::new("break");
                if let Some(time) = time {
                    node = node.attr("time", time);
                }
                if let Some(strength) = strength {
                    node = node.attr("strength", strength);
                }
                Child::Node(node)
            })
    }

    fn say_as_node() -> impl Strategy<Value = Child> {
        (
            prop_oneof![Just("characters"), Just("cardinal"), Just("date")],
            "[a-z0-9 &]{1,12}",
        )
            .prop_map(|(interpret_as, text)| {
                Child::Node(Node::new("say-as").attr("interpret-as", interpret_as).text(text))
            })
    }

    fn audio_node() -> impl Strategy<Value = Child> {
        "[a-z]{1,8}".prop_map(|name| {
            Child::Node(Node::new("audio").attr("src", format!("https://example.com/{name}.mp3?a=1&b=2")))
        })
    }

    /// Phrase content, with `emphasis` nesting for depth.
    fn phrase() -> impl Strategy<Value = Child> {
        let leaf = prop_oneof![text_leaf(), break_node(), say_as_node(), audio_node()];
        leaf.prop_recursive(3, 24, 4, |inner| {
            proptest::collection::vec(inner, 0..4)
                .prop_map(|children| Child::Node(Node::new("emphasis").with_children(children)))
        })
    }

    fn sentence() -> impl Strategy<Value = Child> {
        proptest::collection::vec(phrase(), 0..4)
            .prop_map(|children| Child::Node(Node::new("s").with_children(children)))
    }

    fn paragraph() -> impl Strategy<Value = Child> {
        proptest::collection::vec(prop_oneof![sentence(), phrase()], 0..4)
            .prop_map(|children| Child::Node(Node::new("p").with_children(children)))
    }

    fn speak() -> impl Strategy<Value = Node> {
        proptest::collection::vec(prop_oneof![paragraph(), sentence(), phrase()], 0..5)
            .prop_map(|children| Node::new("speak").with_children(children))
    }

    proptest! {
        /// Valid trees always render.
        #[test]
        fn valid_trees_never_fail(tree in speak()) {
            let result = render_to_string(&tree);
            prop_assert!(result.is_ok(), "render failed: {:?}", result.err());
        }

        /// Rendering is deterministic: same tree, same bytes.
        #[test]
        fn rendering_is_deterministic(tree in speak()) {
            let a = render_to_string(&tree).unwrap();
            let b = render_to_string(&tree.clone()).unwrap();
            prop_assert_eq!(a, b);
        }

        /// Output is a single `speak` element with no raw quotes in text.
        #[test]
        fn output_is_one_speak_element(tree in speak()) {
            let out = render_to_string(&tree).unwrap();
            prop_assert!(out.starts_with("<speak"));
            prop_assert!(out.ends_with("</speak>") || out == "<speak/>");
            prop_assert!(!out.contains('\n'));
        }

        /// Eager validation accepts exactly what rendering accepts.
        #[test]
        fn eager_validation_agrees(tree in speak()) {
            let registry = SchemaRegistry::builtin(Profile::Standard);
            prop_assert!(registry.validate_tree(&tree).is_ok());
        }
    }
}
