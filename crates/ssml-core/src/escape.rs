//! XML escaping for text leaves and attribute values.
//!
//! Text content escapes `&`, `<`, `>` and `"`. Attribute values escape the
//! same characters plus tab, newline and carriage return as character
//! references, so that an XML parser's attribute-value normalization hands
//! back exactly the string that was written. All other characters, including
//! non-ASCII, pass through as UTF-8.

/// Append `text` to `out`, escaped for element content.
pub fn write_escaped_text(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}

/// Append `value` to `out`, escaped for a double-quoted attribute value.
pub fn write_escaped_attr(out: &mut String, value: &str) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\t' => out.push_str("&#9;"),
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            _ => out.push(ch),
        }
    }
}

/// Escape `text` for element content into a new string.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    write_escaped_text(&mut out, text);
    out
}

/// Escape `value` for a double-quoted attribute into a new string.
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    write_escaped_attr(&mut out, value);
    out
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Escaped text never contains a raw markup character.
        #[test]
        fn escaped_text_has_no_raw_markup(s in ".{0,64}") {
            let escaped = escape_text(&s);
            prop_assert!(!escaped.contains('<'));
            prop_assert!(!escaped.contains('>'));
            prop_assert!(!escaped.contains('"'));
        }

        /// Strings without special characters pass through unchanged.
        #[test]
        fn plain_text_is_unchanged(s in "[a-zA-Z0-9 .,!?]{0,64}") {
            prop_assert_eq!(escape_text(&s), s.clone());
            prop_assert_eq!(escape_attr(&s), s);
        }
    }
}
