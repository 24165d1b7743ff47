//! Escaping of untrusted order text before it is displayed.

/// Replace the HTML-significant characters `& < > " '` with their entities.
///
/// Everything else passes through unchanged, so escaping twice escapes the
/// ampersands of the first pass again.
pub fn escape_for_display(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            other => out.push(other),
        }
    }
    out
}

/// Replace control characters with `?` so order text cannot move the cursor
/// or recolour the terminal.
pub fn sanitize_for_terminal(text: &str) -> String {
    text.chars()
        .map(|ch| if ch.is_control() { '?' } else { ch })
        .collect()
}

/// [`sanitize_for_terminal`] applied line by line, keeping the line breaks.
pub fn sanitize_lines(text: &str) -> String {
    text.split('\n')
        .map(sanitize_for_terminal)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn maps_all_five_characters() {
        assert_eq!(
            escape_for_display(r#"<b>"Tom & Jerry's"</b>"#),
            "&lt;b&gt;&quot;Tom &amp; Jerry&#039;s&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn plain_text_is_untouched() {
        assert_eq!(escape_for_display("Pizza Palace"), "Pizza Palace");
        assert_eq!(escape_for_display(""), "");
    }

    #[test]
    fn escaping_is_not_idempotent_on_entities() {
        assert_eq!(escape_for_display("&amp;"), "&amp;amp;");
    }

    #[test]
    fn control_characters_are_neutralised() {
        assert_eq!(sanitize_for_terminal("Taco\x1b[31m Time\n"), "Taco?[31m Time?");
    }

    #[test]
    fn line_breaks_survive_line_sanitizing() {
        assert_eq!(
            sanitize_lines("Restaurant: Evil\x1b[2J\r\nDistance: 1 km\n"),
            "Restaurant: Evil?[2J?\nDistance: 1 km\n"
        );
    }

    proptest! {
        /// Property: escaped output never contains a raw markup character
        /// other than the `&` that starts an entity.
        #[test]
        fn output_has_no_raw_markup(text in ".{0,64}") {
            let escaped = escape_for_display(&text);
            prop_assert!(!escaped.contains(['<', '>', '"', '\'']));
        }
    }
}
