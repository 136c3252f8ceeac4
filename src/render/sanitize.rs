//! Text sanitization for the built-in Helvetica fonts.
//!
//! The layout engine positions text by column count, so the mapping keeps
//! character counts stable: every typographic character collapses to its
//! closest ASCII equivalent and anything else outside the printable range
//! becomes a single `-` placeholder instead of being dropped.

/// Smart-typography characters and their plain-ASCII spellings.
const REPLACEMENTS: &[(char, &str)] = &[
    ('\u{2018}', "'"),   // left single quote
    ('\u{2019}', "'"),   // right single quote
    ('\u{201C}', "\""),  // left double quote
    ('\u{201D}', "\""),  // right double quote
    ('\u{2013}', "-"),   // en dash
    ('\u{2014}', "-"),   // em dash
    ('\u{2026}', "..."), // ellipsis
    ('\u{2022}', "-"),   // bullet glyph
];

/// Collapse text to printable ASCII.
///
/// Emphasis asterisks are stripped outright; newlines and tabs survive so
/// line structure reaches the wrapper. A result that trims to nothing
/// becomes a single space, never an empty string.
pub fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    'chars: for c in text.chars() {
        if c == '*' {
            continue;
        }
        for (from, to) in REPLACEMENTS {
            if c == *from {
                out.push_str(to);
                continue 'chars;
            }
        }
        match c {
            ' '..='~' | '\n' | '\t' => out.push(c),
            _ => out.push('-'),
        }
    }

    let trimmed = out.trim();
    if trimmed.is_empty() {
        " ".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smart_quotes_become_straight() {
        assert_eq!(sanitize("\u{2018}hi\u{2019}"), "'hi'");
        assert_eq!(sanitize("\u{201C}hi\u{201D}"), "\"hi\"");
    }

    #[test]
    fn dashes_ellipsis_and_bullets_collapse() {
        assert_eq!(sanitize("a \u{2013} b \u{2014} c"), "a - b - c");
        assert_eq!(sanitize("wait\u{2026}"), "wait...");
        assert_eq!(sanitize("\u{2022} item"), "- item");
    }

    #[test]
    fn emphasis_asterisks_are_stripped() {
        assert_eq!(sanitize("**bold** and *italic*"), "bold and italic");
    }

    #[test]
    fn non_ascii_becomes_dash_placeholder() {
        assert_eq!(sanitize("café"), "caf-");
        assert_eq!(sanitize("日本"), "--");
        // Character count is preserved for layout purposes.
        assert_eq!(sanitize("naïve").chars().count(), "naïve".chars().count());
    }

    #[test]
    fn control_characters_become_dash_but_whitespace_survives() {
        assert_eq!(sanitize("a\u{7}b"), "a-b");
        assert_eq!(sanitize("line one\nline two"), "line one\nline two");
    }

    #[test]
    fn whitespace_only_becomes_single_space() {
        assert_eq!(sanitize(""), " ");
        assert_eq!(sanitize("   \t "), " ");
        assert_eq!(sanitize("***"), " ");
    }

    #[test]
    fn output_is_printable_ascii() {
        let sanitized = sanitize("résumé \u{2014} “done” \u{2022} 完了\u{0007}");
        assert!(sanitized
            .chars()
            .all(|c| matches!(c, ' '..='~' | '\n' | '\t')));
    }

    #[test]
    fn sanitize_is_idempotent() {
        let samples = [
            "plain text",
            "“smart” — text…",
            "**emphasis** everywhere",
            "mixed café \u{2022} bullet",
            "",
            "   ",
            "already - plain... 'text'",
        ];
        for sample in samples {
            let once = sanitize(sample);
            assert_eq!(sanitize(&once), once, "not idempotent for {sample:?}");
        }
    }
}
