//! Submitted-value parsing.
//!
//! The widget flushes the surface's flattened text into a hidden form
//! field, with completed tags joined by the NBSP separator. This module is
//! the receiving half: it splits the submitted value back apart and
//! canonicalizes each tag into a slug.

/// Canonicalize a single tag into slug form.
///
/// Lowercases, keeps ASCII alphanumerics, collapses runs of whitespace,
/// hyphens and underscores into a single hyphen, drops everything else,
/// and strips leading/trailing hyphens.
///
/// # Examples
///
/// ```
/// use tokens::slugify;
///
/// assert_eq!(slugify("Role Playing"), "role-playing");
/// assert_eq!(slugify("  Sci-Fi!  "), "sci-fi");
/// assert_eq!(slugify("***"), "");
/// ```
pub fn slugify(tag: &str) -> String {
    let mut out = String::with_capacity(tag.len());
    let mut pending_hyphen = false;
    for ch in tag.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(ch.to_ascii_lowercase());
        } else if ch.is_whitespace() || ch == '-' || ch == '_' {
            pending_hyphen = true;
        }
        // Anything else is dropped without acting as a word break.
    }
    out
}

/// Parse a submitted backing value into canonical, deduplicated tag slugs.
///
/// The value is split on NBSP (the chip separator used by the surface),
/// each piece is slugified, blanks are skipped, and duplicates are removed
/// while preserving first-occurrence order.
///
/// # Examples
///
/// ```
/// use tokens::parse_submitted;
///
/// let value = "Platformer\u{a0}Co-op\u{a0}platformer\u{a0}";
/// assert_eq!(parse_submitted(value), vec!["platformer", "co-op"]);
/// ```
pub fn parse_submitted(value: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for piece in value.split('\u{a0}') {
        let slug = slugify(piece.trim());
        if slug.is_empty() {
            continue;
        }
        if !out.contains(&slug) {
            out.push(slug);
        }
    }
    log::debug!(
        target: "tokens.slug",
        "parsed {} tag(s) from submitted value ({} bytes)",
        out.len(),
        value.len()
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_basic() {
        assert_eq!(slugify("Action"), "action");
        assert_eq!(slugify("turn based"), "turn-based");
        assert_eq!(slugify("rogue_like"), "rogue-like");
    }

    #[test]
    fn slugify_collapses_separator_runs() {
        assert_eq!(slugify("a -- b"), "a-b");
        assert_eq!(slugify("--edge--"), "edge");
    }

    #[test]
    fn slugify_drops_punctuation_without_breaking_words() {
        assert_eq!(slugify("don't"), "dont");
        assert_eq!(slugify("8-bit!"), "8-bit");
    }

    #[test]
    fn parse_skips_blanks_and_dedupes() {
        assert_eq!(
            parse_submitted("foo\u{a0}\u{a0}bar\u{a0}FOO"),
            vec!["foo", "bar"]
        );
        assert_eq!(parse_submitted(""), Vec::<String>::new());
        assert_eq!(parse_submitted("\u{a0}\u{a0}"), Vec::<String>::new());
    }

    #[test]
    fn parse_handles_trailing_token_text() {
        // A flush taken mid-typing ends with the plain trailing text.
        assert_eq!(
            parse_submitted("foo\u{a0}ba"),
            vec!["foo".to_string(), "ba".to_string()]
        );
    }
}
