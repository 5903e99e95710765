//! Raw-text tokenizer.
//!
//! Splits surface text on the pattern "one whitespace-or-comma character,
//! greedily absorbing adjacent whitespace". The practical consequences:
//!
//! - A delimiter run with no commas is a single separator, whatever its
//!   length (`"a  b"` → `a`, `b`).
//! - A delimiter run with `c >= 1` commas is `c` separators, so doubled
//!   commas produce empty tokens between them (`"a,,b"` → `a`, ``, `b`).
//! - The final piece is always the trailing token, even when empty.
//!
//! NBSP (U+00A0) counts as whitespace, so flattened surface text (chips
//! joined by the NBSP separator) re-tokenizes to the same tag set.

use crate::token::TagToken;

/// Returns `true` for characters that separate tags.
///
/// Any Unicode whitespace (NBSP included) or a comma.
#[inline]
pub fn is_delimiter(ch: char) -> bool {
    ch == ',' || ch.is_whitespace()
}

/// Tokenize raw surface text into an ordered tag token sequence.
///
/// Always returns at least one token; the last one has `trailing = true`.
/// Empty completed tokens (from doubled commas or a leading delimiter) are
/// preserved here and skipped later by the renderer, so callers that need
/// positional bookkeeping see the full sequence.
///
/// # Examples
///
/// ```
/// use tokens::{tokenize, TagToken};
///
/// assert_eq!(
///     tokenize("foo, bar  baz"),
///     vec![
///         TagToken::completed("foo"),
///         TagToken::completed("bar"),
///         TagToken::trailing("baz"),
///     ],
/// );
/// assert_eq!(tokenize(""), vec![TagToken::trailing("")]);
/// ```
pub fn tokenize(raw: &str) -> Vec<TagToken> {
    let mut out: Vec<TagToken> = Vec::new();
    let mut piece_start = 0usize;
    let mut iter = raw.char_indices().peekable();

    while let Some((i, ch)) = iter.next() {
        if !is_delimiter(ch) {
            continue;
        }
        debug_assert!(raw.is_char_boundary(piece_start) && raw.is_char_boundary(i));
        push_piece(&mut out, &raw[piece_start..i]);

        // Consume the maximal delimiter run, counting commas as we go.
        let mut commas = usize::from(ch == ',');
        let mut run_end = i + ch.len_utf8();
        while let Some(&(j, next)) = iter.peek() {
            if !is_delimiter(next) {
                break;
            }
            commas += usize::from(next == ',');
            run_end = j + next.len_utf8();
            iter.next();
        }

        // One separator per comma; a comma-less run is one separator. Each
        // separator beyond the first contributes an empty completed token.
        for _ in 1..commas.max(1) {
            push_piece(&mut out, "");
        }
        piece_start = run_end;
    }

    push_piece(&mut out, &raw[piece_start..]);
    if let Some(last) = out.last_mut() {
        last.trailing = true;
    }

    log::trace!(
        target: "tokens.tokenize",
        "tokenized {} bytes into {} tokens",
        raw.len(),
        out.len()
    );
    out
}

fn push_piece(out: &mut Vec<TagToken>, piece: &str) {
    out.push(TagToken::completed(piece.trim()));
}
