//! UTF-8 offset utilities.
//!
//! Caret offsets arrive from hosts and from arithmetic that knows nothing
//! about char boundaries; every consumer clamps before slicing.

/// Clamp an arbitrary byte index to a valid char boundary in `s`.
///
/// Indices beyond the string clamp to `s.len()`; indices inside a
/// multi-byte char are adjusted backwards to its start.
///
/// # Examples
///
/// ```
/// use surface::clamp_to_char_boundary;
///
/// let s = "a\u{a0}b"; // NBSP is 2 bytes
/// assert_eq!(clamp_to_char_boundary(s, 2), 1);
/// assert_eq!(clamp_to_char_boundary(s, 3), 3);
/// assert_eq!(clamp_to_char_boundary(s, 99), 4);
/// ```
#[inline]
pub fn clamp_to_char_boundary(s: &str, index: usize) -> usize {
    let mut index = index.min(s.len());
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// The start of the char immediately before byte index `i`, or 0.
///
/// Used by backspace: deleting one char removes `prev_char_boundary(s, i)..i`.
pub fn prev_char_boundary(s: &str, i: usize) -> usize {
    let i = clamp_to_char_boundary(s, i);
    if i == 0 {
        return 0;
    }
    s[..i].char_indices().last().map(|(idx, _)| idx).unwrap_or(0)
}
