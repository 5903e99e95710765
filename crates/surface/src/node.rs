//! Surface node model.

/// Decorative separator text emitted after every chip.
///
/// A single NBSP: one char, two bytes. The byte length is load-bearing for
/// the legacy caret heuristic (see the widget crate), and NBSP is what the
/// backend splits submitted values on.
pub const SEPARATOR: &str = "\u{a0}";

/// One node in the surface's child sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// Decorated rendering of a completed tag, wrapping its text and a
    /// removal affordance.
    Chip { text: String },
    /// Fixed decorative separator inserted after each chip.
    Separator,
    /// Undecorated text, used for the trailing (in-progress) token so the
    /// caret can extend it without being absorbed into a chip.
    Text { text: String },
}

impl Node {
    pub fn chip(text: impl Into<String>) -> Self {
        Node::Chip { text: text.into() }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Node::Text { text: text.into() }
    }

    /// The node's contribution to the surface's flattened text.
    pub fn text_content(&self) -> &str {
        match self {
            Node::Chip { text } => text,
            Node::Separator => SEPARATOR,
            Node::Text { text } => text,
        }
    }

    #[inline]
    pub fn is_chip(&self) -> bool {
        matches!(self, Node::Chip { .. })
    }

    #[inline]
    pub fn is_separator(&self) -> bool {
        matches!(self, Node::Separator)
    }

    /// Whether the node wraps inner text the caret can anchor into.
    ///
    /// Chips always wrap their text; a plain text node only when non-empty.
    /// Separators and empty text nodes have nothing to descend into, which
    /// is what triggers the legacy heuristic's sibling shift.
    pub fn has_inner_text(&self) -> bool {
        match self {
            Node::Chip { .. } => true,
            Node::Separator => false,
            Node::Text { text } => !text.is_empty(),
        }
    }

    /// Mutable access to the node's editable text.
    ///
    /// Separators are fixed decoration and return `None`.
    pub fn text_mut(&mut self) -> Option<&mut String> {
        match self {
            Node::Chip { text } | Node::Text { text } => Some(text),
            Node::Separator => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separator_is_two_bytes_one_char() {
        assert_eq!(SEPARATOR.len(), 2);
        assert_eq!(SEPARATOR.chars().count(), 1);
    }

    #[test]
    fn text_content_per_variant() {
        assert_eq!(Node::chip("foo").text_content(), "foo");
        assert_eq!(Node::Separator.text_content(), SEPARATOR);
        assert_eq!(Node::text("ba").text_content(), "ba");
    }

    #[test]
    fn inner_text_presence() {
        assert!(Node::chip("foo").has_inner_text());
        assert!(Node::text("x").has_inner_text());
        assert!(!Node::text("").has_inner_text());
        assert!(!Node::Separator.has_inner_text());
    }
}
