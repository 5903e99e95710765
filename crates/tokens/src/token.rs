//! Tag token value type.

/// A single segment of the raw surface text, delimited by whitespace/commas.
///
/// The final token of any tokenization is the *trailing* token: the one the
/// user is actively typing. It may be empty, which represents "caret sits
/// after a completed tag, about to start a new one". All preceding tokens
/// are completed tags.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagToken {
    /// The token text, already trimmed. Never contains delimiter characters.
    pub text: String,
    /// `true` only for the last token in a tokenization.
    pub trailing: bool,
}

impl TagToken {
    /// A completed (non-trailing) token.
    pub fn completed(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            trailing: false,
        }
    }

    /// The trailing token (the one under the caret).
    pub fn trailing(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            trailing: true,
        }
    }

    /// Returns `true` if the token carries no text.
    ///
    /// Empty completed tokens come from doubled delimiters and are skipped
    /// by the renderer; an empty trailing token is a valid caret rest stop.
    #[inline]
    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }
}
