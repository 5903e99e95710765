//! Token sequence to node sequence.

use surface::Node;
use tokens::TagToken;

/// Build the surface's node sequence from a token sequence.
///
/// Completed non-empty tokens become a chip followed by the decorative
/// separator; completed empty tokens (doubled delimiters) emit nothing;
/// the trailing token (even when empty) becomes a bare text node so the
/// caret can keep extending it. Node order follows token order; skipped
/// empties only reduce the chip count.
pub fn render(tokens: &[TagToken]) -> Vec<Node> {
    let mut out = Vec::with_capacity(tokens.len() * 2);
    for token in tokens {
        if token.trailing {
            out.push(Node::text(token.text.clone()));
        } else if !token.is_blank() {
            out.push(Node::chip(token.text.clone()));
            out.push(Node::Separator);
        }
    }
    log::trace!(
        target: "widget.render",
        "rendered {} token(s) into {} node(s)",
        tokens.len(),
        out.len()
    );
    out
}
