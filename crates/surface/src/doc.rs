//! The surface document: owned node sequence plus caret.

use crate::caret::Caret;
use crate::node::Node;
use crate::text::{clamp_to_char_boundary, prev_char_boundary};

/// An editable surface: the headless stand-in for the host's
/// contenteditable region.
///
/// Owns the child [`Node`] sequence and the collapsed [`Caret`]. The caret
/// is kept valid as an invariant: every mutation re-clamps it against the
/// current children.
#[derive(Clone, Debug, Default)]
pub struct Surface {
    children: Vec<Node>,
    caret: Caret,
}

impl Surface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn child(&self, index: usize) -> Option<&Node> {
        self.children.get(index)
    }

    /// The surface's full flattened text (RawText): the concatenation of
    /// every child's text content, separators included.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for node in &self.children {
            out.push_str(node.text_content());
        }
        out
    }

    pub fn caret(&self) -> Caret {
        self.caret
    }

    /// Move the caret, clamping it into the current structure.
    ///
    /// A node index past the end degrades to the root; a byte offset past a
    /// node's text (or mid-char) is clamped to the nearest boundary.
    pub fn set_caret(&mut self, caret: Caret) {
        self.caret = self.clamped(caret);
    }

    /// Place the caret at the very end of the surface (inside the last
    /// node's text when possible).
    pub fn caret_to_end(&mut self) {
        match self.children.len().checked_sub(1) {
            Some(last) => {
                let end = self.children[last].text_content().len();
                self.caret = Caret::in_node(last, end);
            }
            None => self.caret = Caret::at_root(0),
        }
    }

    /// Replace the entire child sequence. Full structural replacement: no
    /// patching, no node identity carried over. The stale caret is clamped
    /// into the new structure; callers that care about caret fidelity
    /// bracket this with a reconciler.
    pub fn replace_children(&mut self, children: Vec<Node>) {
        log::trace!(
            target: "surface.doc",
            "replace_children: {} -> {} node(s)",
            self.children.len(),
            children.len()
        );
        self.children = children;
        self.caret = self.clamped(self.caret);
    }

    /// Remove the child at `index`. Returns `false` on a stale index.
    ///
    /// A caret inside the removed node degrades to the root at that slot;
    /// carets in later nodes keep their logical position.
    pub fn remove_child(&mut self, index: usize) -> bool {
        if index >= self.children.len() {
            return false;
        }
        self.children.remove(index);
        self.caret = match self.caret {
            Caret {
                node: Some(n),
                offset,
            } if n > index => Caret::in_node(n - 1, offset),
            Caret { node: Some(n), .. } if n == index => Caret::at_root(index),
            other => other,
        };
        self.caret = self.clamped(self.caret);
        true
    }

    /// Insert text at the caret, simulating host typing.
    ///
    /// Inside an editable node the text lands at the caret offset and the
    /// caret advances past it. On a separator the text becomes a fresh
    /// text node right after it (separators are fixed decoration). At the
    /// root, the text becomes a fresh text node at the caret's child slot.
    pub fn insert_at_caret(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        match self.caret.node {
            Some(n) => {
                if let Some(text) = self.children[n].text_mut() {
                    let at = clamp_to_char_boundary(text, self.caret.offset);
                    text.insert_str(at, s);
                    self.caret = Caret::in_node(n, at + s.len());
                } else {
                    self.children.insert(n + 1, Node::text(s));
                    self.caret = Caret::in_node(n + 1, s.len());
                }
            }
            None => {
                let slot = self.caret.offset.min(self.children.len());
                self.children.insert(slot, Node::text(s));
                self.caret = Caret::in_node(slot, s.len());
            }
        }
    }

    /// Delete one character before the caret, simulating host backspace.
    ///
    /// At the start of a node this reaches into the previous sibling:
    /// a preceding separator is removed whole, a preceding chip/text node
    /// loses its last character. At the very start (or parked on the root)
    /// this is a no-op.
    pub fn backspace_at_caret(&mut self) {
        let Caret {
            node: Some(n),
            offset,
        } = self.caret
        else {
            return;
        };

        if offset > 0
            && let Some(text) = self.children[n].text_mut()
        {
            let at = clamp_to_char_boundary(text, offset);
            let prev = prev_char_boundary(text, at);
            text.drain(prev..at);
            self.caret = Caret::in_node(n, prev);
            return;
        }

        let Some(prev_index) = n.checked_sub(1) else {
            return;
        };
        match &mut self.children[prev_index] {
            Node::Separator => {
                self.children.remove(prev_index);
                self.caret = Caret::in_node(prev_index, 0);
            }
            Node::Chip { text } | Node::Text { text } => {
                if text.is_empty() {
                    self.children.remove(prev_index);
                    self.caret = Caret::in_node(prev_index, 0);
                } else {
                    let end = text.len();
                    let prev = prev_char_boundary(text, end);
                    text.drain(prev..end);
                    self.caret = Caret::in_node(prev_index, prev);
                }
            }
        }
        self.caret = self.clamped(self.caret);
    }

    fn clamped(&self, caret: Caret) -> Caret {
        match caret.node {
            Some(n) if n < self.children.len() => {
                let text = self.children[n].text_content();
                Caret::in_node(n, clamp_to_char_boundary(text, caret.offset))
            }
            Some(_) => Caret::at_root(self.children.len()),
            None => Caret::at_root(caret.offset.min(self.children.len())),
        }
    }
}
