//! Caret representation.

/// A collapsed caret (single insertion point, no range) on a surface.
///
/// When `node` is `Some(i)`, the caret sits inside child `i` and `offset`
/// is a byte offset into that node's text content. When `node` is `None`,
/// the caret is parked on the surface root itself and `offset` is a child
/// slot index: the degraded resting place the reconciler falls back to
/// when no child contains the focus point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Caret {
    /// Index of the containing child node, or `None` for the surface root.
    pub node: Option<usize>,
    /// Byte offset within the node's text, or child slot when at the root.
    pub offset: usize,
}

impl Caret {
    /// Caret inside child `node` at byte `offset`.
    #[inline]
    pub fn in_node(node: usize, offset: usize) -> Self {
        Self {
            node: Some(node),
            offset,
        }
    }

    /// Caret parked on the surface root at the given child slot.
    #[inline]
    pub fn at_root(offset: usize) -> Self {
        Self { node: None, offset }
    }

    /// Returns `true` when the caret is parked on the root.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.node.is_none()
    }
}

impl Default for Caret {
    fn default() -> Self {
        Caret::at_root(0)
    }
}
