//! # surface
//!
//! Headless model of the tag editor's editable surface.
//!
//! A [`Surface`] owns an ordered sequence of [`Node`]s (chips, separators,
//! plain text) and a [`Caret`]. It supports exactly what the widget layer
//! needs from its host: read the full text content, replace the entire
//! node sequence, remove a single node, and read/write the caret as a
//! `(node index, byte offset)` pair. A pair of editing operations
//! (`insert_at_caret`, `backspace_at_caret`) lets hosts and tests simulate
//! typing without a real UI.
//!
//! ## Design Principles
//!
//! - No dependency on the tokenizer or widget crates; this is the bottom
//!   of the stack and knows nothing about tags as such.
//! - All offsets are byte offsets into UTF-8 text and are clamped to char
//!   boundaries before use.
//! - Structural replacement is total: there is no incremental patching and
//!   no stable node identity across replacements.

mod caret;
mod doc;
mod node;
#[cfg(feature = "snapshot")]
mod snapshot;
mod text;

pub use caret::Caret;
pub use doc::Surface;
pub use node::{Node, SEPARATOR};
#[cfg(feature = "snapshot")]
pub use snapshot::{SnapshotOptions, SurfaceSnapshot};
pub use text::{clamp_to_char_boundary, prev_char_boundary};
