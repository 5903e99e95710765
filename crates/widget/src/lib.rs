//! # widget
//!
//! The tag editor widget: ties the tokenizer and the surface together.
//!
//! Every input event runs the same cycle: read the surface's raw text,
//! tokenize it, rebuild the node sequence from scratch, and put the caret
//! back where the user left it. Nodes have no identity across rebuilds, so
//! "where the user left it" is the whole problem; see [`reconcile`].
//!
//! [`TagWidget`] is the per-activation state: an explicit struct with a
//! guarded `Uninitialized -> Active` transition, so multiple widget
//! instances coexist and repeated activation is a no-op.

pub mod reconcile;
mod render;
mod widget;

pub use reconcile::{CaretSnapshot, Placement, ReconcileStrategy};
pub use render::render;
pub use widget::{BackingField, TagWidget};
