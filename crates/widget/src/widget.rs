//! Widget activation, event wiring, and submission flush.

use crate::reconcile::{self, Placement, ReconcileStrategy};
use crate::render::render;
use surface::Surface;
use tokens::tokenize;

/// Write-only target for the flattened tag text: the hidden form input the
/// host submits. The widget never reads it back.
pub trait BackingField {
    fn set_value(&mut self, value: &str);
}

/// Plain strings work as a backing field; handy for hosts and tests.
impl BackingField for String {
    fn set_value(&mut self, value: &str) {
        self.clear();
        self.push_str(value);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Uninitialized,
    Active,
}

/// One tag editor instance: the surface it owns plus activation state.
///
/// Per-activation state lives here rather than in captured closures, so
/// several widgets can coexist and each can be driven headlessly. The
/// phase guard makes repeated [`activate`](TagWidget::activate) calls
/// no-ops, and input events before activation are ignored.
#[derive(Debug)]
pub struct TagWidget {
    surface: Surface,
    strategy: ReconcileStrategy,
    phase: Phase,
}

impl TagWidget {
    pub fn new() -> Self {
        Self::with_strategy(ReconcileStrategy::default())
    }

    pub fn with_strategy(strategy: ReconcileStrategy) -> Self {
        Self {
            surface: Surface::new(),
            strategy,
            phase: Phase::Uninitialized,
        }
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Mutable surface access for the host: apply an edit here, then call
    /// [`input`](TagWidget::input) as the "content changed" event.
    pub fn surface_mut(&mut self) -> &mut Surface {
        &mut self.surface
    }

    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }

    /// Activate the widget, seeding the surface from the externally
    /// supplied initial tag string and placing the caret at the end.
    ///
    /// Returns `false` (and changes nothing) if already active.
    pub fn activate(&mut self, initial: &str) -> bool {
        if self.phase == Phase::Active {
            log::debug!(target: "widget", "activate ignored: already active");
            return false;
        }
        self.surface.replace_children(render(&tokenize(initial)));
        self.surface.caret_to_end();
        self.phase = Phase::Active;
        log::debug!(
            target: "widget",
            "activated with {} node(s) from initial value",
            self.surface.len()
        );
        true
    }

    /// The input event: re-segment the surface's raw text and rebuild the
    /// node sequence, preserving the caret across the rebuild.
    ///
    /// Returns how the caret was resolved; `None` if the widget is not
    /// active (events before activation are ignored).
    pub fn input(&mut self) -> Option<Placement> {
        if self.phase != Phase::Active {
            log::warn!(target: "widget", "input event before activation ignored");
            return None;
        }
        Some(self.reformat())
    }

    /// The removal-affordance click: delete the chip at `index`.
    ///
    /// Clicks on anything but a chip are ignored (returns `false`). After
    /// removal the format pass runs again, so the orphaned separator is
    /// normalized away immediately rather than on the next keystroke.
    pub fn click(&mut self, index: usize) -> bool {
        if self.phase != Phase::Active {
            return false;
        }
        let is_chip = self
            .surface
            .child(index)
            .is_some_and(|node| node.is_chip());
        if !is_chip {
            return false;
        }
        self.surface.remove_child(index);
        log::debug!(target: "widget", "removed chip at index {index}");
        self.reformat();
        true
    }

    /// Flush the surface's flattened text into the hidden backing field.
    /// Called once per submit attempt, immediately before the form goes out.
    pub fn flush(&self, field: &mut impl BackingField) {
        let value = self.surface.text_content();
        log::debug!(target: "widget", "flushing {} byte(s) to backing field", value.len());
        field.set_value(&value);
    }

    /// The completed tags currently on the surface (chip texts, in order).
    pub fn tags(&self) -> Vec<&str> {
        self.surface
            .children()
            .iter()
            .filter_map(|node| match node {
                surface::Node::Chip { text } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    fn reformat(&mut self) -> Placement {
        let raw = self.surface.text_content();
        let snapshot = reconcile::capture(&self.surface);
        self.surface.replace_children(render(&tokenize(&raw)));
        reconcile::restore(&mut self.surface, &snapshot, self.strategy)
    }
}

impl Default for TagWidget {
    fn default() -> Self {
        Self::new()
    }
}
