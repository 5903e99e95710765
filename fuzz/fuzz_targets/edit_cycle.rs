#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use surface::Caret;
use widget::{ReconcileStrategy, TagWidget};

#[derive(Arbitrary, Debug)]
struct EditCycle<'a> {
    initial: &'a str,
    typed: &'a str,
    caret_node: Option<u8>,
    caret_offset: u8,
    legacy: bool,
}

fuzz_target!(|cycle: EditCycle<'_>| {
    let strategy = if cycle.legacy {
        ReconcileStrategy::NodeIndex
    } else {
        ReconcileStrategy::ContentOffset
    };
    let mut widget = TagWidget::with_strategy(strategy);
    widget.activate(cycle.initial);

    let caret = match cycle.caret_node {
        Some(node) => Caret::in_node(node as usize, cycle.caret_offset as usize),
        None => Caret::at_root(cycle.caret_offset as usize),
    };
    widget.surface_mut().set_caret(caret);
    widget.surface_mut().insert_at_caret(cycle.typed);
    widget.input();
    widget.surface_mut().backspace_at_caret();
    widget.input();

    // The caret must always land inside the surface it was reconciled to.
    let caret = widget.surface().caret();
    match caret.node {
        Some(node) => {
            let len = widget
                .surface()
                .child(node)
                .map(|n| n.text_content().len())
                .unwrap_or(0);
            assert!(node < widget.surface().len());
            assert!(caret.offset <= len);
        }
        None => assert!(caret.offset <= widget.surface().len()),
    }
});
