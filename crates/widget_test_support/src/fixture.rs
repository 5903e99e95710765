//! TOML-driven editing session fixtures.
//!
//! A fixture file holds `[[session]]` tables: an initial value, a list of
//! step strings, and the expected surface snapshot after replay. Step
//! grammar (one per string):
//!
//! ```text
//! type <text>            insert text at the caret, then fire input
//! backspace              delete one char at the caret, then fire input
//! click <index>          activate the removal affordance on child <index>
//! caret <node> <offset>  move the caret without firing input
//! ```

use serde::Deserialize;
use surface::{Caret, SnapshotOptions, SurfaceSnapshot};
use widget::{ReconcileStrategy, TagWidget};

#[derive(Debug, Deserialize)]
struct SessionFile {
    #[serde(default)]
    session: Vec<SessionFixture>,
}

/// One golden editing session.
#[derive(Debug, Deserialize)]
pub struct SessionFixture {
    pub name: String,
    #[serde(default)]
    pub initial: String,
    #[serde(default)]
    pub steps: Vec<String>,
    /// Expected snapshot lines (nodes + caret) after the last step.
    pub expect: Vec<String>,
    /// Expected completed tag texts after the last step.
    #[serde(default)]
    pub expect_tags: Vec<String>,
}

/// A parsed session step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    Type(String),
    Backspace,
    Click(usize),
    Caret { node: usize, offset: usize },
}

impl Step {
    /// Parse one step string; panics on malformed fixtures (test input).
    pub fn parse(raw: &str) -> Step {
        if let Some(text) = raw.strip_prefix("type ") {
            return Step::Type(text.to_string());
        }
        if raw == "backspace" {
            return Step::Backspace;
        }
        if let Some(index) = raw.strip_prefix("click ") {
            let index = index.trim().parse().expect("click index");
            return Step::Click(index);
        }
        if let Some(rest) = raw.strip_prefix("caret ") {
            let mut parts = rest.split_whitespace();
            let node = parts.next().and_then(|p| p.parse().ok()).expect("caret node");
            let offset = parts
                .next()
                .and_then(|p| p.parse().ok())
                .expect("caret offset");
            return Step::Caret { node, offset };
        }
        panic!("unknown session step: {raw:?}");
    }
}

/// Parse a fixture file's sessions.
pub fn load_sessions(toml_src: &str) -> Vec<SessionFixture> {
    let file: SessionFile = toml::from_str(toml_src).expect("session fixture TOML");
    file.session
}

/// Replay a session against a fresh widget and return it together with
/// the resulting snapshot lines.
pub fn run_session(
    fixture: &SessionFixture,
    strategy: ReconcileStrategy,
) -> (TagWidget, Vec<String>) {
    let mut w = TagWidget::with_strategy(strategy);
    w.activate(&fixture.initial);
    for raw in &fixture.steps {
        match Step::parse(raw) {
            Step::Type(text) => {
                w.surface_mut().insert_at_caret(&text);
                w.input();
            }
            Step::Backspace => {
                w.surface_mut().backspace_at_caret();
                w.input();
            }
            Step::Click(index) => {
                w.click(index);
            }
            Step::Caret { node, offset } => {
                w.surface_mut().set_caret(Caret::in_node(node, offset));
            }
        }
    }
    let snapshot = SurfaceSnapshot::new(w.surface(), SnapshotOptions::default());
    let lines = snapshot.as_lines().to_vec();
    (w, lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_grammar() {
        assert_eq!(Step::parse("type foo "), Step::Type("foo ".to_string()));
        assert_eq!(Step::parse("backspace"), Step::Backspace);
        assert_eq!(Step::parse("click 2"), Step::Click(2));
        assert_eq!(
            Step::parse("caret 0 3"),
            Step::Caret { node: 0, offset: 3 }
        );
    }

    #[test]
    fn loads_session_tables() {
        let src = r#"
            [[session]]
            name = "minimal"
            steps = ["type a"]
            expect = ["text \"a\"", "caret node=0 offset=1"]
        "#;
        let sessions = load_sessions(src);
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].name, "minimal");
        assert_eq!(sessions[0].initial, "");
        assert_eq!(sessions[0].steps, vec!["type a"]);
    }
}
