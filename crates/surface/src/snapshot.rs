//! Deterministic surface serialization for test comparisons.
//!
//! Not a public stable format. One line per node, plus an optional caret
//! line, so integration tests can diff editing sessions line by line.

use crate::caret::Caret;
use crate::doc::Surface;
use crate::node::Node;
use std::fmt::{self, Write};

#[derive(Clone, Copy, Debug)]
pub struct SnapshotOptions {
    /// Append a `caret ...` line after the node lines.
    pub include_caret: bool,
}

impl Default for SnapshotOptions {
    fn default() -> Self {
        Self {
            include_caret: true,
        }
    }
}

#[derive(Debug)]
pub struct SurfaceSnapshot {
    lines: Vec<String>,
}

impl SurfaceSnapshot {
    pub fn new(surface: &Surface, options: SnapshotOptions) -> Self {
        let mut lines = Vec::with_capacity(surface.len() + 1);
        for node in surface.children() {
            lines.push(match node {
                Node::Chip { text } => format!("chip \"{}\"", escape_text(text)),
                Node::Separator => "sep".to_string(),
                Node::Text { text } => format!("text \"{}\"", escape_text(text)),
            });
        }
        if options.include_caret {
            lines.push(match surface.caret() {
                Caret {
                    node: Some(n),
                    offset,
                } => format!("caret node={n} offset={offset}"),
                Caret { node: None, offset } => format!("caret root slot={offset}"),
            });
        }
        Self { lines }
    }

    pub fn as_lines(&self) -> &[String] {
        &self.lines
    }

    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}

impl fmt::Display for SurfaceSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i != 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\u{a0}' => out.push_str("\\u{A0}"),
            ch if ch < ' ' => {
                let _ = write!(&mut out, "\\u{{{:02X}}}", ch as u32);
            }
            _ => out.push(ch),
        }
    }
    out
}
