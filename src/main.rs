//! Interactive driver for the tag widget.
//!
//! Reads editing commands from stdin and prints the surface after each
//! one, so a session can be replayed by piping a script in:
//!
//! ```text
//! type foo
//! type ,bar
//! click 0
//! submit
//! ```

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, bail};
use mimalloc::MiMalloc;
use surface::{Caret, SnapshotOptions, SurfaceSnapshot};
use widget::TagWidget;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn print_surface(widget: &TagWidget) {
    let snapshot = SurfaceSnapshot::new(widget.surface(), SnapshotOptions::default());
    for line in snapshot.as_lines() {
        println!("  {line}");
    }
}

fn apply_command(widget: &mut TagWidget, line: &str) -> Result<bool> {
    let line = line.trim_start();
    let mut parts = line.split_whitespace();
    let Some(command) = parts.next() else {
        return Ok(true);
    };
    match command {
        "type" => {
            // Everything after the command word, including leading spaces.
            let text = line[command.len()..].strip_prefix(' ').unwrap_or("");
            widget.surface_mut().insert_at_caret(text);
            widget.input();
        }
        "backspace" => {
            widget.surface_mut().backspace_at_caret();
            widget.input();
        }
        "click" => {
            let index: usize = parts
                .next()
                .context("usage: click <node-index>")?
                .parse()
                .context("click index must be a number")?;
            if !widget.click(index) {
                println!("  (node {index} is not a chip)");
            }
        }
        "caret" => {
            let node: usize = parts
                .next()
                .context("usage: caret <node-index> <byte-offset>")?
                .parse()
                .context("caret node must be a number")?;
            let offset: usize = parts
                .next()
                .context("usage: caret <node-index> <byte-offset>")?
                .parse()
                .context("caret offset must be a number")?;
            widget.surface_mut().set_caret(Caret::in_node(node, offset));
        }
        "show" => {}
        "submit" => {
            let mut field = String::new();
            widget.flush(&mut field);
            println!("  tags: {:?}", tokens::parse_submitted(&field));
        }
        "quit" => return Ok(false),
        other => bail!("unknown command {other:?} (type/backspace/click/caret/show/submit/quit)"),
    }
    print_surface(widget);
    Ok(true)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut widget = TagWidget::new();
    let initial = std::env::args().nth(1).unwrap_or_default();
    widget.activate(&initial);
    print_surface(&widget);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        match apply_command(&mut widget, &line) {
            Ok(true) => {}
            Ok(false) => break,
            Err(err) => println!("  error: {err:#}"),
        }
        stdout.flush().ok();
    }
    Ok(())
}
