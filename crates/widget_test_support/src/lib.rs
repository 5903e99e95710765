//! Shared helpers for widget integration tests: TOML session fixtures,
//! session replay, and line-based snapshot diffing.

mod diff;
mod fixture;

pub use diff::{assert_lines_eq, diff_lines};
pub use fixture::{SessionFixture, Step, load_sessions, run_session};
