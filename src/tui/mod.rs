//! Terminal host (crossterm + ratatui).
//!
//! Kept apart from `ui` so the widgets can be driven by any `InputBackend`
//! and drawn on any `Surface` without pulling in terminal crates.

pub mod crossterm;
pub mod terminal_guard;
