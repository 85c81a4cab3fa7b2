//! TUI integration layer (crossterm + ratatui).
//!
//! Kept apart from `kernel` so the router and loader carry no terminal dependencies.

pub mod terminal_guard;
