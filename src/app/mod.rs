//! Application layer: the dashboard shell.

pub mod shell;

pub use shell::Shell;
