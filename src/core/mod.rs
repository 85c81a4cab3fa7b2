//! Terminal-facing framework pieces: input events and the `View` trait.

pub mod event;
pub mod view;

pub use event::{InputEvent, Key};
pub use view::{EventResult, View};
