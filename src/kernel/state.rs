use std::sync::Arc;

use super::containment::FaultSink;
use super::location::Location;
use super::router::Router;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusTarget {
    #[default]
    Content,
    Search,
}

#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub query: String,
}

impl SearchState {
    pub fn append(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        self.query.push(ch);
        true
    }

    pub fn backspace(&mut self) -> bool {
        self.query.pop().is_some()
    }

    pub fn clear(&mut self) -> bool {
        if self.query.is_empty() {
            return false;
        }
        self.query.clear();
        true
    }
}

#[derive(Debug, Clone)]
pub struct UiState {
    pub sidebar_visible: bool,
    pub focus: FocusTarget,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            sidebar_visible: true,
            focus: FocusTarget::Content,
        }
    }
}

pub struct AppState {
    pub router: Router,
    pub search: SearchState,
    pub ui: UiState,
}

impl AppState {
    pub fn new(initial: Location, sink: Arc<dyn FaultSink>) -> Self {
        Self {
            router: Router::new(initial, sink),
            search: SearchState::default(),
            ui: UiState::default(),
        }
    }
}
