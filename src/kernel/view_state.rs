use super::catalog::ViewContent;
use super::route::ViewId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViewFault {
    #[error("failed to load {view}: {message}")]
    LoadFailure { view: ViewId, message: String },

    #[error("loading {view} timed out after {after_ms}ms")]
    TimedOut { view: ViewId, after_ms: u64 },

    #[error("failed to render {view}: {message}")]
    RenderFault { view: ViewId, message: String },
}

impl ViewFault {
    pub fn view(&self) -> ViewId {
        match self {
            ViewFault::LoadFailure { view, .. }
            | ViewFault::TimedOut { view, .. }
            | ViewFault::RenderFault { view, .. } => *view,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ViewFault::LoadFailure { .. } => "load_failure",
            ViewFault::TimedOut { .. } => "timed_out",
            ViewFault::RenderFault { .. } => "render_fault",
        }
    }
}

/// Lifecycle of one mounted view. `Failed` is terminal for that mount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    Ready(ViewContent),
    Failed(ViewFault),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ViewState::Ready(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ViewState::Failed(_))
    }

    pub fn content(&self) -> Option<&ViewContent> {
        match self {
            ViewState::Ready(content) => Some(content),
            _ => None,
        }
    }
}
