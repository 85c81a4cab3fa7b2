use super::router::{LoadOutcome, Transition};
use super::state::FocusTarget;
use super::{Action, AppState, Effect};

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn unchanged() -> Self {
        Self {
            effects: Vec::new(),
            state_changed: false,
        }
    }

    fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
        }
    }

    fn from_transition(transition: Transition) -> Self {
        let effect = match transition.load {
            Some(ticket) => Effect::LoadView(ticket),
            None => Effect::CancelLoad,
        };
        Self {
            effects: vec![effect],
            state_changed: true,
        }
    }
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Mounts the initial location.
    pub fn start(&mut self) -> DispatchResult {
        DispatchResult::from_transition(self.state.router.start())
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::Navigate(intent) => {
                DispatchResult::from_transition(self.state.router.navigate(intent))
            }
            Action::HistoryBack => self
                .state
                .router
                .back()
                .map(DispatchResult::from_transition)
                .unwrap_or_else(DispatchResult::unchanged),
            Action::HistoryForward => self
                .state
                .router
                .forward()
                .map(DispatchResult::from_transition)
                .unwrap_or_else(DispatchResult::unchanged),
            Action::Reload => DispatchResult::from_transition(self.state.router.reload()),
            Action::ViewLoaded { generation, result } => {
                let outcome = self.state.router.apply_load(generation, result);
                DispatchResult::changed(outcome == LoadOutcome::Applied)
            }
            Action::ViewFaulted { generation, fault } => {
                DispatchResult::changed(self.state.router.report_fault(generation, fault))
            }
            Action::SearchFocus => {
                let prev = self.state.ui.focus;
                self.state.ui.focus = FocusTarget::Search;
                DispatchResult::changed(prev != FocusTarget::Search)
            }
            Action::SearchBlur => {
                let prev = self.state.ui.focus;
                self.state.ui.focus = FocusTarget::Content;
                DispatchResult::changed(prev != FocusTarget::Content)
            }
            Action::SearchAppend(ch) => DispatchResult::changed(self.state.search.append(ch)),
            Action::SearchBackspace => DispatchResult::changed(self.state.search.backspace()),
            Action::SearchClear => DispatchResult::changed(self.state.search.clear()),
            Action::ToggleSidebar => {
                self.state.ui.sidebar_visible = !self.state.ui.sidebar_visible;
                DispatchResult::changed(true)
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
