//! Dashboard shell: header, sidebar and the routed content area.

use crate::core::event::InputEvent;
use crate::core::view::{EventResult, View};
use crate::kernel::services::adapters::{AppMessage, AsyncRuntime, LoadTask};
use crate::kernel::services::ports::Settings;
use crate::kernel::{
    Action as KernelAction, Affordance, AppState, Effect, FaultSink, FocusTarget, Location,
    Store, ViewId, ViewState,
};
use ratatui::layout::Rect;
use ratatui::Frame;
use std::sync::Arc;

mod input;
mod render;

const HEADER_HEIGHT: u16 = 1;
const STATUS_HEIGHT: u16 = 1;
const SIDEBAR_WIDTH: u16 = 18;

pub struct Shell {
    store: Store,
    runtime: AsyncRuntime,
    load_task: Option<LoadTask>,
    hit_regions: Vec<(Rect, Affordance)>,
    last_search_area: Option<Rect>,
}

impl Shell {
    pub fn new(
        settings: &Settings,
        initial: Location,
        runtime: AsyncRuntime,
        sink: Arc<dyn FaultSink>,
    ) -> Self {
        let mut state = AppState::new(initial, sink);
        state.ui.sidebar_visible = settings.sidebar_visible;

        let mut shell = Self {
            store: Store::new(state),
            runtime,
            load_task: None,
            hit_regions: Vec::new(),
            last_search_area: None,
        };
        let result = shell.store.start();
        shell.run_effects(result.effects);
        shell
    }

    pub fn dispatch_kernel(&mut self, action: KernelAction) -> bool {
        let result = self.store.dispatch(action);
        self.run_effects(result.effects);
        result.state_changed
    }

    pub fn handle_message(&mut self, msg: AppMessage) -> bool {
        match msg {
            AppMessage::ViewLoaded {
                generation,
                view,
                result,
            } => {
                if let Err(fault) = &result {
                    tracing::warn!(view = %view, generation, error = %fault, "view load failed");
                }
                if self
                    .load_task
                    .as_ref()
                    .is_some_and(|task| task.ticket().generation == generation)
                {
                    self.load_task = None;
                }
                self.dispatch_kernel(KernelAction::ViewLoaded { generation, result })
            }
        }
    }

    fn run_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::LoadView(ticket) => {
                    self.cancel_load();
                    self.load_task = Some(self.runtime.load_view(ticket));
                }
                Effect::CancelLoad => self.cancel_load(),
            }
        }
    }

    fn cancel_load(&mut self) {
        if let Some(task) = self.load_task.take() {
            if !task.is_finished() {
                tracing::debug!(
                    generation = task.ticket().generation,
                    "cancel superseded view load"
                );
                task.cancel();
            }
        }
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn location(&self) -> &str {
        self.store.state().router.location().path()
    }

    pub fn mounted_view(&self) -> Option<ViewId> {
        self.store.state().router.mounted_view()
    }

    pub fn view_state(&self) -> Option<&ViewState> {
        self.store.state().router.view_state()
    }

    pub fn focus(&self) -> FocusTarget {
        self.store.state().ui.focus
    }

    pub fn sidebar_visible(&self) -> bool {
        self.store.state().ui.sidebar_visible
    }

    pub fn query(&self) -> &str {
        &self.store.state().search.query
    }

    /// Screen rectangle of `affordance` from the last frame.
    pub fn hit_region(&self, affordance: Affordance) -> Option<Rect> {
        self.hit_regions
            .iter()
            .find(|(_, a)| *a == affordance)
            .map(|(rect, _)| *rect)
    }
}

impl View for Shell {
    fn handle_input(&mut self, event: &InputEvent) -> EventResult {
        input::handle_input(self, event)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        render::render(self, frame, area);
    }

    fn cursor_position(&self) -> Option<(u16, u16)> {
        render::cursor_position(self)
    }
}
