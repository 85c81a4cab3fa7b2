//! Error containment for a mounted view.
//!
//! An [`ErrorBoundary`] owns the [`ViewState`] of one mount. The first fault
//! trips it and it stays tripped; only a new mount brings the view back.

use std::panic::{catch_unwind, AssertUnwindSafe};

use super::catalog::ViewContent;
use super::view_state::{ViewFault, ViewState};

pub const FALLBACK_MESSAGE: &str = "Something went wrong while showing this page.";
pub const FALLBACK_HINT: &str = "Press r to try again, or pick another page.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaultContext {
    pub location: String,
    pub generation: u64,
}

/// Receives contained faults for diagnostics.
pub trait FaultSink: Send + Sync {
    fn report(&self, fault: &ViewFault, context: &FaultContext);
}

#[derive(Debug, Default)]
pub struct TracingFaultSink;

impl FaultSink for TracingFaultSink {
    fn report(&self, fault: &ViewFault, context: &FaultContext) {
        tracing::error!(
            kind = fault.kind(),
            view = %fault.view(),
            location = %context.location,
            generation = context.generation,
            error = %fault,
            "view fault contained"
        );
    }
}

#[derive(Debug)]
pub struct ErrorBoundary {
    state: ViewState,
}

impl ErrorBoundary {
    pub fn new() -> Self {
        Self {
            state: ViewState::Loading,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn is_tripped(&self) -> bool {
        self.state.is_failed()
    }

    /// `Loading → Ready`. Returns false once tripped or already ready.
    pub fn resolve(&mut self, content: ViewContent) -> bool {
        if !self.state.is_loading() {
            return false;
        }
        self.state = ViewState::Ready(content);
        true
    }

    /// Moves to `Failed` and reports the fault. Later faults are dropped.
    pub fn trip(&mut self, fault: ViewFault, context: &FaultContext, sink: &dyn FaultSink) -> bool {
        if self.is_tripped() {
            return false;
        }

        if catch_unwind(AssertUnwindSafe(|| sink.report(&fault, context))).is_err() {
            tracing::warn!(location = %context.location, "fault sink panicked");
        }
        self.state = ViewState::Failed(fault);
        true
    }

    pub fn fallback_message(&self) -> Option<&'static str> {
        self.is_tripped().then_some(FALLBACK_MESSAGE)
    }
}

impl Default for ErrorBoundary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/containment.rs"]
mod tests;
