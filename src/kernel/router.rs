//! Router: owns the location and the single mounted view.

use std::sync::Arc;

use super::catalog::ViewContent;
use super::containment::{ErrorBoundary, FaultContext, FaultSink};
use super::intent::NavigationIntent;
use super::loader::{DeferredViewLoader, LoadTicket};
use super::location::{History, Location};
use super::route::{ResolutionMiss, ViewId, ViewRegistry};
use super::view_state::{ViewFault, ViewState};

#[derive(Debug)]
pub enum MountKind {
    Routed {
        view: ViewId,
        boundary: ErrorBoundary,
    },
    NotFound(ResolutionMiss),
}

#[derive(Debug)]
pub struct Mount {
    pub location: Location,
    pub generation: u64,
    pub kind: MountKind,
}

impl Mount {
    pub fn view(&self) -> Option<ViewId> {
        match &self.kind {
            MountKind::Routed { view, .. } => Some(*view),
            MountKind::NotFound(_) => None,
        }
    }

    pub fn state(&self) -> Option<&ViewState> {
        match &self.kind {
            MountKind::Routed { boundary, .. } => Some(boundary.state()),
            MountKind::NotFound(_) => None,
        }
    }
}

/// Result of a location change. `load` is set when a deferred load must start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub load: Option<LoadTicket>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    /// A newer navigation superseded this load.
    Stale,
    /// The boundary had already failed.
    Ignored,
}

pub struct Router {
    registry: &'static ViewRegistry,
    location: Location,
    history: History,
    loader: DeferredViewLoader,
    mount: Option<Mount>,
    sink: Arc<dyn FaultSink>,
}

impl Router {
    pub fn new(initial: Location, sink: Arc<dyn FaultSink>) -> Self {
        Self {
            registry: ViewRegistry::global(),
            location: initial,
            history: History::default(),
            loader: DeferredViewLoader::new(),
            mount: None,
            sink,
        }
    }

    /// Mounts the initial location. Call once after construction.
    pub fn start(&mut self) -> Transition {
        self.mount_current()
    }

    pub fn navigate(&mut self, intent: NavigationIntent) -> Transition {
        let target = Location::new(&intent.target_path);
        let previous = std::mem::replace(&mut self.location, target);
        self.history.push(previous);
        self.mount_current()
    }

    pub fn back(&mut self) -> Option<Transition> {
        let target = self.history.back(&self.location)?;
        self.location = target;
        Some(self.mount_current())
    }

    pub fn forward(&mut self) -> Option<Transition> {
        let target = self.history.forward(&self.location)?;
        self.location = target;
        Some(self.mount_current())
    }

    pub fn reload(&mut self) -> Transition {
        self.mount_current()
    }

    pub fn apply_load(
        &mut self,
        generation: u64,
        result: Result<ViewContent, ViewFault>,
    ) -> LoadOutcome {
        if self.loader.settle(generation).is_none() {
            tracing::debug!(
                generation,
                current = self.loader.generation(),
                "discarding stale view load"
            );
            return LoadOutcome::Stale;
        }

        let context = self.fault_context(generation);
        let Some(Mount {
            kind: MountKind::Routed { view, boundary },
            ..
        }) = self.mount.as_mut()
        else {
            return LoadOutcome::Stale;
        };

        let applied = match result {
            Ok(content) => {
                let accepted = boundary.resolve(content);
                if accepted {
                    tracing::debug!(view = %view, generation, "view ready");
                }
                accepted
            }
            Err(fault) => boundary.trip(fault, &context, self.sink.as_ref()),
        };

        if applied {
            LoadOutcome::Applied
        } else {
            LoadOutcome::Ignored
        }
    }

    /// Trips the boundary of the current mount. Faults for older mounts are dropped.
    pub fn report_fault(&mut self, generation: u64, fault: ViewFault) -> bool {
        let context = self.fault_context(generation);
        match self.mount.as_mut() {
            Some(Mount {
                generation: mounted,
                kind: MountKind::Routed { boundary, .. },
                ..
            }) if *mounted == generation => {
                self.loader.settle(generation);
                boundary.trip(fault, &context, self.sink.as_ref())
            }
            _ => false,
        }
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn mount(&self) -> Option<&Mount> {
        self.mount.as_ref()
    }

    pub fn mounted_view(&self) -> Option<ViewId> {
        self.mount.as_ref().and_then(Mount::view)
    }

    pub fn view_state(&self) -> Option<&ViewState> {
        self.mount.as_ref().and_then(Mount::state)
    }

    pub fn generation(&self) -> u64 {
        self.loader.generation()
    }

    pub fn in_flight(&self) -> Option<LoadTicket> {
        self.loader.in_flight()
    }

    pub fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.history.can_go_forward()
    }

    fn mount_current(&mut self) -> Transition {
        if let Some(old) = self.mount.take() {
            tracing::debug!(
                location = %old.location,
                generation = old.generation,
                "unmount view"
            );
        }

        let location = self.location.clone();
        match self.registry.resolve(location.path()) {
            Ok(view) => {
                let ticket = self.loader.begin(view);
                tracing::info!(
                    location = %location,
                    view = %view,
                    generation = ticket.generation,
                    "navigate"
                );
                self.mount = Some(Mount {
                    location,
                    generation: ticket.generation,
                    kind: MountKind::Routed {
                        view,
                        boundary: ErrorBoundary::new(),
                    },
                });
                Transition { load: Some(ticket) }
            }
            Err(miss) => {
                let generation = self.loader.supersede();
                tracing::warn!(location = %location, generation, "no route for location");
                self.mount = Some(Mount {
                    location,
                    generation,
                    kind: MountKind::NotFound(miss),
                });
                Transition { load: None }
            }
        }
    }

    fn fault_context(&self, generation: u64) -> FaultContext {
        FaultContext {
            location: self.location.path().to_string(),
            generation,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/router.rs"]
mod tests;
