//! Headless application core (state/action/effect).

pub mod action;
pub mod catalog;
pub mod containment;
pub mod effect;
pub mod intent;
pub mod loader;
pub mod location;
pub mod route;
pub mod router;
pub mod services;
pub mod state;
pub mod store;
pub mod view_state;

pub use action::Action;
pub use catalog::{Catalog, DashboardContent, NewProductContent, Product, Template, ViewContent};
pub use containment::{ErrorBoundary, FaultContext, FaultSink, TracingFaultSink};
pub use effect::Effect;
pub use intent::{Affordance, NavigationIntent};
pub use loader::{DeferredViewLoader, LoadTicket};
pub use location::{History, Location};
pub use route::{ResolutionMiss, Route, ViewId, ViewRegistry, ROUTES};
pub use router::{LoadOutcome, Mount, MountKind, Router, Transition};
pub use state::{AppState, FocusTarget, SearchState, UiState};
pub use store::{DispatchResult, Store};
pub use view_state::{ViewFault, ViewState};
