//! unimart - terminal dashboard for the UniMart product designer.
//!
//! Modules:
//! - kernel: headless core (routes, router, deferred loading, error containment, store)
//! - core: input events and the `View` trait
//! - views: page renderers (dashboard, new product, not found, placeholders)
//! - app: the shell that ties the store, runtime and views together
//! - tui: terminal lifecycle

pub mod kernel;

#[cfg(feature = "tui")]
pub mod app;
#[cfg(feature = "tui")]
pub mod core;
#[cfg(feature = "tui")]
pub mod tui;
#[cfg(feature = "tui")]
pub mod views;
