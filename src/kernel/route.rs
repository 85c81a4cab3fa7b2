//! Static route table: path → view.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewId {
    Dashboard,
    NewProduct,
}

impl ViewId {
    pub fn title(self) -> &'static str {
        match self {
            ViewId::Dashboard => "Dashboard",
            ViewId::NewProduct => "New product",
        }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub view: ViewId,
}

pub const ROUTES: &[Route] = &[
    Route {
        path: "/",
        view: ViewId::Dashboard,
    },
    Route {
        path: "/new-product",
        view: ViewId::NewProduct,
    },
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no route matches '{path}'")]
pub struct ResolutionMiss {
    pub path: String,
}

/// Exact-match lookup over [`ROUTES`].
pub struct ViewRegistry {
    routes: &'static [Route],
    index: FxHashMap<&'static str, ViewId>,
}

impl ViewRegistry {
    fn new(routes: &'static [Route]) -> Self {
        let mut index = FxHashMap::default();
        for route in routes {
            let prev = index.insert(route.path, route.view);
            debug_assert!(prev.is_none(), "duplicate route path {}", route.path);
        }
        Self { routes, index }
    }

    pub fn global() -> &'static ViewRegistry {
        static REGISTRY: OnceLock<ViewRegistry> = OnceLock::new();
        REGISTRY.get_or_init(|| ViewRegistry::new(ROUTES))
    }

    pub fn resolve(&self, path: &str) -> Result<ViewId, ResolutionMiss> {
        self.index
            .get(path)
            .copied()
            .ok_or_else(|| ResolutionMiss {
                path: path.to_string(),
            })
    }

    pub fn routes(&self) -> &'static [Route] {
        self.routes
    }

    pub fn path_of(&self, view: ViewId) -> &'static str {
        self.routes
            .iter()
            .find(|route| route.view == view)
            .map(|route| route.path)
            .unwrap_or("/")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/route.rs"]
mod tests;
