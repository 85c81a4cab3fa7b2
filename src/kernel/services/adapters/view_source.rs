//! View content backed by a JSON catalog file or the bundled sample catalog.

use std::path::PathBuf;

use crate::kernel::catalog::{Catalog, Product, Template, ViewContent};
use crate::kernel::route::ViewId;
use crate::kernel::services::ports::ViewSource;
use crate::kernel::view_state::ViewFault;

#[derive(Debug, Clone, Default)]
pub struct BundledViewSource {
    catalog_path: Option<PathBuf>,
}

impl BundledViewSource {
    pub fn new(catalog_path: Option<PathBuf>) -> Self {
        Self { catalog_path }
    }

    fn catalog(&self, view: ViewId) -> Result<Catalog, ViewFault> {
        let Some(path) = self.catalog_path.as_ref() else {
            return Ok(bundled_catalog());
        };

        let data = std::fs::read_to_string(path).map_err(|e| ViewFault::LoadFailure {
            view,
            message: format!("{}: {e}", path.display()),
        })?;
        serde_json::from_str(&data).map_err(|e| ViewFault::LoadFailure {
            view,
            message: format!("{}: {e}", path.display()),
        })
    }
}

impl ViewSource for BundledViewSource {
    fn load(&self, view: ViewId) -> Result<ViewContent, ViewFault> {
        let catalog = self.catalog(view)?;
        Ok(ViewContent::for_view(view, &catalog))
    }
}

fn product(name: &str, category: &str, price_cents: u64, sold: u32) -> Product {
    Product {
        name: name.to_string(),
        category: category.to_string(),
        price_cents,
        sold,
    }
}

fn template(name: &str, category: &str, description: &str) -> Template {
    Template {
        name: name.to_string(),
        category: category.to_string(),
        description: description.to_string(),
    }
}

pub fn bundled_catalog() -> Catalog {
    Catalog {
        products: vec![
            product("Classic Tee", "Apparel", 1_999, 42),
            product("Canvas Tote", "Bags", 2_499, 17),
            product("Ceramic Mug", "Home", 1_499, 63),
            product("Hoodie", "Apparel", 4_499, 11),
        ],
        templates: vec![
            template("T-shirt", "Apparel", "Front and back print"),
            template("Tote bag", "Bags", "Single side print"),
            template("Mug", "Home", "Wrap-around print"),
        ],
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/view_source.rs"]
mod tests;
