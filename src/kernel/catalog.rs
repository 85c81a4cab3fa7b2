//! Listing data carried by loaded views, plus the header search filter.

use serde::{Deserialize, Serialize};

use super::route::ViewId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub category: String,
    pub price_cents: u64,
    #[serde(default)]
    pub sold: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub templates: Vec<Template>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub product_count: usize,
    pub units_sold: u64,
    pub revenue_cents: u64,
}

impl DashboardStats {
    pub fn from_products(products: &[Product]) -> Self {
        products.iter().fold(
            DashboardStats {
                product_count: products.len(),
                ..Default::default()
            },
            |mut acc, product| {
                acc.units_sold += u64::from(product.sold);
                acc.revenue_cents = acc
                    .revenue_cents
                    .saturating_add(product.price_cents.saturating_mul(u64::from(product.sold)));
                acc
            },
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardContent {
    pub products: Vec<Product>,
    pub stats: DashboardStats,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProductContent {
    pub templates: Vec<Template>,
}

/// What a deferred load hands back for a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewContent {
    Dashboard(DashboardContent),
    NewProduct(NewProductContent),
}

impl ViewContent {
    pub fn for_view(view: ViewId, catalog: &Catalog) -> Self {
        match view {
            ViewId::Dashboard => ViewContent::Dashboard(DashboardContent {
                stats: DashboardStats::from_products(&catalog.products),
                products: catalog.products.clone(),
            }),
            ViewId::NewProduct => ViewContent::NewProduct(NewProductContent {
                templates: catalog.templates.clone(),
            }),
        }
    }

    pub fn view(&self) -> ViewId {
        match self {
            ViewContent::Dashboard(_) => ViewId::Dashboard,
            ViewContent::NewProduct(_) => ViewId::NewProduct,
        }
    }
}

/// Case-insensitive substring match over `fields`. A blank query matches everything.
pub fn matches_query(query: &str, fields: &[&str]) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

pub fn filter_products<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| matches_query(query, &[&p.name, &p.category]))
        .collect()
}

pub fn filter_templates<'a>(templates: &'a [Template], query: &str) -> Vec<&'a Template> {
    templates
        .iter()
        .filter(|t| matches_query(query, &[&t.name, &t.category]))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/catalog.rs"]
mod tests;
