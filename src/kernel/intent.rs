//! Navigation intents issued by clickable UI elements.
//!
//! Targets are literal paths; nothing here checks them against the route table.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationIntent {
    pub target_path: String,
}

impl NavigationIntent {
    pub fn to(path: impl Into<String>) -> Self {
        Self {
            target_path: path.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Affordance {
    SidebarDashboard,
    SidebarNewProduct,
    SidebarTemplates,
    SidebarOrders,
    SidebarSettings,
    CreateProduct,
    Profile,
}

impl Affordance {
    pub const SIDEBAR: [Affordance; 5] = [
        Affordance::SidebarDashboard,
        Affordance::SidebarNewProduct,
        Affordance::SidebarTemplates,
        Affordance::SidebarOrders,
        Affordance::SidebarSettings,
    ];

    pub fn target_path(self) -> &'static str {
        match self {
            Affordance::SidebarDashboard => "/",
            Affordance::SidebarNewProduct | Affordance::CreateProduct => "/new-product",
            Affordance::SidebarTemplates => "/templates",
            Affordance::SidebarOrders => "/orders",
            Affordance::SidebarSettings => "/settings",
            Affordance::Profile => "/profile",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Affordance::SidebarDashboard => "Dashboard",
            Affordance::SidebarNewProduct => "New product",
            Affordance::SidebarTemplates => "Templates",
            Affordance::SidebarOrders => "Orders",
            Affordance::SidebarSettings => "Settings",
            Affordance::CreateProduct => "+ Create product",
            Affordance::Profile => "Profile",
        }
    }

    pub fn intent(self) -> NavigationIntent {
        NavigationIntent::to(self.target_path())
    }
}
