//! Service ports: traits + data contracts.

pub mod settings;
pub mod view_source;

pub use settings::Settings;
pub use view_source::ViewSource;
