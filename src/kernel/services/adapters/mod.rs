//! Service adapters: OS/runtime specific implementations (IO/async).

pub mod paths;
pub mod runtime;
pub mod settings;
pub mod view_source;

pub use paths::{ensure_log_dir, get_log_dir};
pub use runtime::{AppMessage, AsyncRuntime, LoadTask};
pub use settings::{ensure_settings_file, get_settings_path, load_settings, read_settings};
pub use view_source::{bundled_catalog, BundledViewSource};
