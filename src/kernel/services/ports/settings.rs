use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

pub const MIN_LOAD_TIMEOUT_MS: u64 = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_load_timeout_ms")]
    pub load_timeout_ms: u64,
    #[serde(default = "default_initial_path")]
    pub initial_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
    #[serde(default = "default_sidebar_visible")]
    pub sidebar_visible: bool,
}

fn default_load_timeout_ms() -> u64 {
    5_000
}

fn default_initial_path() -> String {
    "/".to_string()
}

fn default_sidebar_visible() -> bool {
    true
}

impl Settings {
    pub fn load_timeout(&self) -> Duration {
        Duration::from_millis(self.load_timeout_ms.max(MIN_LOAD_TIMEOUT_MS))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            load_timeout_ms: default_load_timeout_ms(),
            initial_path: default_initial_path(),
            catalog_path: None,
            sidebar_visible: default_sidebar_visible(),
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/settings.rs"]
mod tests;
