//! Configuration model loaded from external sources.

use std::time::Duration;

use serde::Deserialize;

use crate::list::query::PageSizes;

fn default_page_sizes() -> Vec<usize> {
    vec![10, 20, 30, 40, 50]
}

fn default_per_page() -> usize {
    10
}

fn default_search_debounce_ms() -> u64 {
    300
}

fn default_backend_timeout_secs() -> u64 {
    10
}

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub domain: String,
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    pub secret: String,
    pub auth_service_url: String,
    pub backend_url: String,
    #[serde(default)]
    pub backend_api_key: Option<String>,
    #[serde(default = "default_backend_timeout_secs")]
    pub backend_timeout_secs: u64,
    #[serde(default = "default_page_sizes")]
    pub page_sizes: Vec<usize>,
    #[serde(default = "default_per_page")]
    pub default_per_page: usize,
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,
}

impl ServerConfig {
    pub fn backend_timeout(&self) -> Duration {
        Duration::from_secs(self.backend_timeout_secs.max(1))
    }

    pub fn list_settings(&self) -> ListSettings {
        ListSettings {
            page_sizes: PageSizes::new(self.page_sizes.iter().copied(), self.default_per_page),
            debounce: Duration::from_millis(self.search_debounce_ms),
        }
    }
}

/// List page behaviour shared by every resource.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListSettings {
    pub page_sizes: PageSizes,
    pub debounce: Duration,
}

impl Default for ListSettings {
    fn default() -> Self {
        Self {
            page_sizes: PageSizes::default(),
            debounce: Duration::from_millis(default_search_debounce_ms()),
        }
    }
}
