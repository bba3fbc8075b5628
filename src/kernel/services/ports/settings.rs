use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::search::Backend;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/manager/search/";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub backend: Backend,
    #[serde(default)]
    pub elements: ElementIds,
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
    /// Let a response from an older request replace the view of a newer one.
    #[serde(default)]
    pub apply_stale_responses: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,
}

/// Ids of the host elements the controller binds to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementIds {
    #[serde(default = "default_input_id")]
    pub input: String,
    #[serde(default = "default_results_id")]
    pub results: String,
    #[serde(default = "default_results_list_id")]
    pub results_list: String,
    #[serde(default = "default_pagination_id")]
    pub pagination: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_request_timeout_ms() -> u64 {
    10_000
}

fn default_input_id() -> String {
    "search-input".to_string()
}

fn default_results_id() -> String {
    "search-results".to_string()
}

fn default_results_list_id() -> String {
    "search-results-list".to_string()
}

fn default_pagination_id() -> String {
    "search-pagination".to_string()
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            input: default_input_id(),
            results: default_results_id(),
            results_list: default_results_list_id(),
            pagination: default_pagination_id(),
        }
    }
}

impl ElementIds {
    pub fn all(&self) -> [&str; 4] {
        [
            self.input.as_str(),
            self.results.as_str(),
            self.results_list.as_str(),
            self.pagination.as_str(),
        ]
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            backend: Backend::default(),
            elements: ElementIds::default(),
            request_timeout_ms: default_request_timeout_ms(),
            apply_stale_responses: false,
            log_dir: None,
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/settings.rs"]
mod tests;
