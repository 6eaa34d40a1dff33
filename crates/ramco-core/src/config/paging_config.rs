//! StreamToken pagination limits.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Bounds for following StreamTokens.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct PagingConfig {
    /// Maximum pages collected for one logical query. Default: 1000.
    pub max_pages: Option<usize>,
}

impl PagingConfig {
    /// Returns the effective page cap.
    pub fn effective_max_pages(&self) -> usize {
        self.max_pages.unwrap_or(defaults::DEFAULT_MAX_PAGES)
    }
}
