//! Configuration system for the RAMCO client.
//! TOML-based, layered resolution: overrides > env > project > user > defaults.

pub mod api_config;
pub mod defaults;
pub mod paging_config;
pub mod ramco_config;

pub use api_config::ApiConfig;
pub use paging_config::PagingConfig;
pub use ramco_config::{ConfigOverrides, RamcoConfig};
