// Single source of truth for all default values.

// --- API ---
pub const DEFAULT_API_URL: &str = crate::constants::RAMCO_API_URL;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_GZIP: bool = true;

// --- Paging ---
pub const DEFAULT_MAX_PAGES: usize = 1_000;

// --- Tracing ---
pub const DEFAULT_LOG_FILTER: &str = "ramco_core=info,ramco_client=info";
pub const LOG_ENV_VAR: &str = "RAMCO_LOG";

// --- Config files ---
pub const PROJECT_CONFIG_FILENAME: &str = "ramco.toml";
pub const USER_CONFIG_DIR: &str = ".ramco";
pub const USER_CONFIG_FILENAME: &str = "config.toml";
