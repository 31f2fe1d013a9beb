// src/config/consts.rs
use std::time::Duration;

// Net config
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8080/providers.json";
pub const ENV_ENDPOINT: &str = "PROVIDERS_URL";
pub const ENV_TIMEOUT_SECS: &str = "PROVIDERS_TIMEOUT_SECS";
pub const USER_AGENT: &str = concat!("provider_dir/", env!("CARGO_PKG_VERSION"));

// Normalization defaults
pub const COMPANY_PLACEHOLDER: &str = "Unnamed Provider";
pub const OTHER_CATEGORY: &str = "Other";
pub const DEFAULT_RATING: u8 = 3;
pub const MIN_RATING: i64 = 1;
pub const MAX_RATING: i64 = 5;

// Scheduling
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(10 * 60);
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

// Logging
pub const LOG_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Window
pub const WINDOW_W: f32 = 1100.0;
pub const WINDOW_H: f32 = 700.0;
