// src/config.rs

//! A centralized place for the dashboard's endpoints, labels and chart look.

use std::env;
use std::time::Duration;

// --- Backend ---
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const API_BASE_ENV: &str = "DASHBOARD_API_BASE";
pub const TIMEOUT_ENV: &str = "DASHBOARD_TIMEOUT_SECS";

// --- Chart ---
pub const MAX_X_TICKS: usize = 10;
pub const DATASET_LABEL: &str = "Closing Price (USD)";
pub const X_AXIS_TITLE: &str = "Date";
pub const Y_AXIS_TITLE: &str = "Price (USD)";
// #2ecc71
pub const LINE_RGB: [u8; 3] = [46, 204, 113];
pub const LINE_WIDTH: f32 = 2.0;

// --- Messages ---
pub const COMPANIES_ERROR_TEXT: &str =
    "Error loading companies. Please ensure the backend is running.";

/// Runtime settings for talking to the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub api_base: String,
    pub timeout: Duration,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl DashboardConfig {
    /// Reads overrides from the process environment (and `.env`, if present).
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup. Blank or unparsable values fall
    /// back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(base) = lookup(API_BASE_ENV) {
            let base = base.trim().trim_end_matches('/');
            if !base.is_empty() {
                cfg.api_base = base.to_string();
            }
        }

        if let Some(raw) = lookup(TIMEOUT_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => cfg.timeout = Duration::from_secs(secs),
                _ => tracing::warn!("ignoring invalid {}={:?}", TIMEOUT_ENV, raw),
            }
        }

        cfg
    }
}
