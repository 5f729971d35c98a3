// src/lib.rs

// === 1. Declare all the top-level modules ===
pub mod api;
pub mod chart;
pub mod config;
pub mod dashboard;
pub mod logging;
pub mod types;

// === 2. Re-export the public-facing components ===

// --- From `api` ---
pub use api::{ApiError, HttpStockApi, StockApi, Welcome};

// --- From `chart` ---
pub use chart::{ChartHandle, ChartSurface, HoverMode, LineChart, LineStyle, PlotSurface, Tooltip};

// --- From `config` ---
pub use config::DashboardConfig;

// --- From the controller ---
pub use dashboard::{Dashboard, Dispatch, ListView};

// --- From `types` ---
pub use types::{Company, StockPoint, StockSeries};
