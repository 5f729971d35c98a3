// src/chart/mod.rs

pub mod line_chart;
pub mod plot_surface;
pub mod surface;

pub use line_chart::{HoverMode, LineChart, LineStyle, Tooltip};
pub use plot_surface::{ChartHandle, PlotSurface};
pub use surface::ChartSurface;
