// src/chart/plot_surface.rs

use super::line_chart::LineChart;
use super::surface::ChartSurface;
use eframe::egui;
use egui::Color32;
use egui_plot::{Corner, GridInput, GridMark, Legend, Line, Plot, PlotPoints};
use std::sync::Arc;

/// Identifies one chart instance created on a `PlotSurface`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartHandle(u64);

/// The egui side of the chart: owns the live chart and draws it with
/// `egui_plot`.
#[derive(Default)]
pub struct PlotSurface {
    live: Option<(ChartHandle, Arc<LineChart>)>,
    next_id: u64,
}

impl PlotSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&LineChart> {
        self.live.as_ref().map(|(_, chart)| chart.as_ref())
    }

    /// Draws the live chart, or nothing when there is none.
    pub fn show(&self, ui: &mut egui::Ui) {
        let Some((handle, chart)) = &self.live else {
            return;
        };

        let style = chart.style;
        let color = Color32::from_rgb(style.rgb[0], style.rgb[1], style.rgb[2]);

        let mut line = Line::new(PlotPoints::from(chart.points()))
            .color(color)
            .width(style.width)
            .name(&chart.dataset_label);
        if style.fill {
            if let Some(floor) = chart.min_value() {
                line = line.fill(floor as f32);
            }
        }

        let spacer_chart = Arc::clone(chart);
        let axis_chart = Arc::clone(chart);
        let hover_chart = Arc::clone(chart);

        // A fresh id per instance so egui forgets the old chart's zoom.
        Plot::new(("stock_chart", handle.0))
            .height(ui.available_height())
            .width(ui.available_width())
            .legend(Legend::default().position(Corner::LeftTop))
            .x_axis_label(chart.x_title.as_str())
            .y_axis_label(chart.y_title.as_str())
            .x_grid_spacer(move |input: GridInput| {
                let (lo, hi) = input.bounds;
                let ticks = spacer_chart.tick_indices(lo, hi);
                let step = match ticks.as_slice() {
                    [a, b, ..] => (b - a) as f64,
                    _ => 1.0,
                };
                ticks
                    .into_iter()
                    .map(|i| GridMark {
                        value: i as f64,
                        step_size: step,
                    })
                    .collect()
            })
            .x_axis_formatter(move |mark, _max_chars, _range| {
                axis_chart.label_at(mark.value).to_string()
            })
            .label_formatter(move |_name, value| hover_chart.tooltip_text(value.x, value.y))
            .show(ui, |plot_ui| {
                plot_ui.line(line);
            });
    }
}

impl ChartSurface for PlotSurface {
    type Handle = ChartHandle;

    fn create(&mut self, chart: LineChart) -> ChartHandle {
        if let Some((stale, _)) = &self.live {
            tracing::warn!(?stale, "creating a chart over one that was never disposed");
        }
        let handle = ChartHandle(self.next_id);
        self.next_id += 1;
        self.live = Some((handle, Arc::new(chart)));
        handle
    }

    fn dispose(&mut self, handle: ChartHandle) {
        if matches!(&self.live, Some((live, _)) if *live == handle) {
            self.live = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{StockPoint, StockSeries};

    fn chart() -> LineChart {
        LineChart::from_series(&StockSeries::new(vec![
            StockPoint::new("2024-01-02", 1.0),
            StockPoint::new("2024-01-03", 2.0),
        ]))
    }

    #[test]
    fn test_create_then_dispose_clears_surface() {
        let mut surface = PlotSurface::new();

        let handle = surface.create(chart());
        assert_eq!(surface.current().map(LineChart::len), Some(2));

        surface.dispose(handle);
        assert!(surface.current().is_none());
    }

    #[test]
    fn test_disposing_stale_handle_keeps_live_chart() {
        let mut surface = PlotSurface::new();
        let first = surface.create(chart());
        surface.dispose(first);
        let second = surface.create(chart());

        assert_ne!(first, second);
        surface.dispose(first);
        assert!(surface.current().is_some());
    }
}
