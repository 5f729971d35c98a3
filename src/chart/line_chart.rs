// src/chart/line_chart.rs

//! Backend-agnostic description of the closing-price chart.

use crate::config;
use crate::types::StockSeries;

/// How hover picks the point(s) shown in the tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverMode {
    /// Every dataset's value at the hovered x index.
    Index,
    /// Only the point under the cursor.
    Nearest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tooltip {
    pub mode: HoverMode,
    /// When false the cursor only needs to share the x index with a point.
    pub intersect: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub rgb: [u8; 3],
    pub width: f32,
    pub fill: bool,
    pub show_points: bool,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            rgb: config::LINE_RGB,
            width: config::LINE_WIDTH,
            fill: true,
            show_points: false,
        }
    }
}

/// A single-dataset line chart over a category x axis (one slot per date).
#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub dataset_label: String,
    pub x_title: String,
    pub y_title: String,
    pub max_ticks: usize,
    pub tooltip: Tooltip,
    pub style: LineStyle,
}

impl LineChart {
    /// Takes `(date, close)` pairs in the order the backend returned them.
    pub fn from_series(series: &StockSeries) -> Self {
        let (labels, values): (Vec<String>, Vec<f64>) = series
            .data
            .iter()
            .map(|p| (p.date.clone(), p.close))
            .unzip();

        Self {
            labels,
            values,
            dataset_label: config::DATASET_LABEL.to_string(),
            x_title: config::X_AXIS_TITLE.to_string(),
            y_title: config::Y_AXIS_TITLE.to_string(),
            max_ticks: config::MAX_X_TICKS,
            tooltip: Tooltip {
                mode: HoverMode::Index,
                intersect: false,
            },
            style: LineStyle::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Plot coordinates: x is the point's position in the series.
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.values
            .iter()
            .enumerate()
            .map(|(i, &y)| [i as f64, y])
            .collect()
    }

    /// Lowest close, used as the floor of the filled area.
    pub fn min_value(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::min)
    }

    /// Indices that get an x label when `[lo, hi]` is on screen.
    ///
    /// Labels are auto-skipped with a fixed stride so no more than
    /// `max_ticks` show. Indices are multiples of the stride, which keeps
    /// them from jumping around while panning.
    pub fn tick_indices(&self, lo: f64, hi: f64) -> Vec<usize> {
        if self.is_empty() || self.max_ticks == 0 || hi < lo {
            return Vec::new();
        }
        let last = self.len() - 1;
        let first = lo.ceil().max(0.0);
        let end = hi.floor().min(last as f64);
        if first > end {
            return Vec::new();
        }
        let (first, end) = (first as usize, end as usize);

        let visible = end - first + 1;
        let stride = visible.div_ceil(self.max_ticks).max(1);

        (first..=end).filter(|i| i % stride == 0).collect()
    }

    /// Axis text for an x position; empty between slots or off the ends.
    pub fn label_at(&self, x: f64) -> &str {
        let idx = x.round();
        if (x - idx).abs() > 1e-6 || idx < 0.0 {
            return "";
        }
        self.labels.get(idx as usize).map(String::as_str).unwrap_or("")
    }

    /// The point the tooltip reports for a cursor at plot coordinates
    /// `(x, y)`, following the chart's hover mode.
    pub fn point_at(&self, x: f64, y: f64) -> Option<(usize, &str, f64)> {
        if self.is_empty() {
            return None;
        }
        let last = (self.len() - 1) as f64;
        let idx = match self.tooltip.mode {
            HoverMode::Index => x.round().clamp(0.0, last) as usize,
            HoverMode::Nearest => self.nearest_index(x, y),
        };

        if self.tooltip.intersect {
            // Cursor has to sit on the point itself.
            let on_slot = (x - idx as f64).abs() <= 0.5;
            let tolerance = self.value_span().max(1.0) * 0.02;
            if !on_slot || (self.values[idx] - y).abs() > tolerance {
                return None;
            }
        }

        Some((idx, self.labels[idx].as_str(), self.values[idx]))
    }

    /// Tooltip body for the hovered point.
    pub fn tooltip_text(&self, x: f64, y: f64) -> String {
        match self.point_at(x, y) {
            Some((_, date, close)) => format!("{}\n{}: {:.2}", date, self.dataset_label, close),
            None => String::new(),
        }
    }

    // Distance is measured with both axes scaled to the data extent.
    fn nearest_index(&self, x: f64, y: f64) -> usize {
        let x_scale = self.len().max(2) as f64 - 1.0;
        let y_scale = self.value_span().max(f64::EPSILON);
        let dist = |i: usize| {
            let dx = (i as f64 - x) / x_scale;
            let dy = (self.values[i] - y) / y_scale;
            dx * dx + dy * dy
        };
        (0..self.len())
            .min_by(|&a, &b| dist(a).total_cmp(&dist(b)))
            .unwrap_or(0)
    }

    fn value_span(&self) -> f64 {
        let (min, max) = self
            .values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        if min.is_finite() { max - min } else { 0.0 }
    }
}
