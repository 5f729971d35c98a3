// src/chart/surface.rs

use super::line_chart::LineChart;

/// Something that can hold a rendered chart.
///
/// A handle is returned for every chart created and must be given back to
/// `dispose` before the surface drops that chart. Callers keep at most one
/// handle alive.
pub trait ChartSurface {
    type Handle;

    fn create(&mut self, chart: LineChart) -> Self::Handle;

    fn dispose(&mut self, handle: Self::Handle);
}
