//! data_chart crate: the data-to-screen core of an interactive line chart.
//!
//! Hosts own the window, the widgets and the raster drawing; this crate owns
//! the series, the index window, the bounds and the projection.

pub mod chart;
pub mod data_types;
pub mod geometry;
pub mod range_window;
pub mod rendering;
pub mod series_table;
pub mod transform;
pub mod utils;
pub mod view_controller;

pub use chart::LineChart;
pub use data_types::{
    ChartBounds, ChartConfig, ChartScaleOverride, Color, DataSeries, EmptySeriesPolicy, Point,
    SeriesSummary,
};
pub use geometry::{ScreenPoint, ScreenRect, ScreenSize, ViewportProvider};
pub use range_window::{RangeGesture, RangeUpdate, RangeWindow};
pub use rendering::{DrawSurface, HoveredPoint, RenderCommand, RenderList, TextAlign};
pub use series_table::{SeriesChange, SeriesTable};
pub use transform::{compute_bounds, ChartTransform};
