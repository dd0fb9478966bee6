//! Chart Model
//!
//! `LineChart` is the single owner of the chart state: the series table, the
//! range window, the scale override and the configuration. Host callbacks
//! mutate it through the methods below and the redraw tick reads it through
//! [`LineChart::paint`]; there is no other shared state.

use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::data_types::{
    clamp_point_radius, ChartBounds, ChartConfig, ChartScaleOverride, Color, DataSeries, Point,
    SeriesSummary,
};
use crate::geometry::{ScreenPoint, ViewportProvider};
use crate::range_window::{RangeUpdate, RangeWindow};
use crate::rendering::{paint_chart, DrawSurface, HoveredPoint};
use crate::series_table::{SeriesChange, SeriesTable};
use crate::transform::compute_bounds;
use crate::view_controller::ViewController;

#[derive(Serialize)]
struct SnapshotRef<'a> {
    series: &'a SeriesTable,
    scale: &'a ChartScaleOverride,
}

#[derive(Deserialize)]
struct Snapshot {
    series: Vec<DataSeries>,
    #[serde(default)]
    scale: ChartScaleOverride,
}

#[derive(Clone, Debug, Default)]
pub struct LineChart {
    config: ChartConfig,
    table: SeriesTable,
    window: RangeWindow,
    scale: ChartScaleOverride,
}

impl LineChart {
    pub fn new(mut config: ChartConfig) -> Self {
        config.point_radius = clamp_point_radius(config.point_radius);
        let table = SeriesTable::new(config.empty_series_policy, config.default_series_color);
        Self {
            config,
            table,
            window: RangeWindow::default(),
            scale: ChartScaleOverride::default(),
        }
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn table(&self) -> &SeriesTable {
        &self.table
    }

    pub fn window(&self) -> &RangeWindow {
        &self.window
    }

    pub fn scale(&self) -> &ChartScaleOverride {
        &self.scale
    }

    pub fn set_point_radius(&mut self, radius: u8) {
        self.config.point_radius = clamp_point_radius(radius);
    }

    pub fn set_lock_aspect(&mut self, lock_aspect: bool) {
        self.config.lock_aspect = lock_aspect;
    }

    // Data management

    pub fn add_data(&mut self, category: &str, x: f64, y: f64) -> SeriesChange {
        self.add_point(category, Point::new(x, y))
    }

    pub fn add_point(&mut self, category: &str, point: Point) -> SeriesChange {
        let change = self.table.add_point(category, point);
        let count = self.table.get(category).map_or(0, DataSeries::len);
        self.window.recompute(count, false, self.table.max_len());
        change
    }

    /// Returns `false` when the category is unknown or `index` is out of range.
    pub fn remove_data(&mut self, category: &str, index: usize) -> bool {
        if self.table.remove_point(category, index).is_none() {
            return false;
        }
        let count = self.table.get(category).map_or(0, DataSeries::len);
        self.window.recompute(count, true, self.table.max_len());
        true
    }

    /// Returns `false` when the category is unknown.
    pub fn clear_data(&mut self, category: &str) -> bool {
        if self.table.clear(category).is_none() {
            return false;
        }
        self.window.recompute(0, true, self.table.max_len());
        true
    }

    pub fn clear_all_data(&mut self) {
        self.table.clear_all();
        self.window.recompute(0, true, self.table.max_len());
    }

    pub fn set_color(&mut self, category: &str, color: Color) -> SeriesChange {
        self.table.set_color(category, color)
    }

    /// Returns `false` when the category is unknown.
    pub fn set_enabled(&mut self, category: &str, enabled: bool) -> bool {
        self.table.set_enabled(category, enabled).is_some()
    }

    pub fn find_data_index<F>(&self, category: &str, predicate: F) -> Option<usize>
    where
        F: FnMut(&Point) -> bool,
    {
        self.table.find_index(category, predicate)
    }

    pub fn find_data_last_index<F>(&self, category: &str, predicate: F) -> Option<usize>
    where
        F: FnMut(&Point) -> bool,
    {
        self.table.find_last_index(category, predicate)
    }

    pub fn summaries(&self) -> Vec<SeriesSummary> {
        self.table.summaries()
    }

    // Chart management

    /// Fixes the scale to `x_span` and `y_min..y_max` and enables it.
    pub fn set_chart_scale(&mut self, x_span: f64, y_min: f64, y_max: f64) -> Result<()> {
        self.scale = ChartScaleOverride::new(x_span, y_min, y_max)?;
        info!(scale = %self.scale, "chart scale set");
        Ok(())
    }

    pub fn remove_chart_scale(&mut self) {
        self.scale.enabled = false;
        info!("chart scale removed");
    }

    /// "Lock Scale" toggle: freezes the bounds currently shown, or releases them.
    pub fn set_lock_scale(&mut self, lock: bool) -> Result<()> {
        let bounds = self.bounds();
        match ViewController::toggle_lock_scale(&self.scale, &bounds, lock) {
            Ok(scale) => {
                self.scale = scale;
                info!(scale = %self.scale, "scale lock toggled");
                Ok(())
            }
            Err(err) => {
                warn!("scale lock rejected: {err}");
                Err(err)
            }
        }
    }

    /// Relays the range slider. `None` when the window did not change.
    pub fn on_range_slider_changed(
        &mut self,
        start_value: f32,
        end_value: f32,
    ) -> Option<RangeUpdate> {
        ViewController::range_slider_changed(&mut self.window, start_value, end_value)
    }

    // Rendering

    pub fn bounds(&self) -> ChartBounds {
        compute_bounds(&self.table, &self.window, &self.scale)
    }

    /// One redraw tick: recomputes the bounds and paints into `surface`.
    pub fn paint(
        &self,
        surface: &mut dyn DrawSurface,
        viewport: &dyn ViewportProvider,
        mouse: Option<ScreenPoint>,
    ) -> Option<HoveredPoint> {
        paint_chart(
            surface,
            &self.table,
            &self.window,
            self.bounds(),
            viewport.viewport(),
            &self.config,
            mouse,
        )
    }

    // Persistence

    /// Serializes the series and the scale override to JSON.
    pub fn snapshot_json(&self) -> Result<String> {
        let snapshot = SnapshotRef {
            series: &self.table,
            scale: &self.scale,
        };
        serde_json::to_string_pretty(&snapshot).wrap_err("failed to serialize chart snapshot")
    }

    /// Replaces the chart data with a snapshot; the window resets to the full range.
    pub fn restore_json(&mut self, json: &str) -> Result<()> {
        let snapshot: Snapshot =
            serde_json::from_str(json).wrap_err("failed to parse chart snapshot")?;

        let scale = if snapshot.scale.enabled {
            ChartScaleOverride::new(
                snapshot.scale.x_span(),
                snapshot.scale.y_min(),
                snapshot.scale.y_max(),
            )
            .wrap_err("invalid scale in snapshot")?
        } else {
            snapshot.scale
        };

        self.table.replace_all(snapshot.series)?;
        self.scale = scale;
        self.window = RangeWindow::default();
        self.window.recompute(0, true, self.table.max_len());
        Ok(())
    }
}
