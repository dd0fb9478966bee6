//! Data bounds and data-to-screen projection

use crate::data_types::{ChartBounds, ChartScaleOverride, Point};
use crate::geometry::{ScreenPoint, ScreenRect};
use crate::range_window::RangeWindow;
use crate::series_table::SeriesTable;

/// Bounds of every visible point, or [`ChartBounds::ZERO`] when nothing is visible.
///
/// Only enabled series contribute, restricted to the window's indices. A zero
/// span is widened by one unit, then an enabled scale override replaces the
/// x span and the y range.
pub fn compute_bounds(
    table: &SeriesTable,
    window: &RangeWindow,
    scale: &ChartScaleOverride,
) -> ChartBounds {
    let mut bounds: Option<ChartBounds> = None;

    for series in table.iter().filter(|s| s.enabled && !s.is_empty()) {
        for &point in series.window(window.start(), window.end()) {
            bounds
                .get_or_insert(ChartBounds::from_point(point))
                .include(point);
        }
    }

    let Some(mut bounds) = bounds else {
        return ChartBounds::ZERO;
    };

    bounds.widen_degenerate();
    if scale.enabled {
        scale.apply(&mut bounds);
    }
    bounds
}

/// Projection of a data rectangle onto a viewport, centered on the viewport.
///
/// Screen y grows downwards, so the y scale is negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartTransform {
    bounds: ChartBounds,
    viewport: ScreenRect,
    x_scale: f64,
    y_scale: f64,
}

impl ChartTransform {
    /// Returns `None` for bounds without area (nothing visible) or an empty viewport.
    pub fn new(bounds: ChartBounds, viewport: ScreenRect, lock_aspect: bool) -> Option<Self> {
        if !bounds.has_area() || !viewport.is_valid() {
            return None;
        }

        let x_scale = viewport.width() as f64 / bounds.width();
        let y_scale = viewport.height() as f64 / bounds.height();
        let (x_scale, y_scale) = if lock_aspect {
            let uniform = x_scale.min(y_scale);
            (uniform, uniform)
        } else {
            (x_scale, y_scale)
        };

        Some(Self {
            bounds,
            viewport,
            x_scale,
            y_scale: -y_scale,
        })
    }

    pub fn bounds(&self) -> ChartBounds {
        self.bounds
    }

    pub fn viewport(&self) -> ScreenRect {
        self.viewport
    }

    /// Maps a data point into viewport-local pixels (relative to the viewport origin).
    pub fn to_screen(&self, point: Point) -> ScreenPoint {
        let center = self.bounds.center();
        let local_center = self.viewport.local_center();
        let dx = (point.x - center.x) * self.x_scale;
        let dy = (point.y - center.y) * self.y_scale;
        ScreenPoint::new(
            (local_center.x as f64 + dx) as f32,
            (local_center.y as f64 + dy) as f32,
        )
    }

    /// Maps a data point into window pixels.
    pub fn to_window(&self, point: Point) -> ScreenPoint {
        self.to_screen(point) + self.viewport.origin
    }

    /// Inverse of [`Self::to_screen`].
    pub fn to_data(&self, screen: ScreenPoint) -> Point {
        let center = self.bounds.center();
        let local_center = self.viewport.local_center();
        let dx = (screen.x - local_center.x) as f64;
        let dy = (screen.y - local_center.y) as f64;
        Point::new(center.x + dx / self.x_scale, center.y + dy / self.y_scale)
    }

    /// Returns (x_scale, x_offset, y_scale, y_offset) for batch projection
    /// into window coordinates, matching [`Self::to_window`].
    /// formula: window_val = data_val * scale + offset
    pub fn scale_coefficients(&self) -> (f64, f64, f64, f64) {
        let center = self.bounds.center();
        let local_center = self.viewport.local_center();
        let origin = self.viewport.origin;
        let x_offset = (origin.x + local_center.x) as f64 - center.x * self.x_scale;
        let y_offset = (origin.y + local_center.y) as f64 - center.y * self.y_scale;
        (self.x_scale, x_offset, self.y_scale, y_offset)
    }
}

/// One-shot projection; `None` when `bounds` has no area.
pub fn to_screen(
    point: Point,
    bounds: ChartBounds,
    viewport: ScreenRect,
    lock_aspect: bool,
) -> Option<ScreenPoint> {
    ChartTransform::new(bounds, viewport, lock_aspect).map(|t| t.to_screen(point))
}
