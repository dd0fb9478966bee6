use eyre::{ensure, Result};
use serde::{Deserialize, Serialize};

use super::data::Point;

/// Data-space rectangle currently mapped onto the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ChartBounds {
    pub const ZERO: Self = Self {
        x_min: 0.0,
        x_max: 0.0,
        y_min: 0.0,
        y_max: 0.0,
    };

    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Bounds covering a single point.
    pub fn from_point(point: Point) -> Self {
        Self::new(point.x, point.x, point.y, point.y)
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.x_min + self.x_max) * 0.5,
            (self.y_min + self.y_max) * 0.5,
        )
    }

    /// True when nothing was visible.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// True when both spans are positive, i.e. projecting through these bounds is safe.
    pub fn has_area(&self) -> bool {
        self.width() > 0.0 && self.height() > 0.0
    }

    pub fn include(&mut self, point: Point) {
        self.x_min = self.x_min.min(point.x);
        self.x_max = self.x_max.max(point.x);
        self.y_min = self.y_min.min(point.y);
        self.y_max = self.y_max.max(point.y);
    }

    /// Widens an axis whose min and max coincide by one unit.
    pub fn widen_degenerate(&mut self) {
        if is_degenerate_span(self.x_min, self.x_max) {
            self.x_max = self.x_min + 1.0;
        }
        if is_degenerate_span(self.y_min, self.y_max) {
            self.y_max = self.y_min + 1.0;
        }
    }
}

/// True when `max - min` is zero up to f64 rounding at the operands' magnitude.
pub(crate) fn is_degenerate_span(min: f64, max: f64) -> bool {
    let scale = min.abs().max(max.abs());
    max - min <= f64::EPSILON * scale.max(1.0)
}

/// Fixed scale that replaces the computed bounds while enabled ("locked scale").
///
/// Only the x span is fixed: the x origin keeps following the first visible
/// point so the chart scrolls with the range window. The y range is fixed
/// entirely.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartScaleOverride {
    pub enabled: bool,
    x_span: f64,
    y_min: f64,
    y_max: f64,
}

impl Default for ChartScaleOverride {
    fn default() -> Self {
        Self {
            enabled: false,
            x_span: 1.0,
            y_min: 0.0,
            y_max: 1.0,
        }
    }
}

impl ChartScaleOverride {
    /// Creates an enabled override. Fails unless `x_span > 0` and `y_min < y_max`.
    pub fn new(x_span: f64, y_min: f64, y_max: f64) -> Result<Self> {
        ensure!(x_span > 0.0, "x span ({x_span:.5}) must be positive");
        ensure!(
            y_min < y_max,
            "y min ({y_min:.5}) must be lower than y max ({y_max:.5})"
        );
        Ok(Self {
            enabled: true,
            x_span,
            y_min,
            y_max,
        })
    }

    /// Locks the scale to what `bounds` currently shows.
    pub fn capture(bounds: &ChartBounds) -> Result<Self> {
        Self::new(bounds.width(), bounds.y_min, bounds.y_max)
    }

    pub fn x_span(&self) -> f64 {
        self.x_span
    }

    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    /// Replaces the x span and the whole y range of `bounds`, keeping `x_min`.
    ///
    /// Panics on an invalid override (only reachable through deserialized input).
    pub fn apply(&self, bounds: &mut ChartBounds) {
        assert!(self.x_span > 0.0, "x span ({:.5}) <= 0", self.x_span);
        assert!(
            self.y_min < self.y_max,
            "y min ({:.5}) >= y max ({:.5})",
            self.y_min,
            self.y_max
        );

        bounds.x_max = bounds.x_min + self.x_span;
        bounds.y_min = self.y_min;
        bounds.y_max = self.y_max;
    }
}

impl std::fmt::Display for ChartScaleOverride {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = if self.enabled { "Enabled" } else { "Disabled" };
        write!(
            f,
            "{state}, x_span={:.5}, y_min={:.5}, y_max={:.5}",
            self.x_span, self.y_min, self.y_max
        )
    }
}
