use eyre::{ensure, Result};

use crate::data_types::{ChartBounds, ChartScaleOverride};
use crate::geometry::ScreenPoint;
use crate::range_window::{RangeUpdate, RangeWindow};

/// ViewController handles the business logic of interactions (range slider,
/// scale lock, hover) independently of the host GUI to facilitate testing.
pub struct ViewController;

impl ViewController {
    /// Applies a range slider change. Returns `None` when the window did not move,
    /// so the host can skip the relabel.
    pub fn range_slider_changed(
        window: &mut RangeWindow,
        start_value: f32,
        end_value: f32,
    ) -> Option<RangeUpdate> {
        let before = *window;
        let update = window.apply_slider(start_value, end_value);
        if *window == before {
            None
        } else {
            Some(update)
        }
    }

    /// Builds the override for the "Lock Scale" toggle.
    ///
    /// Locking freezes what `bounds` shows right now; unlocking keeps the last
    /// values but disables them. Locking fails while nothing is visible.
    pub fn toggle_lock_scale(
        current: &ChartScaleOverride,
        bounds: &ChartBounds,
        lock: bool,
    ) -> Result<ChartScaleOverride> {
        if !lock {
            let mut scale = *current;
            scale.enabled = false;
            return Ok(scale);
        }
        ensure!(!bounds.is_zero(), "cannot lock the scale while no data is visible");
        ChartScaleOverride::capture(bounds)
    }

    /// Whether `mouse` is within `radius` pixels of `point`.
    pub fn hit_test(mouse: ScreenPoint, point: ScreenPoint, radius: f32) -> bool {
        mouse.distance_squared(point) <= radius * radius
    }

    /// Toolbar caption of the point radius slider.
    pub fn radius_label(radius: u8) -> String {
        format!("Radius({radius})")
    }
}
