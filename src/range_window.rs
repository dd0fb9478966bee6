//! Index window shared by every series.
//!
//! The window selects points `start..=end` of each series. `limit` is the
//! highest selectable index (the range slider's ceiling) and follows the
//! longest series.

use eyre::ensure;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Maximum difference between the old and the requested window length that
/// still counts as a pure translation. Rounding both slider edges can move
/// them in opposite directions near half-integers; this absorbs it.
pub const TRANSLATE_TOLERANCE: f32 = 0.6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RangeGesture {
    /// Both edges moved together; the window length is kept.
    Translate,
    /// One edge moved; the window length changed.
    Resize,
}

/// Window resolved from a pair of slider values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangeUpdate {
    pub start: usize,
    pub end: usize,
    pub gesture: RangeGesture,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRangeWindow")]
pub struct RangeWindow {
    start: usize,
    end: usize,
    limit: usize,
}

/// Unchecked wire form of [`RangeWindow`].
#[derive(Deserialize)]
struct RawRangeWindow {
    start: usize,
    end: usize,
    limit: usize,
}

impl TryFrom<RawRangeWindow> for RangeWindow {
    type Error = eyre::Report;

    fn try_from(raw: RawRangeWindow) -> eyre::Result<Self> {
        ensure!(
            raw.start <= raw.end,
            "range start ({}) > end ({})",
            raw.start,
            raw.end
        );
        ensure!(raw.end <= raw.limit, "range end ({}) > limit ({})", raw.end, raw.limit);
        Ok(Self {
            start: raw.start,
            end: raw.end,
            limit: raw.limit,
        })
    }
}

impl RangeWindow {
    /// Panics unless `start <= end <= limit`.
    pub fn new(start: usize, end: usize, limit: usize) -> Self {
        assert!(end <= limit, "range end ({end}) > limit ({limit})");
        let window = Self { start, end, limit };
        window.check();
        window
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Distance between the edges, in indices.
    pub fn length(&self) -> usize {
        self.end - self.start
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index <= self.end
    }

    /// Whether the window reaches the newest index and will keep following it.
    pub fn follows_tail(&self) -> bool {
        self.end == self.limit
    }

    /// Moves the selection. Panics unless `start <= end`; both are clamped to `limit`.
    pub fn select(&mut self, start: usize, end: usize) {
        assert!(start <= end, "range start ({start}) > end ({end})");
        self.end = end.min(self.limit);
        self.start = start.min(self.end);
        self.check();
    }

    /// Keeps `limit` in sync with the data after a mutation.
    ///
    /// `new_count` is the length of the series that just changed and
    /// `longest` the length of the longest series afterwards. Removals (or an
    /// empty series) rescan; additions only ever raise the ceiling. A window
    /// that reached the old ceiling moves with it.
    pub fn recompute(&mut self, new_count: usize, was_removed: bool, longest: usize) {
        let old_limit = self.limit;
        let new_limit = if was_removed || new_count < 1 {
            longest.saturating_sub(1)
        } else if old_limit + 1 < new_count {
            new_count - 1
        } else {
            old_limit
        };

        self.limit = new_limit;
        if self.end > new_limit || self.end == old_limit {
            self.end = new_limit;
        }
        self.start = self.start.min(self.end);

        if new_limit != old_limit {
            debug!(old_limit, new_limit, start = self.start, end = self.end, "range limit changed");
        }
        self.check();
    }

    /// Resolves two continuous slider values into a window, without applying it.
    ///
    /// Each value is rounded (half to even) and clamped to `0..=limit`. When the
    /// requested length is within [`TRANSLATE_TOLERANCE`] of the current one the
    /// gesture is a translation and the current length is kept exactly.
    pub fn translate_or_resize(&self, start_value: f32, end_value: f32) -> RangeUpdate {
        let (start_value, end_value) = if start_value <= end_value {
            (start_value, end_value)
        } else {
            (end_value, start_value)
        };

        let mut start = self.round_index(start_value);
        let mut end = self.round_index(end_value);

        let old_length = self.length();
        let requested_length = end_value - start_value;
        let gesture = if (old_length as f32 - requested_length).abs() > TRANSLATE_TOLERANCE {
            RangeGesture::Resize
        } else {
            RangeGesture::Translate
        };

        if gesture == RangeGesture::Translate {
            end = start + old_length;
            if end > self.limit {
                end = self.limit;
                start = self.limit.saturating_sub(old_length);
            }
        }

        RangeUpdate { start, end, gesture }
    }

    /// Applies a slider change; returns the resolved window.
    pub fn apply_slider(&mut self, start_value: f32, end_value: f32) -> RangeUpdate {
        let update = self.translate_or_resize(start_value, end_value);
        self.select(update.start, update.end);
        update
    }

    /// Values and bounds to push back into the slider without notification.
    pub fn slider_values(&self) -> (f32, f32) {
        (self.start as f32, self.end as f32)
    }

    pub fn slider_limits(&self) -> (f32, f32) {
        (0.0, self.limit as f32)
    }

    pub fn label(&self) -> String {
        format!("Range[{},{}]", self.start, self.end)
    }

    fn round_index(&self, value: f32) -> usize {
        // NaN saturates to 0
        value.round_ties_even().clamp(0.0, self.limit as f32) as usize
    }

    fn check(&self) {
        assert!(
            self.start <= self.end,
            "range start ({}) > end ({})",
            self.start,
            self.end
        );
    }
}
