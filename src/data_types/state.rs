use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};

use super::data::Color;

pub const MIN_POINT_RADIUS: u8 = 1;
pub const MAX_POINT_RADIUS: u8 = 10;

/// What happens to a series once its last point is removed or cleared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptySeriesPolicy {
    /// Drop the category entry.
    #[default]
    RemoveSeries,
    /// Keep an empty, still listed category.
    KeepSeries,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LabelSize {
    pub width: f32,
    pub height: f32,
}

impl Default for LabelSize {
    fn default() -> Self {
        Self {
            width: 200.0,
            height: 20.0,
        }
    }
}

/// Chart configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub empty_series_policy: EmptySeriesPolicy,
    /// Marker radius in pixels, 1..=10.
    pub point_radius: u8,
    /// Hovered markers grow by this factor; also the hit radius.
    pub hover_radius_factor: f32,
    pub lock_aspect: bool,
    pub axis_label_size: LabelSize,
    /// Axes and axis labels.
    pub base_color: Color,
    pub default_series_color: Color,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            empty_series_policy: EmptySeriesPolicy::RemoveSeries,
            point_radius: 2,
            hover_radius_factor: 1.5,
            lock_aspect: false,
            axis_label_size: LabelSize::default(),
            base_color: Color::WHITE,
            default_series_color: Color::WHITE,
        }
    }
}

impl ChartConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let mut config: Self =
            serde_json::from_str(json).wrap_err("failed to parse chart config")?;
        config.point_radius = clamp_point_radius(config.point_radius);
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).wrap_err("failed to serialize chart config")
    }

    pub fn hover_radius(&self) -> f32 {
        self.point_radius as f32 * self.hover_radius_factor
    }
}

pub fn clamp_point_radius(radius: u8) -> u8 {
    radius.clamp(MIN_POINT_RADIUS, MAX_POINT_RADIUS)
}

/// One row of the category list.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesSummary {
    pub category: String,
    pub enabled: bool,
    pub color: Color,
    pub count: usize,
}

impl SeriesSummary {
    /// Row text in the form `[count]\tcategory`.
    pub fn label(&self) -> String {
        format!("[{}]\t{}", self.count, self.category)
    }
}
