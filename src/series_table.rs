//! Insertion-ordered table of data series keyed by category.
//!
//! Lookups are linear: charts hold tens of categories at most.

use eyre::{ensure, Result};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, warn};

use crate::data_types::{Color, DataSeries, EmptySeriesPolicy, Point, SeriesSummary};

/// Structural change produced by a table mutation.
///
/// List views refresh a single row for `Updated` and rebuild for everything else.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesChange {
    Created(usize),
    Updated(usize),
    Removed(usize),
    Cleared,
}

impl SeriesChange {
    /// True when rows were added or removed.
    pub fn is_structural(&self) -> bool {
        !matches!(self, Self::Updated(_))
    }
}

#[derive(Clone, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct SeriesTable {
    series: Vec<DataSeries>,
    #[serde(skip)]
    policy: EmptySeriesPolicy,
    #[serde(skip)]
    default_color: Color,
}

/// Reads a bare series list with the default policy and color; duplicates are rejected.
impl<'de> Deserialize<'de> for SeriesTable {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let series = Vec::<DataSeries>::deserialize(deserializer)?;
        let mut table = Self::default();
        table
            .replace_all(series)
            .map_err(serde::de::Error::custom)?;
        Ok(table)
    }
}

impl SeriesTable {
    pub fn new(policy: EmptySeriesPolicy, default_color: Color) -> Self {
        Self {
            series: Vec::new(),
            policy,
            default_color,
        }
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DataSeries> {
        self.series.iter()
    }

    pub fn position(&self, category: &str) -> Option<usize> {
        self.series.iter().position(|s| s.category() == category)
    }

    pub fn get(&self, category: &str) -> Option<&DataSeries> {
        self.series.iter().find(|s| s.category() == category)
    }

    /// Length of the longest series.
    pub fn max_len(&self) -> usize {
        self.series.iter().map(DataSeries::len).max().unwrap_or(0)
    }

    /// Returns the series for `category`, appending a new one if it is unknown.
    pub fn upsert(&mut self, category: &str) -> (&mut DataSeries, SeriesChange) {
        let (index, change) = match self.position(category) {
            Some(index) => (index, SeriesChange::Updated(index)),
            None => {
                let index = self.series.len();
                self.series
                    .push(DataSeries::new(category, self.default_color));
                debug!(category, index, "series created");
                (index, SeriesChange::Created(index))
            }
        };
        (&mut self.series[index], change)
    }

    pub fn set_color(&mut self, category: &str, color: Color) -> SeriesChange {
        let (series, change) = self.upsert(category);
        series.color = color;
        change
    }

    /// Toggles visibility from the list UI. Unknown categories are left alone.
    pub fn set_enabled(&mut self, category: &str, enabled: bool) -> Option<SeriesChange> {
        let index = self.position(category)?;
        self.series[index].enabled = enabled;
        Some(SeriesChange::Updated(index))
    }

    /// Appends `point`, creating the series on first use.
    ///
    /// A point whose x does not exceed the previous x is still accepted; the
    /// violation is only logged.
    pub fn add_point(&mut self, category: &str, point: Point) -> SeriesChange {
        let (series, change) = self.upsert(category);
        if let Some(previous) = series.last() {
            if point.x <= previous.x {
                warn!(
                    "x value not in ascending order, category={}, index={}, value=({:.5}, {:.5})",
                    category,
                    series.len(),
                    point.x,
                    point.y
                );
            }
        }
        series.push(point);
        change
    }

    /// Removes one point. `None` when the category is unknown or `index` is out of range.
    pub fn remove_point(&mut self, category: &str, index: usize) -> Option<SeriesChange> {
        let position = self.position(category)?;
        self.series[position].remove(index)?;
        Some(self.settle(position))
    }

    /// Removes every point of one category. `None` when the category is unknown.
    pub fn clear(&mut self, category: &str) -> Option<SeriesChange> {
        let position = self.position(category)?;
        self.series[position].clear();
        Some(self.settle(position))
    }

    pub fn clear_all(&mut self) -> SeriesChange {
        match self.policy {
            EmptySeriesPolicy::RemoveSeries => self.series.clear(),
            EmptySeriesPolicy::KeepSeries => self.series.iter_mut().for_each(DataSeries::clear),
        }
        debug!(policy = ?self.policy, "all series cleared");
        SeriesChange::Cleared
    }

    pub fn find_index<F>(&self, category: &str, predicate: F) -> Option<usize>
    where
        F: FnMut(&Point) -> bool,
    {
        self.get(category)?.find_index(predicate)
    }

    pub fn find_last_index<F>(&self, category: &str, predicate: F) -> Option<usize>
    where
        F: FnMut(&Point) -> bool,
    {
        self.get(category)?.find_last_index(predicate)
    }

    pub fn summaries(&self) -> Vec<SeriesSummary> {
        self.series
            .iter()
            .map(|s| SeriesSummary {
                category: s.category().to_string(),
                enabled: s.enabled,
                color: s.color,
                count: s.len(),
            })
            .collect()
    }

    /// Replaces the whole table, rejecting duplicate categories.
    ///
    /// Empty series are dropped under [`EmptySeriesPolicy::RemoveSeries`].
    pub fn replace_all(&mut self, mut series: Vec<DataSeries>) -> Result<SeriesChange> {
        for (i, s) in series.iter().enumerate() {
            ensure!(
                !series[..i].iter().any(|other| other.category() == s.category()),
                "duplicate category '{}'",
                s.category()
            );
        }
        if self.policy == EmptySeriesPolicy::RemoveSeries {
            series.retain(|s| !s.is_empty());
        }
        self.series = series;
        Ok(SeriesChange::Cleared)
    }

    fn settle(&mut self, position: usize) -> SeriesChange {
        if self.series[position].is_empty() && self.policy == EmptySeriesPolicy::RemoveSeries {
            let removed = self.series.remove(position);
            debug!(category = removed.category(), "empty series removed");
            SeriesChange::Removed(position)
        } else {
            SeriesChange::Updated(position)
        }
    }
}
