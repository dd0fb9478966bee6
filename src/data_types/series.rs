use serde::{Deserialize, Serialize};

use super::data::{Color, Point};

/// An ordered list of points sharing a category name, a color and a visibility flag.
///
/// Points are kept in insertion order. Ascending x is expected by the renderer
/// but not enforced here; the table reports violations when points are added.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataSeries {
    category: String,
    pub enabled: bool,
    pub color: Color,
    points: Vec<Point>,
}

impl DataSeries {
    pub fn new(category: impl Into<String>, color: Color) -> Self {
        Self {
            category: category.into(),
            enabled: true,
            color,
            points: Vec::new(),
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Removes the point at `index`, or returns `None` when out of range.
    pub fn remove(&mut self, index: usize) -> Option<Point> {
        if index < self.points.len() {
            Some(self.points.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn find_index<F>(&self, mut predicate: F) -> Option<usize>
    where
        F: FnMut(&Point) -> bool,
    {
        self.points.iter().position(|p| predicate(p))
    }

    pub fn find_last_index<F>(&self, mut predicate: F) -> Option<usize>
    where
        F: FnMut(&Point) -> bool,
    {
        self.points.iter().rposition(|p| predicate(p))
    }

    /// Points in `start..=end`, with `end` clamped to the last index.
    pub fn window(&self, start: usize, end: usize) -> &[Point] {
        if start >= self.points.len() || start > end {
            return &[];
        }
        let last = end.min(self.points.len() - 1);
        &self.points[start..=last]
    }
}
