use crate::data_types::Point;

/// Axis end label. Shortest round-trip representation, no locale.
pub fn format_axis_value(value: f64) -> String {
    format!("{value}")
}

/// Hover readout, e.g. `(1.00000, 2.50000)`.
pub fn format_point(point: Point) -> String {
    format!("({:.5}, {:.5})", point.x, point.y)
}
