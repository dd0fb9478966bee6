// Rendering functions for the chart
//
// The core never rasterizes. Each tick it walks the visible data and emits
// lines, discs and labels into a host supplied `DrawSurface`.

use crate::data_types::{ChartBounds, ChartConfig, Color, Point};
use crate::geometry::{ScreenPoint, ScreenRect, ScreenSize};
use crate::range_window::RangeWindow;
use crate::series_table::SeriesTable;
use crate::transform::ChartTransform;
use crate::utils::{format_axis_value, format_point};
use crate::view_controller::ViewController;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Drawing primitives provided by the host. Positions are window pixels.
pub trait DrawSurface {
    fn draw_line(&mut self, from: ScreenPoint, to: ScreenPoint, color: Color);

    fn draw_disc(&mut self, center: ScreenPoint, radius: f32, color: Color);

    /// Draws `text` inside `rect`, rotated by `rotation` degrees around `rect.origin`.
    fn draw_label(
        &mut self,
        rect: ScreenRect,
        text: &str,
        align: TextAlign,
        rotation: f32,
        color: Color,
    );
}

/// A recorded draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderCommand {
    Line {
        from: ScreenPoint,
        to: ScreenPoint,
        color: Color,
    },
    Disc {
        center: ScreenPoint,
        radius: f32,
        color: Color,
    },
    Label {
        rect: ScreenRect,
        text: String,
        align: TextAlign,
        rotation: f32,
        color: Color,
    },
}

/// Surface that records draw calls instead of rasterizing them.
#[derive(Clone, Debug, Default)]
pub struct RenderList {
    pub commands: Vec<RenderCommand>,
}

impl RenderList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn lines(&self) -> impl Iterator<Item = (ScreenPoint, ScreenPoint)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            RenderCommand::Line { from, to, .. } => Some((*from, *to)),
            _ => None,
        })
    }

    pub fn discs(&self) -> impl Iterator<Item = (ScreenPoint, f32)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            RenderCommand::Disc { center, radius, .. } => Some((*center, *radius)),
            _ => None,
        })
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|c| match c {
            RenderCommand::Label { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl DrawSurface for RenderList {
    fn draw_line(&mut self, from: ScreenPoint, to: ScreenPoint, color: Color) {
        self.commands.push(RenderCommand::Line { from, to, color });
    }

    fn draw_disc(&mut self, center: ScreenPoint, radius: f32, color: Color) {
        self.commands.push(RenderCommand::Disc {
            center,
            radius,
            color,
        });
    }

    fn draw_label(
        &mut self,
        rect: ScreenRect,
        text: &str,
        align: TextAlign,
        rotation: f32,
        color: Color,
    ) {
        self.commands.push(RenderCommand::Label {
            rect,
            text: text.to_string(),
            align,
            rotation,
            color,
        });
    }
}

/// Point under the mouse during the last paint.
#[derive(Clone, Debug, PartialEq)]
pub struct HoveredPoint {
    pub category: String,
    /// Index within the series.
    pub index: usize,
    pub point: Point,
    pub color: Color,
}

/// Paints axes, axis labels, every visible series and the hover readout.
///
/// Returns the hovered point, if any. Nothing is drawn when `bounds` has no
/// area (no visible data).
pub fn paint_chart(
    surface: &mut dyn DrawSurface,
    table: &SeriesTable,
    window: &RangeWindow,
    bounds: ChartBounds,
    viewport: ScreenRect,
    config: &ChartConfig,
    mouse: Option<ScreenPoint>,
) -> Option<HoveredPoint> {
    let transform = ChartTransform::new(bounds, viewport, config.lock_aspect)?;
    let label_size = ScreenSize::new(config.axis_label_size.width, config.axis_label_size.height);

    let x_axis_start = transform.to_window(Point::new(bounds.x_min, bounds.y_min));
    let x_axis_end = transform.to_window(Point::new(bounds.x_max, bounds.y_min));
    paint_axes(surface, &transform, label_size, config.base_color);

    let hover = paint_series(surface, table, window, &transform, config, mouse);

    if let Some(hovered) = &hover {
        let mid = ScreenPoint::new(
            (x_axis_start.x + x_axis_end.x) * 0.5 - label_size.width * 0.5,
            (x_axis_start.y + x_axis_end.y) * 0.5,
        );
        surface.draw_label(
            ScreenRect::new(mid, label_size),
            &format_point(hovered.point),
            TextAlign::Center,
            0.0,
            hovered.color,
        );
    }

    hover
}

fn paint_axes(
    surface: &mut dyn DrawSurface,
    transform: &ChartTransform,
    label_size: ScreenSize,
    color: Color,
) {
    let bounds = transform.bounds();
    let origin = transform.to_window(Point::new(bounds.x_min, bounds.y_min));
    let x_end = transform.to_window(Point::new(bounds.x_max, bounds.y_min));
    let y_end = transform.to_window(Point::new(bounds.x_min, bounds.y_max));

    // X axis
    surface.draw_line(origin, x_end, color);
    surface.draw_label(
        ScreenRect::new(origin, label_size),
        &format_axis_value(bounds.x_min),
        TextAlign::Left,
        0.0,
        color,
    );
    surface.draw_label(
        ScreenRect::new(x_end - ScreenPoint::new(label_size.width, 0.0), label_size),
        &format_axis_value(bounds.x_max),
        TextAlign::Right,
        0.0,
        color,
    );

    // Y axis, labels run along it
    surface.draw_line(origin, y_end, color);
    surface.draw_label(
        ScreenRect::new(origin - ScreenPoint::new(0.0, label_size.width), label_size),
        &format_axis_value(bounds.y_min),
        TextAlign::Right,
        90.0,
        color,
    );
    surface.draw_label(
        ScreenRect::new(y_end, label_size),
        &format_axis_value(bounds.y_max),
        TextAlign::Left,
        90.0,
        color,
    );
}

fn paint_series(
    surface: &mut dyn DrawSurface,
    table: &SeriesTable,
    window: &RangeWindow,
    transform: &ChartTransform,
    config: &ChartConfig,
    mouse: Option<ScreenPoint>,
) -> Option<HoveredPoint> {
    let radius = config.point_radius as f32;
    let hover_radius = config.hover_radius();
    let mut hover: Option<HoveredPoint> = None;

    for series in table.iter().filter(|s| s.enabled && !s.is_empty()) {
        let visible = series.window(window.start(), window.end());
        let mut previous: Option<ScreenPoint> = None;

        for (offset, &point) in visible.iter().enumerate() {
            let screen = transform.to_window(point);
            if let Some(from) = previous {
                surface.draw_line(from, screen, series.color);
            }

            let hit = hover.is_none()
                && mouse.is_some_and(|m| ViewController::hit_test(m, screen, hover_radius));
            if hit {
                hover = Some(HoveredPoint {
                    category: series.category().to_string(),
                    index: window.start() + offset,
                    point,
                    color: series.color,
                });
                surface.draw_disc(screen, hover_radius, series.color);
            } else {
                surface.draw_disc(screen, radius, series.color);
            }
            previous = Some(screen);
        }
    }

    hover
}
