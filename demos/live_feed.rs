//! Live feed demo
//!
//! Feeds two noisy series, drags the range slider, locks the scale and prints
//! the draw calls a host would receive.
//!
//! Run with:
//! `RUST_LOG=debug cargo run --example live_feed`

use data_chart::{ChartConfig, Color, LineChart, RenderCommand, RenderList, ScreenPoint, ScreenRect};
use rand::Rng;
use tracing_subscriber::EnvFilter;

fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = ChartConfig::from_json(r##"{ "point_radius": 3, "base_color": "#C0C0C0FF" }"##)?;
    let mut chart = LineChart::new(config);
    chart.set_color("sine", Color::BLUE);
    chart.set_color("noise", Color::RED);

    let mut rng = rand::rng();
    for i in 0..40 {
        let x = i as f64 * 0.25;
        chart.add_data("sine", x, x.sin() * 10.0);
        chart.add_data("noise", x, rng.random_range(-5.0..5.0));
    }
    // Out of order on purpose, logged as a warning
    chart.add_data("noise", 1.0, 0.0);

    for row in chart.summaries() {
        println!("{}", row.label());
    }

    // Narrow the window, then drag it along
    chart.on_range_slider_changed(0.0, 9.0);
    chart.set_lock_scale(true)?;
    if let Some(update) = chart.on_range_slider_changed(10.2, 19.2) {
        println!("{:?} -> {}", update.gesture, chart.window().label());
    }

    let viewport = ScreenRect::from_xywh(20.0, 20.0, 640.0, 360.0);
    let mut surface = RenderList::new();
    let mouse = ScreenPoint::new(340.0, 200.0);
    let hovered = chart.paint(&mut surface, &viewport, Some(mouse));

    println!("bounds: {:?}", chart.bounds());
    for command in &surface.commands {
        if let RenderCommand::Label { text, rect, .. } = command {
            println!("label {text:>12} at ({:.1}, {:.1})", rect.origin.x, rect.origin.y);
        }
    }
    println!(
        "{} lines, {} discs, hovered: {:?}",
        surface.lines().count(),
        surface.discs().count(),
        hovered
    );
    println!("snapshot: {} bytes", chart.snapshot_json()?.len());

    Ok(())
}
