use data_chart::{ChartConfig, Color, EmptySeriesPolicy, LineChart};

#[test]
fn test_partial_config_uses_defaults() {
    let config = ChartConfig::from_json(r#"{ "empty_series_policy": "keep_series" }"#).unwrap();
    assert_eq!(config.empty_series_policy, EmptySeriesPolicy::KeepSeries);
    assert_eq!(config.point_radius, 2);
    assert_eq!(config.hover_radius(), 3.0);
    assert!(!config.lock_aspect);
}

#[test]
fn test_config_clamps_point_radius() {
    let config = ChartConfig::from_json(r#"{ "point_radius": 40 }"#).unwrap();
    assert_eq!(config.point_radius, 10);
}

#[test]
fn test_config_colors_are_hex() {
    let config = ChartConfig::from_json(
        r##"{ "base_color": "#000000", "default_series_color": "#FF000080" }"##,
    )
    .unwrap();
    assert_eq!(config.base_color, Color::BLACK);
    assert_eq!(config.default_series_color.r, 1.0);
    assert!((config.default_series_color.a - 128.0 / 255.0).abs() < 1e-6);

    let json = config.to_json().unwrap();
    assert!(json.contains("\"#FF000080\""));
    assert_eq!(ChartConfig::from_json(&json).unwrap(), config);
}

#[test]
fn test_config_rejects_bad_input() {
    assert!(ChartConfig::from_json(r##"{ "base_color": "#12" }"##).is_err());
    assert!(ChartConfig::from_json(r##"{ "base_color": "#GG0000" }"##).is_err());
    assert!(ChartConfig::from_json(r#"{ "empty_series_policy": "sometimes" }"#).is_err());
    assert!(ChartConfig::from_json("[").is_err());
}

#[test]
fn test_color_hex() {
    assert_eq!(Color::RED.to_hex(), "#FF0000FF");
    assert_eq!(Color::from_hex("00ff00").unwrap(), Color::GREEN);
    assert!(Color::from_hex("#00ff00ff00").is_err());
}

#[test]
fn test_default_series_color_applies_to_new_series() {
    let config = ChartConfig {
        default_series_color: Color::GREEN,
        ..Default::default()
    };
    let mut chart = LineChart::new(config);
    chart.add_data("A", 0.0, 0.0);
    assert_eq!(chart.table().get("A").map(|s| s.color), Some(Color::GREEN));
}

#[test]
fn test_color_hex_rejects_signs() {
    assert!(Color::from_hex("#+F+F+F").is_err());
    assert!(Color::from_hex("#-1FFFFFF").is_err());
    assert!(ChartConfig::from_json(r##"{ "base_color": "#+F+F+F" }"##).is_err());
}
