use data_chart::{RangeGesture, RangeWindow};

#[test]
fn test_translate_keeps_length() {
    let window = RangeWindow::new(2, 5, 20);
    let update = window.translate_or_resize(4.4, 7.6);
    assert_eq!(update.gesture, RangeGesture::Translate);
    assert_eq!((update.start, update.end), (4, 7));
}

#[test]
fn test_translate_at_half_integers() {
    // 2.5 rounds down and 5.5 rounds up; length would drift to 4 without correction
    let window = RangeWindow::new(0, 3, 20);
    let update = window.translate_or_resize(2.5, 5.5);
    assert_eq!(update.gesture, RangeGesture::Translate);
    assert_eq!((update.start, update.end), (2, 5));
}

#[test]
fn test_resize_moves_one_edge() {
    let window = RangeWindow::new(2, 5, 20);
    let update = window.translate_or_resize(2.0, 9.0);
    assert_eq!(update.gesture, RangeGesture::Resize);
    assert_eq!((update.start, update.end), (2, 9));
}

#[test]
fn test_translate_or_resize_is_idempotent() {
    let mut window = RangeWindow::new(3, 6, 30);
    for (a, b) in [(7.3, 10.2), (1.0, 12.0), (2.5, 5.5), (29.0, 40.0)] {
        let first = window.translate_or_resize(a, b);
        let second = window.translate_or_resize(a, b);
        assert_eq!(first, second);

        let applied = window.apply_slider(a, b);
        let reapplied = window.apply_slider(a, b);
        assert_eq!((applied.start, applied.end), (reapplied.start, reapplied.end));
    }
}

#[test]
fn test_translate_is_shifted_back_at_limit() {
    let window = RangeWindow::new(0, 4, 10);
    let update = window.translate_or_resize(8.0, 12.0);
    assert_eq!(update.gesture, RangeGesture::Translate);
    assert_eq!((update.start, update.end), (6, 10));
}

#[test]
fn test_slider_values_are_clamped() {
    let window = RangeWindow::new(0, 4, 10);
    let update = window.translate_or_resize(-3.0, 1.0);
    assert_eq!((update.start, update.end), (0, 4));

    let update = window.translate_or_resize(-5.0, 50.0);
    assert_eq!(update.gesture, RangeGesture::Resize);
    assert_eq!((update.start, update.end), (0, 10));
}

#[test]
fn test_swapped_slider_values() {
    let window = RangeWindow::new(0, 4, 10);
    let update = window.translate_or_resize(9.0, 1.0);
    assert_eq!(update.gesture, RangeGesture::Resize);
    assert_eq!((update.start, update.end), (1, 9));
}

#[test]
fn test_recompute_follows_tail() {
    let mut window = RangeWindow::default();
    window.recompute(1, false, 1);
    assert_eq!((window.start(), window.end(), window.limit()), (0, 0, 0));

    window.recompute(2, false, 2);
    assert_eq!((window.start(), window.end(), window.limit()), (0, 1, 1));
    assert!(window.follows_tail());

    window.recompute(3, false, 3);
    assert_eq!((window.start(), window.end(), window.limit()), (0, 2, 2));
}

#[test]
fn test_recompute_keeps_user_selection() {
    let mut window = RangeWindow::new(0, 5, 9);
    window.select(1, 3);
    window.recompute(11, false, 11);
    assert_eq!(window.limit(), 10);
    assert_eq!((window.start(), window.end()), (1, 3));
}

#[test]
fn test_recompute_shorter_series_does_not_lower_limit() {
    let mut window = RangeWindow::new(0, 9, 9);
    // A second, shorter series received its third point
    window.recompute(3, false, 10);
    assert_eq!((window.start(), window.end(), window.limit()), (0, 9, 9));
}

#[test]
fn test_recompute_after_removal_shrinks() {
    let mut window = RangeWindow::new(2, 8, 9);
    window.recompute(3, true, 5);
    assert_eq!((window.start(), window.end(), window.limit()), (2, 4, 4));
}

#[test]
fn test_recompute_clamps_start() {
    let mut window = RangeWindow::new(6, 8, 9);
    window.recompute(0, true, 4);
    assert_eq!((window.start(), window.end(), window.limit()), (3, 3, 3));
}

#[test]
fn test_recompute_to_empty() {
    let mut window = RangeWindow::new(2, 8, 9);
    window.recompute(0, true, 0);
    assert_eq!((window.start(), window.end(), window.limit()), (0, 0, 0));
}

#[test]
fn test_label_and_slider_values() {
    let window = RangeWindow::new(2, 5, 7);
    assert_eq!(window.label(), "Range[2,5]");
    assert_eq!(window.slider_values(), (2.0, 5.0));
    assert_eq!(window.slider_limits(), (0.0, 7.0));
    assert_eq!(window.length(), 3);
    assert!(window.contains(5));
    assert!(!window.contains(6));
}

#[test]
fn test_deserialize_valid_window() {
    let window: RangeWindow = serde_json::from_str(r#"{"start":2,"end":4,"limit":9}"#).unwrap();
    assert_eq!(window, RangeWindow::new(2, 4, 9));
    assert_eq!(window.translate_or_resize(1.0, 3.0).gesture, RangeGesture::Translate);
}

#[test]
fn test_deserialize_rejects_reversed_window() {
    let err = serde_json::from_str::<RangeWindow>(r#"{"start":5,"end":2,"limit":9}"#).unwrap_err();
    assert!(err.to_string().contains("range start (5) > end (2)"));
}

#[test]
fn test_deserialize_rejects_end_past_limit() {
    let err = serde_json::from_str::<RangeWindow>(r#"{"start":0,"end":12,"limit":9}"#).unwrap_err();
    assert!(err.to_string().contains("range end (12) > limit (9)"));
}
