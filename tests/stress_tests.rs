use std::collections::HashMap;

use data_chart::{ChartConfig, EmptySeriesPolicy, LineChart, RangeGesture};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const CATEGORIES: [&str; 4] = ["a", "b", "c", "d"];

fn run_random_operations(policy: EmptySeriesPolicy, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut chart = LineChart::new(ChartConfig {
        empty_series_policy: policy,
        ..Default::default()
    });
    // Expected point count per category
    let mut model: HashMap<&str, usize> = HashMap::new();

    for step in 0..2_000 {
        let category = CATEGORIES[rng.random_range(0..CATEGORIES.len())];
        match rng.random_range(0..10) {
            0..=4 => {
                chart.add_data(category, step as f64, rng.random_range(-100.0..100.0));
                *model.entry(category).or_insert(0) += 1;
            }
            5 | 6 => {
                let index = rng.random_range(0..8);
                let expected = model.get(category).is_some_and(|&n| index < n);
                assert_eq!(chart.remove_data(category, index), expected);
                if expected {
                    let n = model.get_mut(category).unwrap();
                    *n -= 1;
                    if *n == 0 && policy == EmptySeriesPolicy::RemoveSeries {
                        model.remove(category);
                    }
                }
            }
            7 => {
                let known = model.contains_key(category);
                assert_eq!(chart.clear_data(category), known);
                if known {
                    match policy {
                        EmptySeriesPolicy::RemoveSeries => {
                            model.remove(category);
                        }
                        EmptySeriesPolicy::KeepSeries => {
                            model.insert(category, 0);
                        }
                    }
                }
            }
            8 => {
                let window = *chart.window();
                let a = rng.random_range(-2.0..(window.limit() as f32 + 2.0));
                let b = a + rng.random_range(0.0..6.0);
                let update = window.translate_or_resize(a, b);
                if update.gesture == RangeGesture::Translate {
                    assert_eq!(update.end - update.start, window.length());
                }
                assert_eq!(update, window.translate_or_resize(a, b));
                chart.on_range_slider_changed(a, b);
            }
            _ => {
                if rng.random_bool(0.05) {
                    chart.clear_all_data();
                    match policy {
                        EmptySeriesPolicy::RemoveSeries => model.clear(),
                        EmptySeriesPolicy::KeepSeries => model.values_mut().for_each(|n| *n = 0),
                    }
                }
            }
        }

        let rows = chart.summaries();
        for (i, row) in rows.iter().enumerate() {
            assert!(
                rows[..i].iter().all(|other| other.category != row.category),
                "duplicate category {}",
                row.category
            );
            assert_eq!(Some(&row.count), model.get(row.category.as_str()));
        }
        assert_eq!(rows.len(), model.len());

        let window = chart.window();
        assert!(window.start() <= window.end());
        assert!(window.end() <= window.limit());
        assert_eq!(window.limit(), chart.table().max_len().saturating_sub(1));

        let bounds = chart.bounds();
        assert!(bounds.is_zero() || bounds.has_area());
    }
}

#[test]
fn test_random_operations_remove_policy() {
    for seed in 0..8 {
        run_random_operations(EmptySeriesPolicy::RemoveSeries, seed);
    }
}

#[test]
fn test_random_operations_keep_policy() {
    for seed in 0..8 {
        run_random_operations(EmptySeriesPolicy::KeepSeries, seed);
    }
}
