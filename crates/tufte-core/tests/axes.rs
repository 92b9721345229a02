// File: crates/tufte-core/tests/axes.rs
// Purpose: Validate bar and line axis ranges and their failure modes.

use proptest::prelude::*;
use tufte_core::{bar_axes, dataset, line_axes, ChartError, DataPoint, Datum};

#[test]
fn bar_axis_spans_index_slots_and_tallest_stack() {
    let data = dataset([vec![1.0, 2.0], vec![5.0], vec![0.5, 0.5, 0.5]]);
    let axes = bar_axes(&data).unwrap();
    assert_eq!((axes.x.min, axes.x.max), (0.0, 3.0));
    assert_eq!((axes.y.min, axes.y.max), (0.0, 5.0));
}

#[test]
fn bar_rejects_empty_all_zero_and_negative() {
    assert_eq!(bar_axes(&[]), Err(ChartError::EmptyDataset));
    assert!(matches!(
        bar_axes(&dataset([0.0, 0.0, 0.0])),
        Err(ChartError::NoPositiveValue { .. })
    ));
    assert_eq!(
        bar_axes(&dataset([vec![-5.0]])),
        Err(ChartError::NegativeValue { index: 0, sum: -5.0 })
    );
}

#[test]
fn bar_allows_negative_layer_when_stack_sum_is_positive() {
    let axes = bar_axes(&dataset([vec![4.0, -1.0]])).unwrap();
    assert_eq!(axes.y.max, 3.0);
}

#[test]
fn line_axis_pads_forty_percent_of_range() {
    let data = dataset([vec![1.0, 9.0], vec![-1.0, 4.0]]);
    let axes = line_axes(&data).unwrap();
    // range = 9 - (-1) = 10
    assert!((axes.y.min - (-5.0)).abs() < 1e-9);
    assert!((axes.y.max - 13.0).abs() < 1e-9);
    assert_eq!(axes.x.max, 2.0);
}

#[test]
fn line_rejects_empty_but_not_negative() {
    assert_eq!(line_axes(&[]), Err(ChartError::EmptyDataset));
    assert!(line_axes(&dataset([-3.0, -7.0])).is_ok());
}

#[test]
fn axis_pass_skips_points_that_do_not_coerce() {
    let data = vec![DataPoint::from(2.0), DataPoint::new(Datum::from("n/a")), DataPoint::from(4.0)];
    assert_eq!(bar_axes(&data).unwrap().y.max, 4.0);

    let only_text = vec![DataPoint::new(Datum::from("n/a"))];
    assert!(matches!(bar_axes(&only_text), Err(ChartError::NoPositiveValue { .. })));

    let line = line_axes(&only_text).unwrap();
    assert_eq!((line.y.min, line.y.max), (0.0, 0.0));
}

fn stacks() -> impl Strategy<Value = Vec<Vec<f64>>> {
    prop::collection::vec(prop::collection::vec(0.0f64..1_000.0, 1..4), 1..20)
}

proptest! {
    #[test]
    fn prop_bar_max_is_largest_stack_sum(raw in stacks()) {
        prop_assume!(raw.iter().any(|s| s.iter().sum::<f64>() > 0.0));
        let want = raw.iter().map(|s| s.iter().sum::<f64>()).fold(0.0, f64::max);
        let axes = bar_axes(&dataset(raw.clone())).unwrap();
        prop_assert_eq!(axes.y.min, 0.0);
        prop_assert!((axes.y.max - want).abs() < 1e-9);
        prop_assert_eq!(axes.x.max, raw.len() as f64);
    }

    #[test]
    fn prop_line_bounds_use_individual_values(
        raw in prop::collection::vec(prop::collection::vec(-500.0f64..500.0, 1..4), 1..20)
    ) {
        let lo = raw.iter().flatten().cloned().fold(f64::INFINITY, f64::min);
        let hi = raw.iter().flatten().cloned().fold(f64::NEG_INFINITY, f64::max);
        let range = hi - lo;
        let axes = line_axes(&dataset(raw)).unwrap();
        prop_assert!((axes.y.min - (lo - 0.4 * range)).abs() < 1e-9);
        prop_assert!((axes.y.max - (hi + 0.4 * range)).abs() < 1e-9);
    }
}
