// File: crates/tufte-core/tests/transform.rs
// Purpose: Validate value-to-pixel mapping, vertical inversion and the degenerate-axis policy.

use proptest::prelude::*;
use tufte_core::{Axes, Axis, Transform};

fn axes(x: (f64, f64), y: (f64, f64), w: f64, h: f64) -> Axes {
    Axes { x: Axis::new(x.0, x.1), y: Axis::new(y.0, y.1) }.with_pixel_lengths(w, h)
}

#[test]
fn maps_endpoints_and_midpoints() {
    let t = Transform::new(&axes((0.0, 4.0), (0.0, 10.0), 400.0, 200.0));
    assert_eq!(t.x(0.0), 0.0);
    assert_eq!(t.x(2.0), 200.0);
    assert_eq!(t.y(0.0), 200.0);
    assert_eq!(t.y(10.0), 0.0);
    assert_eq!(t.y(5.0), 100.0);
}

#[test]
fn deltas_ignore_axis_offset() {
    let t = Transform::new(&axes((0.0, 4.0), (-10.0, 10.0), 400.0, 200.0));
    assert_eq!(t.w(1.0), 100.0);
    assert_eq!(t.h(5.0), 50.0);
    assert_eq!(t.y(0.0), 100.0);
}

#[test]
fn degenerate_axis_maps_to_mid_pixel() {
    let t = Transform::new(&axes((0.0, 3.0), (7.0, 7.0), 300.0, 120.0));
    assert_eq!(t.y(7.0), 60.0);
    assert_eq!(t.y(1_000.0), 60.0);
    assert_eq!(t.h(5.0), 0.0);
    assert!(t.x(1.5).is_finite());
}

proptest! {
    #[test]
    fn prop_endpoints_hit_surface_edges(
        min in -1e6f64..1e6,
        span in 1e-3f64..1e6,
        px in 1.0f64..4096.0,
    ) {
        let max = min + span;
        let t = Transform::new(&axes((min, max), (min, max), px, px));
        let tol = 1e-6 * px;
        prop_assert!(t.x(min).abs() <= tol);
        prop_assert!((t.x(max) - px).abs() <= tol);
        prop_assert!((t.y(min) - px).abs() <= tol);
        prop_assert!(t.y(max).abs() <= tol);
    }
}
