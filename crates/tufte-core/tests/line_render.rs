// File: crates/tufte-core/tests/line_render.rs
// Purpose: End-to-end line rendering: one path per layer, edge-to-edge runs, no legend.

use tufte_core::geometry::Point;
use tufte_core::surface::LineJoin;
use tufte_core::{dataset, Chart, ChartOptions, LabelKind, RecordingSurface};

#[test]
fn single_series_runs_from_left_edge_to_right_edge() {
    // y = [0 - 4, 10 + 4] over 180px => 10px per unit, y(v) = 180 - (v + 4) * 10
    let options = ChartOptions::new(dataset([0.0, 10.0]));
    let mut surface = RecordingSurface::new(200.0, 180.0);
    Chart::line(options.clone()).render(&mut surface).unwrap();

    assert_eq!(surface.paths.len(), 1);
    let path = &surface.paths[0];
    assert_eq!(
        path.points,
        vec![
            Point::new(0.0, 140.0),
            Point::new(50.0, 140.0),
            Point::new(150.0, 40.0),
            Point::new(200.0, 40.0),
        ]
    );
    assert_eq!(path.style.stroke, options.colors[0]);
    assert_eq!(path.style.stroke_width, 4.0);
    assert_eq!(path.style.join, LineJoin::Round);
}

#[test]
fn each_layer_is_its_own_series() {
    let options = ChartOptions::new(dataset([vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]))
        .with_line_width(2.0);
    let mut surface = RecordingSurface::new(300.0, 100.0);
    Chart::line(options.clone()).render(&mut surface).unwrap();

    assert_eq!(surface.paths.len(), 2);
    for (i, path) in surface.paths.iter().enumerate() {
        // move_to, three points, right-edge continuation
        assert_eq!(path.points.len(), 5);
        assert_eq!(path.points[0].x, 0.0);
        assert_eq!(path.points[0].y, path.points[1].y);
        assert_eq!(path.points[4].x, 300.0);
        assert_eq!(path.points[4].y, path.points[3].y);
        assert_eq!(path.style.stroke, options.colors[i]);
        assert_eq!(path.style.stroke_width, 2.0);
    }
    // series 1 is above series 0 everywhere (smaller pixel y)
    assert!(surface.paths[1].points[2].y < surface.paths[0].points[2].y);
}

#[test]
fn line_draws_no_rects_labels_or_legend() {
    let options = ChartOptions::new(dataset([1.0, 2.0])).with_legend(["a", "b"]);
    let mut surface = RecordingSurface::new(100.0, 100.0);
    Chart::line(options).render(&mut surface).unwrap();

    assert!(surface.rects.is_empty());
    assert!(surface.labels(LabelKind::Bar).is_empty());
    assert!(surface.legend().is_none());
}

#[test]
fn negative_values_are_fine_for_lines() {
    let options = ChartOptions::new(dataset([-5.0, -1.0, -3.0]));
    let mut surface = RecordingSurface::new(90.0, 90.0);
    let axes = Chart::line(options).render(&mut surface).unwrap();
    assert!(axes.y.min < -5.0 && axes.y.max > -1.0);
}

#[test]
fn constant_series_is_flat_through_the_middle() {
    let options = ChartOptions::new(dataset([7.0, 7.0, 7.0]));
    let mut surface = RecordingSurface::new(120.0, 80.0);
    Chart::line(options).render(&mut surface).unwrap();

    let path = &surface.paths[0];
    assert!(path.points.iter().all(|p| p.y == 40.0));
    assert_eq!(path.points.last().map(|p| p.x), Some(120.0));
}
