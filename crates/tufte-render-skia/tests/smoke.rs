// File: crates/tufte-render-skia/tests/smoke.rs
// Purpose: Basic end-to-end render through Skia: PNG header, canvas size, bar pixels.

use tufte_core::{dataset, Chart, ChartOptions, Color};
use tufte_render_skia::{render_png, Insets, SkiaOptions, SkiaSurface};

fn opts() -> SkiaOptions {
    SkiaOptions { width: 200, height: 100, insets: Insets::new(10, 40, 20, 30), ..SkiaOptions::default() }
}

#[test]
fn bar_chart_png_has_bars_in_plot_area() {
    let chart = Chart::bar(ChartOptions::new(dataset([10.0, 5.0])).with_legend(["x"]));
    let bytes = render_png(&chart, opts()).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let img = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    assert_eq!(img.dimensions(), (250, 150));

    // middle of the first bar: plot (50, 50) + insets (10, 20)
    let c = Color::from_hex("#07093D").unwrap();
    assert_eq!(img.get_pixel(60, 70).0, [c.r, c.g, c.b, 255]);
    // gap between the two bars stays background
    assert_eq!(img.get_pixel(10 + 100, 20 + 90).0, [255, 255, 255, 255]);
}

#[test]
fn line_chart_writes_png_file() {
    let chart = Chart::line(ChartOptions::new(dataset([vec![1.0, 3.0], vec![2.0, 1.0]])));
    let mut surface = SkiaSurface::new(opts()).expect("surface");
    chart.render(&mut surface).expect("render");

    let out = std::path::PathBuf::from("target/test_out/line.png");
    surface.save_png(&out).expect("save png");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");
}

#[test]
fn render_errors_surface_through_anyhow() {
    let chart = Chart::bar(ChartOptions::new(dataset([0.0])));
    let err = render_png(&chart, opts()).unwrap_err();
    assert!(format!("{err:#}").contains("greater than 0"));
}

#[test]
fn legend_gutter_grows_with_label_length() {
    let short = Insets::for_legend(12.0, ["a", "bb"]);
    let long = Insets::for_legend(12.0, ["a", "a much longer legend label"]);
    assert!(long.right > short.right);
    assert_eq!((long.top, long.bottom, long.left), (short.top, short.bottom, short.left));
    assert_eq!(Insets::for_legend(12.0, Vec::<&str>::new()), Insets::fitted(12.0, 0));
    assert_eq!(Insets::default(), Insets::fitted(12.0, 16));

    let opts = SkiaOptions { width: 200, height: 100, insets: long, ..SkiaOptions::default() };
    let chart = Chart::bar(ChartOptions::new(dataset([1.0])).with_legend(["a much longer legend label"]));
    let bytes = render_png(&chart, opts).expect("render bytes");
    let img = image::load_from_memory(&bytes).expect("decode png");
    assert_eq!(img.width(), 200 + long.horizontal());
    assert_eq!(img.height(), 100 + long.vertical());
}
