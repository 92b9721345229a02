// File: crates/tufte-demo/src/main.rs
// Summary: Demo loads a CSV of stacked values plus a JSON chart config and renders bar and line PNGs.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tufte_core::{ChartConfig, ChartKind, DataPoint, Datum};
use tufte_render_skia::{Insets, SkiaOptions, SkiaSurface};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let data_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data");
    let config_path = std::env::args().nth(1).map(PathBuf::from).unwrap_or_else(|| data_dir.join("chart.json"));
    let csv_path = std::env::args().nth(2).map(PathBuf::from).or_else(|| {
        let p = data_dir.join("sales.csv");
        p.exists().then_some(p)
    });

    let raw = std::fs::read_to_string(&config_path)
        .with_context(|| format!("failed to read config '{}'", config_path.display()))?;
    let mut config = ChartConfig::from_json(&raw)
        .with_context(|| format!("invalid config '{}'", config_path.display()))?;

    if let Some(path) = &csv_path {
        let (legend, points) = load_csv(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
        info!(rows = points.len(), path = %path.display(), "loaded dataset");
        config.data = points;
        if config.legend.is_none() {
            config.legend = Some(legend);
        }
    }
    if config.data.is_empty() {
        anyhow::bail!("no data points: pass a CSV file or add \"data\" to the config");
    }

    let out = config.output.clone().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("target/out/chart.png"));

    // Requested kind first, then the other one for comparison.
    let other = match config.kind {
        ChartKind::Bar => ChartKind::Line,
        ChartKind::Line => ChartKind::Bar,
    };
    for kind in [config.kind, other] {
        let path = out_name_with(&out, kind);
        render_to(&config, kind, &path)?;
        info!(path = %path.display(), ?kind, "wrote chart");
    }
    Ok(())
}

fn render_to(config: &ChartConfig, kind: ChartKind, path: &Path) -> Result<()> {
    let mut chart = config.to_chart();
    chart.kind = kind;

    let defaults = SkiaOptions::default();
    let legend = config.legend.iter().flatten().map(String::as_str);
    let opts = SkiaOptions {
        width: config.width.round() as i32,
        height: config.height.round() as i32,
        insets: Insets::for_legend(defaults.font_size, legend),
        ..defaults
    };
    let mut surface = SkiaSurface::new(opts)?;
    chart.render(&mut surface).with_context(|| format!("failed to render {kind:?} chart"))?;
    surface.save_png(path)
}

/// First column is the category label; the rest are stack layers, named by the header.
fn load_csv(path: &Path) -> Result<(Vec<String>, Vec<DataPoint>)> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_path(path)?;
    let legend = rdr.headers()?.iter().skip(1).map(str::to_string).collect();

    let mut points = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let label = rec.get(0).unwrap_or_default().to_string();
        // Coercion is left to the render pass, which reports the offending cell.
        let layers: Vec<Datum> = rec.iter().skip(1).map(Datum::from).collect();
        points.push(DataPoint::new(layers).with_label(label));
    }
    Ok((legend, points))
}

fn out_name_with(base: &Path, kind: ChartKind) -> PathBuf {
    let stem = base.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    let suffix = match kind {
        ChartKind::Bar => "bar",
        ChartKind::Line => "line",
    };
    base.with_file_name(format!("{stem}_{suffix}.png"))
}
