//! Example: trace the skeleton of a PNG mask into polylines.
//!
//! Loads an image as 8-bit grayscale, classifies pixels against a threshold,
//! traces the skeleton and optionally simplifies every polyline with
//! Ramer-Douglas-Peucker. Results are written to a JSON file next to the input
//! image; timing is printed to stdout.
//!
//! Run from the workspace root:
//!   cargo run -p skeleton-trace --example trace_png -- --help
//!   cargo run -p skeleton-trace --example trace_png -- --input data/strokes.png --epsilon 1.5

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use image::ImageReader;
use serde::Serialize;
use skeleton_trace::{TraceConfig, fit_polylines, simplify_polyline};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(about = "Trace the skeleton of a binary PNG mask into polylines")]
struct Args {
    /// Path to the input image
    #[arg(long)]
    input: String,

    /// Gray level above which a pixel is "on"
    #[arg(long, default_value_t = 127)]
    threshold: u8,

    /// Treat dark pixels as "on" (dark strokes on a light background)
    #[arg(long)]
    invert: bool,

    /// Optional JSON file with a `TraceConfig`; missing fields take defaults
    #[arg(long)]
    config: Option<String>,

    /// Overrides `min_section_size` from the config
    #[arg(long)]
    min_section_size: Option<usize>,

    /// Overrides `max_recursions` from the config (0 = unbounded)
    #[arg(long)]
    max_recursions: Option<usize>,

    /// Skip Zhang-Suen thinning (input is already one pixel wide)
    #[arg(long)]
    no_thinning: bool,

    /// RDP tolerance in pixels; omit to keep every traced point
    #[arg(long)]
    epsilon: Option<f32>,

    /// Output JSON path (default: <input stem>_skeleton.json next to input)
    #[arg(long)]
    out: Option<String>,
}

// ── JSON DTOs ─────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct PointDto {
    x: f32,
    y: f32,
}

#[derive(Serialize)]
struct PolylineDto {
    /// Traced `(row, col)` pixels.
    pixels: Vec<(usize, usize)>,
    /// Simplified points, `x = col`, `y = row`.
    points: Vec<PointDto>,
}

#[derive(Serialize)]
struct TraceResult {
    width: usize,
    height: usize,
    config: TraceConfig,
    elapsed_ms: f64,
    polylines: Vec<PolylineDto>,
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn load_config(args: &Args) -> Result<TraceConfig> {
    let mut cfg = match &args.config {
        Some(path) => {
            let text =
                std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {path}"))?
        }
        None => TraceConfig::default(),
    };

    if let Some(v) = args.min_section_size {
        cfg.min_section_size = v;
    }
    if let Some(v) = args.max_recursions {
        cfg.max_recursions = v;
    }
    if args.no_thinning {
        cfg.thinning = false;
    }
    Ok(cfg)
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();

    let img_path = &args.input;
    let out_path = args.out.clone().unwrap_or_else(|| {
        let p = Path::new(img_path);
        let stem = p.file_stem().unwrap_or_default().to_string_lossy();
        let dir = p.parent().unwrap_or(Path::new("."));
        dir.join(format!("{stem}_skeleton.json"))
            .to_string_lossy()
            .into_owned()
    });

    let cfg = load_config(&args)?;

    let gray = ImageReader::open(img_path)
        .with_context(|| format!("opening {img_path}"))?
        .decode()
        .with_context(|| format!("decoding {img_path}"))?
        .into_luma8();

    let width = gray.width() as usize;
    let height = gray.height() as usize;
    println!("loaded {img_path}: {width}x{height}");
    println!(
        "config: threshold={}, invert={}, min_section_size={}, max_recursions={}, thinning={}",
        args.threshold, args.invert, cfg.min_section_size, cfg.max_recursions, cfg.thinning
    );

    let threshold = args.threshold;
    let invert = args.invert;
    let t0 = Instant::now();
    let traced = fit_polylines(
        gray.as_raw().as_slice(),
        height,
        width,
        |&v| (v > threshold) != invert,
        &cfg,
    )
    .context("tracing skeleton")?;
    let elapsed_ms = t0.elapsed().as_secs_f64() * 1e3;

    let polylines: Vec<PolylineDto> = traced
        .into_iter()
        .map(|pl| {
            let points = pl.to_polyline2f().points;
            let points = match args.epsilon {
                Some(eps) => simplify_polyline(&points, eps),
                None => points,
            };
            PolylineDto {
                points: points.iter().map(|p| PointDto { x: p.x, y: p.y }).collect(),
                pixels: pl.points,
            }
        })
        .collect();

    let n_points: usize = polylines.iter().map(|pl| pl.points.len()).sum();
    println!(
        "{} polylines, {n_points} points  ({elapsed_ms:.2} ms)",
        polylines.len()
    );

    let result = TraceResult {
        width,
        height,
        config: cfg,
        elapsed_ms,
        polylines,
    };

    let out_file = std::fs::File::create(&out_path).with_context(|| format!("creating {out_path}"))?;
    serde_json::to_writer_pretty(out_file, &result)
        .with_context(|| format!("writing JSON to {out_path}"))?;

    println!("results written to {out_path}");
    Ok(())
}
