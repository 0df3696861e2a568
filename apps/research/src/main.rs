use std::env;
use std::error::Error;

use serde::Serialize;

use fractal::{ComparisonParams, FractalParams, LatticePoint, generate_fractal_points};
use metrics::{
    HeatmapConfig, compute_dimension_heatmap, difference_points, fractal_dimension,
    fractal_distance, intersect_points, theoretical_dimension,
};

#[derive(Debug, Serialize)]
struct GenerationReport {
    order: i64,
    katz: f64,
    origin: String,
    point_count: usize,
    dimension: f64,
    theoretical_dimension: f64,
}

#[derive(Debug, Serialize)]
struct ComparisonReport {
    a: GenerationReport,
    b: GenerationReport,
    hausdorff_distance: f64,
    tolerance: i64,
    shared_points: usize,
    only_in_a: usize,
}

#[derive(Debug, Serialize)]
struct PointRow {
    x: i64,
    y: i64,
}

fn main() -> Result<(), Box<dyn Error>> {
    fractal::init_logging();

    let mode = env::var("FAREY_MODE")
        .unwrap_or_else(|_| "single".to_string())
        .to_ascii_lowercase();
    match mode.as_str() {
        "dual" => run_dual()?,
        "heatmap" => run_heatmap()?,
        _ => run_single()?,
    }

    println!("farey research run done");
    Ok(())
}

fn run_single() -> Result<(), Box<dyn Error>> {
    let params = match env::var("FAREY_CONFIG") {
        Ok(path) => FractalParams::from_yaml_file(path)?,
        Err(_) => FractalParams::default(),
    };

    let points = generate_fractal_points(&params)?;
    let report = generation_report(&params, &points);
    println!("{}", serde_json::to_string_pretty(&report)?);

    if let Ok(path) = env::var("FAREY_EXPORT") {
        export_points(&path, &points)?;
        println!("exported {} points to {path}", points.len());
    }
    Ok(())
}

fn run_dual() -> Result<(), Box<dyn Error>> {
    let params = match env::var("FAREY_CONFIG") {
        Ok(path) => ComparisonParams::from_yaml_file(path)?,
        Err(_) => ComparisonParams::default(),
    };
    let tolerance: i64 = env::var("FAREY_TOL")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(1);

    let points_a = generate_fractal_points(&params.a)?;
    let points_b = generate_fractal_points(&params.b)?;

    let report = ComparisonReport {
        a: generation_report(&params.a, &points_a),
        b: generation_report(&params.b, &points_b),
        hausdorff_distance: fractal_distance(&points_a, &points_b),
        tolerance,
        shared_points: intersect_points(&points_a, &points_b, tolerance)?.len(),
        only_in_a: difference_points(&points_a, &points_b, tolerance)?.len(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn run_heatmap() -> Result<(), Box<dyn Error>> {
    let config = HeatmapConfig::default();
    let heatmap = compute_dimension_heatmap(&config)?;
    println!("{}", serde_json::to_string_pretty(&heatmap)?);
    Ok(())
}

fn generation_report(params: &FractalParams, points: &[LatticePoint]) -> GenerationReport {
    GenerationReport {
        order: params.order,
        katz: params.katz,
        origin: params.origin.as_str().to_string(),
        point_count: points.len(),
        dimension: fractal_dimension(points),
        theoretical_dimension: theoretical_dimension(params.order, params.katz),
    }
}

fn export_points(path: &str, points: &[LatticePoint]) -> Result<(), Box<dyn Error>> {
    let mut writer = csv::Writer::from_path(path)?;
    for point in points {
        writer.serialize(PointRow {
            x: point.x,
            y: point.y,
        })?;
    }
    writer.flush()?;
    Ok(())
}
