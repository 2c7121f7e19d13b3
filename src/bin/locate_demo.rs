use evidence_locator::config::scenario;
use evidence_locator::diagnostics::LocationReport;
use evidence_locator::io::{save_heatmap_png, write_json_file};
use evidence_locator::stages::sample_points;
use evidence_locator::{Locator, Point2D};
use serde::Serialize;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = scenario::load_config(Path::new(&config_path))?;
    let evidence = config.evidence().map_err(|e| e.to_string())?;

    let locator = Locator::new(config.locator.clone());
    let (report, fields) = locator
        .locate_with_fields(&evidence)
        .map_err(|e| e.to_string())?;
    print_text_summary(&report);

    if let Some(path) = &config.output.heatmap_png {
        save_heatmap_png(&fields.fused, path)?;
        println!("Saved posterior heat map to {}", path.display());
    }
    let samples = sample_points(&fields.fused, config.output.samples, config.output.sample_seed);

    let output = DemoOutput {
        report: &report,
        samples,
    };
    match &config.output.json_out {
        Some(path) => {
            write_json_file(path, &output)?;
            println!("JSON report written to {}", path.display());
        }
        None => {
            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| format!("Failed to serialize JSON: {e}"))?;
            println!("{json}");
        }
    }
    Ok(())
}

fn print_text_summary(report: &LocationReport) {
    let res = &report.result;
    println!("Location summary");
    match (res.mode, res.refined_mode) {
        (Some(mode), Some(refined)) => {
            println!("  grid mode: ({:.1}, {:.1})", mode.x, mode.y);
            println!("  refined mode: ({:.1}, {:.1})", refined.x, refined.y);
        }
        (Some(mode), None) => println!("  grid mode: ({:.1}, {:.1})", mode.x, mode.y),
        _ => println!("  no mode (posterior is zero on the grid)"),
    }
    println!("  reliable: {}", res.reliable);
    println!("  latency_ms: {:.3}", res.latency_ms);
    println!(
        "  grid: {}x{} @ {} m",
        report.grid.columns, report.grid.rows, report.grid.step_m
    );
    for src in &report.sources {
        println!(
            "  {:<10} sigma={:.4} support={:.0} m",
            src.kind.label(),
            src.sigma,
            src.support_radius_m
        );
    }
    for region in &report.regions {
        println!(
            "  {:.0}% region: {:.2} km² ({} cells)",
            region.level * 100.0,
            region.area_m2 / 1.0e6,
            region.cell_count
        );
    }
    for warning in &report.warnings {
        println!("  warning: {warning:?}");
    }
}

fn usage() -> String {
    "Usage: locate_demo <scenario.json>".to_string()
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DemoOutput<'a> {
    report: &'a LocationReport,
    samples: Vec<Point2D>,
}
