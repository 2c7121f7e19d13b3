use crate::calibrate::CalibrationTargets;
use crate::error::LocatorResult;
use crate::evidence::Evidence;
use crate::locator::LocatorParams;
use crate::types::Point2D;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Scenario file consumed by `locate_demo`. Coordinates are projected metres.
#[derive(Debug, Deserialize)]
pub struct ScenarioConfig {
    pub river: Vec<Point2D>,
    pub satellite_path: Vec<Point2D>,
    pub gate: Point2D,
    #[serde(default)]
    pub targets: CalibrationTargets,
    #[serde(default)]
    pub locator: LocatorParams,
    #[serde(default)]
    pub output: OutputConfig,
}

impl ScenarioConfig {
    pub fn evidence(&self) -> LocatorResult<Evidence> {
        Evidence::new(
            self.river.clone(),
            self.satellite_path.clone(),
            self.gate,
            self.targets,
        )
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Where to write the JSON report; printed to stdout when absent.
    pub json_out: Option<PathBuf>,
    /// Optional grayscale PNG of the fused field (north up).
    pub heatmap_png: Option<PathBuf>,
    /// Number of weighted samples to include for heat-map layers.
    pub samples: usize,
    pub sample_seed: u64,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            json_out: None,
            heatmap_png: None,
            samples: 0,
            sample_seed: 0x5eed,
        }
    }
}

pub fn load_config(path: &Path) -> Result<ScenarioConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

pub fn parse_config(data: &str) -> Result<ScenarioConfig, serde_json::Error> {
    serde_json::from_str(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_uses_defaults() {
        let cfg = parse_config(
            r#"{
                "river": [{"x": 0.0, "y": 0.0}, {"x": 100.0, "y": 0.0}],
                "satellite_path": [{"x": 0.0, "y": -50.0}, {"x": 0.0, "y": 50.0}],
                "gate": {"x": 10.0, "y": 10.0}
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.targets, CalibrationTargets::default());
        assert_eq!(cfg.locator.grid.step_m, 100.0);
        assert_eq!(cfg.locator.extract.credible_levels, vec![0.5, 0.9]);
        assert!(cfg.output.json_out.is_none());
        assert!(cfg.evidence().is_ok());
    }

    #[test]
    fn overrides_are_applied() {
        let cfg = parse_config(
            r#"{
                "river": [{"x": 0.0, "y": 0.0}, {"x": 100.0, "y": 0.0}],
                "satellite_path": [{"x": 0.0, "y": -50.0}],
                "gate": {"x": 10.0, "y": 10.0},
                "targets": {
                    "river": {"half_width": 1000.0},
                    "gate": {"mean": 20.0, "mode": 10.0},
                    "satellite": {"half_width": 500.0, "coverage": 0.9}
                },
                "locator": {"grid": {"step_m": 25.0}, "refine": {"levels": 0}},
                "output": {"samples": 100}
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.targets.river.coverage, 0.95);
        assert_eq!(cfg.targets.satellite.coverage, 0.9);
        assert_eq!(cfg.locator.grid.step_m, 25.0);
        assert_eq!(cfg.locator.refine.levels, 0);
        assert_eq!(cfg.output.samples, 100);
        assert_eq!(cfg.output.sample_seed, 0x5eed);
        // A single-vertex satellite track is rejected when building evidence.
        assert!(cfg.evidence().is_err());
    }
}
