//! Locator pipeline driving calibration, grid fusion and extraction.
//!
//! Typical usage:
//! ```no_run
//! use evidence_locator::{Evidence, Locator, LocatorParams};
//!
//! # fn example(evidence: Evidence) -> Result<(), evidence_locator::LocatorError> {
//! let locator = Locator::new(LocatorParams::default());
//! let report = locator.locate(&evidence)?;
//! if let Some(mode) = report.result.mode {
//!     println!("most probable point: ({:.0}, {:.0})", mode.x, mode.y);
//! }
//! # Ok(())
//! # }
//! ```
use super::params::LocatorParams;
use crate::diagnostics::{GridDescriptor, LocationReport, SourceSummary, TimingBreakdown};
use crate::error::LocatorResult;
use crate::evidence::{Evidence, EvidenceSet, EvidenceSource, SourceKind};
use crate::fusion::{
    construct_grid, credible_regions, evaluate, evaluate_source, extract_mode, refine_mode,
    DensityField, EvaluatedFields, Grid,
};
use crate::types::{LocationResult, Point2D};
use log::debug;
use std::time::Instant;

/// Runs Construct → Evaluate → Extract (→ Refine) over calibrated evidence.
pub struct Locator {
    params: LocatorParams,
}

impl Locator {
    pub fn new(params: LocatorParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &LocatorParams {
        &self.params
    }

    /// Calibrates `evidence` and runs the full pipeline.
    pub fn locate(&self, evidence: &Evidence) -> LocatorResult<LocationReport> {
        self.locate_with_fields(evidence).map(|(report, _)| report)
    }

    /// Like [`Locator::locate`], but also hands back the evaluated fields so
    /// callers rendering heat maps do not sample the grid a second time.
    pub fn locate_with_fields(
        &self,
        evidence: &Evidence,
    ) -> LocatorResult<(LocationReport, EvaluatedFields)> {
        let mut timing = TimingBreakdown::default();
        let total_start = Instant::now();
        let set = timing.time("calibrate", || evidence.calibrate())?;
        let (mut report, fields) = self.run(&set)?;
        timing.stages.append(&mut report.timing.stages);
        timing.total_ms = total_start.elapsed().as_secs_f64() * 1000.0;
        report.result.latency_ms = timing.total_ms;
        report.timing = timing;
        Ok((report, fields))
    }

    /// Runs the pipeline on an already calibrated evidence set.
    pub fn locate_calibrated(&self, set: &EvidenceSet) -> LocatorResult<LocationReport> {
        self.run(set).map(|(report, _)| report)
    }

    fn run(&self, set: &EvidenceSet) -> LocatorResult<(LocationReport, EvaluatedFields)> {
        let total_start = Instant::now();
        let mut timing = TimingBreakdown::default();

        let grid = timing.time("construct", || construct_grid(set, &self.params.grid))?;
        debug!(
            "Locator::locate grid origin=({:.1}, {:.1}) step={} size={}x{}",
            grid.origin().x,
            grid.origin().y,
            grid.step(),
            grid.columns(),
            grid.rows()
        );

        let fields = evaluate(set, &grid, self.params.grid.parallel);
        timing.push("evaluate", fields.elapsed_ms);

        let extraction = timing.time("extract", || {
            extract_mode(&fields.fused, &self.params.extract)
        });
        let regions = timing.time("regions", || {
            credible_regions(&fields.fused, &self.params.extract.credible_levels)
        });

        let bounds = grid.bounds();
        let refined = extraction.mode.map(|mode| {
            timing.time("refine", || {
                refine_mode(
                    |p| set.fused_density(p),
                    mode,
                    grid.step(),
                    &bounds,
                    &self.params.refine,
                )
            })
        });

        let peak_density = fields
            .fused
            .normalized()
            .and_then(|norm| norm.max());
        let sources = summarize_sources(set, &fields, &extraction.mode);

        timing.total_ms = total_start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "Locator::locate done mode={:?} ties={} warnings={} total_ms={:.3}",
            extraction.mode,
            extraction.ties.len(),
            extraction.warnings.len(),
            timing.total_ms
        );

        let result = LocationResult {
            mode: extraction.mode,
            refined_mode: refined.map(|r| r.point),
            peak_value: refined.map_or(extraction.max_value, |r| r.value),
            reliable: extraction.is_reliable(),
            latency_ms: timing.total_ms,
        };

        let report = LocationReport {
            result,
            grid: GridDescriptor::from(&grid),
            sources,
            ties: extraction.ties,
            tie_centroid: extraction.centroid,
            refined,
            peak_density,
            regions,
            warnings: extraction.warnings,
            timing,
        };
        Ok((report, fields))
    }

    /// Calibrates `evidence`, builds the grid and returns the fused field
    /// together with one field per source, for map layers.
    pub fn evaluate_fields(&self, evidence: &Evidence) -> LocatorResult<EvaluatedFields> {
        let set = evidence.calibrate()?;
        let grid = construct_grid(&set, &self.params.grid)?;
        Ok(evaluate(&set, &grid, self.params.grid.parallel))
    }

    /// Field of a single source on an explicit grid.
    pub fn evaluate_source(
        &self,
        evidence: &Evidence,
        kind: SourceKind,
        grid: &Grid,
    ) -> LocatorResult<DensityField> {
        let set = evidence.calibrate()?;
        Ok(evaluate_source(&set, kind, grid))
    }
}

fn summarize_sources(
    set: &EvidenceSet,
    fields: &EvaluatedFields,
    mode: &Option<Point2D>,
) -> Vec<SourceSummary> {
    set.sources
        .iter()
        .map(|src| {
            let (sigma, mu) = match src {
                EvidenceSource::RiverProximity { params, .. }
                | EvidenceSource::SatellitePath { params, .. } => (params.sigma, None),
                EvidenceSource::GateRadial { params, .. } => (params.sigma, Some(params.mu)),
            };
            SourceSummary {
                kind: src.kind(),
                sigma,
                mu,
                support_radius_m: src.support_radius(),
                grid_max: fields
                    .source(src.kind())
                    .and_then(DensityField::max)
                    .unwrap_or(0.0),
                value_at_mode: mode.as_ref().map(|p| src.density(p)),
            }
        })
        .collect()
}
