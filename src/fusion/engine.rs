//! Evaluate phase: sample every source and the fused product on the grid.

use super::field::DensityField;
use super::grid::Grid;
use crate::evidence::{EvidenceSet, SourceKind};
use log::debug;
use rayon::prelude::*;
use std::time::Instant;

/// Per-source fields plus their product, all on the same grid.
#[derive(Clone, Debug)]
pub struct EvaluatedFields {
    pub sources: Vec<(SourceKind, DensityField)>,
    pub fused: DensityField,
    pub elapsed_ms: f64,
}

impl EvaluatedFields {
    pub fn source(&self, kind: SourceKind) -> Option<&DensityField> {
        self.sources
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, field)| field)
    }
}

/// Samples the three sources at every grid point and multiplies them.
///
/// Rows are independent, so with `parallel` they are split across the rayon
/// pool; every value is written at its own grid index and the output does not
/// depend on scheduling.
pub fn evaluate(set: &EvidenceSet, grid: &Grid, parallel: bool) -> EvaluatedFields {
    let start = Instant::now();
    let columns = grid.columns();
    let mut samples = vec![[0.0f64; 4]; grid.len()];

    let fill_row = |(row, chunk): (usize, &mut [[f64; 4]])| {
        for (col, slot) in chunk.iter_mut().enumerate() {
            let p = grid.point(col, row);
            let [r, g, s] = set.densities(&p);
            *slot = [r, g, s, r * g * s];
        }
    };
    if parallel {
        samples
            .par_chunks_mut(columns)
            .enumerate()
            .for_each(fill_row);
    } else {
        samples.chunks_mut(columns).enumerate().for_each(fill_row);
    }

    let channel = |i: usize| -> DensityField {
        DensityField::new(*grid, samples.iter().map(|s| s[i]).collect())
    };
    let sources = set
        .sources
        .iter()
        .enumerate()
        .map(|(i, src)| (src.kind(), channel(i)))
        .collect();
    let fused = channel(3);
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    debug!(
        "fusion::evaluate grid={}x{} parallel={} elapsed_ms={:.3}",
        grid.columns(),
        grid.rows(),
        parallel,
        elapsed_ms
    );
    EvaluatedFields {
        sources,
        fused,
        elapsed_ms,
    }
}

/// Samples a single source; used for per-source maps.
pub fn evaluate_source(set: &EvidenceSet, kind: SourceKind, grid: &Grid) -> DensityField {
    let source = set.get(kind);
    let values = (0..grid.len())
        .into_par_iter()
        .map(|idx| source.density(&grid.point_at(idx)))
        .collect();
    DensityField::new(*grid, values)
}
