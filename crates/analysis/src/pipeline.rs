//! End-to-end field analysis
//!
//! Composes the three stages: band pair in, index grid plus report out.

use verdant_core::grid::Grid;
use verdant_core::Result;

use crate::classify::{classify_health, HealthThresholds};
use crate::index::ndvi;
use crate::report::{build_report, HealthReport};

/// Product of one analysis run: the per-pixel index grid for
/// visualization plus the summary report.
#[derive(Debug, Clone)]
pub struct FieldAnalysis {
    pub index: Grid<f64>,
    pub report: HealthReport,
}

/// Analyze a red/near-infrared band pair.
///
/// The only error path is a shape mismatch between the bands; every
/// degenerate numeric case (zero denominators, empty grids, nothing
/// vegetated) resolves to defined values.
pub fn analyze_field(
    red: &Grid<f64>,
    nir: &Grid<f64>,
    thresholds: HealthThresholds,
) -> Result<FieldAnalysis> {
    let index = ndvi(nir, red)?;
    let counts = classify_health(&index, thresholds);
    let report = build_report(&index, &counts, thresholds);

    Ok(FieldAnalysis { index, report })
}
