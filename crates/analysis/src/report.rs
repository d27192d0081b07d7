//! Field health report
//!
//! Last stage of the pipeline: aggregates class counts and the index
//! grid into the summary consumed by dashboards and alerting.

use serde::{Deserialize, Serialize};
use verdant_core::grid::Grid;

use crate::classify::{HealthCounts, HealthThresholds};

/// Stressed share of vegetated pixels, in percent, above which a field
/// is flagged as high stress.
pub const HIGH_STRESS_PCT: f64 = 30.0;

/// Summary of one field analysis.
///
/// Percentages and the mean are taken over vegetated pixels only and
/// default to 0 when nothing is vegetated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub vegetated: usize,
    pub healthy: usize,
    pub stressed: usize,
    pub unhealthy: usize,
    /// Healthy share of vegetated pixels, in percent.
    pub healthy_pct: f64,
    /// Stressed share of vegetated pixels, in percent.
    pub stressed_pct: f64,
    /// Mean index over vegetated pixels.
    pub mean_index: f64,
    /// Whether `stressed_pct` exceeds [`HIGH_STRESS_PCT`].
    pub high_stress: bool,
}

impl HealthReport {
    /// The report for a scene with no vegetated pixels.
    pub fn zero() -> Self {
        Self {
            vegetated: 0,
            healthy: 0,
            stressed: 0,
            unhealthy: 0,
            healthy_pct: 0.0,
            stressed_pct: 0.0,
            mean_index: 0.0,
            high_stress: false,
        }
    }
}

/// Build the summary report for an index grid and its class counts.
///
/// `counts` must have been produced from `index` with the same
/// `thresholds`; the mean is averaged over the pixels the vegetated
/// count covers.
pub fn build_report(
    index: &Grid<f64>,
    counts: &HealthCounts,
    thresholds: HealthThresholds,
) -> HealthReport {
    if counts.vegetated == 0 {
        return HealthReport {
            unhealthy: counts.unhealthy,
            ..HealthReport::zero()
        };
    }

    let vegetated = counts.vegetated as f64;
    let healthy_pct = counts.healthy as f64 / vegetated * 100.0;
    let stressed_pct = counts.stressed as f64 / vegetated * 100.0;

    let sum: f64 = index
        .data()
        .iter()
        .copied()
        .filter(|v| *v > thresholds.stressed)
        .sum();

    HealthReport {
        vegetated: counts.vegetated,
        healthy: counts.healthy,
        stressed: counts.stressed,
        unhealthy: counts.unhealthy,
        healthy_pct,
        stressed_pct,
        mean_index: sum / vegetated,
        high_stress: stressed_pct > HIGH_STRESS_PCT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify_health;
    use approx::assert_relative_eq;

    fn report_for(values: Vec<f64>, rows: usize, cols: usize) -> HealthReport {
        let index = Grid::from_vec(values, rows, cols).unwrap();
        let thresholds = HealthThresholds::default();
        let counts = classify_health(&index, thresholds);
        build_report(&index, &counts, thresholds)
    }

    #[test]
    fn test_single_healthy_pixel() {
        let report = report_for(vec![0.8], 1, 1);

        assert_eq!(report.vegetated, 1);
        assert_eq!(report.healthy, 1);
        assert_eq!(report.stressed, 0);
        assert_eq!(report.unhealthy, 0);
        assert_relative_eq!(report.healthy_pct, 100.0);
        assert_relative_eq!(report.stressed_pct, 0.0);
        assert_relative_eq!(report.mean_index, 0.8);
        assert!(!report.high_stress);
    }

    #[test]
    fn test_zero_index_yields_zero_report() {
        let report = report_for(vec![0.0], 1, 1);

        assert_eq!(report, HealthReport::zero());
    }

    #[test]
    fn test_half_stressed_raises_alert() {
        let report = report_for(vec![0.9, 0.5, 0.1, -0.1], 2, 2);

        assert_eq!(report.healthy, 1);
        assert_eq!(report.vegetated, 2);
        assert_eq!(report.stressed, 1);
        assert_eq!(report.unhealthy, 1);
        assert_relative_eq!(report.stressed_pct, 50.0);
        assert!(report.high_stress);
    }

    #[test]
    fn test_percentages_sum_to_hundred() {
        let report = report_for(
            vec![0.9, 0.8, 0.75, 0.62, 0.55, 0.4, 0.33, 0.25, 0.21],
            3,
            3,
        );

        assert!(report.vegetated > 0);
        assert_relative_eq!(
            report.healthy_pct + report.stressed_pct,
            100.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_no_vegetation_keeps_unhealthy_count() {
        let report = report_for(vec![0.1, 0.15, -0.2, 0.0], 2, 2);

        assert_eq!(report.vegetated, 0);
        assert_eq!(report.unhealthy, 2);
        assert_eq!(report.healthy_pct, 0.0);
        assert_eq!(report.stressed_pct, 0.0);
        assert_eq!(report.mean_index, 0.0);
        assert!(!report.high_stress);
    }

    #[test]
    fn test_alert_boundary_is_strict() {
        // 3 of 10 vegetated pixels stressed: exactly 30 percent, no alert
        let mut values = vec![0.9; 7];
        values.extend([0.3, 0.3, 0.3]);
        let report = report_for(values, 2, 5);

        assert_relative_eq!(report.stressed_pct, 30.0);
        assert!(!report.high_stress);

        // 4 of 10 stressed: 40 percent, alert
        let mut values = vec![0.9; 6];
        values.extend([0.3, 0.3, 0.3, 0.3]);
        let report = report_for(values, 2, 5);

        assert_relative_eq!(report.stressed_pct, 40.0);
        assert!(report.high_stress);
    }

    #[test]
    fn test_mean_over_vegetated_only() {
        // Mean ignores the 0.1 and -0.5 pixels
        let report = report_for(vec![0.9, 0.3, 0.1, -0.5], 2, 2);

        assert_relative_eq!(report.mean_index, 0.6, epsilon = 1e-12);
    }
}
