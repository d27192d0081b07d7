//! Vegetation health classification
//!
//! Partitions an index grid into healthy / stressed / unhealthy pixel
//! counts using two index cutoffs.

use serde::{Deserialize, Serialize};
use verdant_core::grid::Grid;
use verdant_core::{Error, Result};

/// Index cutoffs separating the health classes.
///
/// A pixel is *vegetated* when its index exceeds `stressed`, and
/// *healthy* when it also exceeds `healthy`. Pixels with an index at or
/// below zero (open water, bare soil) belong to no class at all.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthThresholds {
    /// Vegetation cutoff: index values above this are vegetated.
    pub stressed: f64,
    /// Vigor cutoff: vegetated values above this are healthy.
    pub healthy: f64,
}

impl Default for HealthThresholds {
    fn default() -> Self {
        Self {
            stressed: 0.2,
            healthy: 0.6,
        }
    }
}

impl HealthThresholds {
    /// Create custom thresholds. The stressed cutoff must lie strictly
    /// below the healthy cutoff.
    pub fn new(stressed: f64, healthy: f64) -> Result<Self> {
        if !(stressed < healthy) {
            return Err(Error::InvalidParameter {
                name: "stressed",
                value: stressed.to_string(),
                reason: format!("must be below the healthy cutoff ({})", healthy),
            });
        }
        Ok(Self { stressed, healthy })
    }
}

/// Pixel counts per health class.
///
/// `healthy + stressed == vegetated` holds for every input, and
/// `unhealthy` is disjoint from the vegetated classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthCounts {
    /// Pixels with index above the stressed cutoff.
    pub vegetated: usize,
    /// Pixels with index above the healthy cutoff.
    pub healthy: usize,
    /// Vegetated pixels that are not healthy.
    pub stressed: usize,
    /// Pixels with index in (0, stressed].
    pub unhealthy: usize,
}

impl HealthCounts {
    /// All-zero counts, the result for empty or fully non-vegetated grids.
    pub fn zero() -> Self {
        Self {
            vegetated: 0,
            healthy: 0,
            stressed: 0,
            unhealthy: 0,
        }
    }
}

/// Count pixels per health class.
///
/// Single sequential pass; `stressed` is derived as
/// `vegetated - healthy` rather than counted separately. Non-finite
/// values are counted in no class.
pub fn classify_health(index: &Grid<f64>, thresholds: HealthThresholds) -> HealthCounts {
    let mut vegetated = 0usize;
    let mut healthy = 0usize;
    let mut unhealthy = 0usize;

    for &value in index.data().iter() {
        if !value.is_finite() {
            continue;
        }

        if value > thresholds.stressed {
            vegetated += 1;
            if value > thresholds.healthy {
                healthy += 1;
            }
        } else if value > 0.0 {
            unhealthy += 1;
        }
    }

    HealthCounts {
        vegetated,
        healthy,
        stressed: vegetated - healthy,
        unhealthy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_of(values: Vec<f64>, rows: usize, cols: usize) -> Grid<f64> {
        Grid::from_vec(values, rows, cols).unwrap()
    }

    #[test]
    fn test_mixed_grid() {
        let index = grid_of(vec![0.9, 0.5, 0.1, -0.1], 2, 2);
        let counts = classify_health(&index, HealthThresholds::default());

        assert_eq!(counts.healthy, 1);
        assert_eq!(counts.vegetated, 2);
        assert_eq!(counts.stressed, 1);
        assert_eq!(counts.unhealthy, 1);
    }

    #[test]
    fn test_counts_are_consistent() {
        let index = grid_of(
            vec![0.85, 0.61, 0.6, 0.45, 0.21, 0.2, 0.05, 0.0, -0.4],
            3,
            3,
        );
        let counts = classify_health(&index, HealthThresholds::default());

        assert_eq!(counts.healthy + counts.stressed, counts.vegetated);
        // 0.0 and -0.4 land in no class
        assert_eq!(
            counts.vegetated + counts.unhealthy,
            index.len() - 2,
        );
    }

    #[test]
    fn test_cutoff_boundaries() {
        // Exactly at a cutoff means below it: 0.2 is unhealthy,
        // 0.6 is stressed, 0.0 is unclassified.
        let index = grid_of(vec![0.2, 0.6, 0.0], 1, 3);
        let counts = classify_health(&index, HealthThresholds::default());

        assert_eq!(counts.unhealthy, 1);
        assert_eq!(counts.vegetated, 1);
        assert_eq!(counts.healthy, 0);
        assert_eq!(counts.stressed, 1);
    }

    #[test]
    fn test_all_negative() {
        let index = Grid::filled(4, 4, -0.3);
        let counts = classify_health(&index, HealthThresholds::default());

        assert_eq!(counts, HealthCounts::zero());
    }

    #[test]
    fn test_all_zero() {
        let index: Grid<f64> = Grid::new(5, 5);
        let counts = classify_health(&index, HealthThresholds::default());

        assert_eq!(counts, HealthCounts::zero());
    }

    #[test]
    fn test_empty_grid() {
        let index: Grid<f64> = Grid::new(0, 0);
        let counts = classify_health(&index, HealthThresholds::default());

        assert_eq!(counts, HealthCounts::zero());
    }

    #[test]
    fn test_non_finite_skipped() {
        let index = grid_of(vec![f64::NAN, 0.8, f64::INFINITY, 0.1], 2, 2);
        let counts = classify_health(&index, HealthThresholds::default());

        assert_eq!(counts.vegetated, 1);
        assert_eq!(counts.healthy, 1);
        assert_eq!(counts.unhealthy, 1);
    }

    #[test]
    fn test_custom_thresholds() {
        let index = grid_of(vec![0.35, 0.15], 1, 2);
        let thresholds = HealthThresholds::new(0.1, 0.3).unwrap();
        let counts = classify_health(&index, thresholds);

        assert_eq!(counts.healthy, 1);
        assert_eq!(counts.vegetated, 2);
        assert_eq!(counts.stressed, 1);
        assert_eq!(counts.unhealthy, 0);
    }

    #[test]
    fn test_threshold_ordering_enforced() {
        assert!(HealthThresholds::new(0.6, 0.2).is_err());
        assert!(HealthThresholds::new(0.4, 0.4).is_err());
        assert!(HealthThresholds::new(f64::NAN, 0.5).is_err());
        assert!(HealthThresholds::new(0.2, 0.6).is_ok());
    }
}
