//! Area-of-interest geometry.
//!
//! Maps a geographic bounding box and a target ground resolution to the
//! pixel dimensions of the grids requested for it.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Meters per degree of latitude (WGS84 mean).
const METERS_PER_DEGREE: f64 = 111_320.0;

/// A geographic bounding box in WGS84 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BBox {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self { min_x, min_y, max_x, max_y }
    }

    /// Check if two bboxes intersect.
    pub fn intersects(&self, other: &BBox) -> bool {
        self.min_x < other.max_x
            && self.max_x > other.min_x
            && self.min_y < other.max_y
            && self.max_y > other.min_y
    }

    /// Center as (lon, lat).
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// East-west extent in meters (equirectangular approximation,
    /// evaluated at the center latitude).
    pub fn width_m(&self) -> f64 {
        let (_, lat) = self.center();
        (self.max_x - self.min_x) * METERS_PER_DEGREE * lat.to_radians().cos()
    }

    /// North-south extent in meters.
    pub fn height_m(&self) -> f64 {
        (self.max_y - self.min_y) * METERS_PER_DEGREE
    }

    /// Pixel dimensions (rows, cols) of this bbox at the given ground
    /// resolution in meters per pixel. Clamped to at least 1x1 so a
    /// degenerate bbox still yields a usable grid.
    pub fn dimensions(&self, resolution_m: f64) -> Result<(usize, usize)> {
        if !resolution_m.is_finite() || resolution_m <= 0.0 {
            return Err(Error::InvalidParameter {
                name: "resolution_m",
                value: resolution_m.to_string(),
                reason: "must be a positive, finite number of meters".to_string(),
            });
        }

        let rows = (self.height_m() / resolution_m).round().max(1.0) as usize;
        let cols = (self.width_m() / resolution_m).round().max(1.0) as usize;

        Ok((rows, cols))
    }
}
