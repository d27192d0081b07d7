//! Scene requests.
//!
//! Everything a source needs to serve one acquisition, passed
//! explicitly per call. There is no ambient session state anywhere in
//! the engine; a dashboard builds one of these per user action.

use serde::{Deserialize, Serialize};
use verdant_core::aoi::BBox;

/// One scene acquisition request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneRequest {
    /// Field boundary as a WGS84 bounding box.
    pub bbox: BBox,

    /// ISO 8601 date or `start/end` range (e.g. `"2024-06-01"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datetime: Option<String>,

    /// Ground resolution in meters per pixel.
    pub resolution: f64,
}

impl SceneRequest {
    /// Create a request with no date filter.
    pub fn new(bbox: BBox, resolution: f64) -> Self {
        Self {
            bbox,
            datetime: None,
            resolution,
        }
    }

    /// Set the datetime or datetime range.
    pub fn datetime(mut self, dt: &str) -> Self {
        self.datetime = Some(dt.to_string());
        self
    }

    /// Pixel dimensions (rows, cols) the acquired bands must have.
    pub fn grid_shape(&self) -> verdant_core::Result<(usize, usize)> {
        self.bbox.dimensions(self.resolution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let request = SceneRequest::new(BBox::new(78.0, 20.0, 78.05, 20.05), 10.0)
            .datetime("2024-06-01");

        assert_eq!(request.datetime.as_deref(), Some("2024-06-01"));
        let (rows, cols) = request.grid_shape().unwrap();
        assert!(rows > 0 && cols > 0);
    }

    #[test]
    fn test_serializes_without_empty_datetime() {
        let request = SceneRequest::new(BBox::new(0.0, 0.0, 1.0, 1.0), 10.0);
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("datetime"));
    }
}
