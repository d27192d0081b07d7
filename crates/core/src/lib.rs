//! # Verdant Core
//!
//! Core types for the Verdant vegetation-health analysis engine.
//!
//! This crate provides:
//! - `Grid<T>`: Generic 2D grid type backing reflectance bands and index grids
//! - `GridElement`: Trait bounding usable cell value types
//! - `BBox`: Area-of-interest geometry and grid sizing
//! - Shared error types

pub mod aoi;
pub mod element;
pub mod error;
pub mod grid;

pub use aoi::BBox;
pub use element::GridElement;
pub use error::{Error, Result};
pub use grid::{Grid, GridStatistics};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::aoi::BBox;
    pub use crate::element::GridElement;
    pub use crate::error::{Error, Result};
    pub use crate::grid::Grid;
}
