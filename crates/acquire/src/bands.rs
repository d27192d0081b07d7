//! Band pairs and the acquisition capability.

use verdant_core::grid::Grid;
use verdant_core::Error;

use crate::error::Result;
use crate::request::SceneRequest;

/// A validated red/near-infrared reflectance pair.
///
/// Construction enforces the one invariant the analysis engine relies
/// on at its boundary: both bands share identical dimensions.
#[derive(Debug, Clone)]
pub struct BandPair {
    red: Grid<f64>,
    nir: Grid<f64>,
}

impl BandPair {
    /// Pair two bands, rejecting mismatched shapes.
    pub fn new(red: Grid<f64>, nir: Grid<f64>) -> Result<Self> {
        if red.shape() != nir.shape() {
            return Err(Error::ShapeMismatch {
                er: red.rows(),
                ec: red.cols(),
                ar: nir.rows(),
                ac: nir.cols(),
            }
            .into());
        }
        Ok(Self { red, nir })
    }

    /// Red reflectance band
    pub fn red(&self) -> &Grid<f64> {
        &self.red
    }

    /// Near-infrared reflectance band
    pub fn nir(&self) -> &Grid<f64> {
        &self.nir
    }

    /// Dimensions as (rows, cols), shared by both bands
    pub fn shape(&self) -> (usize, usize) {
        self.red.shape()
    }

    /// Consume the pair and return (red, nir)
    pub fn into_parts(self) -> (Grid<f64>, Grid<f64>) {
        (self.red, self.nir)
    }
}

/// Capability that supplies a band pair for a scene request.
///
/// Implementations decide where the bands come from (a remote catalog,
/// a synthetic generator, a chain with fallback); the analysis engine
/// never knows which one served a request.
pub trait BandSource {
    fn acquire(&self, request: &SceneRequest) -> Result<BandPair>;
}
