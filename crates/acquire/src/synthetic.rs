//! Synthetic scene generation.
//!
//! Serves spatially coherent demo scenes when no real imagery is
//! reachable: a coarse random index field is upsampled to the requested
//! shape with nearest-neighbor interpolation, then inverted into a
//! red/NIR pair at fixed total reflectance. Running the analysis over
//! the pair reproduces the field, so demo scenes exercise exactly the
//! same path as live ones.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use verdant_core::grid::Grid;

use crate::bands::{BandPair, BandSource};
use crate::error::Result;
use crate::request::SceneRequest;

/// Lower bound of the generated index field.
const INDEX_MIN: f64 = -0.2;
/// Upper bound (exclusive) of the generated index field.
const INDEX_MAX: f64 = 0.9;
/// Red + NIR of every synthetic pixel.
const TOTAL_REFLECTANCE: f64 = 0.8;

/// Generator of synthetic band pairs.
#[derive(Debug, Clone)]
pub struct SyntheticGenerator {
    seed: Option<u64>,
    coarse_factor: usize,
}

impl SyntheticGenerator {
    /// Generator seeded from OS entropy: a fresh scene per acquisition.
    pub fn new() -> Self {
        Self {
            seed: None,
            coarse_factor: 20,
        }
    }

    /// Reproducible generator: identical seeds yield identical scenes.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            coarse_factor: 20,
        }
    }

    /// Edge length, in output pixels, of the constant blocks of the
    /// coarse field. Clamped to at least 1.
    pub fn with_coarse_factor(mut self, factor: usize) -> Self {
        self.coarse_factor = factor.max(1);
        self
    }

    /// Generate a band pair of the given dimensions.
    pub fn band_pair(&self, rows: usize, cols: usize) -> Result<BandPair> {
        let field = self.index_field(rows, cols)?;

        let mut red = Vec::with_capacity(rows * cols);
        let mut nir = Vec::with_capacity(rows * cols);
        for &v in field.data().iter() {
            // Inverse of the index formula at fixed total reflectance
            nir.push(TOTAL_REFLECTANCE * (1.0 + v) / 2.0);
            red.push(TOTAL_REFLECTANCE * (1.0 - v) / 2.0);
        }

        BandPair::new(
            Grid::from_vec(red, rows, cols)?,
            Grid::from_vec(nir, rows, cols)?,
        )
    }

    /// The blocky index field the band pair is derived from.
    fn index_field(&self, rows: usize, cols: usize) -> Result<Grid<f64>> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let coarse_rows = (rows / self.coarse_factor).max(1);
        let coarse_cols = (cols / self.coarse_factor).max(1);

        let coarse: Vec<f64> = (0..coarse_rows * coarse_cols)
            .map(|_| INDEX_MIN + rng.random::<f64>() * (INDEX_MAX - INDEX_MIN))
            .collect();

        // Nearest-neighbor upsample
        let mut data = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            let cr = (row * coarse_rows / rows.max(1)).min(coarse_rows - 1);
            for col in 0..cols {
                let cc = (col * coarse_cols / cols.max(1)).min(coarse_cols - 1);
                data.push(coarse[cr * coarse_cols + cc]);
            }
        }

        Ok(Grid::from_vec(data, rows, cols)?)
    }
}

impl Default for SyntheticGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl BandSource for SyntheticGenerator {
    fn acquire(&self, request: &SceneRequest) -> Result<BandPair> {
        let (rows, cols) = request.grid_shape()?;
        self.band_pair(rows, cols)
    }
}
