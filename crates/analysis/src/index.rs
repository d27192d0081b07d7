//! Spectral index computation
//!
//! First stage of the pipeline: two reflectance bands in, one index
//! grid out.

use rayon::prelude::*;
use verdant_core::grid::Grid;
use verdant_core::{Error, Result};

/// Compute the normalized difference between two bands:
///
/// `(band_a - band_b) / (band_a + band_b)`
///
/// Result is in the range [-1, 1] for non-negative reflectances. Pixels
/// where the denominator is exactly zero are defined as `0.0`; the
/// output never contains NaN or infinities for finite inputs.
///
/// # Arguments
/// * `band_a` - Numerator positive band
/// * `band_b` - Numerator negative band
///
/// # Errors
/// Returns [`Error::ShapeMismatch`] when the bands differ in shape.
pub fn normalized_difference(band_a: &Grid<f64>, band_b: &Grid<f64>) -> Result<Grid<f64>> {
    check_shape(band_a, band_b)?;

    let (rows, cols) = band_a.shape();

    let data: Vec<f64> = (0..rows)
        .into_par_iter()
        .flat_map(|row| {
            let mut row_data = vec![0.0; cols];
            for col in 0..cols {
                let a = unsafe { band_a.get_unchecked(row, col) };
                let b = unsafe { band_b.get_unchecked(row, col) };

                let sum = a + b;
                if sum != 0.0 {
                    row_data[col] = (a - b) / sum;
                }
            }
            row_data
        })
        .collect();

    Grid::from_vec(data, rows, cols)
}

/// Normalized Difference Vegetation Index
///
/// `NDVI = (NIR - Red) / (NIR + Red)`
///
/// Values range from -1 to 1:
/// - Dense vegetation: 0.6 to 0.9
/// - Sparse vegetation: 0.2 to 0.5
/// - Bare soil: 0.1 to 0.2
/// - Water/clouds: -1.0 to 0.0
///
/// # Arguments
/// * `nir` - Near-infrared band
/// * `red` - Red band
pub fn ndvi(nir: &Grid<f64>, red: &Grid<f64>) -> Result<Grid<f64>> {
    normalized_difference(nir, red)
}

fn check_shape(a: &Grid<f64>, b: &Grid<f64>) -> Result<()> {
    if a.shape() != b.shape() {
        return Err(Error::ShapeMismatch {
            er: a.rows(),
            ec: a.cols(),
            ar: b.rows(),
            ac: b.cols(),
        });
    }
    Ok(())
}
