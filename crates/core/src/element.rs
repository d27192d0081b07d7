//! Grid element trait for generic cell values

use num_traits::{NumCast, Zero};
use std::fmt::Debug;

/// Trait for types that can be stored in a grid cell.
///
/// Bounds the types usable as cell values, ensuring they support the
/// numeric operations the engine needs.
pub trait GridElement:
    Copy + Clone + Debug + PartialOrd + PartialEq + NumCast + Zero + Send + Sync + 'static
{
    /// Whether this value is finite. Integer values always are; floats
    /// report NaN and infinities.
    fn is_finite_value(self) -> bool;

    /// Convert self to f64
    fn to_f64(self) -> Option<f64> {
        NumCast::from(self)
    }
}

macro_rules! impl_grid_element_int {
    ($t:ty) => {
        impl GridElement for $t {
            fn is_finite_value(self) -> bool {
                true
            }
        }
    };
}

macro_rules! impl_grid_element_float {
    ($t:ty) => {
        impl GridElement for $t {
            fn is_finite_value(self) -> bool {
                self.is_finite()
            }
        }
    };
}

impl_grid_element_int!(i8);
impl_grid_element_int!(i16);
impl_grid_element_int!(i32);
impl_grid_element_int!(i64);
impl_grid_element_int!(u8);
impl_grid_element_int!(u16);
impl_grid_element_int!(u32);
impl_grid_element_int!(u64);
impl_grid_element_float!(f32);
impl_grid_element_float!(f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_always_finite() {
        assert!(42i32.is_finite_value());
        assert!(u8::MAX.is_finite_value());
    }

    #[test]
    fn test_float_finiteness() {
        assert!(1.5f64.is_finite_value());
        assert!(!f64::NAN.is_finite_value());
        assert!(!f32::INFINITY.is_finite_value());
    }

    #[test]
    fn test_to_f64() {
        assert_eq!(7u16.to_f64(), Some(7.0));
        assert_eq!(0.25f32.to_f64(), Some(0.25));
    }
}
