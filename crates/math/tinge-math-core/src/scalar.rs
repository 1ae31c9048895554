//! Scalar: the floating component type the math and color types are generic over.

use core::fmt::{Debug, Display};

use num_traits::Float;

/// Floating component type, implemented for `f32` and `f64` only.
///
/// The rest of the workspace is generic over this rather than over
/// [`num_traits::Float`] directly so constants can be spelled through an
/// infallible conversion instead of `NumCast` unwraps.
pub trait Scalar: Float + Debug + Display + Default + 'static {
    /// Infallible conversion from an `f64` literal.
    fn from_f64(v: f64) -> Self;

    /// Widening (for `f32`) or identity (for `f64`) conversion back to `f64`.
    fn as_f64(self) -> f64;
}

impl Scalar for f32 {
    #[inline]
    fn from_f64(v: f64) -> Self {
        v as f32
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self as f64
    }
}

impl Scalar for f64 {
    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self
    }
}

/// Linear interpolation `a * (1 - t) + b * t`.
#[inline]
pub fn lerp<T: Scalar>(a: T, b: T, t: T) -> T {
    a * (T::one() - t) + b * t
}
