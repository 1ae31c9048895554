//! Color4: a 4-component RGBA value over a floating scalar.
//!
//! Every component must lie in the closed interval [0, 1]. The contract is
//! enforced fail-fast with debug assertions at construction and after every
//! mutating operation; [`Color4::try_new`] is the checked entry point for
//! untrusted input. Binary arithmetic deliberately does NOT re-validate its
//! result: sums and differences are unclamped and must be treated as
//! provisional until validated by the caller.

use core::fmt;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use num_traits::NumCast;
use serde::{Deserialize, Serialize};
use tinge_math_core::{lerp, Scalar, Vec3, Vec4};

use crate::error::ColorError;

/// RGBA color, components in [0, 1].
///
/// `#[repr(C)]` fixes the layout to four scalars in r, g, b, a order with no
/// padding, so values interchange with [`Vec4`] by component copy.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[repr(C)]
pub struct Color4<T> {
    pub r: T,
    pub g: T,
    pub b: T,
    pub a: T,
}

/// Single-precision color.
pub type Color4f = Color4<f32>;
/// Double-precision color.
pub type Color4d = Color4<f64>;

#[inline]
fn in_unit<T: Scalar>(v: T) -> bool {
    v >= T::zero() && v <= T::one()
}

fn check<T: Scalar>(channel: &'static str, v: T) -> Result<(), ColorError> {
    if in_unit(v) {
        Ok(())
    } else {
        Err(ColorError::OutOfRange {
            channel,
            value: v.as_f64(),
        })
    }
}

/// Rescale a [0, 1] component into `[min, max]` of the output type, rounding
/// to nearest. Intended for integer / fixed-point targets.
fn discrete<T: Scalar, M: NumCast + Copy>(v: T, min: M, max: M) -> M {
    let lo: f64 = match num_traits::cast(min) {
        Some(x) => x,
        None => return min,
    };
    let hi: f64 = match num_traits::cast(max) {
        Some(x) => x,
        None => return max,
    };
    let x = lo + v.as_f64() * (hi - lo);
    // The cast back cannot fail for components inside the invariant interval.
    num_traits::cast(x.round()).unwrap_or(min)
}

#[inline]
fn byte_to_unit<T: Scalar>(v: u8) -> T {
    T::from_f64(v as f64 / 255.0)
}

impl<T: Scalar> Default for Color4<T> {
    /// Opaque black.
    #[inline]
    fn default() -> Self {
        Self {
            r: T::zero(),
            g: T::zero(),
            b: T::zero(),
            a: T::one(),
        }
    }
}

impl<T: Scalar> Color4<T> {
    /// Construct from explicit components. Debug-asserts the [0, 1] invariant.
    #[inline]
    pub fn new(r: T, g: T, b: T, a: T) -> Self {
        let c = Self { r, g, b, a };
        c.debug_validate();
        c
    }

    /// Checked construction for untrusted input.
    pub fn try_new(r: T, g: T, b: T, a: T) -> Result<Self, ColorError> {
        check("red", r)?;
        check("green", g)?;
        check("blue", b)?;
        check("alpha", a)?;
        Ok(Self { r, g, b, a })
    }

    /// Opaque color from rgb, alpha = 1.
    #[inline]
    pub fn from_rgb(r: T, g: T, b: T) -> Self {
        Self::new(r, g, b, T::one())
    }

    /// Component copy from a 4-vector (r, g, b, a order).
    #[inline]
    pub fn from_vec4(v: Vec4<T>) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }

    /// Component copy from a 3-vector plus alpha.
    #[inline]
    pub fn from_vec3(v: Vec3<T>, a: T) -> Self {
        Self::new(v[0], v[1], v[2], a)
    }

    /// From 8-bit components, each linearly rescaled so 0 -> 0.0 and 255 -> 1.0.
    #[inline]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        let mut c = Self::default();
        c.set_rgba8(r, g, b, a);
        c
    }

    /// From 8-bit rgb, alpha = 1.
    #[inline]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        let mut c = Self::default();
        c.set_rgb8(r, g, b);
        c
    }

    /// Uniform gray with explicit alpha.
    #[inline]
    pub fn from_gray(gray: T, alpha: T) -> Self {
        Self::new(gray, gray, gray, alpha)
    }

    /// Opaque uniform gray.
    #[inline]
    pub fn gray(gray: T) -> Self {
        Self::from_gray(gray, T::one())
    }

    /// True when all four components are finite and inside [0, 1].
    pub fn is_valid(&self) -> bool {
        self.as_vec4().is_finite()
            && in_unit(self.r)
            && in_unit(self.g)
            && in_unit(self.b)
            && in_unit(self.a)
    }

    #[inline]
    fn debug_validate(&self) {
        debug_assert!(self.is_valid(), "Color4 component out of [0, 1]: {self}");
    }

    #[inline]
    pub fn red(&self) -> T {
        self.r
    }

    #[inline]
    pub fn green(&self) -> T {
        self.g
    }

    #[inline]
    pub fn blue(&self) -> T {
        self.b
    }

    #[inline]
    pub fn alpha(&self) -> T {
        self.a
    }

    /// Red rescaled into `[min, max]` of a caller-chosen output type.
    #[inline]
    pub fn red_discrete<M: NumCast + Copy>(&self, min: M, max: M) -> M {
        discrete(self.r, min, max)
    }

    /// Green rescaled into `[min, max]` of a caller-chosen output type.
    #[inline]
    pub fn green_discrete<M: NumCast + Copy>(&self, min: M, max: M) -> M {
        discrete(self.g, min, max)
    }

    /// Blue rescaled into `[min, max]` of a caller-chosen output type.
    #[inline]
    pub fn blue_discrete<M: NumCast + Copy>(&self, min: M, max: M) -> M {
        discrete(self.b, min, max)
    }

    /// Alpha rescaled into `[min, max]` of a caller-chosen output type.
    #[inline]
    pub fn alpha_discrete<M: NumCast + Copy>(&self, min: M, max: M) -> M {
        discrete(self.a, min, max)
    }

    /// 8-bit encoding, rounding to nearest.
    pub fn to_rgba8(&self) -> [u8; 4] {
        [
            self.red_discrete(0u8, 255u8),
            self.green_discrete(0u8, 255u8),
            self.blue_discrete(0u8, 255u8),
            self.alpha_discrete(0u8, 255u8),
        ]
    }

    /// Component copy into a 4-vector (r, g, b, a order).
    #[inline]
    pub fn as_vec4(&self) -> Vec4<T> {
        Vec4::new(self.r, self.g, self.b, self.a)
    }

    /// Component copy of the rgb part.
    #[inline]
    pub fn as_vec3(&self) -> Vec3<T> {
        Vec3::new(self.r, self.g, self.b)
    }

    #[inline]
    pub fn set_red(&mut self, r: T) {
        debug_assert!(in_unit(r), "red out of [0, 1]: {r}");
        self.r = r;
    }

    #[inline]
    pub fn set_green(&mut self, g: T) {
        debug_assert!(in_unit(g), "green out of [0, 1]: {g}");
        self.g = g;
    }

    #[inline]
    pub fn set_blue(&mut self, b: T) {
        debug_assert!(in_unit(b), "blue out of [0, 1]: {b}");
        self.b = b;
    }

    #[inline]
    pub fn set_alpha(&mut self, a: T) {
        debug_assert!(in_unit(a), "alpha out of [0, 1]: {a}");
        self.a = a;
    }

    /// Bulk set, validated jointly.
    #[inline]
    pub fn set(&mut self, r: T, g: T, b: T, a: T) {
        *self = Self::new(r, g, b, a);
    }

    /// Bulk set from 8-bit components (rescaled, then validated).
    pub fn set_rgba8(&mut self, r: u8, g: u8, b: u8, a: u8) {
        self.set(
            byte_to_unit(r),
            byte_to_unit(g),
            byte_to_unit(b),
            byte_to_unit(a),
        );
    }

    /// Bulk set from 8-bit rgb, alpha = 1.
    pub fn set_rgb8(&mut self, r: u8, g: u8, b: u8) {
        self.set(byte_to_unit(r), byte_to_unit(g), byte_to_unit(b), T::one());
    }

    /// Set r = g = b = gray with the given alpha.
    pub fn set_gray(&mut self, gray: T, alpha: T) {
        self.set(gray, gray, gray, alpha);
    }

    /// Reset to opaque black.
    #[inline]
    pub fn set_zero(&mut self) {
        *self = Self::default();
    }

    /// `self = c + d` (rgb only, alpha carried from `c`).
    pub fn set_sum(&mut self, c: &Self, d: &Self) {
        *self = *c + *d;
    }

    /// `self = c - d` (rgb only, alpha carried from `c`).
    pub fn set_sub(&mut self, c: &Self, d: &Self) {
        *self = *c - *d;
    }

    /// `self = c * (1 - rate) + d * rate`, all four components through the
    /// validated bulk-set path. `rate` must lie in [0, 1].
    pub fn set_interpolation(&mut self, c: &Self, d: &Self, rate: T) {
        debug_assert!(in_unit(rate), "interpolation rate out of [0, 1]: {rate}");
        c.debug_validate();
        d.debug_validate();
        self.set(
            lerp(c.r, d.r, rate),
            lerp(c.g, d.g, rate),
            lerp(c.b, d.b, rate),
            lerp(c.a, d.a, rate),
        );
    }

    /// Interpolated copy of `c` toward `d` at `rate`.
    pub fn lerp(c: &Self, d: &Self, rate: T) -> Self {
        let mut out = Self::default();
        out.set_interpolation(c, d, rate);
        out
    }

    /// Component-wise rgb multiply in place.
    #[inline]
    pub fn scale(&mut self, c: &Self) {
        *self *= *c;
    }

    /// Negate rgb in place. The result is outside the invariant interval for
    /// any non-zero channel.
    #[inline]
    pub fn negate(&mut self) {
        self.r = -self.r;
        self.g = -self.g;
        self.b = -self.b;
    }
}

impl<T: Scalar> From<[T; 4]> for Color4<T> {
    #[inline]
    fn from(c: [T; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }
}

impl<T: Scalar> From<[T; 3]> for Color4<T> {
    /// Alpha defaults to 1.
    #[inline]
    fn from(c: [T; 3]) -> Self {
        Self::from_rgb(c[0], c[1], c[2])
    }
}

impl<T: Scalar> From<Color4<T>> for [T; 4] {
    #[inline]
    fn from(c: Color4<T>) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}

impl<T: Scalar> Index<usize> for Color4<T> {
    type Output = T;

    /// Components in r, g, b, a order; panics for indices above 3.
    fn index(&self, i: usize) -> &T {
        match i {
            0 => &self.r,
            1 => &self.g,
            2 => &self.b,
            3 => &self.a,
            _ => panic!("Color4 index out of range: {i}"),
        }
    }
}

impl<T: Scalar> IndexMut<usize> for Color4<T> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        match i {
            0 => &mut self.r,
            1 => &mut self.g,
            2 => &mut self.b,
            3 => &mut self.a,
            _ => panic!("Color4 index out of range: {i}"),
        }
    }
}

// Alpha is not an additive quantity: binary arithmetic acts on rgb and carries
// the left operand's alpha. Operands are debug-validated; results are not.

impl<T: Scalar> Add for Color4<T> {
    type Output = Color4<T>;

    fn add(self, rhs: Self) -> Self {
        self.debug_validate();
        rhs.debug_validate();
        Self {
            r: self.r + rhs.r,
            g: self.g + rhs.g,
            b: self.b + rhs.b,
            a: self.a,
        }
    }
}

impl<T: Scalar> Sub for Color4<T> {
    type Output = Color4<T>;

    fn sub(self, rhs: Self) -> Self {
        self.debug_validate();
        rhs.debug_validate();
        Self {
            r: self.r - rhs.r,
            g: self.g - rhs.g,
            b: self.b - rhs.b,
            a: self.a,
        }
    }
}

impl<T: Scalar> AddAssign for Color4<T> {
    fn add_assign(&mut self, rhs: Self) {
        rhs.debug_validate();
        self.r = self.r + rhs.r;
        self.g = self.g + rhs.g;
        self.b = self.b + rhs.b;
    }
}

impl<T: Scalar> SubAssign for Color4<T> {
    fn sub_assign(&mut self, rhs: Self) {
        rhs.debug_validate();
        self.r = self.r - rhs.r;
        self.g = self.g - rhs.g;
        self.b = self.b - rhs.b;
    }
}

impl<T: Scalar> Mul for Color4<T> {
    type Output = Color4<T>;

    fn mul(self, rhs: Self) -> Self {
        self.debug_validate();
        rhs.debug_validate();
        Self {
            r: self.r * rhs.r,
            g: self.g * rhs.g,
            b: self.b * rhs.b,
            a: self.a,
        }
    }
}

impl<T: Scalar> Div for Color4<T> {
    type Output = Color4<T>;

    fn div(self, rhs: Self) -> Self {
        self.debug_validate();
        rhs.debug_validate();
        Self {
            r: self.r / rhs.r,
            g: self.g / rhs.g,
            b: self.b / rhs.b,
            a: self.a,
        }
    }
}

impl<T: Scalar> MulAssign for Color4<T> {
    fn mul_assign(&mut self, rhs: Self) {
        self.r = self.r * rhs.r;
        self.g = self.g * rhs.g;
        self.b = self.b * rhs.b;
    }
}

impl<T: Scalar> DivAssign for Color4<T> {
    fn div_assign(&mut self, rhs: Self) {
        self.r = self.r / rhs.r;
        self.g = self.g / rhs.g;
        self.b = self.b / rhs.b;
    }
}

impl<T: Scalar> Mul<T> for Color4<T> {
    type Output = Color4<T>;

    fn mul(self, rhs: T) -> Self {
        Self {
            r: self.r * rhs,
            g: self.g * rhs,
            b: self.b * rhs,
            a: self.a,
        }
    }
}

impl<T: Scalar> Div<T> for Color4<T> {
    type Output = Color4<T>;

    fn div(self, rhs: T) -> Self {
        Self {
            r: self.r / rhs,
            g: self.g / rhs,
            b: self.b / rhs,
            a: self.a,
        }
    }
}

impl<T: Scalar> MulAssign<T> for Color4<T> {
    fn mul_assign(&mut self, rhs: T) {
        self.r = self.r * rhs;
        self.g = self.g * rhs;
        self.b = self.b * rhs;
    }
}

impl<T: Scalar> DivAssign<T> for Color4<T> {
    fn div_assign(&mut self, rhs: T) {
        self.r = self.r / rhs;
        self.g = self.g / rhs;
        self.b = self.b / rhs;
    }
}

impl<T: Scalar> Neg for Color4<T> {
    type Output = Color4<T>;

    fn neg(self) -> Self {
        Self {
            r: -self.r,
            g: -self.g,
            b: -self.b,
            a: self.a,
        }
    }
}

impl<T: Scalar> fmt::Display for Color4<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r: {}, g: {}, b: {}, a: {}", self.r, self.g, self.b, self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_opaque_black() {
        let c = Color4f::default();
        assert_eq!(c, Color4::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn construct_and_read_back() {
        let c = Color4d::new(0.1, 0.2, 0.3, 0.4);
        assert_eq!(c.red(), 0.1);
        assert_eq!(c.green(), 0.2);
        assert_eq!(c.blue(), 0.3);
        assert_eq!(c.alpha(), 0.4);
        assert_eq!(c[0], 0.1);
        assert_eq!(c[3], 0.4);
    }

    #[test]
    fn try_new_reports_the_offending_channel() {
        let err = Color4f::try_new(0.0, 1.5, 0.0, 1.0).unwrap_err();
        assert_eq!(
            err,
            ColorError::OutOfRange {
                channel: "green",
                value: 1.5
            }
        );
        assert!(Color4f::try_new(0.0, 1.0, 0.0, 1.0).is_ok());
    }

    #[test]
    fn add_sub_act_on_rgb_only() {
        let c = Color4f::new(0.2, 0.3, 0.4, 0.5);
        let d = Color4f::new(0.1, 0.1, 0.1, 1.0);
        let sum = c + d;
        assert_eq!(sum.as_vec3().to_array(), [0.3, 0.4, 0.5]);
        assert_eq!(sum.alpha(), 0.5);
        let diff = c - d;
        assert_eq!(diff.alpha(), 0.5);

        let mut e = c;
        e += d;
        assert_eq!(e.alpha(), 0.5);
        e -= d;
        assert_eq!(e.alpha(), 0.5);
    }

    #[test]
    fn mul_div_act_on_rgb_only() {
        let c = Color4f::new(0.5, 0.5, 0.5, 0.25);
        let d = Color4f::new(0.5, 1.0, 0.0, 1.0);
        let prod = c * d;
        assert_eq!(prod.as_vec3().to_array(), [0.25, 0.5, 0.0]);
        assert_eq!(prod.alpha(), 0.25);

        let mut e = c;
        e *= 0.5;
        assert_eq!(e.alpha(), 0.25);
        e /= 0.5;
        assert_eq!(e, c);
    }

    #[test]
    fn interpolation_endpoints_and_midpoint() {
        let c = Color4d::new(0.0, 0.25, 1.0, 1.0);
        let d = Color4d::new(1.0, 0.75, 0.0, 0.5);
        assert_eq!(Color4::lerp(&c, &d, 0.0), c);
        assert_eq!(Color4::lerp(&c, &d, 1.0), d);
        let mid = Color4::lerp(&c, &d, 0.5);
        assert_eq!(mid, Color4::new(0.5, 0.5, 0.5, 0.75));
    }

    #[test]
    fn byte_constructors_rescale() {
        let black = Color4f::from_rgb8(0, 0, 0);
        assert_eq!(black, Color4::new(0.0, 0.0, 0.0, 1.0));
        let white = Color4f::from_rgba8(255, 255, 255, 255);
        assert_eq!(white, Color4::new(1.0, 1.0, 1.0, 1.0));
        let mid = Color4f::from_rgb8(128, 128, 128);
        assert!((mid.red() - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(mid.alpha(), 1.0);
    }

    #[test]
    fn discrete_getters_rescale_to_caller_range() {
        let c = Color4f::new(0.0, 0.5, 1.0, 1.0);
        assert_eq!(c.red_discrete(0u8, 255), 0);
        assert_eq!(c.blue_discrete(0u8, 255), 255);
        assert_eq!(c.green_discrete(0u16, 1000), 500);
        assert_eq!(c.alpha_discrete(-100i32, 100), 100);
    }

    #[test]
    fn rgba8_round_trip() {
        let c = Color4d::from_rgba8(12, 34, 56, 78);
        assert_eq!(c.to_rgba8(), [12, 34, 56, 78]);
    }

    #[test]
    fn set_zero_and_gray() {
        let mut c = Color4f::new(0.3, 0.3, 0.3, 0.3);
        c.set_gray(0.5, 0.75);
        assert_eq!(c, Color4::new(0.5, 0.5, 0.5, 0.75));
        c.set_zero();
        assert_eq!(c, Color4f::default());
    }

    #[test]
    fn vector_conversions_copy_components() {
        let c = Color4f::new(0.1, 0.2, 0.3, 0.4);
        assert_eq!(c.as_vec4().to_array(), [0.1, 0.2, 0.3, 0.4]);
        assert_eq!(Color4::from_vec4(c.as_vec4()), c);
        assert_eq!(Color4::from_vec3(c.as_vec3(), 0.4), c);
        let arr: [f32; 4] = c.into();
        assert_eq!(Color4::from(arr), c);
    }

    #[test]
    #[should_panic(expected = "out of [0, 1]")]
    fn set_red_rejects_out_of_range() {
        let mut c = Color4f::default();
        c.set_red(1.5);
    }

    #[test]
    #[should_panic(expected = "out of [0, 1]")]
    fn bulk_set_rejects_out_of_range() {
        let mut c = Color4f::default();
        c.set(0.0, 0.0, -0.1, 1.0);
    }

    #[test]
    #[should_panic(expected = "Color4 index out of range")]
    fn index_out_of_range_panics() {
        let c = Color4f::default();
        let _ = c[4];
    }

    #[test]
    fn display_labels_components() {
        let c = Color4f::new(0.0, 0.5, 1.0, 1.0);
        assert_eq!(format!("{c}"), "r: 0, g: 0.5, b: 1, a: 1");
    }
}
