//! Named constants and the basic 7-entry palette.
//!
//! `basic` uses C-style truncated remainder on purpose: negative inputs
//! produce a negative remainder, match no table slot, and fall through to
//! white. That default is part of the lookup contract, not an error path.

use rand::Rng;
use tinge_math_core::Scalar;

use crate::color::Color4;

impl<T: Scalar> Color4<T> {
    #[inline]
    pub fn color_white() -> Self {
        Self::from_rgb(T::one(), T::one(), T::one())
    }

    /// Opaque black, same value as `default()`.
    #[inline]
    pub fn color_black() -> Self {
        Self::default()
    }

    #[inline]
    pub fn color_red() -> Self {
        Self::from_rgb(T::one(), T::zero(), T::zero())
    }

    #[inline]
    pub fn color_green() -> Self {
        Self::from_rgb(T::zero(), T::one(), T::zero())
    }

    #[inline]
    pub fn color_blue() -> Self {
        Self::from_rgb(T::zero(), T::zero(), T::one())
    }

    #[inline]
    pub fn color_yellow() -> Self {
        Self::from_rgb(T::one(), T::one(), T::zero())
    }

    #[inline]
    pub fn color_cyan() -> Self {
        Self::from_rgb(T::zero(), T::one(), T::one())
    }

    #[inline]
    pub fn color_pink() -> Self {
        Self::from_rgb(T::one(), T::zero(), T::one())
    }

    /// Entry `i % 7` of the fixed table [red, green, blue, yellow, cyan, pink,
    /// white]; anything that misses the table (negative remainders) is white.
    pub fn basic(i: i64) -> Self {
        match i % 7 {
            0 => Self::color_red(),
            1 => Self::color_green(),
            2 => Self::color_blue(),
            3 => Self::color_yellow(),
            4 => Self::color_cyan(),
            5 => Self::color_pink(),
            6 => Self::color_white(),
            _ => Self::color_white(),
        }
    }

    /// Deterministic 49-entry extended palette: interpolates `basic(i % 7)`
    /// toward `basic((i % 7 + i / 7) % 7)` at rate 0.25. `i / 7` truncates
    /// toward zero.
    pub fn basic49(i: i64) -> Self {
        let i0 = i % 7;
        let i1 = (i0 + i / 7) % 7;
        Self::lerp(&Self::basic(i0), &Self::basic(i1), T::from_f64(0.25))
    }

    /// Uniform pick among the first six table entries (white excluded), using
    /// the caller's random source.
    pub fn basic_rand<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::basic(rng.gen_range(0..6))
    }
}
