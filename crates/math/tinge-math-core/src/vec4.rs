use core::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::scalar::{lerp, Scalar};
use crate::vec3::Vec3;

/// 4-component vector over a floating scalar.
///
/// Serialized transparently as a 4-element array. The layout is exactly four
/// scalars in order, which is the interchange contract color values rely on.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Vec4<T>(pub [T; 4]);

impl<T: Scalar> Vec4<T> {
    #[inline]
    pub fn new(x: T, y: T, z: T, w: T) -> Self {
        Self([x, y, z, w])
    }

    #[inline]
    pub fn zero() -> Self {
        Self([T::zero(); 4])
    }

    /// All four components set to `v`.
    #[inline]
    pub fn splat(v: T) -> Self {
        Self([v; 4])
    }

    #[inline]
    pub fn as_array(&self) -> &[T; 4] {
        &self.0
    }

    #[inline]
    pub fn to_array(self) -> [T; 4] {
        self.0
    }

    /// Drop the fourth component.
    #[inline]
    pub fn truncate(self) -> Vec3<T> {
        Vec3([self.0[0], self.0[1], self.0[2]])
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|c| c.is_finite())
    }

    /// Component-wise multiply.
    #[inline]
    pub fn scale(&mut self, rhs: Self) {
        for i in 0..4 {
            self.0[i] = self.0[i] * rhs.0[i];
        }
    }

    /// Component-wise `a * (1 - t) + b * t`.
    pub fn lerp(a: Self, b: Self, t: T) -> Self {
        let mut out = Self::zero();
        for i in 0..4 {
            out.0[i] = lerp(a.0[i], b.0[i], t);
        }
        out
    }
}

impl<T: Scalar> From<[T; 4]> for Vec4<T> {
    #[inline]
    fn from(a: [T; 4]) -> Self {
        Self(a)
    }
}

impl<T: Scalar> From<Vec4<T>> for [T; 4] {
    #[inline]
    fn from(v: Vec4<T>) -> Self {
        v.0
    }
}

impl<T: Scalar> Index<usize> for Vec4<T> {
    type Output = T;
    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.0[i]
    }
}

impl<T: Scalar> IndexMut<usize> for Vec4<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.0[i]
    }
}

impl<T: Scalar> Add for Vec4<T> {
    type Output = Vec4<T>;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self([
            self.0[0] + rhs.0[0],
            self.0[1] + rhs.0[1],
            self.0[2] + rhs.0[2],
            self.0[3] + rhs.0[3],
        ])
    }
}

impl<T: Scalar> Sub for Vec4<T> {
    type Output = Vec4<T>;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self([
            self.0[0] - rhs.0[0],
            self.0[1] - rhs.0[1],
            self.0[2] - rhs.0[2],
            self.0[3] - rhs.0[3],
        ])
    }
}

impl<T: Scalar> Neg for Vec4<T> {
    type Output = Vec4<T>;
    #[inline]
    fn neg(self) -> Self {
        Self([-self.0[0], -self.0[1], -self.0[2], -self.0[3]])
    }
}

impl<T: Scalar> Mul<T> for Vec4<T> {
    type Output = Vec4<T>;
    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self([
            self.0[0] * rhs,
            self.0[1] * rhs,
            self.0[2] * rhs,
            self.0[3] * rhs,
        ])
    }
}

impl<T: Scalar> Div<T> for Vec4<T> {
    type Output = Vec4<T>;
    #[inline]
    fn div(self, rhs: T) -> Self {
        Self([
            self.0[0] / rhs,
            self.0[1] / rhs,
            self.0[2] / rhs,
            self.0[3] / rhs,
        ])
    }
}
