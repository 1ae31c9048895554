use core::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::scalar::{lerp, Scalar};
use crate::vec4::Vec4;

/// 3-component vector over a floating scalar.
///
/// Serialized transparently as a 3-element array.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Vec3<T>(pub [T; 3]);

impl<T: Scalar> Vec3<T> {
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        Self([x, y, z])
    }

    #[inline]
    pub fn zero() -> Self {
        Self([T::zero(); 3])
    }

    /// All three components set to `v`.
    #[inline]
    pub fn splat(v: T) -> Self {
        Self([v; 3])
    }

    #[inline]
    pub fn as_array(&self) -> &[T; 3] {
        &self.0
    }

    #[inline]
    pub fn to_array(self) -> [T; 3] {
        self.0
    }

    /// Append a fourth component.
    #[inline]
    pub fn extend(self, w: T) -> Vec4<T> {
        Vec4([self.0[0], self.0[1], self.0[2], w])
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|c| c.is_finite())
    }

    /// Component-wise multiply.
    #[inline]
    pub fn scale(&mut self, rhs: Self) {
        for i in 0..3 {
            self.0[i] = self.0[i] * rhs.0[i];
        }
    }

    /// Component-wise `a * (1 - t) + b * t`.
    pub fn lerp(a: Self, b: Self, t: T) -> Self {
        let mut out = Self::zero();
        for i in 0..3 {
            out.0[i] = lerp(a.0[i], b.0[i], t);
        }
        out
    }
}

impl<T: Scalar> From<[T; 3]> for Vec3<T> {
    #[inline]
    fn from(a: [T; 3]) -> Self {
        Self(a)
    }
}

impl<T: Scalar> From<Vec3<T>> for [T; 3] {
    #[inline]
    fn from(v: Vec3<T>) -> Self {
        v.0
    }
}

impl<T: Scalar> Index<usize> for Vec3<T> {
    type Output = T;
    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.0[i]
    }
}

impl<T: Scalar> IndexMut<usize> for Vec3<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.0[i]
    }
}

impl<T: Scalar> Add for Vec3<T> {
    type Output = Vec3<T>;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self([
            self.0[0] + rhs.0[0],
            self.0[1] + rhs.0[1],
            self.0[2] + rhs.0[2],
        ])
    }
}

impl<T: Scalar> Sub for Vec3<T> {
    type Output = Vec3<T>;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self([
            self.0[0] - rhs.0[0],
            self.0[1] - rhs.0[1],
            self.0[2] - rhs.0[2],
        ])
    }
}

impl<T: Scalar> Neg for Vec3<T> {
    type Output = Vec3<T>;
    #[inline]
    fn neg(self) -> Self {
        Self([-self.0[0], -self.0[1], -self.0[2]])
    }
}

impl<T: Scalar> Mul<T> for Vec3<T> {
    type Output = Vec3<T>;
    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self([self.0[0] * rhs, self.0[1] * rhs, self.0[2] * rhs])
    }
}

impl<T: Scalar> Div<T> for Vec3<T> {
    type Output = Vec3<T>;
    #[inline]
    fn div(self, rhs: T) -> Self {
        Self([self.0[0] / rhs, self.0[1] / rhs, self.0[2] / rhs])
    }
}
