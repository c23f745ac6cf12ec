//! Euclidean spaces: plain linear blending.

use nalgebra::SVector;

use super::SplineSpace;

impl SplineSpace for f32 {
    #[inline]
    fn interpolate(&self, other: &Self, u: f32) -> Self {
        self + (other - self) * u
    }

    #[inline]
    fn diff(&self, base: &Self) -> Self {
        self - base
    }

    #[inline]
    fn times(&self, m: f32) -> Self {
        self * m
    }

    #[inline]
    fn sum(&self, offset: &Self) -> Self {
        self + offset
    }

    #[inline]
    fn zero() -> Self {
        0.0
    }
}

/// Covers `Vector2`, `Vector3` and `Vector4` (RGBA colors included).
impl<const D: usize> SplineSpace for SVector<f32, D> {
    #[inline]
    fn interpolate(&self, other: &Self, u: f32) -> Self {
        self + (other - self) * u
    }

    #[inline]
    fn diff(&self, base: &Self) -> Self {
        self - base
    }

    #[inline]
    fn times(&self, m: f32) -> Self {
        self * m
    }

    #[inline]
    fn sum(&self, offset: &Self) -> Self {
        self + offset
    }

    #[inline]
    fn zero() -> Self {
        Self::zeros()
    }
}
