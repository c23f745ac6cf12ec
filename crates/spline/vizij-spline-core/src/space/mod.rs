//! Value spaces a spline can run over.
//!
//! The curve machinery never looks inside its values; it only blends,
//! differences, scales and composes them through [`SplineSpace`]. A new value
//! kind becomes animatable by implementing the trait, not by teaching the
//! curve about it.

mod rotation;
mod vector;

pub use rotation::{slerp_shortest, SLERP_DOT_THRESHOLD};

/// Algebra a curve needs from its value type.
///
/// Offsets share the value type: for vectors an offset is a displacement,
/// for rotations it is a relative rotation.
///
/// Every implementation must satisfy the round-trip law
/// `base.sum(&value.diff(&base)) == value` (within float tolerance).
pub trait SplineSpace: Clone {
    /// Blend `self` toward `other` by fraction `u`.
    ///
    /// `u` is not clamped; tangent scaling feeds negative fractions through
    /// [`SplineSpace::times`].
    fn interpolate(&self, other: &Self, u: f32) -> Self;

    /// Offset that, composed onto `base`, reconstructs `self`.
    fn diff(&self, base: &Self) -> Self;

    /// Scale an offset.
    fn times(&self, m: f32) -> Self;

    /// Compose `offset` onto `self`.
    ///
    /// nalgebra vectors have an inherent `sum()`; call this one as
    /// `SplineSpace::sum(&base, &offset)` on concrete vector types.
    fn sum(&self, offset: &Self) -> Self;

    /// Neutral element for [`SplineSpace::sum`].
    fn zero() -> Self;
}
