//! Unit-quaternion rotations.
//!
//! Order convention: `a.diff(&b) = a * b⁻¹` and `b.sum(&x) = x * b`, so
//! offsets are applied on the left (world frame) and
//! `b.sum(&a.diff(&b)) == a`.

use nalgebra::{Quaternion, UnitQuaternion};

use super::SplineSpace;

/// Above this |dot| the two rotations are treated as parallel and blended
/// linearly (then renormalized) instead of through `sin(θ)`.
pub const SLERP_DOT_THRESHOLD: f32 = 0.9995;

/// Great-circle interpolation along the shorter of the two arcs.
///
/// `t` may fall outside `[0, 1]`; the result then extrapolates along the same
/// geodesic. The output is always renormalized.
pub fn slerp_shortest(
    a: &UnitQuaternion<f32>,
    b: &UnitQuaternion<f32>,
    t: f32,
) -> UnitQuaternion<f32> {
    if t == 0.0 {
        return *a;
    }
    if t == 1.0 {
        return *b;
    }

    let qa = a.coords;
    let mut qb = b.coords;

    // q and -q are the same rotation; flip to take the short path.
    let mut dot = qa.dot(&qb);
    if dot < 0.0 {
        qb = -qb;
        dot = -dot;
    }

    if dot > SLERP_DOT_THRESHOLD {
        let blended = qa + (qb - qa) * t;
        return UnitQuaternion::new_normalize(Quaternion::from_vector(blended));
    }

    let theta_0 = dot.clamp(-1.0, 1.0).acos();
    let theta = theta_0 * t;
    let sin_theta_0 = theta_0.sin();

    let s0 = (theta_0 - theta).sin() / sin_theta_0;
    let s1 = theta.sin() / sin_theta_0;

    UnitQuaternion::new_normalize(Quaternion::from_vector(qa * s0 + qb * s1))
}

impl SplineSpace for UnitQuaternion<f32> {
    #[inline]
    fn interpolate(&self, other: &Self, u: f32) -> Self {
        slerp_shortest(self, other, u)
    }

    #[inline]
    fn diff(&self, base: &Self) -> Self {
        self * base.inverse()
    }

    /// Fractional power along the geodesic: identity → `self` by `m`.
    #[inline]
    fn times(&self, m: f32) -> Self {
        slerp_shortest(&UnitQuaternion::identity(), self, m)
    }

    #[inline]
    fn sum(&self, offset: &Self) -> Self {
        offset * self
    }

    #[inline]
    fn zero() -> Self {
        UnitQuaternion::identity()
    }
}
