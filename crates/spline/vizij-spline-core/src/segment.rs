//! Cubic segments and their evaluation.

use crate::space::SplineSpace;

/// Smallest duration used when mapping global time into a segment.
pub(crate) const MIN_SEGMENT_DURATION: f32 = f32::EPSILON;

/// One cubic piece between two adjacent keyframes.
///
/// `controls[0]` and `controls[3]` are the keyframe values; `controls[1]`
/// and `controls[2]` are the outgoing and incoming tangent handles.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment<T> {
    pub controls: [T; 4],
    pub start_time: f32,
    pub duration: f32,
}

impl<T: SplineSpace> Segment<T> {
    /// Map a global time to `[0, 1]` within this segment.
    #[inline]
    pub fn local_fraction(&self, time: f32) -> f32 {
        let denom = self.duration.max(MIN_SEGMENT_DURATION);
        ((time - self.start_time) / denom).clamp(0.0, 1.0)
    }

    /// Evaluate at local fraction `u` by de Casteljau reduction (4 → 3 → 2 → 1).
    pub fn sample(&self, u: f32) -> T {
        let [p0, p1, p2, p3] = &self.controls;

        let a = p0.interpolate(p1, u);
        let b = p1.interpolate(p2, u);
        let c = p2.interpolate(p3, u);

        let d = a.interpolate(&b, u);
        let e = b.interpolate(&c, u);

        d.interpolate(&e, u)
    }

    #[inline]
    pub fn sample_at(&self, time: f32) -> T {
        self.sample(self.local_fraction(time))
    }
}
