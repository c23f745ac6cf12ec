//! Segment construction from keyframes.
//!
//! At each interior keyframe `i` the slope `K[i+1] ⊖ K[i-1]` is split between
//! the two neighbouring segments in proportion to their durations, so the
//! handles on either side stay collinear (C1) even with uneven spacing:
//!
//! ```text
//! out     = K[i] ⊕ slope · (dt_next / (dt_prev + dt_next)) / 3   -> controls[1] of segment i
//! in      = K[i] ⊕ slope · -(dt_prev / (dt_prev + dt_next)) / 3  -> controls[2] of segment i-1
//! PR      = dt_prev / dt_next                                     (1.0 if dt_next < ε)
//! ```
//!
//! `PR` is only reported in the rebuild log. End keyframes get a plain
//! one-third handle toward their only neighbour.

use log::{debug, warn};

use crate::keyframe::{Continuity, Keyframe};
use crate::segment::Segment;
use crate::space::SplineSpace;

const ONE_THIRD: f32 = 1.0 / 3.0;

/// Tangent shape at one interior keyframe.
#[derive(Clone, Debug)]
struct KnotTangent<T> {
    slope: T,
    out_scale: f32,
    in_scale: f32,
    time_ratio: f32,
}

impl<T: SplineSpace> KnotTangent<T> {
    fn at(keyframes: &[Keyframe<T>], i: usize, ratio_epsilon: f32) -> Self {
        let prev = &keyframes[i - 1];
        let cur = &keyframes[i];
        let next = &keyframes[i + 1];

        let dt_prev = cur.time - prev.time;
        let dt_next = next.time - cur.time;
        // Strictly increasing times keep the span positive.
        let span = dt_prev + dt_next;
        let time_ratio = if dt_next > ratio_epsilon {
            dt_prev / dt_next
        } else {
            1.0
        };

        Self {
            slope: next.value.diff(&prev.value),
            out_scale: (dt_next / span) * ONE_THIRD,
            in_scale: (dt_prev / span) * ONE_THIRD,
            time_ratio,
        }
    }

    fn outgoing(&self, knot: &T) -> T {
        knot.sum(&self.slope.times(self.out_scale))
    }

    fn incoming(&self, knot: &T) -> T {
        knot.sum(&self.slope.times(-self.in_scale))
    }
}

/// Rebuild `out` from `keyframes`. Fewer than two keyframes leave it empty.
pub(crate) fn build_segments<T: SplineSpace>(
    keyframes: &[Keyframe<T>],
    continuity: Continuity,
    ratio_epsilon: f32,
    out: &mut Vec<Segment<T>>,
) {
    out.clear();
    if keyframes.len() < 2 {
        return;
    }
    if continuity == Continuity::Quintic {
        warn!("quintic continuity has no dedicated construction; building C1 cubic segments");
    }

    let n = keyframes.len() - 1;
    let mut outgoing: Vec<T> = Vec::with_capacity(n);
    let mut incoming: Vec<T> = Vec::with_capacity(n);
    // Most uneven neighbour spacing, as max(PR, 1/PR).
    let mut max_ratio = 1.0f32;

    outgoing.push(keyframes[0].value.interpolate(&keyframes[1].value, ONE_THIRD));
    for i in 1..n {
        let knot = &keyframes[i].value;
        let tangent = KnotTangent::at(keyframes, i, ratio_epsilon);
        max_ratio = max_ratio.max(tangent.time_ratio.max(tangent.time_ratio.recip()));
        incoming.push(tangent.incoming(knot));
        outgoing.push(tangent.outgoing(knot));
    }
    incoming.push(keyframes[n].value.interpolate(&keyframes[n - 1].value, ONE_THIRD));

    out.reserve(n);
    for (i, (c1, c2)) in outgoing.into_iter().zip(incoming).enumerate() {
        let left = &keyframes[i];
        let right = &keyframes[i + 1];
        out.push(Segment {
            controls: [left.value.clone(), c1, c2, right.value.clone()],
            start_time: left.time,
            duration: right.time - left.time,
        });
    }

    debug!(
        "rebuilt {} spline segments from {} keyframes ({:?}, most uneven time ratio {})",
        out.len(),
        keyframes.len(),
        continuity,
        max_ratio
    );
}
