//! Keyframed curve with lazily rebuilt segments.

use log::trace;

use crate::build::build_segments;
use crate::config::SplineConfig;
use crate::error::SplineError;
use crate::keyframe::{Continuity, Keyframe};
use crate::segment::Segment;
use crate::space::SplineSpace;
use crate::Result;

/// An ordered keyframe list plus the segments derived from it.
///
/// Segments are only rebuilt by [`Curve::evaluate`] / [`Curve::segments`]
/// after a mutation; while `dirty` is clear they always match the current
/// keyframes and continuity mode.
#[derive(Clone, Debug)]
pub struct Curve<T> {
    keyframes: Vec<Keyframe<T>>,
    segments: Vec<Segment<T>>,
    continuity: Continuity,
    time_ratio_epsilon: f32,
    dirty: bool,
}

impl<T: SplineSpace> Default for Curve<T> {
    fn default() -> Self {
        Self::from_valid_config(&SplineConfig::default())
    }
}

impl<T: SplineSpace> Curve<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &SplineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: &SplineConfig) -> Self {
        Self {
            keyframes: Vec::with_capacity(config.keyframe_capacity),
            segments: Vec::with_capacity(config.keyframe_capacity.saturating_sub(1)),
            continuity: config.continuity,
            time_ratio_epsilon: config.time_ratio_epsilon,
            dirty: false,
        }
    }

    /// Check that `time` could be appended as the next keyframe.
    pub fn check_next_time(&self, time: f32) -> Result<()> {
        if !time.is_finite() {
            return Err(SplineError::InvalidTime { time });
        }
        if let Some(last) = self.keyframes.last() {
            if time <= last.time {
                return Err(SplineError::OutOfOrder {
                    time,
                    previous: last.time,
                });
            }
        }
        Ok(())
    }

    /// Append a keyframe. Times must be finite and strictly increasing.
    pub fn add_keyframe(&mut self, value: T, time: f32) -> Result<()> {
        self.check_next_time(time)?;
        self.keyframes.push(Keyframe::new(value, time));
        self.dirty = true;
        trace!("keyframe #{} added at t={time}", self.keyframes.len() - 1);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.keyframes.clear();
        self.segments.clear();
        self.dirty = false;
        trace!("curve cleared");
    }

    pub fn set_continuity(&mut self, continuity: Continuity) {
        if self.continuity != continuity {
            self.continuity = continuity;
            self.dirty = true;
        }
    }

    #[inline]
    pub fn continuity(&self) -> Continuity {
        self.continuity
    }

    #[inline]
    pub fn keyframes(&self) -> &[Keyframe<T>] {
        &self.keyframes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.keyframes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// `(first, last)` keyframe times, if any.
    pub fn time_range(&self) -> Option<(f32, f32)> {
        match (self.keyframes.first(), self.keyframes.last()) {
            (Some(first), Some(last)) => Some((first.time, last.time)),
            _ => None,
        }
    }

    /// Current segments, rebuilding first if needed.
    pub fn segments(&mut self) -> &[Segment<T>] {
        self.ensure_built();
        &self.segments
    }

    fn ensure_built(&mut self) {
        if self.dirty {
            build_segments(
                &self.keyframes,
                self.continuity,
                self.time_ratio_epsilon,
                &mut self.segments,
            );
            self.dirty = false;
        }
    }

    /// Sample the curve at `time` (seconds).
    ///
    /// - no keyframes: [`SplineSpace::zero`]
    /// - one keyframe: its value, for any time
    /// - before the first / after the last keyframe: clamped to that value
    /// - NaN: the first keyframe's value
    pub fn evaluate(&mut self, time: f32) -> T {
        match self.keyframes.len() {
            0 => return T::zero(),
            1 => return self.keyframes[0].value.clone(),
            _ => {}
        }

        self.ensure_built();

        let n = self.keyframes.len();
        let first = &self.keyframes[0];
        if time.is_nan() || time <= first.time {
            return first.value.clone();
        }
        let last = &self.keyframes[n - 1];
        if time >= last.time {
            return last.value.clone();
        }

        self.segments[self.segment_index(time)].sample_at(time)
    }

    /// Index of the segment whose `[start, end)` contains `time`.
    /// Assumes built segments and `first.time < time < last.time`.
    fn segment_index(&self, time: f32) -> usize {
        let upper = self.segments.partition_point(|s| s.start_time <= time);
        upper.saturating_sub(1).min(self.segments.len() - 1)
    }
}
