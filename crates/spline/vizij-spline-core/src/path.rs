//! Position + rotation paths sharing one timeline.

use nalgebra::{UnitQuaternion, Vector3};

use crate::config::SplineConfig;
use crate::curve::Curve;
use crate::keyframe::Continuity;
use crate::space::SplineSpace;
use crate::Result;

/// One combined keyframe: both channels always share `time`.
#[derive(Clone, Debug, PartialEq)]
pub struct PathKeyframe<P = Vector3<f32>, R = UnitQuaternion<f32>> {
    pub position: P,
    pub rotation: R,
    pub time: f32,
}

impl<P, R> PathKeyframe<P, R> {
    pub fn new(position: P, rotation: R, time: f32) -> Self {
        Self {
            position,
            rotation,
            time,
        }
    }
}

/// Sampled pose. Produced fresh on every evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose<P = Vector3<f32>, R = UnitQuaternion<f32>> {
    pub position: P,
    pub rotation: R,
}

/// Two independent curves advanced by the same global time.
#[derive(Clone, Debug)]
pub struct PosePath<P, R> {
    position: Curve<P>,
    rotation: Curve<R>,
}

/// Camera path: world-space position and unit-quaternion orientation.
pub type CameraPath = PosePath<Vector3<f32>, UnitQuaternion<f32>>;

impl<P: SplineSpace, R: SplineSpace> Default for PosePath<P, R> {
    fn default() -> Self {
        Self {
            position: Curve::default(),
            rotation: Curve::default(),
        }
    }
}

impl<P: SplineSpace, R: SplineSpace> PosePath<P, R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &SplineConfig) -> Result<Self> {
        Ok(Self {
            position: Curve::with_config(config)?,
            rotation: Curve::with_config(config)?,
        })
    }

    /// Append a keyframe to both curves, or to neither on error.
    pub fn add_keyframe(&mut self, keyframe: PathKeyframe<P, R>) -> Result<()> {
        let PathKeyframe {
            position,
            rotation,
            time,
        } = keyframe;
        self.position.check_next_time(time)?;
        self.position.add_keyframe(position, time)?;
        self.rotation.add_keyframe(rotation, time)
    }

    pub fn clear(&mut self) {
        self.position.clear();
        self.rotation.clear();
    }

    pub fn set_continuity(&mut self, continuity: Continuity) {
        self.position.set_continuity(continuity);
        self.rotation.set_continuity(continuity);
    }

    #[inline]
    pub fn continuity(&self) -> Continuity {
        self.position.continuity()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.position.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.position.is_empty()
    }

    #[inline]
    pub fn time_range(&self) -> Option<(f32, f32)> {
        self.position.time_range()
    }

    #[inline]
    pub fn position_curve(&self) -> &Curve<P> {
        &self.position
    }

    #[inline]
    pub fn rotation_curve(&self) -> &Curve<R> {
        &self.rotation
    }

    pub fn evaluate(&mut self, time: f32) -> Pose<P, R> {
        Pose {
            position: self.position.evaluate(time),
            rotation: self.rotation.evaluate(time),
        }
    }
}
