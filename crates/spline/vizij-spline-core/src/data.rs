//! Serialized camera path model.
//!
//! Positions are `[x, y, z]`; rotations are quaternions `[x, y, z, w]`.
//! Rotations are renormalized on load since the wire format does not
//! guarantee unit length.

use nalgebra::{Quaternion, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::config::SplineConfig;
use crate::error::SplineError;
use crate::path::{CameraPath, PathKeyframe, Pose};
use crate::Result;

/// Squared norms below this cannot be normalized into a rotation.
const MIN_QUAT_NORM_SQUARED: f32 = 1e-12;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PathKeyframeData {
    pub time: f32,
    pub position: [f32; 3],
    /// Quaternion (x, y, z, w)
    pub rotation: [f32; 4],
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PathData {
    pub name: String,
    #[serde(default)]
    pub config: Option<SplineConfig>,
    pub keyframes: Vec<PathKeyframeData>,
}

impl PathKeyframeData {
    pub fn to_keyframe(&self) -> Result<PathKeyframe> {
        let [x, y, z, w] = self.rotation;
        let q = Quaternion::new(w, x, y, z);
        let norm_sq = q.norm_squared();
        if !norm_sq.is_finite() || norm_sq < MIN_QUAT_NORM_SQUARED {
            return Err(SplineError::InvalidValue {
                reason: format!(
                    "keyframe at t={} has a degenerate rotation {:?}",
                    self.time, self.rotation
                ),
            });
        }
        if self.position.iter().any(|c| !c.is_finite()) {
            return Err(SplineError::InvalidValue {
                reason: format!(
                    "keyframe at t={} has a non-finite position {:?}",
                    self.time, self.position
                ),
            });
        }
        Ok(PathKeyframe::new(
            Vector3::from(self.position),
            UnitQuaternion::from_quaternion(q),
            self.time,
        ))
    }
}

impl PathData {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl CameraPath {
    /// Build a path from its serialized form, validating every keyframe.
    pub fn from_data(data: &PathData) -> Result<Self> {
        let mut path = match &data.config {
            Some(cfg) => CameraPath::with_config(cfg)?,
            None => CameraPath::new(),
        };
        for key in &data.keyframes {
            path.add_keyframe(key.to_keyframe()?)?;
        }
        Ok(path)
    }
}

/// Array form of a camera [`Pose`] for export.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct PoseData {
    pub position: [f32; 3],
    /// Quaternion (x, y, z, w)
    pub rotation: [f32; 4],
}

impl From<&Pose> for PoseData {
    fn from(pose: &Pose) -> Self {
        let p = pose.position;
        let q = pose.rotation.coords;
        Self {
            position: [p.x, p.y, p.z],
            rotation: [q.x, q.y, q.z, q.w],
        }
    }
}
