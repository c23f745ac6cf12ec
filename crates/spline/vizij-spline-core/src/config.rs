//! Spline configuration.

use serde::{Deserialize, Serialize};

use crate::error::SplineError;
use crate::keyframe::Continuity;
use crate::Result;

/// Below this the next segment is treated as zero-length and the reported
/// `dt_prev / dt_next` time ratio is pinned to 1.
pub const DEFAULT_TIME_RATIO_EPSILON: f32 = 1e-5;

/// Largest accepted keyframe capacity hint.
pub const MAX_KEYFRAME_CAPACITY: usize = 1 << 16;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplineConfig {
    /// Continuity mode a fresh curve starts in.
    pub continuity: Continuity,
    /// Guard for the `dt_prev / dt_next` time ratio logged on rebuild. The
    /// handle split itself always uses the raw durations.
    pub time_ratio_epsilon: f32,
    /// Initial capacity hint for keyframe/segment buffers, at most
    /// [`MAX_KEYFRAME_CAPACITY`].
    pub keyframe_capacity: usize,
}

impl Default for SplineConfig {
    fn default() -> Self {
        Self {
            continuity: Continuity::Cubic,
            time_ratio_epsilon: DEFAULT_TIME_RATIO_EPSILON,
            keyframe_capacity: 16,
        }
    }
}

impl SplineConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.time_ratio_epsilon.is_finite() || self.time_ratio_epsilon <= 0.0 {
            return Err(SplineError::InvalidConfig {
                reason: format!(
                    "time_ratio_epsilon must be finite and > 0, got {}",
                    self.time_ratio_epsilon
                ),
            });
        }
        if self.keyframe_capacity > MAX_KEYFRAME_CAPACITY {
            return Err(SplineError::InvalidConfig {
                reason: format!(
                    "keyframe_capacity must be <= {}, got {}",
                    MAX_KEYFRAME_CAPACITY, self.keyframe_capacity
                ),
            });
        }
        Ok(())
    }
}
