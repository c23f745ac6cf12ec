//! Error types for spline construction and path loading

use serde::{Deserialize, Serialize};

/// Errors raised while feeding keyframes or configuration into a curve.
///
/// Evaluation itself never fails; these only surface at insertion, config
/// and deserialization time.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum SplineError {
    /// Keyframe time is NaN or infinite
    #[error("Invalid keyframe time: {time}")]
    InvalidTime { time: f32 },

    /// Keyframe appended at or before the current last keyframe
    #[error("Keyframe time {time} must be greater than previous keyframe time {previous}")]
    OutOfOrder { time: f32, previous: f32 },

    /// Keyframe value cannot be represented (e.g. zero-length rotation)
    #[error("Invalid value: {reason}")]
    InvalidValue { reason: String },

    /// Configuration values out of range
    #[error("Invalid config: {reason}")]
    InvalidConfig { reason: String },

    /// Serialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl SplineError {
    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidTime { .. } | Self::OutOfOrder { .. } | Self::InvalidValue { .. } => {
                "validation"
            }
            Self::InvalidConfig { .. } => "config",
            Self::SerializationError { .. } => "serialization",
        }
    }
}

impl From<serde_json::Error> for SplineError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            reason: err.to_string(),
        }
    }
}
