//! Keyframes and continuity modes.

use serde::{Deserialize, Serialize};

/// A value the curve must pass through at `time` (seconds).
#[derive(Clone, Debug, PartialEq)]
pub struct Keyframe<T> {
    pub value: T,
    pub time: f32,
}

impl<T> Keyframe<T> {
    pub fn new(value: T, time: f32) -> Self {
        Self { value, time }
    }
}

/// Target smoothness across segment joins.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Continuity {
    /// Matching first derivatives (C1).
    #[default]
    Cubic,
    /// Matching second derivatives (C2). Built with cubic controls for now.
    Quintic,
}
