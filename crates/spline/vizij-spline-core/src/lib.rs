//! Vizij Spline Core (engine-agnostic)
//!
//! Keyframe splines over arbitrary value spaces. One curve construction and
//! evaluation path drives both positions (linear blending) and rotations
//! (shortest-arc slerp); the value space only supplies blend / diff / scale /
//! compose through [`SplineSpace`].
//!
//! - [`Curve`]: keyframes in, C1 cubic segments built lazily, sampled by
//!   de Casteljau reduction with clamping outside the keyframe range.
//! - [`CameraPath`]: a position curve and a rotation curve on one timeline,
//!   evaluated into a [`Pose`] once per frame.

pub mod baking;
mod build;
pub mod config;
pub mod curve;
pub mod data;
pub mod error;
pub mod keyframe;
pub mod path;
pub mod segment;
pub mod space;

// Re-exports for consumers (renderers, adapters)
pub use baking::{
    bake_curve, bake_path, export_baked_json, BakedCurve, BakedPath, BakingConfig,
    MAX_BAKED_FRAMES,
};
pub use config::SplineConfig;
pub use curve::Curve;
pub use data::{PathData, PathKeyframeData, PoseData};
pub use error::SplineError;
pub use keyframe::{Continuity, Keyframe};
pub use path::{CameraPath, PathKeyframe, Pose, PosePath};
pub use segment::Segment;
pub use space::SplineSpace;

/// Spline result type
pub type Result<T> = core::result::Result<T, SplineError>;
