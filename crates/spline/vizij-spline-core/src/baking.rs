//! Baking API: sample a path or curve at a fixed frame rate over a time window.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::curve::Curve;
use crate::data::PoseData;
use crate::path::CameraPath;
use crate::space::SplineSpace;

const DEFAULT_FRAME_RATE: f32 = 60.0;

/// Upper bound on samples per bake; denser requests are resampled to fit.
pub const MAX_BAKED_FRAMES: usize = 1 << 20;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct BakingConfig {
    /// Target frame rate (Hz) for baked samples.
    pub frame_rate: f32,
    /// Start time (seconds); if None, uses the first keyframe time.
    pub start_time: Option<f32>,
    /// End time (seconds); if None, uses the last keyframe time.
    pub end_time: Option<f32>,
}

impl Default for BakingConfig {
    fn default() -> Self {
        Self {
            frame_rate: DEFAULT_FRAME_RATE,
            start_time: None,
            end_time: None,
        }
    }
}

/// Resolved sampling window.
#[derive(Clone, Copy, Debug, PartialEq)]
struct BakeWindow {
    frame_rate: f32,
    start: f32,
    end: f32,
    frame_count: usize,
}

impl BakeWindow {
    fn resolve(cfg: &BakingConfig, range: Option<(f32, f32)>) -> Self {
        let frame_rate = if cfg.frame_rate.is_finite() && cfg.frame_rate > 0.0 {
            cfg.frame_rate
        } else {
            DEFAULT_FRAME_RATE
        };
        let (lo, hi) = range.unwrap_or((0.0, 0.0));
        let start = cfg
            .start_time
            .filter(|t| t.is_finite())
            .unwrap_or(lo)
            .clamp(lo, hi);
        let end = cfg
            .end_time
            .filter(|t| t.is_finite())
            .unwrap_or(hi)
            .clamp(start, hi);
        let span = end - start;
        let intervals = (span * frame_rate).ceil();
        let (frame_rate, frame_count) = if intervals < MAX_BAKED_FRAMES as f32 {
            (frame_rate, intervals as usize + 1) // inclusive of end
        } else {
            let fitted = (MAX_BAKED_FRAMES - 1) as f32 / span;
            warn!(
                "baking {span}s at {frame_rate} Hz exceeds {MAX_BAKED_FRAMES} frames; using {fitted} Hz"
            );
            (fitted, MAX_BAKED_FRAMES)
        };
        Self {
            frame_rate,
            start,
            end,
            frame_count,
        }
    }

    fn times(&self) -> impl Iterator<Item = f32> + '_ {
        (0..self.frame_count).map(move |f| (self.start + f as f32 / self.frame_rate).min(self.end))
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BakedPath {
    pub frame_rate: f32,
    pub start_time: f32,
    pub end_time: f32,
    pub poses: Vec<PoseData>,
}

#[derive(Clone, Debug)]
pub struct BakedCurve<T> {
    pub frame_rate: f32,
    pub start_time: f32,
    pub end_time: f32,
    pub values: Vec<T>,
}

/// Bake a camera path into per-frame poses.
pub fn bake_path(path: &mut CameraPath, cfg: &BakingConfig) -> BakedPath {
    let window = BakeWindow::resolve(cfg, path.time_range());
    let mut poses = Vec::with_capacity(window.frame_count);
    for t in window.times() {
        poses.push(PoseData::from(&path.evaluate(t)));
    }
    BakedPath {
        frame_rate: window.frame_rate,
        start_time: window.start,
        end_time: window.end,
        poses,
    }
}

/// Bake any single curve into per-frame values.
pub fn bake_curve<T: SplineSpace>(curve: &mut Curve<T>, cfg: &BakingConfig) -> BakedCurve<T> {
    let window = BakeWindow::resolve(cfg, curve.time_range());
    let mut values = Vec::with_capacity(window.frame_count);
    for t in window.times() {
        values.push(curve.evaluate(t));
    }
    BakedCurve {
        frame_rate: window.frame_rate,
        start_time: window.start,
        end_time: window.end,
        values,
    }
}

/// Export baked data as serde_json::Value (stable schema for FFI/serialization).
pub fn export_baked_json(baked: &BakedPath) -> serde_json::Value {
    serde_json::to_value(baked).unwrap_or(serde_json::Value::Null)
}
