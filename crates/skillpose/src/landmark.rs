//! Input landmark record and the MediaPipe Pose index map.
//!
//! Landmark order is fixed by the upstream pose estimator (MediaPipe Pose,
//! 33 points). Only the indices used by the feature extractor are named
//! here; the full array is still required so callers cannot silently feed
//! a partial detection.

use serde::{Deserialize, Serialize};

/// Number of landmarks in one MediaPipe Pose frame.
pub const LANDMARK_COUNT: usize = 33;

pub(crate) const NOSE: usize = 0;
pub(crate) const LEFT_SHOULDER: usize = 11;
pub(crate) const RIGHT_SHOULDER: usize = 12;
pub(crate) const LEFT_ELBOW: usize = 13;
pub(crate) const RIGHT_ELBOW: usize = 14;
pub(crate) const LEFT_WRIST: usize = 15;
pub(crate) const RIGHT_WRIST: usize = 16;
pub(crate) const LEFT_HIP: usize = 23;
pub(crate) const RIGHT_HIP: usize = 24;
pub(crate) const LEFT_KNEE: usize = 25;
pub(crate) const RIGHT_KNEE: usize = 26;
pub(crate) const LEFT_ANKLE: usize = 27;
pub(crate) const RIGHT_ANKLE: usize = 28;

/// One tracked anatomical point.
///
/// `x` and `y` are image coordinates (y grows downward, so smaller `y` is
/// physically higher); `z` is the estimator's coarse relative depth.
/// `visibility` is detector confidence, nominally in [0, 1] but not
/// enforced at this layer.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
    /// Relative depth; more negative is closer to the camera.
    #[serde(default)]
    pub z: f64,
    /// Per-landmark detector confidence, a data-quality signal only.
    #[serde(default)]
    pub visibility: f64,
}

impl Landmark {
    pub fn new(x: f64, y: f64, z: f64, visibility: f64) -> Self {
        Self { x, y, z, visibility }
    }
}

/// Component-wise midpoint of two landmarks (visibility included).
pub fn midpoint(a: &Landmark, b: &Landmark) -> Landmark {
    Landmark {
        x: 0.5 * (a.x + b.x),
        y: 0.5 * (a.y + b.y),
        z: 0.5 * (a.z + b.z),
        visibility: 0.5 * (a.visibility + b.visibility),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_averages_all_components() {
        let a = Landmark::new(0.0, 2.0, -1.0, 1.0);
        let b = Landmark::new(1.0, 0.0, 3.0, 0.0);
        let m = midpoint(&a, &b);
        assert_eq!(m.x, 0.5);
        assert_eq!(m.y, 1.0);
        assert_eq!(m.z, 1.0);
        assert_eq!(m.visibility, 0.5);
    }

    #[test]
    fn landmark_json_defaults_z_and_visibility() {
        let lm: Landmark = serde_json::from_str(r#"{"x":0.5,"y":0.25}"#).unwrap();
        assert_eq!(lm.z, 0.0);
        assert_eq!(lm.visibility, 0.0);
    }
}
