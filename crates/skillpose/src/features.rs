//! Scale-normalized geometric features derived from one landmark frame.

use serde::Serialize;

use crate::geometry::{angle_at, dist2d, line_angle};
use crate::landmark::{self, midpoint, Landmark};

/// Floor for the body-scale normalizer, guarding against a frame where
/// shoulders and hips collapse to coincident points.
const SCALE_FLOOR: f64 = 1e-3;

/// Fixed bag of scalar features, recomputed per call and never cached.
///
/// Tilt convention: 0 = horizontal, 90 = vertical, always in [0, 90].
/// Mean heights follow the image convention (smaller y = physically
/// higher). Distances are divided by [`PoseFeatures::scale`] so they are
/// resolution-invariant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PoseFeatures {
    /// Body scale: max(shoulder width, hip width, 1e-3).
    pub scale: f64,
    /// Left/right elbow vertex angles, degrees (180 = straight arm).
    pub elbow_l: f64,
    pub elbow_r: f64,
    /// Left/right knee vertex angles, degrees (180 = straight leg).
    pub knee_l: f64,
    pub knee_r: f64,
    /// Tilt of the shoulder-midpoint → ankle-midpoint segment, [0, 90].
    pub body_tilt: f64,
    /// Tilt of the shoulder-midpoint → hip-midpoint segment, [0, 90].
    pub torso_tilt: f64,
    /// Absolute vertical / horizontal gap between the wrists.
    pub wrist_dy: f64,
    pub wrist_dx: f64,
    /// Mean y of the wrist / shoulder / hip / ankle pairs.
    pub wrist_y: f64,
    pub shoulder_y: f64,
    pub hip_y: f64,
    pub ankle_y: f64,
    /// Scale-normalized midpoint distances.
    pub wrist_shoulder_dist: f64,
    pub shoulder_hip_dist: f64,
    pub hip_ankle_dist: f64,
}

/// Fold a signed segment angle into tilt-from-horizontal in [0, 90].
fn fold_tilt(angle_deg: f64) -> f64 {
    let mut t = angle_deg.abs();
    if t > 180.0 {
        t = 360.0 - t;
    }
    if t > 90.0 {
        t = 180.0 - t;
    }
    t
}

/// Derive the feature bag from a full landmark frame.
///
/// The caller (the classifier orchestrator) has already checked that
/// `lms` holds exactly 33 points.
pub(crate) fn extract(lms: &[Landmark]) -> PoseFeatures {
    let ls = &lms[landmark::LEFT_SHOULDER];
    let rs = &lms[landmark::RIGHT_SHOULDER];
    let lh = &lms[landmark::LEFT_HIP];
    let rh = &lms[landmark::RIGHT_HIP];
    let la = &lms[landmark::LEFT_ANKLE];
    let ra = &lms[landmark::RIGHT_ANKLE];
    let lw = &lms[landmark::LEFT_WRIST];
    let rw = &lms[landmark::RIGHT_WRIST];
    let le = &lms[landmark::LEFT_ELBOW];
    let re = &lms[landmark::RIGHT_ELBOW];
    let lk = &lms[landmark::LEFT_KNEE];
    let rk = &lms[landmark::RIGHT_KNEE];

    let shoulder_mid = midpoint(ls, rs);
    let hip_mid = midpoint(lh, rh);
    let ankle_mid = midpoint(la, ra);
    let wrist_mid = midpoint(lw, rw);

    let scale = dist2d(ls, rs).max(dist2d(lh, rh)).max(SCALE_FLOOR);

    PoseFeatures {
        scale,
        elbow_l: angle_at(le, ls, lw),
        elbow_r: angle_at(re, rs, rw),
        knee_l: angle_at(lk, lh, la),
        knee_r: angle_at(rk, rh, ra),
        body_tilt: fold_tilt(line_angle(&shoulder_mid, &ankle_mid)),
        torso_tilt: fold_tilt(line_angle(&shoulder_mid, &hip_mid)),
        wrist_dy: (lw.y - rw.y).abs(),
        wrist_dx: (lw.x - rw.x).abs(),
        wrist_y: 0.5 * (lw.y + rw.y),
        shoulder_y: 0.5 * (ls.y + rs.y),
        hip_y: 0.5 * (lh.y + rh.y),
        ankle_y: 0.5 * (la.y + ra.y),
        wrist_shoulder_dist: dist2d(&wrist_mid, &shoulder_mid) / scale,
        shoulder_hip_dist: dist2d(&shoulder_mid, &hip_mid) / scale,
        hip_ankle_dist: dist2d(&hip_mid, &ankle_mid) / scale,
    }
}
