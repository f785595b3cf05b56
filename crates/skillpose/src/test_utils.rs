//! Shared synthetic landmark frames for unit tests.
//!
//! Frames are idealized geometries: each relevant limb is collinear so
//! joint angles come out exactly 180°, and unused landmarks (face,
//! fingers) sit at a neutral spot with full visibility.

use crate::landmark::{self, Landmark};

fn neutral_frame() -> [Landmark; 33] {
    [Landmark::new(0.0, 0.0, 0.0, 1.0); 33]
}

fn set(frame: &mut [Landmark; 33], idx: usize, x: f64, y: f64) {
    frame[idx] = Landmark::new(x, y, 0.0, 1.0);
}

/// Every landmark at the same spot; degenerate geometry.
pub(crate) fn uniform_frame(x: f64, y: f64, visibility: f64) -> [Landmark; 33] {
    [Landmark::new(x, y, 0.0, visibility); 33]
}

/// Perfect vertical handstand: ankles highest, wrists lowest, straight
/// arms and legs, body exactly vertical, shoulder/hip width 1.0.
pub(crate) fn handstand_frame() -> [Landmark; 33] {
    let mut f = neutral_frame();
    set(&mut f, landmark::LEFT_ANKLE, -0.5, 0.0);
    set(&mut f, landmark::RIGHT_ANKLE, 0.5, 0.0);
    set(&mut f, landmark::LEFT_KNEE, -0.5, 0.5);
    set(&mut f, landmark::RIGHT_KNEE, 0.5, 0.5);
    set(&mut f, landmark::LEFT_HIP, -0.5, 1.0);
    set(&mut f, landmark::RIGHT_HIP, 0.5, 1.0);
    set(&mut f, landmark::LEFT_SHOULDER, -0.5, 2.0);
    set(&mut f, landmark::RIGHT_SHOULDER, 0.5, 2.0);
    set(&mut f, landmark::LEFT_ELBOW, -0.5, 2.5);
    set(&mut f, landmark::RIGHT_ELBOW, 0.5, 2.5);
    set(&mut f, landmark::LEFT_WRIST, -0.5, 3.0);
    set(&mut f, landmark::RIGHT_WRIST, 0.5, 3.0);
    f
}

/// Human flag signature: wrists stacked vertically on the left, body
/// horizontal to the right, straight arms and legs.
pub(crate) fn human_flag_frame() -> [Landmark; 33] {
    let mut f = neutral_frame();
    set(&mut f, landmark::LEFT_WRIST, 0.0, 0.2);
    set(&mut f, landmark::RIGHT_WRIST, 0.0, 0.6);
    set(&mut f, landmark::LEFT_ELBOW, 0.1, 0.275);
    set(&mut f, landmark::RIGHT_ELBOW, 0.1, 0.525);
    set(&mut f, landmark::LEFT_SHOULDER, 0.2, 0.35);
    set(&mut f, landmark::RIGHT_SHOULDER, 0.2, 0.45);
    set(&mut f, landmark::LEFT_HIP, 0.45, 0.35);
    set(&mut f, landmark::RIGHT_HIP, 0.45, 0.45);
    set(&mut f, landmark::LEFT_KNEE, 0.65, 0.35);
    set(&mut f, landmark::RIGHT_KNEE, 0.65, 0.45);
    set(&mut f, landmark::LEFT_ANKLE, 0.9, 0.35);
    set(&mut f, landmark::RIGHT_ANKLE, 0.9, 0.45);
    f
}
