//! 2D geometric primitives shared by feature extraction and scoring.
//!
//! All angles are in degrees. Degenerate inputs resolve to defined values
//! (0° angles, zero closeness) instead of NaN so downstream scoring never
//! has to branch on validity.

use crate::landmark::Landmark;

/// Length floor below which a ray is treated as degenerate.
const DEGENERATE_RAY_LEN: f64 = 1e-6;

/// Clamp to [0, 1].
pub(crate) fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

/// Euclidean distance on (x, y); z is ignored.
pub(crate) fn dist2d(a: &Landmark, b: &Landmark) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Unsigned angle in degrees at `vertex` between rays vertex→a and
/// vertex→c, computed as `atan2(|cross|, dot)` for stability near 0°/180°.
///
/// Returns exactly 0.0 when either ray is shorter than 1e-6.
pub(crate) fn angle_at(vertex: &Landmark, a: &Landmark, c: &Landmark) -> f64 {
    let (ux, uy) = (a.x - vertex.x, a.y - vertex.y);
    let (vx, vy) = (c.x - vertex.x, c.y - vertex.y);

    let nu = (ux * ux + uy * uy).sqrt();
    let nv = (vx * vx + vy * vy).sqrt();
    if nu < DEGENERATE_RAY_LEN || nv < DEGENERATE_RAY_LEN {
        return 0.0;
    }

    let dot = ux * vx + uy * vy;
    let cross = ux * vy - uy * vx;
    cross.abs().atan2(dot).to_degrees()
}

/// Signed angle in degrees, range (-180, 180], of the vector a→b relative
/// to the +x axis.
pub(crate) fn line_angle(a: &Landmark, b: &Landmark) -> f64 {
    (b.y - a.y).atan2(b.x - a.x).to_degrees()
}

/// Triangular fuzzy membership: 1 at `value == target`, falling linearly
/// to 0 at `|value - target| >= tol`. Returns 0 for non-positive `tol`.
pub(crate) fn closeness(target: f64, value: f64, tol: f64) -> f64 {
    if tol <= 0.0 {
        return 0.0;
    }
    clamp01(1.0 - (value - target).abs() / tol)
}
