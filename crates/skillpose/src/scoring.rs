//! Per-pose fuzzy scorers and the front/back lever split.
//!
//! Each scorer is a pure function of the feature bag: a weighted sum of
//! [`closeness`] sub-signals and hard 0/1 height-order indicators, with
//! weights summing to 1.0 by construction, then clamped to [0, 1].
//! Weights and tolerances are fixed design constants; changing them
//! changes classification behavior for every caller.

use serde::ser::SerializeMap;

use crate::features::PoseFeatures;
use crate::geometry::{clamp01, closeness};
use crate::landmark::{self, Landmark};

// ── Labels ─────────────────────────────────────────────────────────────────

/// The closed set of recognized skill poses.
///
/// Enumeration order is fixed: it is the tie-break order used when two
/// poses score identically (first listed wins).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum PoseLabel {
    #[serde(rename = "Full Planche")]
    FullPlanche,
    #[serde(rename = "L-Sit")]
    LSit,
    #[serde(rename = "Front Lever")]
    FrontLever,
    #[serde(rename = "Human Flag")]
    HumanFlag,
    #[serde(rename = "Handstand")]
    Handstand,
    #[serde(rename = "Elbow Lever")]
    ElbowLever,
    #[serde(rename = "Back Lever")]
    BackLever,
}

impl PoseLabel {
    /// All labels in the fixed enumeration (tie-break) order.
    pub const ALL: [PoseLabel; 7] = [
        PoseLabel::FullPlanche,
        PoseLabel::LSit,
        PoseLabel::FrontLever,
        PoseLabel::HumanFlag,
        PoseLabel::Handstand,
        PoseLabel::ElbowLever,
        PoseLabel::BackLever,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PoseLabel::FullPlanche => "Full Planche",
            PoseLabel::LSit => "L-Sit",
            PoseLabel::FrontLever => "Front Lever",
            PoseLabel::HumanFlag => "Human Flag",
            PoseLabel::Handstand => "Handstand",
            PoseLabel::ElbowLever => "Elbow Lever",
            PoseLabel::BackLever => "Back Lever",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|&l| l == self).unwrap_or(0)
    }
}

impl std::fmt::Display for PoseLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Score map ──────────────────────────────────────────────────────────────

/// Per-pose confidences: exactly one entry per [`PoseLabel`], stored in
/// enumeration order. Serializes as a JSON map of label → confidence.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScoreMap {
    scores: [f64; 7],
}

impl ScoreMap {
    pub(crate) fn set(&mut self, label: PoseLabel, score: f64) {
        self.scores[label.index()] = score;
    }

    /// Confidence for one label.
    pub fn get(&self, label: PoseLabel) -> f64 {
        self.scores[label.index()]
    }

    /// All (label, confidence) entries in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (PoseLabel, f64)> + '_ {
        PoseLabel::ALL.iter().map(move |&l| (l, self.get(l)))
    }

    /// Entry with the maximum confidence; ties resolve to the label listed
    /// first in [`PoseLabel::ALL`].
    pub fn best(&self) -> (PoseLabel, f64) {
        let mut best = (PoseLabel::ALL[0], self.scores[0]);
        for (label, score) in self.iter().skip(1) {
            if score > best.1 {
                best = (label, score);
            }
        }
        best
    }
}

impl serde::Serialize for ScoreMap {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(7))?;
        for (label, score) in self.iter() {
            map.serialize_entry(label.as_str(), &score)?;
        }
        map.end()
    }
}

// ── Direct scorers ─────────────────────────────────────────────────────────

/// Labels scored directly from the feature bag, with their scorer.
/// Front/Back Lever are produced by the lever split instead.
pub(crate) const DIRECT_SCORERS: [(PoseLabel, fn(&PoseFeatures) -> f64); 5] = [
    (PoseLabel::Handstand, score_handstand),
    (PoseLabel::HumanFlag, score_human_flag),
    (PoseLabel::FullPlanche, score_full_planche),
    (PoseLabel::ElbowLever, score_elbow_lever),
    (PoseLabel::LSit, score_l_sit),
];

/// Mean closeness of the left/right angle pair to `target`.
fn pair_closeness(target: f64, left: f64, right: f64, tol: f64) -> f64 {
    0.5 * (closeness(target, left, tol) + closeness(target, right, tol))
}

fn score_handstand(f: &PoseFeatures) -> f64 {
    // Inversion order: ankles above hips above shoulders above wrists.
    let inverted = if f.ankle_y < f.hip_y && f.hip_y < f.shoulder_y && f.shoulder_y < f.wrist_y {
        1.0
    } else {
        0.0
    };
    let vertical = closeness(90.0, f.body_tilt, 18.0);
    let elbows = pair_closeness(180.0, f.elbow_l, f.elbow_r, 30.0);
    let knees = pair_closeness(180.0, f.knee_l, f.knee_r, 25.0);
    // Hands roughly under the shoulders, wide tolerance.
    let hands_close = closeness(0.6, f.wrist_shoulder_dist, 0.5);

    clamp01(0.35 * inverted + 0.25 * vertical + 0.20 * elbows + 0.15 * knees + 0.05 * hands_close)
}

fn score_human_flag(f: &PoseFeatures) -> f64 {
    // Signature: wrists stacked vertically (large dy, small dx) on a
    // horizontal body.
    let wrists_stacked =
        clamp01((f.wrist_dy - 0.18) / 0.25) * clamp01(1.0 - f.wrist_dx / 0.12);
    let horizontal = closeness(0.0, f.body_tilt, 15.0);
    let knees = pair_closeness(180.0, f.knee_l, f.knee_r, 25.0);
    let elbows = pair_closeness(180.0, f.elbow_l, f.elbow_r, 35.0);

    clamp01(0.45 * wrists_stacked + 0.30 * horizontal + 0.15 * knees + 0.10 * elbows)
}

fn score_full_planche(f: &PoseFeatures) -> f64 {
    let hands_below = if f.wrist_y > f.shoulder_y { 1.0 } else { 0.0 };
    let horizontal = closeness(0.0, f.body_tilt, 15.0);
    let elbows = pair_closeness(180.0, f.elbow_l, f.elbow_r, 25.0);
    let knees = pair_closeness(180.0, f.knee_l, f.knee_r, 25.0);
    // Wrists close under the shoulders (planche support position).
    let support = closeness(0.5, f.wrist_shoulder_dist, 0.35);

    clamp01(0.25 * hands_below + 0.30 * horizontal + 0.25 * elbows + 0.10 * knees + 0.10 * support)
}

fn score_elbow_lever(f: &PoseFeatures) -> f64 {
    // Horizontal like a planche, but with deliberately bent elbows (~95°).
    let horizontal = closeness(0.0, f.body_tilt, 18.0);
    let elbows_bent = pair_closeness(95.0, f.elbow_l, f.elbow_r, 35.0);
    let knees = pair_closeness(180.0, f.knee_l, f.knee_r, 35.0);
    let hands_below = if f.wrist_y > f.shoulder_y { 1.0 } else { 0.0 };

    clamp01(0.35 * horizontal + 0.35 * elbows_bent + 0.15 * knees + 0.15 * hands_below)
}

fn score_l_sit(f: &PoseFeatures) -> f64 {
    let torso_vertical = closeness(90.0, f.torso_tilt, 20.0);
    let legs_horizontal = closeness(0.0, f.body_tilt, 18.0);
    // Legs raised to hip height.
    let legs_raised = closeness(0.0, (f.hip_y - f.ankle_y).abs(), 0.10);
    let elbows = pair_closeness(180.0, f.elbow_l, f.elbow_r, 30.0);
    let hands_below = if f.wrist_y > f.shoulder_y { 1.0 } else { 0.0 };

    clamp01(
        0.25 * torso_vertical
            + 0.25 * legs_horizontal
            + 0.20 * legs_raised
            + 0.20 * elbows
            + 0.10 * hands_below,
    )
}

// ── Lever scoring and front/back split ─────────────────────────────────────

/// Generic lever: horizontal body hanging from an overhead bar with
/// straight limbs. Split into Front/Back Lever by [`split_lever_score`].
pub(crate) fn score_lever_generic(f: &PoseFeatures) -> f64 {
    let horizontal = closeness(0.0, f.body_tilt, 15.0);
    let hands_above = if f.wrist_y < f.shoulder_y { 1.0 } else { 0.0 };
    let elbows = pair_closeness(180.0, f.elbow_l, f.elbow_r, 30.0);
    let knees = pair_closeness(180.0, f.knee_l, f.knee_r, 30.0);

    clamp01(0.40 * horizontal + 0.20 * hands_above + 0.20 * elbows + 0.20 * knees)
}

/// Coarse front-vs-back orientation hint from raw depth coordinates.
///
/// MediaPipe z is only roughly "depth", so this stays deliberately soft:
/// positive leans front (face closer to the camera than the hips),
/// negative leans back.
fn front_back_hint(lms: &[Landmark]) -> f64 {
    let shoulder_z =
        0.5 * (lms[landmark::LEFT_SHOULDER].z + lms[landmark::RIGHT_SHOULDER].z);
    let hip_z = 0.5 * (lms[landmark::LEFT_HIP].z + lms[landmark::RIGHT_HIP].z);
    let nose_z = lms[landmark::NOSE].z;

    (hip_z - nose_z) + 0.3 * (hip_z - shoulder_z)
}

/// Split the generic lever score into (front, back) confidences.
///
/// The two weights are each clamped to [0, 1] independently and do NOT
/// sum to 1; the asymmetric soft split is intentional and must not be
/// normalized.
pub(crate) fn split_lever_score(lever_score: f64, lms: &[Landmark]) -> (f64, f64) {
    let hint = front_back_hint(lms);
    let front_weight = clamp01(0.5 + 0.25 * hint);
    let back_weight = clamp01(0.5 - 0.25 * hint);
    (
        clamp01(lever_score * front_weight),
        clamp01(lever_score * back_weight),
    )
}
