//! skillpose — heuristic classifier for static calisthenics skill poses.
//!
//! Input is one frame of MediaPipe Pose output: 33 landmarks with image
//! coordinates, a coarse relative depth and a per-landmark visibility.
//! The pipeline stages are:
//!
//! 1. **Features** – scale-normalized geometric features (joint angles,
//!    body/torso tilt, wrist gaps, mean heights, segment lengths).
//! 2. **Scoring** – one weighted fuzzy scorer per pose class, each mapping
//!    the feature bag to a confidence in [0, 1].
//! 3. **Lever split** – a depth heuristic divides the generic lever score
//!    into Front Lever and Back Lever.
//! 4. **Selection** – best label by confidence, plus advisory warnings for
//!    low landmark visibility and low winning confidence.
//!
//! # Public API
//! The stable surface is intentionally small:
//! - [`PoseClassifier`] and [`ClassifyConfig`] as primary entry points
//! - [`Landmark`] as the input record, [`Classification`] as the output
//! - [`PoseLabel`] and [`ScoreMap`] for inspecting per-pose confidences
//!
//! Scoring weights and tolerances are fixed design constants, not part of
//! the configurable surface.

mod api;
mod classify;
mod features;
mod geometry;
mod landmark;
mod scoring;

#[cfg(test)]
pub(crate) mod test_utils;

pub use api::PoseClassifier;
pub use classify::{Classification, ClassifyConfig, ClassifyError};
pub use features::PoseFeatures;
pub use landmark::{midpoint, Landmark, LANDMARK_COUNT};
pub use scoring::{PoseLabel, ScoreMap};
