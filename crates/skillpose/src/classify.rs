//! Classification orchestration: visibility audit → features → scores →
//! selection → advisory warnings.

use serde::{Deserialize, Serialize};

use crate::features;
use crate::landmark::{Landmark, LANDMARK_COUNT};
use crate::scoring::{self, PoseLabel, ScoreMap};

/// Winning confidence below which a better-framing advisory is attached.
const LOW_CONFIDENCE_THRESHOLD: f64 = 0.55;

/// More low-visibility landmarks than this triggers a reliability advisory.
const MAX_LOW_VISIBILITY_LANDMARKS: usize = 10;

/// Tunable classification parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassifyConfig {
    /// Landmarks below this visibility count toward the low-visibility
    /// advisory. The advisory never blocks classification.
    pub min_visibility: f64,
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        Self { min_visibility: 0.4 }
    }
}

/// Errors returned by pose classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    /// The landmark frame does not hold exactly 33 points.
    LandmarkCount {
        /// Provided number of landmarks.
        got: usize,
    },
}

impl std::fmt::Display for ClassifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LandmarkCount { got } => {
                write!(f, "expected {} landmarks, got {}", LANDMARK_COUNT, got)
            }
        }
    }
}

impl std::error::Error for ClassifyError {}

/// Full classification result for a single landmark frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    /// Best-scoring pose label.
    pub label: PoseLabel,
    /// Confidence of the best label, in [0, 1].
    pub confidence: f64,
    /// Confidences for all 7 labels.
    pub scores: ScoreMap,
    /// Advisory warnings, in the order they were raised. Never fatal.
    pub warnings: Vec<String>,
}

/// Classify one landmark frame.
///
/// The only fatal condition is a frame with the wrong landmark count.
/// Everything else degrades to advisory warnings on a returned result.
pub(crate) fn classify(
    lms: &[Landmark],
    config: &ClassifyConfig,
) -> Result<Classification, ClassifyError> {
    if lms.len() != LANDMARK_COUNT {
        return Err(ClassifyError::LandmarkCount { got: lms.len() });
    }

    let mut warnings = Vec::new();

    let low_vis = lms
        .iter()
        .filter(|lm| lm.visibility < config.min_visibility)
        .count();
    if low_vis > MAX_LOW_VISIBILITY_LANDMARKS {
        tracing::warn!(low_vis, "low landmark visibility");
        warnings.push(format!(
            "Low landmark visibility on {}/{} points (pose classification may be unreliable).",
            low_vis, LANDMARK_COUNT
        ));
    }

    let f = features::extract(lms);

    let mut scores = ScoreMap::default();
    for (label, scorer) in scoring::DIRECT_SCORERS {
        scores.set(label, scorer(&f));
    }
    let (front, back) = scoring::split_lever_score(scoring::score_lever_generic(&f), lms);
    scores.set(PoseLabel::FrontLever, front);
    scores.set(PoseLabel::BackLever, back);

    let (label, confidence) = scores.best();
    tracing::debug!(%label, confidence, "pose classified");

    if confidence < LOW_CONFIDENCE_THRESHOLD {
        warnings.push(format!(
            "Low confidence ({:.2}). Consider better framing: full body, good light, camera straight.",
            confidence
        ));
    }

    Ok(Classification {
        label,
        confidence,
        scores,
        warnings,
    })
}
