//! High-level classification API.
//!
//! [`PoseClassifier`] is the primary entry point. It wraps a
//! [`ClassifyConfig`] and stays valid across calls: create once, classify
//! many frames. Calls are pure and hold no cross-call state, so a shared
//! reference can be used from any number of threads without locking.

use crate::classify::{self, Classification, ClassifyConfig, ClassifyError};
use crate::landmark::Landmark;

/// Primary classification interface.
///
/// # Examples
///
/// ```
/// use skillpose::{Landmark, PoseClassifier};
///
/// let classifier = PoseClassifier::new();
/// let frame = vec![Landmark::new(0.5, 0.5, 0.0, 1.0); 33];
/// let result = classifier.classify(&frame).unwrap();
/// println!("{} ({:.2})", result.label, result.confidence);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PoseClassifier {
    config: ClassifyConfig,
}

impl PoseClassifier {
    /// Create a classifier with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with full config control.
    pub fn with_config(config: ClassifyConfig) -> Self {
        Self { config }
    }

    /// Access the current configuration.
    pub fn config(&self) -> &ClassifyConfig {
        &self.config
    }

    /// Mutable access to configuration for post-construction tuning.
    pub fn config_mut(&mut self) -> &mut ClassifyConfig {
        &mut self.config
    }

    /// Classify one frame of exactly 33 landmarks.
    ///
    /// Fails only on a wrong landmark count; every other anomaly degrades
    /// to advisory warnings on the returned [`Classification`].
    pub fn classify(&self, landmarks: &[Landmark]) -> Result<Classification, ClassifyError> {
        classify::classify(landmarks, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::handstand_frame;
    use crate::PoseLabel;

    #[test]
    fn classifier_basic_classify() {
        let c = PoseClassifier::new();
        let out = c.classify(&handstand_frame()).unwrap();
        assert_eq!(out.label, PoseLabel::Handstand);
    }

    #[test]
    fn classifier_config_mut() {
        let mut c = PoseClassifier::new();
        c.config_mut().min_visibility = 0.8;
        assert_eq!(c.config().min_visibility, 0.8);
    }

    #[test]
    fn classification_serializes_with_score_map() {
        let c = PoseClassifier::new();
        let out = c.classify(&handstand_frame()).unwrap();
        let v: serde_json::Value = serde_json::to_value(&out).unwrap();
        assert_eq!(v["label"], "Handstand");
        assert_eq!(v["scores"].as_object().unwrap().len(), 7);
        assert!(v["warnings"].as_array().unwrap().is_empty());
    }
}
