//! HTTP contract and handlers for the classification service.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};

use skillpose::{Landmark, PoseClassifier, PoseLabel, ScoreMap};

use crate::dataset;

pub struct AppState {
    pub classifier: PoseClassifier,
    pub dataset_path: PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub landmarks: Vec<Landmark>,
    /// Append this frame to the sample dataset and return its row id.
    #[serde(default)]
    pub save_sample: bool,
    /// User-confirmed ground-truth label, stored alongside the prediction.
    #[serde(default)]
    pub user_label: Option<String>,
    /// Free-form string metadata, stored as meta_* dataset columns.
    #[serde(default)]
    pub meta: Option<BTreeMap<String, String>>,
    /// Include the full per-pose score map in the response.
    #[serde(default = "default_include_debug")]
    pub include_debug: bool,
}

fn default_include_debug() -> bool {
    true
}

#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub pose: PoseLabel,
    pub confidence: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scores: Option<ScoreMap>,
    pub warnings: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type HandlerError = (StatusCode, Json<ErrorResponse>);

fn error_response(status: StatusCode, error: impl ToString) -> HandlerError {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/pose/classify", post(pose_classify))
        .layer(cors)
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn pose_classify(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ClassifyRequest>,
) -> Result<Json<ClassifyResponse>, HandlerError> {
    let result = state
        .classifier
        .classify(&req.landmarks)
        .map_err(|e| error_response(StatusCode::BAD_REQUEST, e))?;

    let sample_id = if req.save_sample {
        let meta = req.meta.unwrap_or_default();
        let id = dataset::append_sample(
            &state.dataset_path,
            &req.landmarks,
            &result,
            req.user_label.as_deref(),
            &meta,
        )
        .map_err(|e| {
            tracing::error!("failed to append dataset sample: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e)
        })?;
        Some(id)
    } else {
        None
    };

    Ok(Json(ClassifyResponse {
        pose: result.label,
        confidence: result.confidence,
        scores: req.include_debug.then_some(result.scores),
        warnings: result.warnings,
        sample_id,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> Vec<Landmark> {
        vec![Landmark::new(0.5, 0.5, 0.0, 1.0); 33]
    }

    fn test_state(dir: &tempfile::TempDir) -> Arc<AppState> {
        Arc::new(AppState {
            classifier: PoseClassifier::new(),
            dataset_path: dir.path().join("pose_samples.csv"),
        })
    }

    #[tokio::test]
    async fn classify_rejects_wrong_cardinality() {
        let dir = tempfile::tempdir().unwrap();
        let req = ClassifyRequest {
            landmarks: frame()[..32].to_vec(),
            save_sample: false,
            user_label: None,
            meta: None,
            include_debug: true,
        };
        let err = pose_classify(State(test_state(&dir)), Json(req))
            .await
            .unwrap_err();
        assert_eq!(err.0, StatusCode::BAD_REQUEST);
        assert!(err.1.error.contains("expected 33 landmarks"));
    }

    #[tokio::test]
    async fn classify_returns_scores_and_optionally_saves() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir);

        let req = ClassifyRequest {
            landmarks: frame(),
            save_sample: true,
            user_label: Some("L-Sit".into()),
            meta: Some(BTreeMap::from([("mode".into(), "photo".into())])),
            include_debug: true,
        };
        let out = pose_classify(State(state.clone()), Json(req))
            .await
            .unwrap();
        assert!(out.0.scores.is_some());
        assert!(out.0.sample_id.is_some());
        assert!(state.dataset_path.exists());
    }

    #[tokio::test]
    async fn include_debug_false_omits_score_map() {
        let dir = tempfile::tempdir().unwrap();
        let req = ClassifyRequest {
            landmarks: frame(),
            save_sample: false,
            user_label: None,
            meta: None,
            include_debug: false,
        };
        let out = pose_classify(State(test_state(&dir)), Json(req))
            .await
            .unwrap();
        assert!(out.0.scores.is_none());
        assert!(out.0.sample_id.is_none());
    }

    #[test]
    fn request_defaults_from_minimal_json() {
        let json = serde_json::json!({ "landmarks": frame() });
        let req: ClassifyRequest = serde_json::from_value(json).unwrap();
        assert!(!req.save_sample);
        assert!(req.include_debug);
        assert!(req.user_label.is_none());
        assert!(req.meta.is_none());
    }
}
