//! skillpose-server — HTTP front-end for the pose classifier.
//!
//! Exposes `GET /health` and `POST /pose/classify`, and optionally appends
//! accepted frames to an append-only CSV dataset for later labeling.

use std::path::PathBuf;
use std::sync::Arc;

use skillpose::PoseClassifier;

mod dataset;
mod routes;

use routes::AppState;

const DEFAULT_DATASET_PATH: &str = "data/datasets/pose_samples.csv";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "skillpose_server=info,skillpose=info".into()),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    let port: u16 = args
        .iter()
        .position(|a| a == "--port" || a == "-p")
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
        .or_else(|| {
            std::env::var("SKILLPOSE_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
        })
        .unwrap_or(8000);

    let dataset_path: PathBuf = args
        .iter()
        .position(|a| a == "--dataset" || a == "-d")
        .and_then(|i| args.get(i + 1))
        .map(PathBuf::from)
        .or_else(|| std::env::var("SKILLPOSE_DATASET_CSV").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET_PATH));

    tracing::info!("Dataset CSV: {}", dataset_path.display());
    tracing::info!("Port: {}", port);

    let state = Arc::new(AppState {
        classifier: PoseClassifier::new(),
        dataset_path,
    });
    let app = routes::router(state);

    let addr = format!("0.0.0.0:{}", port);
    tracing::info!("skillpose server listening at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind listener");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to listen for ctrl+c");
    tracing::info!("Shutting down...");
}
