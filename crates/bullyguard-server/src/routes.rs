//! HTTP routes and handlers

use axum::{
    extract::{Multipart, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, info, warn};

use crate::batch;
use crate::state::AppState;
use bullyguard_core::{parse_reply, BatchEntry, DashboardSnapshot, Error};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(render_metrics))
        .route("/predict", post(predict))
        .route("/predict_csv", post(predict_csv))
        .route("/stats", get(stats))
        .route("/download", get(download))
        .fallback(fallback)
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn render_metrics(State(state): State<AppState>) -> String {
    state.metrics_handle.render()
}

/// Single-message classification request
#[derive(Debug, Deserialize)]
struct PredictRequest {
    /// Message text; an absent field classifies the empty string
    #[serde(default)]
    tweet: String,
}

/// Single-message classification response
#[derive(Debug, Serialize)]
struct PredictResponse {
    label: &'static str,
    confidence: f64,
    explanation: String,
    highlights: String,
    /// Kept for dashboard compatibility; duplicates `explanation`
    explainable: String,
}

/// Classify one message and fold it into the running counters
async fn predict(
    State(state): State<AppState>,
    Json(req): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, AppError> {
    metrics::counter!("bullyguard_requests_total", "route" => "predict").increment(1);

    let reply = state.classifier.classify(&req.tweet).await?;
    let record = parse_reply(&reply);
    state.store.record_one(&record);

    let verdict = record.verdict();
    metrics::counter!("bullyguard_classifications_total", "verdict" => verdict.as_str())
        .increment(1);
    debug!(
        verdict = verdict.as_str(),
        confidence = record.confidence,
        "message classified"
    );

    Ok(Json(PredictResponse {
        label: verdict.as_str(),
        confidence: record.confidence,
        explanation: record.explanation.clone(),
        highlights: record.highlights,
        explainable: record.explanation,
    }))
}

/// Classify every row of an uploaded CSV and record the batch as a unit
async fn predict_csv(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Html<String>, AppError> {
    metrics::counter!("bullyguard_requests_total", "route" => "predict_csv").increment(1);

    let upload = read_csv_part(&mut multipart).await?;
    let texts = batch::read_batch_texts(&upload)?;
    info!(rows = texts.len(), "processing uploaded batch");

    let mut entries = Vec::with_capacity(texts.len());
    for text in texts {
        // One failing row aborts the whole batch; nothing gets recorded
        let reply = state.classifier.classify(&text).await?;
        let record = parse_reply(&reply);
        entries.push(BatchEntry::new(text, record));
    }

    for entry in &entries {
        metrics::counter!(
            "bullyguard_classifications_total",
            "verdict" => entry.record.verdict().as_str()
        )
        .increment(1);
    }
    state.store.record_batch(&entries)?;

    Ok(Html(batch::render_html_table(&entries)))
}

/// Pull the `csv` part out of the upload and gate on the filename suffix.
/// The suffix check is deliberately filename-only; content problems surface
/// later as unreadable rows.
async fn read_csv_part(multipart: &mut Multipart) -> Result<Vec<u8>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("malformed multipart body: {e}")))?
    {
        if field.name() != Some("csv") {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        if !filename.ends_with(".csv") {
            warn!(%filename, "rejecting upload with wrong extension");
            return Err(AppError::InvalidInput("Invalid file type".to_string()));
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::InvalidInput(format!("failed to read upload: {e}")))?;
        return Ok(data.to_vec());
    }

    Err(AppError::InvalidInput("No file uploaded".to_string()))
}

async fn stats(State(state): State<AppState>) -> Json<DashboardSnapshot> {
    Json(state.store.snapshot())
}

async fn download(State(state): State<AppState>) -> Response {
    let body = state.store.last_batch_csv();
    (
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"cyberbullying_results.csv\"",
            ),
        ],
        body,
    )
        .into_response()
}

async fn fallback() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not found")
}

/// Error handling
#[derive(Debug)]
enum AppError {
    InvalidInput(String),
    Provider(String),
    Timeout,
    Internal(String),
}

impl From<Error> for AppError {
    fn from(err: Error) -> Self {
        match err {
            Error::InvalidInput(msg) => AppError::InvalidInput(msg),
            Error::Provider(msg) => {
                metrics::counter!("bullyguard_provider_errors_total").increment(1);
                AppError::Provider(msg)
            }
            Error::Timeout => {
                metrics::counter!("bullyguard_provider_errors_total").increment(1);
                AppError::Timeout
            }
            other => AppError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // upload validation failures answer in plain text
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            AppError::Provider(msg) => {
                error_json(StatusCode::BAD_GATEWAY, &msg)
            }
            AppError::Timeout => {
                error_json(StatusCode::BAD_GATEWAY, "classification provider timed out")
            }
            AppError::Internal(msg) => error_json(StatusCode::INTERNAL_SERVER_ERROR, &msg),
        }
    }
}

fn error_json(status: StatusCode, message: &str) -> Response {
    warn!(%status, "request failed: {message}");
    let body = json!({
        "error": {
            "message": message,
        }
    });
    (status, Json(body)).into_response()
}
