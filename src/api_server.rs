// Axum API Server Module
//
// Purpose: JSON API around the emission calculator
// Endpoints: health, single estimate, batch estimate, report export

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};

use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use std::time::Duration;

use crate::calculator::EmissionCalculator;
use crate::config::ServerConfig;
use crate::error::EstimateError;
use crate::report::EmissionReport;
use crate::wire::{BatchEstimateRequest, BatchEstimateResponse, EstimateRequest, EstimateResponse};

/// Largest batch accepted in one request
const MAX_BATCH_SCENARIOS: usize = 1000;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub calculator: EmissionCalculator,
    /// Cosmetic latency applied before single-estimate responses
    pub estimate_delay: Duration,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            calculator: EmissionCalculator::new(),
            estimate_delay: config.estimate_delay,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&ServerConfig::default())
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Estimate endpoints
        .route("/api/estimate", post(estimate))
        .route("/api/estimate/batch", post(estimate_batch))

        // Report export
        .route("/api/report", post(export_report))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn estimate(
    State(state): State<AppState>,
    Json(payload): Json<EstimateRequest>,
) -> Result<Json<EstimateResponse>, AppError> {
    let input = payload.into_input()?;
    tracing::info!("Estimating {} / {}", input.sector, input.transport_mode);

    let result = state.calculator.calculate(&input)?;

    if !state.estimate_delay.is_zero() {
        tokio::time::sleep(state.estimate_delay).await;
    }

    Ok(Json(result.into()))
}

async fn estimate_batch(
    State(state): State<AppState>,
    Json(payload): Json<BatchEstimateRequest>,
) -> Result<Json<BatchEstimateResponse>, AppError> {
    let n = payload.scenarios.len();
    if n > MAX_BATCH_SCENARIOS {
        return Err(AppError::BadRequest(format!(
            "batch of {} scenarios exceeds limit of {}",
            n, MAX_BATCH_SCENARIOS
        )));
    }

    tracing::info!("Estimating batch of {} scenarios", n);

    // CPU-bound work: run in blocking thread pool
    let calculator = state.calculator;
    let response = tokio::task::spawn_blocking(move || {
        let parsed = payload.scenarios.into_iter().map(EstimateRequest::into_input).collect();
        let outcomes = calculator
            .calculate_parsed(parsed)
            .into_iter()
            .map(|outcome| outcome.map(EstimateResponse::from))
            .collect();

        BatchEstimateResponse::from_outcomes(outcomes)
    })
    .await
    .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?;

    Ok(Json(response))
}

async fn export_report(
    State(state): State<AppState>,
    Json(payload): Json<EstimateRequest>,
) -> Result<Json<EmissionReport>, AppError> {
    let input = payload.into_input()?;
    let result = state.calculator.calculate(&input)?;

    Ok(Json(EmissionReport::new(&input, result.into())))
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Internal(String),
}

impl From<EstimateError> for AppError {
    fn from(e: EstimateError) -> Self {
        AppError::BadRequest(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => {
                tracing::error!("{}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
