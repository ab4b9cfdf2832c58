//! Carbon Emission Estimator
//!
//! Estimates a business's CO₂ emissions from a handful of operational inputs
//! (hours, energy, material, waste, output, transport distance and mode,
//! sector) and derives a monthly projection, efficiency metrics and
//! rule-based recommendations.
//!
//! Module layout:
//! - `model/`: value types and the static factor tables
//! - `generators/`: estimator, projection, metrics and advice (all pure)
//! - `calculator`: runs the generators and rejects non-finite results
//! - `wire`: request/response shapes for the HTTP boundary
//! - `report`: exportable JSON report
//! - `api_server`: Axum router (feature `api`)

pub mod model;
pub mod generators;
pub mod calculator;
pub mod error;
pub mod wire;
pub mod report;
pub mod config;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use model::{
    Category, EmissionBreakdown, EmissionResult, EstimationInput, Impact, Metrics, ProjectionPoint,
    Recommendation, Sector, TransportMode,
};
pub use generators::{advise, calculate_metrics, estimate, project, Estimate};
pub use calculator::EmissionCalculator;
pub use error::EstimateError;
pub use wire::{EstimateRequest, EstimateResponse};
pub use report::{report_file_name, EmissionReport};
pub use config::ServerConfig;

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
