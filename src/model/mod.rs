//! Value types and constant tables shared by every generator

pub mod factors;
pub mod types;

pub use factors::{
    round2, round_half_up, sector_weights, seasonal_pattern, serialize_whole, transport_factor, SectorWeights,
};
pub use types::{
    Category, EmissionBreakdown, EmissionResult, EstimationInput, Impact, Metrics, ProjectionPoint,
    Recommendation, Recommendations, Sector, TransportMode,
};
