//! The four pure generators behind an emission estimate
//!
//! Each generator lives in its own module; `EmissionCalculator` wires them
//! together.

pub mod advice;
pub mod estimator;
pub mod metrics;
pub mod projection;

pub use advice::advise;
pub use estimator::{component_emissions, efficiency_factor, estimate, Estimate};
pub use metrics::calculate_metrics;
pub use projection::project;
