//! EFFICIENCY METRICS
//!
//! Four integer percentages from simple ratios of the raw inputs and the
//! total. No clamping: scores can go negative or above 100.
//!
//! The `+ 1` denominators keep zero output / zero material finite.

use crate::model::factors::{OVERALL_REFERENCE_KG, TRANSPORT_BASELINE};
use crate::model::{round_half_up, transport_factor, EstimationInput, Metrics};

#[inline]
fn percent(ratio: f64) -> f64 {
    round_half_up(ratio * 100.0)
}

/// Calculate efficiency metrics for an input and its post-efficiency total
pub fn calculate_metrics(input: &EstimationInput, total: f64) -> Metrics {
    Metrics {
        energy_efficiency: percent(1.0 - input.energy / (input.output + 1.0) / 10.0),
        material_efficiency: percent(1.0 - input.waste / (input.material + 1.0)),
        transport_efficiency: percent(1.0 - transport_factor(input.transport_mode) / TRANSPORT_BASELINE),
        overall_score: percent(1.0 - total / OVERALL_REFERENCE_KG),
    }
}
