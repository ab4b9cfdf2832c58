//! EMISSION ESTIMATOR
//!
//! Weighted sum of five emission components, discounted once by an
//! output-dependent efficiency factor:
//!
//! ```text
//! energy    = energy_kwh  × 0.82 × w.energy
//! materials = material_kg × 0.01 × w.material
//! operation = hours       × 0.05 × w.operation
//! transport = distance_km × factor(mode)
//! waste     = waste_kg    × 0.01 × 1.5
//! efficiency = max(0.7, 1 − output/1000 × 0.3)
//! total = Σ components × efficiency
//! ```
//!
//! The breakdown keeps the *pre-efficiency* slices. Only `total` carries the
//! discount, so the slices deliberately do not sum to the total.

use crate::model::factors::{
    self, EFFICIENCY_FLOOR, EFFICIENCY_SLOPE, ENERGY_KWH, MACHINE_HOUR, MATERIAL_KG, WASTE_MULTIPLIER,
};
use crate::model::{round2, EmissionBreakdown, EstimationInput};

/// Result of the estimator stage
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    /// Post-efficiency total (kg CO₂)
    pub total: f64,
    /// Output-dependent discount in [0.7, ∞) (≤ 1 for non-negative output)
    pub efficiency_factor: f64,
    /// Unrounded pre-efficiency components
    pub components: EmissionBreakdown,
}

impl Estimate {
    /// Components rounded to 2 decimals for display
    pub fn breakdown(&self) -> EmissionBreakdown {
        let c = &self.components;
        EmissionBreakdown {
            energy: round2(c.energy),
            materials: round2(c.materials),
            operations: round2(c.operations),
            transport: round2(c.transport),
            waste: round2(c.waste),
        }
    }
}

/// Efficiency discount for a given production output.
///
/// Exactly `1 − 0.3 × output / 1000` below 1000 units, floored at 0.7 above.
pub fn efficiency_factor(output: f64) -> f64 {
    f64::max(EFFICIENCY_FLOOR, 1.0 - (output / 1000.0) * EFFICIENCY_SLOPE)
}

/// Pre-efficiency emission components for an input
pub fn component_emissions(input: &EstimationInput) -> EmissionBreakdown {
    let weights = factors::sector_weights(input.sector);

    EmissionBreakdown {
        energy: input.energy * ENERGY_KWH * weights.energy,
        materials: input.material * MATERIAL_KG * weights.material,
        operations: input.hours * MACHINE_HOUR * weights.operation,
        transport: input.distance * factors::transport_factor(input.transport_mode),
        waste: input.waste * MATERIAL_KG * WASTE_MULTIPLIER,
    }
}

/// Estimate total emissions and the component breakdown.
///
/// Negative inputs are not clamped; they propagate arithmetically.
pub fn estimate(input: &EstimationInput) -> Estimate {
    let components = component_emissions(input);
    let efficiency_factor = efficiency_factor(input.output);

    // Sum in fixed component order so totals are bit-stable
    let sum = components.energy
        + components.materials
        + components.operations
        + components.transport
        + components.waste;

    Estimate {
        total: sum * efficiency_factor,
        efficiency_factor,
        components,
    }
}
