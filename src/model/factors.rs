//! Emission Factor Lookup Tables
//!
//! Fixed per-unit emission factors, per-sector component weights and
//! per-sector seasonal multipliers. All tables are immutable statics indexed
//! by the `Sector` / `TransportMode` enums, so every lookup is total: the
//! fallback for unrecognised names happens once, at parse time.
//!
//! Units: kg CO₂ per kWh, per kg, per machine hour, per km.

use serde::Serializer;

use super::types::{Sector, TransportMode};

/// kg CO₂ per kWh of energy consumed
pub const ENERGY_KWH: f64 = 0.82;

/// kg CO₂ per kg of material used
pub const MATERIAL_KG: f64 = 0.01;

/// kg CO₂ per machine hour of operation
pub const MACHINE_HOUR: f64 = 0.05;

/// Waste is weighted 1.5× the material factor
pub const WASTE_MULTIPLIER: f64 = 1.5;

/// Efficiency discount per 1000 units of output
pub const EFFICIENCY_SLOPE: f64 = 0.3;

/// Floor for the efficiency factor (economies of scale cap out at 30%)
pub const EFFICIENCY_FLOOR: f64 = 0.7;

/// Transport factor used as the 100% baseline for transport efficiency (truck)
pub const TRANSPORT_BASELINE: f64 = 0.21;

/// Reference total for the overall score (a score of 0 at 2000 kg)
pub const OVERALL_REFERENCE_KG: f64 = 2000.0;

/// Projection period labels
pub const PERIOD_LABELS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

/// Sector-specific component weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorWeights {
    pub energy: f64,
    pub material: f64,
    pub operation: f64,
}

// ============================================================================
// EMBEDDED TABLES
// Index order follows `Sector::ALL` / `TransportMode::ALL`
// ============================================================================

static SECTOR_WEIGHTS: [SectorWeights; 7] = [
    SectorWeights { energy: 1.0, material: 1.0, operation: 1.0 }, // Manufacturing
    SectorWeights { energy: 0.6, material: 0.4, operation: 0.5 }, // Retail
    SectorWeights { energy: 0.9, material: 0.7, operation: 1.2 }, // Logistics
    SectorWeights { energy: 0.4, material: 0.2, operation: 0.5 }, // IT/Software
    SectorWeights { energy: 0.8, material: 0.7, operation: 0.9 }, // Healthcare
    SectorWeights { energy: 0.7, material: 0.6, operation: 0.8 }, // Hospitality
    SectorWeights { energy: 0.9, material: 1.1, operation: 1.0 }, // Food & Beverage
];

static SEASONAL_PATTERNS: [[f64; 6]; 7] = [
    [1.0, 1.05, 1.1, 1.15, 1.2, 1.25], // Manufacturing
    [1.2, 1.0, 0.9, 0.95, 1.0, 1.1],   // Retail
    [1.0, 1.05, 1.1, 1.15, 1.2, 1.25], // Logistics
    [1.0, 1.0, 1.0, 1.05, 1.05, 1.1],  // IT/Software
    [1.1, 1.05, 1.0, 1.0, 1.05, 1.1],  // Healthcare
    [0.9, 0.95, 1.0, 1.1, 1.2, 1.3],   // Hospitality
    [1.0, 1.05, 1.1, 1.15, 1.2, 1.25], // Food & Beverage
];

static TRANSPORT_FACTORS: [f64; 6] = [
    0.21, // truck
    0.18, // car
    0.04, // train
    0.15, // airplane
    0.0,  // bike
    0.09, // ship
];

// ============================================================================
// LOOKUP FUNCTIONS
// ============================================================================

/// Component weights for a sector
pub fn sector_weights(sector: Sector) -> SectorWeights {
    SECTOR_WEIGHTS[sector.index()]
}

/// Six-period seasonal multipliers for a sector
pub fn seasonal_pattern(sector: Sector) -> &'static [f64; 6] {
    &SEASONAL_PATTERNS[sector.index()]
}

/// kg CO₂ per km for a transport mode
///
/// `bike` is a real 0.0 entry, not a missing one.
pub fn transport_factor(mode: TransportMode) -> f64 {
    TRANSPORT_FACTORS[mode.index()]
}

// ============================================================================
// ROUNDING
// ============================================================================

/// Round half toward positive infinity.
///
/// Matches the rounding the estimate API has always exposed: `-2.5` rounds to
/// `-2`, not `-3` as `f64::round` would give.
#[inline]
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Round to 2 decimal places (display precision for breakdown slices)
#[inline]
pub fn round2(value: f64) -> f64 {
    round_half_up(value * 100.0) / 100.0
}

/// Largest magnitude at which every integer is exactly representable
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Serialize an integer-rounded quantity as a JSON integer (`58`, not `58.0`).
///
/// Values that are not whole, or too large to be exact, stay floats.
pub fn serialize_whole<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}
