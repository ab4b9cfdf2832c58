//! Core value types for emission estimation
//!
//! Everything here is an immutable value record. Sector and transport names
//! are resolved to enums once at the boundary; the fallback for unknown names
//! (`Manufacturing`, `truck`) is explicit in `resolve`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

use super::factors::serialize_whole;

// ============================================================================
// Sector
// ============================================================================

/// Business sector, selects component weights and seasonal pattern
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sector {
    #[default]
    Manufacturing,
    Retail,
    Logistics,
    #[serde(rename = "IT/Software")]
    ItSoftware,
    Healthcare,
    Hospitality,
    #[serde(rename = "Food & Beverage")]
    FoodAndBeverage,
}

impl Sector {
    pub const ALL: [Sector; 7] = [
        Sector::Manufacturing,
        Sector::Retail,
        Sector::Logistics,
        Sector::ItSoftware,
        Sector::Healthcare,
        Sector::Hospitality,
        Sector::FoodAndBeverage,
    ];

    /// Display name as accepted on the wire
    pub fn name(self) -> &'static str {
        match self {
            Sector::Manufacturing => "Manufacturing",
            Sector::Retail => "Retail",
            Sector::Logistics => "Logistics",
            Sector::ItSoftware => "IT/Software",
            Sector::Healthcare => "Healthcare",
            Sector::Hospitality => "Hospitality",
            Sector::FoodAndBeverage => "Food & Beverage",
        }
    }

    /// Exact, case-sensitive match on the display name
    pub fn from_name(name: &str) -> Option<Sector> {
        Sector::ALL.into_iter().find(|s| s.name() == name)
    }

    /// Lookup with default: unknown names become `Manufacturing`
    pub fn resolve(name: &str) -> Sector {
        Sector::from_name(name).unwrap_or_default()
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Transport mode
// ============================================================================

/// Freight transport mode, selects the per-km emission factor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    #[default]
    Truck,
    Car,
    Train,
    Airplane,
    Bike,
    Ship,
}

impl TransportMode {
    pub const ALL: [TransportMode; 6] = [
        TransportMode::Truck,
        TransportMode::Car,
        TransportMode::Train,
        TransportMode::Airplane,
        TransportMode::Bike,
        TransportMode::Ship,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TransportMode::Truck => "truck",
            TransportMode::Car => "car",
            TransportMode::Train => "train",
            TransportMode::Airplane => "airplane",
            TransportMode::Bike => "bike",
            TransportMode::Ship => "ship",
        }
    }

    pub fn from_name(name: &str) -> Option<TransportMode> {
        TransportMode::ALL.into_iter().find(|m| m.name() == name)
    }

    /// Lookup with default: unknown names become `truck`
    pub fn resolve(name: &str) -> TransportMode {
        TransportMode::from_name(name).unwrap_or_default()
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Input
// ============================================================================

/// Validated operational inputs for one estimate.
///
/// Serialize-only: incoming JSON goes through `wire::EstimateRequest`, which
/// applies defaults and the unknown-name fallback.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimationInput {
    /// Weekly operating hours
    pub hours: f64,
    /// Energy use (kWh)
    pub energy: f64,
    /// Material use (kg)
    pub material: f64,
    /// Material waste (kg)
    pub waste: f64,
    /// Production output (units)
    pub output: f64,
    /// Transport distance (km)
    pub distance: f64,
    pub sector: Sector,
    pub transport_mode: TransportMode,
}

impl EstimationInput {
    pub const DEFAULT_HOURS: f64 = 40.0;
    pub const DEFAULT_ENERGY: f64 = 1000.0;
    pub const DEFAULT_MATERIAL: f64 = 500.0;
    pub const DEFAULT_WASTE: f64 = 50.0;
    pub const DEFAULT_OUTPUT: f64 = 100.0;
    pub const DEFAULT_DISTANCE: f64 = 200.0;
}

impl Default for EstimationInput {
    fn default() -> Self {
        Self {
            hours: Self::DEFAULT_HOURS,
            energy: Self::DEFAULT_ENERGY,
            material: Self::DEFAULT_MATERIAL,
            waste: Self::DEFAULT_WASTE,
            output: Self::DEFAULT_OUTPUT,
            distance: Self::DEFAULT_DISTANCE,
            sector: Sector::default(),
            transport_mode: TransportMode::default(),
        }
    }
}

// ============================================================================
// Results
// ============================================================================

/// Per-component emissions in kg CO₂.
///
/// These are the slices *before* the efficiency factor is applied; only the
/// total carries the discount. Rounded to 2 decimals when exposed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmissionBreakdown {
    pub energy: f64,
    pub materials: f64,
    pub operations: f64,
    pub transport: f64,
    pub waste: f64,
}

impl EmissionBreakdown {
    /// Chart labels paired with values, in display order
    pub fn labelled(&self) -> [(&'static str, f64); 5] {
        [
            ("Energy", self.energy),
            ("Materials", self.materials),
            ("Operations", self.operations),
            ("Transport", self.transport),
            ("Waste", self.waste),
        ]
    }

    pub fn sum(&self) -> f64 {
        self.energy + self.materials + self.operations + self.transport + self.waste
    }
}

/// One period of the seasonal projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    pub label: String,
    #[serde(serialize_with = "serialize_whole")]
    pub value: f64,
}

/// Efficiency percentages, unclamped (may be negative or exceed 100)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    #[serde(serialize_with = "serialize_whole")]
    pub energy_efficiency: f64,
    #[serde(serialize_with = "serialize_whole")]
    pub material_efficiency: f64,
    #[serde(serialize_with = "serialize_whole")]
    pub transport_efficiency: f64,
    #[serde(serialize_with = "serialize_whole")]
    pub overall_score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Energy,
    Waste,
    Transport,
    Operations,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Low,
    Medium,
    High,
}

/// A single rule-based reduction suggestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub category: Category,
    pub title: String,
    pub description: String,
    pub impact: Impact,
    /// Estimated kg CO₂ saved if acted on, whole kg
    #[serde(serialize_with = "serialize_whole")]
    pub saving_potential: f64,
}

/// At most five rules fire, so recommendations never spill to the heap
pub type Recommendations = SmallVec<[Recommendation; 5]>;

/// Complete estimate for one input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionResult {
    /// Post-efficiency total (kg CO₂), unrounded
    pub total: f64,
    /// Pre-efficiency slices, rounded to 2 decimals
    pub breakdown: EmissionBreakdown,
    pub projection: Vec<ProjectionPoint>,
    pub metrics: Metrics,
    pub recommendations: Recommendations,
}
