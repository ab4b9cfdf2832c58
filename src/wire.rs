//! Request / response shapes for the estimate endpoint
//!
//! Request fields are all optional. Absent or `null` fields take their
//! defaults. Numeric fields accept JSON numbers and numeric strings (what HTML
//! forms submit); anything else present is rejected. Sector and transport
//! never fail: unknown or non-string values fall back to the defaults.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{EstimateError, Result};
use crate::model::{
    serialize_whole, EmissionResult, EstimationInput, Metrics, Recommendation, Sector, TransportMode,
};

/// Raw estimate request as received over the wire
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimateRequest {
    pub hours: Option<Value>,
    pub energy: Option<Value>,
    pub material: Option<Value>,
    pub waste: Option<Value>,
    pub output: Option<Value>,
    pub distance: Option<Value>,
    pub sector: Option<Value>,
    pub transport: Option<Value>,
}

impl EstimateRequest {
    /// Apply defaults and validate numeric fields
    pub fn into_input(self) -> Result<EstimationInput> {
        Ok(EstimationInput {
            hours: numeric_field("hours", self.hours, EstimationInput::DEFAULT_HOURS)?,
            energy: numeric_field("energy", self.energy, EstimationInput::DEFAULT_ENERGY)?,
            material: numeric_field("material", self.material, EstimationInput::DEFAULT_MATERIAL)?,
            waste: numeric_field("waste", self.waste, EstimationInput::DEFAULT_WASTE)?,
            output: numeric_field("output", self.output, EstimationInput::DEFAULT_OUTPUT)?,
            distance: numeric_field("distance", self.distance, EstimationInput::DEFAULT_DISTANCE)?,
            sector: self
                .sector
                .as_ref()
                .and_then(Value::as_str)
                .map(Sector::resolve)
                .unwrap_or_default(),
            transport_mode: self
                .transport
                .as_ref()
                .and_then(Value::as_str)
                .map(TransportMode::resolve)
                .unwrap_or_default(),
        })
    }
}

impl From<&EstimationInput> for EstimateRequest {
    fn from(input: &EstimationInput) -> Self {
        Self {
            hours: Some(input.hours.into()),
            energy: Some(input.energy.into()),
            material: Some(input.material.into()),
            waste: Some(input.waste.into()),
            output: Some(input.output.into()),
            distance: Some(input.distance.into()),
            sector: Some(input.sector.name().into()),
            transport: Some(input.transport_mode.name().into()),
        }
    }
}

fn numeric_field(field: &'static str, value: Option<Value>, default: f64) -> Result<f64> {
    match value {
        None | Some(Value::Null) => Ok(default),
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| EstimateError::invalid(field, "number out of range")),
        Some(Value::String(s)) => match s.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(EstimateError::invalid(field, format!("'{}' is not a number", s))),
        },
        Some(other) => Err(EstimateError::invalid(
            field,
            format!("expected a number, got {}", json_type_name(&other)),
        )),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ============================================================================
// Response
// ============================================================================

/// One breakdown slice (pie chart entry)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub name: String,
    pub value: f64,
}

/// One projection period (bar chart entry)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarPoint {
    pub name: String,
    #[serde(serialize_with = "serialize_whole")]
    pub emissions: f64,
}

/// Estimate response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateResponse {
    /// Post-efficiency total (kg CO₂)
    pub prediction: f64,
    /// Pre-efficiency components, 2 decimals
    pub pie_data: Vec<PieSlice>,
    pub bar_data: Vec<BarPoint>,
    pub recommendations: Vec<Recommendation>,
    pub metrics: Metrics,
}

impl From<EmissionResult> for EstimateResponse {
    fn from(result: EmissionResult) -> Self {
        Self {
            prediction: result.total,
            pie_data: result
                .breakdown
                .labelled()
                .into_iter()
                .map(|(name, value)| PieSlice { name: name.to_string(), value })
                .collect(),
            bar_data: result
                .projection
                .into_iter()
                .map(|p| BarPoint { name: p.label, emissions: p.value })
                .collect(),
            recommendations: result.recommendations.into_vec(),
            metrics: result.metrics,
        }
    }
}

// ============================================================================
// Batch
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchEstimateRequest {
    #[serde(default)]
    pub scenarios: Vec<EstimateRequest>,
}

/// A scenario that could not be estimated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioError {
    pub index: usize,
    pub error: String,
}

/// Successful scenarios keep their index so callers can line them up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub index: usize,
    #[serde(flatten)]
    pub response: EstimateResponse,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchEstimateResponse {
    pub results: Vec<ScenarioResult>,
    pub errors: Vec<ScenarioError>,
}

impl BatchEstimateResponse {
    /// Split per-scenario outcomes into results and errors, keeping indices
    pub fn from_outcomes(outcomes: Vec<Result<EstimateResponse>>) -> Self {
        let mut batch = Self::default();
        for (index, outcome) in outcomes.into_iter().enumerate() {
            match outcome {
                Ok(response) => batch.results.push(ScenarioResult { index, response }),
                Err(e) => batch.errors.push(ScenarioError { index, error: e.to_string() }),
            }
        }
        batch
    }
}
