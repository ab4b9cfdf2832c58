//! Report export
//!
//! A report is the resolved inputs plus the estimate response, stamped with
//! the UTC time it was generated. Serialized as 2-space indented JSON.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::model::{EstimationInput, Metrics, Recommendation};
use crate::wire::{BarPoint, EstimateResponse, PieSlice};

/// Inputs as the estimate saw them (after defaults and name fallback)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportInputs {
    pub hours: f64,
    pub energy: f64,
    pub material: f64,
    pub waste: f64,
    pub output: f64,
    pub distance: f64,
    pub sector: String,
    pub transport: String,
}

impl From<&EstimationInput> for ReportInputs {
    fn from(input: &EstimationInput) -> Self {
        Self {
            hours: input.hours,
            energy: input.energy,
            material: input.material,
            waste: input.waste,
            output: input.output,
            distance: input.distance,
            sector: input.sector.name().to_string(),
            transport: input.transport_mode.name().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportResults {
    pub prediction: f64,
    pub pie_data: Vec<PieSlice>,
    pub bar_data: Vec<BarPoint>,
    pub recommendations: Vec<Recommendation>,
    pub metrics: Metrics,
    /// ISO-8601 UTC, millisecond precision
    pub timestamp: String,
}

/// Exported emissions report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionReport {
    pub inputs: ReportInputs,
    pub results: ReportResults,
}

impl EmissionReport {
    /// Build a report stamped with the current time
    pub fn new(input: &EstimationInput, response: EstimateResponse) -> Self {
        Self::at(input, response, Utc::now())
    }

    /// Build a report stamped with a given time
    pub fn at(input: &EstimationInput, response: EstimateResponse, generated: DateTime<Utc>) -> Self {
        Self {
            inputs: ReportInputs::from(input),
            results: ReportResults {
                prediction: response.prediction,
                pie_data: response.pie_data,
                bar_data: response.bar_data,
                recommendations: response.recommendations,
                metrics: response.metrics,
                timestamp: generated.to_rfc3339_opts(SecondsFormat::Millis, true),
            },
        }
    }

    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Write the report as pretty JSON to `path`
    pub fn write_to(&self, path: &Path) -> anyhow::Result<()> {
        use anyhow::Context;

        let json = self.to_pretty_json().context("Failed to serialize report")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write report: {:?}", path))?;
        Ok(())
    }
}

/// Default download name for a report generated on `date`
pub fn report_file_name(date: NaiveDate) -> String {
    format!("co2-emissions-report-{}.json", date.format("%Y-%m-%d"))
}
