//! Emission Calculator - Main coordinator for estimating emissions
//!
//! Runs the estimator, then the projection, metrics and advice generators on
//! its total. Rejects any result containing a non-finite number.
//! Includes sequential and parallel (Rayon) batch implementations.

use crate::error::{EstimateError, Result};
use crate::generators::{advise, calculate_metrics, estimate, project};
use crate::model::{EmissionResult, EstimationInput};
use rayon::prelude::*;

/// Main emission calculator
///
/// Stateless: all configuration is the process-wide static tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmissionCalculator;

impl EmissionCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Estimate a single input
    pub fn calculate(&self, input: &EstimationInput) -> Result<EmissionResult> {
        let estimate = estimate(input);
        let total = estimate.total;

        let result = EmissionResult {
            total,
            breakdown: estimate.breakdown(),
            projection: project(total, input.sector),
            metrics: calculate_metrics(input, total),
            recommendations: advise(input, total),
        };

        ensure_finite(&result)?;
        Ok(result)
    }

    /// Estimate many inputs sequentially
    pub fn calculate_batch_sequential(&self, inputs: &[EstimationInput]) -> Vec<Result<EmissionResult>> {
        inputs.iter().map(|input| self.calculate(input)).collect()
    }

    /// Estimate many inputs in parallel, preserving input order
    pub fn calculate_batch(&self, inputs: &[EstimationInput]) -> Vec<Result<EmissionResult>> {
        tracing::debug!("Estimating batch of {} scenarios", inputs.len());

        let results: Vec<_> = inputs.par_iter().map(|input| self.calculate(input)).collect();

        log_rejections(&results);
        results
    }

    /// Estimate scenarios that may already have failed to parse, in parallel.
    ///
    /// A parse failure passes through at its own position, so output `i`
    /// always belongs to scenario `i`.
    pub fn calculate_parsed(&self, scenarios: Vec<Result<EstimationInput>>) -> Vec<Result<EmissionResult>> {
        tracing::debug!("Estimating batch of {} scenarios", scenarios.len());

        let results: Vec<_> = scenarios
            .into_par_iter()
            .map(|scenario| scenario.and_then(|input| self.calculate(&input)))
            .collect();

        log_rejections(&results);
        results
    }
}

fn log_rejections(results: &[Result<EmissionResult>]) {
    let failed = results.iter().filter(|r| r.is_err()).count();
    if failed > 0 {
        tracing::warn!("{} of {} scenarios rejected", failed, results.len());
    }
}

fn check(quantity: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(EstimateError::NonFinite { quantity })
    }
}

/// Reject results that would leak NaN / ±∞ to callers
fn ensure_finite(result: &EmissionResult) -> Result<()> {
    check("total", result.total)?;

    for (_, value) in result.breakdown.labelled() {
        check("breakdown component", value)?;
    }
    for point in &result.projection {
        check("projection value", point.value)?;
    }

    let m = &result.metrics;
    check("energy efficiency", m.energy_efficiency)?;
    check("material efficiency", m.material_efficiency)?;
    check("transport efficiency", m.transport_efficiency)?;
    check("overall score", m.overall_score)?;

    for rec in &result.recommendations {
        check("saving potential", rec.saving_potential)?;
    }
    Ok(())
}
