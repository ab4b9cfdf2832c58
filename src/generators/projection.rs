//! PROJECTION GENERATOR
//!
//! Projects a flat total onto six months using the sector's seasonal
//! multipliers. Values are rounded to whole kg (unlike the 2-decimal
//! breakdown).

use crate::model::factors::PERIOD_LABELS;
use crate::model::{round_half_up, seasonal_pattern, ProjectionPoint, Sector};

/// Six-period seasonal projection of `total` for `sector`
pub fn project(total: f64, sector: Sector) -> Vec<ProjectionPoint> {
    PERIOD_LABELS
        .iter()
        .zip(seasonal_pattern(sector))
        .map(|(label, multiplier)| ProjectionPoint {
            label: (*label).to_string(),
            value: round_half_up(total * multiplier),
        })
        .collect()
}
