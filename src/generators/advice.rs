//! Advice Generation
//!
//! Threshold rules evaluated independently, in a fixed order. Each rule that
//! fires contributes exactly one recommendation; the renewable-energy rule
//! always fires. Output order equals rule order and is part of the API.
//!
//! | Rule                  | Trigger                                   | Impact |
//! |-----------------------|-------------------------------------------|--------|
//! | Reduce Energy         | energy > 800                              | high   |
//! | Optimize Material     | waste > 40                                | medium |
//! | Alternative Transport | distance > 150, mode not train/bike       | high   |
//! | Optimize Hours        | hours > 40, sector not IT/Software        | medium |
//! | Renewable Energy      | always                                    | high   |

use crate::model::factors::{ENERGY_KWH, MACHINE_HOUR, MATERIAL_KG, WASTE_MULTIPLIER};
use crate::model::{
    round_half_up, transport_factor, Category, EstimationInput, Impact, Recommendation, Recommendations,
    Sector, TransportMode,
};

const ENERGY_THRESHOLD_KWH: f64 = 800.0;
const WASTE_THRESHOLD_KG: f64 = 40.0;
const DISTANCE_THRESHOLD_KM: f64 = 150.0;
const HOURS_THRESHOLD: f64 = 40.0;

/// Share of energy saved by efficient equipment
const EQUIPMENT_SAVING: f64 = 0.3;
/// Share of waste avoided by lean practices
const LEAN_WASTE_SAVING: f64 = 0.4;
/// Share of hours saved by process optimisation
const HOURS_SAVING: f64 = 0.1;
/// Share of energy emissions avoided by switching to renewables
const RENEWABLE_SAVING: f64 = 0.7;

/// Magnitudes outside `[EXPONENT_BELOW, EXPONENT_FROM)` render in exponent form
const EXPONENT_FROM: f64 = 1e21;
const EXPONENT_BELOW: f64 = 1e-6;

/// Render a number the way it has always appeared in advice text: `1000`, not
/// `1000.0`; `1e+21`, not a 22-digit integer; `1.5e-7`, not `0.00000015`.
fn display_number(value: f64) -> String {
    if value == 0.0 {
        // Avoid "-0"
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= EXPONENT_FROM || magnitude < EXPONENT_BELOW {
        let formatted = format!("{:e}", value);
        match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => format!("{}e+{}", mantissa, exponent),
            _ => formatted,
        }
    } else {
        value.to_string()
    }
}

/// Generate recommendations for an input.
///
/// No rule currently reads `_total`.
pub fn advise(input: &EstimationInput, _total: f64) -> Recommendations {
    let mut recommendations = Recommendations::new();

    if let Some(rec) = reduce_energy(input) {
        recommendations.push(rec);
    }
    if let Some(rec) = optimize_material(input) {
        recommendations.push(rec);
    }
    if let Some(rec) = alternative_transport(input) {
        recommendations.push(rec);
    }
    if let Some(rec) = optimize_hours(input) {
        recommendations.push(rec);
    }
    recommendations.push(renewable_energy(input));

    recommendations
}

fn reduce_energy(input: &EstimationInput) -> Option<Recommendation> {
    if input.energy <= ENERGY_THRESHOLD_KWH {
        return None;
    }

    Some(Recommendation {
        category: Category::Energy,
        title: "Reduce Energy Consumption".to_string(),
        description: format!(
            "Your energy usage of {} kWh is high. Consider energy-efficient equipment to save up to {} kWh.",
            display_number(input.energy),
            display_number(round_half_up(input.energy * EQUIPMENT_SAVING)),
        ),
        impact: Impact::High,
        saving_potential: round_half_up(input.energy * EQUIPMENT_SAVING * ENERGY_KWH),
    })
}

fn optimize_material(input: &EstimationInput) -> Option<Recommendation> {
    if input.waste <= WASTE_THRESHOLD_KG {
        return None;
    }

    Some(Recommendation {
        category: Category::Waste,
        title: "Optimize Material Usage".to_string(),
        description: format!(
            "Material waste of {} kg can be reduced by implementing lean manufacturing principles.",
            display_number(input.waste),
        ),
        impact: Impact::Medium,
        saving_potential: round_half_up(input.waste * LEAN_WASTE_SAVING * MATERIAL_KG * WASTE_MULTIPLIER),
    })
}

fn alternative_transport(input: &EstimationInput) -> Option<Recommendation> {
    let mode = input.transport_mode;
    if input.distance <= DISTANCE_THRESHOLD_KM || matches!(mode, TransportMode::Train | TransportMode::Bike) {
        return None;
    }

    let saving = round_half_up(
        input.distance * (transport_factor(mode) - transport_factor(TransportMode::Train)),
    );

    Some(Recommendation {
        category: Category::Transport,
        title: "Consider Alternative Transport".to_string(),
        description: format!(
            "Switching from {} to train could reduce emissions by up to {} kg CO₂.",
            mode,
            display_number(saving),
        ),
        impact: Impact::High,
        saving_potential: saving,
    })
}

fn optimize_hours(input: &EstimationInput) -> Option<Recommendation> {
    if input.hours <= HOURS_THRESHOLD || input.sector == Sector::ItSoftware {
        return None;
    }

    Some(Recommendation {
        category: Category::Operations,
        title: "Optimize Operational Hours".to_string(),
        description: "Consider process optimization to reduce operational hours while maintaining output."
            .to_string(),
        impact: Impact::Medium,
        saving_potential: round_half_up(input.hours * HOURS_SAVING * MACHINE_HOUR),
    })
}

fn renewable_energy(input: &EstimationInput) -> Recommendation {
    let saving = round_half_up(input.energy * ENERGY_KWH * RENEWABLE_SAVING);

    Recommendation {
        category: Category::Energy,
        title: "Switch to Renewable Energy".to_string(),
        description: format!(
            "Switching to renewable energy sources could reduce emissions by up to {} kg CO₂.",
            display_number(saving),
        ),
        impact: Impact::High,
        saving_potential: saving,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(recs: &Recommendations) -> Vec<&str> {
        recs.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn test_default_scenario() {
        let recs = advise(&EstimationInput::default(), 843.6575);

        // hours == 40 is not > 40
        assert_eq!(
            titles(&recs),
            vec![
                "Reduce Energy Consumption",
                "Optimize Material Usage",
                "Consider Alternative Transport",
                "Switch to Renewable Energy",
            ]
        );
        assert_eq!(recs[0].saving_potential, 246.0);
        assert_eq!(recs[1].saving_potential, 0.0);
        assert_eq!(recs[2].saving_potential, 34.0);
        assert_eq!(recs[3].saving_potential, 574.0);
    }

    #[test]
    fn test_descriptions_interpolate_inputs() {
        let recs = advise(&EstimationInput::default(), 0.0);

        assert_eq!(
            recs[0].description,
            "Your energy usage of 1000 kWh is high. Consider energy-efficient equipment to save up to 300 kWh."
        );
        assert_eq!(
            recs[1].description,
            "Material waste of 50 kg can be reduced by implementing lean manufacturing principles."
        );
        assert_eq!(
            recs[2].description,
            "Switching from truck to train could reduce emissions by up to 34 kg CO₂."
        );
        assert_eq!(
            recs[3].description,
            "Switching to renewable energy sources could reduce emissions by up to 574 kg CO₂."
        );
    }

    #[test]
    fn test_all_rules_fire_in_order() {
        let input = EstimationInput { hours: 60.0, ..EstimationInput::default() };
        let recs = advise(&input, 0.0);

        let categories: Vec<_> = recs.iter().map(|r| r.category).collect();
        assert_eq!(
            categories,
            vec![Category::Energy, Category::Waste, Category::Transport, Category::Operations, Category::Energy]
        );
        assert_eq!(recs[3].impact, Impact::Medium);
        assert_eq!(recs[3].saving_potential, 0.0);
        assert!(!recs.spilled());
    }

    #[test]
    fn test_renewable_always_present() {
        let input = EstimationInput {
            hours: 0.0,
            energy: 0.0,
            material: 0.0,
            waste: 0.0,
            output: 0.0,
            distance: 0.0,
            ..EstimationInput::default()
        };
        let recs = advise(&input, 0.0);

        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].title, "Switch to Renewable Energy");
        assert_eq!(recs[0].saving_potential, 0.0);
    }

    #[test]
    fn test_train_and_bike_skip_transport_rule() {
        for mode in [TransportMode::Train, TransportMode::Bike] {
            let input = EstimationInput { transport_mode: mode, distance: 1000.0, ..EstimationInput::default() };
            let recs = advise(&input, 0.0);
            assert!(recs.iter().all(|r| r.category != Category::Transport), "{:?}", mode);
        }
    }

    #[test]
    fn test_it_software_skips_hours_rule() {
        let input = EstimationInput { hours: 80.0, sector: Sector::ItSoftware, ..EstimationInput::default() };
        let recs = advise(&input, 0.0);
        assert!(recs.iter().all(|r| r.category != Category::Operations));
    }

    #[test]
    fn test_thresholds_are_strict() {
        let input = EstimationInput {
            energy: 800.0,
            waste: 40.0,
            distance: 150.0,
            hours: 40.0,
            ..EstimationInput::default()
        };
        assert_eq!(titles(&advise(&input, 0.0)), vec!["Switch to Renewable Energy"]);
    }

    #[test]
    fn test_idempotent() {
        let input = EstimationInput { hours: 55.0, sector: Sector::Logistics, ..EstimationInput::default() };
        assert_eq!(advise(&input, 100.0), advise(&input, 100.0));
    }

    #[test]
    fn test_display_number() {
        assert_eq!(display_number(1000.0), "1000");
        assert_eq!(display_number(12.5), "12.5");
        assert_eq!(display_number(-0.0), "0");
        assert_eq!(display_number(574000000000000000000.0), "574000000000000000000");
        assert_eq!(display_number(1e21), "1e+21");
        assert_eq!(display_number(-2.5e22), "-2.5e+22");
        assert_eq!(display_number(1.5e-7), "1.5e-7");
        assert_eq!(display_number(0.000001), "0.000001");
    }

    #[test]
    fn test_huge_energy_description() {
        let input = EstimationInput { energy: 1e21, ..EstimationInput::default() };
        let recs = advise(&input, 0.0);

        assert_eq!(
            recs[0].description,
            "Your energy usage of 1e+21 kWh is high. Consider energy-efficient equipment to save up to 300000000000000000000 kWh."
        );
    }
}
