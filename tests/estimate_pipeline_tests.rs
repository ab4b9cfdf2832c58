//! Estimate Pipeline Integration Tests
//!
//! End-to-end checks from a wire request to the response shape, covering the
//! fallback, asymmetry and ordering guarantees callers depend on.

use approx::assert_relative_eq;
use carbon_estimator::{
    estimate, project, EmissionCalculator, EstimateRequest, EstimateResponse, EstimationInput, Sector,
    TransportMode,
};
use serde_json::{json, Value};

fn respond(body: Value) -> EstimateResponse {
    let request: EstimateRequest = serde_json::from_value(body).unwrap();
    let input = request.into_input().unwrap();
    EmissionCalculator::new().calculate(&input).unwrap().into()
}

// =========================================================================
// Section 1: Default scenario
// =========================================================================

#[test]
fn test_default_request_prediction() {
    let response = respond(json!({}));
    assert_relative_eq!(response.prediction, 843.6575, epsilon = 1e-9);
}

#[test]
fn test_default_request_pie_data() {
    let response = respond(json!({}));
    let pie: Vec<(&str, f64)> = response.pie_data.iter().map(|s| (s.name.as_str(), s.value)).collect();

    assert_eq!(
        pie,
        vec![("Energy", 820.0), ("Materials", 5.0), ("Operations", 2.0), ("Transport", 42.0), ("Waste", 0.75)]
    );
}

#[test]
fn test_pie_data_is_not_discounted() {
    // The slices show raw contributions; only the prediction is discounted
    let response = respond(json!({ "output": 2000 }));
    let slice_sum: f64 = response.pie_data.iter().map(|s| s.value).sum();

    assert_relative_eq!(slice_sum, 869.75, epsilon = 1e-9);
    assert_relative_eq!(response.prediction, 869.75 * 0.7, epsilon = 1e-9);
}

#[test]
fn test_default_request_bar_data() {
    let response = respond(json!({}));
    let names: Vec<&str> = response.bar_data.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["Jan", "Feb", "Mar", "Apr", "May", "Jun"]);
    assert_eq!(response.bar_data[0].emissions, 844.0);
    assert_eq!(response.bar_data[5].emissions, 1055.0);
}

// =========================================================================
// Section 2: Fallback equivalence
// =========================================================================

#[test]
fn test_unknown_sector_matches_manufacturing() {
    let unknown = respond(json!({ "sector": "Unknown", "hours": 60 }));
    let manufacturing = respond(json!({ "sector": "Manufacturing", "hours": 60 }));
    assert_eq!(unknown, manufacturing);
    assert_eq!(unknown.prediction.to_bits(), manufacturing.prediction.to_bits());
}

#[test]
fn test_unknown_transport_matches_truck() {
    let unknown = respond(json!({ "transport": "rocket" }));
    let truck = respond(json!({ "transport": "truck" }));
    assert_eq!(unknown, truck);
    assert_eq!(unknown.prediction.to_bits(), truck.prediction.to_bits());
}

#[test]
fn test_bike_is_zero_not_truck() {
    let bike = respond(json!({ "transport": "bike" }));
    let transport = bike.pie_data.iter().find(|s| s.name == "Transport").unwrap();
    assert_eq!(transport.value, 0.0);
    assert_eq!(bike.metrics.transport_efficiency, 100.0);
}

// =========================================================================
// Section 3: Properties
// =========================================================================

#[test]
fn test_total_non_negative_for_non_negative_inputs() {
    for sector in Sector::ALL {
        for mode in TransportMode::ALL {
            for &scale in &[0.0, 0.5, 1.0, 10.0] {
                let input = EstimationInput {
                    hours: 40.0 * scale,
                    energy: 1000.0 * scale,
                    material: 500.0 * scale,
                    waste: 50.0 * scale,
                    output: 3000.0 * scale,
                    distance: 200.0 * scale,
                    sector,
                    transport_mode: mode,
                };
                let est = estimate(&input);
                assert!(est.total >= 0.0, "{:?} {:?} {}", sector, mode, scale);
                assert!(est.efficiency_factor >= 0.7);
            }
        }
    }
}

#[test]
fn test_total_equals_components_times_efficiency() {
    let input = EstimationInput {
        sector: Sector::Hospitality,
        transport_mode: TransportMode::Airplane,
        output: 420.0,
        ..EstimationInput::default()
    };
    let est = estimate(&input);
    assert_relative_eq!(est.total, est.components.sum() * est.efficiency_factor, epsilon = 1e-9);
    assert_relative_eq!(est.efficiency_factor, 1.0 - 0.3 * 420.0 / 1000.0, epsilon = 1e-12);
}

#[test]
fn test_retail_projection_of_1000() {
    let values: Vec<f64> = project(1000.0, Sector::Retail).into_iter().map(|p| p.value).collect();
    assert_eq!(values, vec![1200.0, 1000.0, 900.0, 950.0, 1000.0, 1100.0]);
}

#[test]
fn test_renewable_recommendation_always_last() {
    for body in [
        json!({}),
        json!({ "hours": 0, "energy": 0, "material": 0, "waste": 0, "output": 0, "distance": 0 }),
        json!({ "hours": 100, "sector": "Logistics", "transport": "ship", "distance": 5000 }),
    ] {
        let response = respond(body);
        let last = response.recommendations.last().unwrap();
        assert_eq!(last.title, "Switch to Renewable Energy");
    }
}

#[test]
fn test_advice_is_repeatable() {
    let body = json!({ "hours": 70, "energy": 2500, "sector": "Healthcare", "transport": "car" });
    assert_eq!(respond(body.clone()).recommendations, respond(body).recommendations);
}

// =========================================================================
// Section 4: Wire format
// =========================================================================

#[test]
fn test_response_json_shape() {
    let value = serde_json::to_value(respond(json!({ "hours": 45 }))).unwrap();

    assert!(value["prediction"].is_number());
    assert_eq!(value["pieData"].as_array().unwrap().len(), 5);
    assert_eq!(value["barData"][0]["name"], "Jan");
    assert!(value["barData"][0]["emissions"].is_number());

    let rec = &value["recommendations"][0];
    assert_eq!(rec["category"], "energy");
    assert_eq!(rec["impact"], "high");
    assert!(rec["savingPotential"].is_number());

    let metrics = &value["metrics"];
    for key in ["energyEfficiency", "materialEfficiency", "transportEfficiency", "overallScore"] {
        assert!(metrics[key].is_number(), "missing {}", key);
    }
}

#[test]
fn test_form_strings_accepted() {
    let from_strings = respond(json!({ "energy": "1000", "hours": "40" }));
    let from_numbers = respond(json!({ "energy": 1000, "hours": 40 }));
    assert_eq!(from_strings, from_numbers);
}

#[test]
fn test_invalid_numeric_rejected() {
    let request: EstimateRequest = serde_json::from_value(json!({ "material": { "kg": 5 } })).unwrap();
    let err = request.into_input().unwrap_err();
    assert_eq!(err.to_string(), "invalid value for 'material': expected a number, got object");
}
