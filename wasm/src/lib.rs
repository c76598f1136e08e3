//! Calorie Planner WASM Module
//!
//! This crate provides WebAssembly bindings so the browser can run the
//! same calculations as the server.

use calorie_planner_shared::{evaluate, health_metrics, select_workout_plan, WORKOUT_PLANS};
use std::collections::HashMap;
use wasm_bindgen::prelude::*;

/// Calculate BMI from weight (kg) and height (cm)
#[wasm_bindgen]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    if height_cm <= 0.0 {
        return 0.0;
    }
    health_metrics::calculate_bmi(weight_kg, height_cm)
}

/// BMI category label, e.g. "Normal weight"
#[wasm_bindgen]
pub fn bmi_category(bmi: f64) -> String {
    health_metrics::classify_bmi(bmi).label().to_string()
}

/// Run the full calculation over form-style fields.
///
/// `fields_json` is a JSON object of string values keyed by form field
/// name. Returns the report as JSON, or throws the user-facing message.
#[wasm_bindgen]
pub fn calculate_plan(fields_json: &str) -> Result<String, JsValue> {
    calculate_plan_json(fields_json).map_err(|msg| JsValue::from_str(&msg))
}

/// Workout plan for the given schedule as JSON
#[wasm_bindgen]
pub fn workout_plan(days: i32, hours: f64) -> Result<String, JsValue> {
    serde_json::to_string(&select_workout_plan(days, hours))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// The full workout plan table as JSON
#[wasm_bindgen]
pub fn workout_plans() -> Result<String, JsValue> {
    serde_json::to_string(&WORKOUT_PLANS[..]).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn calculate_plan_json(fields_json: &str) -> Result<String, String> {
    let fields: HashMap<String, String> =
        serde_json::from_str(fields_json).map_err(|e| e.to_string())?;
    let report = evaluate(&fields).map_err(|e| e.to_string())?;
    serde_json::to_string(&report).map_err(|e| e.to_string())
}
