//! Calculator routes
//!
//! Two entry points share one engine: an HTML form flow (`/calculate`) and a
//! JSON API (`/api/v1/calculate`).

use crate::error::ApiResult;
use crate::pages;
use crate::services::{CalculatorService, Channel};
use crate::state::AppState;
use axum::{
    extract::rejection::{FormRejection, JsonRejection},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Json, Router,
};
use calorie_planner_shared::{CalculationReport, PlanTemplate, WORKOUT_PLANS};
use chrono::{DateTime, Local, Utc};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

/// Create the HTML form routes
pub fn calculator_form_routes() -> Router<AppState> {
    Router::new().route("/calculate", post(calculate_form).get(redirect_to_form))
}

/// Create the JSON API routes
pub fn calculator_api_routes() -> Router<AppState> {
    Router::new()
        .route("/calculate", post(calculate_json))
        .route("/workout-plans", get(list_workout_plans))
}

/// Calculation result returned by the JSON API
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResponse {
    #[serde(flatten)]
    pub report: CalculationReport,
    pub calculated_at: DateTime<Utc>,
}

/// POST /calculate - Form submission, answers with an HTML page
async fn calculate_form(form: Result<Form<HashMap<String, String>>, FormRejection>) -> Response {
    let result = match form {
        Ok(Form(fields)) => CalculatorService::calculate(&fields, Channel::Form),
        Err(rejection) => Err(CalculatorService::reject_body(Channel::Form, &rejection.body_text())),
    };

    match result {
        Ok(report) => Html(pages::render_results(&report, &Local::now())).into_response(),
        Err(err) => {
            let page = pages::render_error(&err.user_message());
            (err.status(), Html(page)).into_response()
        }
    }
}

/// GET /calculate - Send the browser back to the form
async fn redirect_to_form() -> Redirect {
    Redirect::to("/index.html")
}

/// Flatten a JSON object into form-style string fields.
/// Strings pass through, numbers and booleans use their JSON text,
/// nulls are dropped so they count as missing.
fn json_fields(body: HashMap<String, Value>) -> HashMap<String, String> {
    body.into_iter()
        .filter_map(|(key, value)| match value {
            Value::String(s) => Some((key, s)),
            Value::Null => None,
            other => Some((key, other.to_string())),
        })
        .collect()
}

/// POST /api/v1/calculate - JSON calculation
async fn calculate_json(
    body: Result<Json<HashMap<String, Value>>, JsonRejection>,
) -> ApiResult<Json<CalculationResponse>> {
    let Json(body) =
        body.map_err(|rejection| CalculatorService::reject_body(Channel::Api, &rejection.body_text()))?;
    let fields = json_fields(body);
    let report = CalculatorService::calculate(&fields, Channel::Api)?;

    Ok(Json(CalculationResponse {
        report,
        calculated_at: Utc::now(),
    }))
}

/// GET /api/v1/workout-plans - The full plan table
async fn list_workout_plans() -> Json<&'static [PlanTemplate]> {
    Json(&WORKOUT_PLANS[..])
}
