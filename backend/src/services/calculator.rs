//! Calculator service - runs the calorie engine for a submission

use crate::error::ApiError;
use calorie_planner_shared::{evaluate, CalculationReport, EngineError, FieldSource};
use tracing::{debug, error};

/// Counter incremented once per calculation attempt
pub const CALCULATIONS_METRIC: &str = "calorie_calculations_total";

/// Shown when a form post cannot be decoded into fields
pub const FORM_BODY_MESSAGE: &str = "The submitted form could not be read. Please try again.";

/// Returned when a JSON body is not an object of calculator fields
pub const JSON_BODY_MESSAGE: &str = "Request body must be a JSON object of calculator fields.";

/// Entry point a submission arrived through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// HTML form post
    Form,
    /// JSON API
    Api,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Form => "form",
            Channel::Api => "api",
        }
    }
}

/// Calculator service for calorie and plan calculations
pub struct CalculatorService;

impl CalculatorService {
    /// Validate the submitted fields and compute the full report
    pub fn calculate<F: FieldSource + ?Sized>(
        fields: &F,
        channel: Channel,
    ) -> Result<CalculationReport, ApiError> {
        let result = evaluate(fields);
        Self::record(channel, Self::outcome(&result));

        match result {
            Ok(report) => {
                debug!(
                    channel = channel.as_str(),
                    bmr = report.bmr,
                    maintenance = report.maintenance_calories,
                    target = report.target_calories,
                    bmi = report.bmi,
                    plan = report.workout_plan_name,
                    "Calculation complete"
                );
                Ok(report)
            }
            Err(err @ EngineError::Internal(_)) => {
                error!(channel = channel.as_str(), error = %err, "Calculation failed");
                Err(err.into())
            }
            Err(err) => {
                debug!(
                    channel = channel.as_str(),
                    field = err.field().unwrap_or_default(),
                    error = %err,
                    "Rejected calculator input"
                );
                Err(err.into())
            }
        }
    }

    /// Reject a request whose body could not be decoded into fields
    pub fn reject_body(channel: Channel, reason: &str) -> ApiError {
        Self::record(channel, "malformed");
        debug!(channel = channel.as_str(), reason, "Rejected unreadable request body");

        let message = match channel {
            Channel::Form => FORM_BODY_MESSAGE,
            Channel::Api => JSON_BODY_MESSAGE,
        };
        ApiError::MalformedBody(message.to_string())
    }

    fn record(channel: Channel, outcome: &'static str) {
        metrics::counter!(
            CALCULATIONS_METRIC,
            "channel" => channel.as_str(),
            "outcome" => outcome
        )
        .increment(1);
    }

    fn outcome(result: &Result<CalculationReport, EngineError>) -> &'static str {
        match result {
            Ok(_) => "ok",
            Err(EngineError::OutOfRange(_)) => "invalid",
            Err(EngineError::MalformedInput { .. }) => "malformed",
            Err(EngineError::Internal(_)) => "internal",
        }
    }
}
