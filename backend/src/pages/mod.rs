//! Server-rendered HTML pages
//!
//! Templates are embedded at compile time with `include_str!` and filled by
//! placeholder replacement. Every interpolated value is HTML-escaped.

use calorie_planner_shared::{CalculationReport, Goal};
use chrono::{DateTime, TimeZone};
use std::fmt::Display;

const RESULTS_TEMPLATE: &str = include_str!("../../templates/results.html");
const ERROR_TEMPLATE: &str = include_str!("../../templates/error.html");

/// Escape the five HTML-special characters
pub fn escape_html(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#x27;"),
            _ => output.push(ch),
        }
    }
    output
}

/// Banner styling for a goal: (bootstrap color, icon, text)
pub fn goal_style(goal: Goal) -> (&'static str, &'static str, &'static str) {
    match goal {
        Goal::Lose => ("danger", "arrow-down", "Weight Loss Goal"),
        Goal::Maintain => ("success", "equals", "Weight Maintenance"),
        Goal::Gain => ("info", "arrow-up", "Weight Gain Goal"),
    }
}

/// Placeholder substitution over a template
struct Page {
    html: String,
}

impl Page {
    fn new(template: &str) -> Self {
        Self {
            html: template.to_string(),
        }
    }

    /// Replace `{{KEY}}` with the escaped display form of `value`
    fn set(mut self, key: &str, value: impl Display) -> Self {
        self.html = self
            .html
            .replace(&format!("{{{{{}}}}}", key), &escape_html(&value.to_string()));
        self
    }

    /// Replace `{{KEY}}` with markup that is already safe
    fn set_markup(mut self, key: &str, markup: &str) -> Self {
        self.html = self.html.replace(&format!("{{{{{}}}}}", key), markup);
        self
    }

    fn finish(self) -> String {
        self.html
    }
}

fn schedule_markup(schedule: &[&str]) -> String {
    schedule
        .iter()
        .map(|session| {
            format!(
                "                            <li class=\"mb-2\"><i class=\"fas fa-check text-success me-2\"></i>{}</li>",
                escape_html(session)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the results page for a completed calculation
pub fn render_results<Tz>(report: &CalculationReport, calculated_at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let (color, icon, text) = goal_style(report.goal);
    let options = report.goal_options;

    Page::new(RESULTS_TEMPLATE)
        .set("CALCULATED_AT", calculated_at.format("%B %-d, %Y at %H:%M"))
        .set("GOAL_COLOR", color)
        .set("GOAL_ICON", icon)
        .set("GOAL_TEXT", text)
        .set("BMR", report.bmr)
        .set("MAINTENANCE", report.maintenance_calories)
        .set("TARGET", report.target_calories)
        .set("LOSE_OPTION", options.lose)
        .set("MAINTAIN_OPTION", options.maintain)
        .set("GAIN_OPTION", options.gain)
        .set("ACTIVITY_CALORIES", report.activity_calories)
        .set("BMI", format!("{:.1}", report.bmi))
        .set("BMI_CATEGORY", report.bmi_category)
        .set("PLAN_NAME", report.workout_plan_name)
        .set("PLAN_DESCRIPTION", report.workout_plan_description)
        .set("SESSION_DURATION", &report.session_duration)
        .set_markup("PLAN_SCHEDULE", &schedule_markup(report.workout_schedule))
        .set("PROTEIN_GRAMS", report.protein_grams)
        .set("CARB_GRAMS", report.carb_grams)
        .set("FAT_GRAMS", report.fat_grams)
        .set("PROTEIN_CALORIES", report.protein_calories)
        .set("CARB_CALORIES", report.carb_calories)
        .set("FAT_CALORIES", report.fat_calories)
        .finish()
}

/// Render the error page with a user-facing message
pub fn render_error(message: &str) -> String {
    Page::new(ERROR_TEMPLATE).set("MESSAGE", message).finish()
}
