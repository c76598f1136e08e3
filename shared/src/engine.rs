//! Calorie engine entry point
//!
//! Turns a map of raw form fields into a [`CalculationReport`]:
//! parse and validate, compute calories and BMI, pick a workout plan,
//! split macros. All-or-nothing: any failure returns an [`EngineError`]
//! and no partial report.

use crate::errors::EngineError;
use crate::health_metrics::{
    calculate_calories, BiologicalSex, BmiCategory, CalorieResult, Goal, GoalOptions,
    PersonalInput,
};
use crate::nutrition::{calculate_macros, MacroPlan};
use crate::validation::{field, parse_integer, parse_number};
use crate::workout::{select_workout_plan, WorkoutPlan};
use serde::Serialize;
use std::collections::HashMap;
use std::hash::BuildHasher;

/// Read-only access to submitted form fields
pub trait FieldSource {
    fn field(&self, key: &str) -> Option<&str>;
}

impl<S: BuildHasher> FieldSource for HashMap<String, String, S> {
    fn field(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl FieldSource for [(&str, &str)] {
    fn field(&self, key: &str) -> Option<&str> {
        self.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
    }
}

impl PersonalInput {
    /// Parse and validate personal input from form fields.
    ///
    /// Numeric fields are parsed first (height, weight, age, activityLevel,
    /// days, hours) so a malformed value is reported before any range error.
    pub fn from_fields<F: FieldSource + ?Sized>(fields: &F) -> Result<Self, EngineError> {
        let height = parse_number(field::HEIGHT, fields.field(field::HEIGHT))?;
        let weight = parse_number(field::WEIGHT, fields.field(field::WEIGHT))?;
        let age = parse_integer(field::AGE, fields.field(field::AGE))?;
        let activity = parse_number(field::ACTIVITY_LEVEL, fields.field(field::ACTIVITY_LEVEL))?;
        let days = parse_integer(field::DAYS, fields.field(field::DAYS))?;
        let hours = parse_number(field::HOURS, fields.field(field::HOURS))?;
        let sex = BiologicalSex::from_form_value(fields.field(field::GENDER));
        let goal = Goal::from_form_value(fields.field(field::GOAL));

        PersonalInput::new(height, weight, age, sex, activity, days, hours, goal)
    }
}

/// Everything derived from one submission
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationReport {
    pub bmr: i32,
    pub maintenance_calories: i32,
    pub target_calories: i32,
    pub activity_calories: i32,
    pub goal_options: GoalOptions,
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub goal: Goal,
    pub workout_plan_name: &'static str,
    pub workout_plan_description: &'static str,
    pub workout_schedule: &'static [&'static str],
    pub session_duration: String,
    pub protein_grams: i32,
    pub carb_grams: i32,
    pub fat_grams: i32,
    pub protein_calories: i32,
    pub carb_calories: i32,
    pub fat_calories: i32,
}

impl CalculationReport {
    fn assemble(
        input: &PersonalInput,
        calories: CalorieResult,
        workout_plan: WorkoutPlan,
        macros: MacroPlan,
    ) -> Self {
        Self {
            bmr: calories.bmr,
            maintenance_calories: calories.maintenance_calories,
            target_calories: calories.target_calories,
            activity_calories: calories.activity_calories,
            goal_options: calories.goal_options,
            bmi: calories.bmi,
            bmi_category: calories.bmi_category(),
            goal: input.goal(),
            workout_plan_name: workout_plan.name,
            workout_plan_description: workout_plan.description,
            workout_schedule: workout_plan.schedule,
            session_duration: workout_plan.session_duration(),
            protein_grams: macros.protein_grams,
            carb_grams: macros.carb_grams,
            fat_grams: macros.fat_grams,
            protein_calories: macros.protein_calories,
            carb_calories: macros.carb_calories,
            fat_calories: macros.fat_calories,
        }
    }
}

/// Run every calculation for an already validated input
pub fn calculate(input: PersonalInput) -> Result<CalculationReport, EngineError> {
    let calories = calculate_calories(&input)?;
    let workout_plan = select_workout_plan(input.days_available(), input.hours_per_day());
    let macros = calculate_macros(calories.target_calories);

    Ok(CalculationReport::assemble(&input, calories, workout_plan, macros))
}

/// Validate raw form fields and run every calculation
pub fn evaluate<F: FieldSource + ?Sized>(fields: &F) -> Result<CalculationReport, EngineError> {
    let input = PersonalInput::from_fields(fields)?;
    calculate(input)
}
