//! Health metrics calculations module
//!
//! Provides BMR, maintenance/target calorie and BMI calculations for a
//! validated [`PersonalInput`].
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: All calculations are pure, no side effects
//! 2. **Validated Inputs**: A `PersonalInput` can only be built from in-range values
//! 3. **One Rounding Rule**: BMR is rounded before the activity multiplier is applied

use crate::errors::EngineError;
use crate::validation::{
    check, field, validate_age_years, validate_days_available, validate_height_cm,
    validate_hours_per_day, validate_weight_kg,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Daily calorie adjustment applied for a lose/gain goal
pub const GOAL_CALORIE_ADJUSTMENT: i32 = 500;

// ============================================================================
// User Profile Types
// ============================================================================

/// Biological sex for health calculations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BiologicalSex {
    Male,
    Female,
}

impl BiologicalSex {
    /// Interpret a submitted `gender` value.
    ///
    /// Only a case-insensitive "male" selects [`BiologicalSex::Male`]; every
    /// other value, including a missing one, is treated as female.
    pub fn from_form_value(raw: Option<&str>) -> Self {
        match raw {
            Some(value) if value.trim().eq_ignore_ascii_case("male") => BiologicalSex::Male,
            _ => BiologicalSex::Female,
        }
    }
}

impl fmt::Display for BiologicalSex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BiologicalSex::Male => write!(f, "male"),
            BiologicalSex::Female => write!(f, "female"),
        }
    }
}

/// Weight-change goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Lose,
    #[default]
    Maintain,
    Gain,
}

impl Goal {
    /// Interpret a submitted `goal` value; unknown or missing means maintain
    pub fn from_form_value(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("lose") => Goal::Lose,
            Some("gain") => Goal::Gain,
            _ => Goal::Maintain,
        }
    }

    /// Calories added to maintenance for this goal
    pub fn calorie_adjustment(&self) -> i32 {
        match self {
            Goal::Lose => -GOAL_CALORIE_ADJUSTMENT,
            Goal::Maintain => 0,
            Goal::Gain => GOAL_CALORIE_ADJUSTMENT,
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Goal::Lose => write!(f, "lose"),
            Goal::Maintain => write!(f, "maintain"),
            Goal::Gain => write!(f, "gain"),
        }
    }
}

/// Validated personal data needed for the calculations
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PersonalInput {
    height_cm: f64,
    weight_kg: f64,
    age_years: i32,
    sex: BiologicalSex,
    activity_factor: f64,
    days_available: i32,
    hours_per_day: f64,
    goal: Goal,
}

impl PersonalInput {
    /// Build a validated input. Range checks run in the order height, weight,
    /// age, days, hours and the first violation is returned.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        height_cm: f64,
        weight_kg: f64,
        age_years: i32,
        sex: BiologicalSex,
        activity_factor: f64,
        days_available: i32,
        hours_per_day: f64,
        goal: Goal,
    ) -> Result<Self, EngineError> {
        check(field::HEIGHT, validate_height_cm(height_cm))?;
        check(field::WEIGHT, validate_weight_kg(weight_kg))?;
        check(field::AGE, validate_age_years(age_years))?;
        check(field::DAYS, validate_days_available(days_available))?;
        check(field::HOURS, validate_hours_per_day(hours_per_day))?;
        if !activity_factor.is_finite() {
            return Err(EngineError::malformed(field::ACTIVITY_LEVEL));
        }

        Ok(Self {
            height_cm,
            weight_kg,
            age_years,
            sex,
            activity_factor,
            days_available,
            hours_per_day,
            goal,
        })
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn age_years(&self) -> i32 {
        self.age_years
    }

    pub fn sex(&self) -> BiologicalSex {
        self.sex
    }

    pub fn activity_factor(&self) -> f64 {
        self.activity_factor
    }

    pub fn days_available(&self) -> i32 {
        self.days_available
    }

    pub fn hours_per_day(&self) -> f64 {
        self.hours_per_day
    }

    pub fn goal(&self) -> Goal {
        self.goal
    }
}

// ============================================================================
// BMI Calculations
// ============================================================================

/// BMI category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    #[serde(rename = "Normal weight")]
    NormalWeight,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Get a human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Calculate BMI from weight and height
///
/// Formula: BMI = weight(kg) / height(m)²
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Classify BMI into category. Lower bounds are inclusive.
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::NormalWeight
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

// ============================================================================
// BMR and Calorie Calculations
// ============================================================================

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation
///
/// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
pub fn calculate_bmr_mifflin(weight_kg: f64, height_cm: f64, age_years: i32, sex: BiologicalSex) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years as f64;
    match sex {
        BiologicalSex::Male => base + 5.0,
        BiologicalSex::Female => base - 161.0,
    }
}

/// Round to the nearest integer, ties toward positive infinity
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

fn to_kcal(value: f64, what: &str) -> Result<i32, EngineError> {
    if !value.is_finite() || value < i32::MIN as f64 || value > i32::MAX as f64 {
        return Err(EngineError::Internal(format!("{} is out of range: {}", what, value)));
    }
    Ok(value as i32)
}

/// Maintenance calories: rounded BMR times the activity factor, rounded again
pub fn maintenance_calories(bmr: i32, activity_factor: f64) -> Result<i32, EngineError> {
    to_kcal(
        round_half_up(bmr as f64 * activity_factor),
        "maintenance calories",
    )
}

/// Target calories for a goal. No floor is applied.
pub fn target_calories(maintenance_calories: i32, goal: Goal) -> Result<i32, EngineError> {
    maintenance_calories
        .checked_add(goal.calorie_adjustment())
        .ok_or_else(|| {
            EngineError::Internal(format!(
                "{} target overflows from maintenance {}",
                goal, maintenance_calories
            ))
        })
}

/// Daily targets for each goal at the same maintenance level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GoalOptions {
    pub lose: i32,
    pub maintain: i32,
    pub gain: i32,
}

impl GoalOptions {
    pub fn for_maintenance(maintenance_calories: i32) -> Result<Self, EngineError> {
        Ok(Self {
            lose: target_calories(maintenance_calories, Goal::Lose)?,
            maintain: maintenance_calories,
            gain: target_calories(maintenance_calories, Goal::Gain)?,
        })
    }
}

/// Calorie calculation result
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalorieResult {
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: i32,
    /// Calories to hold weight steady
    pub maintenance_calories: i32,
    /// Maintenance adjusted for the goal
    pub target_calories: i32,
    /// Calories burned through activity on top of BMR
    pub activity_calories: i32,
    pub goal_options: GoalOptions,
    /// Body-mass index, unrounded
    pub bmi: f64,
}

impl CalorieResult {
    pub fn bmi_category(&self) -> BmiCategory {
        classify_bmi(self.bmi)
    }
}

/// Calculate BMR, maintenance, target and BMI for a validated input
pub fn calculate_calories(input: &PersonalInput) -> Result<CalorieResult, EngineError> {
    let raw_bmr = calculate_bmr_mifflin(input.weight_kg(), input.height_cm(), input.age_years(), input.sex());
    let bmr = to_kcal(round_half_up(raw_bmr), "BMR")?;
    let maintenance = maintenance_calories(bmr, input.activity_factor())?;
    let target = target_calories(maintenance, input.goal())?;
    let goal_options = GoalOptions::for_maintenance(maintenance)?;
    let activity = maintenance.checked_sub(bmr).ok_or_else(|| {
        EngineError::Internal(format!(
            "activity calories overflow: maintenance {} minus BMR {}",
            maintenance, bmr
        ))
    })?;

    let bmi = calculate_bmi(input.weight_kg(), input.height_cm());
    if !bmi.is_finite() {
        return Err(EngineError::Internal(format!("BMI is not finite: {}", bmi)));
    }

    Ok(CalorieResult {
        bmr,
        maintenance_calories: maintenance,
        target_calories: target,
        activity_calories: activity,
        goal_options,
        bmi,
    })
}
