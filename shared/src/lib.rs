//! Calorie Planner Shared Library
//!
//! The calculation engine shared by the backend and the WASM module:
//! input validation, BMR/BMI/calorie formulas, the workout plan table and
//! the macronutrient split.

pub mod engine;
pub mod errors;
pub mod health_metrics;
pub mod nutrition;
pub mod validation;
pub mod workout;

// Re-export commonly used items
pub use engine::{calculate, evaluate, CalculationReport, FieldSource};
pub use errors::EngineError;
pub use health_metrics::{
    BiologicalSex, BmiCategory, CalorieResult, Goal, GoalOptions, PersonalInput,
};
pub use nutrition::{calculate_macros, MacroPlan};
pub use workout::{select_workout_plan, PlanTemplate, WorkoutPlan, WORKOUT_PLANS};
