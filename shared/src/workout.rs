//! Workout plan lookup
//!
//! A fixed table of training splits keyed by how many days per week the
//! user can train. Hours per session is carried along for display but does
//! not influence which plan is picked.

use serde::Serialize;

/// A canned training split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanTemplate {
    /// Training days this entry is keyed on; `None` for the catch-all
    pub days: Option<i32>,
    pub name: &'static str,
    pub description: &'static str,
    pub schedule: &'static [&'static str],
}

pub static WORKOUT_PLANS: [PlanTemplate; 6] = [
    PlanTemplate {
        days: Some(1),
        name: "Full Body Blast",
        description: "A comprehensive full-body workout that targets all major muscle groups in one intense session. Perfect for busy schedules while ensuring balanced development.",
        schedule: &["Squats", "Deadlifts", "Push-ups", "Pull-ups", "Planks"],
    },
    PlanTemplate {
        days: Some(2),
        name: "Push-Pull Split",
        description: "An efficient 2-day split focusing on pushing movements (chest, shoulders, triceps) and pulling movements (back, biceps) with legs incorporated throughout.",
        schedule: &[
            "Day 1: Push (Chest, Shoulders, Triceps)",
            "Day 2: Pull (Back, Biceps) + Legs",
        ],
    },
    PlanTemplate {
        days: Some(3),
        name: "Push-Pull-Legs (PPL)",
        description: "The classic 3-day split that separates pushing muscles, pulling muscles, and legs. Provides excellent balance between intensity and recovery.",
        schedule: &[
            "Day 1: Push (Chest, Shoulders, Triceps)",
            "Day 2: Pull (Back, Biceps)",
            "Day 3: Legs & Core",
        ],
    },
    PlanTemplate {
        days: Some(4),
        name: "Upper/Lower Split",
        description: "A 4-day program alternating between upper body and lower body sessions. Allows for higher training frequency and volume for faster results.",
        schedule: &["Day 1 & 3: Upper Body", "Day 2 & 4: Lower Body"],
    },
    PlanTemplate {
        days: Some(5),
        name: "Arnold Split",
        description: "An advanced 5-day split popularized by Arnold Schwarzenegger. Combines muscle groups strategically for maximum growth and definition.",
        schedule: &["Chest/Back", "Shoulders/Arms", "Legs", "Chest/Back", "Shoulders/Arms"],
    },
    PlanTemplate {
        days: None,
        name: "Advanced Bro Split",
        description: "A high-frequency split dedicating individual days to specific muscle groups. Ideal for advanced trainees seeking maximum muscle specialization.",
        schedule: &["Chest", "Back", "Shoulders", "Arms", "Legs", "Core"],
    },
];

/// Find the plan template for a number of training days.
/// Anything outside 1..=5 falls through to the Advanced Bro Split.
pub fn plan_for_days(days_available: i32) -> &'static PlanTemplate {
    WORKOUT_PLANS
        .iter()
        .find(|plan| plan.days == Some(days_available))
        .unwrap_or(&WORKOUT_PLANS[WORKOUT_PLANS.len() - 1])
}

/// Selected workout plan for a user
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlan {
    pub name: &'static str,
    pub description: &'static str,
    pub schedule: &'static [&'static str],
    pub days_available: i32,
    pub hours_per_day: f64,
}

impl WorkoutPlan {
    /// Human-readable session length, e.g. "1.5 hours per session"
    pub fn session_duration(&self) -> String {
        let hours = self.hours_per_day;
        let unit = if hours == 1.0 { "hour" } else { "hours" };
        let mut label = format!("{} {}", hours, unit);
        if self.days_available != 1 {
            label.push_str(" per session");
        }
        label
    }
}

/// Select the workout plan for the given availability
pub fn select_workout_plan(days_available: i32, hours_per_day: f64) -> WorkoutPlan {
    let template = plan_for_days(days_available);
    WorkoutPlan {
        name: template.name,
        description: template.description,
        schedule: template.schedule,
        days_available,
        hours_per_day,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, "Full Body Blast")]
    #[case(2, "Push-Pull Split")]
    #[case(3, "Push-Pull-Legs (PPL)")]
    #[case(4, "Upper/Lower Split")]
    #[case(5, "Arnold Split")]
    #[case(6, "Advanced Bro Split")]
    #[case(7, "Advanced Bro Split")]
    #[case(0, "Advanced Bro Split")]
    #[case(-1, "Advanced Bro Split")]
    fn test_plan_selection(#[case] days: i32, #[case] expected: &str) {
        assert_eq!(select_workout_plan(days, 1.0).name, expected);
    }

    #[test]
    fn test_plan_carries_availability() {
        let plan = select_workout_plan(4, 1.5);
        assert_eq!(plan.days_available, 4);
        assert_eq!(plan.hours_per_day, 1.5);
        assert_eq!(plan.schedule.len(), 2);
    }

    #[rstest]
    #[case(1, 1.0, "1 hour")]
    #[case(1, 2.0, "2 hours")]
    #[case(3, 1.0, "1 hour per session")]
    #[case(5, 0.5, "0.5 hours per session")]
    #[case(6, 1.5, "1.5 hours per session")]
    fn test_session_duration(#[case] days: i32, #[case] hours: f64, #[case] expected: &str) {
        assert_eq!(select_workout_plan(days, hours).session_duration(), expected);
    }

    #[test]
    fn test_table_has_single_fallback() {
        assert_eq!(WORKOUT_PLANS.iter().filter(|p| p.days.is_none()).count(), 1);
        assert!(WORKOUT_PLANS[WORKOUT_PLANS.len() - 1].days.is_none());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: hours never change which plan is chosen
        #[test]
        fn prop_hours_do_not_affect_selection(
            days in -10i32..20,
            h1 in 0.5f64..=4.0,
            h2 in 0.5f64..=4.0
        ) {
            prop_assert_eq!(
                select_workout_plan(days, h1).name,
                select_workout_plan(days, h2).name
            );
        }
    }
}
