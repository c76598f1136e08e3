//! Macronutrient split
//!
//! Target calories are divided 30/35/35 between protein, carbohydrate and
//! fat, then converted to grams. Both steps truncate toward zero, so the
//! grams never account for more energy than the target.

use serde::Serialize;

pub const PROTEIN_SHARE: f64 = 0.30;
pub const CARB_SHARE: f64 = 0.35;
pub const FAT_SHARE: f64 = 0.35;

pub const PROTEIN_KCAL_PER_GRAM: i32 = 4;
pub const CARB_KCAL_PER_GRAM: i32 = 4;
pub const FAT_KCAL_PER_GRAM: i32 = 9;

/// Macronutrient targets for one day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroPlan {
    pub protein_grams: i32,
    pub carb_grams: i32,
    pub fat_grams: i32,
    pub protein_calories: i32,
    pub carb_calories: i32,
    pub fat_calories: i32,
}

/// Whole-calorie share of a target, truncated toward zero
fn share_of(target_calories: i32, share: f64) -> i32 {
    (target_calories as f64 * share) as i32
}

/// Split target calories into protein, carbohydrate and fat grams
pub fn calculate_macros(target_calories: i32) -> MacroPlan {
    let protein_calories = share_of(target_calories, PROTEIN_SHARE);
    let carb_calories = share_of(target_calories, CARB_SHARE);
    let fat_calories = share_of(target_calories, FAT_SHARE);

    MacroPlan {
        protein_grams: protein_calories / PROTEIN_KCAL_PER_GRAM,
        carb_grams: carb_calories / CARB_KCAL_PER_GRAM,
        fat_grams: fat_calories / FAT_KCAL_PER_GRAM,
        protein_calories,
        carb_calories,
        fat_calories,
    }
}
