use bitcode::{Decode, Encode};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::recipe::Recipe;

#[derive(
    Encode,
    Decode,
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// Recipe ids scheduled on each day of the week.
#[derive(Encode, Decode, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyPlan {
    pub monday: Vec<String>,
    pub tuesday: Vec<String>,
    pub wednesday: Vec<String>,
    pub thursday: Vec<String>,
    pub friday: Vec<String>,
    pub saturday: Vec<String>,
    pub sunday: Vec<String>,
}

impl DailyPlan {
    pub fn day(&self, day: Weekday) -> &[String] {
        match day {
            Weekday::Monday => &self.monday,
            Weekday::Tuesday => &self.tuesday,
            Weekday::Wednesday => &self.wednesday,
            Weekday::Thursday => &self.thursday,
            Weekday::Friday => &self.friday,
            Weekday::Saturday => &self.saturday,
            Weekday::Sunday => &self.sunday,
        }
    }

    fn day_mut(&mut self, day: Weekday) -> &mut Vec<String> {
        match day {
            Weekday::Monday => &mut self.monday,
            Weekday::Tuesday => &mut self.tuesday,
            Weekday::Wednesday => &mut self.wednesday,
            Weekday::Thursday => &mut self.thursday,
            Weekday::Friday => &mut self.friday,
            Weekday::Saturday => &mut self.saturday,
            Weekday::Sunday => &mut self.sunday,
        }
    }

    /// Returns false when the recipe was already scheduled that day.
    pub fn add_recipe(&mut self, day: Weekday, recipe_id: impl Into<String>) -> bool {
        let recipe_id = recipe_id.into();
        let recipes = self.day_mut(day);

        if recipes.contains(&recipe_id) {
            return false;
        }

        recipes.push(recipe_id);
        true
    }

    pub fn remove_recipe(&mut self, day: Weekday, recipe_id: &str) {
        self.day_mut(day).retain(|id| id != recipe_id);
    }

    /// Distinct recipe ids, Monday through Sunday, in first-seen order.
    pub fn recipe_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = Vec::new();

        for day in Weekday::VARIANTS {
            for id in self.day(*day) {
                if !ids.contains(id) {
                    ids.push(id.to_owned());
                }
            }
        }

        ids
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    pub id: String,
    pub owner_id: String,
    /// Unix timestamps
    pub week_start: u64,
    pub week_end: u64,
    #[serde(default)]
    pub daily_plan: DailyPlan,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanSummary {
    pub total_calories: u32,
    pub total_cook_time: u32,
}

impl MealPlan {
    pub fn recipe_ids(&self) -> Vec<String> {
        self.daily_plan.recipe_ids()
    }

    /// Totals over every scheduled slot, so a recipe planned twice counts twice.
    /// Recipes missing from `recipes` are skipped.
    pub fn summarize(&self, recipes: &[Recipe]) -> MealPlanSummary {
        let mut summary = MealPlanSummary::default();

        for day in Weekday::VARIANTS {
            for id in self.daily_plan.day(*day) {
                let Some(recipe) = recipes.iter().find(|r| &r.id == id) else {
                    continue;
                };

                summary.total_calories = summary
                    .total_calories
                    .saturating_add(recipe.estimated_calories);
                summary.total_cook_time = summary
                    .total_cook_time
                    .saturating_add(recipe.cook_time_minutes().unwrap_or(0));
            }
        }

        summary
    }
}
