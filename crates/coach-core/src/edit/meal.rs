//! Granular editor for user meal plans.
//!
//! Each mutation touches one meal option in one day and goes to the
//! backend on its own. The local plan changes only after the backend
//! accepts the change, so a failed request leaves it exactly as it was.

use std::sync::Arc;

use jiff::Timestamp;
use log::info;
use serde_json::{Map, Value};

use crate::client::{ApiClient, RequestOptions};
use crate::error::{AdminError, Result};
use crate::models::{
    MealDay, MealOption, MealType, NutritionTotals, UserMealPlan, MEAL_DAY_COMPLETE_THRESHOLD,
};
use crate::notify::{LogNotifier, Notifier};

pub const ADD_MEAL_PATH: &str = "/admin/meal/add-meal-to-day";
pub const UPDATE_MEAL_PATH: &str = "/admin/meal/update-meal-in-day";
pub const DELETE_MEAL_PATH: &str = "/admin/meal/delete-meal-from-day";

pub struct MealPlanEditor {
    client: ApiClient,
    notifier: Arc<dyn Notifier>,
    plan: UserMealPlan,
    active_day: u32,
}

impl MealPlanEditor {
    pub fn new(client: ApiClient, plan: UserMealPlan) -> Self {
        let active_day = plan.days.iter().map(|day| day.day).min().unwrap_or(1);
        Self {
            client,
            notifier: Arc::new(LogNotifier),
            plan,
            active_day,
        }
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn plan(&self) -> &UserMealPlan {
        &self.plan
    }

    pub fn into_plan(self) -> UserMealPlan {
        self.plan
    }

    pub fn active_day(&self) -> u32 {
        self.active_day
    }

    pub fn select_day(&mut self, day: u32) -> Result<()> {
        self.require_day(day)?;
        self.active_day = day;
        Ok(())
    }

    pub fn day(&self, day: u32) -> Option<&MealDay> {
        self.plan.day(day)
    }

    /// Totals across the whole plan, summed from the current options.
    pub fn totals(&self) -> NutritionTotals {
        self.plan.totals()
    }

    pub fn day_totals(&self, day: u32) -> NutritionTotals {
        self.plan.day(day).map(MealDay::totals).unwrap_or_default()
    }

    pub fn is_day_complete(&self, day: u32) -> bool {
        self.plan
            .day(day)
            .is_some_and(|d| d.meal_options.len() >= MEAL_DAY_COMPLETE_THRESHOLD)
    }

    /// Adds a meal option to `day`. The option gets a fresh id.
    pub async fn add_meal(&mut self, day: u32, option: MealOption) -> Result<MealOption> {
        self.require_day(day)?;
        let id = Timestamp::now().as_millisecond().to_string();
        let body = self.change_body(&option, Value::from(id.as_str()), option.meal_type, day)?;

        let result = self
            .client
            .commit("Add meal", ADD_MEAL_PATH, RequestOptions::post_json(body))
            .await;
        self.report(result, "add meal", "Meal added successfully")?;

        let option = MealOption { id, ..option };
        if let Some(meal_day) = self.plan.day_mut(day) {
            meal_day.meal_options.push(option.clone());
        }
        info!("Added {} to day {day} of {}", option.food_name, self.plan.id);
        Ok(option)
    }

    /// Replaces the fields of an existing option, keeping its id.
    pub async fn update_meal(
        &mut self,
        day: u32,
        option_id: &str,
        changes: MealOption,
    ) -> Result<MealOption> {
        self.require_option(day, option_id)?;
        let body = self.change_body(&changes, Value::from(option_id), changes.meal_type, day)?;

        let result = self
            .client
            .commit("Update meal", UPDATE_MEAL_PATH, RequestOptions::put_json(body))
            .await;
        self.report(result, "update meal", "Meal updated successfully")?;

        let updated = MealOption {
            id: option_id.to_string(),
            ..changes
        };
        if let Some(slot) = self
            .plan
            .day_mut(day)
            .and_then(|d| d.meal_options.iter_mut().find(|o| o.id == option_id))
        {
            *slot = updated.clone();
        }
        Ok(updated)
    }

    /// Removes an option from `day`.
    pub async fn delete_meal(&mut self, day: u32, option_id: &str) -> Result<MealOption> {
        self.require_option(day, option_id)?;
        let body = serde_json::json!({
            "id": option_id,
            "mealPlanId": self.plan.id,
            "day": day,
        });

        let result = self
            .client
            .commit("Delete meal", DELETE_MEAL_PATH, RequestOptions::delete_json(body))
            .await;
        self.report(result, "delete meal", "Meal deleted successfully")?;

        let meal_day = self.plan.day_mut(day).ok_or_else(|| missing_day(day))?;
        let position = meal_day
            .meal_options
            .iter()
            .position(|o| o.id == option_id)
            .ok_or_else(|| missing_option(option_id))?;
        Ok(meal_day.meal_options.remove(position))
    }

    fn change_body(
        &self,
        option: &MealOption,
        id: Value,
        meal_type: MealType,
        day: u32,
    ) -> Result<Value> {
        let mut body = match serde_json::to_value(option)? {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        body.insert("id".to_string(), id);
        body.insert("mealType".to_string(), Value::from(meal_type.as_str()));
        body.insert("mealPlanId".to_string(), Value::from(self.plan.id.clone()));
        body.insert("day".to_string(), Value::from(day));
        Ok(Value::Object(body))
    }

    fn report<T>(&self, result: Result<T>, action: &str, success: &str) -> Result<T> {
        match result {
            Ok(value) => {
                self.notifier.success(success);
                Ok(value)
            }
            Err(error) => {
                self.notifier
                    .error(&format!("Failed to {action}: {}", error.user_message()));
                Err(error)
            }
        }
    }

    fn require_day(&self, day: u32) -> Result<()> {
        self.plan.day(day).map(|_| ()).ok_or_else(|| missing_day(day))
    }

    fn require_option(&self, day: u32, option_id: &str) -> Result<()> {
        let meal_day = self.plan.day(day).ok_or_else(|| missing_day(day))?;
        if meal_day.meal_options.iter().any(|o| o.id == option_id) {
            Ok(())
        } else {
            Err(missing_option(option_id))
        }
    }
}

fn missing_day(day: u32) -> AdminError {
    AdminError::invalid_input("day").with_reason(format!("Day {day} does not exist"))
}

fn missing_option(id: &str) -> AdminError {
    AdminError::NotFound {
        kind: "meal option",
        id: id.to_string(),
    }
}
