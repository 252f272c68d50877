//! Whole-object editor for saved workout plans.

use std::sync::Arc;

use log::info;
use serde::Serialize;

use crate::client::{ApiClient, RequestOptions};
use crate::error::{AdminError, Result};
use crate::models::{
    remove_day, Exercise, PersonalizedWorkoutPlan, WorkoutDay, WorkoutPlan, MAX_DAYS,
};
use crate::notify::{LogNotifier, Notifier};

/// Which collection the edited plan belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanScope {
    Template,
    Personalized,
}

impl PlanScope {
    pub fn update_path(&self, id: &str) -> String {
        match self {
            Self::Template => format!("/admin/workout-plan/update/{id}"),
            Self::Personalized => format!("/admin/user-workout-plan/update/{id}"),
        }
    }

    fn noun(&self) -> &'static str {
        match self {
            Self::Template => "workout plan",
            Self::Personalized => "personalized plan",
        }
    }
}

/// Request body of the plan update endpoints.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlanUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<String>,
    pub days: Vec<WorkoutDayUpdate>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutDayUpdate {
    pub day_number: u32,
    pub category: String,
    pub exercises: Vec<String>,
}

/// Edits every day of a plan locally, then submits the whole plan at once.
pub struct WorkoutPlanEditor {
    client: ApiClient,
    notifier: Arc<dyn Notifier>,
    scope: PlanScope,
    id: String,
    plan_id: Option<String>,
    days: Vec<WorkoutDay>,
    catalog: Vec<Exercise>,
    active_day: u32,
    saving: bool,
}

impl WorkoutPlanEditor {
    /// Editor for a plan template.
    pub fn template(client: ApiClient, plan: &WorkoutPlan, catalog: Vec<Exercise>) -> Self {
        let plan_id = plan
            .plan_id
            .clone()
            .or_else(|| plan.plan_type.map(|t| t.as_str().to_string()));
        Self::new(
            client,
            PlanScope::Template,
            plan.id.clone(),
            plan_id,
            plan.days.clone(),
            catalog,
        )
    }

    /// Editor for a plan generated for one user.
    pub fn personalized(
        client: ApiClient,
        plan: &PersonalizedWorkoutPlan,
        catalog: Vec<Exercise>,
    ) -> Self {
        Self::new(
            client,
            PlanScope::Personalized,
            plan.id.clone(),
            plan.plan_id.clone(),
            plan.days.clone(),
            catalog,
        )
    }

    fn new(
        client: ApiClient,
        scope: PlanScope,
        id: String,
        plan_id: Option<String>,
        mut days: Vec<WorkoutDay>,
        catalog: Vec<Exercise>,
    ) -> Self {
        // Plans often reference exercises by id only; use the catalog entry
        // so category matching sees the muscle group.
        for exercise in days.iter_mut().flat_map(|day| day.exercises.iter_mut()) {
            if exercise.group().is_none() {
                if let Some(full) = catalog.iter().find(|e| e.id == exercise.id) {
                    *exercise = full.clone();
                }
            }
        }
        days.sort_by_key(|day| day.day_number);

        Self {
            client,
            notifier: Arc::new(LogNotifier),
            scope,
            id,
            plan_id,
            days,
            catalog,
            active_day: 1,
            saving: false,
        }
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn scope(&self) -> PlanScope {
        self.scope
    }

    pub fn days(&self) -> &[WorkoutDay] {
        &self.days
    }

    pub fn day(&self, day_number: u32) -> Option<&WorkoutDay> {
        self.days.iter().find(|day| day.day_number == day_number)
    }

    pub fn active_day(&self) -> u32 {
        self.active_day
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn set_active_day(&mut self, day_number: u32) -> Result<()> {
        self.require_day(day_number)?;
        self.active_day = day_number;
        Ok(())
    }

    /// Catalog exercises matching the day's category.
    pub fn offered_exercises(&self, day_number: u32) -> Vec<&Exercise> {
        match self.day(day_number) {
            Some(day) if !day.category.trim().is_empty() => self
                .catalog
                .iter()
                .filter(|exercise| exercise.belongs_to(&day.category))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Sets a day's category and drops exercises outside it. Returns the
    /// ids that were dropped.
    pub fn change_category(&mut self, day_number: u32, category: &str) -> Result<Vec<String>> {
        let category = category.trim();
        if category.is_empty() {
            return Err(AdminError::invalid_input("category").with_reason("Category is required"));
        }
        let day = self.day_mut(day_number)?;
        day.category = category.to_string();

        let (kept, dropped): (Vec<Exercise>, Vec<Exercise>) = std::mem::take(&mut day.exercises)
            .into_iter()
            .partition(|exercise| exercise.belongs_to(category));
        day.exercises = kept;
        Ok(dropped.into_iter().map(|exercise| exercise.id).collect())
    }

    /// Adds or removes a catalog exercise. Returns whether it is now part
    /// of the day.
    pub fn toggle_exercise(&mut self, day_number: u32, exercise_id: &str) -> Result<bool> {
        let day = self
            .day(day_number)
            .ok_or_else(|| missing_day(day_number))?;
        if day.has_exercise(exercise_id) {
            let day = self.day_mut(day_number)?;
            day.exercises.retain(|exercise| exercise.id != exercise_id);
            return Ok(false);
        }
        if day.category.trim().is_empty() {
            return Err(AdminError::invalid_input("category")
                .with_reason(format!("Choose a category for day {day_number} first")));
        }

        let exercise = self
            .catalog
            .iter()
            .find(|exercise| exercise.id == exercise_id)
            .ok_or_else(|| AdminError::NotFound {
                kind: "exercise",
                id: exercise_id.to_string(),
            })?;
        if !exercise.belongs_to(&day.category) {
            return Err(AdminError::invalid_input("exercise").with_reason(format!(
                "{} is not a {} exercise",
                exercise.name, day.category
            )));
        }

        let exercise = exercise.clone();
        self.day_mut(day_number)?.exercises.push(exercise);
        Ok(true)
    }

    /// Appends an empty day and makes it active.
    pub fn add_day(&mut self) -> Result<u32> {
        let next = u32::try_from(self.days.len()).unwrap_or(u32::MAX).saturating_add(1);
        if next > MAX_DAYS {
            return Err(AdminError::invalid_input("day")
                .with_reason(format!("a plan has at most {MAX_DAYS} days")));
        }
        self.days.push(WorkoutDay::new(next));
        self.active_day = next;
        self.notifier.success(&format!("Day {next} added successfully"));
        Ok(next)
    }

    pub fn delete_day(&mut self, day_number: u32) -> Result<()> {
        match remove_day(&mut self.days, day_number, self.active_day) {
            Ok(active) => {
                self.active_day = active;
                self.notifier
                    .success(&format!("Day {day_number} deleted successfully"));
                Ok(())
            }
            Err(error) => {
                self.notifier.error(&error.user_message());
                Err(error)
            }
        }
    }

    /// The body the update endpoint receives.
    pub fn update_body(&self) -> WorkoutPlanUpdate {
        WorkoutPlanUpdate {
            plan_id: self.plan_id.clone(),
            days: self
                .days
                .iter()
                .map(|day| WorkoutDayUpdate {
                    day_number: day.day_number,
                    category: day.category.clone(),
                    exercises: day.exercise_ids(),
                })
                .collect(),
        }
    }

    pub fn begin_submit(&mut self) -> Result<WorkoutPlanUpdate> {
        if self.saving {
            return Err(AdminError::SaveInFlight);
        }
        self.saving = true;
        self.notifier.loading(&format!("Updating {}", self.scope.noun()));
        Ok(self.update_body())
    }

    /// Clears the in-flight flag and reports the outcome. Local edits are
    /// kept either way.
    pub fn complete_submit<T>(&mut self, result: Result<T>) -> Result<T> {
        self.saving = false;
        match result {
            Ok(value) => {
                info!("Updated {} {}", self.scope.noun(), self.id);
                self.notifier.success("Plan updated successfully");
                Ok(value)
            }
            Err(error) => {
                self.notifier.error(&format!(
                    "Failed to update {}: {}",
                    self.scope.noun(),
                    error.user_message()
                ));
                Err(error)
            }
        }
    }

    /// PUTs the whole plan.
    pub async fn submit(&mut self) -> Result<()> {
        let body = self.begin_submit()?;
        let path = self.scope.update_path(&self.id);
        let result = match serde_json::to_value(body) {
            Ok(body) => self
                .client
                .commit("Update workout plan", &path, RequestOptions::put_json(body))
                .await
                .map(|_| ()),
            Err(error) => Err(error.into()),
        };
        self.complete_submit(result)
    }

    fn require_day(&self, day_number: u32) -> Result<()> {
        self.day(day_number).map(|_| ()).ok_or_else(|| missing_day(day_number))
    }

    fn day_mut(&mut self, day_number: u32) -> Result<&mut WorkoutDay> {
        self.days
            .iter_mut()
            .find(|day| day.day_number == day_number)
            .ok_or_else(|| missing_day(day_number))
    }
}

fn missing_day(day_number: u32) -> AdminError {
    AdminError::invalid_input("day").with_reason(format!("Day {day_number} does not exist"))
}
