//! Destinations for finished plans.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::Serialize;

use crate::client::{ApiClient, RequestOptions, Saved};
use crate::error::{AdminError, Result};
use crate::models::{PlanKind, PlanPayload};

pub const WORKOUT_PLAN_SAVE_PATH: &str = "/admin/workout-plan/save";

/// Persists a finished plan.
#[async_trait]
pub trait PlanSink: Send + Sync {
    async fn save_plan(&self, payload: &PlanPayload) -> Result<Saved>;
}

/// Request body of the workout plan save endpoint.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlanSaveBody {
    pub workout_plan_id: String,
    pub selected_days: Vec<u32>,
    pub day_categories: BTreeMap<String, String>,
    pub day_exercises: BTreeMap<String, Vec<String>>,
}

impl From<&PlanPayload> for WorkoutPlanSaveBody {
    fn from(payload: &PlanPayload) -> Self {
        let mut day_categories = BTreeMap::new();
        let mut day_exercises = BTreeMap::new();
        for day in &payload.days {
            let key = day.day_number.to_string();
            if let Some(category) = &day.category {
                day_categories.insert(key.clone(), category.clone());
            }
            day_exercises.insert(key, day.items.clone());
        }
        Self {
            workout_plan_id: payload.plan_type.as_str().to_string(),
            selected_days: vec![payload.day_count()],
            day_categories,
            day_exercises,
        }
    }
}

/// Saves workout plans through the admin API.
#[derive(Debug, Clone)]
pub struct WorkoutPlanSink {
    client: ApiClient,
}

impl WorkoutPlanSink {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PlanSink for WorkoutPlanSink {
    async fn save_plan(&self, payload: &PlanPayload) -> Result<Saved> {
        if payload.kind != PlanKind::Workout {
            return Err(AdminError::invalid_input("kind")
                .with_reason(format!("cannot save a {} plan as a workout plan", payload.kind)));
        }
        let body = serde_json::to_value(WorkoutPlanSaveBody::from(payload))?;
        let response = self
            .client
            .commit(
                "Save workout plan",
                WORKOUT_PLAN_SAVE_PATH,
                RequestOptions::post_json(body),
            )
            .await?;
        Ok(Saved::from_response(&response))
    }
}
