//! Workout plan templates and personalized plans.
//!
//! Templates come back from the backend in one of two layouts: a `days`
//! array of `{dayNumber, category, exercises}`, or the flat layout the
//! builder saves (`selectedDays`, `dayCategories`, `dayExercises`). Both are
//! normalized into [`WorkoutDay`]s during decoding.

use std::collections::BTreeMap;

use jiff::Timestamp;
use serde::{Deserialize, Deserializer, Serialize};

use super::{Exercise, Numbered, PlanType, UserProfile};

/// One day of a saved workout plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutDay {
    pub day_number: u32,

    #[serde(default)]
    pub category: String,

    #[serde(default, deserialize_with = "exercise_refs")]
    pub exercises: Vec<Exercise>,
}

impl WorkoutDay {
    pub fn new(day_number: u32) -> Self {
        Self {
            day_number,
            category: String::new(),
            exercises: Vec::new(),
        }
    }

    pub fn exercise_ids(&self) -> Vec<String> {
        self.exercises.iter().map(|e| e.id.clone()).collect()
    }

    pub fn has_exercise(&self, id: &str) -> bool {
        self.exercises.iter().any(|e| e.id == id)
    }
}

impl Numbered for WorkoutDay {
    fn day_number(&self) -> u32 {
        self.day_number
    }

    fn set_day_number(&mut self, day_number: u32) {
        self.day_number = day_number;
    }
}

/// A workout plan template.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", from = "WorkoutPlanWire")]
pub struct WorkoutPlan {
    #[serde(rename = "_id")]
    pub id: String,
    /// Business id sent back on update (`workoutPlanId` or `planId`)
    #[serde(rename = "workoutPlanId")]
    pub plan_id: Option<String>,
    pub title: String,
    #[serde(rename = "type")]
    pub plan_type: Option<PlanType>,
    pub days: Vec<WorkoutDay>,
    pub created_at: Option<Timestamp>,
}

/// A plan generated for one user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersonalizedWorkoutPlan {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(default, rename = "userId")]
    pub user: UserProfile,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<String>,

    #[serde(default)]
    pub days: Vec<WorkoutDay>,

    #[serde(
        default,
        deserialize_with = "super::timestamp::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<Timestamp>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ExerciseRef {
    Id(String),
    Full(Box<Exercise>),
}

impl From<ExerciseRef> for Exercise {
    fn from(reference: ExerciseRef) -> Self {
        match reference {
            ExerciseRef::Id(id) => Exercise::stub(id),
            ExerciseRef::Full(exercise) => *exercise,
        }
    }
}

fn exercise_refs<'de, D>(deserializer: D) -> Result<Vec<Exercise>, D::Error>
where
    D: Deserializer<'de>,
{
    let refs = Option::<Vec<ExerciseRef>>::deserialize(deserializer)?;
    Ok(refs
        .unwrap_or_default()
        .into_iter()
        .map(Exercise::from)
        .collect())
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WorkoutPlanWire {
    #[serde(rename = "_id")]
    id: String,
    #[serde(default)]
    workout_plan_id: Option<String>,
    #[serde(default)]
    plan_id: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default, rename = "type")]
    plan_type: Option<String>,
    #[serde(default)]
    days: Vec<WorkoutDay>,
    #[serde(default)]
    selected_days: Vec<u32>,
    #[serde(default)]
    day_categories: BTreeMap<String, String>,
    #[serde(default)]
    day_exercises: BTreeMap<String, Vec<String>>,
    #[serde(default, deserialize_with = "exercise_refs")]
    exercises: Vec<Exercise>,
    #[serde(default, deserialize_with = "super::timestamp::optional")]
    created_at: Option<Timestamp>,
}

impl WorkoutPlanWire {
    /// Rebuilds days from the flat layout. The day count is the first
    /// selected count, or the highest day key when none was stored.
    fn flat_days(&self) -> Vec<WorkoutDay> {
        let highest_key = self
            .day_categories
            .keys()
            .chain(self.day_exercises.keys())
            .filter_map(|key| key.parse::<u32>().ok())
            .max()
            .unwrap_or(0);
        let count = self.selected_days.first().copied().unwrap_or(highest_key);

        (1..=count)
            .map(|number| {
                let key = number.to_string();
                let exercises = self
                    .day_exercises
                    .get(&key)
                    .map(|ids| {
                        ids.iter()
                            .map(|id| {
                                self.exercises
                                    .iter()
                                    .find(|e| &e.id == id)
                                    .cloned()
                                    .unwrap_or_else(|| Exercise::stub(id.clone()))
                            })
                            .collect()
                    })
                    .unwrap_or_default();
                WorkoutDay {
                    day_number: number,
                    category: self.day_categories.get(&key).cloned().unwrap_or_default(),
                    exercises,
                }
            })
            .collect()
    }
}

impl From<WorkoutPlanWire> for WorkoutPlan {
    fn from(mut wire: WorkoutPlanWire) -> Self {
        let days = if wire.days.is_empty() {
            wire.flat_days()
        } else {
            std::mem::take(&mut wire.days)
        };
        let plan_id = wire.workout_plan_id.take().or_else(|| wire.plan_id.take());
        let plan_type = wire
            .plan_type
            .as_deref()
            .or(plan_id.as_deref())
            .and_then(|raw| raw.parse().ok());
        let title = wire
            .title
            .take()
            .or_else(|| plan_type.map(|t: PlanType| format!("Workout Plan for {}", t.label())))
            .unwrap_or_default();

        Self {
            id: wire.id,
            plan_id,
            title,
            plan_type,
            days,
            created_at: wire.created_at,
        }
    }
}
