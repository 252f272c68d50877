//! Editors for plans that already exist on the backend.

mod meal;
mod workout;


pub use meal::{MealPlanEditor, ADD_MEAL_PATH, DELETE_MEAL_PATH, UPDATE_MEAL_PATH};
pub use workout::{PlanScope, WorkoutDayUpdate, WorkoutPlanEditor, WorkoutPlanUpdate};
