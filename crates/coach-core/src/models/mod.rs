//! Data models for the admin backend's records and the plan builder.
//!
//! Backend records are decoded once at the client boundary into these types.
//! Identifiers are the backend's `_id` strings; timestamps are parsed
//! leniently (full RFC 3339 instants, civil datetimes and bare dates are all
//! accepted, anything else becomes `None`).
//!
//! Display implementations live in [`crate::display::models`].

pub mod booking;
pub mod day;
pub mod draft;
pub mod exercise;
pub mod kinds;
pub mod lenient;
pub mod meal;
pub mod payload;
pub mod record;
pub mod supplement;
pub mod timestamp;
pub mod user;
pub mod workout_plan;

#[cfg(test)]
mod tests;

pub use booking::{Booking, BookingType};
pub use day::{remove_day, Day, Numbered, MAX_DAYS, MEAL_DAY_COMPLETE_THRESHOLD};
pub use draft::{Draft, OrphanedUpload};
pub use exercise::{same_category, Category, Exercise};
pub use kinds::{MealType, MediaKind, PlanKind, PlanType};
pub use meal::{Meal, MealDay, MealOption, NutritionTotals, UserMealPlan};
pub use payload::PlanPayload;
pub use record::{object_id_timestamp, sort_newest_first, RawRecord, Record};
pub use supplement::Supplement;
pub use user::UserProfile;
pub use workout_plan::{PersonalizedWorkoutPlan, WorkoutDay, WorkoutPlan};

pub use crate::display::LocalDateTime;
