//! Core library for the Coach fitness admin console.
//!
//! The crate is a typed client for the fitness/nutrition admin backend plus
//! the little logic the console needs on top of it:
//!
//! - [`client`]: the single fetch wrapper every request goes through
//! - [`decode`]: envelope decoding for collection responses
//! - [`models`]: backend records and plan builder data
//! - [`views`]: list views with newest-first sorting and two-step deletes
//! - [`edit`]: editors for existing workout and meal plans
//! - [`wizard`]: the multi-day plan builder state machine
//! - [`upload`]: two-phase media commits
//! - [`db`]: local SQLite store for drafts and orphaned uploads
//! - [`display`]: markdown Display wrappers for terminal output
//!
//! User-visible outcomes are reported through a [`notify::Notifier`]; the
//! default writes through the `log` facade.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use coach_core::{AdminBuilder, PlanType};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let admin = AdminBuilder::new()
//!     .with_database_path(Some("coach.db"))
//!     .build()
//!     .await?;
//!
//! let mut wizard = admin.workout_wizard(PlanType::MuscleMass).await?;
//! wizard.select_day_count(3)?;
//! wizard.assign_category("Chest")?;
//! # Ok(())
//! # }
//! ```

pub mod admin;
pub mod client;
pub mod db;
pub mod decode;
pub mod display;
pub mod edit;
pub mod error;
pub mod models;
pub mod notify;
pub mod params;
pub mod upload;
pub mod views;
pub mod wizard;

// Re-export commonly used types
pub use admin::{Admin, AdminBuilder};
pub use client::{ApiClient, ApiResponse, RequestBody, RequestOptions, Saved};
pub use db::Database;
pub use decode::DecodeMode;
pub use display::{CreateResult, DeleteResult, Listing, OperationStatus, UpdateResult};
pub use edit::{MealPlanEditor, PlanScope, WorkoutPlanEditor};
pub use error::{AdminError, Result};
pub use models::{
    Booking, Category, Day, Draft, Exercise, Meal, MealOption, MealType, MediaKind,
    OrphanedUpload, PersonalizedWorkoutPlan, PlanKind, PlanPayload, PlanType, Supplement,
    UserMealPlan, WorkoutPlan,
};
pub use notify::{LogNotifier, Notification, Notifier, RecordingNotifier};
pub use params::{CreateCategory, CreateMeal, CreateSupplement, ExerciseForm, Id, RenameCategory};
pub use upload::{MediaFile, UploadedMedia};
pub use views::ListView;
pub use wizard::{ItemPool, PlanSink, PlanWizard, Transition, WizardState, WorkoutPlanSink};
