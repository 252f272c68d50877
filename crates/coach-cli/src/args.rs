use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{
    BookingCommands, CategoryCommands, DraftCommands, ExerciseCommands, MealCommands,
    MealPlanCommands, PersonalizedCommands, SupplementCommands, WorkoutPlanCommands,
};

/// Admin console for the Coach fitness backend
///
/// Browses and edits the backend's exercise, meal and supplement catalogs,
/// builds workout plans day by day, and edits existing workout and meal
/// plans. Plans whose save fails are kept locally as drafts and can be
/// retried with `coach draft retry`.
#[derive(Parser)]
#[command(version, about, name = "coach")]
pub struct Args {
    /// Base URL of the admin backend
    #[arg(
        long,
        global = true,
        env = "COACH_BASE_URL",
        default_value = "http://localhost:3000"
    )]
    pub base_url: String,

    /// Path to the SQLite draft store. Defaults to
    /// $XDG_DATA_HOME/coach/coach.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Fail on collection responses of unknown shape instead of treating
    /// them as empty
    #[arg(long, global = true)]
    pub strict_decoding: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Coach CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage workout plan templates
    #[command(alias = "wp")]
    WorkoutPlan {
        #[command(subcommand)]
        command: WorkoutPlanCommands,
    },
    /// Manage plans generated for individual users
    #[command(alias = "pp")]
    Personalized {
        #[command(subcommand)]
        command: PersonalizedCommands,
    },
    /// Manage workout categories
    #[command(alias = "c")]
    Category {
        #[command(subcommand)]
        command: CategoryCommands,
    },
    /// Manage the exercise catalog
    #[command(alias = "e")]
    Exercise {
        #[command(subcommand)]
        command: ExerciseCommands,
    },
    /// Manage the meal catalog
    #[command(alias = "m")]
    Meal {
        #[command(subcommand)]
        command: MealCommands,
    },
    /// Edit a user's meal plan
    #[command(alias = "mp")]
    MealPlan {
        #[command(subcommand)]
        command: MealPlanCommands,
    },
    /// Manage supplements
    #[command(alias = "s")]
    Supplement {
        #[command(subcommand)]
        command: SupplementCommands,
    },
    /// Browse coaching session bookings
    #[command(alias = "b")]
    Booking {
        #[command(subcommand)]
        command: BookingCommands,
    },
    /// Retry or discard plans whose save failed
    #[command(alias = "d")]
    Draft {
        #[command(subcommand)]
        command: DraftCommands,
    },
}
