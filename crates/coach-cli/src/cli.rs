//! Command-line argument definitions using clap
//!
//! Each command's arguments live in a clap `Args` struct that converts into
//! the matching `coach_core` parameter type:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Admin operation
//! ```
//!
//! Core parameter types stay free of clap attributes; help text, aliases and
//! argument syntax such as `--day Chest=e1,e2` are handled here.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::{Args, Subcommand};
use coach_core::{
    CreateCategory, CreateSupplement, ExerciseForm, Id, MealOption, MealType, PlanType,
    RenameCategory,
};

/// One day of a new workout plan: a category and the exercises picked for it.
///
/// Written as `CATEGORY=ID,ID,...`, for example `Chest=e1,e2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySpec {
    pub category: String,
    pub exercises: Vec<String>,
}

impl FromStr for DaySpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (category, exercises) = s
            .split_once('=')
            .ok_or_else(|| format!("expected CATEGORY=ID,ID,... but got '{s}'"))?;
        let category = category.trim();
        if category.is_empty() {
            return Err(format!("missing category in '{s}'"));
        }
        let exercises = exercises
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(String::from)
            .collect();
        Ok(Self {
            category: category.to_string(),
            exercises,
        })
    }
}

/// A value aimed at one day, written as `DAY=VALUE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayValue {
    pub day: u32,
    pub value: String,
}

impl FromStr for DayValue {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (day, value) = s
            .split_once('=')
            .ok_or_else(|| format!("expected DAY=VALUE but got '{s}'"))?;
        let day = day
            .trim()
            .parse()
            .map_err(|_| format!("'{}' is not a day number", day.trim()))?;
        Ok(Self {
            day,
            value: value.trim().to_string(),
        })
    }
}

impl fmt::Display for DayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.day, self.value)
    }
}

// ----------------------------------------------------------------------------
// Shared arguments
// ----------------------------------------------------------------------------

/// A backend record id
#[derive(Args)]
pub struct RecordArgs {
    #[arg(help = "Backend identifier of the record")]
    pub id: String,
}

/// Delete a backend record
#[derive(Args)]
pub struct DeleteArgs {
    #[arg(help = "Backend identifier of the record to delete")]
    pub id: String,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

/// A local draft store id
#[derive(Args)]
pub struct LocalIdArgs {
    #[arg(help = "Identifier in the local draft store")]
    pub id: u64,
}

impl From<LocalIdArgs> for Id {
    fn from(val: LocalIdArgs) -> Self {
        Id { id: val.id }
    }
}

// ----------------------------------------------------------------------------
// Workout plans
// ----------------------------------------------------------------------------

/// Build and save a new workout plan
///
/// Days are given in order with repeated `--day CATEGORY=ID,ID` arguments.
/// Categories match exercises case-insensitively. If the save fails, the plan
/// is kept as a local draft.
#[derive(Args)]
pub struct CreateWorkoutPlanArgs {
    /// Goal the plan is built for
    #[arg(long = "type", help = "Plan type (muscle-mass, weight-loss, bulk-up)")]
    pub plan_type: PlanType,
    #[arg(
        long,
        required = true,
        help = "One day as CATEGORY=EXERCISE_ID,EXERCISE_ID (repeat for each day)"
    )]
    pub day: Vec<DaySpec>,
}

/// Edit an existing workout plan
///
/// Changes are applied in this order: days are added, days are deleted,
/// categories are changed, exercises are toggled. The whole plan is then
/// sent back in one update.
#[derive(Args)]
pub struct EditPlanArgs {
    #[arg(help = "Backend identifier of the plan to edit")]
    pub id: String,
    #[arg(long, default_value_t = 0, help = "Number of empty days to append")]
    pub add_days: u32,
    #[arg(long, help = "Day number to delete, as numbered before any deletion (repeatable)")]
    pub delete_day: Vec<u32>,
    #[arg(long, help = "New category for a day as DAY=CATEGORY (repeatable)")]
    pub category: Vec<DayValue>,
    #[arg(
        long,
        help = "Add or remove an exercise as DAY=EXERCISE_ID (repeatable)"
    )]
    pub toggle: Vec<DayValue>,
}

#[derive(Subcommand)]
pub enum WorkoutPlanCommands {
    /// List workout plan templates
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show one plan with its days
    #[command(alias = "s")]
    Show(RecordArgs),
    /// Build and save a new plan
    #[command(alias = "c")]
    Create(CreateWorkoutPlanArgs),
    /// Edit days, categories and exercises of a plan
    #[command(alias = "e")]
    Edit(EditPlanArgs),
    /// Delete a plan
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteArgs),
}

#[derive(Subcommand)]
pub enum PersonalizedCommands {
    /// List personalized plans
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show one plan with its user's profile
    #[command(alias = "s")]
    Show(RecordArgs),
    /// Edit days, categories and exercises of a plan
    #[command(alias = "e")]
    Edit(EditPlanArgs),
}

// ----------------------------------------------------------------------------
// Categories
// ----------------------------------------------------------------------------

/// Create a workout category
#[derive(Args)]
pub struct CreateCategoryArgs {
    #[arg(help = "Category name; surrounding whitespace is removed")]
    pub name: String,
}

impl From<CreateCategoryArgs> for CreateCategory {
    fn from(val: CreateCategoryArgs) -> Self {
        CreateCategory { name: val.name }
    }
}

/// Rename a workout category
#[derive(Args)]
pub struct RenameCategoryArgs {
    #[arg(help = "Backend identifier of the category")]
    pub id: String,
    #[arg(help = "New name")]
    pub name: String,
}

impl From<RenameCategoryArgs> for RenameCategory {
    fn from(val: RenameCategoryArgs) -> Self {
        RenameCategory {
            id: val.id,
            name: val.name,
        }
    }
}

#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List categories
    #[command(aliases = ["l", "ls"])]
    List,
    /// Create a category
    #[command(alias = "c")]
    Create(CreateCategoryArgs),
    /// Rename a category
    #[command(alias = "r")]
    Rename(RenameCategoryArgs),
}

// ----------------------------------------------------------------------------
// Exercises
// ----------------------------------------------------------------------------

/// Fields of the exercise form
#[derive(Args)]
pub struct ExerciseFormArgs {
    #[arg(long, help = "Exercise name")]
    pub name: String,
    #[arg(long, help = "Muscle group; stored capitalized")]
    pub muscle_group: String,
    #[arg(long, default_value = "", help = "Set type, e.g. straight or superset")]
    pub set_type: String,
    #[arg(long, default_value = "", help = "Repetitions, e.g. 12 or 8-10")]
    pub reps: String,
    #[arg(long, help = "Additional comments shown with the exercise")]
    pub comments: Option<String>,
    #[arg(long, help = "Coaching suggestion")]
    pub suggestion: Option<String>,
    #[arg(long, help = "URL of an already uploaded video")]
    pub video: Option<String>,
    #[arg(long, help = "URL of the card image")]
    pub card_image: Option<String>,
    #[arg(
        long,
        help = "Name of an alternative exercise in the same muscle group (repeatable)"
    )]
    pub alternative: Vec<String>,
}

impl From<ExerciseFormArgs> for ExerciseForm {
    fn from(val: ExerciseFormArgs) -> Self {
        let alternatives = val
            .alternative
            .into_iter()
            .map(|name| ExerciseForm {
                name,
                muscle_group: val.muscle_group.clone(),
                set_type: val.set_type.clone(),
                reps: val.reps.clone(),
                ..ExerciseForm::default()
            })
            .collect();
        ExerciseForm {
            name: val.name,
            muscle_group: val.muscle_group,
            set_type: val.set_type,
            reps: val.reps,
            comments: val.comments,
            suggestion: val.suggestion,
            video: val.video,
            card_image: val.card_image,
            alternatives,
        }
    }
}

/// Create an exercise
///
/// With `--video-file` the video is uploaded first and the exercise points
/// at the stored URL. If creating the exercise then fails, the upload is
/// recorded as orphaned (see `coach draft orphans`).
#[derive(Args)]
pub struct CreateExerciseArgs {
    #[command(flatten)]
    pub form: ExerciseFormArgs,
    #[arg(long, conflicts_with = "video", help = "Video file to upload first")]
    pub video_file: Option<PathBuf>,
}

/// Update an exercise
#[derive(Args)]
pub struct UpdateExerciseArgs {
    #[arg(help = "Backend identifier of the exercise")]
    pub id: String,
    #[command(flatten)]
    pub form: ExerciseFormArgs,
}

/// List exercises
#[derive(Args)]
pub struct ListExercisesArgs {
    #[arg(long, help = "Only exercises in this category (\"All\" shows every exercise)")]
    pub category: Option<String>,
}

#[derive(Subcommand)]
pub enum ExerciseCommands {
    /// List exercises
    #[command(aliases = ["l", "ls"])]
    List(ListExercisesArgs),
    /// Show one exercise, including alternatives
    #[command(alias = "s")]
    Show(RecordArgs),
    /// Create an exercise
    #[command(alias = "c")]
    Create(CreateExerciseArgs),
    /// Update an exercise
    #[command(alias = "u")]
    Update(UpdateExerciseArgs),
    /// Delete an exercise
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteArgs),
}

// ----------------------------------------------------------------------------
// Meals and meal plans
// ----------------------------------------------------------------------------

/// Nutrition values shared by catalog meals and plan options
#[derive(Args)]
pub struct NutritionArgs {
    #[arg(long, help = "Slot the meal fills (breakfast, lunch, dinner, snacks)")]
    pub meal_type: MealType,
    #[arg(long, default_value_t = 0.0, help = "Calories (kcal)")]
    pub calories: f64,
    #[arg(long, default_value_t = 0.0, help = "Protein in grams")]
    pub protein: f64,
    #[arg(long, default_value_t = 0.0, help = "Fat in grams")]
    pub fat: f64,
    #[arg(long, default_value_t = 0.0, help = "Carbohydrates in grams")]
    pub carbs: f64,
}

/// Create a catalog meal
#[derive(Args)]
pub struct CreateMealArgs {
    #[arg(long, help = "Meal name")]
    pub name: String,
    #[command(flatten)]
    pub nutrition: NutritionArgs,
    #[arg(long, help = "Image file sent with the meal")]
    pub image: PathBuf,
}

/// List catalog meals
#[derive(Args)]
pub struct ListMealsArgs {
    #[arg(long, help = "Only meals of this type")]
    pub meal_type: Option<MealType>,
}

#[derive(Subcommand)]
pub enum MealCommands {
    /// List catalog meals
    #[command(aliases = ["l", "ls"])]
    List(ListMealsArgs),
    /// Create a catalog meal
    #[command(alias = "c")]
    Create(CreateMealArgs),
}

/// A meal plan file and day
///
/// User meal plans are read from a JSON file holding the plan as the backend
/// returns it. After a successful change the file is rewritten with the
/// updated plan.
#[derive(Args)]
pub struct MealPlanFileArgs {
    #[arg(long, help = "JSON file holding the user meal plan")]
    pub plan_file: PathBuf,
}

/// Fields of a meal option
#[derive(Args)]
pub struct MealOptionArgs {
    #[arg(long, help = "Food name")]
    pub food_name: String,
    #[command(flatten)]
    pub nutrition: NutritionArgs,
    #[arg(long, help = "Preparation notes")]
    pub preparation: Option<String>,
}

impl From<MealOptionArgs> for MealOption {
    fn from(val: MealOptionArgs) -> Self {
        MealOption {
            id: String::new(),
            food_name: val.food_name,
            meal_type: val.nutrition.meal_type,
            calories: val.nutrition.calories,
            protein: val.nutrition.protein,
            fat: val.nutrition.fat,
            carbs: val.nutrition.carbs,
            image: None,
            preparation: val.preparation,
        }
    }
}

/// Add a meal option to a day
#[derive(Args)]
pub struct AddMealArgs {
    #[command(flatten)]
    pub file: MealPlanFileArgs,
    #[arg(long, help = "Day number")]
    pub day: u32,
    #[command(flatten)]
    pub option: MealOptionArgs,
    #[arg(long, help = "Image file to upload first")]
    pub image: Option<PathBuf>,
}

/// Replace a meal option in a day
#[derive(Args)]
pub struct UpdateMealArgs {
    #[command(flatten)]
    pub file: MealPlanFileArgs,
    #[arg(long, help = "Day number")]
    pub day: u32,
    #[arg(long, help = "Identifier of the option to replace")]
    pub option_id: String,
    #[command(flatten)]
    pub option: MealOptionArgs,
}

/// Remove a meal option from a day
#[derive(Args)]
pub struct DeleteMealArgs {
    #[command(flatten)]
    pub file: MealPlanFileArgs,
    #[arg(long, help = "Day number")]
    pub day: u32,
    #[arg(long, help = "Identifier of the option to remove")]
    pub option_id: String,
}

#[derive(Subcommand)]
pub enum MealPlanCommands {
    /// Show a meal plan with daily totals
    #[command(alias = "s")]
    Show(MealPlanFileArgs),
    /// Add a meal option to a day
    #[command(alias = "a")]
    AddMeal(AddMealArgs),
    /// Replace a meal option in a day
    #[command(alias = "u")]
    UpdateMeal(UpdateMealArgs),
    /// Remove a meal option from a day
    #[command(alias = "r")]
    DeleteMeal(DeleteMealArgs),
    /// Delete a user meal plan on the backend
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteArgs),
}

// ----------------------------------------------------------------------------
// Supplements and bookings
// ----------------------------------------------------------------------------

/// Create a supplement
#[derive(Args)]
pub struct CreateSupplementArgs {
    #[arg(help = "Supplement name")]
    pub name: String,
    #[arg(short, long, default_value = "", help = "Dosage or description")]
    pub description: String,
}

impl From<CreateSupplementArgs> for CreateSupplement {
    fn from(val: CreateSupplementArgs) -> Self {
        CreateSupplement {
            name: val.name,
            description: val.description,
        }
    }
}

#[derive(Subcommand)]
pub enum SupplementCommands {
    /// List supplements
    #[command(aliases = ["l", "ls"])]
    List,
    /// Create a supplement
    #[command(alias = "c")]
    Create(CreateSupplementArgs),
}

/// List bookings
///
/// Shows the bookings on one UTC calendar day, today by default.
#[derive(Args)]
pub struct ListBookingsArgs {
    #[arg(long, conflicts_with = "all", help = "Day to show as YYYY-MM-DD")]
    pub date: Option<String>,
    #[arg(long, help = "Show every booking regardless of date")]
    pub all: bool,
}

#[derive(Subcommand)]
pub enum BookingCommands {
    /// List bookings
    #[command(aliases = ["l", "ls"])]
    List(ListBookingsArgs),
}

// ----------------------------------------------------------------------------
// Drafts
// ----------------------------------------------------------------------------

#[derive(Subcommand)]
pub enum DraftCommands {
    /// List plans whose save failed
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show a draft
    #[command(alias = "s")]
    Show(LocalIdArgs),
    /// Send a draft to the backend again
    #[command(alias = "r")]
    Retry(LocalIdArgs),
    /// Forget a draft
    #[command(aliases = ["d", "rm"])]
    Discard(LocalIdArgs),
    /// List uploads that no record references
    #[command(alias = "o")]
    Orphans,
    /// Forget an orphaned upload after cleaning it up
    #[command(alias = "c")]
    ClearOrphan(LocalIdArgs),
}
