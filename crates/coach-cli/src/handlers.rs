//! Command execution for the CLI.
//!
//! [`Cli`] owns the [`Admin`] and the terminal renderer. Each
//! `handle_*_command` method maps one subcommand onto admin operations and
//! renders the outcome as markdown.

use std::path::Path;

use anyhow::{bail, Context, Result};
use coach_core::display::Labeled;
use coach_core::views::{
    exercises_in, meal_type_counts, parse_date, Exercises, Resource, UserMealPlans, WorkoutPlans,
};
use coach_core::{
    Admin, CreateMeal, CreateResult, DeleteResult, ExerciseForm, Id, Listing, MealOption,
    MealPlanEditor, MediaFile, OperationStatus, UpdateResult, UserMealPlan, WorkoutPlanEditor,
};
use jiff::{tz::TimeZone, Timestamp};
use log::{debug, info};

use crate::cli::{
    BookingCommands, CategoryCommands, CreateExerciseArgs, CreateMealArgs,
    CreateWorkoutPlanArgs, DaySpec, DeleteArgs, DraftCommands, EditPlanArgs, ExerciseCommands,
    ListBookingsArgs, MealCommands, MealPlanCommands, PersonalizedCommands, SupplementCommands,
    WorkoutPlanCommands,
};
use crate::renderer::TerminalRenderer;

pub struct Cli {
    admin: Admin,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(admin: Admin, renderer: TerminalRenderer) -> Self {
        Self { admin, renderer }
    }

    fn show(&self, value: impl ToString) -> Result<()> {
        self.renderer.render(&value.to_string())
    }

    fn status(&self, message: impl Into<String>) -> Result<()> {
        self.show(OperationStatus::success(message.into()))
    }

    // ------------------------------------------------------------------------
    // Workout plans
    // ------------------------------------------------------------------------

    pub async fn handle_workout_plan_command(&self, command: WorkoutPlanCommands) -> Result<()> {
        use WorkoutPlanCommands::*;

        match command {
            List => self.list_workout_plans().await,
            Show(args) => self.show(self.admin.find_workout_plan(&args.id).await?),
            Create(args) => self.create_workout_plan(args).await,
            Edit(args) => {
                let editor = self.admin.workout_plan_editor(&args.id).await?;
                self.edit_plan(editor, args).await
            }
            Delete(args) => self.delete_from_view::<WorkoutPlans>(args).await,
        }
    }

    pub async fn list_workout_plans(&self) -> Result<()> {
        let plans = self.admin.list_workout_plans().await?;
        self.show(Listing::new(plans, WorkoutPlans::PLURAL))
    }

    async fn create_workout_plan(&self, args: CreateWorkoutPlanArgs) -> Result<()> {
        let CreateWorkoutPlanArgs { plan_type, day } = args;
        let day_count = u32::try_from(day.len()).context("Too many days")?;

        let mut wizard = self.admin.workout_wizard(plan_type).await?;
        wizard.select_day_count(day_count)?;
        for (number, DaySpec { category, exercises }) in (1..).zip(day) {
            debug!("Filling day {number} with {category}");
            wizard.assign_category(&category)?;
            wizard.open_item_selection()?;
            for exercise in &exercises {
                wizard
                    .toggle_item(exercise)
                    .with_context(|| format!("Day {number} ({category})"))?;
            }
            wizard.confirm_day()?;
        }

        let sink = self.admin.workout_sink();
        let saved = self.admin.save_plan(&mut wizard, &sink).await?;
        info!("Saved {} plan", plan_type.label());
        match saved.id {
            Some(id) => self.status(format!("Created workout plan with ID: {id}")),
            None => self.status(saved.message.unwrap_or_else(|| "Plan saved".to_string())),
        }
    }

    /// Applies the requested changes in order, then sends the plan once.
    async fn edit_plan(&self, mut editor: WorkoutPlanEditor, args: EditPlanArgs) -> Result<()> {
        let mut changes = Vec::new();

        for _ in 0..args.add_days {
            let number = editor.add_day()?;
            changes.push(format!("Added day {number}"));
        }
        for number in deletion_order(args.delete_day) {
            editor.delete_day(number)?;
            changes.push(format!("Deleted day {number}"));
        }
        for change in args.category {
            let dropped = editor.change_category(change.day, &change.value)?;
            changes.push(format!("Day {} category set to {}", change.day, change.value));
            if !dropped.is_empty() {
                changes.push(format!(
                    "Day {} dropped exercises: {}",
                    change.day,
                    dropped.join(", ")
                ));
            }
        }
        for toggle in args.toggle {
            let selected = editor.toggle_exercise(toggle.day, &toggle.value)?;
            let verb = if selected { "Added" } else { "Removed" };
            changes.push(format!("{verb} exercise {} on day {}", toggle.value, toggle.day));
        }

        if changes.is_empty() {
            bail!("Nothing to change. Use --add-days, --delete-day, --category or --toggle");
        }

        editor.submit().await?;

        let mut output = format!("Updated plan with ID: {}\n\nChanges made:\n", editor.id());
        for change in &changes {
            output.push_str(&format!("- {change}\n"));
        }
        for day in editor.days() {
            output.push('\n');
            output.push_str(&day.to_string());
        }
        self.show(output)
    }

    pub async fn handle_personalized_command(&self, command: PersonalizedCommands) -> Result<()> {
        use PersonalizedCommands::*;

        match command {
            List => {
                let plans = self.admin.list_personalized_plans().await?;
                self.show(Listing::new(plans, "personalized plans"))
            }
            Show(args) => self.show(self.admin.find_personalized_plan(&args.id).await?),
            Edit(args) => {
                let editor = self.admin.personalized_plan_editor(&args.id).await?;
                self.edit_plan(editor, args).await
            }
        }
    }

    /// Two-step delete through a list view. Without `--confirm` the pending
    /// delete is dismissed and nothing is sent.
    async fn delete_from_view<R>(&self, args: DeleteArgs) -> Result<()>
    where
        R: Resource,
        R::Record: Labeled,
    {
        let mut view = self.admin.view::<R>();
        view.refresh().await;
        view.request_delete(&args.id)?;

        if !args.confirm {
            view.cancel_delete();
            bail!(
                "Deletion requires confirmation. Use --confirm flag to delete {} '{}'.",
                R::NOUN,
                args.id
            );
        }

        let removed = view.confirm_delete().await?;
        self.show(DeleteResult::new(removed))
    }

    // ------------------------------------------------------------------------
    // Catalogs
    // ------------------------------------------------------------------------

    pub async fn handle_category_command(&self, command: CategoryCommands) -> Result<()> {
        use CategoryCommands::*;

        match command {
            List => self.show(Listing::new(self.admin.list_categories().await?, "categories")),
            Create(args) => {
                let saved = self.admin.create_category(&args.into()).await?;
                self.status(match saved.id {
                    Some(id) => format!("Created category with ID: {id}"),
                    None => "Category created".to_string(),
                })
            }
            Rename(args) => {
                let id = args.id.clone();
                self.admin.rename_category(&args.into()).await?;
                self.status(format!("Renamed category {id}"))
            }
        }
    }

    pub async fn handle_exercise_command(&self, command: ExerciseCommands) -> Result<()> {
        use ExerciseCommands::*;

        match command {
            List(args) => {
                let exercises = self.admin.list_exercises().await?;
                let shown: Vec<_> = exercises_in(&exercises, args.category.as_deref())
                    .into_iter()
                    .cloned()
                    .collect();
                self.show(Listing::new(shown, Exercises::PLURAL))
            }
            Show(args) => self.show(self.admin.find_exercise(&args.id).await?),
            Create(args) => self.create_exercise(args).await,
            Update(args) => {
                let form = ExerciseForm::from(args.form);
                self.admin.update_exercise(&args.id, &form).await?;
                let exercise = self.admin.find_exercise(&args.id).await?;
                self.show(UpdateResult::new(exercise))
            }
            Delete(args) => self.delete_from_view::<Exercises>(args).await,
        }
    }

    async fn create_exercise(&self, args: CreateExerciseArgs) -> Result<()> {
        let form = ExerciseForm::from(args.form);
        let saved = match args.video_file {
            Some(path) => {
                let video = MediaFile::from_path(&path)
                    .await
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                self.admin.create_exercise_with_video(form, video).await?
            }
            None => self.admin.create_exercise(&form).await?,
        };

        match saved.id {
            Some(id) => match self.admin.find_exercise(&id).await {
                Ok(exercise) => self.show(CreateResult::new(exercise)),
                Err(_) => self.status(format!("Created exercise with ID: {id}")),
            },
            None => self.status("Exercise created"),
        }
    }

    pub async fn handle_meal_command(&self, command: MealCommands) -> Result<()> {
        use MealCommands::*;

        match command {
            List(args) => {
                let mut meals = self.admin.list_meals().await?;
                if let Some(meal_type) = args.meal_type {
                    meals.retain(|meal| meal.meal_type == meal_type);
                }
                self.show(Listing::new(meals, "meals"))
            }
            Create(args) => self.create_meal(args).await,
        }
    }

    async fn create_meal(&self, args: CreateMealArgs) -> Result<()> {
        let CreateMealArgs {
            name,
            nutrition,
            image,
        } = args;
        let image = MediaFile::from_path(&image)
            .await
            .with_context(|| format!("Failed to read {}", image.display()))?;

        let saved = self
            .admin
            .create_meal(CreateMeal {
                name,
                meal_type: nutrition.meal_type,
                calories: nutrition.calories,
                protein: nutrition.protein,
                fat: nutrition.fat,
                carbs: nutrition.carbs,
                image,
            })
            .await?;
        self.status(match saved.id {
            Some(id) => format!("Created meal with ID: {id}"),
            None => "Meal created".to_string(),
        })
    }

    pub async fn handle_supplement_command(&self, command: SupplementCommands) -> Result<()> {
        use SupplementCommands::*;

        match command {
            List => self.show(Listing::new(self.admin.list_supplements().await?, "supplements")),
            Create(args) => {
                let saved = self.admin.create_supplement(&args.into()).await?;
                self.status(match saved.id {
                    Some(id) => format!("Created supplement with ID: {id}"),
                    None => "Supplement created".to_string(),
                })
            }
        }
    }

    // ------------------------------------------------------------------------
    // Meal plans
    // ------------------------------------------------------------------------

    pub async fn handle_meal_plan_command(&self, command: MealPlanCommands) -> Result<()> {
        use MealPlanCommands::*;

        match command {
            Show(args) => {
                let plan = read_meal_plan(&args.plan_file).await?;
                self.show(meal_plan_summary(&self.admin.meal_plan_editor(plan)))
            }
            AddMeal(args) => {
                let plan = read_meal_plan(&args.file.plan_file).await?;
                let mut editor = self.admin.meal_plan_editor(plan);
                let option = MealOption::from(args.option);
                let added = match args.image {
                    Some(path) => {
                        let image = MediaFile::from_path(&path)
                            .await
                            .with_context(|| format!("Failed to read {}", path.display()))?;
                        self.admin
                            .add_meal_with_image(&mut editor, args.day, option, image)
                            .await?
                    }
                    None => editor.add_meal(args.day, option).await?,
                };
                write_meal_plan(&args.file.plan_file, editor.into_plan()).await?;
                self.show(CreateResult::new(added))
            }
            UpdateMeal(args) => {
                let plan = read_meal_plan(&args.file.plan_file).await?;
                let mut editor = self.admin.meal_plan_editor(plan);
                let updated = editor
                    .update_meal(args.day, &args.option_id, args.option.into())
                    .await?;
                write_meal_plan(&args.file.plan_file, editor.into_plan()).await?;
                self.show(UpdateResult::new(updated))
            }
            DeleteMeal(args) => {
                let plan = read_meal_plan(&args.file.plan_file).await?;
                let mut editor = self.admin.meal_plan_editor(plan);
                let removed = editor.delete_meal(args.day, &args.option_id).await?;
                write_meal_plan(&args.file.plan_file, editor.into_plan()).await?;
                self.show(DeleteResult::new(removed))
            }
            Delete(args) => {
                if !args.confirm {
                    bail!(
                        "Deletion requires confirmation. Use --confirm flag to delete {} '{}'.",
                        UserMealPlans::NOUN,
                        args.id
                    );
                }
                self.admin.delete_user_meal_plan(&args.id).await?;
                self.status(format!("Deleted meal plan {}", args.id))
            }
        }
    }

    // ------------------------------------------------------------------------
    // Bookings
    // ------------------------------------------------------------------------

    pub async fn handle_booking_command(&self, command: BookingCommands) -> Result<()> {
        match command {
            BookingCommands::List(args) => self.list_bookings(args).await,
        }
    }

    async fn list_bookings(&self, args: ListBookingsArgs) -> Result<()> {
        if args.all {
            return self.show(Listing::new(self.admin.list_bookings().await?, "bookings"));
        }

        let day = match args.date {
            Some(raw) => parse_date(&raw)?,
            None => Timestamp::now().to_zoned(TimeZone::UTC).date(),
        };
        let bookings = self.admin.bookings_on(day).await?;
        self.renderer.render(&format!("# Bookings on {day}\n\n"))?;
        self.show(Listing::new(bookings, "bookings"))
    }

    // ------------------------------------------------------------------------
    // Drafts
    // ------------------------------------------------------------------------

    pub async fn handle_draft_command(&self, command: DraftCommands) -> Result<()> {
        use DraftCommands::*;

        match command {
            List => self.show(Listing::new(self.admin.list_drafts().await?, "drafts")),
            Show(args) => self.show(self.admin.get_draft(&args.into()).await?),
            Retry(args) => {
                let id = Id::from(args);
                let sink = self.admin.workout_sink();
                let saved = self.admin.retry_draft(&id, &sink).await?;
                self.status(match saved.id {
                    Some(plan_id) => format!("Draft {} saved as plan {plan_id}", id.id),
                    None => format!("Draft {} saved", id.id),
                })
            }
            Discard(args) => self.show(DeleteResult::new(
                self.admin.discard_draft(&args.into()).await?,
            )),
            Orphans => self.show(Listing::new(self.admin.list_orphans().await?, "orphaned uploads")),
            ClearOrphan(args) => {
                let id = Id::from(args);
                match self.admin.clear_orphan(&id).await? {
                    Some(orphan) => self.status(format!("Cleared orphaned upload {}", orphan.url)),
                    None => bail!("Orphaned upload with ID {} not found", id.id),
                }
            }
        }
    }
}

async fn read_meal_plan(path: &Path) -> Result<UserMealPlan> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read meal plan file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("{} does not hold a meal plan", path.display()))
}

async fn write_meal_plan(path: &Path, plan: UserMealPlan) -> Result<()> {
    let raw = serde_json::to_string_pretty(&plan)?;
    tokio::fs::write(path, raw)
        .await
        .with_context(|| format!("Failed to write meal plan file {}", path.display()))
}

/// Day numbers as given on the command line, highest first. Deleting a day
/// renumbers the ones after it, so this keeps every number pointing at the
/// day the user meant.
fn deletion_order(mut days: Vec<u32>) -> Vec<u32> {
    days.sort_unstable_by(|a, b| b.cmp(a));
    days.dedup();
    days
}

/// The plan followed by each day's totals, meal counts per type and
/// completeness.
fn meal_plan_summary(editor: &MealPlanEditor) -> String {
    let plan = editor.plan();
    let mut output = plan.to_string();
    for meal_day in &plan.days {
        let counts: Vec<String> = meal_type_counts(plan, meal_day.day)
            .iter()
            .map(|(meal_type, count)| format!("{meal_type} {count}"))
            .collect();
        let state = if editor.is_day_complete(meal_day.day) {
            "complete"
        } else {
            "incomplete"
        };
        output.push_str(&format!(
            "\nDay {}: {} ({state}; {})\n",
            meal_day.day,
            counts.join(", "),
            editor.day_totals(meal_day.day)
        ));
    }
    output
}
