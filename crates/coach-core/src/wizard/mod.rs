//! Step-by-step plan builder.
//!
//! [`PlanWizard`] owns the whole flow as one state machine:
//!
//! ```text
//! SelectingDayCount
//!   -> AssigningCategories { day: 1 }
//!   -> SelectingItems { day: 1 }
//!   -> AssigningCategories { day: 2 } -> ... -> ReadyToSave
//! ```
//!
//! Every operation checks the current state and either transitions or fails
//! with [`AdminError::InvalidTransition`], so an illegal sequence such as
//! selecting items for a day with no category cannot be expressed. Saving is
//! split into [`PlanWizard::begin_save`] and [`PlanWizard::complete_save`] so
//! the in-flight guard holds across the network call; [`PlanWizard::save`]
//! runs both around a [`PlanSink`].
//!
//! ```rust
//! use coach_core::models::{Exercise, PlanType};
//! use coach_core::wizard::{PlanWizard, WizardState};
//!
//! let mut bench = Exercise::stub("e1");
//! bench.muscle_group = Some("Chest".to_string());
//!
//! let mut wizard = PlanWizard::workout(PlanType::MuscleMass, vec![bench]);
//! wizard.select_day_count(3)?;
//! wizard.assign_category("Chest")?;
//! wizard.open_item_selection()?;
//! wizard.toggle_item("e1")?;
//! wizard.confirm_day()?;
//! assert_eq!(wizard.state(), WizardState::AssigningCategories { day: 2 });
//! # Ok::<(), coach_core::AdminError>(())
//! ```

mod pool;
mod sink;
mod state;


use std::sync::Arc;

use log::{debug, info};

pub use pool::{Item, ItemPool};
pub use sink::{PlanSink, WorkoutPlanSaveBody, WorkoutPlanSink, WORKOUT_PLAN_SAVE_PATH};
pub use state::{Transition, WizardState};

use crate::client::Saved;
use crate::error::{AdminError, Result};
use crate::models::{
    remove_day, Day, Exercise, MealOption, PlanKind, PlanPayload, PlanType, MAX_DAYS,
};
use crate::notify::{LogNotifier, Notifier};

/// The plan builder.
pub struct PlanWizard {
    kind: PlanKind,
    plan_type: PlanType,
    pool: ItemPool,
    state: WizardState,
    days: Vec<Day>,
    saving: bool,
    notifier: Arc<dyn Notifier>,
}

impl PlanWizard {
    pub fn new(plan_type: PlanType, pool: ItemPool) -> Self {
        Self {
            kind: pool.kind(),
            plan_type,
            pool,
            state: WizardState::SelectingDayCount,
            days: Vec::new(),
            saving: false,
            notifier: Arc::new(LogNotifier),
        }
    }

    /// A workout plan builder over the given exercise catalog.
    pub fn workout(plan_type: PlanType, exercises: Vec<Exercise>) -> Self {
        Self::new(plan_type, ItemPool::exercises(exercises))
    }

    /// A meal plan builder over the given meal options.
    pub fn meal(plan_type: PlanType, options: Vec<MealOption>) -> Self {
        Self::new(plan_type, ItemPool::meals(options))
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Rebuilds a builder from a saved payload, ready to save again.
    pub fn restore(payload: PlanPayload, pool: ItemPool) -> Result<Self> {
        if payload.kind != pool.kind() {
            return Err(AdminError::invalid_input("kind").with_reason(format!(
                "a {} plan cannot draw from {} items",
                payload.kind,
                pool.kind().item_noun()
            )));
        }
        if payload.days.is_empty() || payload.day_count() > MAX_DAYS || !payload.is_contiguous() {
            return Err(AdminError::invalid_input("days")
                .with_reason("days must be numbered 1..N with N between 1 and 7"));
        }

        let mut wizard = Self::new(payload.plan_type, pool);
        wizard.days = payload.days;
        wizard.state = WizardState::ReadyToSave;
        Ok(wizard)
    }

    pub fn kind(&self) -> PlanKind {
        self.kind
    }

    pub fn plan_type(&self) -> PlanType {
        self.plan_type
    }

    pub fn state(&self) -> WizardState {
        self.state
    }

    pub fn days(&self) -> &[Day] {
        &self.days
    }

    pub fn day(&self, day_number: u32) -> Option<&Day> {
        self.days.iter().find(|day| day.day_number == day_number)
    }

    pub fn pool(&self) -> &ItemPool {
        &self.pool
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn active_day(&self) -> Option<u32> {
        self.state.active_day()
    }

    /// Whether every day passes its completion check.
    pub fn is_complete(&self) -> bool {
        !self.days.is_empty() && self.days.iter().all(|day| day.is_completed(self.kind))
    }

    /// Items offered for the active day's category.
    pub fn offered_items(&self) -> Vec<&Item> {
        let category = self
            .active_day()
            .and_then(|n| self.day(n))
            .and_then(|day| day.category.as_deref());
        match category {
            Some(category) => self.pool.offered(category).collect(),
            None => Vec::new(),
        }
    }

    /// Picks how many days the plan has.
    pub fn select_day_count(&mut self, count: u32) -> Result<()> {
        if self.state != WizardState::SelectingDayCount {
            return Err(AdminError::invalid_transition("choose the day count", self.state));
        }
        let offered = self.kind.offered_day_counts();
        if !offered.contains(&count) {
            return Err(AdminError::invalid_input("day_count").with_reason(format!(
                "{count} is not offered; pick between {} and {}",
                offered.start(),
                offered.end()
            )));
        }

        self.days = (1..=count).map(Day::new).collect();
        self.state = WizardState::AssigningCategories { day: 1 };
        debug!("Building a {count}-day {} plan", self.kind);
        Ok(())
    }

    /// Switches to another day's tab.
    pub fn go_to_day(&mut self, day_number: u32) -> Result<()> {
        match self.state {
            WizardState::AssigningCategories { .. } | WizardState::ReadyToSave => {}
            state => return Err(AdminError::invalid_transition("switch days", state)),
        }
        self.require_day(day_number)?;
        self.state = WizardState::AssigningCategories { day: day_number };
        Ok(())
    }

    /// Sets the active day's category. Selected items outside the new
    /// category are dropped and their ids returned.
    pub fn assign_category(&mut self, category: &str) -> Result<Vec<String>> {
        let WizardState::AssigningCategories { day } = self.state else {
            return Err(AdminError::invalid_transition("assign a category", self.state));
        };
        let category = category.trim();
        if category.is_empty() {
            return Err(AdminError::invalid_input("category").with_reason("category cannot be blank"));
        }

        let pool = &self.pool;
        let entry = self
            .days
            .iter_mut()
            .find(|d| d.day_number == day)
            .ok_or_else(|| missing_day(day))?;

        let (kept, dropped): (Vec<String>, Vec<String>) = std::mem::take(&mut entry.items)
            .into_iter()
            .partition(|id| pool.is_offered(id, category));
        entry.items = kept;
        entry.category = Some(category.to_string());

        if !dropped.is_empty() {
            debug!("Dropped {} items not in {category} from day {day}", dropped.len());
        }
        Ok(dropped)
    }

    /// Moves to item selection for the active day. Without a category this
    /// does nothing.
    pub fn open_item_selection(&mut self) -> Result<Transition> {
        let WizardState::AssigningCategories { day } = self.state else {
            return Err(AdminError::invalid_transition("select items", self.state));
        };
        let has_category = self.day(day).is_some_and(|d| d.category.is_some());
        if !has_category {
            return Ok(Transition::Ignored);
        }
        self.state = WizardState::SelectingItems { day };
        Ok(Transition::Advanced)
    }

    /// Adds or removes an item on the active day. Returns whether the item
    /// is selected afterwards.
    pub fn toggle_item(&mut self, id: &str) -> Result<bool> {
        let WizardState::SelectingItems { day } = self.state else {
            return Err(AdminError::invalid_transition("toggle items", self.state));
        };
        let pool = &self.pool;
        let kind = self.kind;
        let entry = self
            .days
            .iter_mut()
            .find(|d| d.day_number == day)
            .ok_or_else(|| missing_day(day))?;
        let category = entry.category.as_deref().unwrap_or_default();

        if !entry.contains(id) && !pool.is_offered(id, category) {
            return Err(AdminError::invalid_input("item").with_reason(format!(
                "{} {id} is not offered for {category}",
                kind.item_noun()
            )));
        }
        Ok(entry.toggle(id))
    }

    /// Returns from item selection to the active day's category.
    pub fn back_to_categories(&mut self) -> Result<()> {
        let WizardState::SelectingItems { day } = self.state else {
            return Err(AdminError::invalid_transition("go back", self.state));
        };
        self.state = WizardState::AssigningCategories { day };
        Ok(())
    }

    /// Finishes the active day and moves to the next one, or to
    /// `ReadyToSave` after the last.
    pub fn confirm_day(&mut self) -> Result<WizardState> {
        let WizardState::SelectingItems { day } = self.state else {
            return Err(AdminError::invalid_transition("confirm the day", self.state));
        };
        let next = day + 1;
        self.state = if self.day(next).is_some() {
            WizardState::AssigningCategories { day: next }
        } else {
            WizardState::ReadyToSave
        };
        Ok(self.state)
    }

    /// Deletes a day and renumbers the rest. The last remaining day cannot
    /// be deleted.
    pub fn delete_day(&mut self, day_number: u32) -> Result<()> {
        if self.state == WizardState::SelectingDayCount {
            return Err(AdminError::invalid_transition("delete a day", self.state));
        }
        let active = self.active_day().unwrap_or(1);
        let new_active = match remove_day(&mut self.days, day_number, active) {
            Ok(new_active) => new_active,
            Err(error) => {
                self.notifier.error(&error.user_message());
                return Err(error);
            }
        };

        self.state = match self.state {
            WizardState::SelectingItems { day } if day != day_number => {
                WizardState::SelectingItems { day: new_active }
            }
            WizardState::ReadyToSave => WizardState::ReadyToSave,
            _ => WizardState::AssigningCategories { day: new_active },
        };
        self.notifier
            .success(&format!("Day {day_number} deleted successfully"));
        Ok(())
    }

    /// Appends an empty day and makes it active.
    pub fn add_day(&mut self) -> Result<u32> {
        if self.state == WizardState::SelectingDayCount {
            return Err(AdminError::invalid_transition("add a day", self.state));
        }
        let next = u32::try_from(self.days.len()).unwrap_or(u32::MAX).saturating_add(1);
        if next > MAX_DAYS {
            return Err(AdminError::invalid_input("day")
                .with_reason(format!("a plan has at most {MAX_DAYS} days")));
        }
        self.days.push(Day::new(next));
        self.state = WizardState::AssigningCategories { day: next };
        self.notifier.success(&format!("Day {next} added successfully"));
        Ok(next)
    }

    /// Current plan as a payload.
    pub fn payload(&self) -> PlanPayload {
        PlanPayload {
            kind: self.kind,
            plan_type: self.plan_type,
            days: self.days.clone(),
        }
    }

    /// Marks a save as in flight and returns what to send.
    pub fn begin_save(&mut self) -> Result<PlanPayload> {
        if self.saving {
            return Err(AdminError::SaveInFlight);
        }
        if self.state != WizardState::ReadyToSave {
            return Err(AdminError::invalid_transition("save", self.state));
        }
        let payload = self.payload();
        let incomplete = payload.incomplete_days();
        if !incomplete.is_empty() {
            let days: Vec<String> = incomplete.iter().map(u32::to_string).collect();
            return Err(AdminError::invalid_input("days")
                .with_reason(format!("days {} are not complete", days.join(", "))));
        }
        self.saving = true;
        self.notifier.loading("Saving plan");
        Ok(payload)
    }

    /// Clears the in-flight flag. On success the builder resets; on failure
    /// it keeps every choice so the user can retry.
    pub fn complete_save<T>(&mut self, result: Result<T>) -> Result<T> {
        self.saving = false;
        match result {
            Ok(value) => {
                info!("Saved {} plan for {}", self.kind, self.plan_type.label());
                self.notifier.success("Plan saved successfully");
                self.reset();
                Ok(value)
            }
            Err(error) => {
                self.notifier
                    .error(&format!("Failed to save plan: {}", error.user_message()));
                Err(error)
            }
        }
    }

    /// Saves the plan through `sink`.
    pub async fn save<S>(&mut self, sink: &S) -> Result<Saved>
    where
        S: PlanSink + ?Sized,
    {
        let payload = self.begin_save()?;
        let result = sink.save_plan(&payload).await;
        self.complete_save(result)
    }

    /// Back to an empty builder.
    pub fn reset(&mut self) {
        self.days.clear();
        self.state = WizardState::SelectingDayCount;
        self.saving = false;
    }

    fn require_day(&self, day_number: u32) -> Result<()> {
        if self.day(day_number).is_none() {
            return Err(missing_day(day_number));
        }
        Ok(())
    }
}

fn missing_day(day_number: u32) -> AdminError {
    AdminError::invalid_input("day").with_reason(format!("Day {day_number} does not exist"))
}
