//! Plan operations: templates, personalized plans, user meal plans and
//! bookings.

use jiff::civil::Date;
use log::{info, warn};

use super::Admin;
use crate::client::Saved;
use crate::edit::{MealPlanEditor, WorkoutPlanEditor};
use crate::error::{AdminError, Result};
use crate::models::{
    Booking, MealOption, MediaKind, PersonalizedWorkoutPlan, PlanType, UserMealPlan, WorkoutPlan,
};
use crate::notify::{Level, Notification};
use crate::upload::{self, MediaFile};
use crate::views::{
    bookings_on, delete_record, fetch_collection, Bookings, PersonalizedPlans, UserMealPlans,
    WorkoutPlans,
};
use crate::wizard::{PlanSink, PlanWizard, WorkoutPlanSink};

impl Admin {
    pub async fn list_workout_plans(&self) -> Result<Vec<WorkoutPlan>> {
        fetch_collection::<WorkoutPlans>(&self.client).await
    }

    pub async fn find_workout_plan(&self, id: &str) -> Result<WorkoutPlan> {
        self.list_workout_plans()
            .await?
            .into_iter()
            .find(|plan| plan.id == id)
            .ok_or_else(|| AdminError::NotFound {
                kind: "workout plan",
                id: id.to_string(),
            })
    }

    pub async fn delete_workout_plan(&self, id: &str) -> Result<()> {
        delete_record::<WorkoutPlans>(&self.client, id).await
    }

    pub async fn list_personalized_plans(&self) -> Result<Vec<PersonalizedWorkoutPlan>> {
        fetch_collection::<PersonalizedPlans>(&self.client).await
    }

    pub async fn find_personalized_plan(&self, id: &str) -> Result<PersonalizedWorkoutPlan> {
        self.list_personalized_plans()
            .await?
            .into_iter()
            .find(|plan| plan.id == id)
            .ok_or_else(|| AdminError::NotFound {
                kind: "personalized plan",
                id: id.to_string(),
            })
    }

    pub async fn delete_user_meal_plan(&self, id: &str) -> Result<()> {
        delete_record::<UserMealPlans>(&self.client, id).await
    }

    pub async fn list_bookings(&self) -> Result<Vec<Booking>> {
        fetch_collection::<Bookings>(&self.client).await
    }

    /// Bookings on one UTC calendar day.
    pub async fn bookings_on(&self, day: Date) -> Result<Vec<Booking>> {
        let bookings = self.list_bookings().await?;
        Ok(bookings_on(&bookings, day).into_iter().cloned().collect())
    }

    /// A workout plan builder over the current exercise catalog.
    pub async fn workout_wizard(&self, plan_type: PlanType) -> Result<PlanWizard> {
        let exercises = self.list_exercises().await?;
        Ok(PlanWizard::workout(plan_type, exercises).with_notifier(self.notifier()))
    }

    pub fn workout_sink(&self) -> WorkoutPlanSink {
        WorkoutPlanSink::new(self.client.clone())
    }

    /// Saves the wizard's plan. When the sink fails, the payload is kept as a
    /// draft so it can be retried later; the wizard itself keeps its state.
    pub async fn save_plan<S>(&self, wizard: &mut PlanWizard, sink: &S) -> Result<Saved>
    where
        S: PlanSink + ?Sized,
    {
        let payload = wizard.begin_save()?;
        let result = sink.save_plan(&payload).await;

        if let Err(error) = &result {
            match self.save_draft(&payload, Some(&error.user_message())).await {
                Ok(draft) => {
                    info!("Kept failed {} plan as draft {}", payload.kind, draft.id);
                    self.notifier.notify(Notification::new(
                        Level::Info,
                        format!("Plan kept as draft {}", draft.id),
                    ));
                }
                Err(db_error) => warn!("Failed to keep plan as draft: {db_error}"),
            }
        }

        wizard.complete_save(result)
    }

    /// Editor for a plan template.
    pub async fn workout_plan_editor(&self, id: &str) -> Result<WorkoutPlanEditor> {
        let plan = self.find_workout_plan(id).await?;
        let catalog = self.list_exercises().await?;
        Ok(WorkoutPlanEditor::template(self.client.clone(), &plan, catalog)
            .with_notifier(self.notifier()))
    }

    /// Editor for a user's personalized plan.
    pub async fn personalized_plan_editor(&self, id: &str) -> Result<WorkoutPlanEditor> {
        let plan = self.find_personalized_plan(id).await?;
        let catalog = self.list_exercises().await?;
        Ok(WorkoutPlanEditor::personalized(self.client.clone(), &plan, catalog)
            .with_notifier(self.notifier()))
    }

    pub fn meal_plan_editor(&self, plan: UserMealPlan) -> MealPlanEditor {
        MealPlanEditor::new(self.client.clone(), plan).with_notifier(self.notifier())
    }

    /// Uploads an image, then adds the option pointing at it. A failed add
    /// leaves the image recorded as orphaned.
    pub async fn add_meal_with_image(
        &self,
        editor: &mut MealPlanEditor,
        day: u32,
        mut option: MealOption,
        image: MediaFile,
    ) -> Result<MealOption> {
        if editor.day(day).is_none() {
            return Err(AdminError::invalid_input("day")
                .with_reason(format!("Day {day} does not exist")));
        }
        let media = self.upload_media(MediaKind::MealImage, image).await?;
        option.image = Some(media.url.clone());
        upload::reference(self, &media, editor.add_meal(day, option)).await
    }
}
