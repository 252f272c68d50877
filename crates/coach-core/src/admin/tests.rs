//! Tests for the admin module.

use std::sync::Arc;

use async_trait::async_trait;
use tempfile::TempDir;

use super::*;
use crate::client::Saved;
use crate::models::{Day, Exercise, MediaKind, PlanKind, PlanPayload, PlanType};
use crate::notify::RecordingNotifier;
use crate::params::Id;
use crate::upload::{OrphanLedger, UploadedMedia};
use crate::wizard::{PlanSink, PlanWizard, WizardState};

struct FixedSink {
    fail_with: Option<&'static str>,
}

#[async_trait]
impl PlanSink for FixedSink {
    async fn save_plan(&self, _payload: &PlanPayload) -> Result<Saved> {
        match self.fail_with {
            Some(message) => Err(AdminError::Api {
                status: 503,
                message: message.to_string(),
            }),
            None => Ok(Saved {
                id: Some("p1".to_string()),
                message: None,
            }),
        }
    }
}

/// Helper function to create a test admin
async fn create_test_admin() -> (TempDir, Admin, Arc<RecordingNotifier>) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let notifier = Arc::new(RecordingNotifier::new());
    let admin = AdminBuilder::new()
        .with_base_url(Some("http://127.0.0.1:9"))
        .with_database_path(Some(temp_dir.path().join("nested").join("coach.db")))
        .with_notifier(notifier.clone())
        .build()
        .await
        .expect("Failed to create admin");
    (temp_dir, admin, notifier)
}

fn payload() -> PlanPayload {
    let mut day = Day::new(1);
    day.category = Some("Chest".to_string());
    day.items = vec!["e1".to_string()];
    PlanPayload {
        kind: PlanKind::Workout,
        plan_type: PlanType::WeightLoss,
        days: vec![day],
    }
}

fn ready_wizard() -> PlanWizard {
    let mut exercise = Exercise::stub("e1");
    exercise.muscle_group = Some("Chest".to_string());
    let mut wizard = PlanWizard::workout(PlanType::WeightLoss, vec![exercise]);
    wizard.select_day_count(3).unwrap();
    for _ in 0..3 {
        wizard.assign_category("Chest").unwrap();
        wizard.open_item_selection().unwrap();
        wizard.toggle_item("e1").unwrap();
        wizard.confirm_day().unwrap();
    }
    wizard
}

#[tokio::test]
async fn builder_creates_the_database_directory() {
    let (temp_dir, admin, _) = create_test_admin().await;
    assert!(temp_dir.path().join("nested").join("coach.db").exists());
    assert_eq!(admin.client().base_url(), "http://127.0.0.1:9");
}

#[tokio::test]
async fn drafts_round_trip_through_the_store() {
    let (_temp_dir, admin, _) = create_test_admin().await;

    let draft = admin
        .save_draft(&payload(), Some("backend down"))
        .await
        .expect("Failed to save draft");
    assert!(draft.id > 0);

    let loaded = admin.get_draft(&Id { id: draft.id }).await.unwrap();
    assert_eq!(loaded.payload, payload());
    assert_eq!(loaded.last_error.as_deref(), Some("backend down"));
    assert_eq!(admin.list_drafts().await.unwrap().len(), 1);

    admin.discard_draft(&Id { id: draft.id }).await.unwrap();
    assert!(matches!(
        admin.get_draft(&Id { id: draft.id }).await,
        Err(AdminError::DraftNotFound { .. })
    ));
}

#[tokio::test]
async fn failed_save_keeps_a_draft_and_the_wizard() {
    let (_temp_dir, admin, notifier) = create_test_admin().await;
    let mut wizard = ready_wizard();
    let sink = FixedSink {
        fail_with: Some("Service unavailable"),
    };

    assert!(admin.save_plan(&mut wizard, &sink).await.is_err());
    assert_eq!(wizard.state(), WizardState::ReadyToSave);
    assert_eq!(wizard.days().len(), 3);
    assert!(!wizard.is_saving());

    let drafts = admin.list_drafts().await.unwrap();
    assert_eq!(drafts.len(), 1);
    assert_eq!(drafts[0].payload, wizard.payload());
    assert_eq!(drafts[0].last_error.as_deref(), Some("Service unavailable"));
    assert!(notifier.messages(crate::notify::Level::Info)[0].starts_with("Plan kept as draft"));
}

#[tokio::test]
async fn successful_save_leaves_no_draft() {
    let (_temp_dir, admin, _) = create_test_admin().await;
    let mut wizard = ready_wizard();

    let saved = admin
        .save_plan(&mut wizard, &FixedSink { fail_with: None })
        .await
        .unwrap();
    assert_eq!(saved.id.as_deref(), Some("p1"));
    assert_eq!(wizard.state(), WizardState::SelectingDayCount);
    assert!(admin.list_drafts().await.unwrap().is_empty());
}

#[tokio::test]
async fn retry_updates_or_removes_the_draft() {
    let (_temp_dir, admin, notifier) = create_test_admin().await;
    let draft = admin.save_draft(&payload(), None).await.unwrap();
    let id = Id { id: draft.id };

    let failing = FixedSink {
        fail_with: Some("still down"),
    };
    assert!(admin.retry_draft(&id, &failing).await.is_err());
    let kept = admin.get_draft(&id).await.unwrap();
    assert_eq!(kept.last_error.as_deref(), Some("still down"));
    assert_eq!(notifier.errors(), ["Failed to save plan: still down"]);

    admin
        .retry_draft(&id, &FixedSink { fail_with: None })
        .await
        .unwrap();
    assert!(admin.list_drafts().await.unwrap().is_empty());
}

#[tokio::test]
async fn orphans_are_recorded_once_per_url() {
    let (_temp_dir, admin, _) = create_test_admin().await;
    let media = UploadedMedia {
        kind: MediaKind::MealImage,
        url: "https://cdn.example/oats.png".to_string(),
    };

    admin.record_orphan(&media, "first").await.unwrap();
    admin.record_orphan(&media, "second").await.unwrap();

    let orphans = admin.list_orphans().await.unwrap();
    assert_eq!(orphans.len(), 1);
    assert_eq!(orphans[0].reason, "second");

    let cleared = admin.clear_orphan(&Id { id: orphans[0].id }).await.unwrap();
    assert!(cleared.is_some());
    assert!(admin.list_orphans().await.unwrap().is_empty());
    assert!(admin.clear_orphan(&Id { id: 999 }).await.unwrap().is_none());
}

#[tokio::test]
async fn list_views_start_empty() {
    let (_temp_dir, admin, _) = create_test_admin().await;
    let view = admin.view::<crate::views::Exercises>();
    assert!(view.records().is_empty());
}
