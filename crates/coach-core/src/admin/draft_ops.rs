//! Draft and orphaned upload operations against the local store.

use async_trait::async_trait;
use log::info;

use super::Admin;
use crate::client::Saved;
use crate::error::{AdminError, Result};
use crate::models::{Draft, OrphanedUpload, PlanPayload};
use crate::params::Id;
use crate::upload::{OrphanLedger, UploadedMedia};
use crate::wizard::PlanSink;

impl Admin {
    pub async fn save_draft(&self, payload: &PlanPayload, last_error: Option<&str>) -> Result<Draft> {
        let payload = payload.clone();
        let last_error = last_error.map(String::from);
        self.with_database(move |db| db.save_draft(&payload, last_error.as_deref()))
            .await
    }

    pub async fn list_drafts(&self) -> Result<Vec<Draft>> {
        self.with_database(|db| db.list_drafts()).await
    }

    pub async fn get_draft(&self, params: &Id) -> Result<Draft> {
        let id = params.id;
        self.with_database(move |db| db.get_draft(id)?.ok_or(AdminError::DraftNotFound { id }))
            .await
    }

    pub async fn discard_draft(&self, params: &Id) -> Result<Draft> {
        let id = params.id;
        self.with_database(move |db| db.delete_draft(id)).await
    }

    /// Sends a draft again. On success the draft is removed; on failure the
    /// new error is stored with it.
    pub async fn retry_draft<S>(&self, params: &Id, sink: &S) -> Result<Saved>
    where
        S: PlanSink + ?Sized,
    {
        let draft = self.get_draft(params).await?;
        match sink.save_plan(&draft.payload).await {
            Ok(saved) => {
                self.discard_draft(params).await?;
                info!("Draft {} saved", draft.id);
                self.notifier.success("Plan saved successfully");
                Ok(saved)
            }
            Err(error) => {
                let id = draft.id;
                let message = error.user_message();
                self.notifier
                    .error(&format!("Failed to save plan: {message}"));
                self.with_database(move |db| db.update_draft_error(id, &message))
                    .await?;
                Err(error)
            }
        }
    }

    pub async fn list_orphans(&self) -> Result<Vec<OrphanedUpload>> {
        self.with_database(|db| db.list_orphans()).await
    }

    /// Forgets an orphan after it has been cleaned up on the storage side.
    pub async fn clear_orphan(&self, params: &Id) -> Result<Option<OrphanedUpload>> {
        let id = params.id;
        self.with_database(move |db| db.clear_orphan(id)).await
    }
}

#[async_trait]
impl OrphanLedger for Admin {
    async fn record_orphan(&self, media: &UploadedMedia, reason: &str) -> Result<()> {
        let kind = media.kind;
        let url = media.url.clone();
        let reason = reason.to_string();
        let orphan = self
            .with_database(move |db| db.record_orphan(kind, &url, &reason))
            .await?;
        info!("Recorded orphaned upload {} ({})", orphan.url, orphan.kind);
        Ok(())
    }
}
