//! List views over backend collections.
//!
//! A [`ListView`] fetches a collection, keeps it sorted newest first and
//! runs the two-step delete flow: [`ListView::request_delete`] opens the
//! confirmation, [`ListView::confirm_delete`] performs it. Failures never
//! escape as panics or stale state; the view notifies once and falls back to
//! an empty list (fetch) or the unchanged list (delete).

mod filters;
mod resources;


use std::marker::PhantomData;
use std::sync::Arc;

use log::{debug, warn};

pub use filters::{booking_dates, bookings_on, exercises_in, meal_type_counts, parse_date};
pub use resources::{
    Bookings, Categories, Exercises, Meals, PersonalizedPlans, Resource, Supplements,
    UserMealPlans, WorkoutPlans,
};

use crate::client::{ApiClient, RequestOptions};
use crate::error::{AdminError, Result};
use crate::models::{sort_newest_first, Record};
use crate::notify::Notifier;

/// Fetches and sorts a collection, newest first.
pub async fn fetch_collection<R: Resource>(client: &ApiClient) -> Result<Vec<R::Record>> {
    let Some(path) = R::LIST_PATH else {
        return Err(AdminError::Configuration {
            message: format!("{} cannot be listed", R::PLURAL),
        });
    };
    let mut records = client.get_collection::<R::Record>(path).await?;
    sort_newest_first(&mut records);
    debug!("Fetched {} {}", records.len(), R::PLURAL);
    Ok(records)
}

/// Deletes one record on the backend.
pub async fn delete_record<R: Resource>(client: &ApiClient, id: &str) -> Result<()> {
    let path = R::delete_path(id).ok_or_else(|| {
        AdminError::invalid_input("id").with_reason(format!("{} cannot be deleted", R::PLURAL))
    })?;
    client
        .mutate(&format!("Delete {}", R::NOUN), &path, RequestOptions::delete())
        .await?;
    Ok(())
}

/// A collection on screen plus its pending delete.
pub struct ListView<R: Resource> {
    client: ApiClient,
    notifier: Arc<dyn Notifier>,
    records: Vec<R::Record>,
    pending_delete: Option<String>,
    resource: PhantomData<R>,
}

impl<R: Resource> ListView<R> {
    pub fn new(client: ApiClient, notifier: Arc<dyn Notifier>) -> Self {
        Self::with_records(client, notifier, Vec::new())
    }

    /// A view seeded with records obtained elsewhere.
    pub fn with_records(
        client: ApiClient,
        notifier: Arc<dyn Notifier>,
        mut records: Vec<R::Record>,
    ) -> Self {
        sort_newest_first(&mut records);
        Self {
            client,
            notifier,
            records,
            pending_delete: None,
            resource: PhantomData,
        }
    }

    /// Re-fetches the collection. On failure the user is notified and the
    /// list is empty. Collections without a listing endpoint keep their
    /// records.
    pub async fn refresh(&mut self) -> &[R::Record] {
        if R::LIST_PATH.is_none() {
            return &self.records;
        }
        match fetch_collection::<R>(&self.client).await {
            Ok(records) => self.records = records,
            Err(error) => {
                warn!("Failed to load {}: {error}", R::PLURAL);
                self.notifier.error(&format!(
                    "Failed to load {}: {}",
                    R::PLURAL,
                    error.user_message()
                ));
                self.records.clear();
            }
        }
        &self.records
    }

    pub fn records(&self) -> &[R::Record] {
        &self.records
    }

    pub fn into_records(self) -> Vec<R::Record> {
        self.records
    }

    pub fn find(&self, id: &str) -> Option<&R::Record> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    /// Opens the delete confirmation for `id`.
    pub fn request_delete(&mut self, id: &str) -> Result<()> {
        if R::delete_path(id).is_none() {
            return Err(AdminError::invalid_input("id")
                .with_reason(format!("{} cannot be deleted", R::PLURAL)));
        }
        if self.find(id).is_none() {
            return Err(AdminError::NotFound {
                kind: R::NOUN,
                id: id.to_string(),
            });
        }
        self.pending_delete = Some(id.to_string());
        Ok(())
    }

    /// Dismisses the confirmation without deleting.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Deletes the pending record. On success it leaves the list and the
    /// collection is re-fetched; on failure the list is unchanged.
    pub async fn confirm_delete(&mut self) -> Result<R::Record> {
        let Some(id) = self.pending_delete.take() else {
            return Err(AdminError::invalid_transition(
                "confirm a delete",
                "no delete is pending",
            ));
        };

        if let Err(error) = delete_record::<R>(&self.client, &id).await {
            self.notifier.error(&format!(
                "Failed to delete {}: {}",
                R::NOUN,
                error.user_message()
            ));
            return Err(error);
        }

        let position = self.records.iter().position(|record| record.id() == id);
        let removed = position.map(|index| self.records.remove(index));
        self.notifier
            .success(&format!("{} deleted successfully", capitalize(R::NOUN)));
        self.refresh().await;

        removed.ok_or(AdminError::NotFound {
            kind: R::NOUN,
            id,
        })
    }
}

fn capitalize(noun: &str) -> String {
    let mut chars = noun.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
