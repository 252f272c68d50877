//! Locally persisted records: unsaved plan drafts and orphaned uploads.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{MediaKind, PlanPayload};

/// A plan whose save did not go through, kept for a later retry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Draft {
    pub id: u64,
    pub payload: PlanPayload,
    /// Why the last save attempt failed
    pub last_error: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Media stored by the backend that no record references.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrphanedUpload {
    pub id: u64,
    pub kind: MediaKind,
    pub url: String,
    pub reason: String,
    pub created_at: Timestamp,
}
