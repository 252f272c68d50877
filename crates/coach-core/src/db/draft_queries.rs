//! Draft CRUD.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use super::{conversion_error, id_column, stored_timestamp, timestamp_column};
use crate::error::{AdminError, DatabaseResultExt, Result};
use crate::models::{Draft, PlanPayload};

const INSERT_DRAFT_SQL: &str = "INSERT INTO drafts (kind, plan_type, payload, last_error, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const SELECT_DRAFT_SQL: &str =
    "SELECT id, payload, last_error, created_at, updated_at FROM drafts WHERE id = ?1";
const LIST_DRAFTS_SQL: &str =
    "SELECT id, payload, last_error, created_at, updated_at FROM drafts ORDER BY updated_at DESC, id DESC";
const UPDATE_DRAFT_ERROR_SQL: &str =
    "UPDATE drafts SET last_error = ?1, updated_at = ?2 WHERE id = ?3";
const DELETE_DRAFT_SQL: &str = "DELETE FROM drafts WHERE id = ?1";

fn draft_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Draft> {
    let raw: String = row.get(1)?;
    let payload: PlanPayload = serde_json::from_str(&raw)
        .map_err(|e| conversion_error(1, format!("Invalid draft payload: {e}")))?;
    Ok(Draft {
        id: id_column(row, 0)?,
        payload,
        last_error: row.get(2)?,
        created_at: timestamp_column(row, 3)?,
        updated_at: timestamp_column(row, 4)?,
    })
}

impl super::Database {
    /// Stores a payload whose save failed.
    pub fn save_draft(&mut self, payload: &PlanPayload, last_error: Option<&str>) -> Result<Draft> {
        let json = serde_json::to_string(payload)?;
        let now = Timestamp::now();
        let now_str = stored_timestamp(now);

        self.connection
            .execute(
                INSERT_DRAFT_SQL,
                params![
                    payload.kind.as_str(),
                    payload.plan_type.as_str(),
                    json,
                    last_error,
                    &now_str,
                    &now_str
                ],
            )
            .db_context("Failed to insert draft")?;

        let id = u64::try_from(self.connection.last_insert_rowid()).unwrap_or_default();
        Ok(Draft {
            id,
            payload: payload.clone(),
            last_error: last_error.map(String::from),
            created_at: now,
            updated_at: now,
        })
    }

    pub fn get_draft(&self, id: u64) -> Result<Option<Draft>> {
        self.connection
            .query_row(SELECT_DRAFT_SQL, params![sql_id(id)?], draft_from_row)
            .optional()
            .db_context("Failed to query draft")
    }

    /// Drafts, most recently touched first.
    pub fn list_drafts(&self) -> Result<Vec<Draft>> {
        let mut stmt = self
            .connection
            .prepare(LIST_DRAFTS_SQL)
            .db_context("Failed to prepare query")?;

        let drafts = stmt
            .query_map([], draft_from_row)
            .db_context("Failed to query drafts")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch drafts")?;
        Ok(drafts)
    }

    /// Records another failed attempt.
    pub fn update_draft_error(&mut self, id: u64, last_error: &str) -> Result<Draft> {
        let changed = self
            .connection
            .execute(
                UPDATE_DRAFT_ERROR_SQL,
                params![last_error, stored_timestamp(Timestamp::now()), sql_id(id)?],
            )
            .db_context("Failed to update draft")?;
        if changed == 0 {
            return Err(AdminError::DraftNotFound { id });
        }
        self.get_draft(id)?.ok_or(AdminError::DraftNotFound { id })
    }

    /// Removes a draft and returns what it held.
    pub fn delete_draft(&mut self, id: u64) -> Result<Draft> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let draft = tx
            .query_row(SELECT_DRAFT_SQL, params![sql_id(id)?], draft_from_row)
            .optional()
            .db_context("Failed to query draft")?
            .ok_or(AdminError::DraftNotFound { id })?;

        tx.execute(DELETE_DRAFT_SQL, params![sql_id(id)?])
            .db_context("Failed to delete draft")?;
        tx.commit().db_context("Failed to commit transaction")?;

        Ok(draft)
    }
}

pub(super) fn sql_id(id: u64) -> Result<i64> {
    i64::try_from(id)
        .map_err(|_| AdminError::invalid_input("id").with_reason(format!("{id} is out of range")))
}
