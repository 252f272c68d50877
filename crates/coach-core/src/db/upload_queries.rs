//! Ledger of uploaded media that no record references.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use super::draft_queries::sql_id;
use super::{conversion_error, id_column, stored_timestamp, timestamp_column};
use crate::error::{DatabaseResultExt, Result};
use crate::models::{MediaKind, OrphanedUpload};

// Re-uploading the same URL refreshes the reason instead of duplicating it.
const UPSERT_ORPHAN_SQL: &str = "INSERT INTO orphaned_uploads (kind, url, reason, created_at) VALUES (?1, ?2, ?3, ?4) ON CONFLICT(url) DO UPDATE SET reason = excluded.reason";
const SELECT_ORPHAN_BY_URL_SQL: &str =
    "SELECT id, kind, url, reason, created_at FROM orphaned_uploads WHERE url = ?1";
const LIST_ORPHANS_SQL: &str =
    "SELECT id, kind, url, reason, created_at FROM orphaned_uploads ORDER BY created_at DESC, id DESC";
const DELETE_ORPHAN_SQL: &str = "DELETE FROM orphaned_uploads WHERE id = ?1";

fn orphan_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<OrphanedUpload> {
    let kind_str: String = row.get(1)?;
    let kind = kind_str
        .parse::<MediaKind>()
        .map_err(|e| conversion_error(1, e))?;
    Ok(OrphanedUpload {
        id: id_column(row, 0)?,
        kind,
        url: row.get(2)?,
        reason: row.get(3)?,
        created_at: timestamp_column(row, 4)?,
    })
}

impl super::Database {
    pub fn record_orphan(&mut self, kind: MediaKind, url: &str, reason: &str) -> Result<OrphanedUpload> {
        self.connection
            .execute(
                UPSERT_ORPHAN_SQL,
                params![kind.as_str(), url, reason, stored_timestamp(Timestamp::now())],
            )
            .db_context("Failed to record orphaned upload")?;

        self.connection
            .query_row(SELECT_ORPHAN_BY_URL_SQL, params![url], orphan_from_row)
            .db_context("Failed to read back orphaned upload")
    }

    pub fn list_orphans(&self) -> Result<Vec<OrphanedUpload>> {
        let mut stmt = self
            .connection
            .prepare(LIST_ORPHANS_SQL)
            .db_context("Failed to prepare query")?;

        let orphans = stmt
            .query_map([], orphan_from_row)
            .db_context("Failed to query orphaned uploads")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch orphaned uploads")?;
        Ok(orphans)
    }

    /// Forgets an orphan once it has been cleaned up. Returns `None` for
    /// unknown ids.
    pub fn clear_orphan(&mut self, id: u64) -> Result<Option<OrphanedUpload>> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let orphan = tx
            .query_row(
                "SELECT id, kind, url, reason, created_at FROM orphaned_uploads WHERE id = ?1",
                params![sql_id(id)?],
                orphan_from_row,
            )
            .optional()
            .db_context("Failed to query orphaned upload")?;

        if orphan.is_some() {
            tx.execute(DELETE_ORPHAN_SQL, params![sql_id(id)?])
                .db_context("Failed to delete orphaned upload")?;
        }
        tx.commit().db_context("Failed to commit transaction")?;

        Ok(orphan)
    }
}
