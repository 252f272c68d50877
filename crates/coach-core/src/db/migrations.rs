//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, Result};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()
    }

    /// Brings stores created by earlier releases up to date.
    fn apply_migrations(&self) -> Result<()> {
        // Early stores kept drafts without the failure reason.
        let has_last_error: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('drafts') WHERE name = 'last_error'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .db_context("Failed to inspect drafts table")?;

        if !has_last_error {
            self.connection
                .execute("ALTER TABLE drafts ADD COLUMN last_error TEXT", [])
                .db_context("Failed to add last_error column to drafts table")?;
        }

        Ok(())
    }
}
