//! SQLite store for plan drafts and orphaned uploads.
//!
//! Nothing here talks to the backend. Drafts hold wizard payloads whose save
//! failed so they can be retried later; orphaned uploads hold media URLs
//! whose referencing record was never written.

use std::path::Path;

use jiff::Timestamp;
use rusqlite::types::Type;
use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod draft_queries;
pub mod migrations;
pub mod upload_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens (or creates) the store and brings its schema up to date.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}

/// Timestamps are stored with fixed nanosecond precision so the text
/// columns sort chronologically.
fn stored_timestamp(timestamp: Timestamp) -> String {
    format!("{timestamp:.9}")
}

/// Reads an RFC 3339 timestamp column.
fn timestamp_column(row: &rusqlite::Row<'_>, index: usize) -> rusqlite::Result<Timestamp> {
    row.get::<_, String>(index)?
        .parse::<Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}

/// Row ids are positive; anything else is a corrupt row.
fn id_column(row: &rusqlite::Row<'_>, index: usize) -> rusqlite::Result<u64> {
    let id: i64 = row.get(index)?;
    u64::try_from(id)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Integer, Box::new(e)))
}

fn conversion_error(index: usize, message: String) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        index,
        Type::Text,
        Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, message)),
    )
}
