//! SQLite persistence for plan and settings documents.
//!
//! Each user owns at most one plan and one settings record, stored as JSON
//! documents keyed by user id. The connection is synchronous; async callers
//! go through `tokio::task::spawn_blocking`.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod migrations;
pub mod plan_queries;
pub mod settings_queries;

pub use plan_queries::StoredPlan;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
