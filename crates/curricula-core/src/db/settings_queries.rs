//! Settings document queries.

use jiff::Timestamp;
use rusqlite::{OptionalExtension, params};

use crate::{
    error::{DatabaseResultExt, Result},
    models::Settings,
};

const UPSERT_SETTINGS_SQL: &str = "INSERT INTO settings (user_id, document, updated_at) VALUES (?1, ?2, ?3)
     ON CONFLICT(user_id) DO UPDATE SET document = excluded.document, updated_at = excluded.updated_at";
const SELECT_SETTINGS_SQL: &str = "SELECT document FROM settings WHERE user_id = ?1";

impl super::Database {
    pub fn save_settings(&mut self, user_id: &str, settings: &Settings) -> Result<()> {
        let document = serde_json::to_string(settings)?;
        self.connection
            .execute(
                UPSERT_SETTINGS_SQL,
                params![user_id, document, Timestamp::now().to_string()],
            )
            .db_context("Failed to save settings")?;
        Ok(())
    }

    /// Reads the user's settings; `None` when they were never saved.
    pub fn load_settings(&self, user_id: &str) -> Result<Option<Settings>> {
        let document: Option<String> = self
            .connection
            .query_row(SELECT_SETTINGS_SQL, params![user_id], |row| row.get(0))
            .optional()
            .db_context("Failed to query settings")?;

        document
            .map(|d| serde_json::from_str(&d))
            .transpose()
            .map_err(Into::into)
    }
}
