//! Plan document queries.

use jiff::Timestamp;
use rusqlite::{OptionalExtension, params, types::Type};

use crate::{
    error::{DatabaseResultExt, Result},
    models::Plan,
};

const UPSERT_PLAN_SQL: &str = "INSERT INTO plans (user_id, document, updated_at) VALUES (?1, ?2, ?3)
     ON CONFLICT(user_id) DO UPDATE SET document = excluded.document, updated_at = excluded.updated_at";
const SELECT_PLAN_SQL: &str = "SELECT document, updated_at FROM plans WHERE user_id = ?1";
const DELETE_PLAN_SQL: &str = "DELETE FROM plans WHERE user_id = ?1";

/// A plan as read back from the database.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredPlan {
    pub plan: Plan,
    /// When the document was last written
    pub updated_at: Timestamp,
}

impl super::Database {
    /// Writes the user's plan document, replacing any previous one.
    pub fn save_plan(&mut self, user_id: &str, plan: &Plan) -> Result<Timestamp> {
        let document = serde_json::to_string(plan)?;
        let now = Timestamp::now();

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;
        tx.execute(UPSERT_PLAN_SQL, params![user_id, document, now.to_string()])
            .db_context("Failed to save plan")?;
        tx.commit().db_context("Failed to commit transaction")?;

        Ok(now)
    }

    /// Reads the user's plan document, if one was saved.
    pub fn load_plan(&self, user_id: &str) -> Result<Option<StoredPlan>> {
        let row = self
            .connection
            .query_row(SELECT_PLAN_SQL, params![user_id], |row| {
                let document: String = row.get(0)?;
                let updated_at = row.get::<_, String>(1)?.parse::<Timestamp>().map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(1, Type::Text, Box::new(e))
                })?;
                Ok((document, updated_at))
            })
            .optional()
            .db_context("Failed to query plan")?;

        match row {
            Some((document, updated_at)) => Ok(Some(StoredPlan {
                plan: serde_json::from_str(&document)?,
                updated_at,
            })),
            None => Ok(None),
        }
    }

    /// Deletes the user's plan. Returns false if there was none.
    pub fn delete_plan(&mut self, user_id: &str) -> Result<bool> {
        let deleted = self
            .connection
            .execute(DELETE_PLAN_SQL, params![user_id])
            .db_context("Failed to delete plan")?;
        Ok(deleted > 0)
    }
}
