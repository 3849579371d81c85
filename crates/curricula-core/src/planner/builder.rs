//! Builder for creating and configuring Planner instances.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use log::warn;
use tokio::task;

use super::{Planner, writer::{DEFAULT_DEBOUNCE, PlanWriter}};
use crate::{
    catalog::Catalog,
    db::Database,
    error::{PlanError, Result},
};

/// User identity used when none is configured.
pub const DEFAULT_USER: &str = "default";

/// Builder for creating and configuring Planner instances.
#[derive(Debug, Clone)]
pub struct PlannerBuilder {
    database_path: Option<PathBuf>,
    catalog_dir: Option<PathBuf>,
    catalog: Option<Catalog>,
    user: Option<String>,
    debounce: Duration,
}

impl PlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            catalog_dir: None,
            catalog: None,
            user: None,
            debounce: DEFAULT_DEBOUNCE,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/curricula/curricula.db` or
    /// `~/.local/share/curricula/curricula.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the directory holding `courses.json`, `curricula.json` and
    /// `programs.json`.
    ///
    /// If not specified, `$XDG_DATA_HOME/curricula/catalog` is used when it
    /// exists and an empty catalog otherwise.
    pub fn with_catalog_dir<P: AsRef<Path>>(mut self, dir: Option<P>) -> Self {
        if let Some(dir) = dir {
            self.catalog_dir = Some(dir.as_ref().to_path_buf());
        }
        self
    }

    /// Uses an already loaded catalog instead of reading one from disk.
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Sets the user whose plan is edited.
    pub fn with_user<S: Into<String>>(mut self, user: Option<S>) -> Self {
        if let Some(user) = user {
            self.user = Some(user.into());
        }
        self
    }

    /// Sets the quiet period before a scheduled plan write.
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Builds the configured planner instance.
    ///
    /// Opens the database, reads the user's plan and settings once and
    /// starts the background writer. Must be called inside a tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::FileSystem` if the database path is invalid
    /// Returns `PlanError::Database` if database initialization fails
    /// Returns `PlanError::Catalog` if an explicit catalog directory cannot
    /// be loaded
    pub async fn build(self) -> Result<Planner> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };
        let user = self.user.unwrap_or_else(|| DEFAULT_USER.to_string());

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| PlanError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let catalog = match self.catalog {
            Some(catalog) => catalog,
            None => Self::load_catalog(self.catalog_dir).await?,
        };

        let db_path_clone = db_path.clone();
        let user_clone = user.clone();
        let (stored, settings) = task::spawn_blocking(move || {
            let db = Database::new(&db_path_clone)?;
            let stored = db.load_plan(&user_clone)?;
            let settings = db.load_settings(&user_clone)?;
            Ok::<_, PlanError>((stored, settings))
        })
        .await
        .map_err(|e| PlanError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        let (plan, saved_at) = match stored {
            Some(stored) => (Some(stored.plan), Some(stored.updated_at)),
            None => (None, None),
        };
        let writer = PlanWriter::spawn(db_path, user.clone(), self.debounce);

        Ok(Planner::new(
            catalog,
            user,
            plan,
            saved_at,
            settings.unwrap_or_default(),
            writer,
        ))
    }

    async fn load_catalog(dir: Option<PathBuf>) -> Result<Catalog> {
        let dir = match dir {
            Some(dir) => dir,
            None => {
                let dir = Self::default_catalog_dir()?;
                if !dir.is_dir() {
                    warn!("No catalog found at {}; using an empty catalog", dir.display());
                    return Ok(Catalog::default());
                }
                dir
            }
        };

        task::spawn_blocking(move || Catalog::load_dir(&dir))
            .await
            .map_err(|e| PlanError::Configuration {
                message: format!("Task join error: {e}"),
            })?
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("curricula")
            .place_data_file("curricula.db")
            .map_err(|e| PlanError::XdgDirectory(e.to_string()))
    }

    fn default_catalog_dir() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("curricula")
            .get_data_home()
            .map(|home| home.join("catalog"))
            .ok_or_else(|| PlanError::XdgDirectory("No data home directory".to_string()))
    }
}

impl Default for PlannerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
