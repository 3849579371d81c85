//! Debounced background persistence.
//!
//! The planner never waits on the database while editing. Each mutation
//! hands the latest plan document to a [`PlanWriter`], whose task writes it
//! once no further document has arrived for the debounce interval. A failed
//! write is logged and the in-memory plan stays authoritative.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use log::{debug, warn};
use tokio::{
    sync::{mpsc, oneshot},
    task::{self, JoinHandle},
    time,
};

use crate::{
    db::Database,
    error::{PlanError, Result},
    models::{Plan, Settings},
};

/// Default quiet period before a scheduled plan write happens.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

enum WriteCommand {
    SavePlan(Box<Plan>),
    DeletePlan,
    SaveSettings(Settings),
    Flush(oneshot::Sender<()>),
}

/// The newest plan state not yet written.
enum Pending {
    Save(Box<Plan>),
    Delete,
}

/// Handle to the background writer task of one user.
pub struct PlanWriter {
    sender: mpsc::UnboundedSender<WriteCommand>,
    handle: JoinHandle<()>,
}

impl PlanWriter {
    /// Spawns the writer task on the current tokio runtime.
    pub fn spawn(db_path: PathBuf, user_id: String, debounce: Duration) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        let handle = tokio::spawn(run(db_path, user_id, debounce, receiver));
        Self { sender, handle }
    }

    /// Schedules a save of `plan`, superseding any pending one and
    /// restarting the debounce timer.
    pub fn schedule_save(&self, plan: &Plan) {
        self.send(WriteCommand::SavePlan(Box::new(plan.clone())));
    }

    /// Schedules removal of the stored plan.
    pub fn schedule_delete(&self) {
        self.send(WriteCommand::DeletePlan);
    }

    /// Writes settings without debouncing.
    pub fn save_settings(&self, settings: Settings) {
        self.send(WriteCommand::SaveSettings(settings));
    }

    /// Forces the pending write and waits until it has been attempted.
    pub async fn flush(&self) {
        let (done, wait) = oneshot::channel();
        if self.sender.send(WriteCommand::Flush(done)).is_ok() {
            // The task only drops `done` when it has already exited.
            let _ = wait.await;
        }
    }

    /// Flushes and stops the writer task.
    pub async fn shutdown(self) {
        drop(self.sender);
        if let Err(e) = self.handle.await {
            warn!("Plan writer task failed: {e}");
        }
    }

    fn send(&self, command: WriteCommand) {
        if self.sender.send(command).is_err() {
            warn!("Plan writer has stopped; change was not persisted");
        }
    }
}

async fn run(
    db_path: PathBuf,
    user_id: String,
    debounce: Duration,
    mut receiver: mpsc::UnboundedReceiver<WriteCommand>,
) {
    let mut pending: Option<Pending> = None;

    loop {
        let command = if pending.is_some() {
            match time::timeout(debounce, receiver.recv()).await {
                Ok(command) => command,
                Err(_) => {
                    write_pending(&db_path, &user_id, pending.take()).await;
                    continue;
                }
            }
        } else {
            receiver.recv().await
        };

        match command {
            Some(WriteCommand::SavePlan(plan)) => pending = Some(Pending::Save(plan)),
            Some(WriteCommand::DeletePlan) => pending = Some(Pending::Delete),
            Some(WriteCommand::SaveSettings(settings)) => {
                let user_id = user_id.clone();
                let result = blocking(&db_path, move |db| db.save_settings(&user_id, &settings)).await;
                if let Err(e) = result {
                    warn!("Failed to save settings: {e}");
                }
            }
            Some(WriteCommand::Flush(done)) => {
                write_pending(&db_path, &user_id, pending.take()).await;
                let _ = done.send(());
            }
            None => {
                write_pending(&db_path, &user_id, pending.take()).await;
                break;
            }
        }
    }
}

async fn write_pending(db_path: &Path, user_id: &str, pending: Option<Pending>) {
    let user_id = user_id.to_string();
    let result = match pending {
        None => return,
        Some(Pending::Save(plan)) => blocking(db_path, move |db| {
            let saved_at = db.save_plan(&user_id, &plan)?;
            debug!("Saved plan {} for {user_id} at {saved_at}", plan.code);
            Ok(())
        })
        .await,
        Some(Pending::Delete) => blocking(db_path, move |db| {
            db.delete_plan(&user_id)?;
            debug!("Deleted stored plan of {user_id}");
            Ok(())
        })
        .await,
    };

    if let Err(e) = result {
        warn!("Failed to persist plan: {e}");
    }
}

/// Runs a database operation on the blocking pool.
async fn blocking<F>(db_path: &Path, operation: F) -> Result<()>
where
    F: FnOnce(&mut Database) -> Result<()> + Send + 'static,
{
    let db_path = db_path.to_path_buf();
    task::spawn_blocking(move || {
        let mut db = Database::new(&db_path)?;
        operation(&mut db)
    })
    .await
    .map_err(|e| PlanError::Configuration {
        message: format!("Task join error: {e}"),
    })?
}
