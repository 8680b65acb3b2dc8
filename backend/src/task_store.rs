use shared::Task;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum TaskStoreError {
    #[error("failed to read task file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("task file {} is not a valid task list", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read-only task feed backed by a JSON file.
///
/// The file is read on every call so edits show up without a restart.
#[derive(Debug, Clone)]
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn list_tasks(&self) -> Result<Vec<Task>, TaskStoreError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|source| TaskStoreError::Io {
            path: self.path.clone(),
            source,
        })?;

        let tasks: Vec<Task> = serde_json::from_slice(&bytes).map_err(|source| TaskStoreError::Parse {
            path: self.path.clone(),
            source,
        })?;

        debug!("Loaded {} tasks from {}", tasks.len(), self.path.display());
        Ok(tasks)
    }
}
