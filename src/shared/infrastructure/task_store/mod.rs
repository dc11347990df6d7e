// The task store port: what the inbound slices need from task storage,
// without implementing it.
//
// Boundaries
// - No concrete input or output here. Adapters implement this trait.
//
// Testing guidance
// - Use the in memory implementation for tests and local development.

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::tasks::core::model::{NewTask, Task, TaskPatch};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskStoreError {
    #[error("task {id} not found")]
    NotFound { id: u64 },
}

#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Every task in insertion order.
    async fn list(&self) -> Result<Vec<Task>, TaskStoreError>;

    async fn get(&self, id: u64) -> Result<Task, TaskStoreError>;

    /// Appends a new task and assigns it the next id in the sequence.
    async fn create(&self, new_task: NewTask) -> Result<Task, TaskStoreError>;

    /// Merges the patch into the matching task and returns the result.
    async fn update(&self, id: u64, patch: TaskPatch) -> Result<Task, TaskStoreError>;

    /// Removes the matching task. Ids are never reassigned afterwards.
    async fn delete(&self, id: u64) -> Result<(), TaskStoreError>;
}

pub mod in_memory;
