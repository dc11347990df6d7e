// In memory implementation of the task store port.
//
// Purpose
// - Back the service with process-lifetime state. No database.
//
// Responsibilities
// - Keep the collection in insertion order.
// - Assign ids from a monotone counter so a deleted id is never handed out again.
// - Hold the write guard across the whole read-modify-write of each mutation.

use tokio::sync::RwLock;

use super::{TaskRepository, TaskStoreError};
use crate::modules::tasks::core::model::{NewTask, Task, TaskPatch};

struct Collection {
    tasks: Vec<Task>,
    next_id: u64,
}

pub struct InMemoryTaskStore {
    inner: RwLock<Collection>,
}

impl InMemoryTaskStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Collection {
                tasks: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// The two records the service is seeded with at startup.
    pub fn with_sample_tasks() -> Self {
        let tasks = vec![
            Task {
                id: 1,
                title: "Task 1".to_string(),
                description: "Description for Task 1".to_string(),
                done: false,
            },
            Task {
                id: 2,
                title: "Task 2".to_string(),
                description: "Description for Task 2".to_string(),
                done: false,
            },
        ];
        let next_id = tasks.last().map(|task| task.id + 1).unwrap_or(1);
        Self {
            inner: RwLock::new(Collection { tasks, next_id }),
        }
    }
}

impl Default for InMemoryTaskStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl TaskRepository for InMemoryTaskStore {
    async fn list(&self) -> Result<Vec<Task>, TaskStoreError> {
        Ok(self.inner.read().await.tasks.clone())
    }

    async fn get(&self, id: u64) -> Result<Task, TaskStoreError> {
        self.inner
            .read()
            .await
            .tasks
            .iter()
            .find(|task| task.id == id)
            .cloned()
            .ok_or(TaskStoreError::NotFound { id })
    }

    async fn create(&self, new_task: NewTask) -> Result<Task, TaskStoreError> {
        let mut guard = self.inner.write().await;
        let task = Task {
            id: guard.next_id,
            title: new_task.title,
            description: new_task.description,
            done: false,
        };
        guard.next_id += 1;
        guard.tasks.push(task.clone());
        Ok(task)
    }

    async fn update(&self, id: u64, patch: TaskPatch) -> Result<Task, TaskStoreError> {
        let mut guard = self.inner.write().await;
        let task = guard
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(TaskStoreError::NotFound { id })?;
        patch.apply_to(task);
        Ok(task.clone())
    }

    async fn delete(&self, id: u64) -> Result<(), TaskStoreError> {
        let mut guard = self.inner.write().await;
        let index = guard
            .tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(TaskStoreError::NotFound { id })?;
        guard.tasks.remove(index);
        Ok(())
    }
}
