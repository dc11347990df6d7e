// Task is the canonical domain record the service manages.
//
// Boundaries
// - This file must not perform input or output.
// - Keep it framework-free. The serde derives only describe the wire shape.
//
// Testing guidance
// - Exercise TaskPatch::apply_to directly; the store and the handlers rely on
//   its merge semantics.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub done: bool,
}

/// Input for creating a task. The id is assigned by the store, never by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: String,
}

/// Partial update: absent fields keep their current value. The id is not patchable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub done: Option<bool>,
}

impl TaskPatch {
    pub fn apply_to(self, task: &mut Task) {
        if let Some(title) = self.title {
            task.title = title;
        }
        if let Some(description) = self.description {
            task.description = description;
        }
        if let Some(done) = self.done {
            task.done = done;
        }
    }
}
