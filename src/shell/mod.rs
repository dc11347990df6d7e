// Composition root for the task store service.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the in memory store and wire it into the inbound slices.
// - Expose the HTTP router to main.

pub mod config;
pub mod http;
pub mod state;
