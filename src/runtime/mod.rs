//! Runtime module
//!
//! Provides the async task primitive GitHub operations run on.

pub mod async_task;

// Re-export async task types
pub use async_task::AsyncTask;
