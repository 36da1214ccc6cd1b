//! Runtime module
//!
//! Provides the single-result async task handle returned by release sources.

pub mod async_task;

pub use async_task::{AsyncTask, TaskCancelled};
