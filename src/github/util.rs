//! GitHub API utilities

use crate::runtime::AsyncTask;
use std::future::Future;

/// Largest page GitHub serves for list endpoints. Only the first page is read.
pub(crate) const MAX_PAGE_SIZE: u8 = 100;

/// Spawn a GitHub API request as an [`AsyncTask`].
#[inline]
pub fn spawn_task<T, F>(work: F) -> AsyncTask<T>
where
    T: Send + 'static,
    F: Future<Output = T> + Send + 'static,
{
    AsyncTask::spawn_async(work)
}
