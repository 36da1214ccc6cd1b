//! Tests for async task runtime primitives.

use kodegen_tools_version::runtime::AsyncTask;
use tokio::sync::oneshot;

#[tokio::test]
async fn test_async_task_spawn_async() {
    let task = AsyncTask::spawn_async(async { 42 });
    let result = task.await.unwrap();
    assert_eq!(result, 42);
}

#[tokio::test]
async fn test_async_task_ready() {
    let task = AsyncTask::ready("v1.2.3".to_string());
    assert_eq!(task.await.unwrap(), "v1.2.3");
}

#[tokio::test]
async fn test_async_task_sender_dropped() {
    let (tx, rx) = oneshot::channel::<u32>();
    drop(tx);
    let task = AsyncTask::new(rx);
    assert!(task.await.is_err());
}
