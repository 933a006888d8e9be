//! Tests for the AsyncTask handle.

use ghrawel_tokenprovider::AsyncTask;
use ghrawel_tokenprovider::github::spawn_task;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::oneshot;

#[tokio::test]
async fn test_new_from_receiver() {
    let (tx, rx) = oneshot::channel();
    let task = AsyncTask::new(rx);

    tx.send(vec!["catnekaise".to_string()]).unwrap();

    assert_eq!(task.await.unwrap(), vec!["catnekaise".to_string()]);
}

#[tokio::test]
async fn test_dropped_sender_reports_channel_error() {
    let (tx, rx) = oneshot::channel::<u64>();
    let task = AsyncTask::new(rx);
    drop(tx);

    assert!(task.await.is_err());
}

#[tokio::test]
async fn test_spawn_task_runs_result_producing_work() {
    let task = spawn_task(async { Ok::<u64, String>(4321) });

    let result = task.await.unwrap();
    assert_eq!(result, Ok(4321));
}

#[tokio::test]
async fn test_completed_task_side_effects_survive_drop() {
    let finished = Arc::new(AtomicBool::new(false));
    let flag = finished.clone();

    let task = AsyncTask::spawn_async(async move {
        flag.store(true, Ordering::SeqCst);
    });
    task.await.unwrap();

    tokio::time::sleep(Duration::from_millis(20)).await;
    assert!(finished.load(Ordering::SeqCst));
}
