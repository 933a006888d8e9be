//! Async task abstraction for GitHub API operations.
//!
//! Each API call runs as its own spawned task and reports back through a
//! oneshot channel. Dropping the handle aborts the task, so an invocation
//! that gives up (deadline, early return) never leaves a request in flight.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;
use tokio::task::AbortHandle;

/// A handle to an asynchronous task that produces a single result.
///
/// Uses oneshot channel internally for efficient one-time communication.
pub struct AsyncTask<T> {
    rx: oneshot::Receiver<T>,
    abort: Option<AbortHandle>,
}

impl<T> AsyncTask<T>
where
    T: Send + 'static,
{
    /// Create from oneshot receiver (for advanced use).
    ///
    /// A task created this way has nothing to abort on drop.
    #[inline]
    #[must_use]
    pub fn new(rx: oneshot::Receiver<T>) -> Self {
        Self { rx, abort: None }
    }

    /// Spawn an async operation.
    #[inline]
    pub fn spawn_async<F>(future: F) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        let handle = tokio::task::spawn(async move {
            let _ = tx.send(future.await);
        });
        Self {
            rx,
            abort: Some(handle.abort_handle()),
        }
    }

    /// Create an already-completed task (for testing/simple cases).
    #[must_use]
    pub fn ready(value: T) -> Self {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(value);
        Self::new(rx)
    }
}

impl<T> Future for AsyncTask<T> {
    type Output = Result<T, oneshot::error::RecvError>;

    #[inline]
    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let poll = Pin::new(&mut self.rx).poll(cx);
        if poll.is_ready() {
            // Finished tasks must not be aborted by the later drop.
            self.abort = None;
        }
        poll
    }
}

impl<T> Drop for AsyncTask<T> {
    fn drop(&mut self) {
        if let Some(abort) = self.abort.take() {
            abort.abort();
        }
    }
}
