//! Cancellation handles for scheduled work

use tokio::task::JoinHandle;

/// Handle to a one-shot or sequenced timer task.
///
/// Dropping the handle detaches the task (it keeps running to completion);
/// call [`TimerHandle::cancel`] to abort it. The original dashboard never
/// cancels its timers, but every scheduling operation hands one back so a
/// caller can, e.g. on navigate-away.
#[derive(Debug)]
pub struct TimerHandle {
    handle: JoinHandle<()>,
}

impl TimerHandle {
    pub(crate) fn new(handle: JoinHandle<()>) -> Self {
        Self { handle }
    }

    /// Abort the underlying task. Safe to call after completion.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    /// Whether the task has run to completion (or was cancelled)
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the task to finish. Resolves immediately if it was
    /// cancelled first.
    pub async fn wait(self) {
        let _ = self.handle.await;
    }
}
