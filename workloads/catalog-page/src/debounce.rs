//! Cancel-and-reschedule debouncing on the tokio timer.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Runs scheduled work after a quiet period.
///
/// Scheduling aborts whatever is still pending, so only the last of a burst
/// of calls runs. Pending work is aborted when the debouncer is dropped.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Cancel pending work and schedule `work` to run after the delay.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(&mut self, work: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            work.await;
        }));
    }

    /// Abort pending work. Returns whether anything was still waiting.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) if !handle.is_finished() => {
                handle.abort();
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
