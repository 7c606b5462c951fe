//! Cancellable deferred callbacks for the submit affordance.
//!
//! A widget that receives a submit intent shows a short "submitting" state
//! before the step actually advances. The delay is a tokio task bound to the
//! widget: dropping the [`DeferredSubmit`] handle aborts the task, so a widget
//! torn down before the delay elapses never produces a transition.

use std::time::Duration;

use log::trace;
use tokio::task::JoinHandle;

/// Handle to a scheduled callback. Dropping it cancels the callback.
#[derive(Debug)]
pub struct DeferredSubmit {
    handle: JoinHandle<()>,
}

impl DeferredSubmit {
    /// Runs `callback` once `delay` has elapsed, unless cancelled first.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(delay: Duration, callback: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        trace!("scheduling deferred submit in {delay:?}");
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            callback();
        });
        Self { handle }
    }

    /// True once the callback has run or the task was aborted.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Cancels the callback if it has not fired yet.
    pub fn cancel(self) {}
}

impl Drop for DeferredSubmit {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
