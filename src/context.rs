use std::{future::Future, time::Duration};

use thiserror::Error;
use tokio::time::{self, Instant};
use tokio_util::sync::CancellationToken;

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum ContextError {
    #[error("context canceled")]
    Cancelled,

    #[error("context deadline exceeded")]
    DeadlineExceeded,
}

/// Cancellation handle and optional deadline for a single API call.
///
/// Cloning yields a handle to the same token, so cancelling any clone
/// cancels them all. Use [`Context::child`] for a scope that can be
/// cancelled without affecting its parent.
#[derive(Clone, Debug, Default)]
pub struct Context {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl Context {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    #[must_use]
    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            token: CancellationToken::new(),
            deadline: Some(deadline),
        }
    }

    /// Derived context, cancelled together with `self`. A `timeout`
    /// can only shorten the inherited deadline.
    #[must_use]
    pub fn child(&self, timeout: Option<Duration>) -> Self {
        let deadline = match (self.deadline, timeout.map(|t| Instant::now() + t)) {
            (Some(parent), Some(own)) => Some(parent.min(own)),
            (parent, own) => parent.or(own),
        };

        Self {
            token: self.token.child_token(),
            deadline,
        }
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub const fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// # Errors
    ///
    /// Fails if the context was cancelled or its deadline has passed.
    pub fn check(&self) -> Result<(), ContextError> {
        if self.token.is_cancelled() {
            return Err(ContextError::Cancelled);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Err(ContextError::DeadlineExceeded),
            _ => Ok(()),
        }
    }

    /// Resolves once the context is cancelled or expired.
    pub async fn done(&self) -> ContextError {
        match self.deadline {
            Some(deadline) => {
                tokio::select! {
                    biased;
                    () = self.token.cancelled() => ContextError::Cancelled,
                    () = time::sleep_until(deadline) => ContextError::DeadlineExceeded,
                }
            }
            None => {
                self.token.cancelled().await;
                ContextError::Cancelled
            }
        }
    }

    /// Drives `fut` until it completes or the context ends, whichever
    /// comes first. On cancellation `fut` is dropped.
    ///
    /// # Errors
    ///
    /// Fails if the context is already done or ends before `fut`.
    pub async fn run<F: Future>(&self, fut: F) -> Result<F::Output, ContextError> {
        self.check()?;

        tokio::select! {
            biased;
            err = self.done() => Err(err),
            out = fut => Ok(out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fresh_context_is_live() {
        let ctx = Context::new();
        assert_eq!(ctx.check(), Ok(()));
        assert_eq!(ctx.run(async { 7 }).await, Ok(7));
    }

    #[tokio::test]
    async fn test_cancel_propagates_to_clones_and_children() {
        let ctx = Context::new();
        let clone = ctx.clone();
        let child = ctx.child(None);

        ctx.cancel();

        assert_eq!(clone.check(), Err(ContextError::Cancelled));
        assert_eq!(child.check(), Err(ContextError::Cancelled));
    }

    #[tokio::test]
    async fn test_child_cancel_leaves_parent_alone() {
        let ctx = Context::new();
        let child = ctx.child(None);

        child.cancel();

        assert_eq!(ctx.check(), Ok(()));
        assert_eq!(child.check(), Err(ContextError::Cancelled));
    }

    #[tokio::test]
    async fn test_run_times_out() {
        let ctx = Context::with_timeout(Duration::from_millis(20));
        let result = ctx.run(time::sleep(Duration::from_secs(10))).await;
        assert_eq!(result, Err(ContextError::DeadlineExceeded));
        assert_eq!(ctx.check(), Err(ContextError::DeadlineExceeded));
    }

    #[tokio::test]
    async fn test_run_on_cancelled_context_never_polls() {
        let ctx = Context::new();
        ctx.cancel();

        let mut polled = false;
        let result = ctx.run(async { polled = true }).await;

        assert_eq!(result, Err(ContextError::Cancelled));
        assert!(!polled);
    }

    #[tokio::test]
    async fn test_child_keeps_earlier_deadline() {
        let ctx = Context::with_timeout(Duration::from_millis(10));
        let child = ctx.child(Some(Duration::from_secs(60)));
        assert_eq!(child.deadline(), ctx.deadline());
    }
}
