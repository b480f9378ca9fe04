//! Awaitable recovery results.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;
use tokio::sync::oneshot;

use crate::recovery::{contract_violation, RecoveryAttempter};
use crate::types::{BridgeError, FlatError, RecoveryCompletion};

pin_project! {
    /// Resolves to the flag a [`RecoveryCompletion`] reports.
    ///
    /// A completion that is dropped without reporting, or whose future side
    /// is gone, resolves to `false`.
    ///
    /// # Cancel Safety
    ///
    /// Dropping the future does not cancel the recovery attempt; the
    /// completion still runs and its result is discarded.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_bridge::async_ext::RecoveryFuture;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let (completion, future) = RecoveryFuture::channel();
    /// std::thread::spawn(move || completion.complete(true));
    /// assert!(future.await);
    /// # }
    /// ```
    #[must_use = "futures do nothing unless polled"]
    pub struct RecoveryFuture {
        #[pin]
        receiver: oneshot::Receiver<bool>,
        terminated: bool,
    }
}

impl RecoveryFuture {
    /// Creates a completion and the future that observes it.
    pub fn channel() -> (RecoveryCompletion, Self) {
        let (sender, receiver) = oneshot::channel();
        let completion = RecoveryCompletion::new(move |recovered| {
            // The future may already be gone.
            let _ = sender.send(recovered);
        });
        (completion, Self { receiver, terminated: false })
    }
}

impl Future for RecoveryFuture {
    type Output = bool;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        if *this.terminated {
            return Poll::Ready(false);
        }
        this.receiver.poll(cx).map(|received| {
            *this.terminated = true;
            received.unwrap_or(false)
        })
    }
}

impl FusedFuture for RecoveryFuture {
    #[inline]
    fn is_terminated(&self) -> bool {
        self.terminated
    }
}

impl RecoveryAttempter {
    /// Runs a recovery option through the asynchronous entry point and
    /// returns a future of its result.
    pub fn try_attempt_recovery_async(
        self,
        error: &FlatError,
        option_index: usize,
    ) -> Result<RecoveryFuture, BridgeError> {
        let (completion, future) = RecoveryFuture::channel();
        self.try_attempt_recovery_with(error, option_index, completion)?;
        Ok(future)
    }

    /// Runs a recovery option through the asynchronous entry point.
    ///
    /// # Panics
    ///
    /// Panics if `error` does not carry a recoverable typed error.
    #[inline]
    pub fn attempt_recovery_async(self, error: &FlatError, option_index: usize) -> RecoveryFuture {
        self.try_attempt_recovery_async(error, option_index)
            .unwrap_or_else(|err| contract_violation(&err))
    }
}
