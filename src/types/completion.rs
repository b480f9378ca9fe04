//! One-shot completion callbacks for asynchronous recovery.

use crate::types::alloc_type::{Box, String};
use core::fmt;
use smallvec::SmallVec;

/// Recovery option labels in presentation order.
///
/// Inline storage covers the common one- or two-button case.
pub type RecoveryOptions = SmallVec<[String; 2]>;

type Callback = Box<dyn FnOnce(bool) + Send>;

/// Completion handler for an asynchronous recovery attempt.
///
/// The callback runs exactly once: either through [`complete`](Self::complete),
/// or with `false` when the completion is dropped without being fired.
///
/// # Examples
///
/// ```
/// use error_bridge::RecoveryCompletion;
/// use std::sync::mpsc;
///
/// let (tx, rx) = mpsc::channel();
/// let completion = RecoveryCompletion::new(move |recovered| {
///     let _ = tx.send(recovered);
/// });
/// drop(completion);
/// assert_eq!(rx.recv().unwrap(), false);
/// ```
#[must_use = "dropping a completion reports the recovery as failed"]
pub struct RecoveryCompletion {
    callback: Option<Callback>,
}

impl RecoveryCompletion {
    #[inline]
    pub fn new<F>(callback: F) -> Self
    where
        F: FnOnce(bool) + Send + 'static,
    {
        Self { callback: Some(Box::new(callback)) }
    }

    /// Reports the outcome, consuming the completion.
    #[inline]
    pub fn complete(mut self, recovered: bool) {
        if let Some(callback) = self.callback.take() {
            callback(recovered);
        }
    }
}

impl Drop for RecoveryCompletion {
    fn drop(&mut self) {
        if let Some(callback) = self.callback.take() {
            #[cfg(feature = "tracing")]
            tracing::warn!("recovery completion dropped without a result; reporting failure");
            callback(false);
        }
    }
}

impl fmt::Debug for RecoveryCompletion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecoveryCompletion")
            .field("pending", &self.callback.is_some())
            .finish()
    }
}
