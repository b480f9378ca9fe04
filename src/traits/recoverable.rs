use crate::types::{RecoveryCompletion, RecoveryOptions};

/// Opt-in recovery actions for a typed error.
///
/// Only [`attempt_recovery`](Self::attempt_recovery) is required; the
/// callback form is derived from it and completes inline on the calling
/// thread. Override
/// [`attempt_recovery_with`](Self::attempt_recovery_with) when recovery is
/// genuinely asynchronous.
///
/// # Examples
///
/// ```
/// use error_bridge::{RecoverableError, RecoveryCompletion, RecoveryOptions};
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
///
/// struct Offline;
///
/// impl RecoverableError for Offline {
///     fn recovery_options(&self) -> RecoveryOptions {
///         RecoveryOptions::from_iter(["Retry".to_string(), "Work Offline".to_string()])
///     }
///
///     fn attempt_recovery(&self, option_index: usize) -> bool {
///         option_index == 1
///     }
/// }
///
/// let seen = Arc::new(AtomicBool::new(false));
/// let flag = Arc::clone(&seen);
/// Offline.attempt_recovery_with(1, RecoveryCompletion::new(move |ok| flag.store(ok, Ordering::SeqCst)));
/// assert!(seen.load(Ordering::SeqCst));
/// ```
pub trait RecoverableError {
    /// User-facing labels, in the order the runtime should present them.
    fn recovery_options(&self) -> RecoveryOptions;

    /// Runs the option at `option_index` and reports whether it recovered.
    fn attempt_recovery(&self, option_index: usize) -> bool;

    /// Runs the option at `option_index`, reporting through `completion`.
    ///
    /// The completion must fire exactly once, from any thread. Dropping it
    /// unfired reports `false`.
    #[inline]
    fn attempt_recovery_with(&self, option_index: usize, completion: RecoveryCompletion) {
        completion.complete(self.attempt_recovery(option_index));
    }
}
