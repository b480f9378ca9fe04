//! Recovery call-in from the flat side.
//!
//! The runtime never holds a typed error directly; it holds a [`FlatError`]
//! and the [`RecoveryAttempter`] found under
//! [`keys::RECOVERY_ATTEMPTER`](crate::keys::RECOVERY_ATTEMPTER). Calling the
//! attempter routes back to the typed error the flat value was derived from.

use crate::traits::RecoverableError;
use crate::types::{BridgeError, FlatError, RecoveryCompletion, RecoveryOptions};

/// Stateless adapter that forwards recovery requests to a flat error's
/// typed origin.
///
/// One value serves any number of errors because the acting error is always
/// passed in. Requesting recovery on a flat error that carries no
/// [`RecoverableError`] is a contract violation by the caller: the panicking
/// entry points abort, the `try_` forms report [`BridgeError::NotRecoverable`].
///
/// # Examples
///
/// ```
/// use error_bridge::{impl_typed_error, keys, FlatError, RecoverableError, RecoveryOptions};
/// use std::fmt;
///
/// #[derive(Debug)]
/// struct Jammed;
///
/// impl fmt::Display for Jammed {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         f.write_str("jammed")
///     }
/// }
///
/// impl std::error::Error for Jammed {}
///
/// impl RecoverableError for Jammed {
///     fn recovery_options(&self) -> RecoveryOptions {
///         RecoveryOptions::from_iter(["Unjam".to_string()])
///     }
///
///     fn attempt_recovery(&self, option_index: usize) -> bool {
///         option_index == 0
///     }
/// }
///
/// impl_typed_error!(Jammed: recoverable);
///
/// let flat = FlatError::from_typed(Jammed);
/// let attempter = flat.attribute(keys::RECOVERY_ATTEMPTER).and_then(|v| v.as_recovery_attempter());
/// assert!(attempter.unwrap().attempt_recovery(&flat, 0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RecoveryAttempter;

impl RecoveryAttempter {
    /// Labels offered by the flat error's origin, or `None` when it is not
    /// recoverable.
    #[inline]
    pub fn recovery_options(self, error: &FlatError) -> Option<RecoveryOptions> {
        recoverable(error).ok().map(|origin| origin.recovery_options())
    }

    /// Runs a recovery option synchronously.
    pub fn try_attempt_recovery(
        self,
        error: &FlatError,
        option_index: usize,
    ) -> Result<bool, BridgeError> {
        let recovered = recoverable(error)?.attempt_recovery(option_index);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            domain = %error.domain(),
            code = error.code(),
            option_index,
            recovered,
            "recovery attempted"
        );
        Ok(recovered)
    }

    /// Runs a recovery option, reporting through `completion`.
    ///
    /// On [`BridgeError::NotRecoverable`] the completion is dropped, so its
    /// callback still fires once with `false`.
    pub fn try_attempt_recovery_with(
        self,
        error: &FlatError,
        option_index: usize,
        completion: RecoveryCompletion,
    ) -> Result<(), BridgeError> {
        recoverable(error)?.attempt_recovery_with(option_index, completion);
        Ok(())
    }

    /// Runs a recovery option synchronously.
    ///
    /// # Panics
    ///
    /// Panics if `error` does not carry a recoverable typed error.
    #[inline]
    pub fn attempt_recovery(self, error: &FlatError, option_index: usize) -> bool {
        self.try_attempt_recovery(error, option_index).unwrap_or_else(|err| contract_violation(&err))
    }

    /// Runs a recovery option, reporting through `completion`.
    ///
    /// # Panics
    ///
    /// Panics if `error` does not carry a recoverable typed error.
    #[inline]
    pub fn attempt_recovery_with(
        self,
        error: &FlatError,
        option_index: usize,
        completion: RecoveryCompletion,
    ) {
        if let Err(err) = self.try_attempt_recovery_with(error, option_index, completion) {
            contract_violation(&err)
        }
    }
}

fn recoverable(error: &FlatError) -> Result<&dyn RecoverableError, BridgeError> {
    error.origin().and_then(|origin| origin.as_recoverable()).ok_or_else(|| {
        BridgeError::NotRecoverable { domain: error.domain().clone(), code: error.code() }
    })
}

#[cold]
#[track_caller]
pub(crate) fn contract_violation(err: &BridgeError) -> ! {
    #[cfg(feature = "tracing")]
    tracing::error!(error = %err, "bridging contract violated by caller");
    panic!("{}", err)
}
