//! Transient error classification for bridged codes.
//!
//! Errors coming back across the flat boundary often describe conditions that
//! go away on their own: a dropped connection, an interrupted system call, a
//! busy kernel resource. [`TransientError`] exposes that classification so
//! retry logic can act on bridged errors without matching raw codes.
//!
//! error-bridge does not retry anything itself; it only classifies.
//!
//! # Examples
//!
//! ```
//! use error_bridge::families::{UrlCode, UrlError};
//! use error_bridge::traits::TransientError;
//!
//! assert!(UrlError::new(UrlCode::TimedOut).is_transient());
//! assert!(UrlError::new(UrlCode::BadUrl).is_permanent());
//! ```

use crate::families::{Kernel, KernelCode, Posix, PosixCode, Url, UrlCode};
use crate::types::{keys, DomainCodedError, DomainFamily, FlatError};
use core::time::Duration;

/// Classification of errors as transient or permanent.
///
/// Transient errors are temporary failures that may succeed if retried.
/// Unknown codes are classified as permanent so a new code never causes an
/// unbounded retry loop.
pub trait TransientError {
    /// Returns `true` if this error is transient and may succeed on retry.
    fn is_transient(&self) -> bool;

    /// Returns `true` if this error is permanent and should not be retried.
    ///
    /// Default implementation returns `!self.is_transient()`.
    #[inline]
    fn is_permanent(&self) -> bool {
        !self.is_transient()
    }

    /// Optional hint for how long to wait before retrying.
    ///
    /// Returns `None` by default, indicating no specific wait time is suggested.
    #[inline]
    fn retry_after_hint(&self) -> Option<Duration> {
        None
    }
}

/// Attribute key holding a retry delay in milliseconds.
pub const RETRY_AFTER_MS: &str = "retry-after-ms";

fn retry_after_from(flat: &FlatError) -> Option<Duration> {
    let millis = flat.attribute(RETRY_AFTER_MS)?.as_integer()?;
    u64::try_from(millis).ok().map(Duration::from_millis)
}

impl TransientError for DomainCodedError<Url> {
    #[inline]
    fn is_transient(&self) -> bool {
        self.code().is_transient()
    }

    #[inline]
    fn retry_after_hint(&self) -> Option<Duration> {
        retry_after_from(self.flat())
    }
}

impl TransientError for DomainCodedError<Posix> {
    #[inline]
    fn is_transient(&self) -> bool {
        self.code().is_transient()
    }

    #[inline]
    fn retry_after_hint(&self) -> Option<Duration> {
        retry_after_from(self.flat())
    }
}

impl TransientError for DomainCodedError<Kernel> {
    #[inline]
    fn is_transient(&self) -> bool {
        self.code().is_transient()
    }

    #[inline]
    fn retry_after_hint(&self) -> Option<Duration> {
        retry_after_from(self.flat())
    }
}

/// A flat error is transient when it bridges into a family that classifies
/// its code as transient, or when its underlying error is.
impl TransientError for FlatError {
    fn is_transient(&self) -> bool {
        let code = self.code();
        let domain = self.domain();
        if *domain == Url::DOMAIN {
            return UrlCode::from_raw(code).is_transient();
        }
        if *domain == Posix::DOMAIN {
            return PosixCode::from_raw(code).is_transient();
        }
        if *domain == Kernel::DOMAIN {
            return KernelCode::from_raw(code).is_transient();
        }
        self.attribute(keys::UNDERLYING_ERROR)
            .and_then(|value| value.as_error())
            .is_some_and(TransientError::is_transient)
    }

    #[inline]
    fn retry_after_hint(&self) -> Option<Duration> {
        retry_after_from(self)
    }
}

/// Extension methods for working with transient errors.
pub trait TransientErrorExt<T, E: TransientError> {
    /// Converts a transient error to `Some(Err(e))` for retry, or `None` to stop.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_bridge::families::{PosixCode, PosixError};
    /// use error_bridge::traits::TransientErrorExt;
    ///
    /// let interrupted: Result<(), PosixError> = Err(PosixError::new(PosixCode::EINTR));
    /// assert!(interrupted.retry_if_transient().is_some());
    ///
    /// let denied: Result<(), PosixError> = Err(PosixError::new(PosixCode::EACCES));
    /// assert!(denied.retry_if_transient().is_none());
    /// ```
    fn retry_if_transient(self) -> Option<Result<T, E>>;
}

impl<T, E: TransientError> TransientErrorExt<T, E> for Result<T, E> {
    fn retry_if_transient(self) -> Option<Result<T, E>> {
        match &self {
            Ok(_) => None,
            Err(e) if e.is_transient() => Some(self),
            Err(_) => None,
        }
    }
}
