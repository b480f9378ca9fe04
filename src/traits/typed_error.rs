//! The base capability every bridgeable error implements.

use crate::traits::{CustomCodedError, DescribableError, RecoverableError};
use core::any::Any;
use core::error::Error;

/// Type-erasure helpers, implemented for every sized error type.
///
/// This is a supertrait of [`TypedError`] so that `dyn TypedError` can be
/// downcast and viewed as a plain error without trait upcasting.
pub trait AsAny {
    fn as_any(&self) -> &dyn Any;

    fn as_error(&self) -> &(dyn Error + Send + Sync + 'static);

    /// Name of the concrete type behind the trait object.
    fn type_name(&self) -> &'static str;
}

impl<T> AsAny for T
where
    T: Error + Send + Sync + 'static,
{
    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }

    #[inline]
    fn as_error(&self) -> &(dyn Error + Send + Sync + 'static) {
        self
    }

    #[inline]
    fn type_name(&self) -> &'static str {
        core::any::type_name::<T>()
    }
}

/// An error that can cross into the flat `(domain, code, attributes)` form.
///
/// Implementing the trait alone gives a flat error whose domain is the type
/// name, whose code is `1` and whose attribute map is empty. Each optional
/// capability is opted into by overriding the matching query method, or with
/// [`impl_typed_error!`](crate::impl_typed_error).
///
/// # Examples
///
/// ```
/// use error_bridge::{materialize, DescribableError, TypedError};
/// use std::fmt;
///
/// #[derive(Debug)]
/// struct DiskFull;
///
/// impl fmt::Display for DiskFull {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         f.write_str("disk full")
///     }
/// }
///
/// impl std::error::Error for DiskFull {}
///
/// impl DescribableError for DiskFull {
///     fn error_description(&self) -> Option<String> {
///         Some("The disk is full.".to_string())
///     }
/// }
///
/// impl TypedError for DiskFull {
///     fn as_describable(&self) -> Option<&dyn DescribableError> {
///         Some(self)
///     }
/// }
///
/// let attributes = materialize(&DiskFull);
/// assert_eq!(attributes["description"].as_text(), Some("The disk is full."));
/// ```
pub trait TypedError: Error + AsAny + Send + Sync + 'static {
    #[inline]
    fn as_describable(&self) -> Option<&dyn DescribableError> {
        None
    }

    #[inline]
    fn as_recoverable(&self) -> Option<&dyn RecoverableError> {
        None
    }

    #[inline]
    fn as_custom_coded(&self) -> Option<&dyn CustomCodedError> {
        None
    }
}

impl dyn TypedError {
    /// Returns `true` if the concrete type is `E`.
    #[inline]
    pub fn is<E: TypedError>(&self) -> bool {
        self.as_any().is::<E>()
    }

    /// Downcasts to the concrete error type.
    #[inline]
    pub fn downcast_ref<E: TypedError>(&self) -> Option<&E> {
        self.as_any().downcast_ref::<E>()
    }
}
