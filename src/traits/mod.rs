//! Capability traits for bridgeable errors.
//!
//! - [`TypedError`]: the base capability; its query methods expose the others
//! - [`DescribableError`]: optional descriptive text
//! - [`RecoverableError`]: recovery options and the attempt operation
//! - [`CustomCodedError`]: explicit domain, code and user info
//! - [`TransientError`]: retry classification for bridged codes
//!
//! # Examples
//!
//! ```
//! use error_bridge::traits::TypedError;
//! use error_bridge::FlatError;
//! use std::fmt;
//!
//! #[derive(Debug)]
//! struct Timeout;
//!
//! impl fmt::Display for Timeout {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         f.write_str("timed out")
//!     }
//! }
//!
//! impl std::error::Error for Timeout {}
//! impl TypedError for Timeout {}
//!
//! let flat = FlatError::from_typed(Timeout);
//! assert!(flat.attributes().is_empty());
//! assert_eq!(flat.code(), 1);
//! assert!(flat.domain().as_str().ends_with("Timeout"));
//! ```

pub mod custom_coded;
pub mod describable;
pub mod recoverable;
pub mod transient;
pub mod typed_error;

pub use custom_coded::CustomCodedError;
pub use describable::DescribableError;
pub use recoverable::RecoverableError;
pub use transient::{TransientError, TransientErrorExt};
pub use typed_error::{AsAny, TypedError};
