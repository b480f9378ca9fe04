//! Convenience re-exports for common usage patterns.
//!
//! This prelude module provides the most commonly used items for quick starts.
//! Import everything with:
//!
//! ```
//! use error_bridge::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`impl_typed_error!`]
//! - **Types**: [`FlatError`], [`Domain`], [`AttributeValue`], [`DomainCodedError`],
//!   [`RecoveryAttempter`], [`RecoveryCompletion`]
//! - **Traits**: [`TypedError`], [`DescribableError`], [`RecoverableError`],
//!   [`CustomCodedError`], [`TransientError`]
//! - **Bridge** (`std`): [`ErrorBridge`], [`BridgeConfig`]
//!
//! # Examples
//!
//! ```
//! use error_bridge::prelude::*;
//! use std::fmt;
//!
//! #[derive(Debug)]
//! struct Offline;
//!
//! impl fmt::Display for Offline {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         f.write_str("offline")
//!     }
//! }
//!
//! impl std::error::Error for Offline {}
//! impl_typed_error!(Offline);
//!
//! let flat = ErrorBridge::default().flatten(Offline);
//! assert_eq!(flat.code(), 1);
//! assert!(flat.attributes().is_empty());
//! ```

// Macros
pub use crate::impl_typed_error;

// Core types
pub use crate::recovery::RecoveryAttempter;
pub use crate::types::{
    keys, AttributeMap, AttributeValue, Domain, DomainCodedError, DomainFamily, ErrorCode,
    FlatError, RecoveryCompletion, RecoveryOptions,
};

// Traits
pub use crate::traits::{
    CustomCodedError, DescribableError, RecoverableError, TransientError, TypedError,
};

#[cfg(feature = "std")]
pub use crate::bridge::{BridgeConfig, ErrorBridge};
