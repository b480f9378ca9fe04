//! Bridges strongly typed Rust errors and flat `(domain, code, attributes)`
//! errors.
//!
//! A typed error opts into the flat protocol by implementing [`TypedError`]
//! and, optionally, the capability traits [`DescribableError`],
//! [`RecoverableError`] and [`CustomCodedError`]. The bridge turns such a
//! value into a [`FlatError`] whose attribute map is filled from those
//! capabilities, and turns flat errors of a known domain back into typed
//! [`DomainCodedError`] values.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `error_bridge::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Typed to Flat
//!
//! ```
//! use error_bridge::{
//!     impl_typed_error, keys, CustomCodedError, DescribableError, Domain, FlatError,
//!     RecoverableError, RecoveryOptions,
//! };
//! use std::fmt;
//!
//! #[derive(Debug)]
//! struct Jammed;
//!
//! impl fmt::Display for Jammed {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         f.write_str("jammed")
//!     }
//! }
//!
//! impl std::error::Error for Jammed {}
//!
//! impl DescribableError for Jammed {
//!     fn error_description(&self) -> Option<String> {
//!         Some("widget jammed".to_string())
//!     }
//! }
//!
//! impl RecoverableError for Jammed {
//!     fn recovery_options(&self) -> RecoveryOptions {
//!         RecoveryOptions::from_iter(["Unjam".to_string()])
//!     }
//!
//!     fn attempt_recovery(&self, _option_index: usize) -> bool {
//!         true
//!     }
//! }
//!
//! impl CustomCodedError for Jammed {
//!     fn error_domain(&self) -> Domain {
//!         Domain::from_static("net.example.widget")
//!     }
//!
//!     fn error_code(&self) -> i64 {
//!         7
//!     }
//! }
//!
//! impl_typed_error!(Jammed: describable, recoverable, custom_coded);
//!
//! let flat = FlatError::from_typed(Jammed);
//! assert_eq!(flat.domain(), "net.example.widget");
//! assert_eq!(flat.code(), 7);
//! assert_eq!(flat.description(), Some("widget jammed"));
//! assert_eq!(
//!     flat.attribute(keys::RECOVERY_OPTIONS).and_then(|v| v.as_text_list()),
//!     Some(&["Unjam".to_string()][..])
//! );
//! ```
//!
//! ## Flat to Typed
//!
//! ```
//! use error_bridge::families::{Url, UrlCode, UrlError};
//! use error_bridge::{DomainFamily, FlatError};
//!
//! let flat = FlatError::new(Url::DOMAIN, -1001);
//! let url = UrlError::from_flat(flat).expect("URL domain");
//! assert_eq!(url.code(), UrlCode::TimedOut);
//!
//! // Codes the table does not name survive unchanged.
//! let unknown = UrlError::from_flat(FlatError::new(Url::DOMAIN, -4242)).expect("URL domain");
//! assert_eq!(unknown.code(), UrlCode::Other(-4242));
//! assert_eq!(unknown.raw_code(), -4242);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Built-in domain-coded families and their code tables
pub mod families;
/// Typed error declaration macros
pub mod macros;
/// Attribute materialization from typed errors
pub mod materialize;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Recovery call-in from the flat side
pub mod recovery;
/// Capability traits for bridgeable errors
pub mod traits;
/// Flat errors, attribute values and the domain-coded family
pub mod types;

/// Bridging service and lazy attribute providers (requires `std` feature)
#[cfg(feature = "std")]
pub mod bridge;

/// Awaitable recovery (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

pub use materialize::{
    flat_code, flat_domain, lookup_attribute, materialize, materialize_with_underlying,
    DEFAULT_CODE,
};
pub use recovery::RecoveryAttempter;
pub use traits::*;
pub use types::{
    keys, AttributeMap, AttributeValue, BridgeError, Domain, DomainCodedError, DomainFamily,
    ErrorCode, FlatError, RecoveryCompletion, RecoveryOptions,
};

#[cfg(feature = "std")]
pub use bridge::{BridgeConfig, ErrorBridge};
