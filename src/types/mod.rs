//! Flat-error data model and the generic domain-coded family.
//!
//! # Examples
//!
//! ```
//! use error_bridge::families::{PosixCode, PosixError};
//! use error_bridge::{keys, FlatError};
//!
//! let flat: FlatError = PosixError::new(PosixCode::ENOENT)
//!     .with_attribute(keys::FILE_PATH, "/etc/widget.conf")
//!     .into();
//!
//! let posix = PosixError::from_flat(flat).expect("same domain");
//! assert_eq!(posix.code(), PosixCode::ENOENT);
//! assert_eq!(posix.file_path(), Some("/etc/widget.conf"));
//! ```

pub mod alloc_type;
pub mod attribute;
pub mod bridge_error;
pub mod completion;
pub mod domain;
pub mod domain_coded;
pub mod flat_error;
pub mod keys;

pub use attribute::{AttributeMap, AttributeValue};
pub use bridge_error::BridgeError;
pub use completion::{RecoveryCompletion, RecoveryOptions};
pub use domain::Domain;
pub use domain_coded::{DomainCodedError, DomainFamily, ErrorCode};
pub use flat_error::FlatError;
