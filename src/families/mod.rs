//! Built-in domain-coded error families.
//!
//! Each family binds one domain string to an open code table:
//!
//! | Family | Domain | Codes |
//! |--------|--------|-------|
//! | [`Platform`] | `PlatformErrorDomain` | [`PlatformCode`] |
//! | [`Url`] | `URLErrorDomain` | [`UrlCode`] |
//! | [`Posix`] | `POSIXErrorDomain` | [`PosixCode`] |
//! | [`Kernel`] | `KernelErrorDomain` | [`KernelCode`] |
//!
//! # Examples
//!
//! ```
//! use error_bridge::families::{KernelError, Posix, PosixCode, PosixError, UrlCode, UrlError};
//! use error_bridge::{DomainFamily, FlatError};
//!
//! let flat = FlatError::new(Posix::DOMAIN, 2);
//! assert!(UrlError::from_flat(flat.clone()).is_none());
//! assert!(KernelError::from_flat(flat.clone()).is_none());
//! assert_eq!(PosixError::from_flat(flat).map(|e| e.code()), Some(PosixCode::ENOENT));
//!
//! assert_eq!(UrlCode::from_raw(-1001), UrlCode::TimedOut);
//! ```

pub mod kernel;
pub mod platform;
pub mod posix;
pub mod url;

pub use kernel::{Kernel, KernelCode, KernelError};
pub use platform::{Platform, PlatformCode, PlatformError};
pub use posix::{Posix, PosixCode, PosixError};
pub use url::{Url, UrlCode, UrlError};
