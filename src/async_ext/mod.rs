//! Async recovery for error-bridge.
//!
//! Typed errors that recover in the background complete a
//! [`RecoveryCompletion`](crate::RecoveryCompletion) from whatever thread
//! they finish on; [`RecoveryFuture`] turns that callback into a value that
//! can be awaited.
//!
//! # Feature Flag
//!
//! Requires the `async` feature to be enabled:
//!
//! ```toml
//! [dependencies]
//! error-bridge = { version = "0.1", features = ["async"] }
//! ```

mod recovery_future;

pub use recovery_future::RecoveryFuture;
