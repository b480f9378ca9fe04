//! Integration tests for awaitable recovery.

use std::fmt;
use std::time::Duration;

use error_bridge::async_ext::RecoveryFuture;
use error_bridge::{
    impl_typed_error, BridgeError, Domain, FlatError, RecoverableError, RecoveryAttempter,
    RecoveryCompletion, RecoveryOptions,
};
use futures_core::future::FusedFuture;

#[derive(Debug)]
struct Offline;

impl fmt::Display for Offline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("offline")
    }
}

impl std::error::Error for Offline {}

impl RecoverableError for Offline {
    fn recovery_options(&self) -> RecoveryOptions {
        RecoveryOptions::from_iter(["Retry".to_string(), "Give Up".to_string()])
    }

    fn attempt_recovery(&self, option_index: usize) -> bool {
        option_index == 0
    }
}

impl_typed_error!(Offline: recoverable);

#[derive(Debug)]
struct Reconnecting;

impl fmt::Display for Reconnecting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("reconnecting")
    }
}

impl std::error::Error for Reconnecting {}

impl RecoverableError for Reconnecting {
    fn recovery_options(&self) -> RecoveryOptions {
        RecoveryOptions::from_iter(["Reconnect".to_string()])
    }

    fn attempt_recovery(&self, _option_index: usize) -> bool {
        false
    }

    fn attempt_recovery_with(&self, option_index: usize, completion: RecoveryCompletion) {
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            completion.complete(option_index == 0);
        });
    }
}

impl_typed_error!(Reconnecting: recoverable);

#[tokio::test]
async fn inline_recovery_resolves_immediately() {
    let flat = FlatError::from_typed(Offline);

    assert!(RecoveryAttempter.attempt_recovery_async(&flat, 0).await);
    assert!(!RecoveryAttempter.attempt_recovery_async(&flat, 1).await);
}

#[tokio::test]
async fn background_recovery_is_awaited() {
    let flat = FlatError::from_typed(Reconnecting);

    assert!(RecoveryAttempter.attempt_recovery_async(&flat, 0).await);
}

#[tokio::test]
async fn dropped_completion_resolves_false() {
    let (completion, future) = RecoveryFuture::channel();
    drop(completion);

    assert!(!future.await);
}

#[tokio::test]
async fn future_is_terminated_after_completion() {
    let (completion, mut future) = RecoveryFuture::channel();
    assert!(!future.is_terminated());

    completion.complete(true);
    assert!((&mut future).await);
    assert!(future.is_terminated());
}

#[tokio::test]
async fn non_recoverable_error_is_reported() {
    let flat = FlatError::new(Domain::from_static("net.example.widget"), 7);

    let result = RecoveryAttempter.try_attempt_recovery_async(&flat, 0);
    assert!(matches!(result, Err(BridgeError::NotRecoverable { code: 7, .. })));
}

#[tokio::test]
#[should_panic(expected = "does not support recovery")]
async fn panicking_form_on_non_recoverable_error() {
    let flat = FlatError::new(Domain::from_static("net.example.widget"), 7);
    let _ = RecoveryAttempter.attempt_recovery_async(&flat, 0).await;
}
