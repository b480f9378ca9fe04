use error_bridge::families::{
    Kernel, KernelCode, KernelError, Platform, Posix, PosixCode, PosixError, Url, UrlCode,
    UrlError,
};
use error_bridge::traits::transient::RETRY_AFTER_MS;
use error_bridge::{keys, Domain, DomainFamily, FlatError, TransientError, TransientErrorExt};
use std::time::Duration;

#[test]
fn bridged_codes_classify_as_transient() {
    assert!(UrlError::new(UrlCode::NetworkConnectionLost).is_transient());
    assert!(UrlError::new(UrlCode::Cancelled).is_permanent());
    assert!(PosixError::new(PosixCode::EAGAIN).is_transient());
    assert!(PosixError::new(PosixCode::ENOENT).is_permanent());
    assert!(KernelError::new(KernelCode::OperationTimedOut).is_transient());
    assert!(KernelError::new(KernelCode::InvalidArgument).is_permanent());
}

#[test]
fn unknown_codes_are_permanent() {
    assert!(UrlError::new(UrlCode::Other(-77)).is_permanent());
    assert!(PosixError::new(PosixCode::Other(9000)).is_permanent());
}

#[test]
fn flat_errors_classify_by_domain() {
    assert!(FlatError::new(Url::DOMAIN, -1001).is_transient());
    assert!(FlatError::new(Posix::DOMAIN, 4).is_transient());
    assert!(FlatError::new(Kernel::DOMAIN, 6).is_transient());
    assert!(FlatError::new(Posix::DOMAIN, 2).is_permanent());
    assert!(FlatError::new(Platform::DOMAIN, 4).is_permanent());
}

#[test]
fn flat_error_in_foreign_domain_follows_its_underlying_error() {
    let cause = FlatError::new(Posix::DOMAIN, 60);
    let wrapper = FlatError::new(Domain::from_static("net.example.widget"), 7)
        .with_attribute(keys::UNDERLYING_ERROR, cause);
    assert!(wrapper.is_transient());

    let plain = FlatError::new(Domain::from_static("net.example.widget"), 7)
        .with_attribute(keys::UNDERLYING_ERROR, "not a flat error");
    assert!(plain.is_permanent());
}

#[test]
fn retry_hint_comes_from_attribute() {
    let flat = FlatError::new(Url::DOMAIN, -1001).with_attribute(RETRY_AFTER_MS, 1500_i64);
    assert_eq!(flat.retry_after_hint(), Some(Duration::from_millis(1500)));

    let url = UrlError::from_flat(flat).expect("URL domain");
    assert_eq!(url.retry_after_hint(), Some(Duration::from_millis(1500)));

    let negative = FlatError::new(Url::DOMAIN, -1001).with_attribute(RETRY_AFTER_MS, -5_i64);
    assert_eq!(negative.retry_after_hint(), None);
    assert_eq!(UrlError::new(UrlCode::TimedOut).retry_after_hint(), None);
}

#[test]
fn retry_if_transient_filters_results() {
    let ok: Result<(), UrlError> = Ok(());
    assert!(ok.retry_if_transient().is_none());

    let transient: Result<(), UrlError> = Err(UrlError::new(UrlCode::TimedOut));
    assert!(transient.retry_if_transient().is_some());

    let permanent: Result<(), FlatError> = Err(FlatError::new(Url::DOMAIN, -1000));
    assert!(permanent.retry_if_transient().is_none());
}
