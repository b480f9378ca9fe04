use error_bridge::families::{Posix, PosixCode, PosixError};
use error_bridge::{
    impl_typed_error, keys, AttributeValue, BridgeError, Domain, DomainFamily, FlatError,
    RecoveryAttempter,
};
use std::fmt;


#[derive(Debug)]
struct Jammed;

impl fmt::Display for Jammed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("jammed")
    }
}

impl std::error::Error for Jammed {}
impl_typed_error!(Jammed);

#[test]
fn empty_domain_is_rejected() {
    assert_eq!(Domain::new(""), Err(BridgeError::EmptyDomain));
    assert_eq!(Domain::try_from(String::new()), Err(BridgeError::EmptyDomain));
    assert_eq!(BridgeError::EmptyDomain.to_string(), "error domain must not be empty");
}

#[test]
fn runtime_and_static_domains_compare_equal() {
    let runtime = Domain::new(String::from("POSIXErrorDomain")).unwrap();

    assert_eq!(runtime, Posix::DOMAIN);
    assert_eq!(runtime, "POSIXErrorDomain");
    assert_eq!(runtime.to_string(), "POSIXErrorDomain");
    assert_eq!(String::from(runtime), "POSIXErrorDomain");
}

#[test]
#[should_panic(expected = "error domain must not be empty")]
fn static_empty_domain_panics() {
    let name: &'static str = "";
    let _ = Domain::from_static(name);
}

#[test]
fn opaque_values_compare_by_identity() {
    let shared = AttributeValue::opaque(vec![1_u8, 2, 3]);

    assert_eq!(shared, shared.clone());
    assert_ne!(shared, AttributeValue::opaque(vec![1_u8, 2, 3]));
    assert_eq!(shared.downcast_opaque::<Vec<u8>>(), Some(&vec![1, 2, 3]));
    assert_eq!(shared.downcast_opaque::<String>(), None);
}

#[test]
fn recovery_attempters_always_compare_equal() {
    assert_eq!(
        AttributeValue::RecoveryAttempter(RecoveryAttempter),
        AttributeValue::from(RecoveryAttempter::default())
    );
    assert_ne!(AttributeValue::from("7"), AttributeValue::from(7_i64));
}

#[test]
fn serializable_values() {
    assert!(AttributeValue::from(true).is_serializable());
    assert!(AttributeValue::from(vec!["a".to_string()]).is_serializable());
    assert!(!AttributeValue::from(RecoveryAttempter).is_serializable());
    assert!(!AttributeValue::opaque(3_u32).is_serializable());

    let nested =
        FlatError::new(Posix::DOMAIN, 2).with_attribute("handle", AttributeValue::opaque(1_u8));
    assert!(!AttributeValue::from(nested).is_serializable());
}

#[test]
fn flat_errors_with_separate_origins_differ() {
    let first = FlatError::from_typed(Jammed);
    let second = FlatError::from_typed(Jammed);

    assert_eq!(first, first.clone());
    assert_ne!(first, second);
    assert_eq!(first.domain(), second.domain());
    assert_eq!(first.attributes(), second.attributes());
}

#[test]
fn flat_error_display_and_source() {
    let flat = FlatError::new(Posix::DOMAIN, 2);
    assert_eq!(flat.to_string(), "POSIXErrorDomain error 2");
    assert!(std::error::Error::source(&flat).is_none());

    let derived = FlatError::from_typed(Jammed);
    assert_eq!(
        std::error::Error::source(&derived).map(ToString::to_string),
        Some("jammed".to_string())
    );
    assert!(derived.origin().is_some());
    assert!(derived.shared_origin().is_some());
}

#[test]
fn flat_error_of_domain_coded_value_keeps_attributes() {
    let posix = PosixError::new(PosixCode::ENOENT).with_attribute(keys::FILE_PATH, "/srv/widget");
    let flat = FlatError::from_typed(posix.clone());

    assert_eq!(flat.domain(), "POSIXErrorDomain");
    assert_eq!(flat.code(), 2);
    assert_eq!(
        flat.attribute(keys::FILE_PATH).and_then(AttributeValue::as_text),
        Some("/srv/widget")
    );
    assert_eq!(flat.downcast_ref::<PosixError>(), Some(&posix));
}
