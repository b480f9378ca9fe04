use error_bridge::bridge::{AttributeProvider, BridgeConfig, ErrorBridge, OriginAttributeProvider};
use error_bridge::families::{Platform, PlatformCode, PlatformError, Posix};
use error_bridge::{
    impl_typed_error, keys, materialize, AttributeMap, AttributeValue, BridgeError,
    CustomCodedError, DescribableError, Domain, DomainFamily, FlatError, RecoverableError,
    RecoveryOptions,
};
use std::fmt;
use std::sync::{Arc, Barrier};
use std::thread;

const WIDGET: Domain = Domain::from_static("net.example.widget");

#[derive(Debug)]
struct Jammed {
    gear: i64,
}

impl fmt::Display for Jammed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gear {} jammed", self.gear)
    }
}

impl std::error::Error for Jammed {}

impl DescribableError for Jammed {
    fn error_description(&self) -> Option<String> {
        Some("widget jammed".to_string())
    }

    fn recovery_suggestion(&self) -> Option<String> {
        Some(format!("Free gear {}.", self.gear))
    }
}

impl RecoverableError for Jammed {
    fn recovery_options(&self) -> RecoveryOptions {
        RecoveryOptions::from_iter(["Unjam".to_string()])
    }

    fn attempt_recovery(&self, option_index: usize) -> bool {
        option_index == 0
    }
}

impl CustomCodedError for Jammed {
    fn error_domain(&self) -> Domain {
        WIDGET
    }

    fn error_code(&self) -> i64 {
        7
    }

    fn user_info(&self) -> AttributeMap {
        let mut info = AttributeMap::new();
        info.insert("gear".to_string(), self.gear.into());
        info
    }
}

impl_typed_error!(Jammed: describable, recoverable, custom_coded);

#[derive(Debug)]
struct Caused {
    cause: FlatError,
}

impl fmt::Display for Caused {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("caused failure")
    }
}

impl std::error::Error for Caused {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.cause)
    }
}

impl_typed_error!(Caused);

#[derive(Debug)]
struct Stalled;

impl fmt::Display for Stalled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("stalled")
    }
}

impl std::error::Error for Stalled {}

impl CustomCodedError for Stalled {
    fn error_domain(&self) -> Domain {
        Platform::DOMAIN
    }

    fn error_code(&self) -> i64 {
        PlatformCode::UserCancelled.raw()
    }
}

impl DescribableError for Stalled {
    fn error_description(&self) -> Option<String> {
        Some("stalled by the user".to_string())
    }
}

impl_typed_error!(Stalled: describable, custom_coded);

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn bridge_is_shareable_across_threads() {
    assert_send_sync::<ErrorBridge>();
}

#[test]
fn default_config_is_lazy_and_excludes_platform_domain() {
    let config = BridgeConfig::default();

    assert!(config.lazy_attributes);
    assert!(!config.include_underlying);
    assert!(config.is_excluded(&Platform::DOMAIN));
    assert!(config.is_lazy_for(&WIDGET));
    assert!(!config.is_lazy_for(&Platform::DOMAIN));

    assert!(!BridgeConfig::eager().is_lazy_for(&WIDGET));
    assert!(BridgeConfig::default().without_exclusions().is_lazy_for(&Platform::DOMAIN));
}

#[test]
fn lazy_flatten_stores_only_user_info() {
    let bridge = ErrorBridge::default();
    let flat = bridge.flatten(Jammed { gear: 3 });

    assert_eq!(flat.domain(), &WIDGET);
    assert_eq!(flat.code(), 7);
    assert_eq!(flat.attributes().len(), 1);
    assert_eq!(flat.attribute("gear").and_then(AttributeValue::as_integer), Some(3));
    assert!(bridge.has_provider("net.example.widget"));
    assert!(bridge.uses_lazy_attributes(&WIDGET));
}

#[test]
fn lazy_attributes_resolve_on_request() {
    let bridge = ErrorBridge::default();
    let flat = bridge.flatten(Jammed { gear: 3 });

    assert_eq!(
        bridge.attribute(&flat, keys::DESCRIPTION),
        Some(AttributeValue::Text("widget jammed".to_string()))
    );
    assert_eq!(
        bridge.attribute(&flat, keys::RECOVERY_SUGGESTION),
        Some(AttributeValue::Text("Free gear 3.".to_string()))
    );
    assert_eq!(bridge.attribute(&flat, "gear"), Some(AttributeValue::Integer(3)));
    assert_eq!(bridge.attribute(&flat, keys::HELP_ANCHOR), None);
    assert_eq!(bridge.attribute(&flat, "no-such-key"), None);
}

#[test]
fn resolved_attributes_match_eager_materialization() {
    let lazy = ErrorBridge::new(BridgeConfig::lazy());
    let eager = ErrorBridge::new(BridgeConfig::eager());

    let lazy_flat = lazy.flatten(Jammed { gear: 5 });
    let eager_flat = eager.flatten(Jammed { gear: 5 });

    assert_eq!(lazy.resolved_attributes(&lazy_flat), *eager_flat.attributes());
    assert_eq!(*eager_flat.attributes(), materialize(&Jammed { gear: 5 }));
    assert_eq!(eager.provider_count(), 0);
}

#[test]
fn excluded_platform_domain_is_flattened_eagerly() {
    let bridge = ErrorBridge::default();
    let flat = bridge.flatten(Stalled);

    assert_eq!(flat.description(), Some("stalled by the user"));
    assert!(!bridge.has_provider(Platform::DOMAIN.as_str()));
    assert_eq!(bridge.provider_count(), 0);

    let platform = PlatformError::from_flat(flat).expect("platform domain");
    assert_eq!(platform.code(), PlatformCode::UserCancelled);
}

#[test]
fn registering_for_excluded_domain_is_refused() {
    let bridge = ErrorBridge::default();
    let provider = |_: &FlatError, _: &str| -> Option<AttributeValue> { None };

    assert!(!bridge.register_provider(Platform::DOMAIN, provider));
    assert_eq!(bridge.provider_count(), 0);
}

#[test]
fn second_registration_for_a_domain_is_a_no_op() {
    let bridge = ErrorBridge::default();
    let first = |_: &FlatError, _: &str| Some(AttributeValue::Integer(1));
    let second = |_: &FlatError, _: &str| Some(AttributeValue::Integer(2));

    assert!(bridge.register_provider(WIDGET, first));
    assert!(!bridge.register_provider(WIDGET, second));
    assert_eq!(bridge.provider_count(), 1);

    let flat = FlatError::new(WIDGET, 7);
    assert_eq!(bridge.attribute(&flat, "anything"), Some(AttributeValue::Integer(1)));
}

#[test]
fn concurrent_first_registrations_leave_one_provider() {
    const THREADS: usize = 16;

    let bridge = ErrorBridge::default();
    let barrier = Barrier::new(THREADS);

    let wins: usize = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                scope.spawn(|| {
                    barrier.wait();
                    bridge.register_provider(WIDGET, OriginAttributeProvider::default())
                })
            })
            .collect();
        handles.into_iter().map(|handle| usize::from(handle.join().unwrap())).sum()
    });

    assert_eq!(wins, 1);
    assert_eq!(bridge.provider_count(), 1);
}

#[test]
fn flattening_many_errors_registers_each_domain_once() {
    let bridge = Arc::new(ErrorBridge::default());

    let handles: Vec<_> = (0..8)
        .map(|gear| {
            let bridge = Arc::clone(&bridge);
            thread::spawn(move || {
                bridge.flatten(Jammed { gear });
                bridge.flatten(Caused { cause: FlatError::new(Posix::DOMAIN, 4) });
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(bridge.provider_count(), 2);
    assert!(bridge.registry().domains().contains(&WIDGET));
}

#[test]
fn flattening_a_flat_error_returns_it_unchanged() {
    let bridge = ErrorBridge::default();
    let flat = FlatError::new(WIDGET, 9).with_attribute(keys::DESCRIPTION, "already flat");

    assert_eq!(bridge.flatten(flat.clone()), flat);
    assert_eq!(bridge.provider_count(), 0);
}

#[test]
fn flattened_error_keeps_its_origin() {
    let bridge = ErrorBridge::default();
    let flat = bridge.flatten(Jammed { gear: 2 });

    assert_eq!(flat.downcast_ref::<Jammed>().map(|jammed| jammed.gear), Some(2));
    assert_eq!(
        std::error::Error::source(&flat).map(ToString::to_string),
        Some("gear 2 jammed".to_string())
    );
}

#[test]
fn underlying_error_follows_config() {
    let cause = FlatError::new(Posix::DOMAIN, 4);

    let lazy = ErrorBridge::default();
    let flat = lazy.flatten(Caused { cause: cause.clone() });
    assert_eq!(lazy.attribute(&flat, keys::UNDERLYING_ERROR), None);

    let lazy_with = ErrorBridge::new(BridgeConfig::lazy().include_underlying(true));
    let flat = lazy_with.flatten(Caused { cause: cause.clone() });
    assert_eq!(
        lazy_with.attribute(&flat, keys::UNDERLYING_ERROR),
        Some(AttributeValue::from(cause.clone()))
    );

    let eager = ErrorBridge::new(BridgeConfig::eager().include_underlying(true));
    let flat = eager.flatten(Caused { cause: cause.clone() });
    assert_eq!(
        flat.attribute(keys::UNDERLYING_ERROR).and_then(AttributeValue::as_error),
        Some(&cause)
    );
}

#[test]
fn provider_without_origin_resolves_nothing() {
    let provider = OriginAttributeProvider::new(true);
    let flat = FlatError::new(WIDGET, 7);

    assert_eq!(provider.provide(&flat, keys::DESCRIPTION), None);
}

#[test]
fn recover_forwards_to_origin() {
    let bridge = ErrorBridge::default();
    let flat = bridge.flatten(Jammed { gear: 1 });

    assert_eq!(bridge.recover(&flat, 0), Ok(true));
    assert_eq!(bridge.recover(&flat, 1), Ok(false));

    let plain = FlatError::new(WIDGET, 7);
    assert_eq!(
        bridge.recover(&plain, 0),
        Err(BridgeError::NotRecoverable { domain: WIDGET, code: 7 })
    );
}

#[test]
fn lazy_recovery_attempter_is_resolved_through_provider() {
    let bridge = ErrorBridge::default();
    let flat = bridge.flatten(Jammed { gear: 1 });

    assert!(flat.attribute(keys::RECOVERY_ATTEMPTER).is_none());
    let attempter = bridge
        .attribute(&flat, keys::RECOVERY_ATTEMPTER)
        .and_then(|value| value.as_recovery_attempter())
        .expect("recoverable origin");
    assert!(attempter.attempt_recovery(&flat, 0));
}
