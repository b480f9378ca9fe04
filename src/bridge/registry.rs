//! Per-domain attribute providers.

use crate::materialize::lookup_attribute;
use crate::types::alloc_type::{Arc, Vec};
use crate::types::{keys, AttributeValue, Domain, FlatError};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::sync::{PoisonError, RwLock};

/// Computes attributes of flat errors on request.
///
/// Implemented for any `Fn(&FlatError, &str) -> Option<AttributeValue>`
/// closure that is `Send + Sync`.
///
/// # Examples
///
/// ```
/// use error_bridge::bridge::AttributeProvider;
/// use error_bridge::{AttributeValue, Domain, FlatError};
///
/// let provider = |_: &FlatError, key: &str| (key == "answer").then(|| AttributeValue::Integer(42));
///
/// let flat = FlatError::new(Domain::from_static("net.example.widget"), 7);
/// assert_eq!(provider.provide(&flat, "answer"), Some(AttributeValue::Integer(42)));
/// assert_eq!(provider.provide(&flat, "question"), None);
/// ```
pub trait AttributeProvider: Send + Sync {
    fn provide(&self, error: &FlatError, key: &str) -> Option<AttributeValue>;
}

impl<F> AttributeProvider for F
where
    F: Fn(&FlatError, &str) -> Option<AttributeValue> + Send + Sync,
{
    #[inline]
    fn provide(&self, error: &FlatError, key: &str) -> Option<AttributeValue> {
        self(error, key)
    }
}

/// The provider an [`ErrorBridge`](super::ErrorBridge) registers for lazily
/// flattened domains.
///
/// It resolves keys against the flat error's typed origin with
/// [`lookup_attribute`]; flat errors without an origin resolve nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OriginAttributeProvider {
    include_underlying: bool,
}

impl OriginAttributeProvider {
    #[inline]
    pub const fn new(include_underlying: bool) -> Self {
        Self { include_underlying }
    }
}

impl AttributeProvider for OriginAttributeProvider {
    fn provide(&self, error: &FlatError, key: &str) -> Option<AttributeValue> {
        if key == keys::UNDERLYING_ERROR && !self.include_underlying {
            return None;
        }
        let value = lookup_attribute(error.origin()?, key);
        #[cfg(feature = "tracing")]
        tracing::trace!(
            domain = %error.domain(),
            key,
            resolved = value.is_some(),
            "lazy attribute lookup"
        );
        value
    }
}

/// Domain-keyed provider table with insert-if-absent registration.
///
/// Readers clone the provider handle out of the table and call it after the
/// lock is released. A poisoned lock is recovered; every write leaves the
/// table consistent.
#[derive(Default)]
pub struct ProviderRegistry {
    providers: RwLock<HashMap<Domain, Arc<dyn AttributeProvider>>>,
}

impl ProviderRegistry {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `provider` for `domain` unless one is already registered.
    ///
    /// Returns `true` only for the registration that took effect. Concurrent
    /// first registrations for one domain leave exactly one provider.
    pub fn register(&self, domain: Domain, provider: Arc<dyn AttributeProvider>) -> bool {
        let mut providers = self.providers.write().unwrap_or_else(PoisonError::into_inner);
        match providers.entry(domain) {
            Entry::Occupied(_entry) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(domain = %_entry.key(), "attribute provider already registered");
                false
            },
            Entry::Vacant(slot) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(domain = %slot.key(), "registered attribute provider");
                slot.insert(provider);
                true
            },
        }
    }

    pub fn get(&self, domain: &str) -> Option<Arc<dyn AttributeProvider>> {
        let providers = self.providers.read().unwrap_or_else(PoisonError::into_inner);
        providers.get(domain).cloned()
    }

    pub fn contains(&self, domain: &str) -> bool {
        self.providers.read().unwrap_or_else(PoisonError::into_inner).contains_key(domain)
    }

    pub fn len(&self) -> usize {
        self.providers.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Registered domains in sorted order.
    pub fn domains(&self) -> Vec<Domain> {
        let providers = self.providers.read().unwrap_or_else(PoisonError::into_inner);
        let mut domains: Vec<Domain> = providers.keys().cloned().collect();
        domains.sort();
        domains
    }
}

impl fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderRegistry").field("domains", &self.domains()).finish()
    }
}
