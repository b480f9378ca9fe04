//! The long-lived bridging service.
//!
//! An [`ErrorBridge`] is built once at service start and shared by reference
//! or `Arc`. It decides per domain whether typed errors are flattened eagerly
//! or lazily, and owns the [`ProviderRegistry`] that lazy lookups go through.
//!
//! # Examples
//!
//! ```
//! use error_bridge::bridge::{BridgeConfig, ErrorBridge};
//! use error_bridge::{impl_typed_error, keys, CustomCodedError, DescribableError, Domain};
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
//! impl CustomCodedError for Jammed {
//!     fn error_domain(&self) -> Domain {
//!         Domain::from_static("net.example.widget")
//!     }
//! }
//!
//! impl_typed_error!(Jammed: describable, custom_coded);
//!
//! let bridge = ErrorBridge::new(BridgeConfig::lazy());
//! let flat = bridge.flatten(Jammed);
//!
//! // Nothing is stored up front; the description is computed on request.
//! assert!(flat.attributes().is_empty());
//! let description = bridge.attribute(&flat, keys::DESCRIPTION);
//! assert_eq!(description.as_ref().and_then(|v| v.as_text()), Some("widget jammed"));
//! assert!(bridge.has_provider("net.example.widget"));
//! ```

pub mod config;
pub mod registry;

pub use config::BridgeConfig;
pub use registry::{AttributeProvider, OriginAttributeProvider, ProviderRegistry};

use crate::materialize::{flat_code, flat_domain, materialize_with};
use crate::recovery::RecoveryAttempter;
use crate::traits::TypedError;
use crate::types::alloc_type::{Arc, ToString};
use crate::types::{keys, AttributeMap, AttributeValue, BridgeError, Domain, FlatError};

/// Flattens typed errors and resolves their attributes.
#[derive(Debug, Default)]
pub struct ErrorBridge {
    config: BridgeConfig,
    registry: ProviderRegistry,
}

impl ErrorBridge {
    #[inline]
    pub fn new(config: BridgeConfig) -> Self {
        Self { config, registry: ProviderRegistry::new() }
    }

    #[inline]
    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    #[inline]
    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Whether errors of `domain` are flattened lazily by this bridge.
    #[inline]
    pub fn uses_lazy_attributes(&self, domain: &Domain) -> bool {
        self.config.is_lazy_for(domain)
    }

    /// Flattens a typed error.
    ///
    /// Flattening a [`FlatError`] returns a copy of it unchanged.
    #[inline]
    pub fn flatten<E>(&self, error: E) -> FlatError
    where
        E: TypedError,
    {
        self.flatten_shared(Arc::new(error))
    }

    /// Flattens an already shared typed error.
    ///
    /// Lazily flattened errors store only their user info and make sure the
    /// domain's provider is registered; eagerly flattened ones store every
    /// attribute.
    pub fn flatten_shared(&self, error: Arc<dyn TypedError>) -> FlatError {
        let typed: &dyn TypedError = &*error;
        if let Some(flat) = typed.downcast_ref::<FlatError>() {
            return flat.clone();
        }

        let domain = flat_domain(typed);
        let code = flat_code(typed);
        let attributes = if self.uses_lazy_attributes(&domain) {
            self.ensure_provider(&domain);
            typed.as_custom_coded().map(|coded| coded.user_info()).unwrap_or_default()
        } else {
            materialize_with(typed, self.config.include_underlying)
        };
        FlatError::from_parts(domain, code, attributes, Some(error))
    }

    /// Resolves one attribute: the stored value first, then the domain's
    /// provider.
    pub fn attribute(&self, error: &FlatError, key: &str) -> Option<AttributeValue> {
        if let Some(value) = error.attribute(key) {
            return Some(value.clone());
        }
        self.registry.get(error.domain().as_str())?.provide(error, key)
    }

    /// Stored attributes plus every vocabulary key the domain's provider
    /// resolves.
    pub fn resolved_attributes(&self, error: &FlatError) -> AttributeMap {
        let mut attributes = error.attributes().clone();
        if let Some(provider) = self.registry.get(error.domain().as_str()) {
            for &key in keys::COMPUTED {
                if attributes.contains_key(key) {
                    continue;
                }
                if let Some(value) = provider.provide(error, key) {
                    attributes.insert(key.to_string(), value);
                }
            }
        }
        attributes
    }

    /// Registers a provider for `domain` unless one exists or the domain is
    /// excluded from lazy bridging. Returns `true` only when it took effect.
    pub fn register_provider<P>(&self, domain: Domain, provider: P) -> bool
    where
        P: AttributeProvider + 'static,
    {
        if self.config.is_excluded(&domain) {
            #[cfg(feature = "tracing")]
            tracing::debug!(domain = %domain, "refusing provider for excluded domain");
            return false;
        }
        self.registry.register(domain, Arc::new(provider))
    }

    #[inline]
    pub fn has_provider(&self, domain: &str) -> bool {
        self.registry.contains(domain)
    }

    #[inline]
    pub fn provider_count(&self) -> usize {
        self.registry.len()
    }

    /// Runs recovery option `option_index` of a flat error's typed origin.
    #[inline]
    pub fn recover(&self, error: &FlatError, option_index: usize) -> Result<bool, BridgeError> {
        RecoveryAttempter.try_attempt_recovery(error, option_index)
    }

    fn ensure_provider(&self, domain: &Domain) {
        if self.registry.contains(domain.as_str()) {
            return;
        }
        let provider = OriginAttributeProvider::new(self.config.include_underlying);
        self.registry.register(domain.clone(), Arc::new(provider));
    }
}
