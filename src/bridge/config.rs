//! Runtime configuration of an [`ErrorBridge`](super::ErrorBridge).

use crate::families::Platform;
use crate::types::{Domain, DomainFamily};
use smallvec::{smallvec, SmallVec};

/// How an [`ErrorBridge`](super::ErrorBridge) flattens typed errors.
///
/// # Examples
///
/// ```
/// use error_bridge::bridge::BridgeConfig;
/// use error_bridge::Domain;
///
/// let config = BridgeConfig::lazy()
///     .exclude_domain(Domain::from_static("net.example.widget"))
///     .include_underlying(true);
///
/// assert!(config.lazy_attributes);
/// assert!(config.is_excluded(&Domain::from_static("net.example.widget")));
/// assert!(config.is_excluded(&Domain::from_static("PlatformErrorDomain")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    /// Store only user info on flattened errors and compute the remaining
    /// attributes on request through a per-domain provider.
    pub lazy_attributes: bool,
    /// Domains that never get a lazy provider; their errors are flattened
    /// eagerly even when `lazy_attributes` is set.
    pub excluded_domains: SmallVec<[Domain; 1]>,
    /// Record each error's `source()` under
    /// [`keys::UNDERLYING_ERROR`](crate::keys::UNDERLYING_ERROR).
    pub include_underlying: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            lazy_attributes: true,
            excluded_domains: smallvec![Platform::DOMAIN],
            include_underlying: false,
        }
    }
}

impl BridgeConfig {
    /// Every attribute is computed when the error is flattened.
    #[inline]
    pub fn eager() -> Self {
        Self { lazy_attributes: false, ..Default::default() }
    }

    /// Attributes are computed on request. Same as [`Default`].
    #[inline]
    pub fn lazy() -> Self {
        Self::default()
    }

    #[inline]
    pub fn lazy_attributes(mut self, lazy: bool) -> Self {
        self.lazy_attributes = lazy;
        self
    }

    /// Adds a domain to the exclusion list.
    pub fn exclude_domain(mut self, domain: Domain) -> Self {
        if !self.excluded_domains.contains(&domain) {
            self.excluded_domains.push(domain);
        }
        self
    }

    /// Empties the exclusion list, including the platform domain.
    #[inline]
    pub fn without_exclusions(mut self) -> Self {
        self.excluded_domains.clear();
        self
    }

    #[inline]
    pub fn include_underlying(mut self, include: bool) -> Self {
        self.include_underlying = include;
        self
    }

    #[inline]
    pub fn is_excluded(&self, domain: &Domain) -> bool {
        self.excluded_domains.contains(domain)
    }

    /// Whether errors of `domain` are flattened lazily under this config.
    #[inline]
    pub fn is_lazy_for(&self, domain: &Domain) -> bool {
        self.lazy_attributes && !self.is_excluded(domain)
    }
}
