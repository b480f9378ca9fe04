use crate::types::{AttributeMap, Domain};

/// Opt-in explicit domain, code and user info for a typed error.
///
/// The domain is expected to be the same for every value of a type; keep it
/// in a `const` and return that.
///
/// # Examples
///
/// ```
/// use error_bridge::{AttributeMap, CustomCodedError, Domain};
///
/// struct QuotaExceeded { limit: i64 }
///
/// impl QuotaExceeded {
///     const DOMAIN: Domain = Domain::from_static("net.example.quota");
/// }
///
/// impl CustomCodedError for QuotaExceeded {
///     fn error_domain(&self) -> Domain {
///         Self::DOMAIN
///     }
///
///     fn error_code(&self) -> i64 {
///         429
///     }
///
///     fn user_info(&self) -> AttributeMap {
///         let mut info = AttributeMap::new();
///         info.insert("limit".to_string(), self.limit.into());
///         info
///     }
/// }
///
/// let err = QuotaExceeded { limit: 10 };
/// assert_eq!(err.error_domain(), "net.example.quota");
/// assert_eq!(err.user_info()["limit"].as_integer(), Some(10));
/// ```
pub trait CustomCodedError {
    fn error_domain(&self) -> Domain;

    /// Signed code, meaningful only within [`error_domain`](Self::error_domain).
    #[inline]
    fn error_code(&self) -> i64 {
        1
    }

    /// Entries seeded into the flat attribute map before computed keys.
    #[inline]
    fn user_info(&self) -> AttributeMap {
        AttributeMap::new()
    }
}
