//! The interop-neutral `(domain, code, attributes)` error form.

use crate::materialize::{flat_code, flat_domain, materialize};
use crate::traits::{CustomCodedError, DescribableError, RecoverableError, TypedError};
use crate::types::alloc_type::{Arc, String, ToString};
use crate::types::{keys, AttributeMap, AttributeValue, Domain};
use core::error::Error;
use core::fmt::{self, Display};

/// An error reduced to a domain, an integer code and an attribute map.
///
/// A flat error derived from a typed error keeps a shared handle to it (its
/// *origin*), so the typed value can be recovered by
/// [`downcast_ref`](Self::downcast_ref) and lazily computed attributes can be
/// resolved later. Flat errors are never mutated once published; derive a new
/// one instead.
///
/// Equality compares domain, code and attributes structurally. Origins are
/// compared by identity, so two flat errors derived from separately allocated
/// typed values are different even when everything else matches.
///
/// # Examples
///
/// ```
/// use error_bridge::{keys, Domain, FlatError};
///
/// let flat = FlatError::new(Domain::from_static("net.example.widget"), 7)
///     .with_attribute(keys::DESCRIPTION, "widget jammed");
///
/// assert_eq!(flat.domain(), "net.example.widget");
/// assert_eq!(flat.code(), 7);
/// assert_eq!(flat.description(), Some("widget jammed"));
/// assert_eq!(flat.to_string(), "net.example.widget error 7: widget jammed");
/// ```
#[derive(Clone)]
pub struct FlatError {
    domain: Domain,
    code: i64,
    attributes: AttributeMap,
    origin: Option<Arc<dyn TypedError>>,
}

impl FlatError {
    /// Creates a flat error with no attributes and no origin.
    #[inline]
    pub fn new(domain: Domain, code: i64) -> Self {
        Self { domain, code, attributes: AttributeMap::new(), origin: None }
    }

    #[inline]
    pub fn with_attributes(domain: Domain, code: i64, attributes: AttributeMap) -> Self {
        Self { domain, code, attributes, origin: None }
    }

    /// Adds one attribute while the error is still being built.
    #[inline]
    pub fn with_attribute<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<AttributeValue>,
    {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Eagerly flattens a typed error, materializing every attribute.
    #[inline]
    pub fn from_typed<E>(error: E) -> Self
    where
        E: TypedError,
    {
        Self::from_shared(Arc::new(error))
    }

    /// Eagerly flattens an already shared typed error.
    pub fn from_shared(error: Arc<dyn TypedError>) -> Self {
        let attributes = materialize(&*error);
        Self::from_parts(flat_domain(&*error), flat_code(&*error), attributes, Some(error))
    }

    #[inline]
    pub(crate) fn from_parts(
        domain: Domain,
        code: i64,
        attributes: AttributeMap,
        origin: Option<Arc<dyn TypedError>>,
    ) -> Self {
        Self { domain, code, attributes, origin }
    }

    #[inline]
    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    #[inline]
    pub fn code(&self) -> i64 {
        self.code
    }

    /// Attributes stored on this value.
    ///
    /// Under lazy bridging this holds only the user info; resolve computed
    /// keys through [`ErrorBridge::attribute`](crate::ErrorBridge::attribute).
    #[inline]
    pub fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }

    #[inline]
    pub fn attribute(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(key)
    }

    /// The stored [`keys::DESCRIPTION`] text, if any.
    #[inline]
    pub fn description(&self) -> Option<&str> {
        self.text_attribute(keys::DESCRIPTION)
    }

    /// The typed error this value was derived from.
    #[inline]
    pub fn origin(&self) -> Option<&dyn TypedError> {
        self.origin.as_deref()
    }

    #[inline]
    pub fn shared_origin(&self) -> Option<&Arc<dyn TypedError>> {
        self.origin.as_ref()
    }

    /// Recovers the typed error this value was derived from.
    ///
    /// ```
    /// use error_bridge::{FlatError, TypedError};
    /// use std::fmt;
    ///
    /// #[derive(Debug)]
    /// struct Jammed;
    ///
    /// impl fmt::Display for Jammed {
    ///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    ///         f.write_str("jammed")
    ///     }
    /// }
    ///
    /// impl std::error::Error for Jammed {}
    /// impl TypedError for Jammed {}
    ///
    /// let flat = FlatError::from_typed(Jammed);
    /// assert!(flat.downcast_ref::<Jammed>().is_some());
    /// ```
    #[inline]
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: TypedError,
    {
        self.origin()?.downcast_ref::<E>()
    }

    pub(crate) fn text_attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).and_then(AttributeValue::as_text)
    }

    fn origin_describable(&self) -> Option<&dyn DescribableError> {
        self.origin()?.as_describable()
    }

    fn described_or_origin<F>(&self, key: &str, fallback: F) -> Option<String>
    where
        F: FnOnce(&dyn DescribableError) -> Option<String>,
    {
        match self.text_attribute(key) {
            Some(text) => Some(text.to_string()),
            None => self.origin_describable().and_then(fallback),
        }
    }
}

impl fmt::Debug for FlatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlatError")
            .field("domain", &self.domain)
            .field("code", &self.code)
            .field("attributes", &self.attributes)
            .field("origin", &self.origin.as_deref().map(|origin| origin.type_name()))
            .finish()
    }
}

impl Display for FlatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} error {}", self.domain, self.code)?;
        if let Some(description) = self.description() {
            write!(f, ": {}", description)?;
        }
        Ok(())
    }
}

impl PartialEq for FlatError {
    fn eq(&self, other: &Self) -> bool {
        let same_origin = match (&self.origin, &other.origin) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        };
        self.domain == other.domain
            && self.code == other.code
            && self.attributes == other.attributes
            && same_origin
    }
}

impl Eq for FlatError {}

impl Error for FlatError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        let origin = self.origin()?;
        Some(origin.as_error())
    }
}

impl CustomCodedError for FlatError {
    #[inline]
    fn error_domain(&self) -> Domain {
        self.domain.clone()
    }

    #[inline]
    fn error_code(&self) -> i64 {
        self.code
    }

    #[inline]
    fn user_info(&self) -> AttributeMap {
        self.attributes.clone()
    }
}

impl DescribableError for FlatError {
    fn error_description(&self) -> Option<String> {
        self.described_or_origin(keys::DESCRIPTION, |d| d.error_description())
    }

    fn failure_reason(&self) -> Option<String> {
        self.described_or_origin(keys::FAILURE_REASON, |d| d.failure_reason())
    }

    fn recovery_suggestion(&self) -> Option<String> {
        self.described_or_origin(keys::RECOVERY_SUGGESTION, |d| d.recovery_suggestion())
    }

    fn help_anchor(&self) -> Option<String> {
        self.described_or_origin(keys::HELP_ANCHOR, |d| d.help_anchor())
    }
}

impl TypedError for FlatError {
    #[inline]
    fn as_describable(&self) -> Option<&dyn DescribableError> {
        Some(self)
    }

    #[inline]
    fn as_recoverable(&self) -> Option<&dyn RecoverableError> {
        self.origin()?.as_recoverable()
    }

    #[inline]
    fn as_custom_coded(&self) -> Option<&dyn CustomCodedError> {
        Some(self)
    }
}

/// Serializes the domain, the code and every attribute that has a serialized
/// form. Recovery attempters and opaque values are skipped; the origin is
/// never serialized.
#[cfg(feature = "serde")]
impl serde::Serialize for FlatError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        struct Serializable<'a>(&'a AttributeMap);

        impl serde::Serialize for Serializable<'_> {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.collect_map(self.0.iter().filter(|(_, value)| value.is_serializable()))
            }
        }

        let mut state = serializer.serialize_struct("FlatError", 3)?;
        state.serialize_field("domain", &self.domain)?;
        state.serialize_field("code", &self.code)?;
        state.serialize_field("attributes", &Serializable(&self.attributes))?;
        state.end()
    }
}
