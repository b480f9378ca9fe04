//! Typed errors bound to a single domain with an enumerated code.

use crate::materialize::{flat_code, flat_domain, materialize};
use crate::recovery::contract_violation;
use crate::traits::{CustomCodedError, DescribableError, RecoverableError, TypedError};
use crate::types::alloc_type::String;
use crate::types::{keys, AttributeMap, AttributeValue, BridgeError, Domain, FlatError};
use core::error::Error;
use core::fmt::{self, Debug, Display};
use core::marker::PhantomData;

/// An open enumeration of integer codes.
///
/// Decoding is total: raw values without a named variant survive as an
/// "other" value and encode back to the same integer.
pub trait ErrorCode: Copy + Eq + Debug + Send + Sync + 'static {
    fn from_raw(raw: i64) -> Self;

    fn raw(self) -> i64;

    /// Symbolic name of a named code.
    #[inline]
    fn name(self) -> Option<&'static str> {
        None
    }
}

/// Binds a domain string to its code enumeration.
///
/// # Examples
///
/// ```
/// use error_bridge::{define_family, Domain, DomainCodedError, DomainFamily, ErrorCode};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct WidgetCode(i64);
///
/// impl ErrorCode for WidgetCode {
///     fn from_raw(raw: i64) -> Self { WidgetCode(raw) }
///     fn raw(self) -> i64 { self.0 }
/// }
///
/// define_family!(Widget, "net.example.widget", WidgetCode);
///
/// let err = DomainCodedError::<Widget>::new(WidgetCode(7));
/// assert_eq!(err.flat().domain(), "net.example.widget");
/// assert_eq!(err.code(), WidgetCode(7));
/// ```
pub trait DomainFamily: Send + Sync + 'static {
    const DOMAIN: Domain;

    type Code: ErrorCode;
}

/// An error in domain `F::DOMAIN` with a code of type `F::Code`.
///
/// Wraps a [`FlatError`] and decodes its integer code on demand. Building
/// one from a flat error of a different domain yields `None`; bridging is a
/// partial function and callers commonly probe several families in turn.
///
/// Equality is the structural equality of the wrapped flat errors.
pub struct DomainCodedError<F: DomainFamily> {
    flat: FlatError,
    family: PhantomData<fn() -> F>,
}

impl<F: DomainFamily> DomainCodedError<F> {
    #[inline]
    pub fn new(code: F::Code) -> Self {
        Self::with_attributes(code, AttributeMap::new())
    }

    #[inline]
    pub fn with_attributes(code: F::Code, attributes: AttributeMap) -> Self {
        Self::wrap(FlatError::with_attributes(F::DOMAIN, code.raw(), attributes))
    }

    /// Adds one attribute while the error is still being built.
    #[inline]
    pub fn with_attribute<K, V>(self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<AttributeValue>,
    {
        Self::wrap(self.flat.with_attribute(key, value))
    }

    /// Wraps `flat` if it belongs to this family's domain.
    #[inline]
    pub fn from_flat(flat: FlatError) -> Option<Self> {
        (*flat.domain() == F::DOMAIN).then(|| Self::wrap(flat))
    }

    /// Wraps `flat`, which the caller guarantees belongs to this domain.
    ///
    /// # Panics
    ///
    /// Panics on a domain mismatch; that is a contract violation by the caller.
    #[track_caller]
    pub fn require(flat: FlatError) -> Self {
        if *flat.domain() != F::DOMAIN {
            contract_violation(&BridgeError::DomainMismatch {
                expected: F::DOMAIN,
                actual: flat.domain().clone(),
            });
        }
        Self::wrap(flat)
    }

    /// Bridges an arbitrary typed error into this family, if it belongs to it.
    ///
    /// Accepts values of this family, flat errors of this domain, and any other
    /// typed error whose declared domain is this one.
    pub fn bridge_from(error: &dyn TypedError) -> Option<Self> {
        if let Some(coded) = error.downcast_ref::<Self>() {
            return Some(coded.clone());
        }
        if let Some(flat) = error.downcast_ref::<FlatError>() {
            return Self::from_flat(flat.clone());
        }
        let domain = flat_domain(error);
        if domain != F::DOMAIN {
            return None;
        }
        Some(Self::wrap(FlatError::with_attributes(domain, flat_code(error), materialize(error))))
    }

    /// Returns `true` if `error` belongs to this family and carries `code`.
    ///
    /// ```
    /// use error_bridge::families::{PosixCode, PosixError};
    /// use error_bridge::TypedError;
    ///
    /// let err = PosixError::new(PosixCode::ENOENT);
    /// let erased: &dyn TypedError = &err;
    /// assert!(PosixError::matches(PosixCode::ENOENT, erased));
    /// assert!(!PosixError::matches(PosixCode::EACCES, erased));
    /// ```
    #[inline]
    pub fn matches(code: F::Code, error: &dyn TypedError) -> bool {
        Self::bridge_from(error).is_some_and(|coded| coded.code() == code)
    }

    /// Decodes the code. Unknown raw values round-trip unchanged.
    #[inline]
    pub fn code(&self) -> F::Code {
        F::Code::from_raw(self.flat.code())
    }

    #[inline]
    pub fn raw_code(&self) -> i64 {
        self.flat.code()
    }

    #[inline]
    pub fn flat(&self) -> &FlatError {
        &self.flat
    }

    #[inline]
    pub fn into_flat(self) -> FlatError {
        self.flat
    }

    #[inline]
    pub fn attribute(&self, key: &str) -> Option<&AttributeValue> {
        self.flat.attribute(key)
    }

    /// The [`keys::FILE_PATH`] attribute.
    #[inline]
    pub fn file_path(&self) -> Option<&str> {
        self.flat.text_attribute(keys::FILE_PATH)
    }

    /// The [`keys::URL`] attribute.
    #[inline]
    pub fn url(&self) -> Option<&str> {
        self.flat.text_attribute(keys::URL)
    }

    /// The [`keys::UNDERLYING_ERROR`] attribute when it holds a flat error.
    #[inline]
    pub fn underlying(&self) -> Option<&FlatError> {
        self.attribute(keys::UNDERLYING_ERROR).and_then(AttributeValue::as_error)
    }

    #[inline]
    fn wrap(flat: FlatError) -> Self {
        Self { flat, family: PhantomData }
    }
}

impl<F: DomainFamily> Clone for DomainCodedError<F> {
    #[inline]
    fn clone(&self) -> Self {
        Self::wrap(self.flat.clone())
    }
}

impl<F: DomainFamily> PartialEq for DomainCodedError<F> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.flat == other.flat
    }
}

impl<F: DomainFamily> Eq for DomainCodedError<F> {}

impl<F: DomainFamily> Debug for DomainCodedError<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DomainCodedError")
            .field("domain", &F::DOMAIN)
            .field("code", &self.code())
            .field("attributes", self.flat.attributes())
            .finish()
    }
}

impl<F: DomainFamily> Display for DomainCodedError<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code().name() {
            Some(name) => write!(f, "{} error {} ({})", F::DOMAIN, name, self.raw_code())?,
            None => write!(f, "{} error {}", F::DOMAIN, self.raw_code())?,
        }
        if let Some(description) = self.flat.description() {
            write!(f, ": {}", description)?;
        }
        Ok(())
    }
}

impl<F: DomainFamily> Error for DomainCodedError<F> {
    #[inline]
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.flat.source()
    }
}

impl<F: DomainFamily> CustomCodedError for DomainCodedError<F> {
    #[inline]
    fn error_domain(&self) -> Domain {
        F::DOMAIN
    }

    #[inline]
    fn error_code(&self) -> i64 {
        self.raw_code()
    }

    #[inline]
    fn user_info(&self) -> AttributeMap {
        self.flat.attributes().clone()
    }
}

impl<F: DomainFamily> TypedError for DomainCodedError<F> {
    #[inline]
    fn as_describable(&self) -> Option<&dyn DescribableError> {
        Some(&self.flat)
    }

    #[inline]
    fn as_recoverable(&self) -> Option<&dyn RecoverableError> {
        self.flat.as_recoverable()
    }

    #[inline]
    fn as_custom_coded(&self) -> Option<&dyn CustomCodedError> {
        Some(self)
    }
}

impl<F: DomainFamily> From<DomainCodedError<F>> for FlatError {
    #[inline]
    fn from(error: DomainCodedError<F>) -> Self {
        error.flat
    }
}

impl<F: DomainFamily> TryFrom<FlatError> for DomainCodedError<F> {
    /// The flat error is handed back unchanged on a domain mismatch.
    type Error = FlatError;

    #[inline]
    fn try_from(flat: FlatError) -> Result<Self, Self::Error> {
        if *flat.domain() == F::DOMAIN {
            Ok(Self::wrap(flat))
        } else {
            Err(flat)
        }
    }
}

/// Declares a [`DomainFamily`] marker type.
///
/// `define_family!(Name, "domain", CodeType)` creates a unit struct `Name`
/// implementing [`DomainFamily`] with the given domain and code type.
#[macro_export]
macro_rules! define_family {
    ($(#[$meta:meta])* $vis:vis $name:ident, $domain:literal, $code:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::types::DomainFamily for $name {
            const DOMAIN: $crate::types::Domain = $crate::types::Domain::from_static($domain);

            type Code = $code;
        }
    };
}
