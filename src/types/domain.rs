//! Error domains: the namespacing strings that scope integer codes.

use crate::types::alloc_type::{Cow, String};
use crate::types::BridgeError;
use core::borrow::Borrow;
use core::fmt::{self, Display};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A non-empty string naming the family an error code belongs to.
///
/// Static domains are built with [`Domain::from_static`], which rejects an
/// empty name at compile time when used in a `const`. Domains arriving from
/// the outside are validated with [`Domain::new`].
///
/// # Examples
///
/// ```
/// use error_bridge::Domain;
///
/// const WIDGET: Domain = Domain::from_static("net.example.widget");
/// assert_eq!(WIDGET.as_str(), "net.example.widget");
///
/// assert!(Domain::new("").is_err());
/// assert_eq!(Domain::new("net.example.widget").unwrap(), WIDGET);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Domain(Cow<'static, str>);

impl Domain {
    /// Creates a domain from a static string.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty. In a `const` context this is a compile error.
    #[inline]
    pub const fn from_static(name: &'static str) -> Self {
        assert!(!name.is_empty(), "error domain must not be empty");
        Self(Cow::Borrowed(name))
    }

    /// Creates a domain from a runtime string, rejecting empty names.
    pub fn new<S>(name: S) -> Result<Self, BridgeError>
    where
        S: Into<String>,
    {
        let name = name.into();
        if name.is_empty() {
            return Err(BridgeError::EmptyDomain);
        }
        Ok(Self(Cow::Owned(name)))
    }

    /// Returns the domain as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Domain {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Domain {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for Domain {
    #[inline]
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for Domain {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Domain {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl TryFrom<String> for Domain {
    type Error = BridgeError;

    #[inline]
    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::new(name)
    }
}

impl TryFrom<&str> for Domain {
    type Error = BridgeError;

    #[inline]
    fn try_from(name: &str) -> Result<Self, Self::Error> {
        Self::new(name)
    }
}

impl From<Domain> for String {
    #[inline]
    fn from(domain: Domain) -> Self {
        domain.0.into_owned()
    }
}
