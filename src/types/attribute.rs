//! Untyped attribute values carried by flat errors.

use crate::recovery::RecoveryAttempter;
use crate::types::alloc_type::{Arc, BTreeMap, Box, String, ToString, Vec};
use crate::types::FlatError;
use core::any::Any;
use core::fmt;

/// Attribute dictionary of a flat error, keyed by the vocabulary in
/// [`keys`](crate::types::keys) plus any user-info keys.
pub type AttributeMap = BTreeMap<String, AttributeValue>;

/// A single attribute value.
///
/// Common shapes get their own variants so they can be compared, printed and
/// serialized; anything else travels as [`AttributeValue::Opaque`].
///
/// Equality is structural except for `Opaque`, which compares by pointer
/// identity, and `RecoveryAttempter`, which is stateless and always equal.
#[derive(Clone)]
pub enum AttributeValue {
    Text(String),
    Integer(i64),
    Bool(bool),
    TextList(Vec<String>),
    /// A nested flat error, typically the underlying cause.
    Error(Box<FlatError>),
    RecoveryAttempter(RecoveryAttempter),
    Opaque(Arc<dyn Any + Send + Sync>),
}

impl AttributeValue {
    /// Wraps an arbitrary value as an opaque attribute.
    #[inline]
    pub fn opaque<T>(value: T) -> Self
    where
        T: Any + Send + Sync,
    {
        Self::Opaque(Arc::new(value))
    }

    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    #[inline]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_text_list(&self) -> Option<&[String]> {
        match self {
            Self::TextList(items) => Some(items),
            _ => None,
        }
    }

    #[inline]
    pub fn as_error(&self) -> Option<&FlatError> {
        match self {
            Self::Error(error) => Some(error),
            _ => None,
        }
    }

    #[inline]
    pub fn as_recovery_attempter(&self) -> Option<RecoveryAttempter> {
        match self {
            Self::RecoveryAttempter(attempter) => Some(*attempter),
            _ => None,
        }
    }

    /// Returns the opaque payload if it is a `T`.
    pub fn downcast_opaque<T>(&self) -> Option<&T>
    where
        T: Any,
    {
        match self {
            Self::Opaque(value) => value.downcast_ref::<T>(),
            _ => None,
        }
    }

    /// Whether this value has a serialized form.
    #[inline]
    pub fn is_serializable(&self) -> bool {
        match self {
            Self::RecoveryAttempter(_) | Self::Opaque(_) => false,
            Self::Error(error) => error.attributes().values().all(Self::is_serializable),
            _ => true,
        }
    }
}

impl fmt::Debug for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Integer(value) => f.debug_tuple("Integer").field(value).finish(),
            Self::Bool(value) => f.debug_tuple("Bool").field(value).finish(),
            Self::TextList(items) => f.debug_tuple("TextList").field(items).finish(),
            Self::Error(error) => f.debug_tuple("Error").field(error).finish(),
            Self::RecoveryAttempter(_) => f.write_str("RecoveryAttempter"),
            Self::Opaque(_) => f.write_str("Opaque(..)"),
        }
    }
}

impl PartialEq for AttributeValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::TextList(a), Self::TextList(b)) => a == b,
            (Self::Error(a), Self::Error(b)) => a == b,
            (Self::RecoveryAttempter(_), Self::RecoveryAttempter(_)) => true,
            (Self::Opaque(a), Self::Opaque(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Eq for AttributeValue {}

impl From<String> for AttributeValue {
    #[inline]
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for AttributeValue {
    #[inline]
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<i64> for AttributeValue {
    #[inline]
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for AttributeValue {
    #[inline]
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<bool> for AttributeValue {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Vec<String>> for AttributeValue {
    #[inline]
    fn from(items: Vec<String>) -> Self {
        Self::TextList(items)
    }
}

impl From<FlatError> for AttributeValue {
    #[inline]
    fn from(error: FlatError) -> Self {
        Self::Error(Box::new(error))
    }
}

impl From<RecoveryAttempter> for AttributeValue {
    #[inline]
    fn from(attempter: RecoveryAttempter) -> Self {
        Self::RecoveryAttempter(attempter)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for AttributeValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Text(text) => serializer.serialize_str(text),
            Self::Integer(value) => serializer.serialize_i64(*value),
            Self::Bool(value) => serializer.serialize_bool(*value),
            Self::TextList(items) => serializer.collect_seq(items),
            Self::Error(error) => serde::Serialize::serialize(&**error, serializer),
            Self::RecoveryAttempter(_) | Self::Opaque(_) => Err(serde::ser::Error::custom(
                "attribute value has no serialized form",
            )),
        }
    }
}
