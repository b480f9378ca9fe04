//! Attribute materialization: typed error to flat attribute map.
//!
//! [`materialize`] computes every attribute up front. [`lookup_attribute`]
//! computes exactly one key and is what lazy providers call when the runtime
//! asks for that key.
//!
//! Precedence is the same in both: user info from [`CustomCodedError`] is
//! seeded first, and computed keys only fill in what it left out.
//!
//! [`CustomCodedError`]: crate::traits::CustomCodedError

use crate::recovery::RecoveryAttempter;
use crate::traits::{DescribableError, TypedError};
use crate::types::alloc_type::{String, ToString};
use crate::types::{keys, AttributeMap, AttributeValue, Domain, FlatError};
use core::error::Error;

/// Code given to typed errors that do not declare one.
pub const DEFAULT_CODE: i64 = 1;

/// Domain of a typed error: its declared domain, or its type name.
pub fn flat_domain(error: &dyn TypedError) -> Domain {
    match error.as_custom_coded() {
        Some(coded) => coded.error_domain(),
        None => Domain::from_static(error.type_name()),
    }
}

/// Code of a typed error: its declared code, or [`DEFAULT_CODE`].
pub fn flat_code(error: &dyn TypedError) -> i64 {
    error.as_custom_coded().map_or(DEFAULT_CODE, |coded| coded.error_code())
}

/// Computes the full attribute map of a typed error.
///
/// A typed error with no optional capabilities yields an empty map. Absent
/// descriptive text produces no key at all.
///
/// # Examples
///
/// ```
/// use error_bridge::{keys, materialize, DescribableError, TypedError};
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
///
/// impl DescribableError for Jammed {
///     fn failure_reason(&self) -> Option<String> {
///         Some("a gear slipped".to_string())
///     }
/// }
///
/// impl TypedError for Jammed {
///     fn as_describable(&self) -> Option<&dyn DescribableError> {
///         Some(self)
///     }
/// }
///
/// let attributes = materialize(&Jammed);
/// assert_eq!(attributes.len(), 1);
/// assert_eq!(attributes[keys::FAILURE_REASON].as_text(), Some("a gear slipped"));
/// assert!(!attributes.contains_key(keys::DESCRIPTION));
/// ```
#[inline]
pub fn materialize(error: &dyn TypedError) -> AttributeMap {
    materialize_with(error, false)
}

/// Like [`materialize`], also recording the error's `source()` under
/// [`keys::UNDERLYING_ERROR`].
#[inline]
pub fn materialize_with_underlying(error: &dyn TypedError) -> AttributeMap {
    materialize_with(error, true)
}

pub(crate) fn materialize_with(error: &dyn TypedError, include_underlying: bool) -> AttributeMap {
    let mut attributes = error.as_custom_coded().map(|coded| coded.user_info()).unwrap_or_default();

    if let Some(describable) = error.as_describable() {
        for &key in keys::DESCRIPTIVE {
            if let Some(text) = describable_text(describable, key) {
                attributes.entry(key.to_string()).or_insert(AttributeValue::Text(text));
            }
        }
    }

    if let Some(recoverable) = error.as_recoverable() {
        let options = recoverable.recovery_options().into_vec();
        attributes
            .entry(keys::RECOVERY_OPTIONS.to_string())
            .or_insert(AttributeValue::TextList(options));
        attributes
            .entry(keys::RECOVERY_ATTEMPTER.to_string())
            .or_insert(AttributeValue::RecoveryAttempter(RecoveryAttempter));
    }

    if include_underlying {
        if let Some(underlying) = underlying_value(error) {
            attributes.entry(keys::UNDERLYING_ERROR.to_string()).or_insert(underlying);
        }
    }

    attributes
}

/// Computes a single attribute of a typed error.
///
/// Returns the user-info entry for `key` when one exists, otherwise the
/// computed value for a vocabulary key, otherwise `None`.
pub fn lookup_attribute(error: &dyn TypedError, key: &str) -> Option<AttributeValue> {
    if let Some(value) = error.as_custom_coded().and_then(|coded| coded.user_info().remove(key)) {
        return Some(value);
    }

    match key {
        keys::DESCRIPTION | keys::FAILURE_REASON | keys::RECOVERY_SUGGESTION | keys::HELP_ANCHOR => {
            describable_text(error.as_describable()?, key).map(AttributeValue::Text)
        },
        keys::RECOVERY_OPTIONS => {
            let options = error.as_recoverable()?.recovery_options().into_vec();
            Some(AttributeValue::TextList(options))
        },
        keys::RECOVERY_ATTEMPTER => {
            error.as_recoverable().map(|_| AttributeValue::RecoveryAttempter(RecoveryAttempter))
        },
        keys::UNDERLYING_ERROR => underlying_value(error),
        _ => None,
    }
}

fn describable_text(describable: &dyn DescribableError, key: &str) -> Option<String> {
    match key {
        keys::DESCRIPTION => describable.error_description(),
        keys::FAILURE_REASON => describable.failure_reason(),
        keys::RECOVERY_SUGGESTION => describable.recovery_suggestion(),
        keys::HELP_ANCHOR => describable.help_anchor(),
        _ => None,
    }
}

fn underlying_value(error: &dyn TypedError) -> Option<AttributeValue> {
    let source = error.as_error().source()?;
    Some(match source.downcast_ref::<FlatError>() {
        Some(flat) => AttributeValue::from(flat.clone()),
        None => AttributeValue::Text(source.to_string()),
    })
}
