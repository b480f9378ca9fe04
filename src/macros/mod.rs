//! Macros for declaring bridgeable errors and code tables.
//!
//! - [`macro@crate::impl_typed_error`] - Implements [`TypedError`](crate::TypedError)
//!   for a type and wires up the capability traits it already implements.
//!
//! Code tables for the built-in families are generated by a crate-internal
//! macro that produces open enumerations: every named code plus an `Other`
//! variant carrying any raw value the table does not know.

/// Implements [`TypedError`](crate::TypedError) for a type, exposing the listed
/// capabilities.
///
/// Capabilities are `describable`, `recoverable` and `custom_coded`; the type
/// must implement the matching trait. With no list, only the base capability
/// is implemented.
///
/// # Examples
///
/// ```
/// use error_bridge::{impl_typed_error, materialize, CustomCodedError, DescribableError, Domain};
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
///     fn error_description(&self) -> Option<String> {
///         Some("widget jammed".to_string())
///     }
/// }
///
/// impl CustomCodedError for Jammed {
///     fn error_domain(&self) -> Domain {
///         Domain::from_static("net.example.widget")
///     }
///
///     fn error_code(&self) -> i64 {
///         7
///     }
/// }
///
/// impl_typed_error!(Jammed: describable, custom_coded);
///
/// assert_eq!(materialize(&Jammed)["description"].as_text(), Some("widget jammed"));
/// ```
#[macro_export]
macro_rules! impl_typed_error {
    (@capability describable) => {
        #[inline]
        fn as_describable(
            &self,
        ) -> ::core::option::Option<&dyn $crate::traits::DescribableError> {
            ::core::option::Option::Some(self)
        }
    };
    (@capability recoverable) => {
        #[inline]
        fn as_recoverable(
            &self,
        ) -> ::core::option::Option<&dyn $crate::traits::RecoverableError> {
            ::core::option::Option::Some(self)
        }
    };
    (@capability custom_coded) => {
        #[inline]
        fn as_custom_coded(
            &self,
        ) -> ::core::option::Option<&dyn $crate::traits::CustomCodedError> {
            ::core::option::Option::Some(self)
        }
    };
    ($type:ty) => {
        impl $crate::traits::TypedError for $type {}
    };
    ($type:ty: $($capability:ident),+ $(,)?) => {
        impl $crate::traits::TypedError for $type {
            $( $crate::impl_typed_error!(@capability $capability); )+
        }
    };
}

/// Declares an open code enumeration and its conversions.
macro_rules! define_codes {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $value:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(from = "i64", into = "i64"))]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
            /// A raw code with no named variant.
            Other(i64),
        }

        impl $name {
            /// Every named code, in table order.
            pub const KNOWN: &'static [Self] = &[$(Self::$variant),+];

            /// Decodes a raw code. Unknown values become `Other`.
            #[inline]
            pub const fn from_raw(raw: i64) -> Self {
                match raw {
                    $( $value => Self::$variant, )+
                    other => Self::Other(other),
                }
            }

            #[inline]
            pub const fn raw(self) -> i64 {
                match self {
                    $( Self::$variant => $value, )+
                    Self::Other(raw) => raw,
                }
            }

            /// Symbolic name, or `None` for `Other`.
            #[inline]
            pub const fn name(self) -> ::core::option::Option<&'static str> {
                match self {
                    $( Self::$variant => ::core::option::Option::Some(stringify!($variant)), )+
                    Self::Other(_) => ::core::option::Option::None,
                }
            }

            /// Whether this is one of the named codes.
            #[inline]
            pub const fn is_known(self) -> bool {
                !matches!(self, Self::Other(_))
            }
        }

        impl $crate::types::ErrorCode for $name {
            #[inline]
            fn from_raw(raw: i64) -> Self {
                Self::from_raw(raw)
            }

            #[inline]
            fn raw(self) -> i64 {
                Self::raw(self)
            }

            #[inline]
            fn name(self) -> ::core::option::Option<&'static str> {
                Self::name(self)
            }
        }

        impl ::core::convert::From<i64> for $name {
            #[inline]
            fn from(raw: i64) -> Self {
                Self::from_raw(raw)
            }
        }

        impl ::core::convert::From<$name> for i64 {
            #[inline]
            fn from(code: $name) -> Self {
                code.raw()
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                match self.name() {
                    ::core::option::Option::Some(name) => f.write_str(name),
                    ::core::option::Option::None => write!(f, "{}", self.raw()),
                }
            }
        }
    };
}

pub(crate) use define_codes;
