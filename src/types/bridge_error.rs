use crate::types::Domain;
use core::fmt::{self, Display};

/// Failures reported by the fallible bridging entry points.
///
/// Bridging mismatches are not errors (they yield `None`); this type only
/// covers malformed input and the contract violations that the panicking entry
/// points report before aborting.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BridgeError {
    /// A domain string was empty.
    EmptyDomain,
    /// Recovery was requested on a flat error that carries no recoverable
    /// typed error.
    NotRecoverable { domain: Domain, code: i64 },
    /// A flat error was routed to a family of another domain.
    DomainMismatch { expected: Domain, actual: Domain },
}

impl Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDomain => f.write_str("error domain must not be empty"),
            Self::NotRecoverable { domain, code } => {
                write!(f, "{} error {} does not support recovery", domain, code)
            },
            Self::DomainMismatch { expected, actual } => {
                write!(f, "expected an error in domain {}, got {}", expected, actual)
            },
        }
    }
}

impl core::error::Error for BridgeError {}
