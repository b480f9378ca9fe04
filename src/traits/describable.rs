use crate::types::alloc_type::String;

/// Opt-in descriptive text for a typed error.
///
/// Every accessor defaults to `None`. Absent text is left out of the flat
/// attribute map entirely; it is never stored as an empty string.
pub trait DescribableError {
    /// A full sentence describing the error.
    #[inline]
    fn error_description(&self) -> Option<String> {
        None
    }

    #[inline]
    fn failure_reason(&self) -> Option<String> {
        None
    }

    #[inline]
    fn recovery_suggestion(&self) -> Option<String> {
        None
    }

    #[inline]
    fn help_anchor(&self) -> Option<String> {
        None
    }
}
