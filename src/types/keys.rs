//! The fixed attribute-key vocabulary of flat errors.
//!
//! The first seven keys are computed from a typed error's capabilities. The
//! remaining ones are conventional user-info keys read by typed accessors on
//! [`DomainCodedError`](crate::DomainCodedError).

/// Localized description of the error.
pub const DESCRIPTION: &str = "description";
/// Why the operation failed.
pub const FAILURE_REASON: &str = "failure-reason";
/// What the user can do about it.
pub const RECOVERY_SUGGESTION: &str = "recovery-suggestion";
/// Anchor into the help system.
pub const HELP_ANCHOR: &str = "help-anchor";
/// Ordered recovery option labels.
pub const RECOVERY_OPTIONS: &str = "recovery-options";
/// Handle used by the runtime to call back into recovery.
pub const RECOVERY_ATTEMPTER: &str = "recovery-attempter";
/// The error that caused this one.
pub const UNDERLYING_ERROR: &str = "underlying-error";

/// Filesystem path involved in the failure.
pub const FILE_PATH: &str = "file-path";
/// URL involved in the failure.
pub const URL: &str = "url";
/// URL whose load failed.
pub const FAILING_URL: &str = "failing-url";
/// String encoding involved in the failure.
pub const STRING_ENCODING: &str = "string-encoding";

/// Keys filled from [`DescribableError`](crate::DescribableError).
pub const DESCRIPTIVE: &[&str] = &[DESCRIPTION, FAILURE_REASON, RECOVERY_SUGGESTION, HELP_ANCHOR];

/// Keys a lazy provider can compute from a typed error, in resolution order.
pub const COMPUTED: &[&str] = &[
    DESCRIPTION,
    FAILURE_REASON,
    RECOVERY_SUGGESTION,
    HELP_ANCHOR,
    RECOVERY_OPTIONS,
    RECOVERY_ATTEMPTER,
    UNDERLYING_ERROR,
];
