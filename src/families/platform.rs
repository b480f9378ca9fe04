//! The platform's baseline error domain.
//!
//! Codes are grouped into numeric ranges by category; the `is_*` predicates
//! test membership in those ranges, so they also classify raw codes the table
//! does not name.

use crate::macros::define_codes;
use crate::types::{keys, DomainCodedError};

crate::define_family!(
    /// Family marker for the platform's baseline domain.
    ///
    /// The runtime computes this domain's attributes itself, so
    /// [`ErrorBridge`](crate::ErrorBridge) never registers a lazy provider
    /// for it by default.
    pub Platform,
    "PlatformErrorDomain",
    PlatformCode
);

/// An error in the platform's baseline domain.
pub type PlatformError = DomainCodedError<Platform>;

define_codes! {
    /// Codes of the platform's baseline domain.
    pub enum PlatformCode {
        /// The file does not exist.
        FileNoSuchFile = 4,
        /// The file could not be locked.
        FileLocking = 255,
        /// Reading failed for an unknown reason.
        FileReadUnknown = 256,
        /// No permission to read the file.
        FileReadNoPermission = 257,
        /// The file name is invalid for reading.
        FileReadInvalidFileName = 258,
        /// The file is corrupt or in an unknown format.
        FileReadCorruptFile = 259,
        /// There is no file to read.
        FileReadNoSuchFile = 260,
        /// The file's contents do not match the requested string encoding.
        FileReadInapplicableStringEncoding = 261,
        /// The URL scheme is not supported for reading.
        FileReadUnsupportedScheme = 262,
        /// The file is too large to read.
        FileReadTooLarge = 263,
        /// The string encoding of the file could not be determined.
        FileReadUnknownStringEncoding = 264,
        /// Writing failed for an unknown reason.
        FileWriteUnknown = 512,
        /// No permission to write the file.
        FileWriteNoPermission = 513,
        /// The file name is invalid for writing.
        FileWriteInvalidFileName = 514,
        /// A file already exists at the destination.
        FileWriteFileExists = 516,
        /// The string cannot be written in the requested encoding.
        FileWriteInapplicableStringEncoding = 517,
        /// The URL scheme is not supported for writing.
        FileWriteUnsupportedScheme = 518,
        /// The volume is out of space.
        FileWriteOutOfSpace = 640,
        /// The volume is read-only.
        FileWriteVolumeReadOnly = 642,
        /// Unmounting failed for an unknown reason.
        FileManagerUnmountUnknown = 768,
        /// The volume is busy and could not be unmounted.
        FileManagerUnmountBusy = 769,
        /// A key-value validation failed.
        KeyValueValidation = 1024,
        /// A value could not be formatted or parsed.
        Formatting = 2048,
        /// The user cancelled the operation.
        UserCancelled = 3072,
        /// The feature is not supported.
        FeatureUnsupported = 3328,
        /// The executable cannot be loaded.
        ExecutableNotLoadable = 3584,
        /// The executable has no slice for this architecture.
        ExecutableArchitectureMismatch = 3585,
        /// The executable needs a different runtime.
        ExecutableRuntimeMismatch = 3586,
        /// The executable failed to load.
        ExecutableLoad = 3587,
        /// The executable failed to link.
        ExecutableLink = 3588,
        /// The property list data is corrupt.
        PropertyListReadCorrupt = 3840,
        /// The property list has an unknown version.
        PropertyListReadUnknownVersion = 3841,
        /// The property list stream failed while reading.
        PropertyListReadStream = 3842,
        /// The property list stream failed while writing.
        PropertyListWriteStream = 3851,
        /// The value cannot be written as a property list.
        PropertyListWriteInvalid = 3852,
        /// The XPC connection was interrupted.
        XpcConnectionInterrupted = 4097,
        /// The XPC connection is invalid.
        XpcConnectionInvalid = 4099,
        /// The XPC reply was invalid.
        XpcConnectionReplyInvalid = 4101,
        /// The cloud file is not available.
        UbiquitousFileUnavailable = 4353,
        /// The cloud file was not uploaded because the quota is exhausted.
        UbiquitousFileNotUploadedDueToQuota = 4354,
        /// The cloud server is not reachable.
        UbiquitousFileUbiquityServerNotAvailable = 4355,
        /// Handing off the user activity failed.
        UserActivityHandoffFailed = 4608,
        /// The user activity connection is unavailable.
        UserActivityConnectionUnavailable = 4609,
        /// The remote application did not respond in time.
        UserActivityRemoteApplicationTimedOut = 4610,
        /// The user activity payload is too large.
        UserActivityHandoffUserInfoTooLarge = 4611,
        /// Archived data is corrupt.
        CoderReadCorrupt = 4864,
        /// An archived value is missing.
        CoderValueNotFound = 4865,
        /// An archived value is invalid.
        CoderInvalidValue = 4866,
    }
}

impl PlatformCode {
    #[inline]
    const fn in_range(self, min: i64, max: i64) -> bool {
        let raw = self.raw();
        raw >= min && raw <= max
    }

    #[inline]
    pub const fn is_file_error(self) -> bool {
        self.in_range(0, 1023)
    }

    #[inline]
    pub const fn is_validation_error(self) -> bool {
        self.in_range(1024, 2047)
    }

    #[inline]
    pub const fn is_formatting_error(self) -> bool {
        self.in_range(2048, 2559)
    }

    #[inline]
    pub const fn is_executable_error(self) -> bool {
        self.in_range(3584, 3839)
    }

    #[inline]
    pub const fn is_property_list_error(self) -> bool {
        self.in_range(3840, 4095)
    }

    #[inline]
    pub const fn is_xpc_connection_error(self) -> bool {
        self.in_range(4096, 4224)
    }

    #[inline]
    pub const fn is_ubiquitous_file_error(self) -> bool {
        self.in_range(4352, 4607)
    }

    #[inline]
    pub const fn is_user_activity_error(self) -> bool {
        self.in_range(4608, 4863)
    }

    #[inline]
    pub const fn is_coder_error(self) -> bool {
        self.in_range(4864, 4991)
    }
}

impl DomainCodedError<Platform> {
    /// The [`keys::STRING_ENCODING`] attribute.
    #[inline]
    pub fn string_encoding(&self) -> Option<i64> {
        self.attribute(keys::STRING_ENCODING).and_then(|value| value.as_integer())
    }
}
