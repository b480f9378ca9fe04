//! URL loading and network transport errors.

use crate::macros::define_codes;
use crate::types::{keys, DomainCodedError};

crate::define_family!(
    /// Family marker for URL loading errors.
    pub Url,
    "URLErrorDomain",
    UrlCode
);

/// An error raised while loading a URL.
pub type UrlError = DomainCodedError<Url>;

define_codes! {
    /// Codes of the URL loading domain.
    pub enum UrlCode {
        Unknown = -1,
        Cancelled = -999,
        BadUrl = -1000,
        TimedOut = -1001,
        UnsupportedUrl = -1002,
        CannotFindHost = -1003,
        CannotConnectToHost = -1004,
        NetworkConnectionLost = -1005,
        DnsLookupFailed = -1006,
        HttpTooManyRedirects = -1007,
        ResourceUnavailable = -1008,
        NotConnectedToInternet = -1009,
        RedirectToNonExistentLocation = -1010,
        BadServerResponse = -1011,
        UserCancelledAuthentication = -1012,
        UserAuthenticationRequired = -1013,
        ZeroByteResource = -1014,
        CannotDecodeRawData = -1015,
        CannotDecodeContentData = -1016,
        CannotParseResponse = -1017,
        InternationalRoamingOff = -1018,
        CallIsActive = -1019,
        DataNotAllowed = -1020,
        RequestBodyStreamExhausted = -1021,
        /// Plain-text loads are refused by transport security policy.
        SecureConnectionRequired = -1022,
        FileDoesNotExist = -1100,
        FileIsDirectory = -1101,
        NoPermissionsToReadFile = -1102,
        DataLengthExceedsMaximum = -1103,
        FileOutsideSafeArea = -1104,
        /// The TLS handshake failed.
        SecureConnectionFailed = -1200,
        ServerCertificateHasBadDate = -1201,
        ServerCertificateUntrusted = -1202,
        ServerCertificateHasUnknownRoot = -1203,
        ServerCertificateNotYetValid = -1204,
        ClientCertificateRejected = -1205,
        ClientCertificateRequired = -1206,
        CannotLoadFromNetwork = -2000,
        CannotCreateFile = -3000,
        CannotOpenFile = -3001,
        CannotCloseFile = -3002,
        CannotWriteToFile = -3003,
        CannotRemoveFile = -3004,
        CannotMoveFile = -3005,
        DownloadDecodingFailedMidStream = -3006,
        DownloadDecodingFailedToComplete = -3007,
        BackgroundSessionRequiresSharedContainer = -995,
        BackgroundSessionInUseByAnotherProcess = -996,
        BackgroundSessionWasDisconnected = -997,
    }
}

impl UrlCode {
    /// TLS handshake and certificate failures.
    #[inline]
    pub const fn is_tls_failure(self) -> bool {
        let raw = self.raw();
        raw >= -1206 && raw <= -1200
    }

    /// Host name resolution failures.
    #[inline]
    pub const fn is_dns_failure(self) -> bool {
        matches!(self, Self::CannotFindHost | Self::DnsLookupFailed)
    }

    /// Conditions that may clear on their own.
    #[inline]
    pub const fn is_transient(self) -> bool {
        matches!(
            self,
            Self::TimedOut
                | Self::CannotConnectToHost
                | Self::NetworkConnectionLost
                | Self::DnsLookupFailed
                | Self::ResourceUnavailable
                | Self::NotConnectedToInternet
                | Self::InternationalRoamingOff
                | Self::CallIsActive
                | Self::DataNotAllowed
                | Self::CannotLoadFromNetwork
                | Self::BackgroundSessionWasDisconnected
        )
    }
}

impl DomainCodedError<Url> {
    /// The [`keys::FAILING_URL`] attribute.
    #[inline]
    pub fn failing_url(&self) -> Option<&str> {
        self.attribute(keys::FAILING_URL).and_then(|value| value.as_text())
    }
}
