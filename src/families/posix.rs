//! POSIX `errno` values.
//!
//! The numbering follows the Darwin `errno.h`, which is what the flat form of
//! this domain carries regardless of the host the bridge runs on.

use crate::macros::define_codes;
use crate::types::DomainCodedError;

crate::define_family!(
    /// Family marker for POSIX `errno` errors.
    pub Posix,
    "POSIXErrorDomain",
    PosixCode
);

/// An error carrying a POSIX `errno` value.
pub type PosixError = DomainCodedError<Posix>;

define_codes! {
    /// POSIX `errno` codes.
    #[allow(clippy::upper_case_acronyms)]
    pub enum PosixCode {
        EPERM = 1,
        ENOENT = 2,
        ESRCH = 3,
        EINTR = 4,
        EIO = 5,
        ENXIO = 6,
        E2BIG = 7,
        ENOEXEC = 8,
        EBADF = 9,
        ECHILD = 10,
        EDEADLK = 11,
        ENOMEM = 12,
        EACCES = 13,
        EFAULT = 14,
        ENOTBLK = 15,
        EBUSY = 16,
        EEXIST = 17,
        EXDEV = 18,
        ENODEV = 19,
        ENOTDIR = 20,
        EISDIR = 21,
        EINVAL = 22,
        ENFILE = 23,
        EMFILE = 24,
        ENOTTY = 25,
        ETXTBSY = 26,
        EFBIG = 27,
        ENOSPC = 28,
        ESPIPE = 29,
        EROFS = 30,
        EMLINK = 31,
        EPIPE = 32,
        EDOM = 33,
        ERANGE = 34,
        /// Resource temporarily unavailable. Also spelled [`PosixCode::EWOULDBLOCK`].
        EAGAIN = 35,
        EINPROGRESS = 36,
        EALREADY = 37,
        ENOTSOCK = 38,
        EDESTADDRREQ = 39,
        EMSGSIZE = 40,
        EPROTOTYPE = 41,
        ENOPROTOOPT = 42,
        EPROTONOSUPPORT = 43,
        ESOCKTNOSUPPORT = 44,
        ENOTSUP = 45,
        EPFNOSUPPORT = 46,
        EAFNOSUPPORT = 47,
        EADDRINUSE = 48,
        EADDRNOTAVAIL = 49,
        ENETDOWN = 50,
        ENETUNREACH = 51,
        ENETRESET = 52,
        ECONNABORTED = 53,
        ECONNRESET = 54,
        ENOBUFS = 55,
        EISCONN = 56,
        ENOTCONN = 57,
        ESHUTDOWN = 58,
        ETOOMANYREFS = 59,
        ETIMEDOUT = 60,
        ECONNREFUSED = 61,
        ELOOP = 62,
        ENAMETOOLONG = 63,
        EHOSTDOWN = 64,
        EHOSTUNREACH = 65,
        ENOTEMPTY = 66,
        EPROCLIM = 67,
        EUSERS = 68,
        EDQUOT = 69,
        ESTALE = 70,
        EREMOTE = 71,
        EBADRPC = 72,
        ERPCMISMATCH = 73,
        EPROGUNAVAIL = 74,
        EPROGMISMATCH = 75,
        EPROCUNAVAIL = 76,
        ENOLCK = 77,
        ENOSYS = 78,
        EFTYPE = 79,
        EAUTH = 80,
        ENEEDAUTH = 81,
        EPWROFF = 82,
        EDEVERR = 83,
        EOVERFLOW = 84,
        EBADEXEC = 85,
        EBADARCH = 86,
        ESHLIBVERS = 87,
        EBADMACHO = 88,
        ECANCELED = 89,
        EIDRM = 90,
        ENOMSG = 91,
        EILSEQ = 92,
        ENOATTR = 93,
        EBADMSG = 94,
        EMULTIHOP = 95,
        ENODATA = 96,
        ENOLINK = 97,
        ENOSR = 98,
        ENOSTR = 99,
        EPROTO = 100,
        ETIME = 101,
        ENOPOLICY = 103,
        ENOTRECOVERABLE = 104,
        EOWNERDEAD = 105,
        EQFULL = 106,
    }
}

#[allow(clippy::upper_case_acronyms)]
impl PosixCode {
    pub const EWOULDBLOCK: Self = Self::EAGAIN;
    pub const EOPNOTSUPP: Self = Self::ENOTSUP;

    /// Conditions that may clear on their own.
    #[inline]
    pub const fn is_transient(self) -> bool {
        matches!(
            self,
            Self::EAGAIN
                | Self::EINTR
                | Self::EBUSY
                | Self::ETIMEDOUT
                | Self::ECONNRESET
                | Self::ECONNREFUSED
                | Self::ECONNABORTED
                | Self::ENETDOWN
                | Self::ENETUNREACH
                | Self::EHOSTUNREACH
                | Self::ENOBUFS
        )
    }

    /// Network and socket errors.
    #[inline]
    pub const fn is_network_error(self) -> bool {
        let raw = self.raw();
        raw >= 36 && raw <= 65
    }

    /// Maps an I/O error kind onto its closest `errno`.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_bridge::families::PosixCode;
    /// use std::io::ErrorKind;
    ///
    /// assert_eq!(PosixCode::from_io_kind(ErrorKind::NotFound), Some(PosixCode::ENOENT));
    /// assert_eq!(PosixCode::from_io_kind(ErrorKind::Other), None);
    /// ```
    #[cfg(feature = "std")]
    pub fn from_io_kind(kind: std::io::ErrorKind) -> Option<Self> {
        use std::io::ErrorKind;

        let code = match kind {
            ErrorKind::NotFound => Self::ENOENT,
            ErrorKind::PermissionDenied => Self::EACCES,
            ErrorKind::ConnectionRefused => Self::ECONNREFUSED,
            ErrorKind::ConnectionReset => Self::ECONNRESET,
            ErrorKind::ConnectionAborted => Self::ECONNABORTED,
            ErrorKind::NotConnected => Self::ENOTCONN,
            ErrorKind::AddrInUse => Self::EADDRINUSE,
            ErrorKind::AddrNotAvailable => Self::EADDRNOTAVAIL,
            ErrorKind::BrokenPipe => Self::EPIPE,
            ErrorKind::AlreadyExists => Self::EEXIST,
            ErrorKind::WouldBlock => Self::EAGAIN,
            ErrorKind::InvalidInput => Self::EINVAL,
            ErrorKind::TimedOut => Self::ETIMEDOUT,
            ErrorKind::Interrupted => Self::EINTR,
            ErrorKind::Unsupported => Self::ENOTSUP,
            ErrorKind::OutOfMemory => Self::ENOMEM,
            _ => return None,
        };
        Some(code)
    }
}

#[cfg(feature = "std")]
impl DomainCodedError<Posix> {
    /// Bridges an I/O error, preferring its raw OS code over its kind.
    ///
    /// Raw codes are only taken as-is on Apple targets, where the host `errno`
    /// numbering is the table's. Elsewhere the error kind is mapped instead.
    /// The I/O error's message becomes the description.
    pub fn from_io(error: &std::io::Error) -> Option<Self> {
        let code = match host_errno(error) {
            Some(code) => code,
            None => PosixCode::from_io_kind(error.kind())?,
        };
        Some(Self::new(code).with_attribute(crate::types::keys::DESCRIPTION, error.to_string()))
    }
}

#[cfg(all(feature = "std", target_vendor = "apple"))]
fn host_errno(error: &std::io::Error) -> Option<PosixCode> {
    error.raw_os_error().map(|raw| PosixCode::from_raw(i64::from(raw)))
}

#[cfg(all(feature = "std", not(target_vendor = "apple")))]
fn host_errno(_error: &std::io::Error) -> Option<PosixCode> {
    None
}
