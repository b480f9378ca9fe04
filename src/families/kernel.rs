//! Kernel return codes.

use crate::macros::define_codes;
use crate::types::DomainCodedError;

crate::define_family!(
    /// Family marker for kernel return codes.
    pub Kernel,
    "KernelErrorDomain",
    KernelCode
);

/// An error carrying a kernel return code.
pub type KernelError = DomainCodedError<Kernel>;

define_codes! {
    /// Kernel return codes.
    pub enum KernelCode {
        Success = 0,
        InvalidAddress = 1,
        ProtectionFailure = 2,
        NoSpace = 3,
        InvalidArgument = 4,
        Failure = 5,
        ResourceShortage = 6,
        NotReceiver = 7,
        NoAccess = 8,
        MemoryFailure = 9,
        MemoryError = 10,
        AlreadyInSet = 11,
        NotInSet = 12,
        NameExists = 13,
        Aborted = 14,
        InvalidName = 15,
        InvalidTask = 16,
        InvalidRight = 17,
        InvalidValue = 18,
        UserReferencesOverflow = 19,
        InvalidCapability = 20,
        RightExists = 21,
        InvalidHost = 22,
        MemoryPresent = 23,
        MemoryDataUnavailable = 24,
        MemoryRestartCopy = 25,
        InvalidProcessorSet = 26,
        PolicyLimit = 27,
        InvalidPolicy = 28,
        InvalidObject = 29,
        AlreadyWaiting = 30,
        DefaultSet = 31,
        ExceptionProtected = 32,
        InvalidLedger = 33,
        InvalidMemoryControl = 34,
        InvalidSecurity = 35,
        NotDepressed = 36,
        Terminated = 37,
        LockSetDestroyed = 38,
        LockUnstable = 39,
        LockOwned = 40,
        LockOwnedSelf = 41,
        SemaphoreDestroyed = 42,
        RpcServerTerminated = 43,
        RpcTerminateOrphan = 44,
        RpcContinueOrphan = 45,
        NotSupported = 46,
        NodeDown = 47,
        NotWaiting = 48,
        OperationTimedOut = 49,
        CodesignError = 50,
        PolicyStatic = 51,
        InsufficientBufferSize = 52,
    }
}

impl KernelCode {
    /// Conditions that may clear on their own.
    #[inline]
    pub const fn is_transient(self) -> bool {
        matches!(self, Self::ResourceShortage | Self::Aborted | Self::OperationTimedOut)
    }

    #[inline]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}
