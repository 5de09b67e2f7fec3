//! Node store errors.

use nodestore_ir::{NodeId, NodeKind, PredefinedError};

/// Error returned by node store operations.
///
/// A value that is simply absent is not an error: find-only lookups return
/// `None` instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Erasing nodes is rejected; the store is append-only.
    #[error("erasing {id} is not supported: the node store is append-only")]
    Unsupported { kind: NodeKind, id: NodeId },

    /// The shared region budget cannot hold another record.
    #[error(
        "node region exhausted storing {kind} record: \
         {requested} bytes requested, {used} of {capacity} bytes in use"
    )]
    RegionExhausted {
        kind: NodeKind,
        requested: usize,
        used: usize,
        capacity: usize,
    },

    /// Reserving memory for a record or table entry failed.
    #[error("allocating a {kind} record failed")]
    AllocationFailed { kind: NodeKind },

    /// The kind's allocator has handed out every representable value.
    #[error("{kind} id space exhausted")]
    IdSpaceExhausted { kind: NodeKind },

    /// An ID was routed to the table of another kind.
    #[error("{id} is not a {expected} id")]
    WrongKind { id: NodeId, expected: NodeKind },

    /// An ID of the right kind that this store never issued.
    #[error("{id} was not issued by this store")]
    UnknownId { id: NodeId },

    /// The configured predefined IRI table is invalid.
    #[error(transparent)]
    InvalidPredefined(#[from] PredefinedError),
}

/// Coarse classification of [`StoreError`]s.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorCategory {
    /// Permanently rejected; retrying never helps.
    Unsupported,
    /// Out of region, memory, or ID space. The store is unchanged.
    ResourceExhaustion,
    /// The caller presented an ID this store cannot resolve.
    CallerMisuse,
    /// The store was configured with invalid settings.
    Configuration,
}

impl StoreError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            StoreError::Unsupported { .. } => ErrorCategory::Unsupported,
            StoreError::RegionExhausted { .. }
            | StoreError::AllocationFailed { .. }
            | StoreError::IdSpaceExhausted { .. } => ErrorCategory::ResourceExhaustion,
            StoreError::WrongKind { .. } | StoreError::UnknownId { .. } => {
                ErrorCategory::CallerMisuse
            }
            StoreError::InvalidPredefined(_) => ErrorCategory::Configuration,
        }
    }
}
