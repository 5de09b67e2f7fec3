//! Per-kind monotonic ID allocator.

use nodestore_ir::{NodeId, NodeIdValue, NodeKind};

use crate::StoreError;

/// Hands out the values of one kind's open ID range in increasing order.
///
/// Only mutated under the owning kind's exclusive lock. Values are never
/// handed out twice.
pub(crate) struct IdAllocator {
    kind: NodeKind,
    next: NodeIdValue,
}

impl IdAllocator {
    pub(crate) fn new(kind: NodeKind) -> Self {
        IdAllocator {
            kind,
            next: kind.min_value(),
        }
    }

    #[cfg(test)]
    pub(crate) fn starting_at(kind: NodeKind, next: NodeIdValue) -> Self {
        IdAllocator { kind, next }
    }

    /// Value the next `advance` will consume.
    pub(crate) fn peek(&self) -> Result<NodeIdValue, StoreError> {
        if self.next > NodeId::MAX_VALUE {
            return Err(StoreError::IdSpaceExhausted { kind: self.kind });
        }
        Ok(self.next)
    }

    /// Consume the peeked value.
    pub(crate) fn advance(&mut self) {
        debug_assert!(self.next <= NodeId::MAX_VALUE);
        self.next += 1;
    }
}
