//! Record region: append-only storage for one kind's records.
//!
//! Records are addressed by [`RecordHandle`] offsets instead of pointers, so
//! the forward table stays valid wherever the region's backing memory lives.
//! Each record is reference counted so that the reverse table can key on the
//! same allocation.
//! A [`RegionBudget`] shared by all kinds caps the total bytes the regions
//! may hold.

use std::collections::TryReserveError;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use nodestore_ir::NodeKind;

use crate::StoreError;

/// Offset of a record within its region.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub(crate) struct RecordHandle(u32);

impl RecordHandle {
    #[inline]
    pub(crate) const fn offset(self) -> usize {
        self.0 as usize
    }
}

/// Append-only arena of records.
pub(crate) struct Region<R> {
    records: Vec<Arc<R>>,
}

impl<R> Region<R> {
    pub(crate) fn new() -> Self {
        Region {
            records: Vec::new(),
        }
    }

    /// Handle the next pushed record will get, or `None` once the offset
    /// space is used up.
    pub(crate) fn next_handle(&self) -> Option<RecordHandle> {
        u32::try_from(self.records.len()).ok().map(RecordHandle)
    }

    /// Make room for one record so the following `push` cannot allocate.
    pub(crate) fn try_reserve_one(&mut self) -> Result<(), TryReserveError> {
        self.records.try_reserve(1)
    }

    /// Append a record and return a shared reference to it. Callers obtain
    /// `next_handle` first.
    pub(crate) fn push(&mut self, handle: RecordHandle, record: R) -> Arc<R> {
        debug_assert_eq!(handle.offset(), self.records.len());
        let record = Arc::new(record);
        self.records.push(Arc::clone(&record));
        record
    }

    /// Record at `handle`. Handles only ever come from this region.
    #[inline]
    pub(crate) fn get(&self, handle: RecordHandle) -> &R {
        &self.records[handle.offset()]
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }
}

/// Byte budget shared by every region of a store.
///
/// Claims are lock-free so that inserts into different kinds, each under its
/// own exclusive lock, can charge the budget concurrently.
pub(crate) struct RegionBudget {
    capacity: Option<usize>,
    used: AtomicUsize,
}

impl RegionBudget {
    pub(crate) fn new(capacity: Option<usize>) -> Self {
        RegionBudget {
            capacity,
            used: AtomicUsize::new(0),
        }
    }

    pub(crate) fn used(&self) -> usize {
        self.used.load(Ordering::Acquire)
    }

    pub(crate) fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Reserve `bytes` for a record of `kind`.
    ///
    /// The claim is returned to the budget when dropped unless committed.
    pub(crate) fn claim(&self, kind: NodeKind, bytes: usize) -> Result<BudgetClaim<'_>, StoreError> {
        let result = self
            .used
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |used| {
                let next = used.checked_add(bytes)?;
                match self.capacity {
                    Some(capacity) if next > capacity => None,
                    _ => Some(next),
                }
            });
        match result {
            Ok(_) => Ok(BudgetClaim {
                budget: self,
                bytes,
                committed: false,
            }),
            Err(used) => Err(StoreError::RegionExhausted {
                kind,
                requested: bytes,
                used,
                capacity: self.capacity.unwrap_or(usize::MAX),
            }),
        }
    }

    /// Charge bytes unconditionally. Used while loading predefined records,
    /// where the total is checked once afterwards.
    pub(crate) fn charge(&self, bytes: usize) {
        self.used.fetch_add(bytes, Ordering::AcqRel);
    }
}

/// Pending budget reservation.
#[must_use]
pub(crate) struct BudgetClaim<'a> {
    budget: &'a RegionBudget,
    bytes: usize,
    committed: bool,
}

impl BudgetClaim<'_> {
    /// Keep the reserved bytes charged.
    pub(crate) fn commit(mut self) {
        self.committed = true;
    }
}

impl Drop for BudgetClaim<'_> {
    fn drop(&mut self) {
        if !self.committed {
            self.budget.used.fetch_sub(self.bytes, Ordering::AcqRel);
        }
    }
}

#[cfg(test)]
mod tests;
