//! Forward and reverse tables of one node kind.
//!
//! - Forward: `NodeId -> RecordHandle`, ordered by ID.
//! - Reverse: record *value* `-> NodeId`, a `BTreeMap` whose keys share the
//!   region's records. Probes search it with the caller's view.
//!
//! Both tables, the region, and the ID allocator are always mutated together
//! under the kind's exclusive lock. Inserts perform every fallible step
//! before touching any of them.

use std::collections::BTreeMap;

use nodestore_ir::{NodeId, NodeIdValue};

use crate::backend::BackendRecord;
use crate::id_alloc::IdAllocator;
use crate::region::{RecordHandle, Region, RegionBudget};
use crate::value_key::{StoredKey, ValueKey, ViewKey};
use crate::StoreError;

pub(crate) struct KindTables<R> {
    region: Region<R>,
    forward: BTreeMap<NodeId, RecordHandle>,
    reverse: BTreeMap<StoredKey<R>, NodeId>,
    ids: IdAllocator,
}

impl<R: BackendRecord> KindTables<R> {
    pub(crate) fn new() -> Self {
        KindTables {
            region: Region::new(),
            forward: BTreeMap::new(),
            reverse: BTreeMap::new(),
            ids: IdAllocator::new(R::KIND),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_allocator(ids: IdAllocator) -> Self {
        KindTables {
            ids,
            ..Self::new()
        }
    }

    /// Look up a value in the reverse table.
    pub(crate) fn probe(&self, view: &R::View<'_>) -> Option<NodeId> {
        let key: ViewKey<'_, R> = ViewKey::new(*view);
        self.reverse.get(&key as &dyn ValueKey<R>).copied()
    }

    /// Record stored under `id`.
    pub(crate) fn get(&self, id: NodeId) -> Option<&R> {
        self.forward
            .get(&id)
            .map(|&handle| self.region.get(handle))
    }

    /// Number of interned values.
    pub(crate) fn len(&self) -> usize {
        self.forward.len()
    }

    /// Number of records allocated in the region.
    pub(crate) fn records_allocated(&self) -> usize {
        self.region.len()
    }

    /// All IDs in ascending order.
    pub(crate) fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.forward.keys().copied()
    }

    /// Insert a value that `probe` reported absent.
    ///
    /// `mint` turns the allocator's next value into the full ID. On error
    /// nothing has been inserted and no ID has been consumed.
    pub(crate) fn insert<'v, F>(
        &mut self,
        view: R::View<'v>,
        budget: &RegionBudget,
        mint: F,
    ) -> Result<NodeId, StoreError>
    where
        F: FnOnce(NodeIdValue, &R::View<'v>) -> NodeId,
    {
        let value = self.ids.peek()?;
        let handle = self
            .region
            .next_handle()
            .ok_or(StoreError::AllocationFailed { kind: R::KIND })?;
        let claim = budget.claim(R::KIND, R::footprint_of(&view))?;
        self.region
            .try_reserve_one()
            .map_err(|_| StoreError::AllocationFailed { kind: R::KIND })?;

        // Nothing below can fail.
        let id = mint(value, &view);
        debug_assert_eq!(id.kind(), R::KIND);
        debug_assert_eq!(id.value(), value);

        let record = self.region.push(handle, R::from_view(view));
        self.reverse.insert(StoredKey::new(record), id);
        self.forward.insert(id, handle);
        self.ids.advance();
        claim.commit();
        Ok(id)
    }

    /// Insert a predefined record at its reserved ID, bypassing the
    /// allocator. Returns `false` if the ID or value is already present.
    pub(crate) fn insert_reserved(&mut self, id: NodeId, record: R, budget: &RegionBudget) -> bool {
        debug_assert_eq!(id.kind(), R::KIND);
        if self.forward.contains_key(&id) {
            return false;
        }
        if self.probe(&record.as_view()).is_some() {
            return false;
        }
        let Some(handle) = self.region.next_handle() else {
            return false;
        };
        budget.charge(record.footprint());
        let record = self.region.push(handle, record);
        self.reverse.insert(StoredKey::new(record), id);
        self.forward.insert(id, handle);
        true
    }

    /// Check that forward and reverse tables describe the same bijection.
    #[cfg(test)]
    pub(crate) fn check_consistency(&self) {
        assert_eq!(self.forward.len(), self.reverse.len());
        assert_eq!(self.forward.len(), self.region.len());
        let records: Vec<&R> = self.reverse.keys().map(StoredKey::record).collect();
        for pair in records.windows(2) {
            assert!(pair[0] < pair[1], "reverse table out of order: {pair:?}");
        }
        for (key, id) in &self.reverse {
            let handle = self.forward.get(id).copied();
            assert!(handle.is_some(), "{id:?} missing from forward table");
            if let Some(handle) = handle {
                // Both tables reach the same allocation.
                assert!(std::ptr::eq(self.region.get(handle), key.record()));
            }
        }
    }
}

#[cfg(test)]
mod tests;
