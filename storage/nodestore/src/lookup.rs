//! Lookup-or-insert engine shared by all node kinds.
//!
//! Each kind's tables sit behind one `RwLock`. Lookups take the shared lock
//! only. Inserts drop the shared lock, take the exclusive lock, and probe
//! again before creating anything: another thread may have inserted the same
//! value in between, since the lock is released rather than upgraded.

use nodestore_ir::{NodeId, NodeIdValue};
use parking_lot::RwLock;

use crate::backend::BackendRecord;
use crate::region::RegionBudget;
use crate::tables::KindTables;
use crate::StoreError;

/// Interning sub-store for one node kind.
pub(crate) struct KindStore<R> {
    tables: RwLock<KindTables<R>>,
}

impl<R: BackendRecord> KindStore<R> {
    pub(crate) fn new() -> Self {
        KindStore {
            tables: RwLock::new(KindTables::new()),
        }
    }

    /// Load a predefined record. Only called during construction, before
    /// the store is shared, so no lock is taken.
    pub(crate) fn preload(&mut self, id: NodeId, record: R, budget: &RegionBudget) -> bool {
        self.tables.get_mut().insert_reserved(id, record, budget)
    }

    /// Find the ID of an interned value without ever inserting.
    pub(crate) fn find_id(&self, view: R::View<'_>) -> Option<NodeId> {
        self.tables.read().probe(&view)
    }

    /// Find the ID of a value, interning it first if it is new.
    pub(crate) fn find_or_make_id<'v, F>(
        &self,
        view: R::View<'v>,
        budget: &RegionBudget,
        mint: F,
    ) -> Result<NodeId, StoreError>
    where
        F: FnOnce(NodeIdValue, &R::View<'v>) -> NodeId,
    {
        if let Some(id) = self.find_id(view) {
            tracing::trace!(kind = %R::KIND, ?id, "interned value found");
            return Ok(id);
        }
        self.insert_slow(view, budget, mint)
    }

    /// Exclusive half of `find_or_make_id`: re-probe, then insert.
    fn insert_slow<'v, F>(
        &self,
        view: R::View<'v>,
        budget: &RegionBudget,
        mint: F,
    ) -> Result<NodeId, StoreError>
    where
        F: FnOnce(NodeIdValue, &R::View<'v>) -> NodeId,
    {
        let mut tables = self.tables.write();

        // Double-check after acquiring write lock
        if let Some(id) = tables.probe(&view) {
            tracing::trace!(kind = %R::KIND, ?id, "value interned concurrently");
            return Ok(id);
        }

        match tables.insert(view, budget, mint) {
            Ok(id) => {
                tracing::debug!(kind = %R::KIND, ?id, ?view, "interned new value");
                Ok(id)
            }
            Err(err) => {
                tracing::warn!(kind = %R::KIND, ?view, %err, "failed to intern value");
                Err(err)
            }
        }
    }

    /// Copy of the record stored under `id`.
    pub(crate) fn resolve(&self, id: NodeId) -> Result<R, StoreError> {
        if id.kind() != R::KIND {
            return Err(StoreError::WrongKind {
                id,
                expected: R::KIND,
            });
        }
        self.tables
            .read()
            .get(id)
            .cloned()
            .ok_or(StoreError::UnknownId { id })
    }

    pub(crate) fn contains(&self, id: NodeId) -> bool {
        id.kind() == R::KIND && self.tables.read().get(id).is_some()
    }

    pub(crate) fn len(&self) -> usize {
        self.tables.read().len()
    }

    pub(crate) fn records_allocated(&self) -> usize {
        self.tables.read().records_allocated()
    }

    /// Snapshot of all IDs in ascending order.
    pub(crate) fn ids(&self) -> Vec<NodeId> {
        self.tables.read().ids().collect()
    }

    #[cfg(test)]
    pub(crate) fn check_consistency(&self) {
        self.tables.read().check_consistency();
    }
}

#[cfg(test)]
mod tests;
