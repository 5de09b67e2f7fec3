//! Keys of the reverse (value to ID) table.
//!
//! The reverse table is a `BTreeMap` ordered by record value. Stored keys
//! share their record with the region. Probes search with a borrowed view
//! and never build a record. Both sides borrow as `dyn ValueKey<R>`, which
//! orders by view.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::sync::Arc;

use crate::backend::BackendRecord;

/// Anything that can present itself as a view of a record kind.
pub(crate) trait ValueKey<R: BackendRecord> {
    fn key(&self) -> R::View<'_>;
}

fn cmp_keys<'k, R: BackendRecord>(
    a: &'k (dyn ValueKey<R> + 'k),
    b: &'k (dyn ValueKey<R> + 'k),
) -> Ordering {
    a.key().cmp(&b.key())
}

impl<R: BackendRecord> PartialEq for dyn ValueKey<R> + '_ {
    fn eq(&self, other: &Self) -> bool {
        cmp_keys(self, other).is_eq()
    }
}

impl<R: BackendRecord> Eq for dyn ValueKey<R> + '_ {}

impl<R: BackendRecord> PartialOrd for dyn ValueKey<R> + '_ {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<R: BackendRecord> Ord for dyn ValueKey<R> + '_ {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_keys(self, other)
    }
}

/// Key held by the reverse table.
pub(crate) struct StoredKey<R>(Arc<R>);

impl<R: BackendRecord> StoredKey<R> {
    pub(crate) fn new(record: Arc<R>) -> Self {
        StoredKey(record)
    }

    #[cfg(test)]
    pub(crate) fn record(&self) -> &R {
        &self.0
    }
}

impl<R: BackendRecord> ValueKey<R> for StoredKey<R> {
    fn key(&self) -> R::View<'_> {
        self.0.as_view()
    }
}

impl<R: BackendRecord> PartialEq for StoredKey<R> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<R: BackendRecord> Eq for StoredKey<R> {}

impl<R: BackendRecord> PartialOrd for StoredKey<R> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<R: BackendRecord> Ord for StoredKey<R> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<'a, R: BackendRecord> Borrow<dyn ValueKey<R> + 'a> for StoredKey<R> {
    fn borrow(&self) -> &(dyn ValueKey<R> + 'a) {
        self
    }
}

/// Search key wrapping a caller's view.
pub(crate) struct ViewKey<'v, R: BackendRecord>(R::View<'v>);

impl<'v, R: BackendRecord> ViewKey<'v, R> {
    pub(crate) fn new(view: R::View<'v>) -> Self {
        ViewKey(view)
    }
}

impl<R: BackendRecord> ValueKey<R> for ViewKey<'_, R> {
    fn key(&self) -> R::View<'_> {
        R::reborrow(self.0)
    }
}
