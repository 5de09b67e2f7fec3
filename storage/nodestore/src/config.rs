//! Store configuration.

use nodestore_ir::{PredefinedIri, PredefinedIris};

use crate::StoreError;

/// Settings for a new [`NodeStorageBackend`](crate::NodeStorageBackend).
///
/// The default uses the RDF/XSD predefined IRI table and an unbounded region.
#[derive(Clone, Debug, Default)]
pub struct StoreConfig {
    /// IRIs loaded at their reserved IDs when the store is created.
    pub predefined_iris: PredefinedIris,
    /// Total bytes all record regions may hold. `None` means unbounded.
    pub region_capacity: Option<usize>,
}

impl StoreConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_predefined_iris(mut self, predefined_iris: PredefinedIris) -> Self {
        self.predefined_iris = predefined_iris;
        self
    }

    /// Replace the predefined table with custom entries, validating them.
    pub fn with_predefined_entries(
        self,
        entries: impl IntoIterator<Item = PredefinedIri>,
    ) -> Result<Self, StoreError> {
        Ok(self.with_predefined_iris(PredefinedIris::new(entries)?))
    }

    #[must_use]
    pub fn with_region_capacity(mut self, bytes: usize) -> Self {
        self.region_capacity = Some(bytes);
        self
    }
}
