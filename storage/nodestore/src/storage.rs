//! Node storage facade.
//!
//! [`NodeStorageBackend`] composes one interning sub-store per node kind and
//! routes every request to the sub-store of the view's or ID's kind. Kinds
//! are fully independent: no operation ever holds two kinds' locks.

use std::ops::Deref;
use std::sync::Arc;

use nodestore_ir::{
    BNodeView, IriView, LiteralView, NodeId, NodeKind, PredefinedIris, VariableView,
};

use crate::backend::{BNodeBackend, BackendRecord, IriBackend, LiteralBackend, VariableBackend};
use crate::lookup::KindStore;
use crate::region::RegionBudget;
use crate::{StoreConfig, StoreError};

/// Interface the RDF term layer uses to intern and resolve nodes.
///
/// `find_or_make_*` never reports a value as missing; it fails only when the
/// store runs out of resources. `find_*_id` never mutates the store.
/// `resolve_*` expects IDs this store issued for the matching kind.
pub trait NodeStorage: Send + Sync {
    fn find_or_make_iri_id(&self, view: IriView<'_>) -> Result<NodeId, StoreError>;
    fn find_or_make_literal_id(&self, view: LiteralView<'_>) -> Result<NodeId, StoreError>;
    fn find_or_make_bnode_id(&self, view: BNodeView<'_>) -> Result<NodeId, StoreError>;
    fn find_or_make_variable_id(&self, view: VariableView<'_>) -> Result<NodeId, StoreError>;

    fn find_iri_id(&self, view: IriView<'_>) -> Option<NodeId>;
    fn find_literal_id(&self, view: LiteralView<'_>) -> Option<NodeId>;
    fn find_bnode_id(&self, view: BNodeView<'_>) -> Option<NodeId>;
    fn find_variable_id(&self, view: VariableView<'_>) -> Option<NodeId>;

    fn resolve_iri(&self, id: NodeId) -> Result<IriBackend, StoreError>;
    fn resolve_literal(&self, id: NodeId) -> Result<LiteralBackend, StoreError>;
    fn resolve_bnode(&self, id: NodeId) -> Result<BNodeBackend, StoreError>;
    fn resolve_variable(&self, id: NodeId) -> Result<VariableBackend, StoreError>;

    fn erase_iri(&self, id: NodeId) -> Result<(), StoreError>;
    fn erase_literal(&self, id: NodeId) -> Result<(), StoreError>;
    fn erase_bnode(&self, id: NodeId) -> Result<(), StoreError>;
    fn erase_variable(&self, id: NodeId) -> Result<(), StoreError>;
}

/// Point-in-time counts of a store's contents.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct StoreStats {
    pub iris: usize,
    pub literals: usize,
    pub bnodes: usize,
    pub variables: usize,
    /// Records constructed across all regions, predefined ones included.
    pub records_allocated: usize,
    /// Bytes charged against the region budget.
    pub region_bytes: usize,
    pub region_capacity: Option<usize>,
}

impl StoreStats {
    /// Interned values of every kind.
    pub fn total(&self) -> usize {
        self.iris + self.literals + self.bnodes + self.variables
    }
}

/// Thread-safe, append-only node store.
///
/// Predefined IRIs are answered from the predefined table without locking.
///
/// # Thread Safety
/// Each kind's tables sit behind their own `RwLock`. Lookups of existing
/// values only take the shared lock, so they run concurrently with each
/// other and with inserts into other kinds.
///
/// # Deletion
/// Not supported. Every `erase_*` call fails with
/// [`StoreError::Unsupported`] and leaves the store unchanged.
pub struct NodeStorageBackend {
    iris: KindStore<IriBackend>,
    literals: KindStore<LiteralBackend>,
    bnodes: KindStore<BNodeBackend>,
    variables: KindStore<VariableBackend>,
    budget: RegionBudget,
    predefined: PredefinedIris,
}

impl NodeStorageBackend {
    /// Create a store with the default predefined IRIs and no region limit.
    pub fn new() -> Self {
        Self::build(StoreConfig::default())
    }

    /// Create a store from explicit settings.
    ///
    /// Fails if the predefined IRIs alone exceed the region capacity.
    pub fn with_config(config: StoreConfig) -> Result<Self, StoreError> {
        let store = Self::build(config);
        if let Some(capacity) = store.budget.capacity() {
            let used = store.budget.used();
            if used > capacity {
                return Err(StoreError::RegionExhausted {
                    kind: NodeKind::Iri,
                    requested: used,
                    used,
                    capacity,
                });
            }
        }
        Ok(store)
    }

    fn build(config: StoreConfig) -> Self {
        let budget = RegionBudget::new(config.region_capacity);
        let mut iris = KindStore::new();
        for entry in config.predefined_iris.iter() {
            let inserted = iris.preload(entry.id, IriBackend::new(entry.iri), &budget);
            debug_assert!(inserted, "predefined IRI <{}> rejected", entry.iri);
        }
        tracing::debug!(
            count = config.predefined_iris.len(),
            bytes = budget.used(),
            "loaded predefined IRIs"
        );

        NodeStorageBackend {
            iris,
            literals: KindStore::new(),
            bnodes: KindStore::new(),
            variables: KindStore::new(),
            budget,
            predefined: config.predefined_iris,
        }
    }

    /// The predefined IRI table this store was built with.
    pub fn predefined(&self) -> &PredefinedIris {
        &self.predefined
    }

    /// Number of interned values of one kind.
    pub fn len(&self, kind: NodeKind) -> usize {
        match kind {
            NodeKind::Iri => self.iris.len(),
            NodeKind::Literal => self.literals.len(),
            NodeKind::BNode => self.bnodes.len(),
            NodeKind::Variable => self.variables.len(),
        }
    }

    /// All IDs of one kind, ascending.
    pub fn ids(&self, kind: NodeKind) -> Vec<NodeId> {
        match kind {
            NodeKind::Iri => self.iris.ids(),
            NodeKind::Literal => self.literals.ids(),
            NodeKind::BNode => self.bnodes.ids(),
            NodeKind::Variable => self.variables.ids(),
        }
    }

    /// Whether `id` was issued by this store, routed by the kind it carries.
    pub fn contains(&self, id: NodeId) -> bool {
        match id.kind() {
            NodeKind::Iri => self.iris.contains(id),
            NodeKind::Literal => self.literals.contains(id),
            NodeKind::BNode => self.bnodes.contains(id),
            NodeKind::Variable => self.variables.contains(id),
        }
    }

    pub fn stats(&self) -> StoreStats {
        StoreStats {
            iris: self.iris.len(),
            literals: self.literals.len(),
            bnodes: self.bnodes.len(),
            variables: self.variables.len(),
            records_allocated: self.iris.records_allocated()
                + self.literals.records_allocated()
                + self.bnodes.records_allocated()
                + self.variables.records_allocated(),
            region_bytes: self.budget.used(),
            region_capacity: self.budget.capacity(),
        }
    }

    fn reject_erase<R: BackendRecord>(id: NodeId) -> Result<(), StoreError> {
        tracing::debug!(kind = %R::KIND, ?id, "rejected erase on append-only store");
        Err(StoreError::Unsupported { kind: R::KIND, id })
    }
}

impl Default for NodeStorageBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeStorage for NodeStorageBackend {
    fn find_or_make_iri_id(&self, view: IriView<'_>) -> Result<NodeId, StoreError> {
        if let Some(id) = self.predefined.id_of(view.identifier) {
            return Ok(id);
        }
        self.iris
            .find_or_make_id(view, &self.budget, |value, _| NodeId::iri(value))
    }

    fn find_or_make_literal_id(&self, view: LiteralView<'_>) -> Result<NodeId, StoreError> {
        self.literals
            .find_or_make_id(view.normalized(), &self.budget, |value, view| {
                NodeId::literal(value, self.predefined.literal_type_of(view.datatype_id))
            })
    }

    fn find_or_make_bnode_id(&self, view: BNodeView<'_>) -> Result<NodeId, StoreError> {
        self.bnodes
            .find_or_make_id(view, &self.budget, |value, _| NodeId::bnode(value))
    }

    fn find_or_make_variable_id(&self, view: VariableView<'_>) -> Result<NodeId, StoreError> {
        self.variables
            .find_or_make_id(view, &self.budget, |value, _| NodeId::variable(value))
    }

    fn find_iri_id(&self, view: IriView<'_>) -> Option<NodeId> {
        self.predefined
            .id_of(view.identifier)
            .or_else(|| self.iris.find_id(view))
    }

    fn find_literal_id(&self, view: LiteralView<'_>) -> Option<NodeId> {
        self.literals.find_id(view.normalized())
    }

    fn find_bnode_id(&self, view: BNodeView<'_>) -> Option<NodeId> {
        self.bnodes.find_id(view)
    }

    fn find_variable_id(&self, view: VariableView<'_>) -> Option<NodeId> {
        self.variables.find_id(view)
    }

    fn resolve_iri(&self, id: NodeId) -> Result<IriBackend, StoreError> {
        self.iris.resolve(id)
    }

    fn resolve_literal(&self, id: NodeId) -> Result<LiteralBackend, StoreError> {
        self.literals.resolve(id)
    }

    fn resolve_bnode(&self, id: NodeId) -> Result<BNodeBackend, StoreError> {
        self.bnodes.resolve(id)
    }

    fn resolve_variable(&self, id: NodeId) -> Result<VariableBackend, StoreError> {
        self.variables.resolve(id)
    }

    fn erase_iri(&self, id: NodeId) -> Result<(), StoreError> {
        Self::reject_erase::<IriBackend>(id)
    }

    fn erase_literal(&self, id: NodeId) -> Result<(), StoreError> {
        Self::reject_erase::<LiteralBackend>(id)
    }

    fn erase_bnode(&self, id: NodeId) -> Result<(), StoreError> {
        Self::reject_erase::<BNodeBackend>(id)
    }

    fn erase_variable(&self, id: NodeId) -> Result<(), StoreError> {
        Self::reject_erase::<VariableBackend>(id)
    }
}

/// Shared node store for use across threads and components.
///
/// Cloning is cheap and every clone addresses the same store.
#[derive(Clone)]
pub struct SharedNodeStorage(Arc<NodeStorageBackend>);

impl SharedNodeStorage {
    /// Create a shared store with default settings.
    pub fn new() -> Self {
        SharedNodeStorage(Arc::new(NodeStorageBackend::new()))
    }
}

impl Default for SharedNodeStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl From<NodeStorageBackend> for SharedNodeStorage {
    fn from(backend: NodeStorageBackend) -> Self {
        SharedNodeStorage(Arc::new(backend))
    }
}

impl Deref for SharedNodeStorage {
    type Target = NodeStorageBackend;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
