//! Nodestore - concurrent interning store for RDF nodes
//!
//! Assigns compact, stable [`NodeId`]s to IRIs, literals, blank nodes and
//! variables. Structurally equal values always get the same ID, including
//! when many threads intern the same new value at once.
//!
//! # Layout
//!
//! - `backend`: immutable records owning one interned value each
//! - `region`: append-only record arenas addressed by offset handles, and the
//!   byte budget they share
//! - `tables`: the forward (ID → record) and reverse (record → ID) tables of
//!   one kind
//! - `value_key`: value-ordered keys of the reverse table
//! - `lookup`: the lookup-or-insert engine, one `RwLock` per kind
//! - `storage`: the [`NodeStorageBackend`] facade over the four kinds
//!
//! # Example
//!
//! ```
//! use nodestore::{NodeStorage, NodeStorageBackend};
//! use nodestore_ir::{predefined::XSD_INTEGER, LiteralView};
//!
//! let store = NodeStorageBackend::new();
//! let answer = LiteralView::typed("42", XSD_INTEGER);
//! let id = store.find_or_make_literal_id(answer).unwrap();
//! assert_eq!(store.find_literal_id(answer), Some(id));
//! assert_eq!(store.resolve_literal(id).unwrap().lexical_form(), "42");
//! ```

mod backend;
mod config;
mod error;
mod id_alloc;
mod lookup;
mod region;
mod storage;
mod tables;
mod value_key;

pub use backend::{BNodeBackend, BackendRecord, IriBackend, LiteralBackend, VariableBackend};
pub use config::StoreConfig;
pub use error::{ErrorCategory, StoreError};
pub use nodestore_ir::{
    BNodeView, IriView, LiteralType, LiteralView, NodeId, NodeKind, PredefinedIri, PredefinedIris,
    VariableView,
};
pub use storage::{NodeStorage, NodeStorageBackend, SharedNodeStorage, StoreStats};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=nodestore=debug` or `RUST_LOG=nodestore=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
