//! Nodestore IR - identifiers and views shared by the node store and its callers
//!
//! This crate contains the vocabulary the RDF term layer and the node store
//! use to talk to each other:
//! - `NodeId` for kind-tagged, totally ordered node identifiers
//! - `NodeKind` and `LiteralType` tags
//! - Borrowed views (`IriView`, `LiteralView`, `BNodeView`, `VariableView`)
//! - The predefined IRI table loaded into every store
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: every node is referenced by a `NodeId`, never by
//!   its content
//! - **Views In, Views Out**: callers hand the store borrowed views and get
//!   owned copies back, never references into store tables

mod node_id;
pub mod predefined;
mod view;

pub use node_id::{LiteralType, NodeId, NodeIdValue, NodeKind};
pub use predefined::{PredefinedError, PredefinedIri, PredefinedIris};
pub use view::{BNodeView, IriView, LiteralView, VariableView};
