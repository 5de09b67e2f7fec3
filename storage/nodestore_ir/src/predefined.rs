//! Predefined IRI table.
//!
//! Well-known IRIs occupy the reserved IRI range `1..NodeId::MIN_IRI_VALUE`
//! and are loaded into every store at construction time. The table is plain
//! configuration: a store receives it by value and never consults global
//! state.

use std::fmt;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::{LiteralType, NodeId, NodeKind};

/// One reserved IRI.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PredefinedIri {
    pub id: NodeId,
    pub iri: &'static str,
    /// Literal type of literals using this IRI as their datatype.
    pub literal_type: Option<LiteralType>,
}

impl PredefinedIri {
    pub const fn new(value: u64, iri: &'static str) -> Self {
        PredefinedIri {
            id: NodeId::iri(value),
            iri,
            literal_type: None,
        }
    }

    pub const fn datatype(value: u64, iri: &'static str, literal_type: LiteralType) -> Self {
        PredefinedIri {
            id: NodeId::iri(value),
            iri,
            literal_type: Some(literal_type),
        }
    }
}

pub const XSD_STRING: NodeId = NodeId::iri(1);
pub const RDF_LANG_STRING: NodeId = NodeId::iri(2);
pub const RDF_TYPE: NodeId = NodeId::iri(3);
pub const XSD_BOOLEAN: NodeId = NodeId::iri(4);
pub const XSD_INTEGER: NodeId = NodeId::iri(5);
pub const XSD_DECIMAL: NodeId = NodeId::iri(6);
pub const XSD_DOUBLE: NodeId = NodeId::iri(7);
pub const XSD_FLOAT: NodeId = NodeId::iri(8);
pub const XSD_DATE_TIME: NodeId = NodeId::iri(9);
pub const XSD_DATE: NodeId = NodeId::iri(10);
pub const XSD_INT: NodeId = NodeId::iri(11);
pub const XSD_LONG: NodeId = NodeId::iri(12);

const DEFAULT_IRIS: &[PredefinedIri] = &[
    PredefinedIri::datatype(1, "http://www.w3.org/2001/XMLSchema#string", LiteralType::String),
    PredefinedIri::datatype(
        2,
        "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString",
        LiteralType::LangString,
    ),
    PredefinedIri::new(3, "http://www.w3.org/1999/02/22-rdf-syntax-ns#type"),
    PredefinedIri::datatype(4, "http://www.w3.org/2001/XMLSchema#boolean", LiteralType::Boolean),
    PredefinedIri::datatype(5, "http://www.w3.org/2001/XMLSchema#integer", LiteralType::Integer),
    PredefinedIri::datatype(6, "http://www.w3.org/2001/XMLSchema#decimal", LiteralType::Decimal),
    PredefinedIri::datatype(7, "http://www.w3.org/2001/XMLSchema#double", LiteralType::Double),
    PredefinedIri::datatype(8, "http://www.w3.org/2001/XMLSchema#float", LiteralType::Float),
    PredefinedIri::datatype(9, "http://www.w3.org/2001/XMLSchema#dateTime", LiteralType::DateTime),
    PredefinedIri::datatype(10, "http://www.w3.org/2001/XMLSchema#date", LiteralType::Date),
    PredefinedIri::datatype(11, "http://www.w3.org/2001/XMLSchema#int", LiteralType::Int),
    PredefinedIri::datatype(12, "http://www.w3.org/2001/XMLSchema#long", LiteralType::Long),
    PredefinedIri::new(13, "http://www.w3.org/1999/02/22-rdf-syntax-ns#Property"),
    PredefinedIri::new(14, "http://www.w3.org/1999/02/22-rdf-syntax-ns#first"),
    PredefinedIri::new(15, "http://www.w3.org/1999/02/22-rdf-syntax-ns#rest"),
    PredefinedIri::new(16, "http://www.w3.org/1999/02/22-rdf-syntax-ns#nil"),
    PredefinedIri::new(17, "http://www.w3.org/2000/01/rdf-schema#Class"),
    PredefinedIri::new(18, "http://www.w3.org/2000/01/rdf-schema#label"),
    PredefinedIri::new(19, "http://www.w3.org/2000/01/rdf-schema#subClassOf"),
    PredefinedIri::new(20, "http://www.w3.org/2002/07/owl#sameAs"),
];

/// Error when a custom predefined table violates its invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PredefinedError {
    /// ID is not an IRI ID in the reserved range.
    OutOfRange { id: NodeId, iri: &'static str },
    /// Two entries share an ID.
    DuplicateId { id: NodeId },
    /// Two entries share an IRI.
    DuplicateIri { iri: &'static str },
}

impl fmt::Display for PredefinedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredefinedError::OutOfRange { id, iri } => write!(
                f,
                "predefined IRI <{iri}> has id {id:?}, expected an IRI id in 1..{}",
                NodeId::MIN_IRI_VALUE
            ),
            PredefinedError::DuplicateId { id } => {
                write!(f, "predefined id {id:?} is assigned twice")
            }
            PredefinedError::DuplicateIri { iri } => {
                write!(f, "predefined IRI <{iri}> is listed twice")
            }
        }
    }
}

impl std::error::Error for PredefinedError {}

/// Validated set of predefined IRIs.
#[derive(Clone, Debug)]
pub struct PredefinedIris {
    entries: Vec<PredefinedIri>,
    ids: FxHashMap<&'static str, NodeId>,
    literal_types: FxHashMap<NodeId, LiteralType>,
}

impl PredefinedIris {
    /// Build a table from custom entries, checking that IDs are reserved IRI
    /// IDs and that neither IDs nor IRIs repeat.
    pub fn new(entries: impl IntoIterator<Item = PredefinedIri>) -> Result<Self, PredefinedError> {
        let entries: Vec<PredefinedIri> = entries.into_iter().collect();
        let mut seen_ids = FxHashSet::default();
        let mut seen_iris = FxHashSet::default();
        for entry in &entries {
            if entry.id.kind() != NodeKind::Iri || entry.id.value() == 0 || !entry.id.is_predefined() {
                return Err(PredefinedError::OutOfRange {
                    id: entry.id,
                    iri: entry.iri,
                });
            }
            if !seen_ids.insert(entry.id) {
                return Err(PredefinedError::DuplicateId { id: entry.id });
            }
            if !seen_iris.insert(entry.iri) {
                return Err(PredefinedError::DuplicateIri { iri: entry.iri });
            }
        }
        Ok(Self::from_trusted(entries))
    }

    /// The default XSD/RDF/RDFS/OWL table.
    pub fn rdf_defaults() -> Self {
        Self::from_trusted(DEFAULT_IRIS.to_vec())
    }

    /// A table with no entries.
    pub fn empty() -> Self {
        Self::from_trusted(Vec::new())
    }

    fn from_trusted(entries: Vec<PredefinedIri>) -> Self {
        let ids = entries.iter().map(|entry| (entry.iri, entry.id)).collect();
        let literal_types = entries
            .iter()
            .filter_map(|entry| entry.literal_type.map(|ty| (entry.id, ty)))
            .collect();
        PredefinedIris {
            entries,
            ids,
            literal_types,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &PredefinedIri> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reserved ID of an IRI, if the table lists it.
    pub fn id_of(&self, iri: &str) -> Option<NodeId> {
        self.ids.get(iri).copied()
    }

    /// Literal type for a literal whose datatype is `datatype_id`.
    pub fn literal_type_of(&self, datatype_id: NodeId) -> LiteralType {
        self.literal_types
            .get(&datatype_id)
            .copied()
            .unwrap_or_default()
    }
}

impl Default for PredefinedIris {
    fn default() -> Self {
        Self::rdf_defaults()
    }
}

#[cfg(test)]
mod tests;
