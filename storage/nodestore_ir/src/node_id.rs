//! Kind-tagged node identifier.
//!
//! Every interned node is addressed by a 64-bit `NodeId`. The kind lives in
//! the top bits, so the ID spaces of the four kinds are disjoint and a plain
//! integer comparison orders IDs by kind first.

use std::fmt;

/// Numeric part of a [`NodeId`]. Only the low 48 bits are used.
pub type NodeIdValue = u64;

const KIND_SHIFT: u32 = 62;
const LITERAL_TYPE_SHIFT: u32 = 56;
const LITERAL_TYPE_MASK: u64 = 0x3F;
const VALUE_MASK: u64 = (1 << 48) - 1;

/// The four node kinds the store interns.
///
/// Discriminants are the 2-bit kind tag stored in a [`NodeId`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(u8)]
pub enum NodeKind {
    Variable = 0,
    BNode = 1,
    Iri = 2,
    Literal = 3,
}

impl NodeKind {
    /// All kinds, in tag order.
    pub const ALL: [NodeKind; 4] = [
        NodeKind::Variable,
        NodeKind::BNode,
        NodeKind::Iri,
        NodeKind::Literal,
    ];

    /// First value handed out by the allocator of this kind.
    ///
    /// Values below this are reserved for predefined entries.
    #[inline]
    pub const fn min_value(self) -> NodeIdValue {
        match self {
            NodeKind::Iri => NodeId::MIN_IRI_VALUE,
            NodeKind::Literal => NodeId::MIN_LITERAL_VALUE,
            NodeKind::BNode => NodeId::MIN_BNODE_VALUE,
            NodeKind::Variable => NodeId::MIN_VARIABLE_VALUE,
        }
    }

    #[inline]
    const fn from_tag(tag: u64) -> Self {
        match tag & 0b11 {
            0 => NodeKind::Variable,
            1 => NodeKind::BNode,
            2 => NodeKind::Iri,
            _ => NodeKind::Literal,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            NodeKind::Variable => "variable",
            NodeKind::BNode => "blank node",
            NodeKind::Iri => "IRI",
            NodeKind::Literal => "literal",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Datatype class carried in literal IDs.
///
/// Derived from the literal's datatype when that datatype is a predefined
/// IRI. Anything else is `Other`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(u8)]
pub enum LiteralType {
    #[default]
    Other = 0,
    String = 1,
    LangString = 2,
    Boolean = 3,
    Integer = 4,
    Decimal = 5,
    Double = 6,
    Float = 7,
    DateTime = 8,
    Date = 9,
    Int = 10,
    Long = 11,
}

impl LiteralType {
    #[inline]
    const fn from_tag(tag: u64) -> Self {
        match tag {
            1 => LiteralType::String,
            2 => LiteralType::LangString,
            3 => LiteralType::Boolean,
            4 => LiteralType::Integer,
            5 => LiteralType::Decimal,
            6 => LiteralType::Double,
            7 => LiteralType::Float,
            8 => LiteralType::DateTime,
            9 => LiteralType::Date,
            10 => LiteralType::Int,
            11 => LiteralType::Long,
            _ => LiteralType::Other,
        }
    }
}

/// Opaque identifier of an interned node.
///
/// # Layout
/// - Bits 63-62: node kind
/// - Bits 61-56: literal type (literals only, zero otherwise)
/// - Bits 55-48: unused, always zero
/// - Bits 47-0: value
///
/// IDs are never reused. The store hands out values monotonically per kind,
/// starting at [`NodeKind::min_value`].
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct NodeId(u64);

impl NodeId {
    /// Largest value representable in an ID.
    pub const MAX_VALUE: NodeIdValue = VALUE_MASK;

    /// IRI values below 64 are reserved for the predefined IRI table.
    pub const MIN_IRI_VALUE: NodeIdValue = 64;
    pub const MIN_LITERAL_VALUE: NodeIdValue = 1;
    pub const MIN_BNODE_VALUE: NodeIdValue = 1;
    pub const MIN_VARIABLE_VALUE: NodeIdValue = 1;

    /// Create an ID of the given kind. Literal IDs get `LiteralType::Other`.
    ///
    /// `value` must not exceed [`NodeId::MAX_VALUE`]. Debug builds assert
    /// this; release builds keep only the low 48 bits, which yields a
    /// different ID. Use [`NodeId::try_new`] for unchecked input.
    #[inline]
    pub const fn new(kind: NodeKind, value: NodeIdValue) -> Self {
        debug_assert!(value <= VALUE_MASK);
        NodeId(((kind as u64) << KIND_SHIFT) | (value & VALUE_MASK))
    }

    /// Create a literal ID carrying a literal type tag.
    ///
    /// Same range contract as [`NodeId::new`].
    #[inline]
    pub const fn literal(value: NodeIdValue, literal_type: LiteralType) -> Self {
        debug_assert!(value <= VALUE_MASK);
        NodeId(
            ((NodeKind::Literal as u64) << KIND_SHIFT)
                | ((literal_type as u64) << LITERAL_TYPE_SHIFT)
                | (value & VALUE_MASK),
        )
    }

    /// Checked form of [`NodeId::new`]: `None` if `value` does not fit.
    #[inline]
    pub const fn try_new(kind: NodeKind, value: NodeIdValue) -> Option<Self> {
        if value > VALUE_MASK {
            return None;
        }
        Some(Self::new(kind, value))
    }

    #[inline]
    pub const fn iri(value: NodeIdValue) -> Self {
        Self::new(NodeKind::Iri, value)
    }

    #[inline]
    pub const fn bnode(value: NodeIdValue) -> Self {
        Self::new(NodeKind::BNode, value)
    }

    #[inline]
    pub const fn variable(value: NodeIdValue) -> Self {
        Self::new(NodeKind::Variable, value)
    }

    /// Kind tag of this ID.
    #[inline]
    pub const fn kind(self) -> NodeKind {
        NodeKind::from_tag(self.0 >> KIND_SHIFT)
    }

    /// Numeric value within the kind's ID space.
    #[inline]
    pub const fn value(self) -> NodeIdValue {
        self.0 & VALUE_MASK
    }

    /// Literal type tag, or `None` for non-literal IDs.
    #[inline]
    pub const fn literal_type(self) -> Option<LiteralType> {
        match self.kind() {
            NodeKind::Literal => Some(LiteralType::from_tag(
                (self.0 >> LITERAL_TYPE_SHIFT) & LITERAL_TYPE_MASK,
            )),
            _ => None,
        }
    }

    /// Whether the value lies in the kind's reserved (predefined) range.
    #[inline]
    pub const fn is_predefined(self) -> bool {
        self.value() < self.kind().min_value()
    }

    /// Get the raw u64 value.
    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Create from a raw u64 value.
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        NodeId(raw)
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.literal_type() {
            Some(LiteralType::Other) | None => {
                write!(f, "NodeId({}:{})", self.kind(), self.value())
            }
            Some(ty) => write!(f, "NodeId({}:{}, {ty:?})", self.kind(), self.value()),
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.kind(), self.value())
    }
}
