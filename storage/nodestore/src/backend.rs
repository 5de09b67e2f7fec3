//! Backend records: the store's owned copies of interned values.
//!
//! Records are built once, when a value is first interned, and never change
//! afterwards. Each record orders its fields exactly like the matching view
//! in `nodestore_ir`, so comparing a record with a view and comparing two
//! records agree.

use std::fmt;
use std::mem;

use nodestore_ir::{BNodeView, IriView, LiteralView, NodeId, NodeKind, VariableView};

/// Behaviour shared by the four record kinds.
///
/// The lookup engine is written once against this trait and instantiated
/// per kind.
pub trait BackendRecord: Ord + Clone + fmt::Debug + Send + Sync + 'static {
    /// Kind of node this record stores.
    const KIND: NodeKind;

    /// Borrowed view of this record kind. Views order exactly like records.
    type View<'a>: Copy + Ord + fmt::Debug
    where
        Self: 'a;

    /// Copy a view into a new record.
    fn from_view(view: Self::View<'_>) -> Self;

    /// Borrow the record as a view.
    fn as_view(&self) -> Self::View<'_>;

    /// Shorten a view's lifetime.
    fn reborrow<'s, 'l: 's>(view: Self::View<'l>) -> Self::View<'s>;

    /// Bytes a record built from `view` occupies in the region.
    fn footprint_of(view: &Self::View<'_>) -> usize;

    /// Bytes this record occupies in the region.
    fn footprint(&self) -> usize {
        Self::footprint_of(&self.as_view())
    }
}

/// Stored IRI.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct IriBackend {
    identifier: Box<str>,
}

impl IriBackend {
    pub fn new(identifier: &str) -> Self {
        IriBackend {
            identifier: identifier.into(),
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

impl From<IriView<'_>> for IriBackend {
    fn from(view: IriView<'_>) -> Self {
        Self::new(view.identifier)
    }
}

impl BackendRecord for IriBackend {
    const KIND: NodeKind = NodeKind::Iri;
    type View<'a> = IriView<'a>
    where
        Self: 'a;

    fn from_view(view: IriView<'_>) -> Self {
        view.into()
    }

    fn as_view(&self) -> IriView<'_> {
        IriView::new(&self.identifier)
    }

    fn reborrow<'s, 'l: 's>(view: IriView<'l>) -> IriView<'s> {
        view
    }

    fn footprint_of(view: &IriView<'_>) -> usize {
        mem::size_of::<Self>() + view.identifier.len()
    }
}

/// Stored literal.
///
/// Identity covers all three fields: the same lexical form with another
/// datatype or language tag is a different literal.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct LiteralBackend {
    lexical_form: Box<str>,
    datatype_id: NodeId,
    language_tag: Option<Box<str>>,
}

impl LiteralBackend {
    pub fn new(lexical_form: &str, datatype_id: NodeId, language_tag: Option<&str>) -> Self {
        LiteralBackend {
            lexical_form: lexical_form.into(),
            datatype_id,
            language_tag: language_tag.filter(|tag| !tag.is_empty()).map(Into::into),
        }
    }

    pub fn lexical_form(&self) -> &str {
        &self.lexical_form
    }

    pub fn datatype_id(&self) -> NodeId {
        self.datatype_id
    }

    pub fn language_tag(&self) -> Option<&str> {
        self.language_tag.as_deref()
    }

    /// Lexical form wrapped in double quotes, with `"` and `\` escaped.
    pub fn quote_lexical(&self) -> String {
        let mut quoted = String::with_capacity(self.lexical_form.len() + 2);
        quoted.push('"');
        for c in self.lexical_form.chars() {
            match c {
                '"' => quoted.push_str("\\\""),
                '\\' => quoted.push_str("\\\\"),
                '\n' => quoted.push_str("\\n"),
                '\r' => quoted.push_str("\\r"),
                _ => quoted.push(c),
            }
        }
        quoted.push('"');
        quoted
    }
}

impl From<LiteralView<'_>> for LiteralBackend {
    fn from(view: LiteralView<'_>) -> Self {
        Self::new(view.lexical_form, view.datatype_id, view.language_tag)
    }
}

impl BackendRecord for LiteralBackend {
    const KIND: NodeKind = NodeKind::Literal;
    type View<'a> = LiteralView<'a>
    where
        Self: 'a;

    fn from_view(view: LiteralView<'_>) -> Self {
        view.into()
    }

    fn as_view(&self) -> LiteralView<'_> {
        LiteralView {
            lexical_form: &self.lexical_form,
            datatype_id: self.datatype_id,
            language_tag: self.language_tag.as_deref(),
        }
    }

    fn reborrow<'s, 'l: 's>(view: LiteralView<'l>) -> LiteralView<'s> {
        view
    }

    fn footprint_of(view: &LiteralView<'_>) -> usize {
        mem::size_of::<Self>() + view.lexical_form.len() + view.language_tag.map_or(0, str::len)
    }
}

/// Stored blank node label.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct BNodeBackend {
    identifier: Box<str>,
}

impl BNodeBackend {
    pub fn new(identifier: &str) -> Self {
        BNodeBackend {
            identifier: identifier.into(),
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

impl From<BNodeView<'_>> for BNodeBackend {
    fn from(view: BNodeView<'_>) -> Self {
        Self::new(view.identifier)
    }
}

impl BackendRecord for BNodeBackend {
    const KIND: NodeKind = NodeKind::BNode;
    type View<'a> = BNodeView<'a>
    where
        Self: 'a;

    fn from_view(view: BNodeView<'_>) -> Self {
        view.into()
    }

    fn as_view(&self) -> BNodeView<'_> {
        BNodeView::new(&self.identifier)
    }

    fn reborrow<'s, 'l: 's>(view: BNodeView<'l>) -> BNodeView<'s> {
        view
    }

    fn footprint_of(view: &BNodeView<'_>) -> usize {
        mem::size_of::<Self>() + view.identifier.len()
    }
}

/// Stored variable name.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct VariableBackend {
    name: Box<str>,
}

impl VariableBackend {
    pub fn new(name: &str) -> Self {
        VariableBackend { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl From<VariableView<'_>> for VariableBackend {
    fn from(view: VariableView<'_>) -> Self {
        Self::new(view.name)
    }
}

impl BackendRecord for VariableBackend {
    const KIND: NodeKind = NodeKind::Variable;
    type View<'a> = VariableView<'a>
    where
        Self: 'a;

    fn from_view(view: VariableView<'_>) -> Self {
        view.into()
    }

    fn as_view(&self) -> VariableView<'_> {
        VariableView::new(&self.name)
    }

    fn reborrow<'s, 'l: 's>(view: VariableView<'l>) -> VariableView<'s> {
        view
    }

    fn footprint_of(view: &VariableView<'_>) -> usize {
        mem::size_of::<Self>() + view.name.len()
    }
}
