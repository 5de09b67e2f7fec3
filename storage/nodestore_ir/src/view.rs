//! Borrowed node views.
//!
//! A view describes the value a caller wants interned without owning it.
//! The store compares views against its records and hands views back when
//! resolving IDs, but never interprets their content beyond equality and
//! ordering.
//!
//! The derived orderings compare fields in declaration order. Backend records
//! in the store crate must order their fields identically.

use crate::NodeId;

/// View of an IRI node.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct IriView<'a> {
    pub identifier: &'a str,
}

impl<'a> IriView<'a> {
    #[inline]
    pub const fn new(identifier: &'a str) -> Self {
        IriView { identifier }
    }
}

/// View of a literal node.
///
/// `datatype_id` references an IRI interned in the same store. An empty
/// language tag means no tag; the store interns both forms as one literal.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct LiteralView<'a> {
    pub lexical_form: &'a str,
    pub datatype_id: NodeId,
    pub language_tag: Option<&'a str>,
}

impl<'a> LiteralView<'a> {
    /// A typed literal without a language tag.
    #[inline]
    pub const fn typed(lexical_form: &'a str, datatype_id: NodeId) -> Self {
        LiteralView {
            lexical_form,
            datatype_id,
            language_tag: None,
        }
    }

    /// A language-tagged literal. An empty tag yields an untagged literal.
    #[inline]
    pub const fn lang_tagged(lexical_form: &'a str, datatype_id: NodeId, language_tag: &'a str) -> Self {
        LiteralView {
            lexical_form,
            datatype_id,
            language_tag: Some(language_tag),
        }
        .normalized()
    }

    /// The same literal with `Some("")` replaced by `None`.
    #[inline]
    pub const fn normalized(self) -> Self {
        match self.language_tag {
            Some(tag) if tag.is_empty() => LiteralView {
                language_tag: None,
                ..self
            },
            _ => self,
        }
    }
}

/// View of a blank node.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct BNodeView<'a> {
    pub identifier: &'a str,
}

impl<'a> BNodeView<'a> {
    #[inline]
    pub const fn new(identifier: &'a str) -> Self {
        BNodeView { identifier }
    }
}

/// View of a query variable.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct VariableView<'a> {
    pub name: &'a str,
}

impl<'a> VariableView<'a> {
    #[inline]
    pub const fn new(name: &'a str) -> Self {
        VariableView { name }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_ordering_is_fieldwise() {
        let dt = NodeId::iri(5);
        let a = LiteralView::typed("1", dt);
        let b = LiteralView::typed("2", dt);
        let c = LiteralView::lang_tagged("1", dt, "en");
        assert!(a < b);
        // No language tag sorts before any language tag.
        assert!(a < c);
        assert_ne!(a, c);
    }

    #[test]
    fn test_empty_language_tag_is_no_tag() {
        let dt = NodeId::iri(1);
        assert_eq!(LiteralView::lang_tagged("x", dt, ""), LiteralView::typed("x", dt));

        let raw = LiteralView {
            lexical_form: "x",
            datatype_id: dt,
            language_tag: Some(""),
        };
        assert_eq!(raw.normalized(), LiteralView::typed("x", dt));
        let tagged = LiteralView::lang_tagged("x", dt, "en");
        assert_eq!(tagged.normalized(), tagged);
    }

    #[test]
    fn test_datatype_participates_in_equality() {
        let a = LiteralView::typed("1", NodeId::iri(5));
        let b = LiteralView::typed("1", NodeId::iri(6));
        assert_ne!(a, b);
    }
}
