use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_defaults_pass_validation() {
    let defaults = PredefinedIris::rdf_defaults();
    let validated = PredefinedIris::new(defaults.iter().copied());
    assert!(validated.is_ok());
    assert_eq!(defaults.len(), 20);
}

#[test]
fn test_default_ids_match_constants() {
    let defaults = PredefinedIris::rdf_defaults();
    assert_eq!(defaults.id_of("http://www.w3.org/2001/XMLSchema#string"), Some(XSD_STRING));
    assert_eq!(defaults.id_of("http://www.w3.org/2001/XMLSchema#integer"), Some(XSD_INTEGER));
    assert_eq!(defaults.id_of("http://www.w3.org/2001/XMLSchema#long"), Some(XSD_LONG));
    assert_eq!(
        defaults.id_of("http://www.w3.org/1999/02/22-rdf-syntax-ns#type"),
        Some(RDF_TYPE)
    );
    assert_eq!(defaults.id_of("http://example.org/unknown"), None);
}

#[test]
fn test_literal_type_lookup() {
    let defaults = PredefinedIris::rdf_defaults();
    assert_eq!(defaults.literal_type_of(XSD_INTEGER), LiteralType::Integer);
    assert_eq!(defaults.literal_type_of(RDF_LANG_STRING), LiteralType::LangString);
    assert_eq!(defaults.literal_type_of(RDF_TYPE), LiteralType::Other);
    assert_eq!(defaults.literal_type_of(NodeId::iri(4000)), LiteralType::Other);
}

#[test]
fn test_rejects_out_of_range() {
    let err = PredefinedIris::new([PredefinedIri::new(NodeId::MIN_IRI_VALUE, "http://a")]);
    assert!(matches!(err, Err(PredefinedError::OutOfRange { .. })));

    let err = PredefinedIris::new([PredefinedIri::new(0, "http://a")]);
    assert!(matches!(err, Err(PredefinedError::OutOfRange { .. })));

    let wrong_kind = PredefinedIri {
        id: NodeId::bnode(3),
        iri: "http://a",
        literal_type: None,
    };
    let err = PredefinedIris::new([wrong_kind]);
    assert!(matches!(err, Err(PredefinedError::OutOfRange { .. })));
}

#[test]
fn test_rejects_duplicates() {
    let err = PredefinedIris::new([
        PredefinedIri::new(1, "http://a"),
        PredefinedIri::new(1, "http://b"),
    ]);
    assert_eq!(
        err.err(),
        Some(PredefinedError::DuplicateId { id: NodeId::iri(1) })
    );

    let err = PredefinedIris::new([
        PredefinedIri::new(1, "http://a"),
        PredefinedIri::new(2, "http://a"),
    ]);
    assert_eq!(
        err.err(),
        Some(PredefinedError::DuplicateIri { iri: "http://a" })
    );
}

#[test]
fn test_empty_table() {
    let empty = PredefinedIris::empty();
    assert!(empty.is_empty());
    assert_eq!(empty.literal_type_of(XSD_INTEGER), LiteralType::Other);
}
