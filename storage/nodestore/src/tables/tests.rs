use super::*;
use crate::backend::{BNodeBackend, IriBackend};
use nodestore_ir::{BNodeView, IriView, NodeKind};
use pretty_assertions::assert_eq;

fn insert_iri(tables: &mut KindTables<IriBackend>, budget: &RegionBudget, iri: &str) -> Result<NodeId, StoreError> {
    let view = IriView::new(iri);
    match tables.probe(&view) {
        Some(id) => Ok(id),
        None => tables.insert(view, budget, |value, _| NodeId::iri(value)),
    }
}

#[test]
fn test_probe_absent_then_present() {
    let budget = RegionBudget::new(None);
    let mut tables = KindTables::<IriBackend>::new();
    let view = IriView::new("http://example.org/a");

    assert_eq!(tables.probe(&view), None);
    let id = insert_iri(&mut tables, &budget, "http://example.org/a");
    assert_eq!(id, Ok(NodeId::iri(NodeId::MIN_IRI_VALUE)));
    assert_eq!(tables.probe(&view), Some(NodeId::iri(NodeId::MIN_IRI_VALUE)));
}

#[test]
fn test_reverse_stays_sorted_by_value() {
    let budget = RegionBudget::new(None);
    let mut tables = KindTables::<IriBackend>::new();
    for iri in ["m", "c", "x", "a", "p", "b"] {
        assert!(insert_iri(&mut tables, &budget, iri).is_ok());
    }
    tables.check_consistency();
    assert_eq!(tables.len(), 6);

    // IDs follow insertion order even though the reverse table is sorted.
    assert_eq!(tables.probe(&IriView::new("m")), Some(NodeId::iri(64)));
    assert_eq!(tables.probe(&IriView::new("b")), Some(NodeId::iri(69)));
}

#[test]
fn test_ids_ascending() {
    let budget = RegionBudget::new(None);
    let mut tables = KindTables::<IriBackend>::new();
    for iri in ["z", "y", "x"] {
        assert!(insert_iri(&mut tables, &budget, iri).is_ok());
    }
    let ids: Vec<NodeId> = tables.ids().collect();
    assert_eq!(ids, vec![NodeId::iri(64), NodeId::iri(65), NodeId::iri(66)]);
    assert_eq!(
        tables.get(NodeId::iri(64)).map(IriBackend::identifier),
        Some("z")
    );
    assert_eq!(tables.get(NodeId::iri(99)), None);
}

#[test]
fn test_failed_insert_leaves_tables_untouched() {
    let budget = RegionBudget::new(Some(std::mem::size_of::<IriBackend>() + 4));
    let mut tables = KindTables::<IriBackend>::new();

    assert!(insert_iri(&mut tables, &budget, "abcd").is_ok());
    let used = budget.used();

    let err = insert_iri(&mut tables, &budget, "efgh");
    assert!(matches!(err, Err(StoreError::RegionExhausted { .. })));
    assert_eq!(tables.len(), 1);
    assert_eq!(tables.records_allocated(), 1);
    assert_eq!(budget.used(), used);
    tables.check_consistency();
}

#[test]
fn test_id_exhaustion_consumes_nothing() {
    let budget = RegionBudget::new(None);
    let mut tables = KindTables::<BNodeBackend>::with_allocator(IdAllocator::starting_at(
        NodeKind::BNode,
        NodeId::MAX_VALUE,
    ));
    let mint = |value, _: &BNodeView<'_>| NodeId::bnode(value);

    let first = BNodeView::new("last");
    assert_eq!(tables.probe(&first), None);
    assert_eq!(
        tables.insert(first, &budget, mint),
        Ok(NodeId::bnode(NodeId::MAX_VALUE))
    );

    let second = BNodeView::new("overflow");
    assert_eq!(tables.probe(&second), None);
    assert_eq!(
        tables.insert(second, &budget, mint),
        Err(StoreError::IdSpaceExhausted {
            kind: NodeKind::BNode
        })
    );
    assert_eq!(tables.probe(&second), None);
    assert_eq!(tables.len(), 1);
    tables.check_consistency();
}

#[test]
fn test_insert_reserved() {
    let budget = RegionBudget::new(None);
    let mut tables = KindTables::<IriBackend>::new();
    assert!(tables.insert_reserved(NodeId::iri(1), IriBackend::new("s"), &budget));
    // Same ID or same value again is refused.
    assert!(!tables.insert_reserved(NodeId::iri(1), IriBackend::new("t"), &budget));
    assert!(!tables.insert_reserved(NodeId::iri(2), IriBackend::new("s"), &budget));
    assert_eq!(tables.probe(&IriView::new("s")), Some(NodeId::iri(1)));
    assert!(budget.used() > 0);

    // The open range still starts at the kind minimum.
    assert_eq!(
        insert_iri(&mut tables, &budget, "u"),
        Ok(NodeId::iri(NodeId::MIN_IRI_VALUE))
    );
    tables.check_consistency();
}

#[test]
fn test_descending_bulk_insert() {
    // Every value sorts before all earlier ones.
    const COUNT: u64 = 50_000;
    let budget = RegionBudget::new(None);
    let mut tables = KindTables::<IriBackend>::new();

    for i in (0..COUNT).rev() {
        let id = insert_iri(&mut tables, &budget, &format!("urn:{i:09}"));
        assert_eq!(id, Ok(NodeId::iri(NodeId::MIN_IRI_VALUE + (COUNT - 1 - i))));
    }

    assert_eq!(tables.len(), 50_000);
    tables.check_consistency();
    for i in [0, 1, COUNT / 2, COUNT - 1] {
        let expected = NodeId::iri(NodeId::MIN_IRI_VALUE + (COUNT - 1 - i));
        assert_eq!(tables.probe(&IriView::new(&format!("urn:{i:09}"))), Some(expected));
    }
}
