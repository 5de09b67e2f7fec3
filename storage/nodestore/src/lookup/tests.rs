#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use crate::backend::{LiteralBackend, VariableBackend};
use nodestore_ir::predefined::XSD_INTEGER;
use nodestore_ir::{LiteralType, LiteralView, NodeKind, VariableView};
use pretty_assertions::assert_eq;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

fn mint_variable(value: NodeIdValue, _: &VariableView<'_>) -> NodeId {
    NodeId::variable(value)
}

#[test]
fn test_find_id_does_not_insert() {
    let store = KindStore::<VariableBackend>::new();
    assert_eq!(store.find_id(VariableView::new("x")), None);
    assert_eq!(store.find_id(VariableView::new("x")), None);
    assert_eq!(store.len(), 0);
    assert_eq!(store.records_allocated(), 0);
}

#[test]
fn test_find_or_make_is_idempotent() {
    let budget = RegionBudget::new(None);
    let store = KindStore::<VariableBackend>::new();

    let x = store
        .find_or_make_id(VariableView::new("x"), &budget, mint_variable)
        .unwrap();
    let y = store
        .find_or_make_id(VariableView::new("y"), &budget, mint_variable)
        .unwrap();
    let x_again = store
        .find_or_make_id(VariableView::new("x"), &budget, mint_variable)
        .unwrap();

    assert_eq!(x, x_again);
    assert_ne!(x, y);
    assert_eq!(store.len(), 2);
    assert_eq!(store.find_id(VariableView::new("y")), Some(y));
}

#[test]
fn test_exclusive_path_rechecks() {
    // Simulates losing the race: the value appears between the shared probe
    // and the exclusive lock.
    let budget = RegionBudget::new(None);
    let store = KindStore::<VariableBackend>::new();
    let first = store
        .find_or_make_id(VariableView::new("raced"), &budget, mint_variable)
        .unwrap();

    let minted = AtomicUsize::new(0);
    let second = store
        .insert_slow(VariableView::new("raced"), &budget, |value, _| {
            minted.fetch_add(1, Ordering::SeqCst);
            NodeId::variable(value)
        })
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(minted.load(Ordering::SeqCst), 0);
    assert_eq!(store.len(), 1);
}

#[test]
fn test_resolve_checks_kind_and_presence() {
    let budget = RegionBudget::new(None);
    let store = KindStore::<VariableBackend>::new();
    let id = store
        .find_or_make_id(VariableView::new("v"), &budget, mint_variable)
        .unwrap();

    assert_eq!(store.resolve(id).unwrap().name(), "v");
    assert!(store.contains(id));

    let foreign = NodeId::bnode(id.value());
    assert_eq!(
        store.resolve(foreign),
        Err(StoreError::WrongKind {
            id: foreign,
            expected: NodeKind::Variable
        })
    );
    assert!(!store.contains(foreign));

    let unknown = NodeId::variable(id.value() + 100);
    assert_eq!(
        store.resolve(unknown),
        Err(StoreError::UnknownId { id: unknown })
    );
}

#[test]
fn test_concurrent_same_value_mints_once() {
    let budget = RegionBudget::new(None);
    let store = KindStore::<LiteralBackend>::new();
    let minted = AtomicUsize::new(0);
    let view = LiteralView::typed("42", XSD_INTEGER);

    let ids: Vec<NodeId> = thread::scope(|s| {
        let handles: Vec<_> = (0..16)
            .map(|_| {
                s.spawn(|| {
                    store
                        .find_or_make_id(view, &budget, |value, _| {
                            minted.fetch_add(1, Ordering::SeqCst);
                            NodeId::literal(value, LiteralType::Integer)
                        })
                        .unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(ids.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(minted.load(Ordering::SeqCst), 1);
    assert_eq!(store.records_allocated(), 1);
    store.check_consistency();
}

#[test]
fn test_concurrent_distinct_values() {
    let budget = RegionBudget::new(None);
    let store = KindStore::<VariableBackend>::new();

    thread::scope(|s| {
        for t in 0..8 {
            let store = &store;
            let budget = &budget;
            s.spawn(move || {
                for i in 0..200 {
                    // Every thread interns an overlapping range of names.
                    let name = format!("v{}", (i + t * 50) % 400);
                    store
                        .find_or_make_id(VariableView::new(&name), budget, mint_variable)
                        .unwrap();
                }
            });
        }
    });

    assert_eq!(store.len(), 400);
    store.check_consistency();
    let ids = store.ids();
    assert_eq!(ids.first(), Some(&NodeId::variable(1)));
    assert_eq!(ids.last(), Some(&NodeId::variable(400)));
}
