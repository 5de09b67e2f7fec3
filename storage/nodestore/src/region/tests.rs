use super::*;

#[test]
fn test_push_and_get() {
    let mut region = Region::new();
    for word in ["a", "b", "c"] {
        let handle = region.next_handle();
        assert!(handle.is_some());
        if let Some(handle) = handle {
            assert!(region.try_reserve_one().is_ok());
            region.push(handle, word.to_string());
        }
    }
    assert_eq!(region.len(), 3);
    assert_eq!(region.get(RecordHandle(1)), "b");
}

#[test]
fn test_handles_are_offsets() {
    let mut region = Region::new();
    assert_eq!(region.next_handle().map(RecordHandle::offset), Some(0));
    region.push(RecordHandle(0), 7_u8);
    assert_eq!(region.next_handle().map(RecordHandle::offset), Some(1));
}

#[test]
fn test_unbounded_budget() {
    let budget = RegionBudget::new(None);
    let claim = budget.claim(NodeKind::Iri, 1 << 20);
    assert!(claim.is_ok());
    if let Ok(claim) = claim {
        claim.commit();
    }
    assert_eq!(budget.used(), 1 << 20);
    assert_eq!(budget.capacity(), None);
}

#[test]
fn test_claim_over_capacity_fails() {
    let budget = RegionBudget::new(Some(100));
    if let Ok(claim) = budget.claim(NodeKind::Iri, 60) {
        claim.commit();
    }
    let err = budget.claim(NodeKind::Literal, 50).err();
    assert_eq!(
        err,
        Some(StoreError::RegionExhausted {
            kind: NodeKind::Literal,
            requested: 50,
            used: 60,
            capacity: 100,
        })
    );
    assert_eq!(budget.used(), 60);
}

#[test]
fn test_dropped_claim_is_released() {
    let budget = RegionBudget::new(Some(100));
    {
        let claim = budget.claim(NodeKind::BNode, 80);
        assert!(claim.is_ok());
        assert_eq!(budget.used(), 80);
    }
    assert_eq!(budget.used(), 0);
    // The full capacity is available again.
    assert!(budget.claim(NodeKind::BNode, 100).is_ok());
}

#[test]
fn test_charge_is_unconditional() {
    let budget = RegionBudget::new(Some(10));
    budget.charge(25);
    assert_eq!(budget.used(), 25);
    assert!(budget.claim(NodeKind::Iri, 1).is_err());
}
