use tierlist_core::{reconcile, Catalog, Item, ItemId, Snapshot, TierConfig, UNRANKED_LABEL};

fn catalog(ids: &[ItemId]) -> Catalog {
    let items = ids
        .iter()
        .map(|id| Item::new(*id, format!("item-{id}"), format!("img/{id}.jpg")))
        .collect();
    Catalog::from_items(items).unwrap()
}

fn snapshot(json: &str) -> Snapshot {
    Snapshot::from_json_str(json).expect("test snapshot should parse")
}

#[test]
fn no_snapshot_puts_everything_unranked_in_catalog_order() {
    let catalog = catalog(&[7, 3, 5]);
    let model = reconcile(&catalog, None, TierConfig::default());

    assert_eq!(model.items_in(UNRANKED_LABEL), Some(&[7, 3, 5][..]));
    assert_eq!(model.len(), 3);
}

#[test]
fn re_reconciliation_is_idempotent() {
    let catalog = catalog(&[1, 2, 3, 4]);
    let stored = snapshot(r#"{"A":[2,1],"C":[4]}"#);

    let first = reconcile(&catalog, Some(&stored), TierConfig::default());
    let second = reconcile(&catalog, Some(&first.to_snapshot()), TierConfig::default());

    assert_eq!(first, second);
    assert_eq!(
        first.to_snapshot().to_json_string(),
        second.to_snapshot().to_json_string()
    );
}

#[test]
fn stale_ids_are_dropped_and_leftovers_go_unranked() {
    let catalog = catalog(&[1, 2, 3]);
    let stored = snapshot(r#"{"A":[1,2,999]}"#);

    let model = reconcile(&catalog, Some(&stored), TierConfig::default());

    assert_eq!(model.items_in("A"), Some(&[1, 2][..]));
    assert_eq!(model.items_in(UNRANKED_LABEL), Some(&[3][..]));
    assert_eq!(model.bucket_of(999), None);
    assert_eq!(model.len(), 3);
}

#[test]
fn new_catalog_item_surfaces_unranked() {
    let catalog = catalog(&[1, 4]);
    let stored = snapshot(r#"{"A":[1]}"#);

    let model = reconcile(&catalog, Some(&stored), TierConfig::default());

    assert_eq!(model.items_in("A"), Some(&[1][..]));
    assert_eq!(model.items_in(UNRANKED_LABEL), Some(&[4][..]));
}

#[test]
fn duplicate_listing_keeps_first_bucket_only() {
    let catalog = catalog(&[1]);
    let stored = snapshot(r#"{"A":[1],"B":[1]}"#);

    let model = reconcile(&catalog, Some(&stored), TierConfig::default());

    assert_eq!(model.bucket_of(1), Some("A"));
    assert_eq!(model.items_in("B"), Some(&[][..]));
}

#[test]
fn duplicate_listing_within_one_bucket_is_collapsed() {
    let catalog = catalog(&[1, 2]);
    let stored = snapshot(r#"{"A":[1,1,2]}"#);

    let model = reconcile(&catalog, Some(&stored), TierConfig::default());

    assert_eq!(model.items_in("A"), Some(&[1, 2][..]));
}

#[test]
fn unknown_bucket_labels_fall_back_to_unranked() {
    // Tier set shrank since the save; the old "F" listing is dropped and its
    // item resurfaces unranked.
    let catalog = catalog(&[1, 2]);
    let stored = snapshot(r#"{"F":[1],"A":[2]}"#);

    let model = reconcile(&catalog, Some(&stored), TierConfig::default());

    assert_eq!(model.items_in("A"), Some(&[2][..]));
    assert_eq!(model.items_in(UNRANKED_LABEL), Some(&[1][..]));
}

#[test]
fn empty_bucket_omission_round_trips() {
    let catalog = catalog(&[1, 2]);
    let stored = snapshot(r#"{"A":[1],"unranked":[2]}"#);

    let model = reconcile(&catalog, Some(&stored), TierConfig::default());
    let out = model.to_snapshot();

    assert_eq!(out.get("B"), None);
    let back = reconcile(&catalog, Some(&out), TierConfig::default());
    for id in [1, 2] {
        assert_ne!(back.bucket_of(id), Some("B"));
    }
    assert_eq!(back, model);
}

#[test]
fn unranked_listing_order_is_preserved_before_new_items() {
    let catalog = catalog(&[1, 2, 3]);
    let stored = snapshot(r#"{"unranked":[3,1]}"#);

    let model = reconcile(&catalog, Some(&stored), TierConfig::default());

    // Saved unranked order first, then the unplaced id in catalog order.
    assert_eq!(model.items_in(UNRANKED_LABEL), Some(&[3, 1, 2][..]));
}
