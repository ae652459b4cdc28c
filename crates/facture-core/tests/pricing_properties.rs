use facture_core::{compute_total, Catalog, CatalogItem, Money, OrderLine};
use proptest::prelude::*;

fn catalog_strategy() -> impl Strategy<Value = Catalog> {
    prop::collection::btree_map("[A-Z]{1,3}[0-9]", 0i64..5_000, 0..8).prop_map(|items| {
        Catalog::new(
            items
                .into_iter()
                .map(|(id, price)| CatalogItem::new(id.clone(), id, Money::from_units(price)))
                .collect(),
        )
        .unwrap()
    })
}

/// Ids drawn from the catalog, the empty selection, or unknown codes.
fn lines_strategy(catalog: &Catalog) -> impl Strategy<Value = Vec<OrderLine>> {
    let mut ids: Vec<String> = catalog.items().iter().map(|i| i.id.clone()).collect();
    ids.push(String::new());
    ids.push("UNKNOWN".to_string());
    prop::collection::vec((prop::sample::select(ids), 1u32..50), 0..20).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(id, qty)| OrderLine::with_item(id, qty))
            .collect()
    })
}

fn catalog_and_lines() -> impl Strategy<Value = (Catalog, Vec<OrderLine>)> {
    catalog_strategy().prop_flat_map(|catalog| {
        let lines = lines_strategy(&catalog);
        (Just(catalog), lines)
    })
}

proptest! {
    #[test]
    fn total_is_sum_of_resolved_lines((catalog, lines) in catalog_and_lines()) {
        let expected: i64 = lines
            .iter()
            .map(|line| match catalog.lookup(&line.item_id) {
                Some(item) => item.unit_price.units() * i64::from(line.quantity),
                None => 0,
            })
            .sum();

        prop_assert_eq!(compute_total(&lines, &catalog).units(), expected);
    }

    #[test]
    fn total_ignores_line_order((catalog, lines) in catalog_and_lines()) {
        let mut reversed = lines.clone();
        reversed.reverse();
        let mut rotated = lines.clone();
        if !rotated.is_empty() {
            rotated.rotate_left(1);
        }

        let total = compute_total(&lines, &catalog);
        prop_assert_eq!(compute_total(&reversed, &catalog), total);
        prop_assert_eq!(compute_total(&rotated, &catalog), total);
    }

    #[test]
    fn unresolved_lines_only_total_zero(qtys in prop::collection::vec(1u32..100, 0..10)) {
        let lines: Vec<OrderLine> = qtys.into_iter().map(|q| OrderLine::with_item("", q)).collect();
        prop_assert!(compute_total(&lines, Catalog::textbooks()).is_zero());
    }
}

#[test]
fn scenario_two_items() {
    let lines = vec![OrderLine::with_item("CI1", 2), OrderLine::with_item("CE11", 1)];
    assert_eq!(compute_total(&lines, Catalog::textbooks()).units(), 3800);
}

#[test]
fn scenario_empty() {
    assert!(compute_total(&[], Catalog::textbooks()).is_zero());
}

#[test]
fn scenario_unselected_line() {
    let lines = vec![OrderLine::with_item("", 3)];
    assert!(compute_total(&lines, Catalog::textbooks()).is_zero());
}

#[test]
fn scenario_repeated_item() {
    let lines = vec![OrderLine::with_item("CI1", 1), OrderLine::with_item("CI1", 2)];
    assert_eq!(compute_total(&lines, Catalog::textbooks()).units(), 3300);
}

#[test]
fn huge_price_total_saturates() {
    let catalog = Catalog::new(vec![CatalogItem::new(
        "BIG",
        "Big",
        Money::from_units(i64::MAX / 2),
    )])
    .unwrap();

    let single = [OrderLine::with_item("BIG", 3)];
    assert_eq!(compute_total(&single, &catalog).units(), i64::MAX);

    let repeated = [
        OrderLine::with_item("BIG", 1),
        OrderLine::with_item("BIG", 1),
        OrderLine::with_item("BIG", 1),
    ];
    assert_eq!(compute_total(&repeated, &catalog).units(), i64::MAX);
}
