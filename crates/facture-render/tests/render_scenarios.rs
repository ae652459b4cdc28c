use chrono::{DateTime, TimeZone, Utc};
use facture_core::{Catalog, CatalogItem, Money, OrderLine};
use facture_render::{render, render_with_style, Element, RenderStyle, TableRow, TABLE_HEAD};
use proptest::prelude::*;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 16, 14, 0, 0).unwrap()
}

fn row(title: &str, quantity: &str, unit_price: &str, line_total: &str) -> TableRow {
    TableRow {
        title: title.to_string(),
        quantity: quantity.to_string(),
        unit_price: unit_price.to_string(),
        line_total: line_total.to_string(),
    }
}

#[test]
fn scenario_two_items() {
    let lines = vec![OrderLine::with_item("CI1", 2), OrderLine::with_item("CE11", 1)];
    let doc = render("Awa", &lines, Catalog::textbooks(), &now());

    assert_eq!(doc.client_name(), "Awa");
    assert_eq!(doc.table().head, TABLE_HEAD);
    assert_eq!(
        doc.table().body,
        vec![
            row(
                "CI: Cahier d'activités de transition arabe",
                "2",
                "1100 FCFA",
                "2200 FCFA"
            ),
            row(
                "CE1: Cahier d'activités de lecture, grammaire, conjugaison, orthographe, vocabulaire",
                "1",
                "1600 FCFA",
                "1600 FCFA"
            ),
        ]
    );
    assert_eq!(doc.total().units(), 3800);
    assert_eq!(doc.total_line(), "Total: 3800 FCFA");
}

#[test]
fn scenario_no_lines() {
    let doc = render("Awa", &[], Catalog::textbooks(), &now());

    assert!(doc.table().body.is_empty());
    assert_eq!(doc.total_line(), "Total: 0 FCFA");
    assert_eq!(doc.page_count(), 1);
}

#[test]
fn scenario_unselected_line_is_skipped() {
    let lines = vec![OrderLine::with_item("", 3), OrderLine::with_item("CM1", 1)];
    let doc = render("Awa", &lines, Catalog::textbooks(), &now());

    assert_eq!(doc.table().body.len(), 1);
    assert_eq!(doc.table().body[0].line_total, "2000 FCFA");
    assert_eq!(doc.total_line(), "Total: 2000 FCFA");
}

#[test]
fn scenario_repeated_item_keeps_both_rows() {
    let lines = vec![OrderLine::with_item("CI1", 1), OrderLine::with_item("CI1", 2)];
    let doc = render("Awa", &lines, Catalog::textbooks(), &now());

    let quantities: Vec<&str> = doc
        .table()
        .body
        .iter()
        .map(|r| r.quantity.as_str())
        .collect();
    assert_eq!(quantities, vec!["1", "2"]);
    assert_eq!(doc.total_line(), "Total: 3300 FCFA");
}

#[test]
fn client_block_prints_name_and_french_date() {
    let doc = render("Moussa Diop", &[], Catalog::textbooks(), &now());
    let texts: Vec<&str> = doc.texts().map(|t| t.text.as_str()).collect();

    assert!(texts.contains(&"Client: Moussa Diop"));
    assert!(texts.contains(&"Date: vendredi 16 octobre 2026"));
}

#[test]
fn custom_brand_replaces_badge_text() {
    let style = RenderStyle::with_brand("LIBRAIRIE");
    let doc = render_with_style(&style, "Awa", &[], Catalog::textbooks(), &now());

    assert_eq!(doc.texts().next().unwrap().text, "LIBRAIRIE");
    assert!(matches!(doc.pages()[0].elements()[0], Element::Circle { .. }));
}

#[test]
fn scenario_only_unselected_line() {
    let doc = render("Awa", &[OrderLine::with_item("", 3)], Catalog::textbooks(), &now());

    assert!(doc.table().body.is_empty());
    assert_eq!(doc.total_line(), "Total: 0 FCFA");
}

#[test]
fn huge_price_renders_saturated_totals() {
    let catalog = Catalog::new(vec![CatalogItem::new(
        "BIG",
        "Big",
        Money::from_units(i64::MAX / 2),
    )])
    .unwrap();
    let doc = render("Awa", &[OrderLine::with_item("BIG", 3)], &catalog, &now());

    assert_eq!(doc.table().body[0].line_total, format!("{} FCFA", i64::MAX));
    assert_eq!(doc.total_line(), format!("Total: {} FCFA", i64::MAX));
}

/// Catalog ids plus an unselected line and an id the catalog does not know.
fn item_id_pool() -> Vec<String> {
    Catalog::textbooks()
        .items()
        .iter()
        .map(|item| item.id.clone())
        .chain(["".to_string(), "XX9".to_string()])
        .collect()
}

proptest! {
    #[test]
    fn table_follows_order_lines(
        picks in prop::collection::vec((prop::sample::select(item_id_pool()), 1u32..20), 0..40)
    ) {
        let catalog = Catalog::textbooks();
        let lines: Vec<OrderLine> = picks
            .into_iter()
            .map(|(id, q)| OrderLine::with_item(id, q))
            .collect();
        let doc = render("Awa", &lines, catalog, &now());

        let resolved: Vec<&OrderLine> = lines
            .iter()
            .filter(|line| catalog.lookup(&line.item_id).is_some())
            .collect();
        prop_assert_eq!(doc.table().body.len(), resolved.len());
        for (row, line) in doc.table().body.iter().zip(resolved) {
            let item = catalog.lookup(&line.item_id).unwrap();
            prop_assert_eq!(&row.title, &item.title);
            prop_assert_eq!(&row.quantity, &line.quantity.to_string());
        }
        prop_assert_eq!(doc.total(), facture_core::compute_total(&lines, catalog));
    }
}
