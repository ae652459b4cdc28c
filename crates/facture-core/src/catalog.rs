//! # Catalog
//!
//! The fixed, read-only list of textbooks that can be invoiced.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Catalog::textbooks()  ── initialized once, shared for the process     │
//! │        │                                                                │
//! │        ├──► lookup("CI1")  ──► Some(CatalogItem { 1100 FCFA })          │
//! │        ├──► lookup("")     ──► None   (line not selected yet)           │
//! │        └──► items()        ──► selector options, display order          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashSet;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

/// The textbook table shipped with the binary: `(id, title, unit price)`.
const TEXTBOOKS: [(&str, &str, i64); 11] = [
    ("CI1", "CI: Cahier d'activités de transition arabe", 1100),
    ("CI2", "CI: Cahier d'activités de lecture et de production d'écrit arabe", 1600),
    ("CI3", "CI: Cahier d'activités d'écriture", 1100),
    ("CP1", "CP: Cahier d'activités de révision arabe", 1100),
    ("CP2", "CP: Cahier d'activités de lecture et de production d'écrit arabe", 1600),
    ("CP3", "CP: Cahier d'activités d'écriture", 1100),
    (
        "CE11",
        "CE1: Cahier d'activités de lecture, grammaire, conjugaison, orthographe, vocabulaire",
        1600,
    ),
    ("CE12", "CE1: Cahier d'activités de production d'écrit arabe", 1600),
    (
        "CE21",
        "CE2: Cahier d'activités de lecture, grammaire, conjugaison, orthographe, vocabulaire",
        1600,
    ),
    ("CE22", "CE2: Cahier d'activités de production d'écrit arabe", 1600),
    (
        "CM1",
        "CM1: Cahier d'activités de lecture, grammaire, conjugaison, orthographe, vocabulaire",
        2000,
    ),
];

// =============================================================================
// Catalog Item
// =============================================================================

/// A textbook that can be put on an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CatalogItem {
    /// Short unique code (`CI1`, `CE11`, ...).
    pub id: String,

    /// French display title, printed in the invoice table.
    pub title: String,

    /// Unit price in whole FCFA.
    pub unit_price: Money,
}

impl CatalogItem {
    pub fn new(id: impl Into<String>, title: impl Into<String>, unit_price: Money) -> Self {
        CatalogItem {
            id: id.into(),
            title: title.into(),
            unit_price,
        }
    }

    /// Label used by item selectors: `"{title} - {price} FCFA"`.
    pub fn option_label(&self) -> String {
        format!("{} - {}", self.title, self.unit_price)
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Read-only lookup table of catalog items, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Builds a catalog from arbitrary items.
    ///
    /// ## Rules
    /// - Ids must be unique
    /// - Prices must be non-negative (zero is allowed)
    pub fn new(items: Vec<CatalogItem>) -> CoreResult<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id.as_str()) {
                return Err(CoreError::DuplicateItem(item.id.clone()));
            }
            if item.unit_price.is_negative() {
                return Err(CoreError::NegativePrice {
                    id: item.id.clone(),
                    price: item.unit_price.units(),
                });
            }
        }
        Ok(Catalog { items })
    }

    /// The process-wide textbook catalog.
    ///
    /// Built on first access and never mutated afterwards.
    pub fn textbooks() -> &'static Catalog {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(|| Catalog {
            items: TEXTBOOKS
                .iter()
                .map(|(id, title, price)| CatalogItem::new(*id, *title, Money::from_units(*price)))
                .collect(),
        })
    }

    /// Resolves an item id. Empty or unknown ids resolve to `None`.
    pub fn lookup(&self, id: &str) -> Option<&CatalogItem> {
        if id.is_empty() {
            return None;
        }
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.lookup(id).is_some()
    }

    /// Items in display order.
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
