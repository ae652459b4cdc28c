//! # Pricing Calculator
//!
//! Live order total. Runs after every edit, so it must be cheap and can
//! never fail.
//!
//! ## Resolution Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  line.item_id ──► catalog.lookup()                                      │
//! │                        │                                                │
//! │                        ├── Some(item) ──► item.unit_price × quantity    │
//! │                        │                                                │
//! │                        └── None ────────► 0  (not selected yet,         │
//! │                                              or unknown id)             │
//! │                                                                         │
//! │  total = Σ contributions   (exact, integer FCFA)                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::catalog::Catalog;
use crate::money::Money;
use crate::order::OrderLine;

/// Total of one line, `None` when its item does not resolve.
pub fn line_total(line: &OrderLine, catalog: &Catalog) -> Option<Money> {
    catalog
        .lookup(&line.item_id)
        .map(|item| item.unit_price.multiply_quantity(line.quantity))
}

/// Sum of every line total; unresolved lines contribute zero.
///
/// ## Example
/// ```rust
/// use facture_core::{compute_total, Catalog, OrderLine};
///
/// let lines = vec![OrderLine::with_item("CI1", 2), OrderLine::with_item("CE11", 1)];
/// assert_eq!(compute_total(&lines, Catalog::textbooks()).units(), 3800);
/// ```
pub fn compute_total(lines: &[OrderLine], catalog: &Catalog) -> Money {
    lines
        .iter()
        .filter_map(|line| line_total(line, catalog))
        .sum()
}

// =============================================================================
// Unit Tests
// =============================================================================
