//! # Order Model
//!
//! The user-edited order: a client name plus an ordered list of lines.
//!
//! ## Editing Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Editing                                        │
//! │                                                                         │
//! │  Form Action              Order Method            State Change          │
//! │  ───────────              ────────────            ────────────          │
//! │                                                                         │
//! │  Type client name ──────► set_client_name() ───► client_name = s       │
//! │                                                                         │
//! │  "Ajouter un manuel" ───► add_line() ──────────► lines.push(blank)     │
//! │                                                                         │
//! │  Pick in selector ──────► select_item() ───────► lines[i].item_id = id │
//! │                                                                         │
//! │  Change quantity ───────► set_quantity() ──────► lines[i].quantity = q │
//! │                                                                         │
//! │  Click remove ──────────► remove_line() ───────► lines.remove(i)       │
//! │                                                                         │
//! │  After every change: total(catalog) is recomputed and redisplayed.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::pricing;
use crate::MIN_QUANTITY;

fn new_line_key() -> Uuid {
    Uuid::new_v4()
}

fn default_quantity() -> u32 {
    MIN_QUANTITY
}

// =============================================================================
// Order Line
// =============================================================================

/// One row of the order form.
///
/// ## Design Notes
/// - `key`: stable row identity for front ends; positions shift on removal,
///   keys do not. Generated when missing from an order file.
/// - `item_id`: empty until the user picks an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OrderLine {
    #[serde(default = "new_line_key")]
    #[ts(type = "string")]
    pub key: Uuid,

    /// Selected catalog id, empty when nothing is selected.
    #[serde(default)]
    pub item_id: String,

    /// Number of copies.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

impl OrderLine {
    /// A blank line: no item selected, quantity 1.
    pub fn new() -> Self {
        OrderLine {
            key: new_line_key(),
            item_id: String::new(),
            quantity: MIN_QUANTITY,
        }
    }

    /// A line with an item already selected.
    pub fn with_item(item_id: impl Into<String>, quantity: u32) -> Self {
        OrderLine {
            key: new_line_key(),
            item_id: item_id.into(),
            quantity,
        }
    }

    /// Whether an item has been picked for this line.
    pub fn is_selected(&self) -> bool {
        !self.item_id.trim().is_empty()
    }
}

impl Default for OrderLine {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Order
// =============================================================================

/// The in-progress order owned by one editing session.
///
/// ## Invariants
/// - Line order is display order
/// - `set_quantity` never stores a quantity below [`MIN_QUANTITY`]
/// - Zero lines is a legal editing state; submission rejects it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Order {
    #[serde(default)]
    pub client_name: String,

    #[serde(default)]
    pub lines: Vec<OrderLine>,
}

impl Order {
    /// A fresh form: empty client name and a single blank line.
    pub fn new() -> Self {
        Order {
            client_name: String::new(),
            lines: vec![OrderLine::new()],
        }
    }

    /// An order without any line.
    pub fn empty() -> Self {
        Order {
            client_name: String::new(),
            lines: Vec::new(),
        }
    }

    pub fn set_client_name(&mut self, name: impl Into<String>) {
        self.client_name = name.into();
    }

    /// Appends a blank line and returns its position.
    pub fn add_line(&mut self) -> usize {
        self.lines.push(OrderLine::new());
        self.lines.len() - 1
    }

    /// Appends a prepared line and returns its position.
    pub fn push_line(&mut self, line: OrderLine) -> usize {
        self.lines.push(line);
        self.lines.len() - 1
    }

    /// Removes the line at `index`, shifting later lines up.
    pub fn remove_line(&mut self, index: usize) -> CoreResult<OrderLine> {
        self.check_index(index)?;
        Ok(self.lines.remove(index))
    }

    /// Sets the selected item of a line.
    ///
    /// The id is not checked against the catalog here: the live total
    /// tolerates unknown ids and submission validation reports them.
    pub fn select_item(&mut self, index: usize, item_id: impl Into<String>) -> CoreResult<()> {
        self.line_mut(index)?.item_id = item_id.into();
        Ok(())
    }

    /// Sets the quantity of a line.
    ///
    /// ## Behavior
    /// - Below [`MIN_QUANTITY`]: rejected, previous quantity kept
    /// - Unknown position: `LineOutOfRange`
    pub fn set_quantity(&mut self, index: usize, quantity: u32) -> CoreResult<()> {
        self.check_index(index)?;
        if quantity < MIN_QUANTITY {
            return Err(ValidationError::QuantityBelowMinimum {
                line: index,
                min: MIN_QUANTITY,
            }
            .into());
        }
        self.lines[index].quantity = quantity;
        Ok(())
    }

    pub fn line(&self, index: usize) -> Option<&OrderLine> {
        self.lines.get(index)
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Live total, unresolved lines count as zero.
    pub fn total(&self, catalog: &Catalog) -> Money {
        pricing::compute_total(&self.lines, catalog)
    }

    fn line_mut(&mut self, index: usize) -> CoreResult<&mut OrderLine> {
        let len = self.lines.len();
        self.lines
            .get_mut(index)
            .ok_or(CoreError::LineOutOfRange { index, len })
    }

    fn check_index(&self, index: usize) -> CoreResult<()> {
        if index < self.lines.len() {
            Ok(())
        } else {
            Err(CoreError::LineOutOfRange {
                index,
                len: self.lines.len(),
            })
        }
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_order_has_one_blank_line() {
        let order = Order::new();
        assert_eq!(order.len(), 1);
        assert_eq!(order.lines()[0].item_id, "");
        assert_eq!(order.lines()[0].quantity, 1);
        assert!(!order.lines()[0].is_selected());
    }

    #[test]
    fn test_add_select_and_total() {
        let catalog = Catalog::textbooks();
        let mut order = Order::new();

        order.select_item(0, "CI1").unwrap();
        order.set_quantity(0, 2).unwrap();
        let idx = order.add_line();
        assert_eq!(idx, 1);
        order.select_item(idx, "CE11").unwrap();

        assert_eq!(order.total(catalog).units(), 3800);
    }

    #[test]
    fn test_remove_line_shifts_positions() {
        let mut order = Order::empty();
        order.push_line(OrderLine::with_item("CI1", 1));
        order.push_line(OrderLine::with_item("CI2", 1));
        order.push_line(OrderLine::with_item("CI3", 1));
        let key_of_third = order.lines()[2].key;

        let removed = order.remove_line(1).unwrap();
        assert_eq!(removed.item_id, "CI2");
        assert_eq!(order.len(), 2);
        assert_eq!(order.lines()[1].key, key_of_third);
    }

    #[test]
    fn test_out_of_range_positions() {
        let mut order = Order::new();
        assert!(matches!(
            order.remove_line(3),
            Err(CoreError::LineOutOfRange { index: 3, len: 1 })
        ));
        assert!(order.select_item(1, "CI1").is_err());
        assert!(order.set_quantity(5, 2).is_err());
    }

    #[test]
    fn test_quantity_below_minimum_is_rejected() {
        let mut order = Order::new();
        order.set_quantity(0, 4).unwrap();

        let err = order.set_quantity(0, 0).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::QuantityBelowMinimum { line: 0, min: 1 })
        ));
        assert_eq!(order.lines()[0].quantity, 4);
    }

    #[test]
    fn test_removing_every_line_is_allowed_while_editing() {
        let mut order = Order::new();
        order.remove_line(0).unwrap();
        assert!(order.is_empty());
        assert!(order.total(Catalog::textbooks()).is_zero());
    }

    #[test]
    fn test_deserialize_order_file() {
        let json = r#"{
            "clientName": "École Al Falah",
            "lines": [
                { "itemId": "CI1", "quantity": 2 },
                { "itemId": "CE11" }
            ]
        }"#;

        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.client_name, "École Al Falah");
        assert_eq!(order.lines[1].quantity, 1);
        assert_ne!(order.lines[0].key, order.lines[1].key);
    }

    #[test]
    fn test_serialize_uses_camel_case() {
        let order = Order {
            client_name: "A".to_string(),
            lines: vec![OrderLine::with_item("CI1", 3)],
        };
        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value["clientName"], "A");
        assert_eq!(value["lines"][0]["itemId"], "CI1");
        assert_eq!(value["lines"][0]["quantity"], 3);
    }
}
