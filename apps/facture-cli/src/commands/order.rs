//! # Order Commands
//!
//! Form edits on the in-progress order. Every command returns the full
//! form state with its recomputed live total.
//!
//! ## Form Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Form Lifecycle                                 │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐        │
//! │  │  Blank   │────►│ Editing  │────►│ Validate │────►│ Invoice  │        │
//! │  │  form    │     │          │     │          │     │ written  │        │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘        │
//! │                        │  ▲              │                              │
//! │                  add_line│  └── errors ───┘                              │
//! │                  select_item                                            │
//! │                  update_quantity                                        │
//! │                  remove_line                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Line numbers are 1-based, the way the form displays them.

use std::path::Path;

use facture_core::{Catalog, Money, Order};
use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::state::OrderSession;

/// One form line as displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineView {
    /// 1-based position
    pub number: usize,
    pub item_id: String,
    /// Title of the selected textbook, if it resolves
    pub title: Option<String>,
    pub quantity: u32,
    /// `None` while no textbook is selected
    pub line_total: Option<Money>,
}

/// Form state response including lines and the live total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub client_name: String,
    pub lines: Vec<LineView>,
    pub total: Money,
}

impl OrderResponse {
    pub fn build(order: &Order, catalog: &Catalog) -> Self {
        let lines = order
            .lines()
            .iter()
            .enumerate()
            .map(|(i, line)| {
                let item = catalog.lookup(&line.item_id);
                LineView {
                    number: i + 1,
                    item_id: line.item_id.clone(),
                    title: item.map(|item| item.title.clone()),
                    quantity: line.quantity,
                    line_total: item.map(|item| item.unit_price.multiply_quantity(line.quantity)),
                }
            })
            .collect();

        OrderResponse {
            client_name: order.client_name.clone(),
            lines,
            total: order.total(catalog),
        }
    }
}

/// Live total line shown under the form.
pub fn format_total(total: Money) -> String {
    format!("Total de la commande : {total}")
}

fn line_index(number: usize) -> Result<usize, ApiError> {
    number
        .checked_sub(1)
        .ok_or_else(|| ApiError::not_found("Line", &number.to_string()))
}

/// Gets the current form state.
pub fn get_order(session: &OrderSession, catalog: &Catalog) -> OrderResponse {
    OrderResponse::build(session.order(), catalog)
}

pub fn set_client_name(session: &mut OrderSession, catalog: &Catalog, name: &str) -> OrderResponse {
    debug!(name = %name, "set_client_name command");
    session.set_client_name(name.trim());
    get_order(session, catalog)
}

/// Appends a blank line (no textbook, quantity 1).
pub fn add_line(session: &mut OrderSession, catalog: &Catalog) -> OrderResponse {
    let index = session.add_line();
    debug!(line = index + 1, "add_line command");
    get_order(session, catalog)
}

/// Selects a textbook on a line.
///
/// ## Behavior
/// - Only catalog ids can be picked, like the form's dropdown
/// - Unknown line number: `NOT_FOUND`
pub fn select_item(
    session: &mut OrderSession,
    catalog: &Catalog,
    number: usize,
    item_id: &str,
) -> Result<OrderResponse, ApiError> {
    debug!(line = number, item_id = %item_id, "select_item command");

    if !catalog.contains(item_id) {
        return Err(ApiError::not_found("Textbook", item_id));
    }

    session.select_item(line_index(number)?, item_id)?;
    Ok(get_order(session, catalog))
}

/// Updates the quantity of a line.
///
/// ## Behavior
/// - Quantity below 1: `VALIDATION_ERROR`, previous quantity kept
pub fn update_quantity(
    session: &mut OrderSession,
    catalog: &Catalog,
    number: usize,
    quantity: u32,
) -> Result<OrderResponse, ApiError> {
    debug!(line = number, quantity = %quantity, "update_quantity command");
    session.set_quantity(line_index(number)?, quantity)?;
    Ok(get_order(session, catalog))
}

/// Removes a line, later lines move up by one.
pub fn remove_line(
    session: &mut OrderSession,
    catalog: &Catalog,
    number: usize,
) -> Result<OrderResponse, ApiError> {
    debug!(line = number, "remove_line command");
    session.remove_line(line_index(number)?)?;
    Ok(get_order(session, catalog))
}

/// Reads an order from a JSON file.
///
/// ```json
/// { "clientName": "Awa", "lines": [{ "itemId": "CI1", "quantity": 2 }] }
/// ```
pub fn load_order(path: &Path) -> Result<Order, ApiError> {
    debug!(path = %path.display(), "load_order command");
    let raw = std::fs::read_to_string(path)?;
    let order = serde_json::from_str(&raw)?;
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_edit_flow_updates_total() {
        let catalog = Catalog::textbooks();
        let mut session = OrderSession::new();

        let view = select_item(&mut session, catalog, 1, "CI1").unwrap();
        assert_eq!(view.total.units(), 1100);

        let view = update_quantity(&mut session, catalog, 1, 2).unwrap();
        assert_eq!(view.lines[0].line_total.unwrap().units(), 2200);

        let view = add_line(&mut session, catalog);
        assert_eq!(view.lines.len(), 2);
        assert_eq!(view.lines[1].line_total, None);
        assert_eq!(view.total.units(), 2200);

        let view = select_item(&mut session, catalog, 2, "CE11").unwrap();
        assert_eq!(view.total.units(), 3800);
        assert_eq!(format_total(view.total), "Total de la commande : 3800 FCFA");

        let view = remove_line(&mut session, catalog, 1).unwrap();
        assert_eq!(view.lines.len(), 1);
        assert_eq!(view.lines[0].number, 1);
        assert_eq!(view.lines[0].item_id, "CE11");
        assert_eq!(view.total.units(), 1600);
    }

    #[test]
    fn test_zero_quantity_is_rejected() {
        let catalog = Catalog::textbooks();
        let mut session = OrderSession::new();

        let err = update_quantity(&mut session, catalog, 1, 0).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(session.lines()[0].quantity, 1);
    }

    #[test]
    fn test_bad_line_numbers() {
        let catalog = Catalog::textbooks();
        let mut session = OrderSession::new();

        assert_eq!(
            remove_line(&mut session, catalog, 0).unwrap_err().code,
            ErrorCode::NotFound
        );
        assert_eq!(
            remove_line(&mut session, catalog, 5).unwrap_err().code,
            ErrorCode::NotFound
        );
    }

    #[test]
    fn test_unknown_textbook_is_rejected() {
        let catalog = Catalog::textbooks();
        let mut session = OrderSession::new();

        let err = select_item(&mut session, catalog, 1, "XX9").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(session.lines()[0].item_id.is_empty());
    }

    #[test]
    fn test_client_name_is_trimmed() {
        let mut session = OrderSession::new();
        let view = set_client_name(&mut session, Catalog::textbooks(), "  Awa  ");
        assert_eq!(view.client_name, "Awa");
    }

    #[test]
    fn test_response_serializes_camel_case() {
        let session = OrderSession::new();
        let json = serde_json::to_value(get_order(&session, Catalog::textbooks())).unwrap();
        assert_eq!(json["clientName"], "");
        assert_eq!(json["lines"][0]["itemId"], "");
        assert_eq!(json["lines"][0]["lineTotal"], serde_json::Value::Null);
        assert_eq!(json["total"], 0);
    }
}
