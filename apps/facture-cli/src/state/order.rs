//! # Order Session State
//!
//! Owns the single in-progress order and the last submitted invoice.
//!
//! ## Form Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Session Operations                             │
//! │                                                                         │
//! │  User Action              Command                 State Change          │
//! │  ───────────              ───────                 ────────────          │
//! │                                                                         │
//! │  Type client name ───────► set_client_name() ───► order.client_name     │
//! │                                                                         │
//! │  Click "add" ────────────► add_line() ──────────► lines.push(blank)     │
//! │                                                                         │
//! │  Pick a textbook ────────► select_item() ───────► lines[i].item_id      │
//! │                                                                         │
//! │  Change quantity ────────► update_quantity() ───► lines[i].quantity     │
//! │                                                                         │
//! │  Click remove ───────────► remove_line() ───────► lines.remove(i)       │
//! │                                                                         │
//! │  Submit ─────────────────► submit_invoice() ────► last_document = doc   │
//! │                                                                         │
//! │  Every mutation is followed by a live total recompute.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! One session per process, driven from one thread: plain ownership, no
//! locking.

use chrono::{DateTime, TimeZone};
use facture_core::{validate_order, Catalog, CoreResult, FormErrors, Money, Order, OrderLine};
use facture_render::{render_with_style, RenderStyle, RenderedDocument};

/// The editing session behind the order form.
#[derive(Debug, Clone, Default)]
pub struct OrderSession {
    order: Order,
    last_document: Option<RenderedDocument>,
}

impl OrderSession {
    /// A fresh form with one blank line.
    pub fn new() -> Self {
        OrderSession {
            order: Order::new(),
            last_document: None,
        }
    }

    /// Starts from an existing order (e.g. loaded from a file).
    pub fn from_order(order: Order) -> Self {
        OrderSession {
            order,
            last_document: None,
        }
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    pub fn lines(&self) -> &[OrderLine] {
        self.order.lines()
    }

    pub fn set_client_name(&mut self, name: impl Into<String>) {
        self.order.set_client_name(name);
    }

    /// Appends a blank line and returns its position.
    pub fn add_line(&mut self) -> usize {
        self.order.add_line()
    }

    pub fn remove_line(&mut self, index: usize) -> CoreResult<OrderLine> {
        self.order.remove_line(index)
    }

    pub fn select_item(&mut self, index: usize, item_id: &str) -> CoreResult<()> {
        self.order.select_item(index, item_id)
    }

    pub fn set_quantity(&mut self, index: usize, quantity: u32) -> CoreResult<()> {
        self.order.set_quantity(index, quantity)
    }

    /// Live total of the current form state.
    pub fn total(&self, catalog: &Catalog) -> Money {
        self.order.total(catalog)
    }

    /// Validates the form and renders the invoice.
    ///
    /// ## Behavior
    /// - Any field error: nothing is rendered, the previous document stays
    /// - Success: the new document replaces the previous one
    pub fn submit<Tz>(
        &mut self,
        catalog: &Catalog,
        style: &RenderStyle,
        now: &DateTime<Tz>,
    ) -> Result<&RenderedDocument, FormErrors>
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        validate_order(&self.order, catalog)?;

        let document = render_with_style(
            style,
            self.order.client_name.trim(),
            self.order.lines(),
            catalog,
            now,
        );
        Ok(&*self.last_document.insert(document))
    }

    /// The most recently submitted invoice.
    pub fn last_document(&self) -> Option<&RenderedDocument> {
        self.last_document.as_ref()
    }
}
