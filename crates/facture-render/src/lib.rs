//! # facture-render: Invoice Document Renderer
//!
//! Turns an order snapshot into a single-file invoice.
//!
//! ## Pipeline
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │  client name, order lines, catalog, now                              │
//! │        │                                                             │
//! │        ▼                                                             │
//! │  date::french_long_date   "vendredi 16 octobre 2026"                 │
//! │  layout::table_rows       resolvable lines only, order preserved     │
//! │  pricing::compute_total   same total as the live display             │
//! │        │                                                             │
//! │        ▼                                                             │
//! │  RenderedDocument         pages of positioned circles, rects, text   │
//! │        │ to_pdf()                                                    │
//! │        ▼                                                             │
//! │  PDF bytes                saved by the caller as `facture.pdf`       │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rendering itself never fails and never validates: callers gate it behind
//! `facture_core::validate_order`. Lines without a resolvable item are left
//! out of the table and the total.
//!
//! ## Example
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use facture_core::{Catalog, OrderLine};
//!
//! let lines = vec![OrderLine::with_item("CI1", 2), OrderLine::with_item("CE11", 1)];
//! let now = Utc.with_ymd_and_hms(2026, 10, 16, 10, 0, 0).unwrap();
//! let doc = facture_render::render("Awa", &lines, Catalog::textbooks(), &now);
//!
//! assert_eq!(doc.total_line(), "Total: 3800 FCFA");
//! assert_eq!(doc.date_label(), "vendredi 16 octobre 2026");
//! assert!(doc.to_pdf().unwrap().starts_with(b"%PDF"));
//! ```

use std::fmt;

use chrono::{DateTime, TimeZone};
use facture_core::{Catalog, OrderLine};
use tracing::debug;

pub mod date;
pub mod document;
pub mod error;
pub mod layout;
pub mod metrics;
mod pdf;
pub mod style;

pub use date::french_long_date;
pub use document::{
    Color, Element, Font, InvoiceTable, Page, Point, Rect, RenderedDocument, Stroke, TableRow,
    TextRun,
};
pub use error::RenderError;
pub use layout::{TABLE_HEAD, TITLE_TEXT};
pub use style::{RenderStyle, ACCENT};

/// File name the invoice is saved under.
pub const INVOICE_FILENAME: &str = "facture.pdf";

/// Renders the invoice with the stock style.
pub fn render<Tz>(
    client_name: &str,
    lines: &[OrderLine],
    catalog: &Catalog,
    now: &DateTime<Tz>,
) -> RenderedDocument
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    render_with_style(&RenderStyle::default(), client_name, lines, catalog, now)
}

/// Renders the invoice with custom brand text or colors.
pub fn render_with_style<Tz>(
    style: &RenderStyle,
    client_name: &str,
    lines: &[OrderLine],
    catalog: &Catalog,
    now: &DateTime<Tz>,
) -> RenderedDocument
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let date_label = french_long_date(now);
    let document = layout::build(style, client_name, lines, catalog, date_label);

    debug!(
        client = %client_name,
        lines = lines.len(),
        rows = document.table().body.len(),
        pages = document.page_count(),
        total = %document.total(),
        "Rendered invoice"
    );

    document
}
