//! # Invoice Commands
//!
//! Submission: validate the form, render the invoice and write
//! `facture.pdf`.
//!
//! ## Submit Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  submit_invoice()                                                       │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  1. validate_order ──── errors? ──► ApiError { details per field }      │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  2. render_with_style (brand from ConfigState, date = now)              │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  3. to_pdf ──► write <output_dir>/facture.pdf (replaces previous file)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};
use facture_core::{Catalog, Money, Order};
use facture_render::RenderedDocument;
use serde::Serialize;
use tracing::info;

use crate::error::ApiError;
use crate::state::{ConfigState, OrderSession};

/// Result of a successful submission.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceResponse {
    /// Where the PDF was written
    pub path: PathBuf,
    pub total: Money,
    pub rows: usize,
    pub pages: usize,
}

/// Validates and renders the session's order, then writes the PDF.
pub fn submit_invoice<Tz>(
    session: &mut OrderSession,
    catalog: &Catalog,
    config: &ConfigState,
    now: &DateTime<Tz>,
) -> Result<InvoiceResponse, ApiError>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let style = config.render_style();
    let document = session.submit(catalog, &style, now)?;

    let path = config.output_path();
    write_invoice(document, &path)?;

    info!(
        path = %path.display(),
        total = %document.total(),
        pages = document.page_count(),
        "Invoice written"
    );

    Ok(InvoiceResponse {
        total: document.total(),
        rows: document.table().body.len(),
        pages: document.page_count(),
        path,
    })
}

/// One-shot submission of an order loaded from a file.
pub fn render_order<Tz>(
    order: Order,
    catalog: &Catalog,
    config: &ConfigState,
    now: &DateTime<Tz>,
) -> Result<InvoiceResponse, ApiError>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let mut session = OrderSession::from_order(order);
    submit_invoice(&mut session, catalog, config, now)
}

/// Encodes `document` and writes it to `path`, creating parent directories.
pub fn write_invoice(document: &RenderedDocument, path: &Path) -> Result<(), ApiError> {
    let bytes = document.to_pdf()?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, bytes)?;
    Ok(())
}
