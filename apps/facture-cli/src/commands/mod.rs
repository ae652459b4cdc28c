//! # Commands Module
//!
//! Everything the order form can ask of the backend.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── catalog.rs  ◄─── Textbook picker entries
//! ├── order.rs    ◄─── Form edits, live total, order files
//! └── invoice.rs  ◄─── Validation, rendering, facture.pdf
//! ```
//!
//! ## State Injection
//! Each command takes only the state it needs:
//! ```rust,ignore
//! // Only needs the catalog
//! fn list_catalog(catalog: &Catalog)
//!
//! // Edits the form
//! fn select_item(session: &mut OrderSession, catalog: &Catalog, number, item_id)
//!
//! // Needs session and configuration
//! fn submit_invoice(session: &mut OrderSession, catalog, config: &ConfigState, now)
//! ```

pub mod catalog;
pub mod invoice;
pub mod order;
