//! # facture-core: Pure Business Logic for Facture
//!
//! Catalog, order model, pricing and form validation for the textbook
//! invoice generator. Everything here is a pure function of its inputs.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Facture Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 facture-cli (presentation)                      │   │
//! │  │    order form ──► live total ──► submit ──► facture.pdf         │   │
//! │  └───────────────┬───────────────────────────────┬─────────────────┘   │
//! │                  │                               │                      │
//! │  ┌───────────────▼─────────────────┐   ┌─────────▼─────────────────┐   │
//! │  │  ★ facture-core (THIS CRATE) ★  │◄──│     facture-render        │   │
//! │  │                                 │   │  layout, French date, PDF │   │
//! │  │  catalog  order  pricing        │   └───────────────────────────┘   │
//! │  │  money    validation            │                                   │
//! │  │                                 │                                   │
//! │  │  NO I/O • PURE FUNCTIONS        │                                   │
//! │  └─────────────────────────────────┘                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - The fixed textbook table and lookup
//! - [`money`] - Whole-FCFA money type
//! - [`order`] - Editable order (client name + lines)
//! - [`pricing`] - Live total calculation
//! - [`validation`] - Submission gate
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use facture_core::{Catalog, Order};
//!
//! let catalog = Catalog::textbooks();
//! let mut order = Order::new();
//! order.select_item(0, "CI1").unwrap();
//! order.set_quantity(0, 2).unwrap();
//!
//! assert_eq!(order.total(catalog).to_string(), "2200 FCFA");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod money;
pub mod order;
pub mod pricing;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{Catalog, CatalogItem};
pub use error::{CoreError, CoreResult, FormErrors, ValidationError};
pub use money::{Money, CURRENCY_SUFFIX};
pub use order::{Order, OrderLine};
pub use pricing::{compute_total, line_total};
pub use validation::validate_order;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Smallest quantity a submitted line may carry.
pub const MIN_QUANTITY: u32 = 1;
