//! # Validation Module
//!
//! Submission gate for the order form.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Where Checks Happen                                │
//! │                                                                         │
//! │  While editing:                                                         │
//! │  └── compute_total() is lenient, unresolved lines count as 0           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  On submit: THIS MODULE                                                 │
//! │  ├── client name present                                               │
//! │  ├── at least one line                                                 │
//! │  ├── every line selects a catalog item                                 │
//! │  └── every quantity ≥ 1                                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  render() only ever sees orders that passed                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use facture_core::validation::validate_order;
//! use facture_core::{Catalog, Order, OrderLine};
//!
//! let mut order = Order::empty();
//! order.set_client_name("Daara de Pikine");
//! order.push_line(OrderLine::with_item("CI1", 2));
//! assert!(validate_order(&order, Catalog::textbooks()).is_ok());
//! ```

use crate::catalog::Catalog;
use crate::error::{FormErrors, ValidationError};
use crate::order::{Order, OrderLine};
use crate::MIN_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates the client name.
///
/// ## Rules
/// - Must not be empty or whitespace only
///
/// ## Example
/// ```rust
/// use facture_core::validation::validate_client_name;
///
/// assert!(validate_client_name("Awa Ndiaye").is_ok());
/// assert!(validate_client_name("   ").is_err());
/// ```
pub fn validate_client_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::ClientNameRequired);
    }

    Ok(())
}

/// Validates the item selection of the line at position `line`.
///
/// ## Rules
/// - An item must be selected
/// - The id must resolve in the catalog
pub fn validate_item(line: usize, item_id: &str, catalog: &Catalog) -> ValidationResult<()> {
    if item_id.trim().is_empty() {
        return Err(ValidationError::ItemRequired { line });
    }

    if !catalog.contains(item_id) {
        return Err(ValidationError::UnknownItem {
            line,
            item_id: item_id.to_string(),
        });
    }

    Ok(())
}

/// Validates the quantity of the line at position `line`.
///
/// ## Rules
/// - Must be at least [`MIN_QUANTITY`]
pub fn validate_quantity(line: usize, qty: u32) -> ValidationResult<()> {
    if qty < MIN_QUANTITY {
        return Err(ValidationError::QuantityBelowMinimum {
            line,
            min: MIN_QUANTITY,
        });
    }

    Ok(())
}

/// Validates one line, collecting both the item and the quantity error.
pub fn validate_line(index: usize, line: &OrderLine, catalog: &Catalog) -> Vec<ValidationError> {
    [
        validate_item(index, &line.item_id, catalog),
        validate_quantity(index, line.quantity),
    ]
    .into_iter()
    .filter_map(Result::err)
    .collect()
}

// =============================================================================
// Order Validator
// =============================================================================

/// Validates a whole order before it is rendered.
///
/// Every failing field is reported, not just the first, so each message
/// can be shown next to its own field.
pub fn validate_order(order: &Order, catalog: &Catalog) -> Result<(), FormErrors> {
    let mut errors = FormErrors::new();

    if let Err(e) = validate_client_name(&order.client_name) {
        errors.push(e);
    }

    if order.is_empty() {
        errors.push(ValidationError::NoLines);
    }

    for (index, line) in order.lines().iter().enumerate() {
        for e in validate_line(index, line, catalog) {
            errors.push(e);
        }
    }

    errors.into_result()
}

// =============================================================================
// Unit Tests
// =============================================================================
