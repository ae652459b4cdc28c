//! # Error Types
//!
//! Domain-specific error types for facture-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  facture-core errors (this file)                                        │
//! │  ├── CoreError        - Catalog construction, order editing            │
//! │  ├── ValidationError  - One form field failure                         │
//! │  └── FormErrors       - Every field failure of one submission          │
//! │                                                                         │
//! │  facture-render errors (separate crate)                                 │
//! │  └── RenderError      - PDF encoding failures                          │
//! │                                                                         │
//! │  CLI errors (in app)                                                    │
//! │  └── ApiError         - What the user sees (code + message)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The pricing calculator and the document renderer have no error
//! outcomes at all: everything here belongs to catalog setup or to the
//! form gate in front of `render`.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Two catalog entries share an id.
    #[error("Catalog item {0} is listed more than once")]
    DuplicateItem(String),

    /// A catalog entry has a negative unit price.
    #[error("Catalog item {id} has a negative price ({price})")]
    NegativePrice { id: String, price: i64 },

    /// An order line position does not exist.
    ///
    /// ## When This Occurs
    /// - `select 4 CI1` typed in a session holding three lines
    /// - Removing a line that was already removed
    #[error("Line {index} does not exist (order has {len} lines)")]
    LineOutOfRange { index: usize, len: usize },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Form validation errors.
///
/// Messages are the French inline messages shown next to the offending
/// field; [`ValidationError::field`] names that field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The client name is empty or blank.
    #[error("Le nom du client est requis")]
    ClientNameRequired,

    /// A line has no item selected.
    #[error("Veuillez sélectionner un manuel")]
    ItemRequired { line: usize },

    /// A line references an id that is not in the catalog.
    #[error("Manuel inconnu : {item_id}")]
    UnknownItem { line: usize, item_id: String },

    /// A line quantity is below the minimum.
    #[error("La quantité doit être au moins {min}")]
    QuantityBelowMinimum { line: usize, min: u32 },

    /// The order has no lines at all.
    #[error("Ajoutez au moins un manuel")]
    NoLines,
}

impl ValidationError {
    /// Form field path the message belongs to, in the order JSON's
    /// camelCase naming (`clientName`, `lines.0.itemId`, ...).
    pub fn field(&self) -> String {
        match self {
            ValidationError::ClientNameRequired => "clientName".to_string(),
            ValidationError::ItemRequired { line }
            | ValidationError::UnknownItem { line, .. } => format!("lines.{line}.itemId"),
            ValidationError::QuantityBelowMinimum { line, .. } => {
                format!("lines.{line}.quantity")
            }
            ValidationError::NoLines => "lines".to_string(),
        }
    }
}

// =============================================================================
// Form Errors
// =============================================================================

/// All field errors collected from one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormErrors(Vec<ValidationError>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: ValidationError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    /// Errors attached to a given field path.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a ValidationError> {
        self.0.iter().filter(move |e| e.field() == field)
    }

    /// `Ok(())` when nothing was collected.
    pub fn into_result(self) -> Result<(), FormErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl std::fmt::Display for FormErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", error.field(), error)?;
        }
        Ok(())
    }
}

impl std::error::Error for FormErrors {}

impl IntoIterator for FormErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
