//! # API Error Type
//!
//! Unified error type for CLI commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Facture                                │
//! │                                                                         │
//! │  Command Function  ── Result<T, ApiError>                               │
//! │         │                                                               │
//! │         ├── FormErrors ────────► VALIDATION_ERROR + one detail per field│
//! │         ├── CoreError ─────────► NOT_FOUND / VALIDATION_ERROR           │
//! │         ├── RenderError ───────► RENDER_ERROR (logged)                  │
//! │         ├── io::Error ─────────► IO_ERROR                               │
//! │         └── serde_json::Error ─► INVALID_INPUT                          │
//! │                                                                         │
//! │  Session loop prints `message` and each `details` entry next to         │
//! │  its field; one-shot commands exit non-zero.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use facture_core::{CoreError, FormErrors, ValidationError};
use facture_render::RenderError;

/// API error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "Le formulaire contient des erreurs",
///   "details": [{ "field": "clientName", "message": "Le nom du client est requis" }]
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,

    /// Per-field messages for form validation failures
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<FieldMessage>,
}

/// A message attached to one form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldMessage {
    pub field: String,
    pub message: String,
}

impl From<&ValidationError> for FieldMessage {
    fn from(err: &ValidationError) -> Self {
        FieldMessage {
            field: err.field(),
            message: err.to_string(),
        }
    }
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Referenced line or item does not exist
    NotFound,

    /// Form validation failed
    ValidationError,

    /// Malformed order file or command argument
    InvalidInput,

    /// PDF encoding failed
    RenderError,

    /// Reading or writing a file failed
    IoError,

    /// Internal error
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
            details: Vec::new(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::InvalidInput, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts collected form errors, keeping one entry per field.
impl From<FormErrors> for ApiError {
    fn from(errors: FormErrors) -> Self {
        ApiError {
            code: ErrorCode::ValidationError,
            message: "Le formulaire contient des erreurs".to_string(),
            details: errors.errors().iter().map(FieldMessage::from).collect(),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError {
            code: ErrorCode::ValidationError,
            message: err.to_string(),
            details: vec![FieldMessage::from(&err)],
        }
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::LineOutOfRange { index, .. } => {
                ApiError::not_found("Line", &(index + 1).to_string())
            }
            CoreError::Validation(e) => ApiError::from(e),
            CoreError::DuplicateItem(_) | CoreError::NegativePrice { .. } => {
                tracing::error!("Catalog is inconsistent: {}", err);
                ApiError::internal(err.to_string())
            }
        }
    }
}

impl From<RenderError> for ApiError {
    fn from(err: RenderError) -> Self {
        tracing::error!("Invoice encoding failed: {}", err);
        ApiError::new(ErrorCode::RenderError, err.to_string())
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::new(ErrorCode::IoError, err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::invalid_input(format!("Invalid order file: {}", err))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)?;
        for detail in &self.details {
            write!(f, "\n  {}: {}", detail.field, detail.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use facture_core::{validate_order, Catalog, Order};

    #[test]
    fn test_form_errors_keep_field_details() {
        let order = Order::new();
        let errors = validate_order(&order, Catalog::textbooks()).unwrap_err();
        let api = ApiError::from(errors);

        assert_eq!(api.code, ErrorCode::ValidationError);
        assert_eq!(
            api.details,
            vec![
                FieldMessage {
                    field: "clientName".into(),
                    message: "Le nom du client est requis".into(),
                },
                FieldMessage {
                    field: "lines.0.itemId".into(),
                    message: "Veuillez sélectionner un manuel".into(),
                },
            ]
        );
    }

    #[test]
    fn test_line_out_of_range_is_one_based() {
        let api = ApiError::from(CoreError::LineOutOfRange { index: 2, len: 1 });
        assert_eq!(api.code, ErrorCode::NotFound);
        assert_eq!(api.message, "Line not found: 3");
    }

    #[test]
    fn test_serializes_screaming_code_and_skips_empty_details() {
        let json = serde_json::to_value(ApiError::invalid_input("bad")).unwrap();
        assert_eq!(json["code"], "INVALID_INPUT");
        assert_eq!(json["message"], "bad");
        assert!(json.get("details").is_none());
    }

    #[test]
    fn test_display_lists_fields() {
        let api = ApiError::from(ValidationError::NoLines);
        assert_eq!(
            api.to_string(),
            "[ValidationError] Ajoutez au moins un manuel\n  lines: Ajoutez au moins un manuel"
        );
    }
}
