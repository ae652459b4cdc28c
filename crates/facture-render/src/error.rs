//! Renderer error type.
//!
//! Laying out an invoice cannot fail; only turning the layout into PDF
//! bytes can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    /// The PDF object model refused to encode or serialize.
    #[error("PDF generation failed: {0}")]
    Pdf(#[from] lopdf::Error),

    /// Writing the serialized bytes failed.
    #[error("PDF write failed: {0}")]
    Io(#[from] std::io::Error),
}
