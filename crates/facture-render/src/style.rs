//! Colors and brand text of the invoice.

use crate::document::Color;

/// Brand blue used for the badge, title, header row and total.
pub const ACCENT: Color = Color::rgb(0, 102, 204);

/// Visual parameters of the invoice.
///
/// `Default` reproduces the stock invoice: blue badge reading `AS SHABIL`,
/// blue header row, light gray zebra rows.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderStyle {
    /// Short text inside the circular badge.
    pub brand_text: String,
    /// Badge fill, title and total line color.
    pub accent: Color,
    pub badge_text: Color,
    pub header_fill: Color,
    pub header_text: Color,
    /// Fill of every second body row.
    pub alternate_fill: Color,
    pub body_text: Color,
    pub grid_line: Color,
}

impl Default for RenderStyle {
    fn default() -> Self {
        RenderStyle {
            brand_text: "AS SHABIL".to_string(),
            accent: ACCENT,
            badge_text: Color::WHITE,
            header_fill: ACCENT,
            header_text: Color::WHITE,
            alternate_fill: Color::gray(245),
            body_text: Color::gray(80),
            grid_line: Color::gray(200),
        }
    }
}

impl RenderStyle {
    /// Default style with a different badge text.
    pub fn with_brand(brand_text: impl Into<String>) -> Self {
        RenderStyle {
            brand_text: brand_text.into(),
            ..Self::default()
        }
    }
}
