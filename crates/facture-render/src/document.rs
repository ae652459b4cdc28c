//! # Rendered Document
//!
//! The immutable result of one submission: positioned drawing elements on
//! logical pages, plus the table, date and total they were drawn from.
//!
//! ## Coordinate System
//! ```text
//! (0,0) ───────────────────────► x (mm)      A4 portrait
//!   │   ┌───────────────────┐                210 × 297 mm
//!   │   │        (●)        │  badge
//!   │   │      FACTURE      │  title
//!   │   │ Client: …         │
//!   │   │ Date: …           │
//!   │   │ ┌──┬──┬──┬──┐     │  table
//!   │   │ └──┴──┴──┴──┘     │
//!   │   │       Total: …    │
//!   ▼   └───────────────────┘
//!   y (mm, downwards)
//! ```
//! Text positions are baselines. The PDF encoder flips the y axis.

use facture_core::Money;

use crate::error::RenderError;
use crate::pdf;

pub const PAGE_WIDTH: f32 = 210.0;
pub const PAGE_HEIGHT: f32 = 297.0;

// =============================================================================
// Drawing Primitives
// =============================================================================

/// RGB color, 0-255 per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    pub const fn gray(level: u8) -> Self {
        Color::rgb(level, level, level)
    }

    /// Channels scaled to 0.0-1.0.
    pub fn components(&self) -> [f32; 3] {
        [self.r, self.g, self.b].map(|c| f32::from(c) / 255.0)
    }
}

/// One of the two standard fonts the invoice uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Helvetica,
    HelveticaBold,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Point { x, y }
    }
}

/// Axis-aligned rectangle, `(x, y)` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

/// A single line of text at a baseline position.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub origin: Point,
    pub font: Font,
    pub size: f32,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Circle {
        center: Point,
        radius: f32,
        fill: Color,
    },
    Rect {
        rect: Rect,
        fill: Option<Color>,
        stroke: Option<Stroke>,
    },
    Text(TextRun),
}

/// One logical page, elements in painting order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    elements: Vec<Element>,
}

impl Page {
    pub(crate) fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextRun> {
        self.elements.iter().filter_map(|e| match e {
            Element::Text(run) => Some(run),
            _ => None,
        })
    }
}

// =============================================================================
// Invoice Table
// =============================================================================

/// One body row, already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub title: String,
    pub quantity: String,
    pub unit_price: String,
    pub line_total: String,
}

impl TableRow {
    pub fn cells(&self) -> [&str; 4] {
        [
            &self.title,
            &self.quantity,
            &self.unit_price,
            &self.line_total,
        ]
    }
}

/// The line-item table: fixed header plus one row per resolved line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceTable {
    pub head: [&'static str; 4],
    pub body: Vec<TableRow>,
}

// =============================================================================
// Rendered Document
// =============================================================================

/// The finished invoice. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedDocument {
    pub(crate) pages: Vec<Page>,
    pub(crate) client_name: String,
    pub(crate) date_label: String,
    pub(crate) table: InvoiceTable,
    pub(crate) total: Money,
    pub(crate) total_line: String,
}

impl RenderedDocument {
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn client_name(&self) -> &str {
        &self.client_name
    }

    /// French long-form date printed in the client block.
    pub fn date_label(&self) -> &str {
        &self.date_label
    }

    pub fn table(&self) -> &InvoiceTable {
        &self.table
    }

    /// Grand total over the resolved lines.
    pub fn total(&self) -> Money {
        self.total
    }

    /// The total line exactly as printed, e.g. `Total: 3800 FCFA`.
    pub fn total_line(&self) -> &str {
        &self.total_line
    }

    /// Every text run of every page, in painting order.
    pub fn texts(&self) -> impl Iterator<Item = &TextRun> {
        self.pages.iter().flat_map(Page::texts)
    }

    /// Encodes the document as PDF bytes.
    pub fn to_pdf(&self) -> Result<Vec<u8>, RenderError> {
        pdf::encode(self)
    }
}
