//! # Invoice Layout
//!
//! Places every element of the invoice at fixed coordinates.
//!
//! ## Page Plan (mm, baselines for text)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  y=20  badge circle r=10, brand text at y=24 (bold 8pt, white)          │
//! │  y=40  FACTURE (bold 16pt, accent)                                      │
//! │  y=70  Client: …          x=20 (bold 12pt, black)                       │
//! │  y=78  Date: …            x=20                                          │
//! │  y=85  table top, 14mm side margins                                     │
//! │        ┌────────────────┬──────────┬───────────────┬───────────┐        │
//! │        │ Manuel         │ Quantité │ Prix unitaire │ Total     │ head   │
//! │        ├────────────────┼──────────┼───────────────┼───────────┤        │
//! │        │ …              │ 2        │ 1100 FCFA     │ 2200 FCFA │ even ░ │
//! │        │ …              │ 1        │ 1600 FCFA     │ 1600 FCFA │ odd    │
//! │        └────────────────┴──────────┴───────────────┴───────────┘        │
//! │  table bottom + 10   Total: 3800 FCFA   x=150 (bold 14pt, accent)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rows that would cross the bottom margin move to a new page under a
//! repeated header row. The total line follows the same rule.

use facture_core::{compute_total, Catalog, Money, OrderLine};

use crate::document::{
    Color, Element, Font, InvoiceTable, Page, Point, Rect, RenderedDocument, Stroke, TableRow,
    TextRun, PAGE_HEIGHT, PAGE_WIDTH,
};
use crate::metrics::{text_width, wrap, MM_PER_PT};
use crate::style::RenderStyle;

pub const TABLE_HEAD: [&str; 4] = ["Manuel", "Quantité", "Prix unitaire", "Total"];
pub const TITLE_TEXT: &str = "FACTURE";

const MARGIN: f32 = 14.0;

const BADGE_CENTER_Y: f32 = 20.0;
const BADGE_RADIUS: f32 = 10.0;
const BRAND_BASELINE: f32 = 24.0;
const BRAND_SIZE: f32 = 8.0;

const TITLE_BASELINE: f32 = 40.0;
const TITLE_SIZE: f32 = 16.0;

const CLIENT_X: f32 = 20.0;
const CLIENT_BASELINE: f32 = 70.0;
const DATE_BASELINE: f32 = 78.0;
const CLIENT_SIZE: f32 = 12.0;

const TABLE_TOP: f32 = 85.0;
const COLUMN_WIDTHS: [f32; 4] = [90.0, 24.0, 34.0, 34.0];
const CELL_SIZE: f32 = 10.0;
const CELL_PADDING: f32 = 5.0 * MM_PER_PT;
const LINE_HEIGHT_FACTOR: f32 = 1.15;
const GRID_WIDTH: f32 = 0.1;

const TOTAL_X: f32 = 150.0;
const TOTAL_GAP: f32 = 10.0;
const TOTAL_SIZE: f32 = 14.0;

fn cell_line_height() -> f32 {
    CELL_SIZE * LINE_HEIGHT_FACTOR * MM_PER_PT
}

/// Formats the resolvable lines as table rows, skipping the rest.
pub fn table_rows(lines: &[OrderLine], catalog: &Catalog) -> Vec<TableRow> {
    lines
        .iter()
        .filter_map(|line| {
            let item = catalog.lookup(&line.item_id)?;
            Some(TableRow {
                title: item.title.clone(),
                quantity: line.quantity.to_string(),
                unit_price: item.unit_price.to_string(),
                line_total: item.unit_price.multiply_quantity(line.quantity).to_string(),
            })
        })
        .collect()
}

pub fn total_line(total: Money) -> String {
    format!("Total: {total}")
}

/// Builds the full document from an order snapshot.
pub(crate) fn build(
    style: &RenderStyle,
    client_name: &str,
    lines: &[OrderLine],
    catalog: &Catalog,
    date_label: String,
) -> RenderedDocument {
    let table = InvoiceTable {
        head: TABLE_HEAD,
        body: table_rows(lines, catalog),
    };
    let total = compute_total(lines, catalog);
    let total_line = total_line(total);

    let mut layout = Layout::new(style);
    layout.header();
    layout.client_block(client_name, &date_label);
    let table_bottom = layout.table(&table);
    layout.total(&total_line, table_bottom);

    RenderedDocument {
        pages: layout.finish(),
        client_name: client_name.to_string(),
        date_label,
        table,
        total,
        total_line,
    }
}

// =============================================================================
// Layout Cursor
// =============================================================================

struct Layout<'a> {
    style: &'a RenderStyle,
    done: Vec<Page>,
    current: Page,
}

impl<'a> Layout<'a> {
    fn new(style: &'a RenderStyle) -> Self {
        Layout {
            style,
            done: Vec::new(),
            current: Page::default(),
        }
    }

    fn new_page(&mut self) {
        let page = std::mem::take(&mut self.current);
        self.done.push(page);
    }

    fn finish(mut self) -> Vec<Page> {
        self.new_page();
        self.done
    }

    fn text(&mut self, text: impl Into<String>, x: f32, y: f32, font: Font, size: f32, color: Color) {
        self.current.push(Element::Text(TextRun {
            text: text.into(),
            origin: Point::new(x, y),
            font,
            size,
            color,
        }));
    }

    fn centered_text(&mut self, text: &str, y: f32, font: Font, size: f32, color: Color) {
        let x = (PAGE_WIDTH - text_width(text, font, size)) / 2.0;
        self.text(text, x, y, font, size, color);
    }

    fn header(&mut self) {
        let style = self.style;
        self.current.push(Element::Circle {
            center: Point::new(PAGE_WIDTH / 2.0, BADGE_CENTER_Y),
            radius: BADGE_RADIUS,
            fill: style.accent,
        });
        self.centered_text(
            &style.brand_text,
            BRAND_BASELINE,
            Font::HelveticaBold,
            BRAND_SIZE,
            style.badge_text,
        );
        self.centered_text(
            TITLE_TEXT,
            TITLE_BASELINE,
            Font::HelveticaBold,
            TITLE_SIZE,
            style.accent,
        );
    }

    fn client_block(&mut self, client_name: &str, date_label: &str) {
        self.text(
            format!("Client: {client_name}"),
            CLIENT_X,
            CLIENT_BASELINE,
            Font::HelveticaBold,
            CLIENT_SIZE,
            Color::BLACK,
        );
        self.text(
            format!("Date: {date_label}"),
            CLIENT_X,
            DATE_BASELINE,
            Font::HelveticaBold,
            CLIENT_SIZE,
            Color::BLACK,
        );
    }

    /// Draws the table and returns the y coordinate of its bottom edge.
    fn table(&mut self, table: &InvoiceTable) -> f32 {
        let mut y = self.head_row(TABLE_TOP, &table.head);

        for (index, row) in table.body.iter().enumerate() {
            let cells = wrap_cells(row.cells(), Font::Helvetica);
            let height = row_height(&cells);

            if y + height > PAGE_HEIGHT - MARGIN {
                self.new_page();
                y = self.head_row(MARGIN, &table.head);
            }

            let fill = (index % 2 == 0).then_some(self.style.alternate_fill);
            let text_color = self.style.body_text;
            self.row(y, &cells, height, fill, Font::Helvetica, text_color);
            y += height;
        }

        y
    }

    fn head_row(&mut self, y: f32, head: &[&str; 4]) -> f32 {
        let cells = wrap_cells(*head, Font::HelveticaBold);
        let height = row_height(&cells);
        let fill = Some(self.style.header_fill);
        let text_color = self.style.header_text;
        self.row(y, &cells, height, fill, Font::HelveticaBold, text_color);
        y + height
    }

    fn row(
        &mut self,
        y: f32,
        cells: &[Vec<String>; 4],
        height: f32,
        fill: Option<Color>,
        font: Font,
        text_color: Color,
    ) {
        let stroke = Some(Stroke {
            color: self.style.grid_line,
            width: GRID_WIDTH,
        });
        let line_height = cell_line_height();
        let font_height = CELL_SIZE * MM_PER_PT;

        let mut x = MARGIN;
        for (lines, width) in cells.iter().zip(COLUMN_WIDTHS) {
            self.current.push(Element::Rect {
                rect: Rect::new(x, y, width, height),
                fill,
                stroke,
            });
            for (i, line) in lines.iter().enumerate() {
                if line.is_empty() {
                    continue;
                }
                let baseline = y
                    + CELL_PADDING
                    + line_height * i as f32
                    + line_height / 2.0
                    + font_height * 0.35;
                self.text(line.as_str(), x + CELL_PADDING, baseline, font, CELL_SIZE, text_color);
            }
            x += width;
        }
    }

    fn total(&mut self, total_line: &str, table_bottom: f32) {
        let width = text_width(total_line, Font::HelveticaBold, TOTAL_SIZE);
        let x = TOTAL_X.min(PAGE_WIDTH - MARGIN - width);

        let mut y = table_bottom + TOTAL_GAP;
        if y > PAGE_HEIGHT - MARGIN {
            self.new_page();
            y = MARGIN + TOTAL_GAP;
        }

        let color = self.style.accent;
        self.text(total_line, x, y, Font::HelveticaBold, TOTAL_SIZE, color);
    }
}

fn wrap_cells(cells: [&str; 4], font: Font) -> [Vec<String>; 4] {
    let mut index = 0;
    cells.map(|text| {
        let width = COLUMN_WIDTHS[index] - 2.0 * CELL_PADDING;
        index += 1;
        wrap(text, font, CELL_SIZE, width)
    })
}

fn row_height(cells: &[Vec<String>; 4]) -> f32 {
    let lines = cells.iter().map(Vec::len).max().unwrap_or(1).max(1);
    lines as f32 * cell_line_height() + 2.0 * CELL_PADDING
}

// =============================================================================
// Unit Tests
// =============================================================================
