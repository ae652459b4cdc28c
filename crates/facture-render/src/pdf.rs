//! PDF encoding of a [`RenderedDocument`].
//!
//! One content stream per page, the two standard Helvetica faces with
//! WinAnsi encoding, no embedded fonts. Layout coordinates are millimetres
//! from the top-left corner; PDF user space is points from the bottom-left,
//! so every y is flipped here.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream};
use tracing::debug;

use crate::document::{Color, Element, Font, Page, RenderedDocument, Stroke, TextRun};
use crate::document::{PAGE_HEIGHT, PAGE_WIDTH};
use crate::error::RenderError;
use crate::metrics::MM_PER_PT;

const PDF_VERSION: &str = "1.5";

/// Bezier control distance for a quarter circle of radius 1.
const KAPPA: f32 = 0.5523;

fn pt(mm: f32) -> f32 {
    mm / MM_PER_PT
}

fn flip(y_mm: f32) -> f32 {
    pt(PAGE_HEIGHT - y_mm)
}

fn font_resource(font: Font) -> &'static str {
    match font {
        Font::Helvetica => "F1",
        Font::HelveticaBold => "F2",
    }
}

/// Encodes `text` as WinAnsi (CP1252) bytes, replacing what it cannot hold.
pub(crate) fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            ' '..='~' | '\u{a0}'..='\u{ff}' => c as u8,
            '€' => 0x80,
            '‚' => 0x82,
            '…' => 0x85,
            'Œ' => 0x8C,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '–' => 0x96,
            '—' => 0x97,
            'œ' => 0x9C,
            'Ÿ' => 0x9F,
            _ => b'?',
        })
        .collect()
}

fn real(value: f32) -> Object {
    Object::Real(value)
}

fn fill_color(color: Color) -> Operation {
    Operation::new("rg", color.components().into_iter().map(real).collect())
}

fn stroke_color(color: Color) -> Operation {
    Operation::new("RG", color.components().into_iter().map(real).collect())
}

// =============================================================================
// Content Streams
// =============================================================================

fn circle_ops(ops: &mut Vec<Operation>, cx: f32, cy: f32, r: f32, fill: Color) {
    let (cx, cy, r) = (pt(cx), flip(cy), pt(r));
    let k = r * KAPPA;

    let curve = |points: [f32; 6]| Operation::new("c", points.into_iter().map(real).collect());

    ops.push(fill_color(fill));
    ops.push(Operation::new("m", vec![real(cx + r), real(cy)]));
    ops.push(curve([cx + r, cy + k, cx + k, cy + r, cx, cy + r]));
    ops.push(curve([cx - k, cy + r, cx - r, cy + k, cx - r, cy]));
    ops.push(curve([cx - r, cy - k, cx - k, cy - r, cx, cy - r]));
    ops.push(curve([cx + k, cy - r, cx + r, cy - k, cx + r, cy]));
    ops.push(Operation::new("f", vec![]));
}

fn rect_ops(
    ops: &mut Vec<Operation>,
    rect: &crate::document::Rect,
    fill: Option<Color>,
    stroke: Option<Stroke>,
) {
    let paint = match (fill, stroke) {
        (Some(_), Some(_)) => "B",
        (Some(_), None) => "f",
        (None, Some(_)) => "S",
        (None, None) => return,
    };

    if let Some(color) = fill {
        ops.push(fill_color(color));
    }
    if let Some(stroke) = stroke {
        ops.push(stroke_color(stroke.color));
        ops.push(Operation::new("w", vec![real(pt(stroke.width))]));
    }

    ops.push(Operation::new(
        "re",
        vec![
            real(pt(rect.x)),
            real(flip(rect.bottom())),
            real(pt(rect.width)),
            real(pt(rect.height)),
        ],
    ));
    ops.push(Operation::new(paint, vec![]));
}

fn text_ops(ops: &mut Vec<Operation>, run: &TextRun) {
    ops.push(fill_color(run.color));
    ops.push(Operation::new("BT", vec![]));
    ops.push(Operation::new(
        "Tf",
        vec![font_resource(run.font).into(), real(run.size)],
    ));
    ops.push(Operation::new(
        "Td",
        vec![real(pt(run.origin.x)), real(flip(run.origin.y))],
    ));
    ops.push(Operation::new(
        "Tj",
        vec![Object::string_literal(win_ansi(&run.text))],
    ));
    ops.push(Operation::new("ET", vec![]));
}

fn page_content(page: &Page) -> Content {
    let mut operations = Vec::new();
    for element in page.elements() {
        match element {
            Element::Circle {
                center,
                radius,
                fill,
            } => circle_ops(&mut operations, center.x, center.y, *radius, *fill),
            Element::Rect { rect, fill, stroke } => rect_ops(&mut operations, rect, *fill, *stroke),
            Element::Text(run) => text_ops(&mut operations, run),
        }
    }
    Content { operations }
}

// =============================================================================
// Document Assembly
// =============================================================================

fn font_dictionary(base_font: &str) -> Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => base_font,
        "Encoding" => "WinAnsiEncoding",
    }
}

/// Builds the PDF and serializes it to bytes.
pub(crate) fn encode(document: &RenderedDocument) -> Result<Vec<u8>, RenderError> {
    let mut doc = Document::with_version(PDF_VERSION);
    let pages_id = doc.new_object_id();

    let regular_id = doc.add_object(font_dictionary("Helvetica"));
    let bold_id = doc.add_object(font_dictionary("Helvetica-Bold"));
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => regular_id,
            "F2" => bold_id,
        },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(document.page_count());
    for page in document.pages() {
        let content = page_content(page).encode()?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, content));
        let page_id: ObjectId = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let page_count = kids.len() as i64;
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => page_count,
        "Resources" => resources_id,
        "MediaBox" => vec![
            real(0.0),
            real(0.0),
            real(pt(PAGE_WIDTH)),
            real(pt(PAGE_HEIGHT)),
        ],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = doc.add_object(dictionary! {
        "Title" => Object::string_literal(win_ansi("Facture")),
        "Producer" => Object::string_literal("facture-render"),
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);
    doc.compress();

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;

    debug!(pages = page_count, bytes = bytes.len(), "Encoded invoice PDF");
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout;
    use crate::style::RenderStyle;
    use facture_core::{Catalog, OrderLine};

    fn document(lines: &[OrderLine]) -> RenderedDocument {
        layout::build(
            &RenderStyle::default(),
            "Awa Ndiaye",
            lines,
            Catalog::textbooks(),
            "vendredi 16 octobre 2026".to_string(),
        )
    }

    fn shown_strings(pdf: &Document, page_id: ObjectId) -> Vec<Vec<u8>> {
        let raw = pdf.get_page_content(page_id).unwrap();
        Content::decode(&raw)
            .unwrap()
            .operations
            .into_iter()
            .filter(|op| op.operator == "Tj")
            .filter_map(|op| match op.operands.first() {
                Some(Object::String(bytes, _)) => Some(bytes.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_win_ansi_mapping() {
        assert_eq!(win_ansi("Total"), b"Total".to_vec());
        assert_eq!(win_ansi("activités"), b"activit\xe9s".to_vec());
        assert_eq!(win_ansi("d’écrit"), b"d\x92\xe9crit".to_vec());
        assert_eq!(win_ansi("€"), vec![0x80]);
        assert_eq!(win_ansi("عربي"), b"????".to_vec());
    }

    #[test]
    fn test_y_axis_is_flipped() {
        assert!((flip(0.0) - 841.89).abs() < 0.01);
        assert!(flip(PAGE_HEIGHT).abs() < 1e-3);
        assert!((pt(PAGE_WIDTH) - 595.28).abs() < 0.01);
    }

    #[test]
    fn test_encodes_a_loadable_pdf() {
        let lines = vec![OrderLine::with_item("CI1", 2), OrderLine::with_item("CE11", 1)];
        let bytes = document(&lines).to_pdf().unwrap();

        assert!(bytes.starts_with(b"%PDF-1.5"));

        let pdf = Document::load_mem(&bytes).unwrap();
        let pages = pdf.get_pages();
        assert_eq!(pages.len(), 1);

        let page_id = pages[&1];
        let strings = shown_strings(&pdf, page_id);
        assert!(strings.contains(&b"FACTURE".to_vec()));
        assert!(strings.contains(&b"AS SHABIL".to_vec()));
        assert!(strings.contains(&b"Total: 3800 FCFA".to_vec()));
        assert!(strings.contains(&b"Quantit\xe9".to_vec()));
    }

    #[test]
    fn test_every_layout_page_becomes_a_pdf_page() {
        let lines: Vec<OrderLine> = (0..60).map(|_| OrderLine::with_item("CP1", 1)).collect();
        let doc = document(&lines);
        let bytes = doc.to_pdf().unwrap();

        let pdf = Document::load_mem(&bytes).unwrap();
        assert_eq!(pdf.get_pages().len(), doc.page_count());
        assert!(doc.page_count() > 1);
    }

    #[test]
    fn test_empty_order_still_encodes() {
        let bytes = document(&[]).to_pdf().unwrap();
        let pdf = Document::load_mem(&bytes).unwrap();
        let page_id = pdf.get_pages()[&1];
        assert!(shown_strings(&pdf, page_id).contains(&b"Total: 0 FCFA".to_vec()));
    }
}
