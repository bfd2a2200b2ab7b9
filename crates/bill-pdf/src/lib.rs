//! Bill PDF Rendering
//!
//! Renders a snapshot of the billing form into an A4 landscape PDF,
//! entirely in memory. The caller hands over plain data (`BillDocument`)
//! and gets the finished bytes back; nothing here touches the DOM, so the
//! same code runs in the browser and in native tests.
//!
//! Pagination works on fixed line slots: every page repeats the letterhead
//! and the column headers, then holds up to [`ROW_SLOTS_PER_PAGE`] lines.
//! The grand total line occupies one slot of its own, so a bill whose rows
//! exactly fill a page rolls the total onto a fresh page instead of
//! colliding with the footer.

use std::io::BufWriter;

use printpdf::{
    BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// A4 landscape geometry, in millimeters. PDF coordinates grow upward from
// the bottom left corner.
pub const PAGE_WIDTH_MM: f32 = 297.0;
pub const PAGE_HEIGHT_MM: f32 = 210.0;

const MARGIN_MM: f32 = 15.0;
const STAMP_Y_MM: f32 = 200.0;
const TITLE_Y_MM: f32 = 191.0;
const HEADER_Y_MM: f32 = 178.0;
const HEADER_RULE_Y_MM: f32 = 174.5;
const FIRST_ROW_Y_MM: f32 = 168.0;
const ROW_STEP_MM: f32 = 7.0;
const FOOTER_Y_MM: f32 = 12.0;

const TITLE_SIZE: f32 = 16.0;
const STAMP_SIZE: f32 = 10.0;
const HEADER_SIZE: f32 = 11.0;
const BODY_SIZE: f32 = 10.0;
const TOTAL_SIZE: f32 = 12.0;
const FOOTER_SIZE: f32 = 9.0;

// Column baselines, left to right.
const COL_SERIAL_X: f32 = MARGIN_MM;
const COL_ITEM_X: f32 = 35.0;
const COL_QUANTITY_X: f32 = 140.0;
const COL_UNIT_X: f32 = 170.0;
const COL_RATE_X: f32 = 195.0;
const COL_TOTAL_X: f32 = 245.0;

/// Line slots available under the header on every page. The grand total
/// line takes one slot, so it can never run past the footer.
pub const ROW_SLOTS_PER_PAGE: usize = 19;

/// Everything one export renders. Totals arrive precomputed so the PDF
/// shows exactly the numbers the form showed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BillDocument {
    /// Shop name, centered at the top of every page.
    pub title: String,
    /// Formatted wall clock text, top right of every page.
    pub stamped_at: String,
    pub rows: Vec<BillRow>,
    pub grand_total: f64,
}

/// One printed bill line.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BillRow {
    pub serial: u32,
    pub item: String,
    pub quantity: f64,
    /// Unit label as displayed, "kg" or "g".
    pub unit: String,
    /// Price per kilogram.
    pub rate: f64,
    /// Row total in the same currency as `rate`.
    pub total: f64,
}

#[derive(Debug, Error)]
pub enum BillPdfError {
    #[error("builtin font unavailable: {0}")]
    Font(String),
    #[error("pdf write failed: {0}")]
    Write(String),
}

/// Render the whole bill and return the PDF bytes.
pub fn render_pdf(bill: &BillDocument) -> Result<Vec<u8>, BillPdfError> {
    let pages = page_count(bill.rows.len());
    let (doc, first_page, first_layer) = PdfDocument::new(
        bill.title.clone(),
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "bill",
    );
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| BillPdfError::Font(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| BillPdfError::Font(e.to_string()))?;

    for page in 0..pages {
        let layer = if page == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_idx, layer_idx) =
                doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "bill");
            doc.get_page(page_idx).get_layer(layer_idx)
        };
        draw_page(&layer, &regular, &bold, bill, page, pages);
    }

    let mut writer = BufWriter::new(Vec::<u8>::new());
    doc.save(&mut writer)
        .map_err(|e| BillPdfError::Write(e.to_string()))?;
    writer
        .into_inner()
        .map_err(|e| BillPdfError::Write(e.to_string()))
}

/// Page number footer text, 1-based: "current / total".
pub fn page_footer_label(current: usize, total: usize) -> String {
    format!("{} / {}", current, total)
}

/// Format an amount as money text: two decimals, comma separated thousands.
pub fn format_money(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, dec_part) = match fixed.split_once('.') {
        Some(parts) => parts,
        None => (fixed.as_str(), "00"),
    };
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, dec_part)
}

/// Number of pages needed for `row_count` rows plus the grand total line.
/// An empty bill still prints one page.
fn page_count(row_count: usize) -> usize {
    (row_count + 1).div_ceil(ROW_SLOTS_PER_PAGE)
}

/// Row index range printed on `page`.
fn rows_for_page(page: usize, row_count: usize) -> std::ops::Range<usize> {
    let start = (page * ROW_SLOTS_PER_PAGE).min(row_count);
    let end = ((page + 1) * ROW_SLOTS_PER_PAGE).min(row_count);
    start..end
}

/// Page carrying the grand total line, always the slot after the last row.
fn grand_total_page(row_count: usize) -> usize {
    row_count / ROW_SLOTS_PER_PAGE
}

fn draw_page(
    layer: &PdfLayerReference,
    regular: &IndirectFontRef,
    bold: &IndirectFontRef,
    bill: &BillDocument,
    page: usize,
    pages: usize,
) {
    // Letterhead: centered title, wall clock top right.
    let title_x = (PAGE_WIDTH_MM - approx_text_width_mm(&bill.title, TITLE_SIZE)) / 2.0;
    layer.use_text(
        bill.title.clone(),
        TITLE_SIZE,
        Mm(title_x.max(MARGIN_MM)),
        Mm(TITLE_Y_MM),
        bold,
    );
    let stamp_x =
        PAGE_WIDTH_MM - MARGIN_MM - approx_text_width_mm(&bill.stamped_at, STAMP_SIZE);
    layer.use_text(
        bill.stamped_at.clone(),
        STAMP_SIZE,
        Mm(stamp_x.max(MARGIN_MM)),
        Mm(STAMP_Y_MM),
        regular,
    );

    draw_column_headers(layer, bold);

    let mut y = FIRST_ROW_Y_MM;
    for row in &bill.rows[rows_for_page(page, bill.rows.len())] {
        layer.use_text(row.serial.to_string(), BODY_SIZE, Mm(COL_SERIAL_X), Mm(y), regular);
        layer.use_text(row.item.clone(), BODY_SIZE, Mm(COL_ITEM_X), Mm(y), regular);
        layer.use_text(
            format!("{:.2}", row.quantity),
            BODY_SIZE,
            Mm(COL_QUANTITY_X),
            Mm(y),
            regular,
        );
        layer.use_text(row.unit.clone(), BODY_SIZE, Mm(COL_UNIT_X), Mm(y), regular);
        layer.use_text(format_money(row.rate), BODY_SIZE, Mm(COL_RATE_X), Mm(y), regular);
        layer.use_text(format_money(row.total), BODY_SIZE, Mm(COL_TOTAL_X), Mm(y), regular);
        y -= ROW_STEP_MM;
    }

    if page == grand_total_page(bill.rows.len()) {
        let slot = bill.rows.len() % ROW_SLOTS_PER_PAGE;
        let total_y = FIRST_ROW_Y_MM - slot as f32 * ROW_STEP_MM;
        draw_rule(layer, total_y + 4.5);
        layer.use_text("Grand Total:", TOTAL_SIZE, Mm(COL_RATE_X), Mm(total_y), bold);
        layer.use_text(
            format_money(bill.grand_total),
            TOTAL_SIZE,
            Mm(COL_TOTAL_X),
            Mm(total_y),
            bold,
        );
    }

    // Printed page numbers are 1-based.
    let label = page_footer_label(page + 1, pages);
    let footer_x = (PAGE_WIDTH_MM - approx_text_width_mm(&label, FOOTER_SIZE)) / 2.0;
    layer.use_text(label, FOOTER_SIZE, Mm(footer_x), Mm(FOOTER_Y_MM), regular);
}

fn draw_column_headers(layer: &PdfLayerReference, bold: &IndirectFontRef) {
    let y = HEADER_Y_MM;
    layer.use_text("S.no.", HEADER_SIZE, Mm(COL_SERIAL_X), Mm(y), bold);
    layer.use_text("Items", HEADER_SIZE, Mm(COL_ITEM_X), Mm(y), bold);
    layer.use_text("Quantity", HEADER_SIZE, Mm(COL_QUANTITY_X), Mm(y), bold);
    layer.use_text("Unit", HEADER_SIZE, Mm(COL_UNIT_X), Mm(y), bold);
    layer.use_text("Rate per kg", HEADER_SIZE, Mm(COL_RATE_X), Mm(y), bold);
    layer.use_text("Total", HEADER_SIZE, Mm(COL_TOTAL_X), Mm(y), bold);
    draw_rule(layer, HEADER_RULE_Y_MM);
}

fn draw_rule(layer: &PdfLayerReference, y: f32) {
    layer.add_line(Line {
        points: vec![
            (Point::new(Mm(MARGIN_MM), Mm(y)), false),
            (Point::new(Mm(PAGE_WIDTH_MM - MARGIN_MM), Mm(y)), false),
        ],
        is_closed: false,
    });
}

/// Rough Helvetica line width for centering and right alignment. Average
/// glyph advance is close to half the font size; 1 pt is 0.3528 mm.
fn approx_text_width_mm(text: &str, font_size_pt: f32) -> f32 {
    text.chars().count() as f32 * font_size_pt * 0.5 * 0.3528
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_bill(row_count: usize) -> BillDocument {
        let rows: Vec<BillRow> = (0..row_count)
            .map(|i| BillRow {
                serial: i as u32 + 1,
                item: format!("Item {}", i + 1),
                quantity: 2.0,
                unit: "kg".to_string(),
                rate: 10.0,
                total: 20.0,
            })
            .collect();
        BillDocument {
            title: "WeighBill".to_string(),
            stamped_at: "Tue, Aug 25, 2026, 9:14:05 PM".to_string(),
            grand_total: rows.len() as f64 * 20.0,
            rows,
        }
    }

    #[test]
    fn test_footer_label() {
        assert_eq!(page_footer_label(1, 1), "1 / 1");
        assert_eq!(page_footer_label(2, 5), "2 / 5");
    }

    #[test]
    fn test_page_count_empty_bill_is_one_page() {
        assert_eq!(page_count(0), 1);
    }

    #[test]
    fn test_page_count_rolls_grand_total_to_fresh_page() {
        assert_eq!(page_count(ROW_SLOTS_PER_PAGE - 1), 1);
        // a full page of rows leaves no slot for the grand total
        assert_eq!(page_count(ROW_SLOTS_PER_PAGE), 2);
        assert_eq!(page_count(ROW_SLOTS_PER_PAGE * 3), 4);
    }

    #[test]
    fn test_rows_for_page_partition_all_rows_in_order() {
        let count = ROW_SLOTS_PER_PAGE * 2 + 5;
        let mut covered = 0;
        for page in 0..page_count(count) {
            let range = rows_for_page(page, count);
            assert_eq!(range.start, covered);
            assert!(range.end - range.start <= ROW_SLOTS_PER_PAGE);
            covered = range.end;
        }
        assert_eq!(covered, count);
    }

    #[test]
    fn test_grand_total_page_follows_last_row() {
        assert_eq!(grand_total_page(0), 0);
        assert_eq!(grand_total_page(ROW_SLOTS_PER_PAGE - 1), 0);
        assert_eq!(grand_total_page(ROW_SLOTS_PER_PAGE), 1);
    }

    #[test]
    fn test_last_slot_stays_above_footer() {
        let last_y = FIRST_ROW_Y_MM - (ROW_SLOTS_PER_PAGE as f32) * ROW_STEP_MM;
        assert!(last_y > FOOTER_Y_MM + 10.0);
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(5.0), "5.00");
        assert_eq!(format_money(20.5), "20.50");
        assert_eq!(format_money(1234.0), "1,234.00");
        assert_eq!(format_money(1234567.891), "1,234,567.89");
        assert_eq!(format_money(-42.5), "-42.50");
    }

    #[test]
    fn test_render_single_page_bill() {
        let bytes = render_pdf(&make_bill(3)).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_render_empty_bill_still_produces_a_page() {
        let bytes = render_pdf(&make_bill(0)).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_render_multi_page_bill() {
        let bill = make_bill(ROW_SLOTS_PER_PAGE * 2 + 3);
        let bytes = render_pdf(&bill).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        // three pages of content weigh noticeably more than one
        assert!(bytes.len() > render_pdf(&make_bill(1)).unwrap().len());
    }
}
