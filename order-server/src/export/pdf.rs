//! PDF export
//!
//! A4 portrait, builtin Helvetica. Coordinates are millimetres from the
//! bottom-left corner of the page.

use std::ops::Range;

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};
use shared::models::{Order, OrderStatus};
use shared::{money, util};

use super::{ExportError, ExportResult, format_timestamp, truncate_chars};

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const LAYER: &str = "Layer 1";

/// Table header baseline on the first page (below title and summary)
const FIRST_TABLE_TOP: f32 = 225.0;
/// Table header baseline on continuation pages
const NEXT_TABLE_TOP: f32 = 275.0;
/// Distance from the header to the first row
const HEADER_GAP: f32 = 10.0;
const ROW_HEIGHT: f32 = 8.8;
/// Rows never go below this baseline
const TABLE_BOTTOM: f32 = 32.0;
const FOOTER_Y: f32 = 15.0;

/// Column x positions: order id, customer, product, qty, total, status
const COL_X: [f32; 6] = [17.6, 45.9, 91.7, 120.0, 134.0, 158.8];
const HEADERS: [&str; 6] = ["Order ID", "Customer", "Product", "Qty", "Total", "Status"];

const ORDER_ID_CHARS: usize = 15;
const CUSTOMER_CHARS: usize = 20;
const PRODUCT_CHARS: usize = 15;

/// Header totals printed above the table
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSummary {
    pub total_orders: usize,
    pub total_revenue: f64,
    pub pending: usize,
    pub delivered: usize,
}

impl ReportSummary {
    pub fn from_orders(orders: &[Order]) -> Self {
        let count = |status| orders.iter().filter(|o| o.order_status == status).count();
        Self {
            total_orders: orders.len(),
            total_revenue: money::sum(orders.iter().map(|o| o.total_price_ghs)),
            pending: count(OrderStatus::Pending),
            delivered: count(OrderStatus::Delivered),
        }
    }
}

/// Split `rows` table rows into per-page index ranges. Always at least one page.
pub fn paginate(rows: usize) -> Vec<Range<usize>> {
    let fits = |top: f32| (((top - HEADER_GAP - TABLE_BOTTOM) / ROW_HEIGHT).floor() as usize) + 1;
    let first = fits(FIRST_TABLE_TOP);
    let next = fits(NEXT_TABLE_TOP);

    let mut pages = vec![0..rows.min(first)];
    let mut start = rows.min(first);
    while start < rows {
        let end = rows.min(start + next);
        pages.push(start..end);
        start = end;
    }
    pages
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

/// Approximate Helvetica advance width in mm (half an em per character)
fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * 0.5 * 0.3528
}

fn centered(layer: &PdfLayerReference, text: &str, size: f32, y: f32, font: &IndirectFontRef) {
    let x = ((PAGE_WIDTH - text_width(text, size)) / 2.0).max(0.0);
    layer.use_text(text, size, Mm(x), Mm(y), font);
}

fn draw_table_header(layer: &PdfLayerReference, top: f32, fonts: &Fonts) {
    for (x, label) in COL_X.iter().zip(HEADERS) {
        layer.use_text(label, 10.0, Mm(*x), Mm(top), &fonts.bold);
    }
    layer.use_text(
        "-".repeat(118),
        6.0,
        Mm(COL_X[0]),
        Mm(top - 3.5),
        &fonts.regular,
    );
}

fn draw_row(layer: &PdfLayerReference, order: &Order, y: f32, fonts: &Fonts) {
    let cells = [
        truncate_chars(&order.order_id, ORDER_ID_CHARS),
        truncate_chars(&order.customer_full_name, CUSTOMER_CHARS),
        truncate_chars(&order.product_name, PRODUCT_CHARS),
        order.quantity.to_string(),
        format!("GHS {:.2}", order.total_price_ghs),
        order.order_status.to_string(),
    ];
    for (x, cell) in COL_X.iter().zip(cells) {
        layer.use_text(cell, 9.0, Mm(*x), Mm(y), &fonts.regular);
    }
}

fn draw_title(layer: &PdfLayerReference, generated_at: i64, summary: &ReportSummary, fonts: &Fonts) {
    centered(layer, "Ash Meganab Herbal", 24.0, 270.0, &fonts.bold);
    centered(layer, "Order Report", 16.0, 260.0, &fonts.regular);
    centered(
        layer,
        &format!("Generated on: {} UTC", format_timestamp(generated_at)),
        10.0,
        253.0,
        &fonts.regular,
    );

    layer.use_text("Summary", 12.0, Mm(COL_X[0]), Mm(243.0), &fonts.bold);
    layer.use_text(
        format!("Total Orders: {}", summary.total_orders),
        10.0,
        Mm(COL_X[0]),
        Mm(236.0),
        &fonts.regular,
    );
    layer.use_text(
        format!("Total Revenue: GHS {:.2}", summary.total_revenue),
        10.0,
        Mm(120.0),
        Mm(236.0),
        &fonts.regular,
    );
    layer.use_text(
        format!("Pending: {}", summary.pending),
        10.0,
        Mm(COL_X[0]),
        Mm(230.0),
        &fonts.regular,
    );
    layer.use_text(
        format!("Delivered: {}", summary.delivered),
        10.0,
        Mm(120.0),
        Mm(230.0),
        &fonts.regular,
    );
}

fn pdf_err(err: impl std::fmt::Display) -> ExportError {
    ExportError::Pdf(err.to_string())
}

/// Render the order report
pub fn render(orders: &[Order]) -> ExportResult<Vec<u8>> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        "Ash Meganab Herbal - Order Report",
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        LAYER,
    );
    let fonts = Fonts {
        regular: doc.add_builtin_font(BuiltinFont::Helvetica).map_err(pdf_err)?,
        bold: doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(pdf_err)?,
    };

    let summary = ReportSummary::from_orders(orders);
    let pages = paginate(orders.len());
    let page_count = pages.len();

    for (index, rows) in pages.into_iter().enumerate() {
        let layer = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page, layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), LAYER);
            doc.get_page(page).get_layer(layer)
        };

        let top = if index == 0 {
            draw_title(&layer, util::now_millis(), &summary, &fonts);
            FIRST_TABLE_TOP
        } else {
            NEXT_TABLE_TOP
        };

        draw_table_header(&layer, top, &fonts);
        let mut y = top - HEADER_GAP;
        for order in &orders[rows] {
            draw_row(&layer, order, y, &fonts);
            y -= ROW_HEIGHT;
        }

        centered(
            &layer,
            &format!("Page {} of {}", index + 1, page_count),
            8.0,
            FOOTER_Y,
            &fonts.regular,
        );
    }

    doc.save_to_bytes().map_err(pdf_err)
}
