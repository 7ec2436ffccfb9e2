//! Excel export

use rust_xlsxwriter::{Format, Workbook};
use shared::models::Order;

use super::{ExportResult, format_timestamp};

/// Header label and column width (characters)
const COLUMNS: [(&str, f64); 15] = [
    ("Order ID", 25.0),
    ("Customer Name", 25.0),
    ("Phone", 20.0),
    ("Email", 30.0),
    ("Delivery Address", 40.0),
    ("City", 20.0),
    ("Product", 25.0),
    ("Category", 20.0),
    ("Quantity", 10.0),
    ("Unit Price (GHS)", 18.0),
    ("Total Price (GHS)", 18.0),
    ("Status", 15.0),
    ("Notes", 30.0),
    ("Created At", 25.0),
    ("Updated At", 25.0),
];

const NOT_AVAILABLE: &str = "N/A";

/// Render orders (in the given order) into an `.xlsx` workbook
pub fn render(orders: &[Order]) -> ExportResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    let sheet = workbook.add_worksheet();
    sheet.set_name("Orders")?;

    for (col, (label, width)) in COLUMNS.iter().enumerate() {
        let col = col as u16;
        sheet.set_column_width(col, *width)?;
        sheet.write_string_with_format(0, col, *label, &header)?;
    }
    sheet.set_freeze_panes(1, 0)?;

    for (i, order) in orders.iter().enumerate() {
        let row = i as u32 + 1;
        sheet.write_string(row, 0, &order.order_id)?;
        sheet.write_string(row, 1, &order.customer_full_name)?;
        sheet.write_string(row, 2, &order.customer_phone)?;
        sheet.write_string(row, 3, order.customer_email.as_deref().unwrap_or(NOT_AVAILABLE))?;
        sheet.write_string(row, 4, &order.delivery_address)?;
        sheet.write_string(row, 5, &order.city)?;
        sheet.write_string(row, 6, &order.product_name)?;
        sheet.write_string(row, 7, order.product_category.as_deref().unwrap_or(""))?;
        sheet.write_number(row, 8, order.quantity as f64)?;
        sheet.write_number(row, 9, order.unit_price_ghs)?;
        sheet.write_number(row, 10, order.total_price_ghs)?;
        sheet.write_string(row, 11, order.order_status.as_str())?;
        sheet.write_string(row, 12, order.additional_notes.as_deref().unwrap_or(NOT_AVAILABLE))?;
        sheet.write_string(row, 13, format_timestamp(order.created_at))?;
        sheet.write_string(row, 14, format_timestamp(order.updated_at))?;
    }

    Ok(workbook.save_to_buffer()?)
}
