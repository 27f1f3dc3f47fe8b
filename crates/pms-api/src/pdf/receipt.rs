//! Rent receipt renderer
//!
//! Pure projection of (rent, tenant, unit) onto a fixed A4 layout; nothing
//! is mutated. Eligibility (Paid only) is enforced before this is called.

use chrono::Utc;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use pms_core::services::ReceiptData;

const PAGE_WIDTH: i64 = 595;
const PAGE_HEIGHT: i64 = 842;

const FONT_REGULAR: &str = "F1";
const FONT_BOLD: &str = "F2";

pub fn render_receipt(data: &ReceiptData) -> lopdf::Result<Vec<u8>> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let regular_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let bold_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            FONT_REGULAR => regular_id,
            FONT_BOLD => bold_id,
        },
    });

    let content = Content {
        operations: build_operations(data),
    };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    });
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)?;
    Ok(buffer)
}

fn build_operations(data: &ReceiptData) -> Vec<Operation> {
    let mut ops = Vec::new();

    let receipt_number = {
        let id = data.rent.id.to_string();
        id[id.len() - 6..].to_uppercase()
    };
    let payment_date = data
        .rent
        .paid_on
        .map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| Utc::now().format("%d/%m/%Y").to_string());
    let unit_number = data
        .unit
        .as_ref()
        .map(|u| u.unit_number.clone())
        .unwrap_or_else(|| "N/A".to_string());

    // Header
    fill_gray(&mut ops, 0.27);
    text(&mut ops, FONT_REGULAR, 20, 110, 57, "RENT RECEIPT");
    text(&mut ops, FONT_REGULAR, 10, 420, 65, "Property Vision Pvt Ltd.");
    text(
        &mut ops,
        FONT_REGULAR,
        10,
        420,
        80,
        &format!("Generated on: {}", Utc::now().format("%d/%m/%Y")),
    );
    rule(&mut ops, 50, 550, 100);

    // Left block: receipt metadata
    fill_gray(&mut ops, 0.0);
    text(&mut ops, FONT_REGULAR, 10, 50, 130, "Receipt Number:");
    text(&mut ops, FONT_BOLD, 10, 150, 130, &receipt_number);
    text(&mut ops, FONT_REGULAR, 10, 50, 145, "Payment Date:");
    text(&mut ops, FONT_REGULAR, 10, 150, 145, &payment_date);
    text(&mut ops, FONT_REGULAR, 10, 50, 160, "Payment Method:");
    text(
        &mut ops,
        FONT_REGULAR,
        10,
        150,
        160,
        data.rent.payment_status.as_str(),
    );

    // Right block: tenant details
    text(&mut ops, FONT_BOLD, 10, 300, 130, "Tenant Details:");
    text(&mut ops, FONT_REGULAR, 10, 300, 145, &data.tenant.full_name);
    text(
        &mut ops,
        FONT_REGULAR,
        10,
        300,
        160,
        &format!("Unit: {unit_number}"),
    );
    text(
        &mut ops,
        FONT_REGULAR,
        10,
        300,
        175,
        &format!("Phone: {}", data.tenant.mobile_number),
    );

    // Table header
    let table_top = 250;
    text(&mut ops, FONT_BOLD, 10, 50, table_top, "Description");
    text(&mut ops, FONT_BOLD, 10, 150, table_top, "Month");
    text(&mut ops, FONT_BOLD, 10, 460, table_top, "Amount");
    rule(&mut ops, 50, 550, table_top + 15);

    // Rows
    let mut y = table_top + 25;
    text(&mut ops, FONT_REGULAR, 10, 50, y, "House Rent");
    text(&mut ops, FONT_REGULAR, 10, 150, y, &data.rent.month);
    text(
        &mut ops,
        FONT_REGULAR,
        10,
        460,
        y,
        &format_currency(data.rent.rent_amount),
    );
    y += 20;

    if data.rent.maintenance_amount > 0 {
        text(&mut ops, FONT_REGULAR, 10, 50, y, "Maintenance");
        text(&mut ops, FONT_REGULAR, 10, 150, y, &data.rent.month);
        text(
            &mut ops,
            FONT_REGULAR,
            10,
            460,
            y,
            &format_currency(data.rent.maintenance_amount),
        );
        y += 20;
    }

    rule(&mut ops, 50, 550, y + 10);

    // Total
    y += 20;
    text(&mut ops, FONT_BOLD, 12, 300, y, "Total Paid:");
    text(
        &mut ops,
        FONT_BOLD,
        12,
        460,
        y,
        &format_currency(data.rent.total_amount),
    );

    // Footer
    text(
        &mut ops,
        FONT_REGULAR,
        10,
        220,
        700,
        "Thank you for your timely payment.",
    );

    ops
}

/// One text run. `y_top` counts down from the top edge.
fn text(ops: &mut Vec<Operation>, font: &str, size: i64, x: i64, y_top: i64, value: &str) {
    ops.push(Operation::new("BT", vec![]));
    ops.push(Operation::new("Tf", vec![font.into(), size.into()]));
    ops.push(Operation::new(
        "Td",
        vec![x.into(), (PAGE_HEIGHT - y_top).into()],
    ));
    ops.push(Operation::new("Tj", vec![Object::string_literal(value)]));
    ops.push(Operation::new("ET", vec![]));
}

fn rule(ops: &mut Vec<Operation>, x1: i64, x2: i64, y_top: i64) {
    let y = PAGE_HEIGHT - y_top;
    ops.push(Operation::new(
        "RG",
        vec![0.67_f32.into(), 0.67_f32.into(), 0.67_f32.into()],
    ));
    ops.push(Operation::new("w", vec![1.into()]));
    ops.push(Operation::new("m", vec![x1.into(), y.into()]));
    ops.push(Operation::new("l", vec![x2.into(), y.into()]));
    ops.push(Operation::new("S", vec![]));
}

fn fill_gray(ops: &mut Vec<Operation>, level: f32) {
    ops.push(Operation::new(
        "rg",
        vec![level.into(), level.into(), level.into()],
    ));
}

fn format_currency(amount: i64) -> String {
    format!("INR {amount}.00")
}
