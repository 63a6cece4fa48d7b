//! Receipt snapshot assembly
//!
//! Builds the denormalised receipt frozen into each transaction. Everything
//! here copies values; nothing holds a live reference to catalog or profile
//! state.

use jiff::Zoned;
use vend::{Totals, pricing::money_string};

use crate::domain::{
    buyers::models::Buyer,
    checkout::models::CartLine,
    transactions::models::{LineItem, Receipt, ReceiptItem},
};

/// Freeze the receipt for one purchase.
#[must_use]
pub fn build_receipt(buyer: &Buyer, lines: &[CartLine], totals: &Totals, now: &Zoned) -> Receipt {
    Receipt {
        buyer_name: buyer.name.clone(),
        address: buyer.address.clone(),
        timestamp: now.strftime("%Y-%m-%d %H:%M:%S").to_string(),
        discount_applied: totals.discount_applied,
        discount_type: totals.discount_type,
        discount_amount: money_string(totals.discount_amount),
        tax_amount: money_string(totals.tax_amount),
        subtotal: money_string(totals.subtotal),
        discounted_total: money_string(totals.discounted_total),
        final_total: money_string(totals.final_total),
        items: lines.iter().map(receipt_item).collect(),
    }
}

/// Freeze the purchased lines for inventory bookkeeping.
#[must_use]
pub fn frozen_line_items(lines: &[CartLine]) -> Vec<LineItem> {
    lines
        .iter()
        .map(|line| LineItem {
            product_uuid: line.product.into_uuid(),
            color: line.color_label().to_string(),
            quantity: line.quantity,
        })
        .collect()
}

fn receipt_item(line: &CartLine) -> ReceiptItem {
    ReceiptItem {
        name: line.name.clone(),
        brand: line.brand.clone(),
        color: line.color_label().to_string(),
        quantity: line.quantity,
        price: money_string(line.unit_price),
        total: money_string(line.line_total()),
    }
}
