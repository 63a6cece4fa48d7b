//! Receipt wire representations
//!
//! The frozen receipt snapshot as it crosses the API boundary, shared by the
//! checkout response and the transaction listings.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use vend_app::domain::transactions::models::{LineItem, Receipt, ReceiptItem};

/// Receipt snapshot returned to the client.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReceiptResponse {
    /// Buyer display name at purchase time
    pub buyer_name: String,

    /// Shipping address at purchase time
    pub address: String,

    /// Human-readable purchase timestamp
    pub timestamp: String,

    /// Whether the senior/PWD discount was applied
    pub discount_applied: bool,

    /// "Senior", "PWD" or "None"
    pub discount_type: String,

    /// Two-decimal money string
    pub discount_amount: String,

    /// Two-decimal money string
    pub tax_amount: String,

    /// Two-decimal money string
    pub subtotal: String,

    /// Two-decimal money string
    pub discounted_total: String,

    /// Two-decimal money string
    pub final_total: String,

    /// Per-item breakdown
    pub items: Vec<ReceiptItemResponse>,
}

impl From<Receipt> for ReceiptResponse {
    fn from(receipt: Receipt) -> Self {
        Self {
            buyer_name: receipt.buyer_name,
            address: receipt.address,
            timestamp: receipt.timestamp,
            discount_applied: receipt.discount_applied,
            discount_type: receipt.discount_type.as_str().to_string(),
            discount_amount: receipt.discount_amount,
            tax_amount: receipt.tax_amount,
            subtotal: receipt.subtotal,
            discounted_total: receipt.discounted_total,
            final_total: receipt.final_total,
            items: receipt.items.into_iter().map(Into::into).collect(),
        }
    }
}

/// One cart line on the receipt.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReceiptItemResponse {
    pub name: String,
    pub brand: String,
    pub color: String,
    pub quantity: u32,
    pub price: String,
    pub total: String,
}

impl From<ReceiptItem> for ReceiptItemResponse {
    fn from(item: ReceiptItem) -> Self {
        Self {
            name: item.name,
            brand: item.brand,
            color: item.color,
            quantity: item.quantity,
            price: item.price,
            total: item.total,
        }
    }
}

/// One purchased line as frozen for inventory bookkeeping.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LineItemResponse {
    pub product_uuid: uuid::Uuid,
    pub color: String,
    pub quantity: u32,
}

impl From<LineItem> for LineItemResponse {
    fn from(item: LineItem) -> Self {
        Self {
            product_uuid: item.product_uuid,
            color: item.color,
            quantity: item.quantity,
        }
    }
}
