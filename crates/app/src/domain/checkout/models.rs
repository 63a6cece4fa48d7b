//! Checkout Models

use rust_decimal::Decimal;

use crate::domain::{
    buyers::models::BuyerUuid,
    inventory::models::ProductUuid,
    transactions::models::{Receipt, TransactionUuid},
};

/// Receipt/line-item colour shown when the buyer picked no colour.
pub const NO_COLOR: &str = "N/A";

/// One client-held cart line submitted at checkout.
///
/// `unit_price` is the price-lock snapshot taken when the item was added to
/// the cart; checkout bills against it without re-consulting the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product: ProductUuid,
    pub brand: String,
    pub name: String,
    pub color: Option<String>,
    pub unit_price: Decimal,
    pub quantity: u32,
}

impl CartLine {
    /// Quoted colour, falling back to [`NO_COLOR`].
    #[must_use]
    pub fn color_label(&self) -> &str {
        self.color.as_deref().unwrap_or(NO_COLOR)
    }

    /// Price × quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// A checkout request: the whole cart for one buyer.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutOrder {
    pub buyer: BuyerUuid,
    pub lines: Vec<CartLine>,

    /// The total the client believes it owes, carried for reconciliation
    /// logging only; the authoritative subtotal is recomputed from `lines`.
    pub claimed_total: Decimal,
}

/// What a successful checkout hands back to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedCheckout {
    pub transaction: TransactionUuid,
    pub receipt: Receipt,
}
