//! Transaction Models

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;
use vend::DiscountType;

use crate::{domain::buyers::models::BuyerUuid, uuids::TypedUuid};

/// Transaction UUID
pub type TransactionUuid = TypedUuid<Transaction>;

/// Fulfilment status of a recorded purchase.
///
/// Transitions are deliberately unconstrained: the back office may set any
/// status from any other. The enum only guards the set of legal values.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Shipped,

    #[serde(rename = "In-Transit")]
    InTransit,

    Completed,
}

impl Status {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Shipped => "Shipped",
            Self::InTransit => "In-Transit",
            Self::Completed => "Completed",
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Error for a status string outside the legal set.
#[derive(Debug, Error)]
#[error("invalid transaction status: {0}")]
pub struct InvalidStatus(pub String);

impl FromStr for Status {
    type Err = InvalidStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Shipped" => Ok(Self::Shipped),
            "In-Transit" => Ok(Self::InTransit),
            "Completed" => Ok(Self::Completed),
            other => Err(InvalidStatus(other.to_string())),
        }
    }
}

/// An immutable record of one completed purchase.
#[derive(Debug, Clone)]
pub struct Transaction {
    pub uuid: TransactionUuid,
    pub buyer_uuid: BuyerUuid,
    pub order_date: Timestamp,
    pub total_amount: Decimal,
    pub status: Status,
    pub receipt: Receipt,
    pub line_items: Vec<LineItem>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// New Transaction Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub uuid: TransactionUuid,
    pub buyer_uuid: BuyerUuid,
    pub order_date: Timestamp,
    pub total_amount: Decimal,
    pub status: Status,
    pub receipt: Receipt,
    pub line_items: Vec<LineItem>,
}

/// Frozen snapshot of the figures handed to the buyer at purchase time.
///
/// Denormalised on purpose: later catalog or profile edits never change a
/// printed receipt. Money fields are stored as two-decimal strings exactly
/// as presented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub buyer_name: String,
    pub address: String,
    pub timestamp: String,
    pub discount_applied: bool,
    pub discount_type: DiscountType,
    pub discount_amount: String,
    pub tax_amount: String,
    pub subtotal: String,
    pub discounted_total: String,
    pub final_total: String,
    pub items: Vec<ReceiptItem>,
}

/// One cart line as it appears on the printed receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptItem {
    pub name: String,
    pub brand: String,
    pub color: String,
    pub quantity: u32,
    pub price: String,
    pub total: String,
}

/// One purchased line, frozen at purchase time for inventory bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub product_uuid: Uuid,
    pub color: String,
    pub quantity: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_its_wire_strings() {
        for (status, s) in [
            (Status::Shipped, "Shipped"),
            (Status::InTransit, "In-Transit"),
            (Status::Completed, "Completed"),
        ] {
            assert_eq!(status.to_string(), s);
            assert_eq!(s.parse::<Status>().ok(), Some(status), "parse {s}");
        }
    }

    #[test]
    fn unknown_status_string_is_rejected() {
        assert!("Delivered".parse::<Status>().is_err());
        assert!("shipped".parse::<Status>().is_err(), "case-sensitive");
    }
}
