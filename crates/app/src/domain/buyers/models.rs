//! Buyer Models

use jiff::{Timestamp, civil::Date};

use crate::uuids::TypedUuid;

/// Sentinel stored in place of a shipping address the buyer never set.
pub const ADDRESS_NOT_PROVIDED: &str = "No Address Provided";

/// Buyer UUID
pub type BuyerUuid = TypedUuid<Buyer>;

/// Buyer Model
#[derive(Debug, Clone)]
pub struct Buyer {
    pub uuid: BuyerUuid,
    pub name: String,
    pub address: String,
    pub birthday: Option<Date>,
    pub is_pwd: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

impl Buyer {
    /// Whether the buyer has set a real shipping address.
    ///
    /// Empty, whitespace-only and the [`ADDRESS_NOT_PROVIDED`] sentinel all
    /// count as unset; checkout must not proceed for such a buyer.
    #[must_use]
    pub fn has_shipping_address(&self) -> bool {
        let address = self.address.trim();

        !address.is_empty() && address != ADDRESS_NOT_PROVIDED
    }
}

/// New Buyer Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewBuyer {
    pub uuid: BuyerUuid,
    pub name: String,
    /// `None` stores the [`ADDRESS_NOT_PROVIDED`] sentinel.
    pub address: Option<String>,
    pub birthday: Option<Date>,
    pub is_pwd: bool,
}

/// Buyer profile update, applied wholesale from the settings form.
#[derive(Debug, Clone, PartialEq)]
pub struct BuyerUpdate {
    pub name: String,
    pub address: String,
    pub birthday: Option<Date>,
    pub is_pwd: bool,
}
