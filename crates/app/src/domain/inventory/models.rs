//! Inventory Models

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::uuids::TypedUuid;

/// Product UUID
pub type ProductUuid = TypedUuid<Product>;

/// Product Model
///
/// A sellable gadget. Stock is tracked per colour variant; the variant list
/// preserves the order the colours were defined in.
#[derive(Debug, Clone)]
pub struct Product {
    pub uuid: ProductUuid,
    pub brand: String,
    pub name: String,
    pub price: Decimal,
    pub colors: Vec<ColorVariant>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

/// The smallest inventory-tracked entity: one colour of one product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorVariant {
    pub color: String,
    pub stock: u32,
}

/// New Product Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub uuid: ProductUuid,
    pub brand: String,
    pub name: String,
    pub price: Decimal,
    pub colors: Vec<ColorVariant>,
}
