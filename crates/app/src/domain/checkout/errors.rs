//! Checkout errors.

use sqlx::Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("buyer not found")]
    BuyerNotFound,

    #[error("no shipping address on file")]
    AddressRequired,

    #[error("cart is empty")]
    EmptyCart,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for CheckoutError {
    fn from(error: Error) -> Self {
        // The only fetch-one before the insert is the buyer load, so a missing
        // row here always means the buyer.
        if matches!(error, Error::RowNotFound) {
            return Self::BuyerNotFound;
        }

        Self::Sql(error)
    }
}
