//! Errors

use salvo::http::StatusError;
use tracing::error;

use vend_app::domain::checkout::CheckoutError;

/// Exact message the storefront client pattern-matches on to send the buyer
/// to address entry. The "No address provided" prefix is load-bearing.
pub(crate) const NO_ADDRESS_MESSAGE: &str = "No address provided. Please add or edit your address \
     in settings before proceeding with the purchase.";

pub(crate) fn into_status_error(error: CheckoutError) -> StatusError {
    match error {
        CheckoutError::BuyerNotFound => StatusError::not_found().brief("User not found"),
        CheckoutError::AddressRequired => StatusError::bad_request().brief(NO_ADDRESS_MESSAGE),
        CheckoutError::EmptyCart => {
            StatusError::bad_request().brief("Cart items are required")
        }
        CheckoutError::Sql(source) => {
            error!("checkout failed: {source}");

            StatusError::internal_server_error()
                .brief("Failed to complete purchase. Please try again.")
        }
    }
}
