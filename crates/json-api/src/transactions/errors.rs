//! Errors

use salvo::http::StatusError;
use tracing::error;

use vend_app::domain::transactions::TransactionsServiceError;

pub(crate) fn into_status_error(error: TransactionsServiceError) -> StatusError {
    match error {
        TransactionsServiceError::NotFound => {
            StatusError::not_found().brief("Transaction not found")
        }
        TransactionsServiceError::EmptyOrder
        | TransactionsServiceError::InvalidReference
        | TransactionsServiceError::MissingRequiredData
        | TransactionsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid transaction payload")
        }
        TransactionsServiceError::Sql(source) => {
            error!("transactions request failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
