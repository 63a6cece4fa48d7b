//! Set Transaction Status Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vend_app::domain::transactions::models::Status;

use crate::{extensions::*, state::State, transactions::errors::into_status_error};

/// Status change request from the back office.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SetTransactionStatusRequest {
    /// Transaction to update
    pub transaction_id: Uuid,

    /// "Shipped", "In-Transit" or "Completed"
    pub status: String,
}

/// Status change acknowledgement.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SetTransactionStatusResponse {
    pub success: bool,
}

/// Set Transaction Status Handler
#[endpoint(
    tags("transactions"),
    summary = "Set Transaction Status",
    responses(
        (status_code = StatusCode::OK, description = "Status updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid status"),
        (status_code = StatusCode::NOT_FOUND, description = "Unknown transaction"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<SetTransactionStatusRequest>,
    depot: &mut Depot,
) -> Result<Json<SetTransactionStatusResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let status = request.status.parse::<Status>().or_400("Invalid status")?;

    state
        .app
        .transactions
        .set_status(request.transaction_id.into(), status)
        .await
        .map_err(into_status_error)?;

    Ok(Json(SetTransactionStatusResponse { success: true }))
}
