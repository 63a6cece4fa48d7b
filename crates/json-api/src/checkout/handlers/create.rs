//! Checkout Handler

use std::sync::Arc;

use rust_decimal::{Decimal, prelude::FromPrimitive};
use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vend_app::domain::checkout::models::{CartLine, CheckoutOrder};

use crate::{
    checkout::errors::into_status_error, extensions::*, receipts::ReceiptResponse, state::State,
};

/// One cart line as submitted by the client, price-lock snapshot included.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CheckoutItemRequest {
    /// Product identifier
    pub id: Uuid,

    /// Brand snapshot for the receipt
    pub brand: String,

    /// Name snapshot for the receipt
    pub name: String,

    /// Unit price snapshot taken when the item entered the cart
    pub price: f64,

    /// Units purchased
    pub quantity: u32,

    /// Chosen colour variant, if any
    pub selected_color: Option<String>,
}

/// Checkout Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CheckoutRequest {
    /// The purchasing buyer
    pub user_id: Uuid,

    /// The whole cart
    pub cart_items: Vec<CheckoutItemRequest>,

    /// The total the client computed, for reconciliation
    pub total_amount: f64,
}

impl TryFrom<CheckoutRequest> for CheckoutOrder {
    type Error = StatusError;

    fn try_from(request: CheckoutRequest) -> Result<Self, StatusError> {
        let claimed_total = parse_amount(request.total_amount, "totalAmount")?;

        let lines = request
            .cart_items
            .into_iter()
            .map(|item| {
                Ok(CartLine {
                    product: item.id.into(),
                    brand: item.brand,
                    name: item.name,
                    color: item.selected_color,
                    unit_price: parse_amount(item.price, "price")?,
                    quantity: item.quantity,
                })
            })
            .collect::<Result<Vec<_>, StatusError>>()?;

        Ok(Self {
            buyer: request.user_id.into(),
            lines,
            claimed_total,
        })
    }
}

/// Checkout Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CheckoutResponse {
    pub success: bool,

    /// Identifier of the recorded transaction
    pub transaction_id: Uuid,

    /// The frozen receipt handed to the buyer
    pub receipt_data: ReceiptResponse,
}

/// Checkout Handler
#[endpoint(
    tags("checkout"),
    summary = "Checkout",
    responses(
        (status_code = StatusCode::CREATED, description = "Purchase recorded"),
        (status_code = StatusCode::BAD_REQUEST, description = "No address on file, or invalid cart"),
        (status_code = StatusCode::NOT_FOUND, description = "Unknown buyer"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CheckoutRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CheckoutResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let order: CheckoutOrder = json.into_inner().try_into()?;

    let completed = state
        .app
        .checkout
        .checkout(order)
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(CheckoutResponse {
        success: true,
        transaction_id: completed.transaction.into_uuid(),
        receipt_data: completed.receipt.into(),
    }))
}

fn parse_amount(value: f64, field: &str) -> Result<Decimal, StatusError> {
    Decimal::from_f64(value)
        .ok_or_else(|| StatusError::bad_request().brief(format!("Invalid {field} value")))
}
