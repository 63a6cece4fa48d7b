//! Transactions Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vend::pricing::money_string;

use vend_app::domain::transactions::models::Transaction;

use crate::{
    extensions::*,
    receipts::{LineItemResponse, ReceiptResponse},
    state::State,
    transactions::errors::into_status_error,
};

/// One recorded purchase with its embedded receipt.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TransactionResponse {
    /// Transaction identifier
    pub transaction_id: Uuid,

    /// Purchasing buyer
    pub user_id: Uuid,

    /// Order timestamp, RFC 3339
    pub order_date: String,

    /// Amount billed, two-decimal string
    pub total_amount: String,

    /// "Shipped", "In-Transit" or "Completed"
    pub status: String,

    /// The frozen receipt snapshot
    pub receipt: ReceiptResponse,

    /// Purchased lines as frozen for inventory bookkeeping
    pub line_items: Vec<LineItemResponse>,
}

impl From<Transaction> for TransactionResponse {
    fn from(transaction: Transaction) -> Self {
        Self {
            transaction_id: transaction.uuid.into_uuid(),
            user_id: transaction.buyer_uuid.into_uuid(),
            order_date: transaction.order_date.to_string(),
            total_amount: money_string(transaction.total_amount),
            status: transaction.status.to_string(),
            receipt: transaction.receipt.into(),
            line_items: transaction.line_items.into_iter().map(Into::into).collect(),
        }
    }
}

/// Transactions listing
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TransactionsResponse {
    /// The transactions, newest order first
    pub transactions: Vec<TransactionResponse>,
}

/// Transactions Index Handler
///
/// Lists transactions, optionally scoped to one buyer via `?userId=`.
#[endpoint(tags("transactions"), summary = "List Transactions")]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<TransactionsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let user_id = req
        .query::<String>("userId")
        .map(|raw| raw.parse::<Uuid>())
        .transpose()
        .or_400("could not parse \"userId\" query parameter")?;

    let transactions = match user_id {
        Some(buyer) => state.app.transactions.list_for_buyer(buyer.into()).await,
        None => state.app.transactions.list().await,
    }
    .map_err(into_status_error)?;

    Ok(Json(TransactionsResponse {
        transactions: transactions.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use vend_app::domain::transactions::{MockTransactionsService, TransactionsServiceError};

    use crate::test_helpers::{make_transaction, transactions_service};

    use super::*;

    fn make_service(repo: MockTransactionsService) -> Service {
        transactions_service(repo, Router::with_path("transactions").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_all_transactions() -> TestResult {
        let buyer = Uuid::now_v7();

        let mut repo = MockTransactionsService::new();

        repo.expect_list()
            .once()
            .return_once(move || Ok(vec![make_transaction(buyer), make_transaction(buyer)]));

        repo.expect_list_for_buyer().never();
        repo.expect_record().never();
        repo.expect_set_status().never();

        let response: TransactionsResponse = TestClient::get("http://example.com/transactions")
            .send(&make_service(repo))
            .await
            .take_json()
            .await?;

        assert_eq!(response.transactions.len(), 2, "expected two transactions");
        assert_eq!(response.transactions[0].user_id, buyer);
        assert_eq!(response.transactions[0].status, "Shipped");
        assert_eq!(response.transactions[0].receipt.final_total, "1120.00");

        Ok(())
    }

    #[tokio::test]
    async fn test_index_scopes_to_buyer_when_user_id_given() -> TestResult {
        let buyer = Uuid::now_v7();

        let mut repo = MockTransactionsService::new();

        repo.expect_list_for_buyer()
            .once()
            .withf(move |b| b.into_uuid() == buyer)
            .return_once(move |_| Ok(vec![make_transaction(buyer)]));

        repo.expect_list().never();
        repo.expect_record().never();
        repo.expect_set_status().never();

        let response: TransactionsResponse =
            TestClient::get(format!("http://example.com/transactions?userId={buyer}"))
                .send(&make_service(repo))
                .await
                .take_json()
                .await?;

        assert_eq!(response.transactions.len(), 1, "expected one transaction");
        assert_eq!(response.transactions[0].user_id, buyer);

        Ok(())
    }

    #[tokio::test]
    async fn test_index_invalid_user_id_returns_400() -> TestResult {
        let mut repo = MockTransactionsService::new();

        repo.expect_list().never();
        repo.expect_list_for_buyer().never();
        repo.expect_record().never();
        repo.expect_set_status().never();

        let res = TestClient::get("http://example.com/transactions?userId=not-a-uuid")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_index_storage_error_returns_500() -> TestResult {
        let mut repo = MockTransactionsService::new();

        repo.expect_list()
            .once()
            .return_once(|| Err(TransactionsServiceError::Sql(sqlx::Error::PoolClosed)));

        repo.expect_list_for_buyer().never();
        repo.expect_record().never();
        repo.expect_set_status().never();

        let res = TestClient::get("http://example.com/transactions")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
