//! Transactions Repository

use std::str::FromStr;

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{
    FromRow, Postgres, Row, Transaction as PgTransaction, postgres::PgRow, query, query_as,
    types::Json,
};

use crate::domain::{
    buyers::models::BuyerUuid,
    transactions::models::{
        LineItem, NewTransaction, Receipt, Status, Transaction, TransactionUuid,
    },
};

const CREATE_TRANSACTION_SQL: &str = include_str!("sql/create_transaction.sql");
const SET_STATUS_SQL: &str = include_str!("sql/set_status.sql");
const LIST_TRANSACTIONS_SQL: &str = include_str!("sql/list_transactions.sql");
const LIST_BUYER_TRANSACTIONS_SQL: &str = include_str!("sql/list_buyer_transactions.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgTransactionsRepository;

impl PgTransactionsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Append one transaction row. A single INSERT: either the whole record
    /// (totals, receipt, line items) becomes visible or nothing does.
    pub(crate) async fn record(
        &self,
        tx: &mut PgTransaction<'_, Postgres>,
        new: &NewTransaction,
    ) -> Result<Transaction, sqlx::Error> {
        let (created_at, updated_at): (SqlxTimestamp, SqlxTimestamp) =
            query_as(CREATE_TRANSACTION_SQL)
                .bind(new.uuid.into_uuid())
                .bind(new.buyer_uuid.into_uuid())
                .bind(SqlxTimestamp::from(new.order_date))
                .bind(new.total_amount)
                .bind(new.status.as_str())
                .bind(Json(&new.receipt))
                .bind(Json(&new.line_items))
                .fetch_one(&mut **tx)
                .await?;

        Ok(Transaction {
            uuid: new.uuid,
            buyer_uuid: new.buyer_uuid,
            order_date: new.order_date,
            total_amount: new.total_amount,
            status: new.status,
            receipt: new.receipt.clone(),
            line_items: new.line_items.clone(),
            created_at: created_at.to_jiff(),
            updated_at: updated_at.to_jiff(),
        })
    }

    pub(crate) async fn set_status(
        &self,
        tx: &mut PgTransaction<'_, Postgres>,
        transaction: TransactionUuid,
        status: Status,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(SET_STATUS_SQL)
            .bind(transaction.into_uuid())
            .bind(status.as_str())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn list(
        &self,
        tx: &mut PgTransaction<'_, Postgres>,
    ) -> Result<Vec<Transaction>, sqlx::Error> {
        query_as::<Postgres, Transaction>(LIST_TRANSACTIONS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn list_for_buyer(
        &self,
        tx: &mut PgTransaction<'_, Postgres>,
        buyer: BuyerUuid,
    ) -> Result<Vec<Transaction>, sqlx::Error> {
        query_as::<Postgres, Transaction>(LIST_BUYER_TRANSACTIONS_SQL)
            .bind(buyer.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for Transaction {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let status_text: String = row.try_get("status")?;

        let status = Status::from_str(&status_text).map_err(|e| sqlx::Error::ColumnDecode {
            index: "status".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            uuid: TransactionUuid::from_uuid(row.try_get("uuid")?),
            buyer_uuid: BuyerUuid::from_uuid(row.try_get("buyer_uuid")?),
            order_date: row.try_get::<SqlxTimestamp, _>("order_date")?.to_jiff(),
            total_amount: row.try_get("total_amount")?,
            status,
            receipt: row.try_get::<Json<Receipt>, _>("receipt")?.0,
            line_items: row.try_get::<Json<Vec<LineItem>>, _>("line_items")?.0,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
