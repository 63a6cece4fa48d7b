//! Transactions service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        buyers::models::BuyerUuid,
        transactions::{
            errors::TransactionsServiceError,
            models::{NewTransaction, Status, Transaction, TransactionUuid},
            repository::PgTransactionsRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgTransactionsService {
    db: Db,
    repository: PgTransactionsRepository,
}

impl PgTransactionsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgTransactionsRepository::new(),
        }
    }
}

#[async_trait]
impl TransactionsService for PgTransactionsService {
    async fn record(&self, new: NewTransaction) -> Result<Transaction, TransactionsServiceError> {
        if new.line_items.is_empty() {
            return Err(TransactionsServiceError::EmptyOrder);
        }

        let mut tx = self.db.begin().await?;

        let recorded = self.repository.record(&mut tx, &new).await?;

        tx.commit().await?;

        Ok(recorded)
    }

    async fn set_status(
        &self,
        transaction: TransactionUuid,
        status: Status,
    ) -> Result<(), TransactionsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.set_status(&mut tx, transaction, status).await?;

        if rows_affected == 0 {
            return Err(TransactionsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }

    async fn list(&self) -> Result<Vec<Transaction>, TransactionsServiceError> {
        let mut tx = self.db.begin().await?;

        let transactions = self.repository.list(&mut tx).await?;

        tx.commit().await?;

        Ok(transactions)
    }

    async fn list_for_buyer(
        &self,
        buyer: BuyerUuid,
    ) -> Result<Vec<Transaction>, TransactionsServiceError> {
        let mut tx = self.db.begin().await?;

        let transactions = self.repository.list_for_buyer(&mut tx, buyer).await?;

        tx.commit().await?;

        Ok(transactions)
    }
}

#[automock]
#[async_trait]
pub trait TransactionsService: Send + Sync {
    /// Durably append one completed purchase.
    ///
    /// The append is a single atomic write; on failure no partial record
    /// remains. Rejects an empty line-item list.
    async fn record(&self, new: NewTransaction) -> Result<Transaction, TransactionsServiceError>;

    /// Back-office status change. Any status may be set from any other.
    async fn set_status(
        &self,
        transaction: TransactionUuid,
        status: Status,
    ) -> Result<(), TransactionsServiceError>;

    /// All transactions, newest order first.
    async fn list(&self) -> Result<Vec<Transaction>, TransactionsServiceError>;

    /// One buyer's purchase history, newest order first.
    async fn list_for_buyer(
        &self,
        buyer: BuyerUuid,
    ) -> Result<Vec<Transaction>, TransactionsServiceError>;
}
