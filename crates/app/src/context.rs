//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    database::{self, Db},
    domain::{
        buyers::{BuyersService, PgBuyersService},
        checkout::{CheckoutService, PgCheckoutService},
        inventory::{InventoryService, PgInventoryService},
        transactions::{PgTransactionsService, TransactionsService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub buyers: Arc<dyn BuyersService>,
    pub inventory: Arc<dyn InventoryService>,
    pub transactions: Arc<dyn TransactionsService>,
    pub checkout: Arc<dyn CheckoutService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(url: &str) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        let db = Db::new(pool);

        Ok(Self {
            buyers: Arc::new(PgBuyersService::new(db.clone())),
            inventory: Arc::new(PgInventoryService::new(db.clone())),
            transactions: Arc::new(PgTransactionsService::new(db.clone())),
            checkout: Arc::new(PgCheckoutService::new(db)),
        })
    }
}
