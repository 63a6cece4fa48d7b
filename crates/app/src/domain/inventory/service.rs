//! Inventory service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::inventory::{
        errors::InventoryServiceError,
        models::{NewProduct, Product, ProductUuid},
        repository::PgInventoryRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgInventoryService {
    db: Db,
    repository: PgInventoryRepository,
}

impl PgInventoryService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgInventoryRepository::new(),
        }
    }
}

#[async_trait]
impl InventoryService for PgInventoryService {
    async fn get_product(&self, product: ProductUuid) -> Result<Product, InventoryServiceError> {
        let mut tx = self.db.begin().await?;

        let product = self.repository.get_product(&mut tx, product).await?;

        tx.commit().await?;

        Ok(product)
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product, InventoryServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self.repository.create_product(&mut tx, &product).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn get_stock(
        &self,
        product: ProductUuid,
        color: &str,
    ) -> Result<u32, InventoryServiceError> {
        let mut tx = self.db.begin().await?;

        let stock = self.repository.get_stock(&mut tx, product, color).await?;

        tx.commit().await?;

        Ok(stock)
    }

    async fn decrement_stock(
        &self,
        product: ProductUuid,
        color: &str,
        quantity: u32,
    ) -> Result<u32, InventoryServiceError> {
        let mut tx = self.db.begin().await?;

        let new_stock = self
            .repository
            .decrement_stock(&mut tx, product, color, quantity)
            .await?
            .ok_or(InventoryServiceError::NotFound)?;

        tx.commit().await?;

        Ok(new_stock)
    }
}

#[automock]
#[async_trait]
pub trait InventoryService: Send + Sync {
    /// Retrieve a product with its colour variants.
    async fn get_product(&self, product: ProductUuid) -> Result<Product, InventoryServiceError>;

    /// Creates a new product with its colour variants.
    async fn create_product(&self, product: NewProduct) -> Result<Product, InventoryServiceError>;

    /// Current stock of one colour variant.
    async fn get_stock(
        &self,
        product: ProductUuid,
        color: &str,
    ) -> Result<u32, InventoryServiceError>;

    /// Decrement a colour variant's stock, clamped at zero.
    async fn decrement_stock(
        &self,
        product: ProductUuid,
        color: &str,
        quantity: u32,
    ) -> Result<u32, InventoryServiceError>;
}
