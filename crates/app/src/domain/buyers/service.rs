//! Buyers service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::buyers::{
        errors::BuyersServiceError,
        models::{Buyer, BuyerUpdate, BuyerUuid, NewBuyer},
        repository::PgBuyersRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgBuyersService {
    db: Db,
    repository: PgBuyersRepository,
}

impl PgBuyersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgBuyersRepository::new(),
        }
    }
}

#[async_trait]
impl BuyersService for PgBuyersService {
    async fn get_buyer(&self, buyer: BuyerUuid) -> Result<Buyer, BuyersServiceError> {
        let mut tx = self.db.begin().await?;

        let buyer = self.repository.get_buyer(&mut tx, buyer).await?;

        tx.commit().await?;

        Ok(buyer)
    }

    async fn create_buyer(&self, buyer: NewBuyer) -> Result<Buyer, BuyersServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self.repository.create_buyer(&mut tx, &buyer).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_buyer(
        &self,
        buyer: BuyerUuid,
        update: BuyerUpdate,
    ) -> Result<Buyer, BuyersServiceError> {
        let mut tx = self.db.begin().await?;

        let updated = self.repository.update_buyer(&mut tx, buyer, &update).await?;

        tx.commit().await?;

        Ok(updated)
    }
}

#[automock]
#[async_trait]
pub trait BuyersService: Send + Sync {
    /// Retrieve a single buyer.
    async fn get_buyer(&self, buyer: BuyerUuid) -> Result<Buyer, BuyersServiceError>;

    /// Creates a new buyer record at signup.
    async fn create_buyer(&self, buyer: NewBuyer) -> Result<Buyer, BuyersServiceError>;

    /// Applies a profile-settings update to the given buyer.
    async fn update_buyer(
        &self,
        buyer: BuyerUuid,
        update: BuyerUpdate,
    ) -> Result<Buyer, BuyersServiceError>;
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use testresult::TestResult;

    use crate::{domain::buyers::models::ADDRESS_NOT_PROVIDED, test::TestContext};

    use super::*;

    fn new_buyer(uuid: BuyerUuid) -> NewBuyer {
        NewBuyer {
            uuid,
            name: "Maria Santos".to_string(),
            address: Some("45 Mabini St, Quezon City".to_string()),
            birthday: Some(date(1990, 7, 4)),
            is_pwd: false,
        }
    }

    #[tokio::test]
    async fn create_buyer_round_trips_profile_fields() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = BuyerUuid::new();

        let buyer = ctx.buyers.create_buyer(new_buyer(uuid)).await?;

        assert_eq!(buyer.uuid, uuid);
        assert_eq!(buyer.name, "Maria Santos");
        assert_eq!(buyer.address, "45 Mabini St, Quezon City");
        assert_eq!(buyer.birthday, Some(date(1990, 7, 4)));
        assert!(!buyer.is_pwd);
        assert!(buyer.deleted_at.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn buyer_without_address_gets_the_sentinel() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = BuyerUuid::new();

        let buyer = ctx
            .buyers
            .create_buyer(NewBuyer {
                address: None,
                ..new_buyer(uuid)
            })
            .await?;

        assert_eq!(buyer.address, ADDRESS_NOT_PROVIDED);
        assert!(!buyer.has_shipping_address());

        Ok(())
    }

    #[tokio::test]
    async fn get_buyer_unknown_uuid_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.buyers.get_buyer(BuyerUuid::new()).await;

        assert!(
            matches!(result, Err(BuyersServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn create_buyer_duplicate_uuid_returns_already_exists() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = BuyerUuid::new();

        ctx.buyers.create_buyer(new_buyer(uuid)).await?;

        let result = ctx.buyers.create_buyer(new_buyer(uuid)).await;

        assert!(
            matches!(result, Err(BuyersServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn update_buyer_changes_address_and_pwd_flag() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = BuyerUuid::new();

        ctx.buyers.create_buyer(new_buyer(uuid)).await?;

        let updated = ctx
            .buyers
            .update_buyer(
                uuid,
                BuyerUpdate {
                    name: "Maria Santos-Reyes".to_string(),
                    address: "88 Katipunan Ave".to_string(),
                    birthday: Some(date(1990, 7, 4)),
                    is_pwd: true,
                },
            )
            .await?;

        assert_eq!(updated.name, "Maria Santos-Reyes");
        assert_eq!(updated.address, "88 Katipunan Ave");
        assert!(updated.is_pwd);

        Ok(())
    }

    #[tokio::test]
    async fn update_buyer_unknown_uuid_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx
            .buyers
            .update_buyer(
                BuyerUuid::new(),
                BuyerUpdate {
                    name: "Nobody".to_string(),
                    address: "Nowhere".to_string(),
                    birthday: None,
                    is_pwd: false,
                },
            )
            .await;

        assert!(
            matches!(result, Err(BuyersServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }
}
