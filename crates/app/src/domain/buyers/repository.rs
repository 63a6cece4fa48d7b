//! Buyers Repository

use jiff_sqlx::{Date as SqlxDate, Timestamp as SqlxTimestamp};
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::buyers::models::{Buyer, BuyerUpdate, BuyerUuid, NewBuyer};

const GET_BUYER_SQL: &str = include_str!("sql/get_buyer.sql");
const CREATE_BUYER_SQL: &str = include_str!("sql/create_buyer.sql");
const UPDATE_BUYER_SQL: &str = include_str!("sql/update_buyer.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgBuyersRepository;

impl PgBuyersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn get_buyer(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        buyer: BuyerUuid,
    ) -> Result<Buyer, sqlx::Error> {
        query_as::<Postgres, Buyer>(GET_BUYER_SQL)
            .bind(buyer.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_buyer(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        buyer: &NewBuyer,
    ) -> Result<Buyer, sqlx::Error> {
        query_as::<Postgres, Buyer>(CREATE_BUYER_SQL)
            .bind(buyer.uuid.into_uuid())
            .bind(&buyer.name)
            .bind(buyer.address.as_deref())
            .bind(buyer.birthday.map(SqlxDate::from))
            .bind(buyer.is_pwd)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_buyer(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        buyer: BuyerUuid,
        update: &BuyerUpdate,
    ) -> Result<Buyer, sqlx::Error> {
        query_as::<Postgres, Buyer>(UPDATE_BUYER_SQL)
            .bind(buyer.into_uuid())
            .bind(&update.name)
            .bind(&update.address)
            .bind(update.birthday.map(SqlxDate::from))
            .bind(update.is_pwd)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for Buyer {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: BuyerUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            address: row.try_get("address")?,
            birthday: row
                .try_get::<Option<SqlxDate>, _>("birthday")?
                .map(SqlxDate::to_jiff),
            is_pwd: row.try_get("is_pwd")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
            deleted_at: row
                .try_get::<Option<SqlxTimestamp>, _>("deleted_at")?
                .map(SqlxTimestamp::to_jiff),
        })
    }
}
