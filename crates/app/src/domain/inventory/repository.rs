//! Inventory Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::inventory::models::{ColorVariant, NewProduct, Product, ProductUuid};

const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const GET_PRODUCT_COLORS_SQL: &str = include_str!("sql/get_product_colors.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const CREATE_PRODUCT_COLOR_SQL: &str = include_str!("sql/create_product_color.sql");
const GET_STOCK_SQL: &str = include_str!("sql/get_stock.sql");
const DECREMENT_STOCK_SQL: &str = include_str!("sql/decrement_stock.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgInventoryRepository;

impl PgInventoryRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn get_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<Product, sqlx::Error> {
        let mut found = query_as::<Postgres, Product>(GET_PRODUCT_SQL)
            .bind(product.into_uuid())
            .fetch_one(&mut **tx)
            .await?;

        found.colors = query_as::<Postgres, ColorVariant>(GET_PRODUCT_COLORS_SQL)
            .bind(product.into_uuid())
            .fetch_all(&mut **tx)
            .await?;

        Ok(found)
    }

    pub(crate) async fn create_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: &NewProduct,
    ) -> Result<Product, sqlx::Error> {
        let (created_at, updated_at, deleted_at): (
            SqlxTimestamp,
            SqlxTimestamp,
            Option<SqlxTimestamp>,
        ) = query_as(CREATE_PRODUCT_SQL)
            .bind(product.uuid.into_uuid())
            .bind(&product.brand)
            .bind(&product.name)
            .bind(product.price)
            .fetch_one(&mut **tx)
            .await?;

        for (position, variant) in product.colors.iter().enumerate() {
            query(CREATE_PRODUCT_COLOR_SQL)
                .bind(product.uuid.into_uuid())
                .bind(&variant.color)
                .bind(try_into_stock_column(variant.stock)?)
                .bind(try_into_position_column(position)?)
                .execute(&mut **tx)
                .await?;
        }

        Ok(Product {
            uuid: product.uuid,
            brand: product.brand.clone(),
            name: product.name.clone(),
            price: product.price,
            colors: product.colors.clone(),
            created_at: created_at.to_jiff(),
            updated_at: updated_at.to_jiff(),
            deleted_at: deleted_at.map(SqlxTimestamp::to_jiff),
        })
    }

    pub(crate) async fn get_stock(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        color: &str,
    ) -> Result<u32, sqlx::Error> {
        let row = query(GET_STOCK_SQL)
            .bind(product.into_uuid())
            .bind(color)
            .fetch_one(&mut **tx)
            .await?;

        try_get_stock(&row, "stock")
    }

    /// Clamped decrement of one colour variant's stock.
    ///
    /// A single conditional UPDATE, so concurrent purchases of the same
    /// variant serialise on the row instead of losing updates. Returns
    /// `None` when no such product/colour row exists.
    pub(crate) async fn decrement_stock(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        color: &str,
        quantity: u32,
    ) -> Result<Option<u32>, sqlx::Error> {
        let row = query(DECREMENT_STOCK_SQL)
            .bind(product.into_uuid())
            .bind(color)
            .bind(try_into_stock_column(quantity)?)
            .fetch_optional(&mut **tx)
            .await?;

        row.as_ref().map(|row| try_get_stock(row, "stock")).transpose()
    }
}

impl<'r> FromRow<'r, PgRow> for Product {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: ProductUuid::from_uuid(row.try_get("uuid")?),
            brand: row.try_get("brand")?,
            name: row.try_get("name")?,
            price: row.try_get("price")?,
            colors: Vec::new(),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
            deleted_at: row
                .try_get::<Option<SqlxTimestamp>, _>("deleted_at")?
                .map(SqlxTimestamp::to_jiff),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for ColorVariant {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            color: row.try_get("color")?,
            stock: try_get_stock(row, "stock")?,
        })
    }
}

fn try_get_stock(row: &PgRow, col: &str) -> Result<u32, sqlx::Error> {
    let stock_i32: i32 = row.try_get(col)?;

    u32::try_from(stock_i32).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}

fn try_into_stock_column(value: u32) -> Result<i32, sqlx::Error> {
    i32::try_from(value).map_err(|e| sqlx::Error::ColumnDecode {
        index: "stock".to_string(),
        source: Box::new(e),
    })
}

fn try_into_position_column(value: usize) -> Result<i32, sqlx::Error> {
    i32::try_from(value).map_err(|e| sqlx::Error::ColumnDecode {
        index: "position".to_string(),
        source: Box::new(e),
    })
}
