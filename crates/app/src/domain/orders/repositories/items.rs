//! Order Items Repository

use bengol::catalog::{OfferId, Size};
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};
use uuid::Uuid;

use crate::domain::orders::models::{NewOrderItem, OrderItem};

use super::orders::{into_amount, try_get_amount};

const GET_ORDER_ITEMS_SQL: &str = include_str!("sql/get_order_items.sql");
const CREATE_ORDER_ITEM_SQL: &str = include_str!("sql/create_order_item.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrderItemsRepository;

impl PgOrderItemsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn get_order_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: Uuid,
    ) -> Result<Vec<OrderItem>, sqlx::Error> {
        query_as::<Postgres, OrderItem>(GET_ORDER_ITEMS_SQL)
            .bind(order)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn create_order_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: Uuid,
        item_uuid: Uuid,
        item: &NewOrderItem,
    ) -> Result<OrderItem, sqlx::Error> {
        let price = into_amount(item.price, "price")?;

        let quantity = i32::try_from(item.quantity).map_err(|e| sqlx::Error::ColumnDecode {
            index: "quantity".to_string(),
            source: Box::new(e),
        })?;

        query_as::<Postgres, OrderItem>(CREATE_ORDER_ITEM_SQL)
            .bind(item_uuid)
            .bind(order)
            .bind(item.product_id.as_str())
            .bind(&item.name)
            .bind(price)
            .bind(quantity)
            .bind(item.selected_size.to_string())
            .bind(item.selected_color.as_deref())
            .bind(&item.image_url)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for OrderItem {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let selected_size: Size = row
            .try_get::<String, _>("selected_size")?
            .parse()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "selected_size".to_string(),
                source: Box::new(e),
            })?;

        let quantity_i32: i32 = row.try_get("quantity")?;

        let quantity = u32::try_from(quantity_i32).map_err(|e| sqlx::Error::ColumnDecode {
            index: "quantity".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            uuid: row.try_get("uuid")?,
            product_id: OfferId::new(row.try_get::<String, _>("product_id")?),
            name: row.try_get("name")?,
            price: try_get_amount(row, "price")?,
            quantity,
            selected_size,
            selected_color: row.try_get("selected_color")?,
            image_url: row.try_get("image_url")?,
        })
    }
}
