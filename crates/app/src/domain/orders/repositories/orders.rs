//! Orders Repository

use bengol::pricing::DeliveryZone;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};
use uuid::Uuid;

use crate::domain::orders::models::{Customer, NewOrder, Order};

const GET_ORDER_SQL: &str = include_str!("sql/get_order.sql");
const CREATE_ORDER_SQL: &str = include_str!("sql/create_order.sql");
const UPDATE_ORDER_STATUS_SQL: &str = include_str!("sql/update_order_status.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrdersRepository;

impl PgOrdersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn get_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: Uuid,
    ) -> Result<Order, sqlx::Error> {
        query_as::<Postgres, Order>(GET_ORDER_SQL)
            .bind(order)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: Uuid,
        data: &NewOrder,
        status: &str,
    ) -> Result<Order, sqlx::Error> {
        let delivery_charge = into_amount(data.delivery_charge, "delivery_charge")?;
        let total = into_amount(data.total, "total")?;

        query_as::<Postgres, Order>(CREATE_ORDER_SQL)
            .bind(order)
            .bind(&data.customer.name)
            .bind(&data.customer.phone)
            .bind(&data.customer.address)
            .bind(data.customer.area.to_string())
            .bind(delivery_charge)
            .bind(total)
            .bind(status)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_status(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: Uuid,
        status: &str,
    ) -> Result<Order, sqlx::Error> {
        query_as::<Postgres, Order>(UPDATE_ORDER_STATUS_SQL)
            .bind(order)
            .bind(status)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for Order {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let area: DeliveryZone = row
            .try_get::<String, _>("delivery_area")?
            .parse()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "delivery_area".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            uuid: row.try_get("uuid")?,
            customer: Customer {
                name: row.try_get("customer_name")?,
                phone: row.try_get("customer_phone")?,
                address: row.try_get("customer_address")?,
                area,
            },
            // Line items are loaded separately by the service.
            items: Vec::new(),
            delivery_charge: try_get_amount(row, "delivery_charge")?,
            total: try_get_amount(row, "total")?,
            status: row.try_get("status")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}

pub(super) fn try_get_amount(row: &PgRow, col: &str) -> Result<u64, sqlx::Error> {
    let amount_i64: i64 = row.try_get(col)?;

    u64::try_from(amount_i64).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}

pub(super) fn into_amount(amount: u64, col: &str) -> Result<i64, sqlx::Error> {
    i64::try_from(amount).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}
