//! Orders service.

use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::{
    database::Db,
    domain::orders::{
        errors::OrdersServiceError,
        models::{DEFAULT_STATUS, NewOrder, Order},
        repositories::{PgOrderItemsRepository, PgOrdersRepository},
    },
};

#[derive(Debug, Clone)]
pub struct PgOrdersService {
    db: Db,
    orders_repository: PgOrdersRepository,
    items_repository: PgOrderItemsRepository,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            orders_repository: PgOrdersRepository::new(),
            items_repository: PgOrderItemsRepository::new(),
        }
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    async fn create_order(&self, order: NewOrder) -> Result<Order, OrdersServiceError> {
        let uuid = Uuid::now_v7();

        let mut tx = self.db.begin().await?;

        let mut created = self
            .orders_repository
            .create_order(&mut tx, uuid, &order, DEFAULT_STATUS)
            .await?;

        let mut items = Vec::with_capacity(order.items.len());

        for item in &order.items {
            let item = self
                .items_repository
                .create_order_item(&mut tx, uuid, Uuid::now_v7(), item)
                .await?;

            items.push(item);
        }

        tx.commit().await?;

        created.items = items;

        Ok(created)
    }

    async fn get_order(&self, uuid: Uuid) -> Result<Order, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let mut order = self.orders_repository.get_order(&mut tx, uuid).await?;

        let items = self.items_repository.get_order_items(&mut tx, uuid).await?;

        tx.commit().await?;

        order.items = items;

        Ok(order)
    }

    async fn update_status(&self, uuid: Uuid, status: &str) -> Result<Order, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let mut order = self
            .orders_repository
            .update_status(&mut tx, uuid, status)
            .await?;

        let items = self.items_repository.get_order_items(&mut tx, uuid).await?;

        tx.commit().await?;

        order.items = items;

        Ok(order)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Persist a new order with a freshly generated identity and the default
    /// status, returning the stored order.
    async fn create_order(&self, order: NewOrder) -> Result<Order, OrdersServiceError>;

    /// Retrieve a single order including its line items.
    async fn get_order(&self, uuid: Uuid) -> Result<Order, OrdersServiceError>;

    /// Update only the status of an order, returning the updated order.
    async fn update_status(&self, uuid: Uuid, status: &str) -> Result<Order, OrdersServiceError>;
}
