//! Order Models

use bengol::{
    catalog::{OfferId, Size},
    checkout::OrderRequest,
    pricing::DeliveryZone,
};
use jiff::Timestamp;
use uuid::Uuid;

/// Status assigned to a freshly created order.
pub const DEFAULT_STATUS: &str = "pending";

/// Customer contact block stored on an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub area: DeliveryZone,
}

/// Order Model
#[derive(Debug, Clone)]
pub struct Order {
    pub uuid: Uuid,
    pub customer: Customer,
    pub items: Vec<OrderItem>,
    pub delivery_charge: u64,
    pub total: u64,
    pub status: String,
    pub created_at: Timestamp,
}

/// Order line item. Name, price, colour and image are snapshots taken at
/// order time; later catalog changes do not alter them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderItem {
    pub uuid: Uuid,
    pub product_id: OfferId,
    pub name: String,
    pub price: u64,
    pub quantity: u32,
    pub selected_size: Size,
    pub selected_color: Option<String>,
    pub image_url: String,
}

/// New Order Model. The identity is generated by the service at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub customer: Customer,
    pub items: Vec<NewOrderItem>,
    pub delivery_charge: u64,
    pub total: u64,
}

/// New Order Item Model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrderItem {
    pub product_id: OfferId,
    pub name: String,
    pub price: u64,
    pub quantity: u32,
    pub selected_size: Size,
    pub selected_color: Option<String>,
    pub image_url: String,
}

impl From<OrderRequest> for NewOrder {
    fn from(request: OrderRequest) -> Self {
        NewOrder {
            customer: Customer {
                name: request.customer.name,
                phone: request.customer.phone,
                address: request.customer.address,
                area: request.customer.area,
            },
            items: request
                .items
                .into_iter()
                .map(|line| NewOrderItem {
                    product_id: line.product_id,
                    name: line.name,
                    price: line.price,
                    quantity: line.quantity,
                    selected_size: line.selected_size,
                    selected_color: line.selected_color,
                    image_url: line.image_url,
                })
                .collect(),
            delivery_charge: request.delivery_charge,
            total: request.total,
        }
    }
}
