//! Wire envelopes
//!
//! Every endpoint answers with a `success`-flagged JSON body: `{ success:
//! true, ... }` on the happy path, `{ success: false, error }` otherwise.

use bengol_app::domain::orders::models::{Order, OrderItem};
use salvo::{http::StatusCode, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Failure envelope.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ErrorBody {
    pub success: bool,
    pub error: String,
}

/// Render a failure envelope with the given status code.
pub(crate) fn fail(res: &mut Response, code: StatusCode, error: impl Into<String>) {
    res.status_code(code);
    res.render(Json(ErrorBody {
        success: false,
        error: error.into(),
    }));
}

/// Envelope for a created order.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderCreatedBody {
    pub success: bool,
    pub order_id: String,
}

/// Envelope wrapping a full order.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct OrderBody {
    pub success: bool,
    pub order: OrderResponse,
}

/// An order as returned to admin callers.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderResponse {
    pub uuid: Uuid,
    pub customer: CustomerResponse,
    pub items: Vec<OrderItemResponse>,
    pub delivery_charge: u64,
    pub total: u64,
    pub status: String,
    pub created_at: String,
}

/// Customer block of an order response.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct CustomerResponse {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub area: String,
}

/// A line item of an order response.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderItemResponse {
    pub uuid: Uuid,
    pub product_id: String,
    pub name: String,
    pub price: u64,
    pub quantity: u32,
    pub selected_size: String,
    pub selected_color: Option<String>,
    pub image_url: String,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        OrderResponse {
            uuid: order.uuid,
            customer: CustomerResponse {
                name: order.customer.name,
                phone: order.customer.phone,
                address: order.customer.address,
                area: order.customer.area.to_string(),
            },
            items: order.items.into_iter().map(OrderItemResponse::from).collect(),
            delivery_charge: order.delivery_charge,
            total: order.total,
            status: order.status,
            created_at: order.created_at.to_string(),
        }
    }
}

impl From<OrderItem> for OrderItemResponse {
    fn from(item: OrderItem) -> Self {
        OrderItemResponse {
            uuid: item.uuid,
            product_id: item.product_id.to_string(),
            name: item.name,
            price: item.price,
            quantity: item.quantity,
            selected_size: item.selected_size.to_string(),
            selected_color: item.selected_color,
            image_url: item.image_url,
        }
    }
}
