//! Test helpers.

use std::sync::Arc;

use bengol::{
    catalog::{OfferId, Size},
    pricing::DeliveryZone,
};
use bengol_app::{
    auth::MockAuthorizer,
    domain::orders::{
        MockOrdersService,
        models::{Customer, NewOrder, NewOrderItem, Order, OrderItem},
    },
};
use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use crate::state::State;

pub(crate) fn strict_authorizer() -> MockAuthorizer {
    let mut authorizer = MockAuthorizer::new();

    authorizer.expect_authorize().never();

    authorizer
}

pub(crate) fn strict_orders() -> MockOrdersService {
    let mut orders = MockOrdersService::new();

    orders.expect_create_order().never();
    orders.expect_get_order().never();
    orders.expect_update_status().never();

    orders
}

pub(crate) fn state_with_orders(orders: MockOrdersService) -> Arc<State> {
    Arc::new(State::new(Arc::new(orders), Arc::new(strict_authorizer())))
}

pub(crate) fn state_with_authorizer(authorizer: MockAuthorizer) -> Arc<State> {
    Arc::new(State::new(Arc::new(strict_orders()), Arc::new(authorizer)))
}

pub(crate) fn orders_service(orders: MockOrdersService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_orders(orders)))
            .push(route),
    )
}

/// A one-line pack order as the checkout client would submit it.
pub(crate) fn new_order() -> NewOrder {
    NewOrder {
        customer: Customer {
            name: "Rahim Uddin".to_string(),
            phone: "+8801805530282".to_string(),
            address: "Dhanmondi, Dhaka".to_string(),
            area: DeliveryZone::Inside,
        },
        items: vec![NewOrderItem {
            product_id: OfferId::new("pack-6"),
            name: "6-Piece Combo Pack".to_string(),
            price: 1750,
            quantity: 1,
            selected_size: Size::M,
            selected_color: None,
            image_url: "/products/pack-6.png".to_string(),
        }],
        delivery_charge: 0,
        total: 1750,
    }
}

/// The order the store would persist for `new`, with the given identity.
pub(crate) fn make_order(uuid: Uuid, new: NewOrder) -> Order {
    Order {
        uuid,
        customer: new.customer,
        items: new
            .items
            .into_iter()
            .map(|item| OrderItem {
                uuid: Uuid::now_v7(),
                product_id: item.product_id,
                name: item.name,
                price: item.price,
                quantity: item.quantity,
                selected_size: item.selected_size,
                selected_color: item.selected_color,
                image_url: item.image_url,
            })
            .collect(),
        delivery_charge: new.delivery_charge,
        total: new.total,
        status: "pending".to_string(),
        created_at: Timestamp::UNIX_EPOCH,
    }
}
