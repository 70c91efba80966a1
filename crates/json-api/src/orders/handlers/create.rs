//! Create Order Handler

use std::sync::Arc;

use bengol::checkout::OrderRequest;
use salvo::{http::StatusCode, prelude::*};

use crate::{
    orders::errors::render_service_error,
    responses::{OrderCreatedBody, fail},
    state::State,
};

/// Create Order Handler
///
/// Public endpoint receiving the checkout payload. The client has already
/// validated, but the payload is re-checked here so a hand-crafted request
/// cannot persist an empty or contact-less order.
#[salvo::handler]
pub(crate) async fn handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let Ok(state) = depot.obtain::<Arc<State>>() else {
        return fail(res, StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
    };

    let Ok(request) = req.parse_json::<OrderRequest>().await else {
        return fail(res, StatusCode::BAD_REQUEST, "Invalid order payload");
    };

    let customer = &request.customer;

    if customer.name.trim().is_empty()
        || customer.phone.trim().is_empty()
        || customer.address.trim().is_empty()
    {
        return fail(res, StatusCode::BAD_REQUEST, "Missing required customer fields");
    }

    if request.items.is_empty() {
        return fail(res, StatusCode::BAD_REQUEST, "Cart is empty");
    }

    match state.orders.create_order(request.into()).await {
        Ok(order) => res.render(Json(OrderCreatedBody {
            success: true,
            order_id: order.uuid.to_string(),
        })),
        Err(error) => render_service_error(res, &error),
    }
}

#[cfg(test)]
mod tests {
    use bengol_app::domain::orders::{MockOrdersService, OrdersServiceError};
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;
    use uuid::Uuid;

    use crate::{
        responses::ErrorBody,
        test_helpers::{make_order, orders_service},
    };

    use super::*;

    fn make_service(orders: MockOrdersService) -> Service {
        orders_service(orders, Router::with_path("order").post(handler))
    }

    fn payload() -> serde_json::Value {
        json!({
            "customer": {
                "name": "Rahim Uddin",
                "phone": "+8801805530282",
                "address": "Dhanmondi, Dhaka",
                "area": "inside"
            },
            "items": [{
                "productId": "pack-6",
                "name": "6-Piece Combo Pack",
                "price": 1750,
                "quantity": 1,
                "selectedSize": "M",
                "selectedColor": null,
                "imageUrl": "/products/pack-6.png"
            }],
            "deliveryCharge": 0,
            "total": 1750
        })
    }

    #[tokio::test]
    async fn test_create_order_returns_generated_id() -> TestResult {
        let uuid = Uuid::now_v7();

        let mut orders = MockOrdersService::new();

        orders
            .expect_create_order()
            .once()
            .withf(|new| new.items.len() == 1 && new.total == 1750)
            .return_once(move |new| Ok(make_order(uuid, new)));

        let mut res = TestClient::post("http://example.com/order")
            .json(&payload())
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: OrderCreatedBody = res.take_json().await?;

        assert!(body.success);
        assert_eq!(body.order_id, uuid.to_string());

        Ok(())
    }

    #[tokio::test]
    async fn test_blank_contact_field_is_rejected_before_persistence() -> TestResult {
        let mut orders = MockOrdersService::new();
        orders.expect_create_order().never();

        let mut body = payload();
        body["customer"]["phone"] = json!("   ");

        let mut res = TestClient::post("http://example.com/order")
            .json(&body)
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        let error: ErrorBody = res.take_json().await?;

        assert!(!error.success);
        assert_eq!(error.error, "Missing required customer fields");

        Ok(())
    }

    #[tokio::test]
    async fn test_empty_items_are_rejected_before_persistence() -> TestResult {
        let mut orders = MockOrdersService::new();
        orders.expect_create_order().never();

        let mut body = payload();
        body["items"] = json!([]);

        let mut res = TestClient::post("http://example.com/order")
            .json(&body)
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        let error: ErrorBody = res.take_json().await?;

        assert_eq!(error.error, "Cart is empty");

        Ok(())
    }

    #[tokio::test]
    async fn test_storage_failure_passes_message_through() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_create_order()
            .once()
            .return_once(|_| Err(OrdersServiceError::Sql(sqlx_pool_error())));

        let mut res = TestClient::post("http://example.com/order")
            .json(&payload())
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        let error: ErrorBody = res.take_json().await?;

        assert!(!error.success);
        assert!(error.error.contains("storage error"));

        Ok(())
    }

    fn sqlx_pool_error() -> bengol_app::sqlx::Error {
        bengol_app::sqlx::Error::PoolTimedOut
    }
}
