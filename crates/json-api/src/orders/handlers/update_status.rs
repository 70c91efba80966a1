//! Update Order Status Handler

use std::sync::Arc;

use salvo::{http::StatusCode, prelude::*};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    orders::errors::render_service_error,
    responses::{OrderBody, fail},
    state::State,
};

/// Status patch body.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct StatusPatch {
    pub status: Option<String>,
}

/// Update Order Status Handler
///
/// Updates only the status field of the order. Sits behind the admin-key
/// middleware; a missing or blank status is rejected before any data access.
#[salvo::handler]
pub(crate) async fn handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let Ok(state) = depot.obtain::<Arc<State>>() else {
        return fail(res, StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
    };

    let Some(id) = req.param::<Uuid>("id") else {
        return fail(res, StatusCode::NOT_FOUND, "Order not found");
    };

    let patch = req.parse_json::<StatusPatch>().await.unwrap_or_default();

    let status = patch
        .status
        .map(|status| status.trim().to_string())
        .filter(|status| !status.is_empty());

    let Some(status) = status else {
        return fail(res, StatusCode::BAD_REQUEST, "Status is required");
    };

    match state.orders.update_status(id, &status).await {
        Ok(order) => res.render(Json(OrderBody {
            success: true,
            order: order.into(),
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
        test_helpers::{make_order, new_order, orders_service},
    };

    use super::*;

    fn make_service(orders: MockOrdersService) -> Service {
        orders_service(
            orders,
            Router::with_path("order").push(Router::with_path("{id}").patch(handler)),
        )
    }

    #[tokio::test]
    async fn test_update_status_returns_updated_order() -> TestResult {
        let uuid = Uuid::now_v7();

        let mut orders = MockOrdersService::new();

        orders
            .expect_update_status()
            .once()
            .withf(move |id, status| *id == uuid && status == "shipped")
            .return_once(move |_, status| {
                let mut order = make_order(uuid, new_order());
                order.status = status.to_string();

                Ok(order)
            });

        let mut res = TestClient::patch(format!("http://example.com/order/{uuid}"))
            .json(&json!({ "status": "shipped" }))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: OrderBody = res.take_json().await?;

        assert!(body.success);
        assert_eq!(body.order.status, "shipped");

        Ok(())
    }

    #[tokio::test]
    async fn test_missing_status_is_rejected_before_any_data_access() -> TestResult {
        let mut orders = MockOrdersService::new();
        orders.expect_update_status().never();

        let mut res = TestClient::patch(format!("http://example.com/order/{}", Uuid::now_v7()))
            .json(&json!({}))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        let error: ErrorBody = res.take_json().await?;

        assert!(!error.success);
        assert_eq!(error.error, "Status is required");

        Ok(())
    }

    #[tokio::test]
    async fn test_blank_status_is_rejected() -> TestResult {
        let mut orders = MockOrdersService::new();
        orders.expect_update_status().never();

        let res = TestClient::patch(format!("http://example.com/order/{}", Uuid::now_v7()))
            .json(&json!({ "status": "   " }))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_order_surfaces_not_found() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_update_status()
            .once()
            .return_once(|_, _| Err(OrdersServiceError::NotFound));

        let mut res = TestClient::patch(format!("http://example.com/order/{}", Uuid::now_v7()))
            .json(&json!({ "status": "shipped" }))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        let error: ErrorBody = res.take_json().await?;

        assert_eq!(error.error, "Order not found");

        Ok(())
    }
}
