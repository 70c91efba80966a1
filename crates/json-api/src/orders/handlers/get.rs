//! Get Order Handler

use std::sync::Arc;

use salvo::{http::StatusCode, prelude::*};
use uuid::Uuid;

use crate::{
    orders::errors::render_service_error,
    responses::{OrderBody, fail},
    state::State,
};

/// Get Order Handler
///
/// Returns the full order including line items. Sits behind the admin-key
/// middleware.
#[salvo::handler]
pub(crate) async fn handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let Ok(state) = depot.obtain::<Arc<State>>() else {
        return fail(res, StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
    };

    // A malformed id cannot name any order.
    let Some(id) = req.param::<Uuid>("id") else {
        return fail(res, StatusCode::NOT_FOUND, "Order not found");
    };

    match state.orders.get_order(id).await {
        Ok(order) => res.render(Json(OrderBody {
            success: true,
            order: order.into(),
        })),
        Err(error) => render_service_error(res, &error),
    }
}
