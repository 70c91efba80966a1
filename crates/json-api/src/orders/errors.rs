//! Errors

use bengol_app::domain::orders::OrdersServiceError;
use salvo::{http::StatusCode, prelude::*};
use tracing::error;

use crate::responses::fail;

/// Map a service failure onto the wire envelope. Unexpected storage errors
/// are logged before their message is passed through with a 500.
pub(crate) fn render_service_error(res: &mut Response, error: &OrdersServiceError) {
    match error {
        OrdersServiceError::NotFound => fail(res, StatusCode::NOT_FOUND, "Order not found"),
        OrdersServiceError::InvalidReference
        | OrdersServiceError::MissingRequiredData
        | OrdersServiceError::InvalidData => {
            fail(res, StatusCode::BAD_REQUEST, "Invalid order payload");
        }
        OrdersServiceError::AlreadyExists | OrdersServiceError::Sql(_) => {
            error!("order storage failure: {error}");

            fail(res, StatusCode::INTERNAL_SERVER_ERROR, error.to_string());
        }
    }
}
