//! Admin-key middleware.

use std::sync::Arc;

use salvo::{http::StatusCode, prelude::*};

use crate::{responses::fail, state::State};

/// Header carrying the shared admin secret.
pub(crate) const ADMIN_KEY_HEADER: &str = "x-admin-key";

/// Gate admin endpoints on the `x-admin-key` header. On mismatch the chain
/// stops before any data access.
#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let Ok(state) = depot.obtain::<Arc<State>>() else {
        fail(res, StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
        ctrl.skip_rest();

        return;
    };

    let presented = req
        .headers()
        .get(ADMIN_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    if state.authorizer.authorize(presented).is_err() {
        fail(res, StatusCode::UNAUTHORIZED, "Unauthorized");
        ctrl.skip_rest();

        return;
    }

    ctrl.call_next(req, depot, res).await;
}
