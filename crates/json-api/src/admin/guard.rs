//! Admin session guard.
//!
//! Every path under `/admin` except the login page requires the session
//! marker cookie; without it the request is redirected to the login page.
//! Only the cookie's presence is checked, never its value.

use salvo::prelude::*;

/// Session marker cookie set by the admin login flow.
pub(crate) const SESSION_COOKIE: &str = "admin_token";

/// Where unauthenticated admin requests are sent.
pub(crate) const LOGIN_PATH: &str = "/admin/login";

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let path = req.uri().path();

    if path != LOGIN_PATH && req.cookie(SESSION_COOKIE).is_none() {
        res.render(Redirect::other(LOGIN_PATH));
        ctrl.skip_rest();

        return;
    }

    ctrl.call_next(req, depot, res).await;
}
