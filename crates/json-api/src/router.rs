//! App Router

use salvo::Router;

use crate::{admin, auth, healthcheck, orders};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::with_path("order")
                .post(orders::create::handler)
                .push(
                    Router::with_path("{id}")
                        .hoop(auth::middleware::handler)
                        .get(orders::get::handler)
                        .patch(orders::update_status::handler),
                ),
        )
        .push(
            Router::with_path("admin")
                .hoop(admin::guard::handler)
                .get(admin::pages::dashboard)
                .push(Router::with_path("login").get(admin::pages::login)),
        )
}
