//! State

use std::sync::Arc;

use bengol_app::{auth::Authorizer, context::AppContext, domain::orders::OrdersService};

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) orders: Arc<dyn OrdersService>,
    pub(crate) authorizer: Arc<dyn Authorizer>,
}

impl State {
    #[must_use]
    pub(crate) fn new(orders: Arc<dyn OrdersService>, authorizer: Arc<dyn Authorizer>) -> Self {
        Self { orders, authorizer }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext, authorizer: Arc<dyn Authorizer>) -> Arc<Self> {
        Arc::new(Self::new(app.orders, authorizer))
    }
}
