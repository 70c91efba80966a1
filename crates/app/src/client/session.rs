//! Checkout session.

use bengol::{
    cart::Cart,
    catalog::Catalog,
    checkout::{CheckoutError, CustomerDetails, build_order},
    pricing::{DeliveryRates, DeliveryZone, Quote, quote},
};
use thiserror::Error;
use tracing::info;

use crate::client::gateway::{OrderGateway, OrderGatewayError};

/// Submission failures. Validation and transport failures leave the cart and
/// form untouched so the user can correct and retry.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// A submission is already in flight.
    #[error("a submission is already in flight")]
    InFlight,

    /// The form or cart failed validation; nothing was sent.
    #[error(transparent)]
    Invalid(#[from] CheckoutError),

    /// The gateway refused the order or could not be reached.
    #[error(transparent)]
    Gateway(#[from] OrderGatewayError),
}

/// One visitor's checkout state: cart, delivery zone, contact form and the
/// in-flight guard that disables the submit trigger.
#[derive(Debug, Default)]
pub struct CheckoutSession {
    cart: Cart,
    zone: DeliveryZone,
    customer: CustomerDetails,
    submitting: bool,
}

impl CheckoutSession {
    /// A fresh session with an empty cart, zone defaulted to inside Dhaka.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The cart, read-only.
    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The cart, for select/quantity/remove/toggle mutations.
    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    /// The chosen delivery zone.
    #[must_use]
    pub fn zone(&self) -> DeliveryZone {
        self.zone
    }

    /// Pick a delivery zone.
    pub fn set_zone(&mut self, zone: DeliveryZone) {
        self.zone = zone;
    }

    /// The contact form, read-only.
    #[must_use]
    pub fn customer(&self) -> &CustomerDetails {
        &self.customer
    }

    /// The contact form, for edits.
    pub fn customer_mut(&mut self) -> &mut CustomerDetails {
        &mut self.customer
    }

    /// Whether a submission is in flight. Mirrors the disabled state of the
    /// submit trigger.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Recompute the derived totals for the current cart and zone.
    #[must_use]
    pub fn quote(&self, catalog: &Catalog, rates: &DeliveryRates) -> Quote {
        quote(catalog, &self.cart, self.zone, rates)
    }

    /// Validate, build and submit the order.
    ///
    /// Validation happens before any network interaction. On acceptance the
    /// cart and form are cleared and the generated order id returned; on any
    /// failure both are preserved unchanged for a retry.
    ///
    /// # Errors
    ///
    /// Returns a [`SubmitError`] describing the validation, transport or
    /// rejection failure.
    pub async fn submit(
        &mut self,
        catalog: &Catalog,
        rates: &DeliveryRates,
        gateway: &dyn OrderGateway,
    ) -> Result<String, SubmitError> {
        if self.submitting {
            return Err(SubmitError::InFlight);
        }

        let request = build_order(catalog, &self.cart, self.zone, rates, &self.customer)?;

        self.submitting = true;
        let result = gateway.create_order(&request).await;
        self.submitting = false;

        let order_id = result?;

        info!("order {order_id} placed, {} line(s)", request.items.len());

        self.cart.clear();
        self.customer = CustomerDetails::default();

        Ok(order_id)
    }
}
