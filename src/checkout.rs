//! Checkout payload construction
//!
//! Validates customer contact details against a non-empty cart and snapshots
//! the active offers into the wire-shaped order payload. Pure: transport and
//! persistence are the caller's business, and nothing here mutates the cart.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    cart::Cart,
    catalog::{Catalog, OfferId, Size},
    phone::format_bd_phone,
    pricing::{DeliveryRates, DeliveryZone, quote},
};

/// Customer contact details as typed into the checkout form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerDetails {
    /// Customer name.
    pub name: String,

    /// Mobile number.
    pub phone: String,

    /// Full delivery address.
    pub address: String,
}

/// Checkout validation failures, reported before any network interaction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// Name is empty after trimming.
    #[error("name is required")]
    MissingName,

    /// Phone is empty after trimming.
    #[error("phone is required")]
    MissingPhone,

    /// Address is empty after trimming.
    #[error("address is required")]
    MissingAddress,

    /// Nothing is selected.
    #[error("cart is empty")]
    EmptyCart,
}

/// The order-creation payload, shaped for the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    /// Customer block.
    pub customer: OrderCustomer,

    /// One line per active offer, snapshotted at submission time.
    pub items: Vec<OrderLine>,

    /// Computed delivery charge in minor units.
    pub delivery_charge: u64,

    /// Computed grand total in minor units.
    pub total: u64,
}

/// Customer block of the order payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderCustomer {
    /// Customer name, trimmed.
    pub name: String,

    /// Mobile number, normalised to `+8801…` form where recognised.
    pub phone: String,

    /// Full delivery address, trimmed.
    pub address: String,

    /// Chosen delivery zone.
    pub area: DeliveryZone,
}

/// A single order line, snapshotting catalog data at submission time so later
/// catalog changes do not alter historical orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    /// Offer id.
    pub product_id: OfferId,

    /// Offer name snapshot.
    pub name: String,

    /// Unit price snapshot in minor units.
    pub price: u64,

    /// Ordered quantity.
    pub quantity: u32,

    /// Chosen size.
    pub selected_size: Size,

    /// Colour snapshot, when the offer has one.
    pub selected_color: Option<String>,

    /// Image reference snapshot.
    pub image_url: String,
}

/// Build the order payload for the current cart.
///
/// Contact fields must be non-empty after trimming and the cart must hold at
/// least one entry; the delivery charge and total are derived with
/// [`quote`]. Cart entries whose offer has left the catalog are skipped, the
/// same way the pricing engine ignores them.
///
/// # Errors
///
/// Returns the first applicable [`CheckoutError`]; the cart is untouched
/// either way.
pub fn build_order(
    catalog: &Catalog,
    cart: &Cart,
    zone: DeliveryZone,
    rates: &DeliveryRates,
    customer: &CustomerDetails,
) -> Result<OrderRequest, CheckoutError> {
    let name = customer.name.trim();
    let phone = customer.phone.trim();
    let address = customer.address.trim();

    if name.is_empty() {
        return Err(CheckoutError::MissingName);
    }

    if phone.is_empty() {
        return Err(CheckoutError::MissingPhone);
    }

    if address.is_empty() {
        return Err(CheckoutError::MissingAddress);
    }

    let items: Vec<OrderLine> = cart
        .iter()
        .filter_map(|entry| catalog.get(&entry.offer).map(|offer| (offer, entry)))
        .map(|(offer, entry)| OrderLine {
            product_id: offer.id.clone(),
            name: offer.name.clone(),
            price: *offer.price,
            quantity: entry.quantity,
            selected_size: entry.size,
            selected_color: offer.color.clone(),
            image_url: offer.image.clone(),
        })
        .collect();

    if items.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let quote = quote(catalog, cart, zone, rates);

    Ok(OrderRequest {
        customer: OrderCustomer {
            name: name.to_string(),
            phone: format_bd_phone(phone),
            address: address.to_string(),
            area: zone,
        },
        items,
        delivery_charge: *quote.delivery_charge,
        total: *quote.total,
    })
}
