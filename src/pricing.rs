//! Delivery pricing
//!
//! Derives a [`Quote`] from the cart, the catalog and the chosen delivery
//! zone. Quotes are recomputed fresh on every cart or zone change and are
//! never stored.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{cart::Cart, catalog::Catalog, prices::Price};

/// Minimum number of single pieces that earns free delivery on its own.
pub const FREE_DELIVERY_PIECES: u32 = 3;

/// Delivery zone classification. Only affects the flat fee when free
/// delivery does not apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryZone {
    /// Inside Dhaka.
    #[default]
    Inside,

    /// Everywhere else in the country.
    Outside,
}

impl Display for DeliveryZone {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DeliveryZone::Inside => f.write_str("inside"),
            DeliveryZone::Outside => f.write_str("outside"),
        }
    }
}

/// Error returned when parsing a [`DeliveryZone`] from text fails.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown delivery zone {0:?}")]
pub struct ParseDeliveryZoneError(String);

impl FromStr for DeliveryZone {
    type Err = ParseDeliveryZoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inside" => Ok(DeliveryZone::Inside),
            "outside" => Ok(DeliveryZone::Outside),
            other => Err(ParseDeliveryZoneError(other.to_string())),
        }
    }
}

/// Flat delivery fees per zone. Two distinct positive amounts with
/// inside < outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryRates {
    /// Fee inside Dhaka.
    pub inside: Price,

    /// Fee outside Dhaka.
    pub outside: Price,
}

impl DeliveryRates {
    /// The fee for a zone.
    #[must_use]
    pub const fn for_zone(&self, zone: DeliveryZone) -> Price {
        match zone {
            DeliveryZone::Inside => self.inside,
            DeliveryZone::Outside => self.outside,
        }
    }
}

impl Default for DeliveryRates {
    /// The deployed rates: ৳80 inside Dhaka, ৳130 outside.
    fn default() -> Self {
        DeliveryRates {
            inside: Price::new(80),
            outside: Price::new(130),
        }
    }
}

/// Derived totals for the current cart. Pure data, no lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    /// Sum of unit price × quantity over active offers.
    pub subtotal: Price,

    /// Whether delivery is free for this cart.
    pub free_delivery: bool,

    /// Zero when free, otherwise the zone's flat fee.
    pub delivery_charge: Price,

    /// Subtotal plus delivery charge.
    pub total: Price,
}

/// Compute the quote for a cart.
///
/// Free delivery applies when any active offer is a pack, or when the summed
/// quantity of active single offers reaches [`FREE_DELIVERY_PIECES`]. Cart
/// entries whose offer is missing from the catalog contribute nothing.
#[must_use]
pub fn quote(catalog: &Catalog, cart: &Cart, zone: DeliveryZone, rates: &DeliveryRates) -> Quote {
    let active = cart
        .iter()
        .filter_map(|entry| catalog.get(&entry.offer).map(|offer| (offer, entry)));

    let mut subtotal = Price::ZERO;
    let mut has_pack = false;
    let mut single_pieces = 0_u32;

    for (offer, entry) in active {
        subtotal = subtotal + offer.price.times(entry.quantity);

        if offer.is_pack {
            has_pack = true;
        } else {
            single_pieces += entry.quantity;
        }
    }

    let free_delivery = has_pack || single_pieces >= FREE_DELIVERY_PIECES;

    let delivery_charge = if free_delivery {
        Price::ZERO
    } else {
        rates.for_zone(zone)
    };

    Quote {
        subtotal,
        free_delivery,
        delivery_charge,
        total: subtotal + delivery_charge,
    }
}
