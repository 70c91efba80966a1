//! Offer catalog
//!
//! The catalog is a read-only list of purchasable offers loaded once at
//! startup. Offers are never mutated at runtime; orders snapshot whatever
//! they need from them at submission time.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::prices::Price;

/// Garment sizes sold by the shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Size {
    /// Medium — 28" length, 40" chest.
    M,
    /// Large — 29" length, 42" chest.
    L,
    /// Extra large — 31" length, 44" chest.
    XL,
}

impl Size {
    /// The size chosen when a card is toggled without picking one explicitly.
    pub const DEFAULT: Size = Size::M;
}

impl Display for Size {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Size::M => f.write_str("M"),
            Size::L => f.write_str("L"),
            Size::XL => f.write_str("XL"),
        }
    }
}

/// Error returned when parsing a [`Size`] from text fails.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown size {0:?}")]
pub struct ParseSizeError(String);

impl FromStr for Size {
    type Err = ParseSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "M" => Ok(Size::M),
            "L" => Ok(Size::L),
            "XL" => Ok(Size::XL),
            other => Err(ParseSizeError(other.to_string())),
        }
    }
}

/// Stable offer identity, e.g. `pack-6`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OfferId(String);

impl OfferId {
    /// Create an offer id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        OfferId(id.into())
    }

    /// The id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for OfferId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl From<&str> for OfferId {
    fn from(value: &str) -> Self {
        OfferId::new(value)
    }
}

/// A purchasable catalog entry, either a multi-piece pack or a single garment.
#[derive(Debug, Clone)]
pub struct Offer {
    /// Stable identity, unique within the catalog.
    pub id: OfferId,

    /// Display name.
    pub name: String,

    /// Unit price in minor currency units.
    pub price: Price,

    /// Whether this offer bundles multiple physical pieces under one price.
    pub is_pack: bool,

    /// Selectable sizes, in display order. Never empty.
    pub sizes: SmallVec<[Size; 3]>,

    /// Image reference shown on the card and snapshotted onto orders.
    pub image: String,

    /// Optional colour attribute for single garments.
    pub color: Option<String>,

    /// Short marketing description.
    pub description: String,
}

impl Offer {
    /// The size assigned when the offer is toggled into the cart.
    ///
    /// Prefers [`Size::DEFAULT`] when the offer carries it, otherwise the
    /// first listed size.
    #[must_use]
    pub fn default_size(&self) -> Size {
        if self.sizes.contains(&Size::DEFAULT) {
            Size::DEFAULT
        } else {
            // Construction guarantees at least one size.
            self.sizes.first().copied().unwrap_or(Size::DEFAULT)
        }
    }
}

/// Catalog construction and fixture parsing errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two offers share the same id.
    #[error("duplicate offer id: {0}")]
    DuplicateOffer(OfferId),

    /// An offer has an empty size list.
    #[error("offer {0} has no sizes")]
    NoSizes(OfferId),

    /// An offer has a zero price.
    #[error("offer {0} has a non-positive price")]
    NonPositivePrice(OfferId),

    /// YAML parsing error.
    #[error("failed to parse catalog fixture: {0}")]
    Yaml(#[from] serde_norway::Error),
}

/// The read-only offer catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    offers: Vec<Offer>,
    index: FxHashMap<OfferId, usize>,
}

/// YAML fixture describing the deployed catalog.
#[derive(Debug, Deserialize)]
struct CatalogFixture {
    offers: Vec<OfferFixture>,
}

#[derive(Debug, Deserialize)]
struct OfferFixture {
    id: String,
    name: String,
    price: u64,
    #[serde(default)]
    is_pack: bool,
    sizes: Vec<Size>,
    image: String,
    #[serde(default)]
    color: Option<String>,
    #[serde(default)]
    description: String,
}

impl Catalog {
    /// Build a catalog from offers, rejecting duplicates, empty size lists
    /// and non-positive prices.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] describing the first offending offer.
    pub fn new(offers: impl Into<Vec<Offer>>) -> Result<Self, CatalogError> {
        let offers = offers.into();
        let mut index = FxHashMap::default();

        for (position, offer) in offers.iter().enumerate() {
            if offer.sizes.is_empty() {
                return Err(CatalogError::NoSizes(offer.id.clone()));
            }

            if *offer.price == 0 {
                return Err(CatalogError::NonPositivePrice(offer.id.clone()));
            }

            if index.insert(offer.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateOffer(offer.id.clone()));
            }
        }

        Ok(Catalog { offers, index })
    }

    /// Parse a catalog from a YAML fixture document.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] on malformed YAML or invalid offer data.
    pub fn from_yaml(yaml: &str) -> Result<Self, CatalogError> {
        let fixture: CatalogFixture = serde_norway::from_str(yaml)?;

        let offers = fixture
            .offers
            .into_iter()
            .map(|offer| Offer {
                id: OfferId::new(offer.id),
                name: offer.name,
                price: Price::new(offer.price),
                is_pack: offer.is_pack,
                sizes: SmallVec::from_vec(offer.sizes),
                image: offer.image,
                color: offer.color,
                description: offer.description,
            })
            .collect::<Vec<_>>();

        Catalog::new(offers)
    }

    /// The catalog shipped with the BengolSale deployment.
    ///
    /// # Panics
    ///
    /// Panics if the embedded fixture is invalid, which is caught by tests.
    #[must_use]
    pub fn bengol_sale() -> Self {
        #[expect(
            clippy::expect_used,
            reason = "the embedded fixture is validated by a test; failure is a build defect"
        )]
        let catalog = Catalog::from_yaml(include_str!("../fixtures/catalog.yaml"))
            .expect("embedded catalog fixture must be valid");

        catalog
    }

    /// Look up an offer by id.
    #[must_use]
    pub fn get(&self, id: &OfferId) -> Option<&Offer> {
        self.index.get(id).and_then(|&position| self.offers.get(position))
    }

    /// Whether an offer with this id exists.
    #[must_use]
    pub fn contains(&self, id: &OfferId) -> bool {
        self.index.contains_key(id)
    }

    /// Iterate over offers in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Offer> {
        self.offers.iter()
    }

    /// Offers with the pack flag set.
    pub fn packs(&self) -> impl Iterator<Item = &Offer> {
        self.offers.iter().filter(|offer| offer.is_pack)
    }

    /// Single-garment offers.
    pub fn singles(&self) -> impl Iterator<Item = &Offer> {
        self.offers.iter().filter(|offer| !offer.is_pack)
    }

    /// Number of offers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.offers.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }
}
