//! Cart state
//!
//! The cart is process-local UI state: one entry per selected offer, holding
//! the chosen size and a quantity that never drops below one. Entries keep
//! insertion order for display; pricing does not depend on it.

use thiserror::Error;

use crate::catalog::{Catalog, Offer, OfferId, Size};

/// A selected offer with its chosen size and quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartEntry {
    /// Id of the offer this entry refers to.
    pub offer: OfferId,

    /// Chosen size, one of the offer's available sizes.
    pub size: Size,

    /// Quantity, always at least 1.
    pub quantity: u32,
}

/// Errors raised at the cart's call boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// The offer id is not in the catalog.
    #[error("offer {0} is not in the catalog")]
    UnknownOffer(OfferId),

    /// The size is not offered for this offer.
    #[error("offer {0} is not available in size {1}")]
    SizeNotOffered(OfferId, Size),
}

/// The cart: selected offers in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Cart::default()
    }

    /// Create a cart pre-seeded with one offer at quantity 1, as the landing
    /// page does with its featured pack.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] when the offer or size is invalid.
    pub fn with_default_selection(
        catalog: &Catalog,
        offer: &OfferId,
        size: Size,
    ) -> Result<Self, CartError> {
        let mut cart = Cart::new();
        cart.select(catalog, offer, size)?;

        Ok(cart)
    }

    /// Select a size for an offer.
    ///
    /// Creates the entry at quantity 1 when the offer is not in the cart yet;
    /// otherwise updates only the size, preserving quantity.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] when the offer is unknown or the size is not
    /// offered. The cart is unchanged on error.
    pub fn select(&mut self, catalog: &Catalog, offer: &OfferId, size: Size) -> Result<(), CartError> {
        let known = catalog
            .get(offer)
            .ok_or_else(|| CartError::UnknownOffer(offer.clone()))?;

        if !known.sizes.contains(&size) {
            return Err(CartError::SizeNotOffered(offer.clone(), size));
        }

        match self.entry_mut(offer) {
            Some(entry) => entry.size = size,
            None => self.entries.push(CartEntry {
                offer: offer.clone(),
                size,
                quantity: 1,
            }),
        }

        Ok(())
    }

    /// Adjust an entry's quantity by `delta`, clamping at 1.
    ///
    /// No-op when the offer is not in the cart.
    pub fn change_quantity(&mut self, offer: &OfferId, delta: i32) {
        if let Some(entry) = self.entry_mut(offer) {
            let adjusted = i64::from(entry.quantity) + i64::from(delta);
            entry.quantity = u32::try_from(adjusted.max(1)).unwrap_or(1);
        }
    }

    /// Remove an entry entirely. No-op when absent.
    pub fn remove(&mut self, offer: &OfferId) {
        self.entries.retain(|entry| entry.offer != *offer);
    }

    /// Toggle an offer: remove it when present, otherwise select it with the
    /// offer's default size. Bound to a card's primary click target; the
    /// embedded size buttons call [`Cart::select`] directly instead.
    pub fn toggle(&mut self, offer: &Offer) {
        if self.get(&offer.id).is_some() {
            self.remove(&offer.id);
        } else {
            self.entries.push(CartEntry {
                offer: offer.id.clone(),
                size: offer.default_size(),
                quantity: 1,
            });
        }
    }

    /// Drop every entry. Called after a confirmed submission.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Get the entry for an offer, if selected.
    #[must_use]
    pub fn get(&self, offer: &OfferId) -> Option<&CartEntry> {
        self.entries.iter().find(|entry| entry.offer == *offer)
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CartEntry> {
        self.entries.iter()
    }

    /// Number of distinct selected offers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry_mut(&mut self, offer: &OfferId) -> Option<&mut CartEntry> {
        self.entries.iter_mut().find(|entry| entry.offer == *offer)
    }
}

#[cfg(test)]
mod tests {
    use smallvec::smallvec;
    use testresult::TestResult;

    use crate::prices::Price;

    use super::*;

    fn catalog() -> Catalog {
        let offers = vec![
            Offer {
                id: OfferId::new("pack-6"),
                name: "6-Piece Combo Pack".to_string(),
                price: Price::new(1750),
                is_pack: true,
                sizes: smallvec![Size::M, Size::L, Size::XL],
                image: "/products/pack-6.png".to_string(),
                color: None,
                description: String::new(),
            },
            Offer {
                id: OfferId::new("single-black"),
                name: "Black Drop-Shoulder Tee".to_string(),
                price: Price::new(350),
                is_pack: false,
                sizes: smallvec![Size::M, Size::L, Size::XL],
                image: "/products/single-black.png".to_string(),
                color: Some("Black".to_string()),
                description: String::new(),
            },
        ];

        Catalog::new(offers).expect("test catalog should be valid")
    }

    #[test]
    fn select_creates_entry_at_quantity_one() -> TestResult {
        let catalog = catalog();
        let mut cart = Cart::new();

        cart.select(&catalog, &OfferId::new("pack-6"), Size::L)?;

        let entry = cart.get(&OfferId::new("pack-6")).ok_or("entry missing")?;

        assert_eq!(entry.size, Size::L);
        assert_eq!(entry.quantity, 1);

        Ok(())
    }

    #[test]
    fn select_on_existing_entry_updates_size_only() -> TestResult {
        let catalog = catalog();
        let mut cart = Cart::new();
        let id = OfferId::new("single-black");

        cart.select(&catalog, &id, Size::M)?;
        cart.change_quantity(&id, 4);
        cart.select(&catalog, &id, Size::XL)?;

        let entry = cart.get(&id).ok_or("entry missing")?;

        assert_eq!(entry.size, Size::XL);
        assert_eq!(entry.quantity, 5);

        Ok(())
    }

    #[test]
    fn select_rejects_unknown_offer() {
        let catalog = catalog();
        let mut cart = Cart::new();

        let result = cart.select(&catalog, &OfferId::new("missing"), Size::M);

        assert_eq!(result, Err(CartError::UnknownOffer(OfferId::new("missing"))));
        assert!(cart.is_empty());
    }

    #[test]
    fn quantity_never_falls_below_one() -> TestResult {
        let catalog = catalog();
        let mut cart = Cart::new();
        let id = OfferId::new("single-black");

        cart.select(&catalog, &id, Size::M)?;

        for delta in [-1, -100, 3, -2, -50, 1] {
            cart.change_quantity(&id, delta);
            let quantity = cart.get(&id).ok_or("entry missing")?.quantity;
            assert!(quantity >= 1, "quantity {quantity} fell below 1");
        }

        Ok(())
    }

    #[test]
    fn change_quantity_on_absent_offer_is_noop() {
        let mut cart = Cart::new();

        cart.change_quantity(&OfferId::new("pack-6"), 5);

        assert!(cart.is_empty());
    }

    #[test]
    fn remove_deletes_entry_entirely() -> TestResult {
        let catalog = catalog();
        let mut cart = Cart::new();
        let id = OfferId::new("pack-6");

        cart.select(&catalog, &id, Size::M)?;
        cart.remove(&id);

        assert!(cart.get(&id).is_none());
        assert!(cart.is_empty());

        // Removing again is a no-op.
        cart.remove(&id);

        Ok(())
    }

    #[test]
    fn toggle_adds_with_default_size_then_removes() -> TestResult {
        let catalog = catalog();
        let offer = catalog.get(&OfferId::new("pack-6")).ok_or("offer missing")?;
        let mut cart = Cart::new();

        cart.toggle(offer);

        let entry = cart.get(&offer.id).ok_or("entry missing")?;

        assert_eq!(entry.size, Size::M);
        assert_eq!(entry.quantity, 1);

        cart.toggle(offer);

        assert!(cart.is_empty());

        Ok(())
    }

    #[test]
    fn toggle_twice_restores_prior_state() -> TestResult {
        let catalog = catalog();
        let pack = catalog.get(&OfferId::new("pack-6")).ok_or("offer missing")?;
        let single = catalog.get(&OfferId::new("single-black")).ok_or("offer missing")?;

        let mut cart = Cart::new();
        cart.select(&catalog, &single.id, Size::L)?;

        let before = cart.clone();

        cart.toggle(pack);
        cart.toggle(pack);

        assert_eq!(cart, before);

        Ok(())
    }

    #[test]
    fn entries_keep_insertion_order() -> TestResult {
        let catalog = catalog();
        let mut cart = Cart::new();

        cart.select(&catalog, &OfferId::new("single-black"), Size::M)?;
        cart.select(&catalog, &OfferId::new("pack-6"), Size::M)?;

        let order: Vec<&str> = cart.iter().map(|entry| entry.offer.as_str()).collect();

        assert_eq!(order, ["single-black", "pack-6"]);

        Ok(())
    }

    #[test]
    fn clear_empties_the_cart() -> TestResult {
        let catalog = catalog();
        let mut cart = Cart::with_default_selection(&catalog, &OfferId::new("pack-6"), Size::M)?;

        cart.clear();

        assert!(cart.is_empty());

        Ok(())
    }
}
