//! Cart

mod errors;
mod key;
mod models;
mod service;

pub use errors::{CartError, CartServiceError};
pub use key::CustomizationKey;
pub use models::{CartLine, Customizations};
pub use service::{
    CartService, CartSnapshot, HttpCartService, MockCartService, SelectedAddons, SnapshotItem,
};

use crate::{catalog::Product, uuids::LineUuid};

/// An ordered collection of cart lines.
///
/// Additions of the same product with the same customization selection merge
/// into one line; everything else appends. Merging two additions of the same
/// (product, customization-set) pair is equivalent, in total price and total
/// quantity, to adding their quantities once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` of `product` with the given customizations.
    ///
    /// Returns the id of the line that now holds the addition: the existing
    /// line when the (product, customization-set) pair is already in the
    /// cart, a freshly appended one otherwise. Quantity is clamped to a
    /// minimum of one.
    pub fn add(
        &mut self,
        product: Product,
        quantity: u32,
        customizations: Customizations,
    ) -> LineUuid {
        let key = customizations.key();

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product().id == product.id && line.customizations().key() == key)
        {
            line.merge_quantity(quantity);
            return line.uuid();
        }

        let line = CartLine::new(product, quantity, customizations);
        let uuid = line.uuid();
        self.lines.push(line);
        uuid
    }

    /// Remove the line with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::LineNotFound`] when no such line exists.
    pub fn remove_line(&mut self, uuid: LineUuid) -> Result<CartLine, CartError> {
        let index = self
            .lines
            .iter()
            .position(|line| line.uuid() == uuid)
            .ok_or(CartError::LineNotFound(uuid))?;

        Ok(self.lines.remove(index))
    }

    /// Set the quantity of a line, clamped to a minimum of one.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::LineNotFound`] when no such line exists.
    pub fn set_quantity(&mut self, uuid: LineUuid, quantity: u32) -> Result<(), CartError> {
        let line = self
            .lines
            .iter_mut()
            .find(|line| line.uuid() == uuid)
            .ok_or(CartError::LineNotFound(uuid))?;

        line.set_quantity(quantity);

        Ok(())
    }

    /// Replace the add-on selection of a line. The line keeps its id even
    /// when the new selection matches another line's.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::LineNotFound`] when no such line exists.
    pub fn set_customizations(
        &mut self,
        uuid: LineUuid,
        customizations: Customizations,
    ) -> Result<(), CartError> {
        let line = self
            .lines
            .iter_mut()
            .find(|line| line.uuid() == uuid)
            .ok_or(CartError::LineNotFound(uuid))?;

        line.set_customizations(customizations);

        Ok(())
    }

    pub(crate) fn set_remote_id(&mut self, uuid: LineUuid, remote_id: Option<String>) {
        if let Some(line) = self.lines.iter_mut().find(|line| line.uuid() == uuid) {
            line.set_remote_id(remote_id);
        }
    }

    /// Reset to an empty cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of all line totals, in minor units. Zero for an empty cart.
    #[must_use]
    pub fn subtotal(&self) -> u64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Sum of all line quantities.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(CartLine::quantity).sum()
    }

    /// The lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Look up a line by id.
    #[must_use]
    pub fn line(&self, uuid: LineUuid) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.uuid() == uuid)
    }

    /// Number of lines (not quantities) in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
