//! Cart models.

use serde::{Deserialize, Serialize};

use crate::{
    cart::CustomizationKey,
    catalog::{AddOn, Product},
    uuids::LineUuid,
};

/// Add-on selections attached to a cart line, grouped by category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Customizations {
    /// Selected dips.
    #[serde(default)]
    pub dips: Vec<AddOn>,

    /// Selected beverages.
    #[serde(default)]
    pub beverages: Vec<AddOn>,

    /// Selected drinks.
    #[serde(default)]
    pub drinks: Vec<AddOn>,
}

impl Customizations {
    /// The order-independent identity of this selection.
    #[must_use]
    pub fn key(&self) -> CustomizationKey {
        CustomizationKey::of(self)
    }

    /// Sum of all selected add-on prices, in minor units.
    #[must_use]
    pub fn price(&self) -> u64 {
        self.dips
            .iter()
            .chain(&self.beverages)
            .chain(&self.drinks)
            .map(|addon| addon.price)
            .sum()
    }

    /// Whether no add-on is selected in any category.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dips.is_empty() && self.beverages.is_empty() && self.drinks.is_empty()
    }
}

/// One entry in the cart: a product, a quantity, and the add-on selection the
/// line is keyed by.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    uuid: LineUuid,
    #[serde(default)]
    remote_id: Option<String>,
    product: Product,
    quantity: u32,
    customizations: Customizations,
}

impl CartLine {
    pub(crate) fn new(product: Product, quantity: u32, customizations: Customizations) -> Self {
        Self {
            uuid: LineUuid::now_v7(),
            remote_id: None,
            product,
            quantity: quantity.max(1),
            customizations,
        }
    }

    #[must_use]
    pub fn uuid(&self) -> LineUuid {
        self.uuid
    }

    /// Backend id of the cart item this line mirrors, when known.
    #[must_use]
    pub fn remote_id(&self) -> Option<&str> {
        self.remote_id.as_deref()
    }

    #[must_use]
    pub fn product(&self) -> &Product {
        &self.product
    }

    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    #[must_use]
    pub fn customizations(&self) -> &Customizations {
        &self.customizations
    }

    /// Base product price plus all selected add-on prices, in minor units.
    #[must_use]
    pub fn unit_price(&self) -> u64 {
        self.product.price + self.customizations.price()
    }

    /// Unit price multiplied by quantity.
    #[must_use]
    pub fn line_total(&self) -> u64 {
        self.unit_price() * u64::from(self.quantity)
    }

    pub(crate) fn merge_quantity(&mut self, extra: u32) {
        self.quantity += extra.max(1);
    }

    pub(crate) fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity.max(1);
    }

    pub(crate) fn set_remote_id(&mut self, remote_id: Option<String>) {
        self.remote_id = remote_id;
    }

    pub(crate) fn set_customizations(&mut self, customizations: Customizations) {
        self.customizations = customizations;
    }
}
