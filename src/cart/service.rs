//! Remote cart sync service.

use async_trait::async_trait;
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::{
    api::{ApiClient, ApiError, endpoints},
    cart::{CartServiceError, Customizations},
    catalog::{AddOn, Product},
};

/// The wire shape of an add-on selection: at most one pick per category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectedAddons {
    /// Chosen dip.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dip: Option<AddOn>,

    /// Chosen beverage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beverage: Option<AddOn>,

    /// Chosen drink.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drink: Option<AddOn>,
}

impl From<SelectedAddons> for Customizations {
    fn from(addons: SelectedAddons) -> Self {
        Self {
            dips: addons.dip.into_iter().collect(),
            beverages: addons.beverage.into_iter().collect(),
            drinks: addons.drink.into_iter().collect(),
        }
    }
}

/// One item of a remote cart snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotItem {
    /// Backend id of the cart item, required to remove it remotely.
    #[serde(default, rename = "_id", skip_serializing_if = "Option::is_none")]
    pub remote_id: Option<String>,

    /// The product this item refers to.
    pub product: Product,

    /// Quantity, defaulting to one when absent.
    #[serde(default = "default_quantity")]
    pub quantity: u32,

    /// Selected add-ons.
    #[serde(default)]
    pub customizations: Customizations,
}

fn default_quantity() -> u32 {
    1
}

/// The backend's view of the user's cart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshot {
    /// Cart items.
    #[serde(default)]
    pub items: Vec<SnapshotItem>,

    /// Backend-computed grand total, in minor units.
    #[serde(default)]
    pub grand_total: u64,

    /// Delivery charges, in minor units.
    #[serde(default)]
    pub delivery_charges: u64,

    /// Backend cart id.
    #[serde(default, rename = "_id")]
    pub id: Option<String>,
}

#[derive(Debug, Serialize)]
struct AddItemRequest<'a> {
    #[serde(rename = "foodId")]
    food_id: &'a str,
    qty: u32,
    #[serde(rename = "selectedAddons")]
    selected_addons: &'a SelectedAddons,
}

#[derive(Debug, Serialize)]
struct UpdateQtyRequest<'a> {
    #[serde(rename = "foodId")]
    food_id: &'a str,
    qty: u32,
}

#[derive(Debug, Serialize)]
struct UpdateAddonsRequest<'a> {
    #[serde(rename = "foodId")]
    food_id: &'a str,
    #[serde(rename = "selectedAddons")]
    selected_addons: &'a SelectedAddons,
}

#[automock]
#[async_trait]
pub trait CartService: Send + Sync {
    /// Fetch the authenticated user's cart.
    async fn fetch_cart(&self) -> Result<CartSnapshot, CartServiceError>;

    /// Add an item to the remote cart.
    async fn add_item(
        &self,
        food_id: &str,
        quantity: u32,
        addons: &SelectedAddons,
    ) -> Result<(), CartServiceError>;

    /// Change the quantity of a remote cart item.
    async fn update_quantity(&self, food_id: &str, quantity: u32) -> Result<(), CartServiceError>;

    /// Replace the add-on selection of a remote cart item.
    async fn update_addons(
        &self,
        food_id: &str,
        addons: &SelectedAddons,
    ) -> Result<(), CartServiceError>;

    /// Remove a single item from the remote cart.
    async fn remove_item(&self, item_id: &str) -> Result<(), CartServiceError>;

    /// Empty the remote cart.
    async fn clear(&self) -> Result<(), CartServiceError>;
}

/// [`CartService`] over the REST backend.
#[derive(Debug, Clone)]
pub struct HttpCartService {
    client: ApiClient,
}

impl HttpCartService {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CartService for HttpCartService {
    async fn fetch_cart(&self) -> Result<CartSnapshot, CartServiceError> {
        let body = self.client.get(endpoints::GET_CART, &[]).await?;

        Ok(body.decode().map_err(ApiError::from)?)
    }

    async fn add_item(
        &self,
        food_id: &str,
        quantity: u32,
        addons: &SelectedAddons,
    ) -> Result<(), CartServiceError> {
        self.client
            .post(
                endpoints::ADD_TO_CART,
                &AddItemRequest {
                    food_id,
                    qty: quantity,
                    selected_addons: addons,
                },
            )
            .await?;

        Ok(())
    }

    async fn update_quantity(&self, food_id: &str, quantity: u32) -> Result<(), CartServiceError> {
        self.client
            .post(
                endpoints::UPDATE_CART_QTY,
                &UpdateQtyRequest {
                    food_id,
                    qty: quantity,
                },
            )
            .await?;

        Ok(())
    }

    async fn update_addons(
        &self,
        food_id: &str,
        addons: &SelectedAddons,
    ) -> Result<(), CartServiceError> {
        self.client
            .post(
                endpoints::UPDATE_CART_ADDONS,
                &UpdateAddonsRequest {
                    food_id,
                    selected_addons: addons,
                },
            )
            .await?;

        Ok(())
    }

    async fn remove_item(&self, item_id: &str) -> Result<(), CartServiceError> {
        self.client
            .delete(&endpoints::remove_cart_item(item_id))
            .await?;

        Ok(())
    }

    async fn clear(&self) -> Result<(), CartServiceError> {
        self.client
            .post(endpoints::CLEAR_CART, &serde_json::json!({}))
            .await?;

        Ok(())
    }
}
