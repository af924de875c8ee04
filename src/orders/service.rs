//! Remote orders service.

use async_trait::async_trait;
use mockall::automock;
use serde::Deserialize;

use crate::{
    api::{ApiClient, ApiError, endpoints},
    orders::{Order, OrderStatus, OrdersServiceError},
    uuids::OrderUuid,
};

#[derive(Debug, Deserialize)]
struct TrackOrderResponse {
    status: OrderStatus,
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Fetch the user's order history from the backend.
    async fn list_orders(&self) -> Result<Vec<Order>, OrdersServiceError>;

    /// Fetch a single order.
    async fn get_order(&self, order: OrderUuid) -> Result<Order, OrdersServiceError>;

    /// Submit a placed order to the backend.
    async fn create_order(&self, order: &Order) -> Result<(), OrdersServiceError>;

    /// Fetch the live status of an order.
    async fn track_order(&self, order: OrderUuid) -> Result<OrderStatus, OrdersServiceError>;
}

/// [`OrdersService`] over the REST backend.
#[derive(Debug, Clone)]
pub struct HttpOrdersService {
    client: ApiClient,
}

impl HttpOrdersService {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl OrdersService for HttpOrdersService {
    async fn list_orders(&self) -> Result<Vec<Order>, OrdersServiceError> {
        let body = self.client.get(endpoints::ORDERS, &[]).await?;

        Ok(body.decode().map_err(ApiError::from)?)
    }

    async fn get_order(&self, order: OrderUuid) -> Result<Order, OrdersServiceError> {
        let body = self
            .client
            .get(&endpoints::order_detail(&order.to_string()), &[])
            .await?;

        Ok(body.decode().map_err(ApiError::from)?)
    }

    async fn create_order(&self, order: &Order) -> Result<(), OrdersServiceError> {
        self.client.post(endpoints::CREATE_ORDER, order).await?;

        Ok(())
    }

    async fn track_order(&self, order: OrderUuid) -> Result<OrderStatus, OrdersServiceError> {
        let body = self
            .client
            .get(&endpoints::track_order(&order.to_string()), &[])
            .await?;

        let response: TrackOrderResponse = body.decode().map_err(ApiError::from)?;

        Ok(response.status)
    }
}
