//! Remote addresses service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    addresses::{Address, AddressesServiceError},
    api::{ApiClient, ApiError, endpoints},
    uuids::AddressUuid,
};

#[automock]
#[async_trait]
pub trait AddressesService: Send + Sync {
    /// Fetch all saved addresses.
    async fn list_addresses(&self) -> Result<Vec<Address>, AddressesServiceError>;

    /// Save a new address.
    async fn create_address(&self, address: &Address) -> Result<(), AddressesServiceError>;

    /// Replace a saved address.
    async fn update_address(&self, address: &Address) -> Result<(), AddressesServiceError>;

    /// Delete a saved address.
    async fn delete_address(&self, address: AddressUuid) -> Result<(), AddressesServiceError>;
}

/// [`AddressesService`] over the REST backend.
#[derive(Debug, Clone)]
pub struct HttpAddressesService {
    client: ApiClient,
}

impl HttpAddressesService {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AddressesService for HttpAddressesService {
    async fn list_addresses(&self) -> Result<Vec<Address>, AddressesServiceError> {
        let body = self.client.get(endpoints::ADDRESSES, &[]).await?;

        Ok(body.decode().map_err(ApiError::from)?)
    }

    async fn create_address(&self, address: &Address) -> Result<(), AddressesServiceError> {
        self.client.post(endpoints::ADDRESSES, address).await?;

        Ok(())
    }

    async fn update_address(&self, address: &Address) -> Result<(), AddressesServiceError> {
        self.client
            .put(
                &endpoints::address_detail(&address.uuid.to_string()),
                address,
            )
            .await?;

        Ok(())
    }

    async fn delete_address(&self, address: AddressUuid) -> Result<(), AddressesServiceError> {
        self.client
            .delete(&endpoints::address_detail(&address.to_string()))
            .await?;

        Ok(())
    }
}
