//! Delivery address management.

mod errors;
mod models;
mod service;

pub use errors::{AddressBookError, AddressesServiceError};
pub use models::{Address, AddressKind, NewAddress};
pub use service::{AddressesService, HttpAddressesService, MockAddressesService};

use crate::uuids::AddressUuid;

/// The user's saved addresses.
///
/// A non-empty book always has exactly one default address: the first address
/// added becomes the default automatically, marking another address as
/// default clears the flag everywhere else, and deleting the default promotes
/// the first remaining address.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressBook {
    addresses: Vec<Address>,
}

impl AddressBook {
    /// Create an empty book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Save a new address and return its id.
    pub fn add(&mut self, new: NewAddress) -> AddressUuid {
        let make_default = self.addresses.is_empty() || new.is_default;

        if make_default {
            for address in &mut self.addresses {
                address.is_default = false;
            }
        }

        let address = Address::new(new, make_default);
        let uuid = address.uuid;
        self.addresses.push(address);

        uuid
    }

    /// Mark the given address as the only default.
    ///
    /// # Errors
    ///
    /// Returns [`AddressBookError::NotFound`] when no such address exists.
    pub fn set_default(&mut self, uuid: AddressUuid) -> Result<(), AddressBookError> {
        if !self.addresses.iter().any(|address| address.uuid == uuid) {
            return Err(AddressBookError::NotFound(uuid));
        }

        for address in &mut self.addresses {
            address.is_default = address.uuid == uuid;
        }

        Ok(())
    }

    /// Delete an address. When the default is deleted and others remain, the
    /// first remaining address becomes the default.
    ///
    /// # Errors
    ///
    /// Returns [`AddressBookError::NotFound`] when no such address exists.
    pub fn remove(&mut self, uuid: AddressUuid) -> Result<Address, AddressBookError> {
        let index = self
            .addresses
            .iter()
            .position(|address| address.uuid == uuid)
            .ok_or(AddressBookError::NotFound(uuid))?;

        let removed = self.addresses.remove(index);

        if removed.is_default
            && let Some(first) = self.addresses.first_mut()
        {
            first.is_default = true;
        }

        Ok(removed)
    }

    /// Replace the whole book, e.g. from a backend fetch.
    pub fn replace(&mut self, addresses: Vec<Address>) {
        self.addresses = addresses;
    }

    /// The current default address.
    #[must_use]
    pub fn default_address(&self) -> Option<&Address> {
        self.addresses.iter().find(|address| address.is_default)
    }

    /// Look up an address by id.
    #[must_use]
    pub fn get(&self, uuid: AddressUuid) -> Option<&Address> {
        self.addresses.iter().find(|address| address.uuid == uuid)
    }

    /// Saved addresses, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Address> {
        self.addresses.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }
}
