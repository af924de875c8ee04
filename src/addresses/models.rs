//! Address models.

use serde::{Deserialize, Serialize};

use crate::uuids::AddressUuid;

/// What kind of place an address points at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressKind {
    #[default]
    Home,
    Work,
    Other,
}

/// A saved delivery address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Identifier, generated client-side.
    pub uuid: AddressUuid,

    /// Label, e.g. the recipient's name.
    pub name: String,

    /// Contact phone number.
    pub phone: String,

    /// Street line.
    #[serde(rename = "address")]
    pub street: String,

    /// City.
    pub city: String,

    /// State.
    pub state: String,

    /// Postal code.
    pub pincode: String,

    /// Home / work / other.
    #[serde(rename = "type")]
    pub kind: AddressKind,

    /// Whether this is the default delivery address. Exactly one address in a
    /// non-empty book carries this flag.
    pub is_default: bool,
}

impl Address {
    pub(crate) fn new(new: NewAddress, is_default: bool) -> Self {
        Self {
            uuid: AddressUuid::now_v7(),
            name: new.name,
            phone: new.phone,
            street: new.street,
            city: new.city,
            state: new.state,
            pincode: new.pincode,
            kind: new.kind,
            is_default,
        }
    }
}

/// Details for an address about to be saved.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAddress {
    pub name: String,
    pub phone: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub kind: AddressKind,
    /// Request this address to become the default.
    pub is_default: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_serializes_with_backend_field_names() {
        let address = Address::new(
            NewAddress {
                name: "Home".to_string(),
                phone: "9999".to_string(),
                street: "123 Main Street".to_string(),
                city: "City".to_string(),
                state: "State".to_string(),
                pincode: "12345".to_string(),
                kind: AddressKind::Home,
                is_default: true,
            },
            true,
        );

        let json = serde_json::to_value(&address).expect("serialize");

        assert_eq!(json["address"], "123 Main Street");
        assert_eq!(json["type"], "home");
        assert_eq!(json["isDefault"], true);
    }
}
