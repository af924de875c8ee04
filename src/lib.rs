//! Tiffin
//!
//! Tiffin is the client-side core of a food-ordering storefront: the cart,
//! order history, address book and session state a mobile UI drives, plus
//! typed clients for the REST backend behind it.

pub mod addresses;
pub mod api;
pub mod auth;
pub mod cart;
pub mod catalog;
pub mod location;
pub mod orders;
pub mod storefront;

#[cfg(test)]
mod test;

mod uuids;

pub use uuids::{AddressUuid, LineUuid, OrderUuid, TypedUuid};
