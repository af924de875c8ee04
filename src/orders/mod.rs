//! Order placement and history.

mod errors;
mod models;
mod service;

pub use errors::{OrderError, OrdersServiceError};
pub use models::{Order, OrderLine, OrderStatus, PaymentMethod};
pub use service::{HttpOrdersService, MockOrdersService, OrdersService};

use crate::{addresses::Address, cart::Cart, uuids::OrderUuid};

/// Take an immutable snapshot of the cart as a new order and empty the cart.
///
/// The order gets a fresh timestamp-ordered id, the line and address
/// snapshots, and a total of cart subtotal plus `delivery_charges`. The cart
/// is only cleared once the snapshot has been taken; an empty cart is
/// rejected before any state changes.
///
/// # Errors
///
/// Returns [`OrderError::EmptyCart`] when the cart has no lines.
pub fn place_order(
    cart: &mut Cart,
    address: Address,
    payment: PaymentMethod,
    delivery_charges: u64,
) -> Result<Order, OrderError> {
    if cart.is_empty() {
        return Err(OrderError::EmptyCart);
    }

    let lines = cart.lines().iter().map(OrderLine::from).collect();
    let subtotal = cart.subtotal();

    let order = Order::new(lines, subtotal, delivery_charges, address, payment);

    cart.clear();

    Ok(order)
}

/// Newest-first collection of placed orders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderHistory {
    orders: Vec<Order>,
}

impl OrderHistory {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a freshly placed order.
    pub fn record(&mut self, order: Order) {
        self.orders.insert(0, order);
    }

    /// The most recently placed order.
    #[must_use]
    pub fn latest(&self) -> Option<&Order> {
        self.orders.first()
    }

    /// Look up an order by id.
    #[must_use]
    pub fn get(&self, uuid: OrderUuid) -> Option<&Order> {
        self.orders.iter().find(|order| order.uuid() == uuid)
    }

    /// Update the status of a tracked order. Unknown ids are ignored.
    pub fn set_status(&mut self, uuid: OrderUuid, status: OrderStatus) {
        if let Some(order) = self.orders.iter_mut().find(|order| order.uuid() == uuid) {
            order.set_status(status);
        }
    }

    /// Orders, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Drop all recorded orders.
    pub fn clear(&mut self) {
        self.orders.clear();
    }
}
