//! Order models.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{
    addresses::Address,
    cart::{CartLine, Customizations},
    catalog::Product,
    uuids::OrderUuid,
};

/// Payment method chosen at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Cash on delivery.
    Cash,
    /// Card on delivery.
    Card,
    /// UPI transfer.
    Upi,
}

/// Lifecycle of a placed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Accepted, not yet in the kitchen.
    Placed,
    /// Being prepared.
    Preparing,
    /// With the courier.
    OutForDelivery,
    /// Done.
    Delivered,
    /// Cancelled by either side.
    Cancelled,
}

/// Immutable snapshot of one cart line at the moment of placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    /// The product as it was priced at placement.
    pub product: Product,

    /// Ordered quantity.
    pub quantity: u32,

    /// Selected add-ons.
    pub customizations: Customizations,

    /// Line total at placement, in minor units.
    pub line_total: u64,
}

impl From<&CartLine> for OrderLine {
    fn from(line: &CartLine) -> Self {
        Self {
            product: line.product().clone(),
            quantity: line.quantity(),
            customizations: line.customizations().clone(),
            line_total: line.line_total(),
        }
    }
}

/// An immutable order record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    uuid: OrderUuid,
    placed_at: Timestamp,
    lines: Vec<OrderLine>,
    subtotal: u64,
    delivery_charges: u64,
    total: u64,
    address: Address,
    payment: PaymentMethod,
    status: OrderStatus,
}

impl Order {
    pub(crate) fn new(
        lines: Vec<OrderLine>,
        subtotal: u64,
        delivery_charges: u64,
        address: Address,
        payment: PaymentMethod,
    ) -> Self {
        Self {
            uuid: OrderUuid::now_v7(),
            placed_at: Timestamp::now(),
            lines,
            subtotal,
            delivery_charges,
            total: subtotal + delivery_charges,
            address,
            payment,
            status: OrderStatus::Placed,
        }
    }

    #[must_use]
    pub fn uuid(&self) -> OrderUuid {
        self.uuid
    }

    #[must_use]
    pub fn placed_at(&self) -> Timestamp {
        self.placed_at
    }

    /// The item snapshot taken at placement.
    #[must_use]
    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    /// Sum of line totals at placement, in minor units.
    #[must_use]
    pub fn subtotal(&self) -> u64 {
        self.subtotal
    }

    #[must_use]
    pub fn delivery_charges(&self) -> u64 {
        self.delivery_charges
    }

    /// Subtotal plus delivery charges.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// The delivery address snapshot taken at placement.
    #[must_use]
    pub fn address(&self) -> &Address {
        &self.address
    }

    #[must_use]
    pub fn payment(&self) -> PaymentMethod {
        self.payment
    }

    #[must_use]
    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Update the status from the tracking endpoint.
    pub(crate) fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
    }
}
