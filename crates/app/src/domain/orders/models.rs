//! Order Models

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{domain::products::models::ProductUuid, uuids::TypedUuid};

/// Order UUID
pub type OrderUuid = TypedUuid<Order>;

/// Order Item UUID
pub type OrderItemUuid = TypedUuid<OrderItem>;

/// Order fulfilment status.
///
/// New orders start as `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Processing => "PROCESSING",
            Self::Shipped => "SHIPPED",
            Self::Delivered => "DELIVERED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown order status: {0}")]
pub struct UnknownOrderStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownOrderStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(Self::Pending),
            "PROCESSING" => Ok(Self::Processing),
            "SHIPPED" => Ok(Self::Shipped),
            "DELIVERED" => Ok(Self::Delivered),
            "CANCELLED" => Ok(Self::Cancelled),
            other => Err(UnknownOrderStatus(other.to_string())),
        }
    }
}

/// Payment method chosen at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    CreditCard,
    DebitCard,
    Paypal,
    CashOnDelivery,
    BankTransfer,
}

impl PaymentMethod {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreditCard => "CREDIT_CARD",
            Self::DebitCard => "DEBIT_CARD",
            Self::Paypal => "PAYPAL",
            Self::CashOnDelivery => "CASH_ON_DELIVERY",
            Self::BankTransfer => "BANK_TRANSFER",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown payment method: {0}")]
pub struct UnknownPaymentMethod(pub String);

impl FromStr for PaymentMethod {
    type Err = UnknownPaymentMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CREDIT_CARD" => Ok(Self::CreditCard),
            "DEBIT_CARD" => Ok(Self::DebitCard),
            "PAYPAL" => Ok(Self::Paypal),
            "CASH_ON_DELIVERY" => Ok(Self::CashOnDelivery),
            "BANK_TRANSFER" => Ok(Self::BankTransfer),
            other => Err(UnknownPaymentMethod(other.to_string())),
        }
    }
}

/// Where an order ships to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShippingAddress {
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

impl ShippingAddress {
    #[must_use]
    pub fn has_blank_field(&self) -> bool {
        [
            &self.address,
            &self.city,
            &self.state,
            &self.postal_code,
            &self.country,
        ]
        .iter()
        .any(|field| field.trim().is_empty())
    }
}

/// Order Model
///
/// List operations return orders without their item lines; `items` is only
/// populated when a single order is fetched.
#[derive(Debug, Clone)]
pub struct Order {
    pub uuid: OrderUuid,
    pub customer_name: String,
    pub customer_email: String,
    pub contact_number: String,
    pub shipping: ShippingAddress,
    pub status: OrderStatus,
    pub payment_method: PaymentMethod,
    /// Total in minor units (cents).
    pub total: u64,
    pub items: Vec<OrderItem>,
    pub ordered_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Order Item Model
#[derive(Debug, Clone)]
pub struct OrderItem {
    pub uuid: OrderItemUuid,
    pub order_uuid: OrderUuid,
    pub product_uuid: ProductUuid,
    pub quantity: u32,
    /// Price charged per unit when the order was placed.
    pub unit_price: u64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// New Order Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub customer_name: String,
    pub customer_email: String,
    pub contact_number: String,
    pub shipping: ShippingAddress,
    pub payment_method: PaymentMethod,
    pub items: Vec<NewOrderItem>,
}

/// New Order Item Model
///
/// When `unit_price` is absent, the product's current price is captured at
/// placement time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewOrderItem {
    pub product_uuid: ProductUuid,
    pub quantity: u32,
    pub unit_price: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_status_round_trips_through_strings() {
        let statuses = [
            OrderStatus::Pending,
            OrderStatus::Processing,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ];

        for status in statuses {
            assert_eq!(status.as_str().parse::<OrderStatus>(), Ok(status));
        }
    }

    #[test]
    fn unknown_order_status_is_rejected() {
        let result = "MISPLACED".parse::<OrderStatus>();

        assert_eq!(result, Err(UnknownOrderStatus("MISPLACED".to_string())));
    }

    #[test]
    fn payment_method_round_trips_through_strings() {
        let methods = [
            PaymentMethod::CreditCard,
            PaymentMethod::DebitCard,
            PaymentMethod::Paypal,
            PaymentMethod::CashOnDelivery,
            PaymentMethod::BankTransfer,
        ];

        for method in methods {
            assert_eq!(method.as_str().parse::<PaymentMethod>(), Ok(method));
        }
    }
}
