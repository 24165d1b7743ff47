//! Result messages shown after each user action.

use serde::Serialize;

use orderdesk_core::DomainError;
use orderdesk_dispatch::Order;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

/// One message for the output panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn welcome() -> Self {
        Self::info("Welcome! Add a new order to get started.")
    }

    pub fn order_added(order: &Order) -> Self {
        Self::success(format!(
            "✓ Order {} added successfully\nRestaurant: {}\nDistance: {} km",
            order.order_id(),
            order.restaurant_name(),
            order.delivery_distance()
        ))
    }

    pub fn order_deleted(order: &Order) -> Self {
        Self::success(format!("✓ Order {} deleted successfully", order.order_id()))
    }

    pub fn delivery_assigned(order: &Order) -> Self {
        Self::success(format!(
            "✓ Delivery Assigned\n\nOrder ID: {}\nRestaurant: {}\nDistance: {} km\nItems: {}\nStatus: Unpaid",
            order.order_id(),
            order.restaurant_name(),
            order.delivery_distance(),
            order.item_count()
        ))
    }

    pub fn no_order_available() -> Self {
        Self::error("No order available")
    }

    pub fn rejected(err: &DomainError) -> Self {
        Self::error(format!("Error: {}", err.reason()))
    }
}

impl core::fmt::Display for Notice {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}
