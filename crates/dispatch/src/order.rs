use core::str::FromStr;

use serde::{Deserialize, Serialize};

use orderdesk_core::{DomainError, Entity, OrderId};

/// Unvalidated order fields, as handed to the store on insert.
///
/// `item_count` is signed so that a caller-supplied `0` or `-3` reaches the
/// store and is rejected there with a validation error instead of being
/// unrepresentable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub order_id: OrderId,
    pub restaurant_name: String,
    pub item_count: i64,
    pub is_paid: bool,
    /// Kilometers.
    pub delivery_distance: f64,
}

impl NewOrder {
    pub fn new(
        order_id: impl Into<OrderId>,
        restaurant_name: impl Into<String>,
        item_count: i64,
        is_paid: bool,
        delivery_distance: f64,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            restaurant_name: restaurant_name.into(),
            item_count,
            is_paid,
            delivery_distance,
        }
    }
}

/// A delivery order held by the store.
///
/// Only the store creates these (after validation), and no field changes
/// after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    order_id: OrderId,
    restaurant_name: String,
    item_count: u32,
    is_paid: bool,
    delivery_distance: f64,
}

impl Order {
    pub(crate) fn from_validated(new: &NewOrder, item_count: u32) -> Self {
        Self {
            order_id: new.order_id.clone(),
            restaurant_name: new.restaurant_name.clone(),
            item_count,
            is_paid: new.is_paid,
            // `-0.0 + 0.0` is `+0.0`, so a typed "-0" never displays with a sign.
            delivery_distance: new.delivery_distance + 0.0,
        }
    }

    pub fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    pub fn restaurant_name(&self) -> &str {
        &self.restaurant_name
    }

    pub fn item_count(&self) -> u32 {
        self.item_count
    }

    pub fn is_paid(&self) -> bool {
        self.is_paid
    }

    /// Kilometers.
    pub fn delivery_distance(&self) -> f64 {
        self.delivery_distance
    }

    /// Inclusive distance check against a ceiling. A NaN ceiling admits nothing.
    pub fn is_within(&self, distance_ceiling: f64) -> bool {
        self.delivery_distance <= distance_ceiling
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.order_id
    }
}

/// Payment-status filter for the order table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Paid,
    Unpaid,
}

impl StatusFilter {
    pub fn matches(self, order: &Order) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Paid => order.is_paid(),
            StatusFilter::Unpaid => !order.is_paid(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Paid => "paid",
            StatusFilter::Unpaid => "unpaid",
        }
    }
}

impl core::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "paid" => Ok(StatusFilter::Paid),
            "unpaid" => Ok(StatusFilter::Unpaid),
            other => Err(DomainError::validation(format!(
                "unknown status filter `{other}` (expected all, paid or unpaid)"
            ))),
        }
    }
}

/// Aggregate counts shown next to the order table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderStats {
    pub total: usize,
    pub paid: usize,
    pub unpaid: usize,
}
