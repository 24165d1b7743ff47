//! Coercion of raw entry fields into a `NewOrder`.

use serde::{Deserialize, Serialize};

use orderdesk_core::{DomainError, DomainResult, OrderId};
use orderdesk_dispatch::NewOrder;

/// The add-order form as the user typed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderForm {
    pub order_id: String,
    pub restaurant_name: String,
    pub item_count: String,
    pub delivery_distance: String,
    pub is_paid: bool,
}

impl Default for OrderForm {
    /// The form after a reset: one item, zero kilometers, unpaid.
    fn default() -> Self {
        Self {
            order_id: String::new(),
            restaurant_name: String::new(),
            item_count: "1".to_string(),
            delivery_distance: "0".to_string(),
            is_paid: false,
        }
    }
}

impl OrderForm {
    /// Trim text fields and parse the numeric ones.
    ///
    /// Only presence and number syntax are checked here; item-count and
    /// distance bounds, and id uniqueness, are the store's job.
    pub fn parse(&self) -> DomainResult<NewOrder> {
        let order_id = self.order_id.trim();
        let restaurant_name = self.restaurant_name.trim();
        if order_id.is_empty() || restaurant_name.is_empty() {
            return Err(DomainError::validation(
                "Order ID and Restaurant Name are required",
            ));
        }

        let item_count = self
            .item_count
            .trim()
            .parse::<i64>()
            .map_err(|_| DomainError::validation("Item count must be a whole number"))?;

        let delivery_distance = self
            .delivery_distance
            .trim()
            .parse::<f64>()
            .map_err(|_| DomainError::validation("Delivery distance must be a number"))?;

        Ok(NewOrder {
            order_id: OrderId::from(order_id),
            restaurant_name: restaurant_name.to_string(),
            item_count,
            is_paid: self.is_paid,
            delivery_distance,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(id: &str, name: &str, items: &str, distance: &str) -> OrderForm {
        OrderForm {
            order_id: id.to_string(),
            restaurant_name: name.to_string(),
            item_count: items.to_string(),
            delivery_distance: distance.to_string(),
            is_paid: true,
        }
    }

    #[test]
    fn trims_and_parses_fields() {
        let parsed = form("  ORD010 ", " Curry House ", " 3 ", "4.75").parse().unwrap();
        assert_eq!(parsed, NewOrder::new("ORD010", "Curry House", 3, true, 4.75));
    }

    #[test]
    fn out_of_range_numbers_pass_through_to_the_store() {
        let parsed = form("ORD010", "Curry House", "0", "-2").parse().unwrap();
        assert_eq!(parsed.item_count, 0);
        assert_eq!(parsed.delivery_distance, -2.0);
    }

    #[test]
    fn blank_text_fields_are_required() {
        let err = form("   ", "Curry House", "1", "1").parse().unwrap_err();
        assert_eq!(
            err,
            DomainError::validation("Order ID and Restaurant Name are required")
        );
    }

    #[test]
    fn unparseable_numbers_are_validation_errors() {
        let err = form("ORD010", "Curry House", "two", "1").parse().unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("whole number")));

        let err = form("ORD010", "Curry House", "2", "").parse().unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("must be a number")));
    }

    #[test]
    fn default_form_matches_reset_values() {
        let reset = OrderForm::default();
        assert_eq!(reset.item_count, "1");
        assert_eq!(reset.delivery_distance, "0");
        assert!(!reset.is_paid);
    }
}
