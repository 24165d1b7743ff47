//! In-process API consumed by a presentation layer.

use chrono::Utc;
use tracing::{debug, info, warn};

use orderdesk_core::{Aggregate, DomainResult, OrderId};
use orderdesk_events::EventLog;

use crate::assign::select_nearest;
use crate::filter::filter;
use crate::order::{NewOrder, Order, OrderStats, StatusFilter};
use crate::store::{AddOrder, OrderStore, OrderStoreCommand, OrderStoreEvent, RemoveOrder};

/// The four orders the desk starts with when seeding is enabled.
pub fn demo_orders() -> Vec<NewOrder> {
    vec![
        NewOrder::new("ORD001", "Pizza Palace", 2, true, 3.5),
        NewOrder::new("ORD002", "Burger Barn", 1, false, 2.1),
        NewOrder::new("ORD003", "Sushi Express", 3, false, 5.8),
        NewOrder::new("ORD004", "Taco Time", 2, true, 1.2),
    ]
}

/// Order store plus the history of every change applied to it.
///
/// Filter state is never stored here; callers pass the status filter and the
/// distance ceiling on every query.
#[derive(Debug, Clone, Default)]
pub struct OrderDesk {
    store: OrderStore,
    history: EventLog<OrderStoreEvent>,
}

impl OrderDesk {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_demo_orders() -> Self {
        let mut desk = Self::new();
        for order in demo_orders() {
            if let Err(err) = desk.add_order(order) {
                warn!(error = %err, "skipping demo order");
            }
        }
        desk
    }

    /// Validate and append an order, returning it as stored. On error the
    /// store is unchanged.
    pub fn add_order(&mut self, order: NewOrder) -> DomainResult<&Order> {
        let order_id = order.order_id.clone();
        let cmd = OrderStoreCommand::AddOrder(AddOrder {
            order,
            occurred_at: Utc::now(),
        });

        let events = self.store.execute(&cmd).inspect_err(|err| {
            warn!(order_id = %order_id, error = %err, "order rejected");
        })?;
        self.record(events);

        let total = self.store.count();
        info!(order_id = %order_id, total, "order added");
        // A successful add always appends, so the new order is the last one.
        Ok(&self.store.orders()[total - 1])
    }

    /// Remove an order by id, returning it. Unknown ids are a no-op.
    pub fn delete_order(&mut self, order_id: &OrderId) -> Option<Order> {
        let events = self.store.remove(&RemoveOrder {
            order_id: order_id.clone(),
            occurred_at: Utc::now(),
        });
        let removed = events.iter().find_map(|e| match e {
            OrderStoreEvent::OrderRemoved(removed) => Some(removed.order.clone()),
            OrderStoreEvent::OrderAdded(_) => None,
        });
        self.record(events);

        match &removed {
            Some(_) => info!(order_id = %order_id, total = self.store.count(), "order deleted"),
            None => debug!(order_id = %order_id, "delete ignored: no such order"),
        }
        removed
    }

    /// Orders to render for the given filter state, in insertion order.
    pub fn list_visible(&self, status: StatusFilter, distance_ceiling: f64) -> Vec<&Order> {
        let visible = filter(&self.store, status, distance_ceiling);
        debug!(
            status = %status,
            distance_ceiling,
            visible = visible.len(),
            "listed visible orders"
        );
        visible
    }

    /// Nearest unpaid order within `distance_ceiling`, if any.
    pub fn assign_nearest(&self, distance_ceiling: f64) -> Option<&Order> {
        let picked = select_nearest(&self.store, distance_ceiling);
        match picked {
            Some(order) => info!(
                order_id = %order.order_id(),
                distance = order.delivery_distance(),
                distance_ceiling,
                "delivery assigned"
            ),
            None => info!(distance_ceiling, "no order available for assignment"),
        }
        picked
    }

    pub fn stats(&self) -> OrderStats {
        OrderStats {
            total: self.store.count(),
            paid: self.store.count_paid(),
            unpaid: self.store.count_unpaid(),
        }
    }

    pub fn store(&self) -> &OrderStore {
        &self.store
    }

    /// Every applied change, oldest first.
    pub fn history(&self) -> &EventLog<OrderStoreEvent> {
        &self.history
    }

    fn record(&mut self, events: Vec<OrderStoreEvent>) {
        for event in events {
            let sequence = self.history.record(event);
            debug!(sequence, version = self.store.version(), "recorded store event");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orderdesk_core::DomainError;
    use orderdesk_events::Event;

    #[test]
    fn demo_desk_has_the_four_seed_orders() {
        let desk = OrderDesk::with_demo_orders();
        assert_eq!(
            desk.stats(),
            OrderStats {
                total: 4,
                paid: 2,
                unpaid: 2
            }
        );
        assert_eq!(desk.history().len(), 4);
    }

    #[test]
    fn add_then_list_all_shows_new_order_last() {
        let mut desk = OrderDesk::with_demo_orders();
        let added = desk
            .add_order(NewOrder::new("ORD005", "Noodle Nook", 4, false, 7.25))
            .unwrap()
            .clone();

        let all = desk.list_visible(StatusFilter::All, f64::INFINITY);
        assert_eq!(all.len(), 5);
        let last = all.last().unwrap();
        assert_eq!(last.order_id().as_str(), "ORD005");
        assert_eq!(last.restaurant_name(), "Noodle Nook");
        assert_eq!(last.item_count(), 4);
        assert_eq!(last.delivery_distance(), 7.25);
        assert_eq!(*last, &added);
    }

    #[test]
    fn add_returns_the_order_as_stored() {
        let mut desk = OrderDesk::new();
        let added = desk
            .add_order(NewOrder::new("ORD010", "Deli Downtown", 1, false, -0.0))
            .unwrap();
        assert_eq!(added.order_id().as_str(), "ORD010");
        assert!(added.delivery_distance().is_sign_positive());
    }

    #[test]
    fn rejected_add_leaves_desk_and_history_unchanged() {
        let mut desk = OrderDesk::with_demo_orders();

        let err = desk
            .add_order(NewOrder::new("ORD002", "Burger Barn", 1, false, 2.1))
            .unwrap_err();
        assert!(matches!(err, DomainError::DuplicateId(_)));

        let err = desk
            .add_order(NewOrder::new("ORD009", "Burger Barn", 0, false, 2.1))
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        assert_eq!(desk.stats().total, 4);
        assert_eq!(desk.history().len(), 4);
    }

    #[test]
    fn delete_returns_the_removed_order_once() {
        let mut desk = OrderDesk::with_demo_orders();
        let id = OrderId::from("ORD003");

        let removed = desk.delete_order(&id).unwrap();
        assert_eq!(removed.restaurant_name(), "Sushi Express");
        assert!(desk.delete_order(&id).is_none());

        assert_eq!(desk.stats().total, 3);
        let last = desk.history().entries().last().unwrap();
        assert_eq!(last.sequence, 5);
        assert_eq!(last.event.event_type(), "dispatch.order.removed");
    }

    #[test]
    fn stats_after_deleting_the_paid_order() {
        let mut desk = OrderDesk::new();
        desk.add_order(NewOrder::new("ORD001", "Pizza Palace", 2, true, 3.5))
            .unwrap();
        desk.add_order(NewOrder::new("ORD002", "Burger Barn", 1, false, 2.1))
            .unwrap();

        desk.delete_order(&OrderId::from("ORD001"));
        assert_eq!(
            desk.stats(),
            OrderStats {
                total: 1,
                paid: 0,
                unpaid: 1
            }
        );
    }

    #[test]
    fn assign_nearest_uses_explicit_ceiling() {
        let desk = OrderDesk::with_demo_orders();
        assert_eq!(
            desk.assign_nearest(10.0).unwrap().order_id().as_str(),
            "ORD002"
        );
        assert!(desk.assign_nearest(2.0).is_none());
    }
}
