use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use orderdesk_core::{Aggregate, DomainError, DomainResult, Entity, OrderId};
use orderdesk_events::Event;

use crate::order::{NewOrder, Order};

/// Insertion-ordered collection of delivery orders.
///
/// The only mutations are adding and removing whole orders, both routed
/// through [`Aggregate::handle`] / [`Aggregate::apply`], which keeps order ids
/// unique for the lifetime of the store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderStore {
    orders: Vec<Order>,
    version: u64,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append an order.
    pub fn add(&mut self, order: NewOrder) -> DomainResult<()> {
        let cmd = OrderStoreCommand::AddOrder(AddOrder {
            order,
            occurred_at: Utc::now(),
        });
        self.execute(&cmd)?;
        Ok(())
    }

    /// Remove the order with this id. Unknown ids are ignored.
    pub fn delete(&mut self, order_id: &OrderId) {
        self.remove(&RemoveOrder {
            order_id: order_id.clone(),
            occurred_at: Utc::now(),
        });
    }

    /// Handle and apply a removal. Removal cannot fail; an unknown id yields
    /// no events.
    pub(crate) fn remove(&mut self, cmd: &RemoveOrder) -> Vec<OrderStoreEvent> {
        let events = self.handle_remove(cmd);
        for event in &events {
            self.apply(event);
        }
        events
    }

    pub fn get(&self, order_id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| o.has_id(order_id))
    }

    pub fn contains(&self, order_id: &OrderId) -> bool {
        self.get(order_id).is_some()
    }

    /// Orders in insertion order.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }

    pub fn count(&self) -> usize {
        self.orders.len()
    }

    pub fn count_paid(&self) -> usize {
        self.orders.iter().filter(|o| o.is_paid()).count()
    }

    pub fn count_unpaid(&self) -> usize {
        self.orders.iter().filter(|o| !o.is_paid()).count()
    }
}

/// Command: AddOrder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddOrder {
    pub order: NewOrder,
    pub occurred_at: DateTime<Utc>,
}

/// Command: RemoveOrder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveOrder {
    pub order_id: OrderId,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OrderStoreCommand {
    AddOrder(AddOrder),
    RemoveOrder(RemoveOrder),
}

/// Event: OrderAdded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderAdded {
    pub order: Order,
    pub occurred_at: DateTime<Utc>,
}

/// Event: OrderRemoved. Carries the removed order so history stays readable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRemoved {
    pub order: Order,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OrderStoreEvent {
    OrderAdded(OrderAdded),
    OrderRemoved(OrderRemoved),
}

impl OrderStoreEvent {
    pub fn order(&self) -> &Order {
        match self {
            OrderStoreEvent::OrderAdded(e) => &e.order,
            OrderStoreEvent::OrderRemoved(e) => &e.order,
        }
    }
}

impl Event for OrderStoreEvent {
    fn event_type(&self) -> &'static str {
        match self {
            OrderStoreEvent::OrderAdded(_) => "dispatch.order.added",
            OrderStoreEvent::OrderRemoved(_) => "dispatch.order.removed",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            OrderStoreEvent::OrderAdded(e) => e.occurred_at,
            OrderStoreEvent::OrderRemoved(e) => e.occurred_at,
        }
    }
}

impl Aggregate for OrderStore {
    type Command = OrderStoreCommand;
    type Event = OrderStoreEvent;
    type Error = DomainError;

    fn version(&self) -> u64 {
        self.version
    }

    fn apply(&mut self, event: &Self::Event) {
        match event {
            OrderStoreEvent::OrderAdded(e) => {
                self.orders.push(e.order.clone());
            }
            OrderStoreEvent::OrderRemoved(e) => {
                if let Some(pos) = self.orders.iter().position(|o| o.has_id(e.order.id())) {
                    self.orders.remove(pos);
                }
            }
        }

        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            OrderStoreCommand::AddOrder(cmd) => self.handle_add(cmd),
            OrderStoreCommand::RemoveOrder(cmd) => Ok(self.handle_remove(cmd)),
        }
    }
}

impl OrderStore {
    fn handle_add(&self, cmd: &AddOrder) -> Result<Vec<OrderStoreEvent>, DomainError> {
        let order = self.validate(&cmd.order)?;

        Ok(vec![OrderStoreEvent::OrderAdded(OrderAdded {
            order,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_remove(&self, cmd: &RemoveOrder) -> Vec<OrderStoreEvent> {
        match self.get(&cmd.order_id) {
            Some(order) => vec![OrderStoreEvent::OrderRemoved(OrderRemoved {
                order: order.clone(),
                occurred_at: cmd.occurred_at,
            })],
            None => Vec::new(),
        }
    }

    /// Checks run in a fixed order: required text, uniqueness, item count,
    /// distance. The first failure wins.
    fn validate(&self, new: &NewOrder) -> Result<Order, DomainError> {
        if new.order_id.is_blank() || new.restaurant_name.trim().is_empty() {
            return Err(DomainError::validation(
                "Order ID and Restaurant Name are required",
            ));
        }

        if self.contains(&new.order_id) {
            return Err(DomainError::duplicate_id(new.order_id.clone()));
        }

        if new.item_count < 1 {
            return Err(DomainError::validation("Item count must be at least 1"));
        }
        let item_count = u32::try_from(new.item_count)
            .map_err(|_| DomainError::validation("Item count is too large"))?;

        if !new.delivery_distance.is_finite() {
            return Err(DomainError::validation(
                "Delivery distance must be a finite number",
            ));
        }
        if new.delivery_distance < 0.0 {
            return Err(DomainError::validation(
                "Delivery distance cannot be negative",
            ));
        }

        Ok(Order::from_validated(new, item_count))
    }
}
