//! Lock-guarded desk for hosts with more than one actor.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use orderdesk_core::{DomainResult, OrderId};

use crate::desk::OrderDesk;
use crate::order::{NewOrder, Order, OrderStats, StatusFilter};

/// Cloneable handle to one [`OrderDesk`].
///
/// Each mutation holds the write lock for exactly one store operation; reads
/// share the read lock and return owned copies, so no borrow outlives the lock.
#[derive(Debug, Clone, Default)]
pub struct SharedOrderDesk {
    inner: Arc<RwLock<OrderDesk>>,
}

impl SharedOrderDesk {
    pub fn new(desk: OrderDesk) -> Self {
        Self {
            inner: Arc::new(RwLock::new(desk)),
        }
    }

    pub fn add_order(&self, order: NewOrder) -> DomainResult<Order> {
        self.write().add_order(order).cloned()
    }

    pub fn delete_order(&self, order_id: &OrderId) -> Option<Order> {
        self.write().delete_order(order_id)
    }

    pub fn list_visible(&self, status: StatusFilter, distance_ceiling: f64) -> Vec<Order> {
        self.read()
            .list_visible(status, distance_ceiling)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn assign_nearest(&self, distance_ceiling: f64) -> Option<Order> {
        self.read().assign_nearest(distance_ceiling).cloned()
    }

    pub fn stats(&self) -> OrderStats {
        self.read().stats()
    }

    /// Run a read-only closure against the desk under the read lock.
    pub fn with_desk<R>(&self, f: impl FnOnce(&OrderDesk) -> R) -> R {
        f(&self.read())
    }

    // A panic while holding the lock cannot leave the store half-applied
    // (every mutation is a single `apply`), so poisoning is recovered.
    fn read(&self) -> RwLockReadGuard<'_, OrderDesk> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, OrderDesk> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}
