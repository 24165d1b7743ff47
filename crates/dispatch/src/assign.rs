//! Delivery assignment: the nearest unpaid order within reach.

use crate::order::Order;
use crate::store::OrderStore;

/// Orders eligible for assignment: unpaid and no farther than the ceiling.
pub fn assignable(store: &OrderStore, distance_ceiling: f64) -> impl Iterator<Item = &Order> {
    store
        .iter()
        .filter(move |o| !o.is_paid() && o.is_within(distance_ceiling))
}

/// The eligible order with the smallest distance, or `None` when nothing is
/// eligible.
///
/// Ties go to the order that was added first: the running best is only
/// replaced on a strictly smaller distance.
pub fn select_nearest(store: &OrderStore, distance_ceiling: f64) -> Option<&Order> {
    assignable(store, distance_ceiling).fold(None::<&Order>, |best, candidate| match best {
        Some(current) if candidate.delivery_distance() >= current.delivery_distance() => {
            Some(current)
        }
        _ => Some(candidate),
    })
}
