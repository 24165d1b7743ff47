//! Table filtering: payment status plus an inclusive distance ceiling.

use crate::order::{Order, StatusFilter};
use crate::store::OrderStore;

/// Orders matching `status` whose distance is at most `distance_ceiling`,
/// in store order. No match is an empty vec, not an error.
pub fn filter(store: &OrderStore, status: StatusFilter, distance_ceiling: f64) -> Vec<&Order> {
    store
        .iter()
        .filter(|o| status.matches(o) && o.is_within(distance_ceiling))
        .collect()
}
