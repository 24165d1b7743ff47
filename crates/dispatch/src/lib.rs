//! Delivery dispatch domain: the order store, the table filter and the
//! nearest-order assignment, plus the in-process API a presentation layer uses.
//!
//! Everything here is deterministic, synchronous domain logic over a small
//! in-memory collection (no IO, no rendering).

pub mod assign;
pub mod desk;
pub mod filter;
pub mod order;
pub mod shared;
pub mod store;

pub use assign::{assignable, select_nearest};
pub use desk::{OrderDesk, demo_orders};
pub use filter::filter;
pub use order::{NewOrder, Order, OrderStats, StatusFilter};
pub use shared::SharedOrderDesk;
pub use store::{
    AddOrder, OrderAdded, OrderRemoved, OrderStore, OrderStoreCommand, OrderStoreEvent,
    RemoveOrder,
};
