//! Domain events and the in-memory log that keeps them.

pub mod event;
pub mod log;

pub use event::Event;
pub use log::{EventLog, Recorded};
