use chrono::{DateTime, Utc};

/// A domain event: an immutable fact about something that happened.
///
/// Events are append-only and carry a stable type name, so the presentation
/// layer can describe them without matching on every concrete variant.
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name/type identifier (e.g. "dispatch.order.added").
    fn event_type(&self) -> &'static str;

    /// Schema version for this event type.
    fn version(&self) -> u32;

    /// When the event occurred (business time).
    fn occurred_at(&self) -> DateTime<Utc>;
}
