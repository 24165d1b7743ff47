//! Entity trait: identity that outlives any single rendering of the record.

/// Something addressed by a stable identifier rather than by its field values.
///
/// Two orders with identical fields but different ids are different orders;
/// lookups, duplicate checks and deletes all go through [`Entity::id`].
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// True when this entity is the one addressed by `id`.
    fn has_id(&self, id: &Self::Id) -> bool {
        self.id() == id
    }
}
