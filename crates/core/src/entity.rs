//! Entity trait: identity keyed on a single designated field.
//!
//! Entities in this workspace are *not* compared structurally. Two values are
//! the same entity when they carry the same key, whatever their other fields
//! hold. Use [`impl_entity_identity!`](crate::impl_entity_identity) to derive
//! `PartialEq`/`Eq`/`Hash` from [`Entity`] instead of `#[derive]`, so that
//! collections and `assert_eq!` follow key identity.

/// Entity marker + key accessor.
pub trait Entity {
    /// Type of the identifying key (e.g. `str` for a product code).
    type Key: ?Sized + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the identifying key, or `None` when it has not been assigned.
    fn key(&self) -> Option<&Self::Key>;

    /// Key identity.
    ///
    /// - equal `Some` keys → same entity, regardless of any other field
    /// - an unkeyed instance is only ever the same entity as itself
    ///   (reference identity), never another unkeyed instance or a keyed one
    fn same_entity(&self, other: &Self) -> bool {
        if core::ptr::eq(self, other) {
            return true;
        }
        match (self.key(), other.key()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

/// Implement `PartialEq`, `Eq` and `Hash` for an [`Entity`] by key only.
///
/// The hash covers `key()` alone, so instances that are the same entity always
/// hash identically.
#[macro_export]
macro_rules! impl_entity_identity {
    ($t:ty) => {
        impl ::core::cmp::PartialEq for $t {
            fn eq(&self, other: &Self) -> bool {
                $crate::Entity::same_entity(self, other)
            }
        }

        impl ::core::cmp::Eq for $t {}

        impl ::core::hash::Hash for $t {
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                ::core::hash::Hash::hash(&$crate::Entity::key(self), state);
            }
        }
    };
}
