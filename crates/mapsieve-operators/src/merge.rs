//! Additive merge: a pass-through to `HashMap` insertion semantics.
//!
//! Nothing is reimplemented here; on key conflicts the right-hand side wins,
//! exactly as repeated insertion would behave.

use std::hash::Hash;

use crate::map::SieveMap;

impl<K, V> SieveMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Copy of the receiver with `other`'s entries inserted over it.
    ///
    /// Named form of the `+` operator.
    pub fn union(&self, other: &Self) -> Self {
        let mut out = self.clone();
        out.union_in_place(other);
        out
    }

    /// Insert `other`'s entries into the receiver, in place.
    ///
    /// Named form of the `+=` operator; returns the receiver for chaining.
    pub fn union_in_place(&mut self, other: &Self) -> &mut Self {
        for (key, value) in &other.entries {
            self.entries.insert(key.clone(), value.clone());
        }
        self
    }
}
