//! `SieveMap`: a thin wrapper over `HashMap` carrying the extended behavior.
//!
//! The wrapper composes over the native map instead of augmenting it
//! globally, so nothing changes for unrelated `HashMap` users. Plain-map
//! callers can still reach the same algorithm through `filter::KeyFilter`.

use std::borrow::Borrow;
use std::collections::hash_map;
use std::collections::HashMap;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// Associative container from keys to values, unique keys, with subtraction
/// and merge operators layered on top.
///
/// Iteration order follows `HashMap` and is not part of the contract.
/// Serializes as the plain map it wraps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SieveMap<K: Eq + Hash, V> {
    pub(crate) entries: HashMap<K, V>,
}

impl<K: Eq + Hash, V> SieveMap<K, V> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert `value` under `key`, returning the displaced value if any.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.entries.insert(key, value)
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.entries.get(key)
    }

    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.entries.remove(key)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.entries.contains_key(key)
    }

    pub fn clear(&mut self) {
        self.entries.clear()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, K, V> {
        self.entries.iter()
    }

    pub fn keys(&self) -> hash_map::Keys<'_, K, V> {
        self.entries.keys()
    }

    pub fn values(&self) -> hash_map::Values<'_, K, V> {
        self.entries.values()
    }

    /// Borrow the underlying map.
    pub fn as_map(&self) -> &HashMap<K, V> {
        &self.entries
    }

    /// Unwrap into the underlying map.
    pub fn into_inner(self) -> HashMap<K, V> {
        self.entries
    }
}

impl<K: Eq + Hash, V> Default for SieveMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash, V> From<HashMap<K, V>> for SieveMap<K, V> {
    fn from(entries: HashMap<K, V>) -> Self {
        Self { entries }
    }
}

impl<K: Eq + Hash, V> FromIterator<(K, V)> for SieveMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: HashMap::from_iter(iter),
        }
    }
}

impl<K: Eq + Hash, V> Extend<(K, V)> for SieveMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries.extend(iter)
    }
}

impl<K: Eq + Hash, V> IntoIterator for SieveMap<K, V> {
    type Item = (K, V);
    type IntoIter = hash_map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, K: Eq + Hash, V> IntoIterator for &'a SieveMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = hash_map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
