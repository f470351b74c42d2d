//! Compile-time operator bindings: `-`/`-=` to subtraction, `+`/`+=` to
//! merge.
//!
//! Every impl is a one-line delegation to the named functions in `filter.rs`
//! and `merge.rs`; the operators add no semantics of their own. Both borrowed
//! and owned right-hand sides are accepted so call sites read naturally.

use std::fmt::Display;
use std::hash::Hash;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use mapsieve_core::prelude::{FilterList, FilterSpec};

use crate::map::SieveMap;

impl<K, V> Sub<&[FilterSpec]> for &SieveMap<K, V>
where
    K: Eq + Hash + Display + Clone,
    V: Clone,
{
    type Output = SieveMap<K, V>;

    fn sub(self, specs: &[FilterSpec]) -> SieveMap<K, V> {
        self.subtract(specs)
    }
}

impl<K, V> Sub<&FilterList> for &SieveMap<K, V>
where
    K: Eq + Hash + Display + Clone,
    V: Clone,
{
    type Output = SieveMap<K, V>;

    fn sub(self, specs: &FilterList) -> SieveMap<K, V> {
        self.subtract(specs)
    }
}

impl<K, V> Sub<FilterList> for &SieveMap<K, V>
where
    K: Eq + Hash + Display + Clone,
    V: Clone,
{
    type Output = SieveMap<K, V>;

    fn sub(self, specs: FilterList) -> SieveMap<K, V> {
        self.subtract(&specs)
    }
}

impl<K, V> SubAssign<&[FilterSpec]> for SieveMap<K, V>
where
    K: Eq + Hash + Display,
{
    fn sub_assign(&mut self, specs: &[FilterSpec]) {
        self.subtract_in_place(specs);
    }
}

impl<K, V> SubAssign<&FilterList> for SieveMap<K, V>
where
    K: Eq + Hash + Display,
{
    fn sub_assign(&mut self, specs: &FilterList) {
        self.subtract_in_place(specs);
    }
}

impl<K, V> SubAssign<FilterList> for SieveMap<K, V>
where
    K: Eq + Hash + Display,
{
    fn sub_assign(&mut self, specs: FilterList) {
        self.subtract_in_place(&specs);
    }
}

impl<K, V> Add<&SieveMap<K, V>> for &SieveMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    type Output = SieveMap<K, V>;

    fn add(self, other: &SieveMap<K, V>) -> SieveMap<K, V> {
        self.union(other)
    }
}

impl<K, V> Add<SieveMap<K, V>> for SieveMap<K, V>
where
    K: Eq + Hash,
{
    type Output = SieveMap<K, V>;

    // Owned right-hand side: move the entries, no cloning.
    fn add(mut self, other: SieveMap<K, V>) -> SieveMap<K, V> {
        self.entries.extend(other.entries);
        self
    }
}

impl<K, V> AddAssign<&SieveMap<K, V>> for SieveMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn add_assign(&mut self, other: &SieveMap<K, V>) {
        self.union_in_place(other);
    }
}

impl<K, V> AddAssign<SieveMap<K, V>> for SieveMap<K, V>
where
    K: Eq + Hash,
{
    fn add_assign(&mut self, other: SieveMap<K, V>) {
        self.entries.extend(other.entries);
    }
}
