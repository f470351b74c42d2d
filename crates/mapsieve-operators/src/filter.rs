//! The filter resolution/application path.
//!
//! Subtraction by spec list, plus the fallback single-predicate removal mode
//! that preserves the plain per-entry filtering behavior. One routine
//! (`apply_matchers`) owns the removal loop; the wrapper methods, the
//! `KeyFilter` trait, and the operator bindings in `ops.rs` all delegate to
//! it, so there is exactly one algorithm in the tree.

use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

use mapsieve_core::matcher::{resolve, KeyMatcher};
use mapsieve_core::prelude::FilterSpec;

use crate::map::SieveMap;

/// Canonical shape of the fallback removal predicate: entry removed when the
/// predicate returns true. Useful at call sites that pass no fallback, e.g.
/// `map.filter(None, None::<RemovalPredicate<_, _>>)`.
pub type RemovalPredicate<K, V> = fn(&K, &V) -> bool;

/// Key-subtraction over a plain `HashMap`, without the wrapper type.
///
/// Same semantics as the `SieveMap` entry points: the residual keeps exactly
/// the entries whose key text matches none of the specs.
pub trait KeyFilter<K, V> {
    /// Residual map with every spec-matched key removed; `self` unchanged.
    fn subtract(&self, specs: &[FilterSpec]) -> Self
    where
        Self: Sized,
        K: Clone,
        V: Clone;

    /// Remove every spec-matched key in place; returns `self` for chaining.
    fn subtract_in_place(&mut self, specs: &[FilterSpec]) -> &mut Self;
}

impl<K, V> KeyFilter<K, V> for HashMap<K, V>
where
    K: Eq + Hash + Display,
{
    fn subtract(&self, specs: &[FilterSpec]) -> Self
    where
        Self: Sized,
        K: Clone,
        V: Clone,
    {
        let mut out = self.clone();
        out.subtract_in_place(specs);
        out
    }

    fn subtract_in_place(&mut self, specs: &[FilterSpec]) -> &mut Self {
        let matchers = resolve(specs);
        apply_matchers(self, &matchers);
        self
    }
}

impl<K, V> SieveMap<K, V>
where
    K: Eq + Hash + Display + Clone,
    V: Clone,
{
    /// Non-destructive extended filter.
    ///
    /// Selection rule: a `Some` non-empty `specs` wins and `fallback` is
    /// ignored entirely. Otherwise a supplied `fallback` runs as a per-entry
    /// removal predicate (entry removed when it returns true). With neither,
    /// the result is an unmodified copy. The receiver is never mutated.
    pub fn filter<F>(&self, specs: Option<&[FilterSpec]>, fallback: Option<F>) -> Self
    where
        F: FnMut(&K, &V) -> bool,
    {
        match specs {
            Some(list) if !list.is_empty() => self.subtract(list),
            _ => match fallback {
                Some(pred) => self.reject(pred),
                None => self.clone(),
            },
        }
    }

    /// Residual map with every spec-matched key removed; receiver unchanged.
    ///
    /// Named form of the `-` operator.
    pub fn subtract(&self, specs: &[FilterSpec]) -> Self {
        let mut out = self.clone();
        out.subtract_in_place(specs);
        out
    }
}

impl<K, V> SieveMap<K, V>
where
    K: Eq + Hash + Display,
{
    /// Destructive filter: same residual as [`SieveMap::filter`] over the
    /// same list, written back into the receiver. Returns the receiver.
    pub fn filter_in_place(&mut self, specs: &[FilterSpec]) -> &mut Self {
        self.subtract_in_place(specs)
    }

    /// Remove every spec-matched key in place.
    ///
    /// Named form of the `-=` operator.
    pub fn subtract_in_place(&mut self, specs: &[FilterSpec]) -> &mut Self {
        let matchers = resolve(specs);
        apply_matchers(&mut self.entries, &matchers);
        self
    }
}

impl<K: Eq + Hash, V> SieveMap<K, V> {
    /// Remove entries for which `pred` returns true, in place.
    ///
    /// This is the pre-existing single-predicate removal behavior, reachable
    /// under its own name so per-entry callers are unaffected by the
    /// spec-list extension.
    pub fn reject_in_place<F>(&mut self, mut pred: F) -> &mut Self
    where
        F: FnMut(&K, &V) -> bool,
    {
        self.entries.retain(|k, v| !pred(k, v));
        self
    }
}

impl<K, V> SieveMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Copy of the receiver without the entries `pred` rejects.
    pub fn reject<F>(&self, pred: F) -> Self
    where
        F: FnMut(&K, &V) -> bool,
    {
        let mut out = self.clone();
        out.reject_in_place(pred);
        out
    }
}

/// Remove every entry whose key text matches any resolved matcher.
///
/// Removal is a set union across matchers: a key already gone cannot be
/// removed again, so matcher order never changes the residual. Each key is
/// rendered to text once and tested against all matchers.
fn apply_matchers<K, V>(entries: &mut HashMap<K, V>, matchers: &[KeyMatcher])
where
    K: Eq + Hash + Display,
{
    // Empty list contributes no removals; leave the map untouched.
    if matchers.is_empty() {
        return;
    }

    #[cfg(feature = "tracing")]
    let before = entries.len();

    entries.retain(|key, _| {
        let text = key.to_string();
        !matchers.iter().any(|m| m.matches(&text))
    });

    #[cfg(feature = "tracing")]
    tracing::trace!(
        removed = before - entries.len(),
        kept = entries.len(),
        matchers = matchers.len(),
        "applied key filters"
    );
}
