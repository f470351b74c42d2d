//! Spec classification: normalize each removal rule into a key matcher.
//!
//! Classification happens once per application, not per key. Both exact-name
//! flavors collapse to the same matcher; only the pattern kind differs.

use regex::Regex;

use crate::spec::FilterSpec;

/// A resolved key-removal predicate over the textual form of a key.
#[derive(Debug, Clone)]
pub enum KeyMatcher {
    /// Full-equality comparison against the key text.
    Exact(String),

    /// Pattern search anywhere in the key text.
    Pattern(Regex),
}

impl KeyMatcher {
    /// True when a key with this textual form should be removed.
    pub fn matches(&self, key_text: &str) -> bool {
        match self {
            KeyMatcher::Exact(name) => name == key_text,
            KeyMatcher::Pattern(re) => re.is_match(key_text),
        }
    }
}

impl FilterSpec {
    /// Normalize this rule into its removal predicate.
    ///
    /// Cheap: `Regex` clones share the compiled program.
    pub fn to_matcher(&self) -> KeyMatcher {
        match self {
            FilterSpec::Pattern(re) => KeyMatcher::Pattern(re.clone()),
            FilterSpec::SymbolicName(name) | FilterSpec::TextName(name) => {
                KeyMatcher::Exact(name.clone())
            }
        }
    }
}

/// Resolve an ordered spec list into matchers, preserving list order.
///
/// Order is kept for debuggability only; application removes the union of
/// all per-matcher removal sets, so the residual is order-independent.
pub fn resolve(specs: &[FilterSpec]) -> Vec<KeyMatcher> {
    specs.iter().map(FilterSpec::to_matcher).collect()
}
