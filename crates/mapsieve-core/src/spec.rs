//! Filter specifications: the three supported key-removal rules.
//!
//! A spec list is ephemeral; callers build one per call and discard it.
//! Patterns are compiled here, at construction, so application never parses.

use std::fmt;

use regex::Regex;

use crate::error::Result;

/// One key-removal rule, tested against the canonical textual form of a key.
///
/// This is a closed set: exactly three kinds, fixed semantics, no composition
/// (no AND/OR/NOT, no nested paths).
#[derive(Debug, Clone)]
pub enum FilterSpec {
    /// Remove every key whose text the pattern matches anywhere in the
    /// string (substring search, not full-string equality).
    Pattern(Regex),

    /// Remove every key whose text equals the name exactly. The symbolic
    /// flavor; differs from `TextName` only in how callers construct it.
    SymbolicName(String),

    /// Remove every key whose text equals the name exactly.
    TextName(String),
}

/// Ordered list of removal rules, possibly empty.
pub type FilterList = Vec<FilterSpec>;

impl FilterSpec {
    /// Compile `pattern` into a pattern rule.
    ///
    /// The only fallible construction; a rejected pattern never reaches the
    /// application algorithm.
    pub fn pattern(pattern: &str) -> Result<Self> {
        Ok(FilterSpec::Pattern(Regex::new(pattern)?))
    }

    /// Exact-match rule in the symbolic flavor.
    pub fn symbol(name: impl Into<String>) -> Self {
        FilterSpec::SymbolicName(name.into())
    }

    /// Exact-match rule in the textual flavor.
    pub fn text(name: impl Into<String>) -> Self {
        FilterSpec::TextName(name.into())
    }
}

impl From<Regex> for FilterSpec {
    fn from(re: Regex) -> Self {
        FilterSpec::Pattern(re)
    }
}

// Regex carries no equality of its own; compare patterns by source. The two
// exact-name flavors stay distinct tags even for equal text; equivalence of
// their effect is a property of resolution, not of the specs.
impl PartialEq for FilterSpec {
    fn eq(&self, other: &Self) -> bool {
        use FilterSpec::*;
        match (self, other) {
            (Pattern(a), Pattern(b)) => a.as_str() == b.as_str(),
            (SymbolicName(a), SymbolicName(b)) => a == b,
            (TextName(a), TextName(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for FilterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterSpec::Pattern(re) => write!(f, "/{}/", re.as_str()),
            FilterSpec::SymbolicName(name) => write!(f, ":{}", name),
            FilterSpec::TextName(name) => write!(f, "{:?}", name),
        }
    }
}
