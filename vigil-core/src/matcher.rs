// vigil-core/src/matcher.rs
//! The matcher abstraction and its registry.
//!
//! A matcher is a pluggable interface over `(content_bytes, rule) -> spans`,
//! decoupling the engine's orchestration from the specific detection
//! technique (regex, entropy, and reserved future matchers).
//!
//! License: MIT OR APACHE 2.0

use std::collections::HashMap;

use crate::rule::Rule;

/// A single match returned by a matcher, with 1-based line and column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub line: usize,
    pub column: usize,
    pub match_text: String,
}

/// Consumes `(content, rule)` and returns the spans it matched.
///
/// Implementations may hold internal caches (the regex matcher's compiled-
/// pattern cache, for instance) but must be safe to invoke concurrently
/// for distinct calls, since the engine holds one shared matcher instance
/// per registered type across worker threads.
pub trait Matcher: Send + Sync {
    fn find_matches(&self, content: &str, rule: &Rule) -> Vec<MatchResult>;
}

/// Maps `matcher_type` strings to matcher instances.
///
/// Built once at startup and treated as immutable thereafter, so concurrent
/// lookups require no locking.
#[derive(Default)]
pub struct MatcherRegistry {
    matchers: HashMap<String, Box<dyn Matcher>>,
}

impl MatcherRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, matcher_type: impl Into<String>, matcher: Box<dyn Matcher>) {
        self.matchers.insert(matcher_type.into(), matcher);
    }

    pub fn get(&self, matcher_type: &str) -> Option<&dyn Matcher> {
        self.matchers.get(matcher_type).map(|m| m.as_ref())
    }
}
