// vigil-core/src/matchers/entropy_matcher.rs
//! Wraps `vigil_entropy`'s low-level engine as a `Matcher`, reading its
//! per-rule tunables (`entropy_threshold`, `require_context`) from rule
//! metadata on every call.
//!
//! License: MIT OR APACHE 2.0

use vigil_entropy::engine::EntropyEngine as LowLevelEntropyEngine;

use crate::matcher::{MatchResult, Matcher};
use crate::rule::Rule;

/// Default bits/char cutoff used when a rule's `entropy_threshold`
/// metadata is absent or unparseable.
pub const DEFAULT_ENTROPY_THRESHOLD: f64 = 5.0;

#[derive(Debug, Default)]
pub struct EntropyMatcher;

impl EntropyMatcher {
    pub fn new() -> Self {
        Self
    }
}

impl Matcher for EntropyMatcher {
    fn find_matches(&self, content: &str, rule: &Rule) -> Vec<MatchResult> {
        let threshold = rule.entropy_threshold(DEFAULT_ENTROPY_THRESHOLD);
        let require_context = rule.require_context();

        let engine = LowLevelEntropyEngine::new(threshold, require_context);
        engine
            .scan(content)
            .into_iter()
            .map(|m| MatchResult {
                line: m.line,
                column: m.column,
                match_text: m.text,
            })
            .collect()
    }
}
