// vigil-core/src/rule.rs
//! Declarative rule records and the insertion-ordered set that holds them.
//!
//! License: MIT OR Apache-2.0

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::severity::{Confidence, Severity};

/// A declarative detection unit: what to match and how to classify the
/// result. Regex rules carry a non-empty, compilable `pattern`; entropy
/// rules tune themselves through well-known `metadata` keys
/// (`entropy_threshold`, `require_context`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub id: String,
    #[serde(default = "default_version")]
    pub version: String,
    pub description: String,
    pub severity: Severity,
    pub confidence: Confidence,
    pub matcher_type: String,
    #[serde(default)]
    pub pattern: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub file_patterns: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
    #[serde(default)]
    pub remediation: String,
    #[serde(default)]
    pub references: Vec<String>,
}

fn default_version() -> String {
    "1.0.0".to_string()
}

impl Rule {
    /// Well-known matcher type names the engine knows how to validate at
    /// load time. Only `regex` and `entropy` are required to have a
    /// registered matcher; `jsonpath`, `yamlpath`, and `heuristic` are
    /// reserved for future matchers.
    pub const KNOWN_MATCHER_TYPES: &'static [&'static str] =
        &["regex", "entropy", "jsonpath", "yamlpath", "heuristic"];

    /// Reads the `entropy_threshold` metadata key, falling back to `default`
    /// when absent or unparseable.
    pub fn entropy_threshold(&self, default: f64) -> f64 {
        self.metadata
            .get("entropy_threshold")
            .and_then(|v| v.parse::<f64>().ok())
            .unwrap_or(default)
    }

    /// Reads the `require_context` metadata key, defaulting to `false`.
    pub fn require_context(&self) -> bool {
        self.metadata
            .get("require_context")
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    }
}

/// Insertion-ordered collection of rules with O(1) lookup by id and O(k)
/// lookup by tag. Iteration order determines scan order and hence the order
/// findings are produced in for a file.
#[derive(Debug, Default, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
    by_id: HashMap<String, usize>,
    by_tag: HashMap<String, Vec<usize>>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `rule`. A later addition with an id already present does
    /// not replace the earlier rule; loaders are expected to validate id
    /// uniqueness upstream before calling `add`.
    pub fn add(&mut self, rule: Rule) {
        let index = self.rules.len();
        if !self.by_id.contains_key(&rule.id) {
            self.by_id.insert(rule.id.clone(), index);
        }
        for tag in &rule.tags {
            self.by_tag.entry(tag.clone()).or_default().push(index);
        }
        self.rules.push(rule);
    }

    pub fn by_id(&self, id: &str) -> Option<&Rule> {
        self.by_id.get(id).map(|&idx| &self.rules[idx])
    }

    pub fn by_tag(&self, tag: &str) -> Vec<&Rule> {
        self.by_tag
            .get(tag)
            .map(|indices| indices.iter().map(|&idx| &self.rules[idx]).collect())
            .unwrap_or_default()
    }

    /// All rules, in insertion order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Sets a metadata key on the rule at `index`, used by the entropy
    /// overrides path to adjust a built-in entropy rule's tuning knobs
    /// before the first scan.
    pub fn set_metadata(&mut self, index: usize, key: &str, value: String) {
        if let Some(rule) = self.rules.get_mut(index) {
            rule.metadata.insert(key.to_string(), value);
        }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
