// vigil-core/src/loader.rs
//! Loads a `RuleSet` from a YAML document with a top-level `rules` sequence.
//!
//! Deserialization is split into two stages: a `RawRule` with string-typed
//! `severity`/`confidence`/`matcher_type` absorbs whatever the document says,
//! then `validate_and_convert` turns each raw rule into a real `Rule` or a
//! `ConfigError` naming the offending rule id and the violated constraint.
//! This mirrors the loader/engine split the rest of the crate already makes:
//! load-time failures are fatal for the load, never surfaced as scan errors.
//!
//! License: MIT OR APACHE 2.0

use std::collections::HashMap;

use regex::Regex;
use serde::Deserialize;

use crate::errors::ConfigError;
use crate::rule::{Rule, RuleSet};
use crate::severity::{Confidence, Severity};

#[derive(Debug, Deserialize)]
struct RawDocument {
    #[serde(default)]
    rules: Vec<RawRule>,
}

#[derive(Debug, Deserialize)]
struct RawRule {
    id: String,
    #[serde(default = "default_version")]
    version: String,
    #[serde(default)]
    description: String,
    severity: String,
    confidence: String,
    matcher_type: String,
    #[serde(default)]
    pattern: String,
    #[serde(default)]
    keywords: Vec<String>,
    #[serde(default)]
    file_patterns: Vec<String>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    metadata: HashMap<String, String>,
    #[serde(default)]
    remediation: String,
    #[serde(default)]
    references: Vec<String>,
}

fn default_version() -> String {
    "1.0.0".to_string()
}

/// Parses `source` as a YAML rule document and builds a `RuleSet`.
///
/// Validates, per rule: non-empty id, id uniqueness within the document,
/// known `matcher_type`, known severity, known confidence, and (for `regex`
/// rules) a non-empty, compilable pattern. The first violation encountered
/// aborts the load; rules before it are discarded rather than partially
/// applied.
pub fn load_rules(source: &str) -> Result<RuleSet, ConfigError> {
    let document: RawDocument =
        serde_yml::from_str(source).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    let mut seen_ids = std::collections::HashSet::with_capacity(document.rules.len());
    let mut rule_set = RuleSet::new();

    for raw in document.rules {
        if raw.id.trim().is_empty() {
            return Err(ConfigError::EmptyRuleId(raw.id));
        }
        if !seen_ids.insert(raw.id.clone()) {
            return Err(ConfigError::DuplicateRuleId(raw.id));
        }

        let rule = validate_and_convert(raw)?;
        rule_set.add(rule);
    }

    Ok(rule_set)
}

fn validate_and_convert(raw: RawRule) -> Result<Rule, ConfigError> {
    if !Rule::KNOWN_MATCHER_TYPES.contains(&raw.matcher_type.as_str()) {
        return Err(ConfigError::UnknownMatcherType(raw.id, raw.matcher_type));
    }

    let severity = Severity::parse(&raw.severity)
        .ok_or_else(|| ConfigError::UnknownSeverity(raw.id.clone(), raw.severity.clone()))?;
    let confidence = Confidence::parse(&raw.confidence)
        .ok_or_else(|| ConfigError::UnknownConfidence(raw.id.clone(), raw.confidence.clone()))?;

    if raw.matcher_type == "regex" {
        if raw.pattern.trim().is_empty() {
            return Err(ConfigError::EmptyPattern(raw.id));
        }
        if let Err(e) = Regex::new(&raw.pattern) {
            return Err(ConfigError::InvalidPattern(raw.id, e));
        }
    }

    Ok(Rule {
        id: raw.id,
        version: raw.version,
        description: raw.description,
        severity,
        confidence,
        matcher_type: raw.matcher_type,
        pattern: raw.pattern,
        keywords: raw.keywords,
        file_patterns: raw.file_patterns,
        tags: raw.tags,
        metadata: raw.metadata,
        remediation: raw.remediation,
        references: raw.references,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_a_well_formed_regex_rule() {
        let yaml = r#"
rules:
  - id: SEC-900
    description: test rule
    severity: high
    confidence: medium
    matcher_type: regex
    pattern: "AKIA[0-9A-Z]{16}"
    keywords: ["akia"]
    tags: ["secrets"]
"#;
        let rules = load_rules(yaml).expect("should load");
        assert_eq!(rules.len(), 1);
        let rule = rules.by_id("SEC-900").unwrap();
        assert_eq!(rule.severity, Severity::High);
        assert_eq!(rule.confidence, Confidence::Medium);
    }

    #[test]
    fn entropy_rule_skips_pattern_check() {
        let yaml = r#"
rules:
  - id: SEC-901
    description: entropy rule
    severity: medium
    confidence: medium
    matcher_type: entropy
"#;
        let rules = load_rules(yaml).expect("should load");
        assert_eq!(rules.by_id("SEC-901").unwrap().pattern, "");
    }

    #[test]
    fn rejects_empty_id() {
        let yaml = r#"
rules:
  - id: ""
    description: bad
    severity: high
    confidence: high
    matcher_type: regex
    pattern: "abc"
"#;
        let err = load_rules(yaml).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyRuleId(_)));
    }

    #[test]
    fn rejects_duplicate_id() {
        let yaml = r#"
rules:
  - id: SEC-902
    description: first
    severity: high
    confidence: high
    matcher_type: regex
    pattern: "abc"
  - id: SEC-902
    description: second
    severity: high
    confidence: high
    matcher_type: regex
    pattern: "def"
"#;
        let err = load_rules(yaml).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateRuleId(_)));
    }

    #[test]
    fn rejects_unknown_matcher_type() {
        let yaml = r#"
rules:
  - id: SEC-903
    description: bad
    severity: high
    confidence: high
    matcher_type: bogus
"#;
        let err = load_rules(yaml).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownMatcherType(_, _)));
    }

    #[test]
    fn rejects_unknown_severity() {
        let yaml = r#"
rules:
  - id: SEC-904
    description: bad
    severity: apocalyptic
    confidence: high
    matcher_type: regex
    pattern: "abc"
"#;
        let err = load_rules(yaml).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownSeverity(_, _)));
    }

    #[test]
    fn rejects_uncompilable_pattern() {
        let yaml = r#"
rules:
  - id: SEC-905
    description: bad
    severity: high
    confidence: high
    matcher_type: regex
    pattern: "["
"#;
        let err = load_rules(yaml).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPattern(_, _)));
    }

    #[test]
    fn rejects_empty_pattern_on_regex_rule() {
        let yaml = r#"
rules:
  - id: SEC-906
    description: bad
    severity: high
    confidence: high
    matcher_type: regex
"#;
        let err = load_rules(yaml).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyPattern(_)));
    }
}
