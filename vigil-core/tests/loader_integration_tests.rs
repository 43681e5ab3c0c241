// vigil-core/tests/loader_integration_tests.rs
use std::io::Write;

use tempfile::NamedTempFile;
use vigil_core::loader::load_rules;
use vigil_core::{ConfigError, Confidence, Severity};

#[test]
fn load_rules_from_file_on_disk() -> anyhow::Result<()> {
    let yaml_content = r#"
rules:
  - id: SEC-910
    description: "Example internal token"
    severity: high
    confidence: medium
    matcher_type: regex
    pattern: "internal_[A-Za-z0-9]{16}"
    keywords: ["internal_"]
    tags: ["secrets"]
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;

    let source = std::fs::read_to_string(file.path())?;
    let rules = load_rules(&source)?;

    assert_eq!(rules.len(), 1);
    let rule = rules.by_id("SEC-910").unwrap();
    assert_eq!(rule.severity, Severity::High);
    assert_eq!(rule.confidence, Confidence::Medium);
    Ok(())
}

#[test]
fn load_rules_rejects_document_with_bad_severity() {
    let yaml_content = r#"
rules:
  - id: SEC-911
    description: "bad rule"
    severity: catastrophic
    confidence: high
    matcher_type: regex
    pattern: "abc"
"#;
    let err = load_rules(yaml_content).unwrap_err();
    assert!(matches!(err, ConfigError::UnknownSeverity(id, _) if id == "SEC-911"));
}

#[test]
fn load_rules_merges_multiple_entropy_and_regex_rules() -> anyhow::Result<()> {
    let yaml_content = r#"
rules:
  - id: SEC-912
    description: "Example regex rule"
    severity: high
    confidence: high
    matcher_type: regex
    pattern: "EXAMPLE_[0-9]{8}"
  - id: SEC-913
    description: "Example entropy rule"
    severity: medium
    confidence: medium
    matcher_type: entropy
    metadata:
      entropy_threshold: "5.5"
      require_context: "true"
"#;
    let rules = load_rules(yaml_content)?;
    assert_eq!(rules.len(), 2);
    let entropy_rule = rules.by_id("SEC-913").unwrap();
    assert_eq!(entropy_rule.entropy_threshold(5.0), 5.5);
    assert!(entropy_rule.require_context());
    Ok(())
}
