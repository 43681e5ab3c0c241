//! errors.rs - Error types for the vigil-core library.
//!
//! Rule-loader failures and scan-time dispatch failures are distinct error
//! kinds with distinct propagation policies: a bad rule aborts the load, a
//! missing matcher aborts the current scan. Decode failures and regex
//! runtime failures are not represented here because they are never
//! surfaced to the caller (see `decode` and `matchers::regex_matcher`).
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// Raised while loading a rule set, naming the offending rule and the
/// violated constraint.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("rule '{0}' has an empty id")]
    EmptyRuleId(String),

    #[error("rule '{0}' declares unknown matcher_type '{1}'")]
    UnknownMatcherType(String, String),

    #[error("rule '{0}' declares unknown severity '{1}'")]
    UnknownSeverity(String, String),

    #[error("rule '{0}' declares unknown confidence '{1}'")]
    UnknownConfidence(String, String),

    #[error("rule '{0}' is a regex rule with an empty pattern")]
    EmptyPattern(String),

    #[error("rule '{0}' has an uncompilable pattern: {1}")]
    InvalidPattern(String, regex::Error),

    #[error("duplicate rule id '{0}'")]
    DuplicateRuleId(String),

    #[error("failed to parse rule set document: {0}")]
    ParseError(String),

    #[error("an I/O error occurred while loading rules: {0}")]
    IoError(#[from] std::io::Error),
}

/// Raised when `Engine::scan_file` encounters a rule whose `matcher_type`
/// has no registered implementation. This indicates a programming bug
/// (a rule set was constructed with a type the engine never registered),
/// not a data-quality issue.
#[derive(Error, Debug)]
#[error("no matcher registered for type '{matcher_type}' declared by rule '{rule_id}'")]
pub struct DispatchError {
    pub rule_id: String,
    pub matcher_type: String,
}
