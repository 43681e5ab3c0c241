// vigil-entropy/src/engine/mod.rs
extern crate alloc;
use alloc::string::String;
use alloc::vec::Vec;

use crate::entropy::calculate_shannon_entropy;
use crate::filter::is_false_positive;
use crate::hints::HintScanner;
use crate::tokenize::extract_candidates;
use crate::EntropyScore;

/// Subtracted from the configured threshold on lines where a hint keyword
/// is present, making the scan more sensitive near suggestive context.
pub const CONTEXT_BOOST_REDUCTION: f64 = 0.5;

/// A candidate string whose Shannon entropy met or exceeded the effective
/// threshold for the line it was found on.
#[derive(Debug, Clone, PartialEq)]
pub struct EntropyMatch {
    /// 1-based line number within the scanned text.
    pub line: usize,
    /// 1-based column of the first character of `text` within its line.
    pub column: usize,
    pub text: String,
    pub entropy: EntropyScore,
    /// The threshold the entropy was compared against, after any context boost.
    pub threshold_used: EntropyScore,
}

/// Scans text line by line for high-entropy candidate substrings.
///
/// For each line: hint keywords lower the effective threshold, four
/// tokenizers extract candidate substrings, a shape filter discards
/// obvious non-secrets, and the survivors are scored by Shannon entropy.
#[derive(Debug)]
pub struct EntropyEngine {
    threshold: f64,
    require_context: bool,
    hint_scanner: HintScanner,
}

impl EntropyEngine {
    /// Initializes a new engine with a specific entropy threshold, in bits
    /// per character. Lines without a hint keyword are skipped entirely
    /// when `require_context` is set.
    pub fn new(threshold: f64, require_context: bool) -> Self {
        Self {
            threshold,
            require_context,
            hint_scanner: HintScanner::new(),
        }
    }

    /// Scans `text`, which may span multiple lines, for high-entropy
    /// candidates. Lines are split on `\n`; a trailing `\r` is trimmed.
    pub fn scan(&self, text: &str) -> Vec<EntropyMatch> {
        let mut matches = Vec::new();

        for (idx, raw_line) in text.split('\n').enumerate() {
            let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);
            self.scan_line(line, idx + 1, &mut matches);
        }

        matches
    }

    fn scan_line(&self, line: &str, line_number: usize, matches: &mut Vec<EntropyMatch>) {
        if line.is_empty() {
            return;
        }

        let lowered = line.to_lowercase();
        let has_context = self.hint_scanner.has_context(&lowered);

        if self.require_context && !has_context {
            return;
        }

        let effective_threshold = if has_context {
            self.threshold - CONTEXT_BOOST_REDUCTION
        } else {
            self.threshold
        };

        for candidate in extract_candidates(line) {
            if is_false_positive(&candidate.text) {
                continue;
            }

            let entropy = calculate_shannon_entropy(&candidate.text);
            if entropy >= effective_threshold {
                matches.push(EntropyMatch {
                    line: line_number,
                    column: candidate.column,
                    text: candidate.text,
                    entropy,
                    threshold_used: effective_threshold,
                });
            }
        }
    }
}
