// vigil-entropy/src/hints/mod.rs
use core::fmt;
use daachorse::DoubleArrayAhoCorasick;

extern crate alloc;
use alloc::vec;

/// Secret-suggestive keywords. A line containing any of these (case-insensitively)
/// is considered to have "context", which lowers the effective entropy threshold.
pub const HINT_KEYWORDS: &[&str] = &[
    "password",
    "secret",
    "key",
    "token",
    "credential",
    "api_key",
    "private",
];

/// Detects whether a lowercased line contains any hint keyword as a substring.
pub struct HintScanner {
    automaton: DoubleArrayAhoCorasick<usize>,
}

impl fmt::Debug for HintScanner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HintScanner")
            .field("automaton", &"<DoubleArrayAhoCorasick>")
            .finish()
    }
}

impl Default for HintScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl HintScanner {
    /// Builds a scanner over the fixed `HINT_KEYWORDS` set.
    pub fn new() -> Self {
        let automaton = DoubleArrayAhoCorasick::new(vec![
            "password", "secret", "key", "token", "credential", "api_key", "private",
        ])
        .expect("hint keyword set must build into an Aho-Corasick automaton");
        Self { automaton }
    }

    /// Returns true if `lowercased_line` contains any hint keyword, anywhere in the line.
    ///
    /// The caller is expected to have already lowercased the input; matching is
    /// plain substring containment, with no word-boundary requirement.
    pub fn has_context(&self, lowercased_line: &str) -> bool {
        self.automaton.find_iter(lowercased_line).next().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_known_hint() {
        let scanner = HintScanner::new();
        assert!(scanner.has_context("aws_secret_access_key = xyz"));
        assert!(scanner.has_context("my_password is hidden"));
    }

    #[test]
    fn no_hint_in_plain_line() {
        let scanner = HintScanner::new();
        assert!(!scanner.has_context("just a normal log line"));
    }
}
