// vigil-entropy/src/tokenize/mod.rs
//! Candidate extraction: four independent tokenizers that each look for a
//! different shape of embedded secret on a single line.

extern crate alloc;
use alloc::string::String;
use alloc::vec::Vec;

/// Minimum length (in chars) for a quoted-value candidate to be considered.
pub const MIN_CANDIDATE_LEN: usize = 12;

/// A candidate substring pulled out of a line, with its 1-based column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub column: usize,
    pub text: String,
}

/// Runs all four tokenizers over `line` and returns the deduplicated set of
/// candidates, keyed by `(column, text)`, in tokenizer-then-position order.
pub fn extract_candidates(line: &str) -> Vec<Candidate> {
    let mut seen: Vec<(usize, String)> = Vec::new();
    let mut out: Vec<Candidate> = Vec::new();

    let mut push = |column: usize, text: String, seen: &mut Vec<(usize, String)>, out: &mut Vec<Candidate>| {
        let key = (column, text.clone());
        if !seen.contains(&key) {
            seen.push(key);
            out.push(Candidate { column, text });
        }
    };

    for c in quoted_candidates(line) {
        push(c.column, c.text, &mut seen, &mut out);
    }
    for c in assignment_candidates(line) {
        push(c.column, c.text, &mut seen, &mut out);
    }
    for c in base64_blob_candidates(line) {
        push(c.column, c.text, &mut seen, &mut out);
    }
    for c in hex_blob_candidates(line) {
        push(c.column, c.text, &mut seen, &mut out);
    }

    out
}

/// Finds balanced `'...'` and `"..."` pairs and yields their inner value when
/// long enough to be interesting.
fn quoted_candidates(line: &str) -> Vec<Candidate> {
    let mut out = Vec::new();
    let chars: Vec<char> = line.chars().collect();

    for &quote in &['\'', '"'] {
        let mut i = 0usize;
        while i < chars.len() {
            if chars[i] == quote {
                let open = i;
                if let Some(close_rel) = chars[open + 1..].iter().position(|&c| c == quote) {
                    let close = open + 1 + close_rel;
                    let inner: String = chars[open + 1..close].iter().collect();
                    if inner.chars().count() >= MIN_CANDIDATE_LEN {
                        out.push(Candidate {
                            column: open + 2, // column of first char inside the quotes
                            text: inner,
                        });
                    }
                    i = close + 1;
                    continue;
                } else {
                    break;
                }
            }
            i += 1;
        }
    }

    out
}

fn is_assignment_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '/' | '=' | '.' | '_' | '-')
}

/// Walks the line looking for `=`, `:`, or `=>` assignment operators (but not
/// `==`, `!=`, `<=`, `>=`, or `::`), and yields the unquoted token that follows.
fn assignment_candidates(line: &str) -> Vec<Candidate> {
    let mut out = Vec::new();
    let chars: Vec<char> = line.chars().collect();
    let mut i = 0usize;

    while i < chars.len() {
        let c = chars[i];
        if c != '=' && c != ':' {
            i += 1;
            continue;
        }

        let prev = if i > 0 { Some(chars[i - 1]) } else { None };
        let next = chars.get(i + 1).copied();

        // Exclude ==, !=, <=, >=, :: by checking neighbouring operator chars.
        if matches!(prev, Some('=') | Some('!') | Some('<') | Some('>') | Some(':')) {
            i += 1;
            continue;
        }
        if c == '=' && next == Some('=') {
            i += 2;
            continue;
        }
        if c == ':' && next == Some(':') {
            i += 2;
            continue;
        }

        // Consume a possible `=>` as a single operator.
        let mut cursor = i + 1;
        if c == '=' && chars.get(cursor) == Some(&'>') {
            cursor += 1;
        }

        // Skip whitespace after the operator.
        while cursor < chars.len() && chars[cursor].is_whitespace() {
            cursor += 1;
        }

        if cursor >= chars.len() {
            i += 1;
            continue;
        }
        if chars[cursor] == '\'' || chars[cursor] == '"' {
            // Quoted values are the quoted tokenizer's business.
            i += 1;
            continue;
        }

        let token_start = cursor;
        while cursor < chars.len() && is_assignment_token_char(chars[cursor]) {
            cursor += 1;
        }
        let token: String = chars[token_start..cursor].iter().collect();
        if token.chars().count() >= 16 {
            out.push(Candidate {
                column: token_start + 1,
                text: token,
            });
        }

        i = cursor.max(i + 1);
    }

    out
}

fn base64_blob_candidates(line: &str) -> Vec<Candidate> {
    scan_runs(line, 30, |c| {
        c.is_ascii_alphanumeric() || matches!(c, '+' | '/' | '=')
    })
}

fn hex_blob_candidates(line: &str) -> Vec<Candidate> {
    scan_runs(line, 32, |c| c.is_ascii_hexdigit())
}

/// Scans `line` for maximal runs of chars matching `pred`, yielding those of
/// at least `min_len` chars as candidates.
fn scan_runs(line: &str, min_len: usize, pred: impl Fn(char) -> bool) -> Vec<Candidate> {
    let mut out = Vec::new();
    let chars: Vec<char> = line.chars().collect();
    let mut i = 0usize;

    while i < chars.len() {
        if pred(chars[i]) {
            let start = i;
            while i < chars.len() && pred(chars[i]) {
                i += 1;
            }
            if i - start >= min_len {
                let text: String = chars[start..i].iter().collect();
                out.push(Candidate {
                    column: start + 1,
                    text,
                });
            }
        } else {
            i += 1;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_extracts_inner_value() {
        let cands = quoted_candidates("token = \"xK9mR3pZ7wL2jY5nQ8vB4\"");
        assert_eq!(cands.len(), 1);
        assert_eq!(cands[0].text, "xK9mR3pZ7wL2jY5nQ8vB4");
    }

    #[test]
    fn assignment_skips_equality_operators() {
        let cands = assignment_candidates("if a == bSomeLongTokenValueHere123 { }");
        assert!(cands.is_empty());
    }

    #[test]
    fn assignment_extracts_rhs_token() {
        let cands = assignment_candidates("secret_key = xK9mR3pZ7wL2jY5nQ8vB4fH1cT6gD0sA");
        assert_eq!(cands.len(), 1);
        assert_eq!(cands[0].text, "xK9mR3pZ7wL2jY5nQ8vB4fH1cT6gD0sA");
    }

    #[test]
    fn base64_blob_requires_min_length() {
        let cands = base64_blob_candidates("short+/==");
        assert!(cands.is_empty());
    }

    #[test]
    fn hex_blob_detects_long_run() {
        let hex = "a".repeat(40);
        let line = alloc::format!("value={}", hex);
        let cands = hex_blob_candidates(&line);
        assert_eq!(cands.len(), 1);
    }

    #[test]
    fn dedup_merges_overlapping_tokenizers() {
        let cands = extract_candidates("key = \"xK9mR3pZ7wL2jY5nQ8vB4\"");
        // Quoted tokenizer finds the value; assignment tokenizer bails out on the quote.
        assert_eq!(cands.len(), 1);
    }
}
