// vigil-entropy/src/filter/mod.rs
//! Cheap shape checks that reject candidates before they reach entropy scoring.
//!
//! The filter is a disjunction: if any check fires, the candidate is rejected.
//! Checks are ordered roughly cheapest-first; none of them look at entropy.

/// Returns true if `candidate` has the shape of something that is not a secret.
pub fn is_false_positive(candidate: &str) -> bool {
    is_url_prefixed(candidate)
        || is_all_lowercase_word(candidate)
        || is_path_shaped(candidate)
        || is_known_hash_length(candidate)
        || is_version_shaped(candidate)
        || is_camel_or_pascal_case(candidate)
        || is_mostly_digits(candidate)
        || is_constant_name_shaped(candidate)
}

fn is_url_prefixed(s: &str) -> bool {
    let lower_prefix_matches = |prefix: &str| {
        s.len() >= prefix.len() && s[..prefix.len()].eq_ignore_ascii_case(prefix)
    };
    lower_prefix_matches("http://") || lower_prefix_matches("https://")
}

fn is_all_lowercase_word(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_lowercase())
}

fn is_path_shaped(s: &str) -> bool {
    let has_slash = s.contains('/') || s.contains('\\');
    let has_b64_marker = s.contains('+') || s.contains('=');
    has_slash && !has_b64_marker
}

fn is_known_hash_length(s: &str) -> bool {
    matches!(s.len(), 40 | 64 | 128) && s.chars().all(|c| c.is_ascii_hexdigit())
}

fn is_version_shaped(s: &str) -> bool {
    let mut chars = s.chars().peekable();
    if let Some(&c) = chars.peek() {
        if c == 'v' || c == 'V' {
            chars.next();
        }
    }
    let Some(first) = chars.next() else { return false };
    if !first.is_ascii_digit() {
        return false;
    }
    chars.any(|c| c == '.')
}

fn is_camel_or_pascal_case(s: &str) -> bool {
    if s.chars().count() < 4 {
        return false;
    }
    if !s.chars().all(|c| c.is_ascii_alphanumeric()) {
        return false;
    }

    let mut has_transition = false;
    let mut prev: Option<char> = None;
    let mut digits = 0usize;
    let mut total = 0usize;
    for c in s.chars() {
        total += 1;
        if c.is_ascii_digit() {
            digits += 1;
        }
        if let Some(p) = prev {
            if p.is_ascii_lowercase() && c.is_ascii_uppercase() {
                has_transition = true;
            }
        }
        prev = Some(c);
    }

    let digit_ratio = digits as f64 / total as f64;
    has_transition && digit_ratio <= 0.2
}

fn is_mostly_digits(s: &str) -> bool {
    let total = s.chars().count();
    if total == 0 {
        return false;
    }
    let digits = s.chars().filter(|c| c.is_ascii_digit()).count();
    (digits as f64 / total as f64) >= 0.7
}

fn is_constant_name_shaped(s: &str) -> bool {
    s.chars().count() >= 4 && s.chars().all(|c| c.is_ascii_uppercase())
}
