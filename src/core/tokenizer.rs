use regex::Regex;
use std::sync::OnceLock;

/// Literal substitutions applied to every token, in order
const ALIASES: &[(&str, &str)] = &[("node.js", "node"), ("javascript", "js")];

fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[a-z0-9.+\-#]+").expect("token pattern is valid"))
}

/// Tokenize and normalize raw text
///
/// Token candidates are runs of lowercase alphanumerics plus `. + - #`.
/// Each candidate has trailing dots removed, aliases substituted and at most
/// one suffix stripped (`ing`, then `ed`, then `ment`). Order and duplicates
/// are preserved.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();

    token_pattern()
        .find_iter(&lowered)
        .filter_map(|m| normalize_candidate(m.as_str()))
        .collect()
}

/// Normalize a single term, keeping the first token it produces
///
/// Falls back to the original term when tokenization yields nothing.
pub fn normalize_term(term: &str) -> String {
    tokenize(term)
        .into_iter()
        .next()
        .unwrap_or_else(|| term.to_string())
}

fn normalize_candidate(candidate: &str) -> Option<String> {
    let trimmed = candidate.trim_end_matches('.');
    if trimmed.is_empty() {
        return None;
    }

    let mut token = trimmed.to_string();
    for &(from, to) in ALIASES {
        if token.contains(from) {
            token = token.replace(from, to);
        }
    }

    Some(strip_suffix(token))
}

/// Strip at most one inflection suffix; rules are tried in fixed order
fn strip_suffix(token: String) -> String {
    let len = token.len();

    if len > 5 && token.ends_with("ing") {
        token[..len - 3].to_string()
    } else if len > 4 && token.ends_with("ed") {
        token[..len - 2].to_string()
    } else if len > 6 && token.ends_with("ment") {
        token[..len - 4].to_string()
    } else {
        token
    }
}
