//! Per-Field Operator Compilers
//!
//! One pure function per field kind. Each takes the field's raw value and
//! returns `Some(Fragment)` when the field contributes to the query, or `None`
//! when the input normalizes to zero tokens / an empty phrase. Composition
//! never fails: a blank field contributes nothing instead of erroring.

use super::tokenizer::tokenize_terms;

/// One field's contribution to the compiled query.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    /// The piece of the upstream query string.
    pub query: String,
    /// Human-readable operator descriptor, shown to users for transparency.
    pub operator: String,
    /// Prose summary joined into `CompiledQuery::description`.
    pub description: String,
}

impl Fragment {
    fn new(query: String, description: String) -> Self {
        // The operator label mirrors the query fragment verbatim.
        let operator = query.clone();
        Self {
            query,
            operator,
            description,
        }
    }
}

/// `site:<domain>` — the mandatory fragment scoping all results to one domain.
pub fn site_restriction(domain: &str) -> Fragment {
    Fragment::new(
        format!("site:{}", domain),
        format!("results from {}", domain),
    )
}

/// `+<token>` per token: every token is mandatory (AND semantics).
pub fn all_of(raw: Option<&str>) -> Option<Fragment> {
    let tokens = tokenize_terms(raw);
    if tokens.is_empty() {
        return None;
    }
    let query = tokens
        .iter()
        .map(|t| format!("+{}", t))
        .collect::<Vec<_>>()
        .join(" ");
    Some(Fragment::new(
        query,
        format!("all of the words: {}", tokens.join(", ")),
    ))
}

/// `(<t1> OR <t2> ...)`: at least one token must appear (OR semantics).
pub fn any_of(raw: Option<&str>) -> Option<Fragment> {
    let tokens = tokenize_terms(raw);
    if tokens.is_empty() {
        return None;
    }
    Some(Fragment::new(
        format!("({})", tokens.join(" OR ")),
        format!("any of the words: {}", tokens.join(", ")),
    ))
}

/// `"<phrase>"`: the phrase is matched verbatim after trimming.
///
/// Embedded double quotes are stripped before wrapping; leaving them in place
/// would make the compiled query ambiguous upstream. Internal whitespace is
/// preserved exactly as typed.
pub fn exact_phrase(raw: Option<&str>) -> Option<Fragment> {
    let phrase = raw.unwrap_or_default().trim().replace('"', "");
    if phrase.is_empty() {
        return None;
    }
    Some(Fragment::new(
        format!("\"{}\"", phrase),
        format!("the exact phrase \"{}\"", phrase),
    ))
}

/// Bare tokens, space-joined: soft inclusion with no operator prefix.
pub fn include(raw: Option<&str>) -> Option<Fragment> {
    let tokens = tokenize_terms(raw);
    if tokens.is_empty() {
        return None;
    }
    Some(Fragment::new(
        tokens.join(" "),
        format!("including: {}", tokens.join(", ")),
    ))
}

/// `-<token>` per token: none of the tokens may appear (NOT semantics).
pub fn exclude(raw: Option<&str>) -> Option<Fragment> {
    let tokens = tokenize_terms(raw);
    if tokens.is_empty() {
        return None;
    }
    let query = tokens
        .iter()
        .map(|t| format!("-{}", t))
        .collect::<Vec<_>>()
        .join(" ");
    Some(Fragment::new(
        query,
        format!("excluding: {}", tokens.join(", ")),
    ))
}

/// `filetype:<value>`: single value, trimmed, never tokenized.
pub fn file_type(raw: Option<&str>) -> Option<Fragment> {
    let value = raw.unwrap_or_default().trim();
    if value.is_empty() {
        return None;
    }
    Some(Fragment::new(
        format!("filetype:{}", value),
        format!("file type {}", value),
    ))
}
