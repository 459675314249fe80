//! Query Assembly
//!
//! Validates the domain once, then compiles fragments from every present field
//! in a fixed order and joins them into the final query string. The ordering is
//! an explicit sequence of compiler calls, never map iteration, so the output
//! is a pure function of the input: the same constraints always yield a
//! byte-identical `CompiledQuery`.

use super::operators::{self, Fragment};
use super::types::{CompiledQuery, QueryError, SearchConstraints};
use regex::Regex;
use std::sync::OnceLock;

/// Host-like syntax: alnum/hyphen labels separated by dots, ending in an
/// alphabetic TLD-like suffix of at least two characters.
fn domain_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^([A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?\.)+[A-Za-z]{2,}$").unwrap()
    })
}

/// Validates the single structural precondition of the compiler.
pub fn validate_domain(domain: &str) -> Result<&str, QueryError> {
    let trimmed = domain.trim();
    if trimmed.is_empty() || !domain_pattern().is_match(trimmed) {
        return Err(QueryError::InvalidDomain {
            domain: domain.to_string(),
        });
    }
    Ok(trimmed)
}

/// Joins an ordered list of fragments into the final `CompiledQuery`.
fn assemble(fragments: Vec<Fragment>) -> CompiledQuery {
    let query = fragments
        .iter()
        .map(|f| f.query.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let operators = fragments.iter().map(|f| f.operator.clone()).collect();
    let description = fragments
        .iter()
        .map(|f| f.description.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    CompiledQuery {
        query,
        operators,
        description,
    }
}

/// Compiles the trivial one-field query: `site:<domain> <keyword>`.
///
/// The keyword rides along in the query string but the site restriction is
/// the only operator, so the label list stays a single entry. A blank
/// keyword degrades to a site-only query rather than erroring.
pub fn compile_basic_query(domain: &str, keyword: &str) -> Result<CompiledQuery, QueryError> {
    let domain = validate_domain(domain)?;
    let site = operators::site_restriction(domain);

    let keyword = keyword.trim();
    let (query, description) = if keyword.is_empty() {
        (site.query, site.description)
    } else {
        (
            format!("{} {}", site.query, keyword),
            format!("{}, matching: {}", site.description, keyword),
        )
    };

    Ok(CompiledQuery {
        query,
        operators: vec![site.operator],
        description,
    })
}

/// Compiles the full seven-field query.
///
/// The site restriction is compiled unconditionally and always comes first;
/// the optional fields follow in a fixed order: all-of terms, any-of terms,
/// exact phrase, include terms, exclude terms, file type. Fields that
/// normalize to nothing contribute nothing. Worst case is a site-only query,
/// which is a valid outcome, not an error.
pub fn compile_advanced_query(
    constraints: &SearchConstraints,
) -> Result<CompiledQuery, QueryError> {
    let domain = validate_domain(&constraints.domain)?;

    let mut fragments = vec![operators::site_restriction(domain)];
    let optional = [
        operators::all_of(constraints.all_terms.as_deref()),
        operators::any_of(constraints.any_terms.as_deref()),
        operators::exact_phrase(constraints.exact_phrase.as_deref()),
        operators::include(constraints.include_terms.as_deref()),
        operators::exclude(constraints.exclude_terms.as_deref()),
        operators::file_type(constraints.file_type.as_deref()),
    ];
    fragments.extend(optional.into_iter().flatten());

    Ok(assemble(fragments))
}
