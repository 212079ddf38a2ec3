//! Reference parser for `$NAME` and `${NAME...}` syntax
//!
//! Scans text for references and reports them with their byte spans.
//! A backslash immediately before `$` escapes that `$` only: it is kept as
//! written, backslash included, and scanning resumes at the next character,
//! so references nested inside the escaped text are still found.

use std::sync::LazyLock;

use envsubst_domain::{DefaultOperator, Reference};
use regex::{Captures, Regex};

/// `$NAME`, with an optional escaping backslash in group 1.
static SIMPLE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\\)?\$([A-Za-z0-9_]+)").expect("valid regex"));

/// `${NAME}`, `${NAME-default}`, `${NAME:-default}`.
///
/// Groups: 1 escape, 2 name, 3 operator, 4 default. The default runs to
/// the first `}` and must not be empty.
static BRACKETED_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\\)?\$\{([A-Za-z0-9_]+)(?:(:?-)([^}]+))?\}").expect("valid regex")
});

/// Collects the matches of `pattern` whose `$` is not escaped.
fn unescaped_captures<'h>(pattern: &Regex, input: &'h str) -> Vec<Captures<'h>> {
    let mut found = Vec::new();
    let mut start = 0;

    while let Some(caps) = pattern.captures_at(input, start) {
        match (caps.get(0), caps.get(1)) {
            // Group 1 ends on the escaped `$`; resume just past it.
            (_, Some(escape)) => start = escape.end() + 1,
            (Some(whole), None) => {
                start = whole.end();
                found.push(caps);
            }
            (None, None) => break,
        }
    }

    found
}

/// Parses a string and extracts all unescaped `$NAME` references.
///
/// # Examples
///
/// ```
/// use envsubst_application::substitution::parser::parse_simple;
///
/// let refs = parse_simple(r"$HOME/bin:\$PATH:$1");
/// assert_eq!(refs.len(), 2);
/// assert_eq!(refs[0].name, "HOME");
/// assert_eq!(refs[1].name, "1");
/// ```
#[must_use]
pub fn parse_simple(input: &str) -> Vec<Reference> {
    unescaped_captures(&SIMPLE_PATTERN, input)
        .into_iter()
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let name = caps.get(2)?;
            Some(Reference::simple(name.as_str(), whole.range()))
        })
        .collect()
}

/// Parses a string and extracts all unescaped bracketed references.
///
/// Defaults are returned raw; any `$NAME` inside them is left for the
/// caller to resolve. Nested braces are not supported.
///
/// # Panics
///
/// Panics if the pattern captures an operator other than `-` or `:-`,
/// which would mean the pattern and [`DefaultOperator`] disagree.
#[must_use]
pub fn parse_bracketed(input: &str) -> Vec<Reference> {
    unescaped_captures(&BRACKETED_PATTERN, input)
        .into_iter()
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let name = caps.get(2)?;
            let reference = Reference::bracketed(name.as_str(), whole.range());

            match (caps.get(3), caps.get(4)) {
                (Some(op), Some(default)) => {
                    let operator = match op.as_str().parse::<DefaultOperator>() {
                        Ok(operator) => operator,
                        Err(e) => unreachable!("bracketed pattern captured {e}"),
                    };
                    Some(reference.with_default(operator, default.as_str()))
                }
                _ => Some(reference),
            }
        })
        .collect()
}

/// Extracts references of both forms, ordered by position.
///
/// Simple references inside a bracketed default are listed after the
/// bracketed reference that contains them.
#[must_use]
pub fn parse_references(input: &str) -> Vec<Reference> {
    let mut references = parse_bracketed(input);
    references.extend(parse_simple(input));
    references.sort_by_key(|r| r.span.start);
    references
}

/// Returns true if the input contains any unescaped reference.
#[must_use]
pub fn has_references(input: &str) -> bool {
    input.contains('$') && !parse_references(input).is_empty()
}

/// Extracts just the variable names, in order of appearance.
#[must_use]
pub fn extract_variable_names(input: &str) -> Vec<String> {
    parse_references(input).into_iter().map(|r| r.name).collect()
}
