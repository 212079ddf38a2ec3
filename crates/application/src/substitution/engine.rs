//! Variable substitution engine
//!
//! Runs two ordered passes over the text:
//!
//! 1. every unescaped `$NAME` is replaced, including those sitting inside
//!    what will later be read as a bracketed default;
//! 2. every unescaped `${NAME...}` in the pass-1 output is replaced,
//!    falling back to its default according to the operator.
//!
//! A default is scanned for `$NAME` once more before it is used. Bracketed
//! forms inside a default are never expanded.

use envsubst_domain::{ArgLookup, EnvLookup, Reference, ResolutionContext, ResolvedVariable};

use super::parser::{parse_bracketed, parse_references, parse_simple};

/// Result of substituting a piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionResult {
    /// The text with every reference replaced.
    pub resolved: String,

    /// Variables that had a value, in resolution order.
    pub resolved_variables: Vec<ResolvedVariable>,

    /// Names that had no value and were replaced with the empty string.
    pub unresolved: Vec<String>,

    /// Names whose bracketed default was used.
    pub defaulted: Vec<String>,

    /// Whether no reference fell back to the empty string.
    pub is_complete: bool,
}

impl SubstitutionResult {
    /// Creates a result for input with no references.
    #[must_use]
    pub fn no_references(input: &str) -> Self {
        Self {
            resolved: input.to_string(),
            resolved_variables: Vec::new(),
            unresolved: Vec::new(),
            defaulted: Vec::new(),
            is_complete: true,
        }
    }

    /// Returns the count of resolved variables.
    #[must_use]
    pub fn resolved_count(&self) -> usize {
        self.resolved_variables.len()
    }

    /// Returns the count of unresolved variables.
    #[must_use]
    pub fn unresolved_count(&self) -> usize {
        self.unresolved.len()
    }
}

#[derive(Default)]
struct Report {
    resolved: Vec<ResolvedVariable>,
    unresolved: Vec<String>,
    defaulted: Vec<String>,
}

/// The substitution engine.
///
/// Holds only a borrowed [`ResolutionContext`], so one instance can be
/// shared across threads as long as its sources are.
#[derive(Debug, Clone, Copy, Default)]
pub struct Substitutor<'a> {
    context: ResolutionContext<'a>,
}

impl<'a> Substitutor<'a> {
    /// Creates a new substitutor over the given context.
    #[must_use]
    pub const fn new(context: ResolutionContext<'a>) -> Self {
        Self { context }
    }

    /// Returns the resolution context.
    #[must_use]
    pub const fn context(&self) -> &ResolutionContext<'a> {
        &self.context
    }

    /// Replaces every reference in `input` and returns the new text.
    ///
    /// Never fails: unknown names become empty strings and anything that
    /// does not parse as a reference is kept as literal text.
    #[must_use]
    pub fn substitute(&self, input: &str) -> String {
        self.resolve(input).resolved
    }

    /// Replaces every reference in `input`, recording what was resolved.
    #[must_use]
    pub fn resolve(&self, input: &str) -> SubstitutionResult {
        if !input.contains('$') {
            return SubstitutionResult::no_references(input);
        }

        let mut report = Report::default();
        let simple = self.expand_simple(input, &mut report);
        let resolved = self.expand_bracketed(&simple, &mut report);

        SubstitutionResult {
            resolved,
            resolved_variables: report.resolved,
            is_complete: report.unresolved.is_empty(),
            unresolved: report.unresolved,
            defaulted: report.defaulted,
        }
    }

    /// Lists names in `input` that would be replaced with an empty string.
    ///
    /// References carrying a default are never reported. The result is
    /// sorted and deduplicated.
    #[must_use]
    pub fn find_unresolved(&self, input: &str) -> Vec<String> {
        let mut unresolved: Vec<String> = parse_references(input)
            .into_iter()
            .filter(|r| r.default.is_none() && self.context.resolve(&r.name).is_none())
            .map(|r| r.name)
            .collect();

        unresolved.sort();
        unresolved.dedup();
        unresolved
    }

    fn expand_simple(&self, input: &str, report: &mut Report) -> String {
        let references = parse_simple(input);
        if references.is_empty() {
            return input.to_string();
        }

        let mut result = String::with_capacity(input.len());
        let mut last_end = 0;

        for reference in &references {
            result.push_str(&input[last_end..reference.span.start]);
            result.push_str(&self.value_or_empty(&reference.name, report));
            last_end = reference.span.end;
        }

        result.push_str(&input[last_end..]);
        result
    }

    fn expand_bracketed(&self, input: &str, report: &mut Report) -> String {
        let references = parse_bracketed(input);
        if references.is_empty() {
            return input.to_string();
        }

        let mut result = String::with_capacity(input.len());
        let mut last_end = 0;

        for reference in &references {
            result.push_str(&input[last_end..reference.span.start]);
            result.push_str(&self.bracketed_value(reference, report));
            last_end = reference.span.end;
        }

        result.push_str(&input[last_end..]);
        result
    }

    fn bracketed_value(&self, reference: &Reference, report: &mut Report) -> String {
        let (Some(operator), Some(default)) = (reference.operator, &reference.default) else {
            return self.value_or_empty(&reference.name, report);
        };

        match self.context.resolve(&reference.name) {
            Some(var) if !operator.uses_default(Some(var.value.as_str())) => {
                let value = var.value.clone();
                report.resolved.push(var);
                value
            }
            _ => {
                report.defaulted.push(reference.name.clone());
                self.expand_simple(default, report)
            }
        }
    }

    fn value_or_empty(&self, name: &str, report: &mut Report) -> String {
        if let Some(var) = self.context.resolve(name) {
            let value = var.value.clone();
            report.resolved.push(var);
            value
        } else {
            report.unresolved.push(name.to_string());
            String::new()
        }
    }
}

/// Substitutes `$NAME` and `${NAME...}` references in `text`.
///
/// Digits-only names index into `args`; all other names are looked up in
/// `env`. Neither source is modified.
#[must_use]
pub fn substitute(text: &str, env: &impl EnvLookup, args: &impl ArgLookup) -> String {
    Substitutor::new(ResolutionContext::new(env, args)).substitute(text)
}
