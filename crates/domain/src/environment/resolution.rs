//! Resolution context for variable substitution
//!
//! Pairs an environment lookup with a positional-argument lookup.

use std::fmt;

use super::lookup::{ArgLookup, EnvLookup};
use super::variable::{ResolvedVariable, VariableScope};
use crate::reference::{is_positional_name, positional_index};

/// Lookup that never has a value.
struct Unset;

impl EnvLookup for Unset {
    fn lookup(&self, _name: &str) -> Option<String> {
        None
    }
}

impl ArgLookup for Unset {
    fn arg(&self, _index: usize) -> Option<String> {
        None
    }
}

/// Holds the variable sources for resolution.
///
/// Names made only of ASCII digits are positional and resolve against the
/// argument list; every other name resolves against the environment.
/// The context only borrows its sources and never writes to them.
#[derive(Clone, Copy)]
pub struct ResolutionContext<'a> {
    env: &'a dyn EnvLookup,
    args: &'a dyn ArgLookup,
}

impl<'a> ResolutionContext<'a> {
    /// Creates a context over the given sources.
    #[must_use]
    pub fn new(env: &'a dyn EnvLookup, args: &'a dyn ArgLookup) -> Self {
        Self { env, args }
    }

    /// Creates a context with environment variables only.
    #[must_use]
    pub fn from_env(env: &'a dyn EnvLookup) -> Self {
        Self { env, args: &Unset }
    }

    /// Creates a context in which nothing resolves.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            env: &Unset,
            args: &Unset,
        }
    }

    /// Resolves a variable name to its value and scope.
    /// Returns None if the name is unset or the index is out of range.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<ResolvedVariable> {
        if is_positional_name(name) {
            let value = positional_index(name).and_then(|index| self.args.arg(index))?;
            return Some(ResolvedVariable::new(name, value, VariableScope::Positional));
        }

        self.env
            .lookup(name)
            .map(|value| ResolvedVariable::new(name, value, VariableScope::Environment))
    }

    /// Resolves a variable name to just its value.
    #[must_use]
    pub fn resolve_value(&self, name: &str) -> Option<String> {
        self.resolve(name).map(|r| r.value)
    }
}

impl Default for ResolutionContext<'_> {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for ResolutionContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolutionContext").finish_non_exhaustive()
    }
}
