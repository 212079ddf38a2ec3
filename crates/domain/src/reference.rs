//! Variable references found in text
//!
//! A reference is either the simple form `$NAME` or the bracketed form
//! `${NAME}`, `${NAME-default}`, `${NAME:-default}`.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use crate::error::{DomainError, DomainResult};

/// Syntactic form of a reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceKind {
    /// `$NAME`
    Simple,
    /// `${NAME...}`
    Bracketed,
}

/// Fallback operator of a bracketed reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefaultOperator {
    /// `-`: use the default only when the name is unset.
    UseIfUnset,
    /// `:-`: use the default when the name is unset or empty.
    UseIfUnsetOrEmpty,
}

impl DefaultOperator {
    /// Returns the operator as written in text.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::UseIfUnset => "-",
            Self::UseIfUnsetOrEmpty => ":-",
        }
    }

    /// Returns true if this operator would fall back to the default for `value`.
    ///
    /// A value that is present but empty counts as set for
    /// [`UseIfUnset`](Self::UseIfUnset) and as unset for
    /// [`UseIfUnsetOrEmpty`](Self::UseIfUnsetOrEmpty).
    #[must_use]
    pub fn uses_default(self, value: Option<&str>) -> bool {
        match self {
            Self::UseIfUnset => value.is_none(),
            Self::UseIfUnsetOrEmpty => value.is_none_or(str::is_empty),
        }
    }
}

impl FromStr for DefaultOperator {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s {
            "-" => Ok(Self::UseIfUnset),
            ":-" => Ok(Self::UseIfUnsetOrEmpty),
            other => Err(DomainError::InvalidOperator(other.to_string())),
        }
    }
}

impl fmt::Display for DefaultOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A reference recognized in a piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    /// Syntactic form.
    pub kind: ReferenceKind,

    /// The identifier, without `$`, braces or operator.
    pub name: String,

    /// Fallback operator (bracketed form only).
    pub operator: Option<DefaultOperator>,

    /// Raw default text between the operator and the closing brace.
    pub default: Option<String>,

    /// Byte range of the whole reference in the scanned text.
    pub span: Range<usize>,
}

impl Reference {
    /// Creates a `$NAME` reference.
    #[must_use]
    pub fn simple(name: impl Into<String>, span: Range<usize>) -> Self {
        Self {
            kind: ReferenceKind::Simple,
            name: name.into(),
            operator: None,
            default: None,
            span,
        }
    }

    /// Creates a `${NAME}` reference without a default.
    #[must_use]
    pub fn bracketed(name: impl Into<String>, span: Range<usize>) -> Self {
        Self {
            kind: ReferenceKind::Bracketed,
            name: name.into(),
            operator: None,
            default: None,
            span,
        }
    }

    /// Attaches an operator and default payload.
    #[must_use]
    pub fn with_default(mut self, operator: DefaultOperator, default: impl Into<String>) -> Self {
        self.operator = Some(operator);
        self.default = Some(default.into());
        self
    }

    /// Returns true if the name is made entirely of ASCII digits.
    #[must_use]
    pub fn is_positional(&self) -> bool {
        is_positional_name(&self.name)
    }

    /// Returns the argument index for positional names.
    ///
    /// Digit strings too large for `usize` return `None` even though the
    /// reference is still positional.
    #[must_use]
    pub fn positional_index(&self) -> Option<usize> {
        positional_index(&self.name)
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.kind, self.operator, &self.default) {
            (ReferenceKind::Simple, _, _) => write!(f, "${}", self.name),
            (ReferenceKind::Bracketed, Some(op), Some(default)) => {
                write!(f, "${{{}{op}{default}}}", self.name)
            }
            (ReferenceKind::Bracketed, _, _) => write!(f, "${{{}}}", self.name),
        }
    }
}

/// Returns true for non-empty names matching `[A-Za-z0-9_]+`.
#[must_use]
pub fn is_valid_variable_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

pub(crate) fn is_positional_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_digit())
}

pub(crate) fn positional_index(name: &str) -> Option<usize> {
    if is_positional_name(name) {
        name.parse().ok()
    } else {
        None
    }
}
