//! Envsubst Domain - Core types
//!
//! This crate defines the vocabulary of variable substitution: the
//! references found in text, the lookups they resolve against, and the
//! resolution context that ties them together.
//! All types here are pure Rust with no I/O dependencies.

pub mod environment;
pub mod error;
pub mod reference;

pub use environment::{ArgLookup, EnvLookup, ResolutionContext, ResolvedVariable, VariableScope};
pub use error::{DomainError, DomainResult};
pub use reference::{DefaultOperator, Reference, ReferenceKind, is_valid_variable_name};
