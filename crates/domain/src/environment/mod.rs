//! Variable sources and resolution

mod lookup;
mod resolution;
mod variable;

pub use lookup::{ArgLookup, EnvLookup};
pub use resolution::ResolutionContext;
pub use variable::{ResolvedVariable, VariableScope};
