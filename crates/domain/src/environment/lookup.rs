//! Lookup capabilities the resolver reads from.

use std::collections::{BTreeMap, HashMap};

/// Read-only view of named variables.
///
/// Names are case-sensitive. `None` means unset; `Some("")` means set
/// but empty, which the `-` and `:-` operators treat differently.
pub trait EnvLookup: Send + Sync {
    /// Returns the value of `name`, if set.
    fn lookup(&self, name: &str) -> Option<String>;
}

/// Read-only view of positional arguments.
pub trait ArgLookup: Send + Sync {
    /// Returns the argument at `index`, if in range.
    fn arg(&self, index: usize) -> Option<String>;
}

impl<S: std::hash::BuildHasher + Send + Sync> EnvLookup for HashMap<String, String, S> {
    fn lookup(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl EnvLookup for BTreeMap<String, String> {
    fn lookup(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl<T: EnvLookup + ?Sized> EnvLookup for &T {
    fn lookup(&self, name: &str) -> Option<String> {
        (**self).lookup(name)
    }
}

impl ArgLookup for [String] {
    fn arg(&self, index: usize) -> Option<String> {
        self.get(index).cloned()
    }
}

impl ArgLookup for [&str] {
    fn arg(&self, index: usize) -> Option<String> {
        self.get(index).map(|s| (*s).to_string())
    }
}

impl ArgLookup for Vec<String> {
    fn arg(&self, index: usize) -> Option<String> {
        self.as_slice().arg(index)
    }
}

impl<const N: usize> ArgLookup for [&str; N] {
    fn arg(&self, index: usize) -> Option<String> {
        self.as_slice().arg(index)
    }
}

impl<T: ArgLookup + ?Sized> ArgLookup for &T {
    fn arg(&self, index: usize) -> Option<String> {
        (**self).arg(index)
    }
}
