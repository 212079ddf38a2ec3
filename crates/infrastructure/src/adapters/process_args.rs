//! Process argument adapter

use envsubst_domain::ArgLookup;

/// Snapshot of the process argument vector.
///
/// Index 0 is the program name, as with `$0` in a shell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessArgs {
    args: Vec<String>,
}

impl ProcessArgs {
    /// Captures the arguments of the running process.
    #[must_use]
    pub fn capture() -> Self {
        Self::from_args(std::env::args_os().map(|arg| arg.to_string_lossy().into_owned()))
    }

    /// Builds an argument vector from explicit values.
    #[must_use]
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the captured arguments.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.args
    }
}

impl ArgLookup for ProcessArgs {
    fn arg(&self, index: usize) -> Option<String> {
        self.args.get(index).cloned()
    }
}
