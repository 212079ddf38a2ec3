//! Application use cases (file input and output orchestration).

mod convert_file;
mod substitute_file;

#[cfg(test)]
pub(crate) mod test_support;

pub use convert_file::*;
pub use substitute_file::*;
