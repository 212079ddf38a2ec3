//! Infrastructure adapters

mod process_args;
mod process_env;

pub use process_args::ProcessArgs;
pub use process_env::ProcessEnvironment;
