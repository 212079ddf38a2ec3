//! File system persistence

mod file_system;

pub use file_system::TokioFileSystem;
