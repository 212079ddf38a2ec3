//! Envsubst Application - Substitution engine, ports and use cases
//!
//! This crate defines the application layer with:
//! - The two-pass substitution engine
//! - Port traits (interfaces for external dependencies)
//! - Use case orchestration for file input and output

pub mod ports;
pub mod substitution;
pub mod use_cases;

pub use ports::{FileSystem, FileSystemError};
pub use substitution::{SubstitutionResult, Substitutor, substitute};
pub use use_cases::{ConvertFile, ConvertFileInput, ConvertFileOutput, SubstituteFile};
