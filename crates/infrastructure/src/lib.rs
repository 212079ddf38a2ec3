//! Envsubst Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer, and snapshots of the real
//! process environment for the resolution context.

pub mod adapters;
pub mod persistence;

pub use adapters::{ProcessArgs, ProcessEnvironment};
pub use persistence::TokioFileSystem;
