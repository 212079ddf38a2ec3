//! Variable substitution module
//!
//! Replaces `$NAME`, `${NAME}`, `${NAME-default}` and `${NAME:-default}`
//! references in text.
//!
//! # Usage
//!
//! ```
//! use std::collections::HashMap;
//! use envsubst_application::substitution::substitute;
//!
//! let env = HashMap::from([("HOST".to_string(), "localhost".to_string())]);
//! let args = vec!["prog".to_string(), "8080".to_string()];
//!
//! let result = substitute("http://$HOST:${1}/${PATH_PREFIX:-api}", &env, &args);
//! assert_eq!(result, "http://localhost:8080/api");
//! ```

pub mod engine;
pub mod parser;

pub use engine::{SubstitutionResult, Substitutor, substitute};
pub use parser::{
    extract_variable_names, has_references, parse_bracketed, parse_references, parse_simple,
};
