//! Crate-wide error type.
//!
//! Workflow-level failures (bad input, dangling references, validation
//! violations) are variants of the same enum as store and startup failures so
//! the session loop can log any of them uniformly and carry on.

use crate::validation::Violation;
use thiserror::Error;

/// Every failure the application can surface.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file or value could not be used
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// Store-level failure, not classified further
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Console or file I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Missing or malformed environment variable
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// Operator text could not be parsed as the expected type
    #[error("Invalid input - {field} not selected")]
    InvalidInput {
        /// Field the input was meant for
        field: &'static str,
        /// The raw text that failed to parse
        input: String,
    },

    /// No category with this id
    #[error("Invalid CategoryID: {id}")]
    CategoryNotFound {
        /// The id that did not resolve
        id: i32,
    },

    /// No product with this id
    #[error("Invalid ProductID: {id}")]
    ProductNotFound {
        /// The id that did not resolve
        id: i32,
    },

    /// No supplier with this id
    #[error("Invalid SupplierID: {id}")]
    SupplierNotFound {
        /// The id that did not resolve
        id: i32,
    },

    /// A record failed one or more field rules
    #[error("Validation failed with {} violation(s)", .violations.len())]
    Validation {
        /// Every rule that failed, paired with its field
        violations: Vec<Violation>,
    },
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
