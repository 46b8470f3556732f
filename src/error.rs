//! Error types for serp-extract.
//!
//! Nothing in the extraction engine is fatal at the batch level: errors are
//! caught at the per-container boundary inside the assembler. These types
//! exist so scope implementations and field resolution can report failures
//! for a single container.

/// Error type for scope queries and field resolution.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A selector string could not be evaluated by the scope.
    #[error("selector evaluation failed: {0}")]
    Selector(String),

    /// The scope failed while reading a node's attributes or text.
    #[error("scope query failed: {0}")]
    Scope(String),
}

/// Result type alias for scope and resolution operations.
pub type Result<T> = std::result::Result<T, Error>;
