//! Error types for the `genconf` binary.
//!
//! `main` converts these into a `color-eyre` report, so each variant only
//! needs a short prefix before the underlying cause.

use thiserror::Error;

/// Errors raised while resolving a tree from the command line.
#[derive(Debug, Error)]
pub enum CliError {
    /// The fragment tree could not be resolved.
    #[error("failed to load configuration: {0}")]
    Load(#[from] genconf::GenconfError),
    /// The merged document could not be rendered as JSON.
    #[error("failed to render configuration: {0}")]
    Render(#[from] serde_json::Error),
    /// Writing to standard output failed.
    #[error("failed to write output: {0}")]
    Write(#[from] std::io::Error),
}

/// Result alias for the binary.
pub type Result<T> = std::result::Result<T, CliError>;

/// Problems with a `--dim KEY=VALUE` argument.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DimensionError {
    /// No `=` separates the dimension from its value.
    #[error("expected KEY=VALUE, found '{0}'")]
    MissingSeparator(String),
    /// The dimension name is blank.
    #[error("dimension name must not be empty in '{0}'")]
    EmptyName(String),
}
