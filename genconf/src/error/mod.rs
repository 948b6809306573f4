//! Error types produced while resolving a fragment tree.

mod constructors;
mod types;

pub use types::{ErrorKind, GenconfError};
