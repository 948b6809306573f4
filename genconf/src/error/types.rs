//! Primary error enum for fragment loading flows.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a fragment tree.
///
/// Every variant is fatal to the load that raised it. Fragments applied
/// before the failure stay applied to the target.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GenconfError {
    /// Traversal of the configuration root failed.
    #[error("failed to discover fragments under '{}': {source}", root.display())]
    Discovery {
        /// Root directory being traversed.
        root: PathBuf,
        /// Underlying traversal failure.
        #[source]
        source: walkdir::Error,
    },

    /// A fragment path does not encode dimension/value pairs.
    #[error("malformed fragment path '{}': {reason}", path.display())]
    MalformedFragmentPath {
        /// Offending fragment path.
        path: PathBuf,
        /// Why the path was rejected.
        reason: String,
    },

    /// A selected fragment could not be read.
    #[error("failed to read fragment '{}': {source}", path.display())]
    Read {
        /// Fragment path.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A selected fragment could not be decoded onto the target.
    #[error("failed to decode fragment '{}': {source}", path.display())]
    Decode {
        /// Fragment path.
        path: PathBuf,
        /// Underlying decoder or deserialisation failure.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The target does not round-trip through a JSON object.
    #[error("configuration target must round-trip through a JSON map: {source}")]
    Target {
        /// Underlying serialisation failure.
        #[source]
        source: serde_json::Error,
    },
}

/// Coarse classification of a [`GenconfError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// See [`GenconfError::Discovery`].
    Discovery,
    /// See [`GenconfError::MalformedFragmentPath`].
    MalformedFragmentPath,
    /// See [`GenconfError::Read`].
    Read,
    /// See [`GenconfError::Decode`].
    Decode,
    /// See [`GenconfError::Target`].
    Target,
}

impl GenconfError {
    /// Returns the classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Discovery { .. } => ErrorKind::Discovery,
            Self::MalformedFragmentPath { .. } => ErrorKind::MalformedFragmentPath,
            Self::Read { .. } => ErrorKind::Read,
            Self::Decode { .. } => ErrorKind::Decode,
            Self::Target { .. } => ErrorKind::Target,
        }
    }

    /// Returns the fragment or root path the error refers to, if any.
    #[must_use]
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Discovery { root, .. } => Some(root),
            Self::MalformedFragmentPath { path, .. }
            | Self::Read { path, .. }
            | Self::Decode { path, .. } => Some(path),
            Self::Target { .. } => None,
        }
    }
}
