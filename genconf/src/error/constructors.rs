//! Constructors for `GenconfError` variants that carry a path.

use std::error::Error;
use std::path::Path;

use super::GenconfError;

impl GenconfError {
    /// Construct a [`GenconfError::MalformedFragmentPath`].
    ///
    /// # Examples
    ///
    /// ```
    /// use genconf::{ErrorKind, GenconfError};
    /// let err = GenconfError::malformed("root/env/prod/type.json", "odd segment count");
    /// assert_eq!(err.kind(), ErrorKind::MalformedFragmentPath);
    /// ```
    #[must_use]
    pub fn malformed(path: impl AsRef<Path>, reason: impl Into<String>) -> Self {
        Self::MalformedFragmentPath {
            path: path.as_ref().to_path_buf(),
            reason: reason.into(),
        }
    }

    /// Construct a [`GenconfError::Read`] for `path`.
    #[must_use]
    pub fn read(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Construct a [`GenconfError::Decode`] for `path`.
    ///
    /// # Examples
    ///
    /// ```
    /// use genconf::{ErrorKind, GenconfError};
    /// let fe = figment::Error::from("boom");
    /// let err = GenconfError::decode("default.json", fe);
    /// assert_eq!(err.kind(), ErrorKind::Decode);
    /// assert!(err.to_string().contains("default.json"));
    /// ```
    #[must_use]
    pub fn decode(path: impl AsRef<Path>, source: impl Into<Box<dyn Error + Send + Sync>>) -> Self {
        Self::Decode {
            path: path.as_ref().to_path_buf(),
            source: source.into(),
        }
    }

    /// Construct a [`GenconfError::Discovery`] for `root`.
    #[must_use]
    pub fn discovery(root: impl AsRef<Path>, source: walkdir::Error) -> Self {
        Self::Discovery {
            root: root.as_ref().to_path_buf(),
            source,
        }
    }
}

impl From<serde_json::Error> for GenconfError {
    fn from(source: serde_json::Error) -> Self {
        Self::Target { source }
    }
}
