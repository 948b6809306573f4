//! Extensions for attaching fragment paths to errors concisely.
//!
//! These helpers replace repetitive
//! `.map_err(|e| GenconfError::…(path, e))` chains when a read or decode
//! step fails for a specific fragment.
//!
//! # Examples
//!
//! ```
//! use genconf::{ErrorKind, FragmentResultExt, GenconfResult};
//! use std::path::Path;
//!
//! fn read(path: &Path) -> GenconfResult<String> {
//!     std::fs::read_to_string(path).read_context(path)
//! }
//!
//! let err = read(Path::new("does/not/exist.json")).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Read);
//! ```

use std::error::Error;
use std::path::Path;

use crate::{GenconfError, GenconfResult};

/// Path-context conversions for fragment I/O and decoding results.
pub trait FragmentResultExt<T> {
    /// Convert a failure into [`GenconfError::Read`] for `path`.
    ///
    /// # Errors
    ///
    /// Returns the wrapped error when `self` is `Err`.
    fn read_context(self, path: &Path) -> GenconfResult<T>;

    /// Convert a failure into [`GenconfError::Decode`] for `path`.
    ///
    /// # Errors
    ///
    /// Returns the wrapped error when `self` is `Err`.
    fn decode_context(self, path: &Path) -> GenconfResult<T>;
}

impl<T, E> FragmentResultExt<T> for Result<T, E>
where
    E: Into<Box<dyn Error + Send + Sync>>,
{
    fn read_context(self, path: &Path) -> GenconfResult<T> {
        self.map_err(|e| {
            let source: Box<dyn Error + Send + Sync> = e.into();
            match source.downcast::<std::io::Error>() {
                Ok(io) => GenconfError::read(path, *io),
                Err(other) => GenconfError::read(path, std::io::Error::other(other)),
            }
        })
    }

    fn decode_context(self, path: &Path) -> GenconfResult<T> {
        self.map_err(|e| GenconfError::decode(path, e))
    }
}
