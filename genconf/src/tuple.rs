//! Parsing of dimension tuples from fragment paths.
//!
//! A fragment stored at `<root>/env/prod/region/eu.json` applies when the
//! environment has `env = prod` and `region = eu`. The root-relative path,
//! without its extension, is read as alternating dimension and value
//! segments. The literal path `default` yields the empty tuple, which applies
//! unconditionally.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use camino::{Utf8Component, Utf8Path};

use crate::{Environment, GenconfError, GenconfResult};

/// Relative path (without extension) of the fragment that always applies.
pub const DEFAULT_FRAGMENT: &str = "default";

/// Dimension constraints encoded by a fragment path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tuple(BTreeMap<String, String>);

impl Tuple {
    /// Parse the tuple encoded by `path` relative to `root`.
    ///
    /// A dimension repeated within one path keeps its last value.
    ///
    /// # Examples
    ///
    /// ```
    /// use genconf::Tuple;
    /// use std::path::Path;
    ///
    /// # fn main() -> genconf::GenconfResult<()> {
    /// let root = Path::new("config");
    /// let tuple = Tuple::parse(root, &root.join("env/prod/color/green.json"))?;
    /// assert_eq!(tuple.cardinality(), 2);
    /// assert_eq!(tuple.get("color"), Some("green"));
    ///
    /// let default = Tuple::parse(root, &root.join("default.json"))?;
    /// assert!(default.is_empty());
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`GenconfError::MalformedFragmentPath`] when `path` is not
    /// under `root`, is not valid UTF-8, is empty, or has an odd number of
    /// segments.
    pub fn parse(root: &Path, path: &Path) -> GenconfResult<Self> {
        let relative = path.strip_prefix(root).map_err(|_| {
            GenconfError::malformed(
                path,
                format!("fragment is not located under '{}'", root.display()),
            )
        })?;
        let utf8 = Utf8Path::from_path(relative)
            .ok_or_else(|| GenconfError::malformed(path, "fragment path is not valid UTF-8"))?;
        let stem = utf8.with_extension("");
        if stem.as_str() == DEFAULT_FRAGMENT {
            return Ok(Self::default());
        }

        let segments = stem
            .components()
            .map(|component| match component {
                Utf8Component::Normal(segment) => Ok(segment),
                other => Err(GenconfError::malformed(
                    path,
                    format!("unexpected path component '{}'", other.as_str()),
                )),
            })
            .collect::<GenconfResult<Vec<_>>>()?;
        if segments.is_empty() {
            return Err(GenconfError::malformed(path, "fragment path is empty"));
        }

        let pairs = segments.chunks_exact(2);
        if !pairs.remainder().is_empty() {
            return Err(GenconfError::malformed(
                path,
                format!(
                    "expected dimension/value pairs but found {} segments",
                    segments.len()
                ),
            ));
        }
        let dimensions = pairs
            .filter_map(|pair| match pair {
                [dimension, value] => Some(((*dimension).to_owned(), (*value).to_owned())),
                _ => None,
            })
            .collect();
        Ok(Self(dimensions))
    }

    /// Number of dimension constraints.
    #[must_use]
    pub fn cardinality(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` for the unconditional tuple.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Required value for `dimension`, if constrained.
    #[must_use]
    pub fn get(&self, dimension: &str) -> Option<&str> {
        self.0.get(dimension).map(String::as_str)
    }

    /// Constrained dimension names in lexical order.
    pub fn dimensions(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Constraint pairs in lexical dimension order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns `true` when `env` satisfies every constraint.
    #[must_use]
    pub fn is_satisfied_by(&self, env: &Environment) -> bool {
        env.matches(self)
    }
}

impl<K, V> FromIterator<(K, V)> for Tuple
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl fmt::Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("<default>");
        }
        for (i, (dimension, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{dimension}={value}")?;
        }
        Ok(())
    }
}
