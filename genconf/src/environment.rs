//! Runtime identity along each deployment dimension.

use std::collections::BTreeMap;

use crate::Tuple;

/// Mapping from dimension name to the concrete value of the running process.
///
/// # Examples
///
/// ```
/// use genconf::{Environment, Tuple};
///
/// let env: Environment = [("env", "prod"), ("color", "green")].into_iter().collect();
/// let tuple: Tuple = [("env", "prod")].into_iter().collect();
/// assert!(env.matches(&tuple));
/// assert!(env.matches(&Tuple::default()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment(BTreeMap<String, String>);

impl Environment {
    /// Creates an empty environment, which only satisfies the default tuple.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Sets `dimension` to `value`, returning the previous value.
    pub fn insert(&mut self, dimension: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(dimension.into(), value.into())
    }

    /// Value of `dimension`, if defined.
    #[must_use]
    pub fn get(&self, dimension: &str) -> Option<&str> {
        self.0.get(dimension).map(String::as_str)
    }

    /// Number of defined dimensions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when no dimension is defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Defined dimension/value pairs in lexical dimension order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Subset test: every constraint in `tuple` must be defined here with the
    /// same value. Dimensions defined here but absent from `tuple` are
    /// ignored.
    #[must_use]
    pub fn matches(&self, tuple: &Tuple) -> bool {
        tuple
            .iter()
            .all(|(dimension, value)| self.get(dimension) == Some(value))
    }
}

impl<K, V> FromIterator<(K, V)> for Environment
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut env = Self::new();
        env.extend(iter);
        env
    }
}

impl<K, V> Extend<(K, V)> for Environment
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (dimension, value) in iter {
            self.insert(dimension, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn prod_green() -> Environment {
        [("env", "prod"), ("color", "green"), ("type", "foo")]
            .into_iter()
            .collect()
    }

    fn tuple(pairs: &[(&str, &str)]) -> Tuple {
        pairs.iter().copied().collect()
    }

    #[rstest]
    #[case::default(&[], true)]
    #[case::single(&[("env", "prod")], true)]
    #[case::pair(&[("env", "prod"), ("color", "green")], true)]
    #[case::every_dimension(&[("env", "prod"), ("color", "green"), ("type", "foo")], true)]
    #[case::wrong_value(&[("env", "qa")], false)]
    #[case::unknown_dimension(&[("region", "eu")], false)]
    #[case::one_mismatch(&[("env", "prod"), ("color", "blue")], false)]
    fn subset_law(prod_green: Environment, #[case] pairs: &[(&str, &str)], #[case] expected: bool) {
        assert_eq!(prod_green.matches(&tuple(pairs)), expected, "{pairs:?}");
        assert_eq!(tuple(pairs).is_satisfied_by(&prod_green), expected);
    }

    #[rstest]
    #[case::default(&[], true)]
    #[case::scoped(&[("env", "prod")], false)]
    fn empty_environment_only_satisfies_default(
        #[case] pairs: &[(&str, &str)],
        #[case] expected: bool,
    ) {
        assert_eq!(Environment::new().matches(&tuple(pairs)), expected);
    }

    #[test]
    fn later_insertions_replace_values() {
        let mut env = Environment::new();
        assert_eq!(env.insert("env", "qa"), None);
        assert_eq!(env.insert("env", "prod").as_deref(), Some("qa"));
        assert_eq!(env.len(), 1);
        assert_eq!(env.get("env"), Some("prod"));
    }

    #[rstest]
    fn size_tracks_defined_dimensions(prod_green: Environment) {
        assert!(Environment::new().is_empty());
        assert_eq!(Environment::new().len(), 0);
        assert!(!prod_green.is_empty());
        assert_eq!(prod_green.len(), 3);
    }
}
