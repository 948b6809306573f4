//! Shared fixtures for genconf integration tests.

use std::path::PathBuf;

use genconf::Environment;
use rstest::fixture;
use serde::{Deserialize, Serialize};

/// Flat target mirroring the checked-in fixture tree.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct Target {
    /// Set by `default`, replaced by `env/prod/type/foo` and `env/qa`.
    pub a: String,
    /// Set by `default`, replaced by the `color/green` fragments.
    pub b: String,
    /// Only ever set by the caller.
    pub c: String,
    /// Set by `env/prod/type/foo`.
    pub d: String,
    /// Contested by both cardinality-two prod fragments.
    pub e: String,
}

impl Target {
    /// Target as the caller hands it over: only `C` populated.
    pub fn seeded() -> Self {
        Self {
            c: "baz".into(),
            ..Self::default()
        }
    }
}

/// Root of the checked-in fixture tree.
#[fixture]
pub fn fixture_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/tree")
}

/// Builds an environment from literal pairs.
pub fn env(pairs: &[(&str, &str)]) -> Environment {
    pairs.iter().copied().collect()
}
