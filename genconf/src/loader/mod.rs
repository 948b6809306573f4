//! Orchestration of discovery, selection, ordering and merging.

mod builder;

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use crate::specificity::sort_overrides;
use crate::{Environment, Format, GenconfResult, Tuple, discover_fragments, merge};

pub use builder::LoaderBuilder;

/// A fragment selected for a load: its tuple and where it lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Override {
    tuple: Tuple,
    path: PathBuf,
}

impl Override {
    /// Pairs a parsed `tuple` with the fragment `path` it came from.
    #[must_use]
    pub const fn new(tuple: Tuple, path: PathBuf) -> Self {
        Self { tuple, path }
    }

    /// Dimension constraints of the fragment.
    #[must_use]
    pub const fn tuple(&self) -> &Tuple {
        &self.tuple
    }

    /// Full path of the fragment file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for Override {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.path.display(), self.tuple)
    }
}

/// Resolves one fragment tree for any number of environments.
///
/// A loader holds no state between calls; each load re-reads the tree.
#[derive(Debug, Clone)]
pub struct Loader {
    root: PathBuf,
    order: Vec<String>,
    format: Format,
    follow_links: bool,
}

impl Loader {
    /// Creates a builder for the fragment tree under `root`.
    pub fn builder(root: impl Into<PathBuf>) -> LoaderBuilder {
        LoaderBuilder::new(root)
    }

    /// Configuration root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Dimension priority order, lowest priority first.
    #[must_use]
    pub fn order(&self) -> &[String] {
        &self.order
    }

    /// Format every fragment is decoded with.
    #[must_use]
    pub const fn format(&self) -> Format {
        self.format
    }

    /// Returns the fragments `env` selects, in application order.
    ///
    /// Nothing is read besides directory listings.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GenconfError::Discovery`] when the tree cannot be
    /// traversed and [`crate::GenconfError::MalformedFragmentPath`] for the
    /// first fragment whose path does not encode a tuple, even when that
    /// fragment would not have matched `env`.
    pub fn plan(&self, env: &Environment) -> GenconfResult<Vec<Override>> {
        let paths = discover_fragments(&self.root, self.follow_links)?;
        debug!(
            root = %self.root.display(),
            fragments = paths.len(),
            "discovered fragments"
        );

        let mut overrides = Vec::with_capacity(paths.len());
        for path in paths {
            let tuple = Tuple::parse(&self.root, &path)?;
            if env.matches(&tuple) {
                overrides.push(Override::new(tuple, path));
            } else {
                trace!(path = %path.display(), %tuple, "fragment does not match environment");
            }
        }

        sort_overrides(&mut overrides, &self.order);
        Ok(overrides)
    }

    /// Overlays every fragment `env` selects onto `target`, least specific
    /// first.
    ///
    /// The load is not transactional: when a fragment fails to read or
    /// decode, the fragments applied before it remain applied to `target`.
    ///
    /// `target` must round-trip through a JSON map; this is checked before
    /// the first fragment is applied. Fields marked `#[serde(skip)]` are
    /// reset to their default value. See [`crate::merge`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::GenconfError::Target`] when at least one fragment
    /// is selected and `target` does not round-trip, before anything is
    /// applied. Otherwise returns the first discovery, path, read or decode
    /// error.
    pub fn load_into<T>(&self, env: &Environment, target: &mut T) -> GenconfResult<()>
    where
        T: Serialize + DeserializeOwned,
    {
        let plan = self.plan(env)?;
        if plan.is_empty() {
            return Ok(());
        }
        merge::check_target(target)?;
        debug!(root = %self.root.display(), selected = plan.len(), "merging fragments");
        for item in &plan {
            merge::apply(item, self.format, target)?;
        }
        Ok(())
    }

    /// Loads into a fresh `T::default()`.
    ///
    /// # Errors
    ///
    /// See [`Loader::load_into`].
    pub fn load<T>(&self, env: &Environment) -> GenconfResult<T>
    where
        T: Serialize + DeserializeOwned + Default,
    {
        let mut target = T::default();
        self.load_into(env, &mut target)?;
        Ok(target)
    }
}

/// Loads the fragment tree under `root` onto `target`.
///
/// `order` lists dimensions from lowest to highest priority and only breaks
/// ties between fragments constraining the same number of dimensions.
/// Fragments are decoded as JSON; use [`Loader`] for other formats.
/// `target` must round-trip through a JSON map, as described on
/// [`Loader::load_into`].
///
/// # Examples
///
/// ```rust,no_run
/// use genconf::Environment;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Deserialize, Serialize)]
/// struct Target {
///     #[serde(rename = "A")]
///     a: String,
/// }
///
/// # fn run() -> genconf::GenconfResult<()> {
/// let env: Environment = [("env", "prod"), ("type", "foo")].into_iter().collect();
/// let mut target = Target { a: String::new() };
/// genconf::load("./fixtures", &["env", "type", "color"], &env, &mut target)?;
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// See [`Loader::load_into`].
pub fn load<S, T>(
    root: impl AsRef<Path>,
    order: &[S],
    env: &Environment,
    target: &mut T,
) -> GenconfResult<()>
where
    S: AsRef<str>,
    T: Serialize + DeserializeOwned,
{
    Loader::builder(root.as_ref())
        .order(order.iter().map(<S as AsRef<str>>::as_ref))
        .build()
        .load_into(env, target)
}
