//! Builder for [`Loader`].
//!
//! The builder lets callers set the priority order, fragment format and link
//! handling before producing a [`Loader`] bound to one configuration root.

use std::path::PathBuf;

use crate::Format;

use super::Loader;

/// Builder for [`Loader`].
///
/// # Examples
///
/// ```rust,no_run
/// use genconf::{Environment, Format, Loader};
///
/// # fn run() -> genconf::GenconfResult<()> {
/// let loader = Loader::builder("./config")
///     .order(["env", "region", "color"])
///     .format(Format::Json)
///     .build();
///
/// let env: Environment = [("env", "prod")].into_iter().collect();
/// let settings: serde_json::Value = loader.load(&env)?;
/// println!("{settings}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
#[must_use]
pub struct LoaderBuilder {
    root: PathBuf,
    order: Vec<String>,
    format: Format,
    follow_links: bool,
}

impl LoaderBuilder {
    /// Creates a builder for the fragment tree under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            order: Vec::new(),
            format: Format::default(),
            follow_links: false,
        }
    }

    /// Replaces the dimension priority order, lowest priority first.
    pub fn order<I, S>(mut self, order: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.order = order.into_iter().map(Into::into).collect();
        self
    }

    /// Appends `dimension` as the highest priority seen so far.
    pub fn push_dimension(mut self, dimension: impl Into<String>) -> Self {
        self.order.push(dimension.into());
        self
    }

    /// Sets the format every fragment is decoded with.
    pub const fn format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    /// Traverse symbolic links to directories while discovering fragments.
    pub const fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Finalises the builder.
    pub fn build(self) -> Loader {
        Loader {
            root: self.root,
            order: self.order,
            format: self.format,
            follow_links: self.follow_links,
        }
    }
}
