//! Core crate for resolving dimension-scoped configuration fragments.
//!
//! A configuration root holds fragments whose directory paths encode the
//! deployment dimensions they apply to, for example
//! `env/prod/region/eu.json`. [`load`] selects the fragments satisfied by an
//! [`Environment`], orders them from least to most specific and overlays each
//! onto a caller-owned target.
//!
//! ```rust,no_run
//! use genconf::Environment;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Default, Deserialize, Serialize)]
//! struct Settings {
//!     host: String,
//!     replicas: u8,
//! }
//!
//! # fn run() -> genconf::GenconfResult<()> {
//! let env: Environment = [("env", "prod"), ("region", "eu")].into_iter().collect();
//! let mut settings = Settings::default();
//! genconf::load("./config", &["env", "region"], &env, &mut settings)?;
//! # Ok(())
//! # }
//! ```

mod discovery;
mod environment;
mod error;
mod loader;
pub mod merge;
pub mod result_ext;
pub mod specificity;
mod tuple;

pub use discovery::discover_fragments;
pub use environment::Environment;
pub use error::{ErrorKind, GenconfError};
pub use loader::{Loader, LoaderBuilder, Override, load};
pub use merge::format::Format;
pub use result_ext::FragmentResultExt;
pub use tuple::{DEFAULT_FRAGMENT, Tuple};

/// Result alias used throughout the crate.
pub type GenconfResult<T> = Result<T, GenconfError>;
