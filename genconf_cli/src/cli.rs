//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use genconf::Format;

use crate::error::DimensionError;

/// Resolve a dimension-scoped configuration tree.
///
/// Fragments are applied from least to most specific and the merged JSON
/// object is printed on stdout.
#[derive(Debug, Clone, Parser)]
#[command(name = "genconf", version, about)]
pub struct Cli {
    /// Configuration root holding the fragment tree.
    #[arg(long, env = "GENCONF_ROOT", value_name = "DIR")]
    pub root: PathBuf,

    /// Dimension priority order, lowest priority first.
    #[arg(
        long,
        env = "GENCONF_ORDER",
        value_delimiter = ',',
        value_name = "DIMENSIONS"
    )]
    pub order: Vec<String>,

    /// Environment entry; overrides the matching `GENCONF_DIM_*` variable.
    #[arg(long = "dim", value_name = "KEY=VALUE", value_parser = parse_dimension)]
    pub dims: Vec<(String, String)>,

    /// Format every fragment is written in.
    #[arg(long, value_name = "FORMAT", default_value_t = Format::Json)]
    pub format: Format,

    /// Follow symbolic links while walking the tree.
    #[arg(long)]
    pub follow_links: bool,

    /// Print the fragments that would be applied instead of the result.
    #[arg(long)]
    pub plan: bool,

    /// Increase log verbosity; overrides `RUST_LOG`.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Splits a `KEY=VALUE` argument at its first `=`.
///
/// The key is trimmed and lower-cased to line up with `GENCONF_DIM_*`
/// variables; the value is kept verbatim.
///
/// # Errors
///
/// Returns [`DimensionError`] when the separator is missing or the key is
/// blank.
///
/// # Examples
///
/// ```
/// use genconf_cli::cli::parse_dimension;
/// assert_eq!(
///     parse_dimension("Env=prod"),
///     Ok(("env".to_owned(), "prod".to_owned()))
/// );
/// assert!(parse_dimension("env").is_err());
/// ```
pub fn parse_dimension(raw: &str) -> Result<(String, String), DimensionError> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| DimensionError::MissingSeparator(raw.to_owned()))?;
    let name = key.trim();
    if name.is_empty() {
        return Err(DimensionError::EmptyName(raw.to_owned()));
    }
    Ok((name.to_lowercase(), value.to_owned()))
}
