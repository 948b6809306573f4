//! Library facade for the `genconf` binary so tests can drive it in-process.
//!
//! The binary resolves one fragment tree for an environment assembled from
//! `GENCONF_DIM_*` process variables and `--dim` flags, then prints either the
//! merged JSON document or the merge plan.

pub mod cli;
pub mod environment;
pub mod error;
pub mod output;

use std::io::Write;

use genconf::{Environment, Loader};
use serde_json::{Map, Value};
use tracing::debug;

use crate::cli::Cli;
use crate::error::Result;

/// Builds the loader described by `cli`.
#[must_use]
pub fn loader(cli: &Cli) -> Loader {
    Loader::builder(cli.root.clone())
        .order(cli.order.iter().map(String::as_str))
        .format(cli.format)
        .follow_links(cli.follow_links)
        .build()
}

/// Resolves the tree for `environment` and writes the result to `out`.
///
/// # Errors
///
/// Returns [`error::CliError::Load`] when the tree cannot be resolved and the
/// rendering variants when the output cannot be written.
pub fn run<W: Write>(cli: &Cli, environment: &Environment, out: &mut W) -> Result<()> {
    let loader = loader(cli);
    debug!(
        root = %loader.root().display(),
        dimensions = environment.len(),
        format = %loader.format(),
        "resolving fragment tree"
    );
    if cli.plan {
        let plan = loader.plan(environment)?;
        output::write_plan(out, loader.root(), &plan)?;
    } else {
        let document: Map<String, Value> = loader.load(environment)?;
        output::write_document(out, &document)?;
    }
    Ok(())
}
