//! Rendering of merged documents and merge plans.

use std::io::Write;
use std::path::Path;

use genconf::Override;
use serde_json::{Map, Value};

use crate::error::Result;

/// Writes `document` as pretty-printed JSON followed by a newline.
///
/// # Errors
///
/// Returns [`crate::error::CliError::Render`] or
/// [`crate::error::CliError::Write`] when the output cannot be produced.
pub fn write_document<W: Write>(out: &mut W, document: &Map<String, Value>) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, document)?;
    writeln!(out)?;
    Ok(())
}

/// Writes one `<path>\t<tuple>` line per fragment in application order.
///
/// Paths are shown relative to `root` where possible.
///
/// # Errors
///
/// Returns [`crate::error::CliError::Write`] when `out` rejects a line.
pub fn write_plan<W: Write>(out: &mut W, root: &Path, plan: &[Override]) -> Result<()> {
    for item in plan {
        let path = item.path().strip_prefix(root).unwrap_or_else(|_| item.path());
        writeln!(out, "{}\t{}", path.display(), item.tuple())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, anyhow, ensure};
    use genconf::Tuple;
    use serde_json::json;
    use std::path::PathBuf;

    #[test]
    fn plan_lines_are_relative_and_tab_separated() -> Result<()> {
        let root = Path::new("/conf");
        let plan = vec![
            Override::new(Tuple::default(), PathBuf::from("/conf/default.json")),
            Override::new(
                [("env", "prod"), ("type", "foo")].into_iter().collect(),
                PathBuf::from("/conf/env/prod/type/foo.json"),
            ),
            Override::new(
                [("env", "qa")].into_iter().collect(),
                PathBuf::from("/elsewhere/env/qa.json"),
            ),
        ];
        let mut out = Vec::new();
        write_plan(&mut out, root, &plan).map_err(|e| anyhow!(e))?;
        let text = String::from_utf8(out)?;
        ensure!(
            text == "default.json\t<default>\n\
                     env/prod/type/foo.json\tenv=prod,type=foo\n\
                     /elsewhere/env/qa.json\tenv=qa\n",
            "{text:?}"
        );
        Ok(())
    }

    #[test]
    fn documents_end_with_newline() -> Result<()> {
        let Value::Object(document) = json!({"A": "foo", "C": "baz"}) else {
            return Err(anyhow!("literal should be an object"));
        };
        let mut out = Vec::new();
        write_document(&mut out, &document).map_err(|e| anyhow!(e))?;
        let text = String::from_utf8(out)?;
        ensure!(text.ends_with("}\n"), "{text:?}");
        let parsed: Value = serde_json::from_str(&text)?;
        ensure!(parsed == json!({"A": "foo", "C": "baz"}));
        Ok(())
    }
}
