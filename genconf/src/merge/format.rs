//! Structured formats a fragment tree may be written in.
//!
//! One format applies to a whole load. JSON is always available; TOML and
//! JSON5 are enabled by the `toml` and `json5` cargo features.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use figment::Figment;
use figment::providers::{Format as _, Json};
#[cfg(feature = "toml")]
use figment::providers::Toml;
#[cfg(feature = "json5")]
use figment_json5::Json5;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::{FragmentResultExt, GenconfResult};

/// Serialisation format of every fragment in a load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Format {
    /// JSON documents.
    #[default]
    Json,
    /// TOML documents.
    #[cfg(feature = "toml")]
    Toml,
    /// JSON5 documents.
    #[cfg(feature = "json5")]
    Json5,
}

/// Error returned when a format name is not recognised or not compiled in.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported fragment format '{0}'")]
pub struct UnknownFormat(pub String);

impl Format {
    /// Canonical lower-case name, also the usual file extension.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Json => "json",
            #[cfg(feature = "toml")]
            Self::Toml => "toml",
            #[cfg(feature = "json5")]
            Self::Json5 => "json5",
        }
    }

    /// Picks the format conventionally stored under `extension`.
    ///
    /// # Examples
    ///
    /// ```
    /// use genconf::Format;
    /// assert_eq!(Format::from_extension("JSON"), Some(Format::Json));
    /// assert_eq!(Format::from_extension("ini"), None);
    /// ```
    #[must_use]
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            #[cfg(feature = "toml")]
            "toml" => Some(Self::Toml),
            #[cfg(feature = "json5")]
            "json5" => Some(Self::Json5),
            _ => None,
        }
    }

    /// Decodes `data` read from `path` into its top-level document map.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GenconfError::Decode`] naming `path` when `data` is
    /// not a valid document of this format or its top level is not a map.
    pub fn decode(self, path: &Path, data: &str) -> GenconfResult<Map<String, Value>> {
        let figment = match self {
            Self::Json => Figment::from(Json::string(data)),
            #[cfg(feature = "toml")]
            Self::Toml => {
                // Validate first so TOML syntax errors keep their line details.
                toml::from_str::<toml::Table>(data).decode_context(path)?;
                Figment::from(Toml::string(data))
            }
            #[cfg(feature = "json5")]
            Self::Json5 => Figment::from(Json5::string(data)),
        };
        figment.extract().decode_context(path)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_extension(s.trim()).ok_or_else(|| UnknownFormat(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use anyhow::{Result, anyhow, ensure};
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn decodes_json_objects() -> Result<()> {
        let map = Format::Json
            .decode(Path::new("default.json"), r#"{"A": "foo", "n": 3, "list": [1, 2]}"#)
            .map_err(|e| anyhow!(e))?;
        ensure!(Value::Object(map) == json!({"A": "foo", "n": 3, "list": [1, 2]}));
        Ok(())
    }

    #[rstest]
    #[case::syntax("{\"A\": ")]
    #[case::array("[1, 2, 3]")]
    #[case::scalar("\"just a string\"")]
    fn rejects_non_map_documents(#[case] data: &str) -> Result<()> {
        let Err(err) = Format::Json.decode(Path::new("env/prod.json"), data) else {
            return Err(anyhow!("expected {data:?} to be rejected"));
        };
        ensure!(err.kind() == ErrorKind::Decode, "{err}");
        ensure!(err.to_string().contains("env/prod.json"), "{err}");
        Ok(())
    }

    #[cfg(feature = "toml")]
    #[test]
    fn decodes_toml_tables() -> Result<()> {
        let map = Format::Toml
            .decode(Path::new("default.toml"), "A = \"foo\"\n[nested]\nx = 1\n")
            .map_err(|e| anyhow!(e))?;
        ensure!(Value::Object(map) == json!({"A": "foo", "nested": {"x": 1}}));
        Ok(())
    }

    #[cfg(feature = "toml")]
    #[test]
    fn toml_syntax_errors_name_the_fragment() -> Result<()> {
        let Err(err) = Format::Toml.decode(Path::new("default.toml"), "A = ") else {
            return Err(anyhow!("expected invalid TOML to fail"));
        };
        ensure!(err.kind() == ErrorKind::Decode);
        ensure!(err.to_string().contains("default.toml"), "{err}");
        Ok(())
    }

    #[cfg(feature = "json5")]
    #[test]
    fn decodes_json5_documents() -> Result<()> {
        let map = Format::Json5
            .decode(Path::new("default.json5"), "{ A: 'foo', // comment\n }")
            .map_err(|e| anyhow!(e))?;
        ensure!(Value::Object(map) == json!({"A": "foo"}));
        Ok(())
    }

    #[rstest]
    #[case("json", Some(Format::Json))]
    #[case(" Json ", Some(Format::Json))]
    #[case("yaml", None)]
    fn parses_format_names(#[case] raw: &str, #[case] expected: Option<Format>) {
        assert_eq!(raw.parse::<Format>().ok(), expected);
    }
}
