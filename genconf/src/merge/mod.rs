//! Overlay of fragment documents onto a caller-owned target.
//!
//! The overlay is flat: top-level keys present in a fragment replace the
//! target's values for those keys and every other key is left untouched.
//! Nested maps and arrays are replaced wholesale, never merged key by key, so
//! a fragment that sets `database.port` must restate the rest of `database`.
//!
//! Each fragment is applied by serialising the target to a JSON map,
//! overlaying the fragment and deserialising the result. Targets must
//! therefore round-trip through `serde_json`: [`check_target`] verifies this
//! once per load before any fragment is applied. Fields marked
//! `#[serde(skip)]` do not survive the round trip and are reset to their
//! default value whenever a fragment is applied.
//!
//! A top-level `null` is an ordinary value. It clears `Option` fields and is
//! rejected with a decode error for fields that cannot hold it, rather than
//! being ignored.

pub mod format;

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde::ser::Error as _;
use serde_json::{Map, Value};
use tracing::debug;

use crate::{FragmentResultExt, GenconfError, GenconfResult, Override};

use self::format::Format;

/// Serialises `target` into its top-level JSON map.
///
/// # Errors
///
/// Returns [`GenconfError::Target`] when `target` fails to serialise or does
/// not serialise to a map.
pub fn to_document<T: Serialize>(target: &T) -> GenconfResult<Map<String, Value>> {
    match serde_json::to_value(target)? {
        Value::Object(map) => Ok(map),
        other => Err(GenconfError::from(serde_json::Error::custom(format!(
            "expected a map, found {}",
            kind_name(&other)
        )))),
    }
}

const fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a map",
    }
}

/// Verifies that `target` survives a round trip through its JSON map.
///
/// # Errors
///
/// Returns [`GenconfError::Target`] when `target` is not map-shaped or its
/// serialised form no longer deserialises as `T`, for example because a
/// `skip_serializing_if` field lacks `#[serde(default)]`.
pub fn check_target<T>(target: &T) -> GenconfResult<()>
where
    T: Serialize + DeserializeOwned,
{
    let document = to_document(target)?;
    serde_json::from_value::<T>(Value::Object(document))?;
    Ok(())
}

/// Replaces the keys of `base` with those present in `fragment`.
///
/// # Examples
///
/// ```rust
/// use genconf::merge::overlay;
/// use serde_json::{Value, json};
///
/// let Value::Object(mut base) = json!({"a": 1, "nested": {"x": 1, "y": 2}}) else { unreachable!() };
/// let Value::Object(fragment) = json!({"nested": {"y": 3}, "b": 2}) else { unreachable!() };
/// overlay(&mut base, fragment);
/// assert_eq!(Value::Object(base), json!({"a": 1, "b": 2, "nested": {"y": 3}}));
/// ```
pub fn overlay(base: &mut Map<String, Value>, fragment: Map<String, Value>) {
    base.extend(fragment);
}

/// Applies one decoded `fragment` onto `target`.
///
/// `target` is only replaced once the overlaid document deserialises, so a
/// failure leaves it as it was before this fragment. Callers applying
/// documents directly should run [`check_target`] first; otherwise a target
/// that does not round-trip is reported as a decode failure of `source`.
///
/// # Errors
///
/// Returns [`GenconfError::Target`] when `target` is not map-shaped and
/// [`GenconfError::Decode`] naming `source` when the overlaid document no
/// longer deserialises as `T`.
pub fn apply_document<T>(
    target: &mut T,
    fragment: Map<String, Value>,
    source: &Path,
) -> GenconfResult<()>
where
    T: Serialize + DeserializeOwned,
{
    let mut document = to_document(target)?;
    overlay(&mut document, fragment);
    *target = serde_json::from_value(Value::Object(document)).decode_context(source)?;
    Ok(())
}

/// Reads, decodes and applies the fragment behind `item` onto `target`.
///
/// # Errors
///
/// Returns [`GenconfError::Read`] when the fragment cannot be read,
/// [`GenconfError::Decode`] when it is not valid UTF-8 or cannot be decoded
/// or applied, and
/// [`GenconfError::Target`] when `target` is not map-shaped.
pub fn apply<T>(item: &Override, format: Format, target: &mut T) -> GenconfResult<()>
where
    T: Serialize + DeserializeOwned,
{
    let path = item.path();
    let bytes = fs::read(path).read_context(path)?;
    let data = std::str::from_utf8(&bytes).decode_context(path)?;
    let fragment = format.decode(path, data)?;
    debug!(
        path = %path.display(),
        tuple = %item.tuple(),
        cardinality = item.tuple().cardinality(),
        keys = fragment.len(),
        "applying fragment"
    );
    apply_document(target, fragment, path)
}
