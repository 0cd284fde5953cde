//! Raw ShellCheck diagnostic as it appears in a JSON report.

use serde::{Deserialize, Deserializer};

/// One report entry, before any normalization.
///
/// Positions are 32-bit; larger values make the entry invalid.
/// Every field is optional on the wire: absent or `null` numbers decode to
/// 0 and absent or `null` strings decode to the empty string. Extra fields
/// such as ShellCheck's `fix` are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    #[serde(default, deserialize_with = "null_as_default")]
    pub file: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub line: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub end_line: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub column: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub end_column: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub level: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
