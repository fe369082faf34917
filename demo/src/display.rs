//! Console rendering of populated records.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// Serialize `value` as JSON, indenting each level by `indent` spaces.
pub fn to_pretty_json<T: Serialize>(value: &T, indent: usize) -> serde_json::Result<String> {
    let indent = " ".repeat(indent);
    let mut out = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(indent.as_bytes()));
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}
