use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Serializer;

const INDENT: &[u8] = b"    ";

/// Serializes `value` as pretty JSON indented with four spaces.
///
/// # Returns
///
/// The JSON text, or the `serde_json` error if `value` cannot be serialized.
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
