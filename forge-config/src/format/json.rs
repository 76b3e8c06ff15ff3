//! JSON format

use super::{ConfigFormat, FormatError};
use crate::Document;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use std::borrow::Cow;

const INDENT: &[u8] = b"    ";

/// Decode JSON text
///
/// A document that decodes to `null`, `false` or zero is rejected: such a
/// file carries no configuration and almost always means a truncated or
/// placeholder file.
pub(super) fn parse(contents: &str) -> Result<Document, FormatError> {
    let data: Value = serde_json::from_str(contents)
        .map_err(|e| FormatError::decode(ConfigFormat::Json, e.to_string()))?;

    if is_falsy(&data) {
        return Err(FormatError::decode(
            ConfigFormat::Json,
            format!("document decodes to `{data}`"),
        ));
    }

    Ok(data)
}

/// Encode a document as a pretty-printed JSON object
pub(super) fn serialize(data: &Document) -> Result<String, FormatError> {
    let object = as_object(data);

    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    object
        .serialize(&mut serializer)
        .map_err(|e| FormatError::encode(ConfigFormat::Json, e.to_string()))?;

    let contents =
        String::from_utf8(buf).map_err(|e| FormatError::encode(ConfigFormat::Json, e.to_string()))?;
    if contents.is_empty() {
        return Err(FormatError::encode(ConfigFormat::Json, "empty output"));
    }

    Ok(contents)
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        _ => false,
    }
}

/// Coerce any document into a top-level object
///
/// `null` is the empty object, sequences are keyed by index, and any other
/// scalar is stored under `"scalar"`.
fn as_object(data: &Document) -> Cow<'_, Value> {
    match data {
        Value::Object(_) => Cow::Borrowed(data),
        Value::Null => Cow::Owned(Value::Object(Map::new())),
        Value::Array(items) => Cow::Owned(Value::Object(
            items
                .iter()
                .enumerate()
                .map(|(i, item)| (i.to_string(), item.clone()))
                .collect(),
        )),
        scalar => {
            let mut map = Map::new();
            map.insert("scalar".to_string(), scalar.clone());
            Cow::Owned(Value::Object(map))
        }
    }
}
