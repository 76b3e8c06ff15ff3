//! YAML format

use super::{ConfigFormat, FormatError};
use crate::Document;
use serde_json::{Map, Value};
use serde_yaml_ng::Value as YamlValue;

/// Decode YAML text
///
/// Whatever the YAML engine produces is accepted, including an empty (`null`)
/// document. Mapping keys that are not strings are stringified and tags are
/// dropped, so the result always fits the JSON-shaped [`Document`].
pub(super) fn parse(contents: &str) -> Result<Document, FormatError> {
    let yaml: YamlValue = serde_yaml_ng::from_str(contents)
        .map_err(|e| FormatError::decode(ConfigFormat::Yaml, e.to_string()))?;
    Ok(to_document(yaml))
}

/// Dump a document as YAML with default formatting
///
/// The engine output is returned as is. Its trailing line breaks belong to the
/// document: a final `|+` block keeps every one of them.
pub(super) fn serialize(data: &Document) -> Result<String, FormatError> {
    serde_yaml_ng::to_string(data)
        .map_err(|e| FormatError::encode(ConfigFormat::Yaml, e.to_string()))
}

fn to_document(value: YamlValue) -> Value {
    match value {
        YamlValue::Null => Value::Null,
        YamlValue::Bool(b) => Value::Bool(b),
        YamlValue::Number(n) => number_to_document(&n),
        YamlValue::String(s) => Value::String(s),
        YamlValue::Sequence(items) => Value::Array(items.into_iter().map(to_document).collect()),
        YamlValue::Mapping(mapping) => {
            let mut map = Map::with_capacity(mapping.len());
            for (key, value) in mapping {
                map.insert(key_to_string(key), to_document(value));
            }
            Value::Object(map)
        }
        YamlValue::Tagged(tagged) => to_document(tagged.value),
    }
}

fn number_to_document(n: &serde_yaml_ng::Number) -> Value {
    if let Some(i) = n.as_i64() {
        return Value::from(i);
    }
    if let Some(u) = n.as_u64() {
        return Value::from(u);
    }

    let f = n.as_f64().unwrap_or(f64::NAN);
    match serde_json::Number::from_f64(f) {
        Some(number) => Value::Number(number),
        None if f.is_nan() => Value::String(".nan".to_string()),
        None if f > 0.0 => Value::String(".inf".to_string()),
        None => Value::String("-.inf".to_string()),
    }
}

fn key_to_string(key: YamlValue) -> String {
    match key {
        YamlValue::String(s) => s,
        YamlValue::Null => String::new(),
        YamlValue::Bool(b) => b.to_string(),
        YamlValue::Number(n) => n.to_string(),
        YamlValue::Tagged(tagged) => key_to_string(tagged.value),
        complex => serde_yaml_ng::to_string(&complex)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_nested_document() {
        let data = parse(
            r#"
name: site
debug: false
plugins:
  - akismet
  - jetpack
database:
  host: localhost
  port: 3306
"#,
        )
        .unwrap();

        assert_eq!(
            data,
            json!({
                "name": "site",
                "debug": false,
                "plugins": ["akismet", "jetpack"],
                "database": {"host": "localhost", "port": 3306}
            })
        );
    }

    #[test]
    fn test_parse_null_document_is_accepted() {
        assert_eq!(parse("~").unwrap(), Value::Null);
        assert_eq!(parse("null").unwrap(), Value::Null);
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let err = parse("key: [unclosed").unwrap_err();
        assert_eq!(err.format(), ConfigFormat::Yaml);
        assert!(matches!(err, FormatError::Decode { .. }));
    }

    #[test]
    fn test_parse_non_string_keys() {
        let data = parse("1: one\ntrue: enabled\n~: nothing\n").unwrap();
        assert_eq!(data, json!({"1": "one", "true": "enabled", "": "nothing"}));
    }

    #[test]
    fn test_parse_drops_tags() {
        let data = parse("value: !custom 5\n").unwrap();
        assert_eq!(data, json!({"value": 5}));
    }

    #[test]
    fn test_parse_non_finite_floats() {
        let data = parse("a: .inf\nb: -.inf\nc: .nan\n").unwrap();
        assert_eq!(data, json!({"a": ".inf", "b": "-.inf", "c": ".nan"}));
    }

    #[test]
    fn test_parse_keeps_key_order() {
        let data = parse("zeta: 1\nalpha: 2\nmid: 3\n").unwrap();
        let keys: Vec<&String> = data.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_serialize_ends_with_single_newline() {
        let data = json!({"a": 1, "b": ["x", "y"]});
        let text = serialize(&data).unwrap();
        assert!(text.starts_with("a: 1\n"));
        assert!(text.ends_with('\n'));
        assert!(!text.ends_with("\n\n"));
        assert_eq!(parse(&text).unwrap(), data);
    }

    #[test]
    fn test_round_trip_keeps_trailing_newlines_of_last_value() {
        for data in [
            json!({"last": "a\n\n\n"}),
            json!({"first": "echo hi\n\n", "last": "b\n\n"}),
            json!({"nested": {"script": "run\n\n\n"}}),
        ] {
            let text = serialize(&data).unwrap();
            assert_eq!(parse(&text).unwrap(), data, "{text:?}");
        }
    }

    #[test]
    fn test_serialize_empty_mapping_is_parseable() {
        let text = serialize(&json!({})).unwrap();
        assert_eq!(parse(&text).unwrap(), json!({}));
    }
}
