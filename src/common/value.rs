use aws_sdk_dynamodb::types;
use serde_json::{Number, Value};

/// Encode a dynamic value as a typed attribute value.
///
/// Scalars map onto their native attribute type. Objects and arrays have no
/// attribute counterpart here and are flattened to their JSON text, so this
/// never fails.
///
/// ```rust
/// use aws_sdk_dynamodb::types::AttributeValue;
/// use books_dynamodb::common::value;
/// use serde_json::json;
///
/// assert_eq!(value::encode(&json!(2020)), AttributeValue::N("2020".to_string()));
/// assert_eq!(value::encode(&json!(["a"])), AttributeValue::S("[\"a\"]".to_string()));
/// ```
pub fn encode(value: &Value) -> types::AttributeValue {
    match value {
        Value::String(text) => types::AttributeValue::S(text.clone()),
        Value::Number(number) => types::AttributeValue::N(number.to_string()),
        Value::Bool(flag) => types::AttributeValue::Bool(*flag),
        Value::Null => types::AttributeValue::Null(true),
        Value::Object(_) | Value::Array(_) => {
            let text = serde_json::to_string(value).unwrap_or_else(|_| value.to_string());
            types::AttributeValue::S(text)
        }
    }
}

/// Decode a typed attribute value back into a dynamic value.
///
/// Strings wrapped in `{}` or `[]` are speculatively parsed as JSON, since the
/// stored item keeps no record of whether the text was originally a compound
/// value. A string that merely looks bracketed comes back as text when the
/// parse fails.
///
/// ```rust
/// use aws_sdk_dynamodb::types::AttributeValue;
/// use books_dynamodb::common::value;
/// use serde_json::json;
///
/// assert_eq!(value::decode(&AttributeValue::N("1.5".to_string())), json!(1.5));
/// assert_eq!(value::decode(&AttributeValue::S("[not json]".to_string())), json!("[not json]"));
/// ```
pub fn decode(attribute_value: &types::AttributeValue) -> Value {
    match attribute_value {
        types::AttributeValue::S(text) => decode_text(text),
        types::AttributeValue::N(text) => decode_number(text),
        types::AttributeValue::Bool(flag) => Value::Bool(*flag),
        other => Value::String(format!("{other:?}")),
    }
}

fn is_bracketed(text: &str) -> bool {
    (text.starts_with('{') && text.ends_with('}'))
        || (text.starts_with('[') && text.ends_with(']'))
}

fn decode_text(text: &str) -> Value {
    if is_bracketed(text) {
        if let Ok(value) = serde_json::from_str::<Value>(text) {
            return value;
        }
    }
    Value::String(text.to_string())
}

fn decode_number(text: &str) -> Value {
    if let Ok(integer) = text.parse::<i64>() {
        return Value::from(integer);
    }
    text.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .unwrap_or_else(|| Value::String(text.to_string()))
}
