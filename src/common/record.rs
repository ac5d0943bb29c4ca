use crate::common::value;

use aws_sdk_dynamodb::types;
use serde_json::{Map, Value};
use std::collections;

/// Name of the identity attribute shared by every book.
pub const ID: &str = "id";

/// A dynamically typed book, keyed by field name in payload order.
pub type Record = Map<String, Value>;

/// A book as stored in the table.
pub type Item = collections::HashMap<String, types::AttributeValue>;

/// Encode a record for a create request.
///
/// Fields holding `null` are dropped instead of being stored as `NULL`.
pub fn to_item(record: &Record) -> Item {
    record
        .iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(name, value)| (name.clone(), value::encode(value)))
        .collect()
}

/// Decode a stored item back into a record.
pub fn from_item(item: &Item) -> Record {
    item.iter()
        .map(|(name, attribute_value)| (name.clone(), value::decode(attribute_value)))
        .collect()
}
