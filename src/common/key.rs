use crate::common::record;

use serde::Serialize;
use serde_dynamo::{Error, Result, to_attribute_value};

/// Primary key of a book.
///
/// ```rust
/// use books_dynamodb::common::key;
///
/// let key = key::Key::id("1");
/// assert_eq!(key.name, "id");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Key<T> {
    /// The attribute name of the key.
    pub name: String,
    /// The value of the key.
    pub value: T,
}

impl Key<String> {
    /// Key addressing a book by its identity attribute.
    pub fn id(value: impl Into<String>) -> Self {
        Self {
            name: record::ID.to_string(),
            value: value.into(),
        }
    }
}

impl<T: Serialize> TryFrom<Key<T>> for record::Item {
    type Error = Error;

    fn try_from(key: Key<T>) -> Result<Self> {
        let value = to_attribute_value(key.value)?;
        Ok(Self::from([(key.name, value)]))
    }
}
