use crate::{
    Error, Result,
    common::{self, condition, record},
    store,
};

use aws_sdk_dynamodb::types;
use indexmap::IndexMap;
use std::sync::RwLock;

/// [`store::BookStore`] kept in process memory, in insertion order.
///
/// Applies the same `SET` expressions and existence conditions as the table,
/// so handlers can be exercised without an endpoint.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RwLock<IndexMap<String, record::Item>>,
}

impl MemoryStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored books.
    pub fn len(&self) -> usize {
        self.items.read().map(|items| items.len()).unwrap_or_default()
    }

    /// Whether no book is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned<T>(_: T) -> Error {
    Error::Storage("book store lock poisoned".to_string())
}

fn identity(item: &record::Item) -> Result<String> {
    match item.get(record::ID) {
        Some(types::AttributeValue::S(id)) => Ok(id.clone()),
        _ => Err(Error::storage(
            store::CREATE_FAILED,
            "item has no string id attribute",
        )),
    }
}

fn apply_set(item: &mut record::Item, update_expression: &common::ExpressionInput) -> Result<()> {
    let malformed = || Error::storage(store::UPDATE_FAILED, "malformed update expression");
    let assignments = update_expression
        .expression
        .strip_prefix("SET ")
        .ok_or_else(malformed)?;
    for assignment in assignments.split(", ") {
        let (placeholder, value_placeholder) =
            assignment.split_once(" = ").ok_or_else(malformed)?;
        let name = update_expression
            .expression_attribute_names
            .get(placeholder)
            .ok_or_else(malformed)?;
        let value = update_expression
            .expression_attribute_values
            .get(value_placeholder)
            .ok_or_else(malformed)?;
        item.insert(name.clone(), value.clone());
    }
    Ok(())
}

#[async_trait::async_trait]
impl store::BookStore for MemoryStore {
    async fn put(&self, item: record::Item) -> Result<()> {
        let id = identity(&item)?;
        self.items.write().map_err(poisoned)?.insert(id, item);
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<record::Item>> {
        Ok(self.items.read().map_err(poisoned)?.get(id).cloned())
    }

    async fn scan(&self, filter: Option<condition::ConditionMap>) -> Result<Vec<record::Item>> {
        let items = self.items.read().map_err(poisoned)?;
        let items = items
            .values()
            .filter(|item| filter.as_ref().is_none_or(|filter| filter.matches(item)))
            .cloned()
            .collect();
        Ok(items)
    }

    async fn update(
        &self,
        id: &str,
        update_expression: common::ExpressionInput,
    ) -> Result<Option<record::Item>> {
        let mut items = self.items.write().map_err(poisoned)?;
        let Some(stored) = items.get(id) else {
            return Ok(None);
        };
        let mut updated = stored.clone();
        apply_set(&mut updated, &update_expression)?;
        items.insert(id.to_string(), updated.clone());
        Ok(Some(updated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{store::BookStore, write::update_item::SetInputs};

    use serde_json::json;

    fn book(id: &str, title: &str) -> record::Item {
        record::Item::from([
            (record::ID.to_string(), types::AttributeValue::S(id.to_string())),
            ("title".to_string(), types::AttributeValue::S(title.to_string())),
        ])
    }

    fn set(changes: serde_json::Value) -> common::ExpressionInput {
        let changes = changes.as_object().cloned().unwrap_or_default();
        SetInputs(changes).try_into().unwrap()
    }

    #[tokio::test]
    async fn test_put_then_get() {
        let store = MemoryStore::new();
        store.put(book("a", "Dune")).await.unwrap();

        assert_eq!(store.get("a").await.unwrap(), Some(book("a", "Dune")));
        assert_eq!(store.get("b").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_put_requires_string_identity() {
        let store = MemoryStore::new();
        let item = record::Item::from([(
            record::ID.to_string(),
            types::AttributeValue::N("1".to_string()),
        )]);

        let result = store.put(item).await;

        assert!(matches!(result, Err(Error::Storage(_))));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_scan_keeps_insertion_order_and_filters() {
        let store = MemoryStore::new();
        store.put(book("b", "Emma")).await.unwrap();
        let mut lent = book("a", "Dune");
        lent.insert(
            "prestado_a".to_string(),
            types::AttributeValue::S("Ana".to_string()),
        );
        store.put(lent.clone()).await.unwrap();

        let all = store.scan(None).await.unwrap();
        assert_eq!(all, vec![book("b", "Emma"), lent.clone()]);

        let filter = condition::ConditionMap::Leaves(
            condition::LogicalOperator::And,
            vec![condition::KeyCondition::exists("prestado_a")],
        );
        assert_eq!(store.scan(Some(filter)).await.unwrap(), vec![lent]);
    }

    #[tokio::test]
    async fn test_update_applies_set_and_returns_new_item() {
        let store = MemoryStore::new();
        store.put(book("a", "Dune")).await.unwrap();

        let updated = store
            .update("a", set(json!({"year": 1965, "title": "Dune Messiah"})))
            .await
            .unwrap();

        let mut expected = book("a", "Dune Messiah");
        expected.insert("year".to_string(), types::AttributeValue::N("1965".to_string()));
        assert_eq!(updated, Some(expected.clone()));
        assert_eq!(store.get("a").await.unwrap(), Some(expected));
    }

    #[tokio::test]
    async fn test_update_missing_book_writes_nothing() {
        let store = MemoryStore::new();

        let updated = store.update("missing", set(json!({"year": 1965}))).await.unwrap();

        assert_eq!(updated, None);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_update_rejects_unknown_placeholder() {
        let store = MemoryStore::new();
        store.put(book("a", "Dune")).await.unwrap();
        let update_expression = common::ExpressionInput {
            expression: "SET #attr0 = :val0".to_string(),
            ..Default::default()
        };

        let result = store.update("a", update_expression).await;

        assert!(matches!(result, Err(Error::Storage(_))));
        assert_eq!(store.get("a").await.unwrap(), Some(book("a", "Dune")));
    }
}
