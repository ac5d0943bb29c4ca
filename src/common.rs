//! Common utilities for book storage.
//!
//! This module provides the marshalling between JSON books and DynamoDB items,
//! plus the key and condition types shared by read and write operations.

/// Attribute existence conditions for filters and conditional writes.
pub mod condition;

/// Key type identifying a book in the table.
pub mod key;

/// Record codec: whole books to and from typed items.
pub mod record;

/// Type coercion codec: single values to and from typed attribute values.
pub mod value;

use aws_sdk_dynamodb::types;
use std::collections;

pub(crate) fn name_placeholder(identifier: &str) -> String {
    format!("#{identifier}")
}

fn get_expression(left: String, operator: &str, right: String) -> String {
    if left.is_empty() {
        right
    } else if right.is_empty() {
        left
    } else {
        format!("{left}{operator}{right}")
    }
}

/// A rendered expression together with the aliases and values it references.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpressionInput {
    /// The expression text, e.g. `SET #attr0 = :val0`.
    pub expression: String,
    /// Alias (`#name`) to real attribute name.
    pub expression_attribute_names: collections::HashMap<String, String>,
    /// Placeholder (`:name`) to typed value.
    pub expression_attribute_values: collections::HashMap<String, types::AttributeValue>,
}

impl ExpressionInput {
    pub(crate) fn merge(operator: &str, items: Vec<Self>) -> Self {
        let mut operation = Self::default();
        for item in items {
            operation
                .expression_attribute_names
                .extend(item.expression_attribute_names);
            operation
                .expression_attribute_values
                .extend(item.expression_attribute_values);
            operation.expression = get_expression(operation.expression, operator, item.expression);
        }
        operation
    }

    pub(crate) fn merge_into(
        self,
        names: &mut Option<collections::HashMap<String, String>>,
        values: &mut Option<collections::HashMap<String, types::AttributeValue>>,
    ) -> String {
        match names {
            Some(existing) => existing.extend(self.expression_attribute_names),
            None => *names = Some(self.expression_attribute_names),
        }
        if !self.expression_attribute_values.is_empty() {
            match values {
                Some(existing) => existing.extend(self.expression_attribute_values),
                None => *values = Some(self.expression_attribute_values),
            }
        }
        self.expression
    }
}
