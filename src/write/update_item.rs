use crate::{
    Error,
    common::{self, key, record, value},
    write,
};

use aws_sdk_dynamodb::{Client, error, operation, types};
use std::collections;

/// Fields to assign in a single `SET` update.
///
/// Every field is aliased (`#attr0`, `#attr1`, ...) regardless of whether its
/// name is a reserved word, and its value is bound to a matching placeholder
/// (`:val0`, `:val1`, ...). The index follows the record's iteration order.
/// The identity attribute must already be removed by the caller.
///
/// ```rust
/// use books_dynamodb::{common::ExpressionInput, write::update_item::SetInputs};
/// use serde_json::json;
///
/// let changes = json!({"title": "X", "year": 2020});
/// let update: ExpressionInput = SetInputs(changes.as_object().unwrap().clone())
///     .try_into()
///     .unwrap();
/// assert_eq!(update.expression, "SET #attr0 = :val0, #attr1 = :val1");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SetInputs(pub record::Record);

impl TryFrom<SetInputs> for common::ExpressionInput {
    type Error = Error;

    fn try_from(set_inputs: SetInputs) -> Result<Self, Self::Error> {
        if set_inputs.0.is_empty() {
            return Err(Error::NoFieldsToUpdate);
        }
        let operations = set_inputs
            .0
            .into_iter()
            .enumerate()
            .map(|(index, (name, field_value))| {
                let placeholder = format!("#attr{index}");
                let value_placeholder = format!(":val{index}");
                let expression = format!("{placeholder} = {value_placeholder}");
                common::ExpressionInput {
                    expression,
                    expression_attribute_names: collections::HashMap::from([(placeholder, name)]),
                    expression_attribute_values: collections::HashMap::from([(
                        value_placeholder,
                        value::encode(&field_value),
                    )]),
                }
            })
            .collect();
        let mut operation = common::ExpressionInput::merge(", ", operations);
        operation.expression = format!("SET {}", operation.expression);
        Ok(operation)
    }
}

/// update item operation
#[derive(Clone, Debug, Default, PartialEq)]
struct UpdateItemInput {
    keys: record::Item,
    update_expression: String,
    write_operation: write::common::WriteInput,
}

/// Update item operation.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use books_dynamodb::{common, write};
/// use serde_json::json;
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let changes = json!({"year": 1965});
/// let update_item = write::update_item::UpdateItem {
///     key: common::key::Key::id("1"),
///     update_expression: write::update_item::SetInputs(changes.as_object().unwrap().clone())
///         .try_into()?,
///     write_args: write::common::WriteArgs {
///         table_name: "books".to_string(),
///         ..Default::default()
///     },
/// };
/// update_item.send(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateItem {
    /// The primary key of the book to update.
    pub key: key::Key<String>,
    /// The rendered update expression with its aliases and values.
    pub update_expression: common::ExpressionInput,
    /// Additional write operation arguments (table name, condition, return values).
    pub write_args: write::common::WriteArgs,
}

impl UpdateItem {
    /// Update that only applies when the book already exists and returns the
    /// full item as written.
    pub fn existing(
        id: impl Into<String>,
        update_expression: common::ExpressionInput,
        table_name: impl Into<String>,
    ) -> Self {
        Self {
            key: key::Key::id(id),
            update_expression,
            write_args: write::common::WriteArgs {
                condition: Some(common::condition::ConditionMap::Leaves(
                    common::condition::LogicalOperator::And,
                    vec![common::condition::KeyCondition::exists(record::ID)],
                )),
                return_values: Some(types::ReturnValue::AllNew),
                table_name: table_name.into(),
            },
        }
    }
}

impl TryFrom<UpdateItem> for UpdateItemInput {
    type Error = serde_dynamo::Error;

    fn try_from(update_item: UpdateItem) -> Result<Self, Self::Error> {
        let keys = update_item.key.try_into()?;
        let mut write_operation: write::common::WriteInput = update_item.write_args.into();
        let update_expression = write_operation.merge_expression(update_item.update_expression);
        let operation = Self {
            keys,
            update_expression,
            write_operation,
        };
        Ok(operation)
    }
}

impl UpdateItem {
    /// Execute the update item operation.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "books_dynamodb.update_item", skip(client), err)
    )]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::update_item::UpdateItemOutput,
        error::SdkError<operation::update_item::UpdateItemError>,
    > {
        let update_item: UpdateItemInput = self.try_into().map_err(error::BuildError::other)?;
        let builder = client
            .update_item()
            .set_key(Some(update_item.keys))
            .update_expression(update_item.update_expression);
        crate::apply_write_operation!(builder, update_item.write_operation)
            .send()
            .await
    }
}
