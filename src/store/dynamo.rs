use crate::{
    Error, Result,
    common::{self, condition, key, record},
    read, store, write,
};

use aws_sdk_dynamodb::{Client, error::DisplayErrorContext};

/// [`store::BookStore`] over a single DynamoDB table.
///
/// The client is cheap to clone and holds no per-request state, so one
/// instance is built per process and shared by every invocation.
#[derive(Clone, Debug)]
pub struct DynamoStore {
    client: Client,
    table_name: String,
}

impl DynamoStore {
    /// Store writing to `table_name` through `client`.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Name of the backing table.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait::async_trait]
impl store::BookStore for DynamoStore {
    async fn put(&self, item: record::Item) -> Result<()> {
        let put_item = write::put_item::PutItem {
            item,
            write_args: write::common::WriteArgs {
                table_name: self.table_name.clone(),
                ..Default::default()
            },
        };
        put_item
            .send(&self.client)
            .await
            .map_err(|error| Error::storage(store::CREATE_FAILED, DisplayErrorContext(error)))?;
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<record::Item>> {
        let get_item = read::get_item::GetItem {
            key: key::Key::id(id),
            single_read_args: read::common::SingleReadArgs {
                table_name: self.table_name.clone(),
                ..Default::default()
            },
        };
        let output = get_item.send(&self.client).await.map_err(|error| {
            Error::storage(store::GET_FAILED, DisplayErrorContext(error))
        })?;
        Ok(output.item.filter(|item| !item.is_empty()))
    }

    async fn scan(&self, filter: Option<condition::ConditionMap>) -> Result<Vec<record::Item>> {
        let scan = read::scan::Scan {
            multiple_read_args: read::common::MultipleReadArgs {
                condition: filter,
                table_name: self.table_name.clone(),
                ..Default::default()
            },
        };
        scan.send(&self.client)
            .await
            .map_err(|error| Error::storage(store::SCAN_FAILED, DisplayErrorContext(error)))
    }

    async fn update(
        &self,
        id: &str,
        update_expression: common::ExpressionInput,
    ) -> Result<Option<record::Item>> {
        let update_item =
            write::update_item::UpdateItem::existing(id, update_expression, &self.table_name);
        match update_item.send(&self.client).await {
            Ok(output) => Ok(Some(output.attributes.unwrap_or_default())),
            Err(error)
                if error
                    .as_service_error()
                    .is_some_and(|error| error.is_conditional_check_failed_exception()) =>
            {
                Ok(None)
            }
            Err(error) => Err(Error::storage(
                store::UPDATE_FAILED,
                DisplayErrorContext(error),
            )),
        }
    }
}
