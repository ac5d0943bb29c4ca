use crate::{common::record, read};

use aws_sdk_dynamodb::{Client, error, operation};

/// scan operation
#[derive(Clone, Debug, Default, PartialEq)]
struct ScanInput {
    multiple_read_operation: read::common::MultipleReadInput,
}

/// Scan operation.
///
/// Follows every page of the table and returns the concatenated items.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use books_dynamodb::read;
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let scan = read::scan::Scan {
///     multiple_read_args: read::common::MultipleReadArgs {
///         table_name: "books".to_string(),
///         ..Default::default()
///     },
/// };
/// let items = scan.send(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scan {
    /// Additional read operation arguments (table name, filter, consistent read).
    pub multiple_read_args: read::common::MultipleReadArgs,
}

impl From<Scan> for ScanInput {
    fn from(scan: Scan) -> Self {
        Self {
            multiple_read_operation: scan.multiple_read_args.into(),
        }
    }
}

impl Scan {
    /// Execute the scan operation.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "books_dynamodb.scan", skip(client), err)
    )]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<Vec<record::Item>, error::SdkError<operation::scan::ScanError>> {
        let scan: ScanInput = self.into();
        let builder = client.scan();
        let mut paginator =
            crate::apply_multiple_read_operation!(builder, scan.multiple_read_operation)
                .into_paginator()
                .send();
        let mut items = Vec::new();
        while let Some(page) = paginator.next().await {
            if let Some(page_items) = page?.items {
                items.extend(page_items);
            }
        }
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common;

    use rstest::rstest;
    use std::collections;

    #[rstest]
    #[case::empty(
        Scan {
            multiple_read_args: read::common::MultipleReadArgs {
                table_name: "a".to_string(),
                ..Default::default()
            },
        },
        ScanInput {
            multiple_read_operation: read::common::MultipleReadInput {
                table_name: "a".to_string(),
                ..Default::default()
            },
        }
    )]
    #[case::filtered(
        Scan {
            multiple_read_args: read::common::MultipleReadArgs {
                condition: Some(
                    common::condition::ConditionMap::Leaves(
                        common::condition::LogicalOperator::And,
                        vec![
                            common::condition::KeyCondition::exists("b"),
                        ]
                    )
                ),
                table_name: "c".to_string(),
                ..Default::default()
            },
        },
        ScanInput {
            multiple_read_operation: read::common::MultipleReadInput {
                expression_attribute_names: Some(
                    collections::HashMap::from(
                        [
                            ("#b".to_string(), "b".to_string()),
                        ]
                    )
                ),
                filter_expression: Some(
                    "attribute_exists(#b)".to_string()
                ),
                table_name: "c".to_string(),
                ..Default::default()
            },
        }
    )]
    fn test_scan(#[case] args: Scan, #[case] expected: ScanInput) {
        let actual: ScanInput = args.into();
        assert_eq!(actual, expected);
    }
}
