use crate::common;

use std::collections;

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct SingleReadInput {
    pub(crate) consistent_read: Option<bool>,
    pub(crate) table_name: String,
}

/// Arguments for single-item read operations (GetItem).
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct SingleReadArgs {
    /// Whether to use a consistent read.
    ///
    /// `true` for strongly consistent reads, `false` or `None` for eventually consistent reads.
    pub consistent_read: Option<bool>,
    /// The name of the table to read from.
    pub table_name: String,
}

impl From<SingleReadArgs> for SingleReadInput {
    fn from(single_read_args: SingleReadArgs) -> Self {
        Self {
            consistent_read: single_read_args.consistent_read,
            table_name: single_read_args.table_name,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct MultipleReadInput {
    pub(crate) consistent_read: Option<bool>,
    pub(crate) expression_attribute_names: Option<collections::HashMap<String, String>>,
    pub(crate) filter_expression: Option<String>,
    pub(crate) table_name: String,
}

/// Arguments for multiple-item read operations (Scan).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MultipleReadArgs {
    /// Filter condition applied to every scanned item.
    pub condition: Option<common::condition::ConditionMap>,
    /// Whether to use a consistent read.
    pub consistent_read: Option<bool>,
    /// The name of the table to read from.
    pub table_name: String,
}

impl From<MultipleReadArgs> for MultipleReadInput {
    fn from(multiple_read_args: MultipleReadArgs) -> Self {
        let (expression_attribute_names, filter_expression) = match multiple_read_args.condition {
            Some(condition) => {
                let condition_operation: common::ExpressionInput = condition.into();
                (
                    Some(condition_operation.expression_attribute_names),
                    Some(condition_operation.expression),
                )
            }
            None => (None, None),
        };
        Self {
            consistent_read: multiple_read_args.consistent_read,
            expression_attribute_names,
            filter_expression,
            table_name: multiple_read_args.table_name,
        }
    }
}

/// apply common single read operation settings to a builder
#[macro_export]
macro_rules! apply_single_read_operation {
    ($builder:expr, $single_read_operation:expr) => {
        $builder
            .set_consistent_read($single_read_operation.consistent_read)
            .table_name($single_read_operation.table_name)
    };
}

/// apply common multiple read operation settings to a builder
#[macro_export]
macro_rules! apply_multiple_read_operation {
    ($builder:expr, $multiple_read_operation:expr) => {
        $builder
            .set_consistent_read($multiple_read_operation.consistent_read)
            .set_expression_attribute_names($multiple_read_operation.expression_attribute_names)
            .set_filter_expression($multiple_read_operation.filter_expression)
            .table_name($multiple_read_operation.table_name)
    };
}
