use crate::common::{self, record};

use std::{collections, ops};

/// Logical operator for combining conditions.
#[derive(Clone, Debug, PartialEq)]
pub enum LogicalOperator {
    /// Logical AND - all conditions must be true.
    And,
    /// Logical OR - at least one condition must be true.
    Or,
}

impl ops::Deref for LogicalOperator {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        match self {
            Self::And => " AND ",
            Self::Or => " OR ",
        }
    }
}

/// Attribute presence check.
///
/// Books are schemaless, so presence is the only property the store is asked
/// to test.
#[derive(Clone, Debug, PartialEq)]
pub enum Condition {
    /// The attribute is present on the item.
    Exists,
    /// The attribute is absent from the item.
    NotExists,
}

impl Condition {
    fn get_expression(&self, key_placeholder: &str) -> String {
        match self {
            Self::Exists => format!("attribute_exists({key_placeholder})"),
            Self::NotExists => format!("attribute_not_exists({key_placeholder})"),
        }
    }

    fn matches(&self, item: &record::Item, name: &str) -> bool {
        match self {
            Self::Exists => item.contains_key(name),
            Self::NotExists => !item.contains_key(name),
        }
    }
}

/// Condition applied to an attribute.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyCondition {
    /// The condition to apply to the attribute.
    pub condition: Condition,
    /// The name of the attribute to apply the condition to.
    pub name: String,
}

impl KeyCondition {
    /// Condition requiring `name` to be present.
    pub fn exists(name: impl Into<String>) -> Self {
        Self {
            condition: Condition::Exists,
            name: name.into(),
        }
    }
}

/// Map of conditions with logical operators.
///
/// ```rust
/// use books_dynamodb::common::{ExpressionInput, condition};
///
/// let map = condition::ConditionMap::Leaves(
///     condition::LogicalOperator::And,
///     vec![
///         condition::KeyCondition::exists("prestado_a"),
///         condition::KeyCondition::exists("retorno_fecha"),
///     ],
/// );
/// let input: ExpressionInput = map.into();
/// assert_eq!(
///     input.expression,
///     "attribute_exists(#prestado_a) AND attribute_exists(#retorno_fecha)",
/// );
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum ConditionMap {
    /// Leaf conditions - flat list of conditions combined with the logical operator.
    Leaves(LogicalOperator, Vec<KeyCondition>),
    /// Node conditions - nested groups combined with the logical operator.
    Node(LogicalOperator, Vec<ConditionMap>),
}

impl From<ConditionMap> for common::ExpressionInput {
    fn from(condition_map: ConditionMap) -> Self {
        condition_map.get_expression_operation_recursive(false)
    }
}

impl ConditionMap {
    fn get_expression_operation_recursive(self, is_nested: bool) -> common::ExpressionInput {
        let (operator, operations, is_composite) = match self {
            Self::Leaves(operator, key_conditions) => {
                let is_composite = is_nested && key_conditions.len() > 1;
                let operations = key_conditions
                    .into_iter()
                    .map(|key_condition| {
                        let placeholder = common::name_placeholder(&key_condition.name);
                        let expression = key_condition.condition.get_expression(&placeholder);
                        common::ExpressionInput {
                            expression,
                            expression_attribute_names: collections::HashMap::from([(
                                placeholder,
                                key_condition.name,
                            )]),
                            ..Default::default()
                        }
                    })
                    .collect();
                (operator, operations, is_composite)
            }
            Self::Node(operator, children) => {
                let is_composite = is_nested && children.len() > 1;
                let operations = children
                    .into_iter()
                    .map(|child| child.get_expression_operation_recursive(true))
                    .collect();
                (operator, operations, is_composite)
            }
        };
        let mut operation = common::ExpressionInput::merge(&operator, operations);
        if is_composite {
            operation.expression = format!("({})", operation.expression);
        }
        operation
    }

    /// Evaluate the condition against an item held in memory.
    pub fn matches(&self, item: &record::Item) -> bool {
        match self {
            Self::Leaves(operator, key_conditions) => {
                let results = key_conditions.iter().map(|key_condition| {
                    key_condition.condition.matches(item, &key_condition.name)
                });
                combine(operator, results)
            }
            Self::Node(operator, children) => {
                let results = children.iter().map(|child| child.matches(item));
                combine(operator, results)
            }
        }
    }
}

fn combine(operator: &LogicalOperator, mut results: impl Iterator<Item = bool>) -> bool {
    match operator {
        LogicalOperator::And => results.all(|result| result),
        LogicalOperator::Or => results.any(|result| result),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use aws_sdk_dynamodb::types;
    use rstest::rstest;

    #[rstest]
    #[case::single_exists(
        ConditionMap::Leaves(
            LogicalOperator::And,
            vec![
                KeyCondition::exists("id"),
            ]
        ),
        common::ExpressionInput {
            expression: "attribute_exists(#id)".to_string(),
            expression_attribute_names: collections::HashMap::from(
                [
                    ("#id".to_string(), "id".to_string()),
                ]
            ),
            ..Default::default()
        }
    )]
    #[case::leaves_or(
        ConditionMap::Leaves(
            LogicalOperator::Or,
            vec![
                KeyCondition::exists("a"),
                KeyCondition {
                    name: "b".to_string(),
                    condition: Condition::NotExists,
                },
            ]
        ),
        common::ExpressionInput {
            expression: "attribute_exists(#a) OR attribute_not_exists(#b)".to_string(),
            expression_attribute_names: collections::HashMap::from(
                [
                    ("#a".to_string(), "a".to_string()),
                    ("#b".to_string(), "b".to_string()),
                ]
            ),
            ..Default::default()
        }
    )]
    #[case::nested_groups(
        ConditionMap::Node(
            LogicalOperator::And,
            vec![
                ConditionMap::Leaves(
                    LogicalOperator::Or,
                    vec![
                        KeyCondition::exists("a"),
                        KeyCondition::exists("b"),
                    ]
                ),
                ConditionMap::Leaves(
                    LogicalOperator::And,
                    vec![
                        KeyCondition::exists("c"),
                    ]
                ),
            ]
        ),
        common::ExpressionInput {
            expression: "(attribute_exists(#a) OR attribute_exists(#b)) AND attribute_exists(#c)".to_string(),
            expression_attribute_names: collections::HashMap::from(
                [
                    ("#a".to_string(), "a".to_string()),
                    ("#b".to_string(), "b".to_string()),
                    ("#c".to_string(), "c".to_string()),
                ]
            ),
            ..Default::default()
        }
    )]
    fn test_condition_map_to_expression(
        #[case] condition_map: ConditionMap,
        #[case] expected: common::ExpressionInput,
    ) {
        let actual: common::ExpressionInput = condition_map.into();
        assert_eq!(actual, expected);
    }

    #[rstest]
    #[case::both_present(&["prestado_a", "retorno_fecha"], true)]
    #[case::one_missing(&["prestado_a"], false)]
    #[case::none(&[], false)]
    fn test_matches_and(#[case] present: &[&str], #[case] expected: bool) {
        let item: record::Item = present
            .iter()
            .map(|name| (name.to_string(), types::AttributeValue::S("x".to_string())))
            .collect();
        let condition_map = ConditionMap::Leaves(
            LogicalOperator::And,
            vec![
                KeyCondition::exists("prestado_a"),
                KeyCondition::exists("retorno_fecha"),
            ],
        );
        assert_eq!(condition_map.matches(&item), expected);
    }

    #[rstest]
    #[case::first_present(&["a"], true)]
    #[case::second_present(&["b"], true)]
    #[case::none(&["c"], false)]
    fn test_matches_or(#[case] present: &[&str], #[case] expected: bool) {
        let item: record::Item = present
            .iter()
            .map(|name| (name.to_string(), types::AttributeValue::Bool(true)))
            .collect();
        let condition_map = ConditionMap::Leaves(
            LogicalOperator::Or,
            vec![KeyCondition::exists("a"), KeyCondition::exists("b")],
        );
        assert_eq!(condition_map.matches(&item), expected);
    }

    #[test]
    fn test_matches_nested_or() {
        let item = record::Item::from([("b".to_string(), types::AttributeValue::Bool(true))]);
        let condition_map = ConditionMap::Node(
            LogicalOperator::Or,
            vec![
                ConditionMap::Leaves(LogicalOperator::And, vec![KeyCondition::exists("a")]),
                ConditionMap::Leaves(
                    LogicalOperator::And,
                    vec![KeyCondition {
                        name: "a".to_string(),
                        condition: Condition::NotExists,
                    }],
                ),
            ],
        );
        assert!(condition_map.matches(&item));
    }
}
