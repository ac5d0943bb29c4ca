//! Record store gateway.
//!
//! Handlers talk to the table through [`BookStore`], which only ever sees
//! typed items and pre-rendered update expressions.

/// Store backed by a DynamoDB table.
pub mod dynamo;

/// Store held in process memory.
pub mod memory;

pub use dynamo::DynamoStore;
pub use memory::MemoryStore;

use crate::{
    Result,
    common::{self, condition, record},
};

pub(crate) const CREATE_FAILED: &str = "Error creating book";
pub(crate) const GET_FAILED: &str = "Error getting book by ID";
pub(crate) const SCAN_FAILED: &str = "Error getting all books";
pub(crate) const UPDATE_FAILED: &str = "Error updating book";

/// Persistence operations needed by the book handlers.
#[async_trait::async_trait]
pub trait BookStore: Send + Sync {
    /// Write a new book, replacing any item with the same identity.
    async fn put(&self, item: record::Item) -> Result<()>;

    /// Fetch a book by identity.
    async fn get(&self, id: &str) -> Result<Option<record::Item>>;

    /// Fetch every book, optionally keeping only those matching `filter`.
    async fn scan(&self, filter: Option<condition::ConditionMap>) -> Result<Vec<record::Item>>;

    /// Apply a `SET` update to an existing book and return it as written.
    ///
    /// Returns `None` without writing anything when the book does not exist.
    async fn update(
        &self,
        id: &str,
        update_expression: common::ExpressionInput,
    ) -> Result<Option<record::Item>>;
}
