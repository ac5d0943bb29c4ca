//! Write operations for modifying books in DynamoDB.
//!
//! This module provides operations for writing data to DynamoDB:
//! - Putting newly created books
//! - Updating individual fields of an existing book

/// Common utilities and types for write operations.
pub mod common;

/// Put item operation for creating books.
pub mod put_item;

/// Update item operation and the SET expression builder.
pub mod update_item;
