//! Read operations for retrieving books from DynamoDB.
//!
//! This module provides operations for reading data from DynamoDB:
//! - Getting a single book by its identity
//! - Scanning the whole table, optionally filtered

/// Common utilities and types for read operations.
pub mod common;

/// Get item operation for retrieving a single book.
pub mod get_item;

/// Scan operation for retrieving every book in the table.
pub mod scan;
