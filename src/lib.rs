#![deny(missing_docs)]
#![deny(warnings)]

//! # Books on DynamoDB
//!
//! CRUD handlers for a collection of loosely structured books kept in a
//! schemaless DynamoDB table.
//!
//! ## Overview
//!
//! Books arrive as arbitrary JSON objects. The table only understands a small
//! set of typed attribute values, so this crate provides:
//! - A type coercion codec between JSON values and attribute values
//! - A record codec applying it across a whole book
//! - A builder turning a partial book into a parameterized `SET` update
//! - Typed request builders for Get, Scan, Put and Update
//! - Stateless handlers mapping proxy events to those operations
//!
//! ## Quick Example
//!
//! ```rust
//! use aws_sdk_dynamodb::types::AttributeValue;
//! use books_dynamodb::{common::{ExpressionInput, record}, write::update_item::SetInputs};
//! use serde_json::json;
//!
//! let book = json!({"title": "Dune", "year": 1965, "tags": ["sf"]});
//! let item = record::to_item(book.as_object().unwrap());
//! assert_eq!(item["year"], AttributeValue::N("1965".to_string()));
//! assert_eq!(item["tags"], AttributeValue::S("[\"sf\"]".to_string()));
//!
//! let changes = json!({"title": "X", "year": 2020});
//! let update: ExpressionInput = SetInputs(changes.as_object().unwrap().clone())
//!     .try_into()
//!     .unwrap();
//! // The crate builds: "SET #attr0 = :val0, #attr1 = :val1"
//! assert_eq!(update.expression_attribute_names["#attr1"], "year");
//! ```
//!
//! ## Modules
//!
//! - [`mod@common`] - Codecs, keys, conditions and rendered expressions
//! - [`mod@read`] - Read operations (GetItem, Scan)
//! - [`mod@write`] - Write operations (PutItem, UpdateItem)
//! - [`mod@store`] - Record store gateway over a table or memory
//! - [`mod@handler`] - Request handlers and proxy event types
//! - [`mod@loans`] - Alerts for lent books due back soon
//! - [`mod@notify`] - Alert delivery over SNS or memory

/// Codecs, keys, conditions and rendered expressions.
pub mod common;

/// Runtime configuration read from the environment.
pub mod config;

mod error;

/// Request handlers and proxy event types.
pub mod handler;

/// Alerts for lent books due back soon.
pub mod loans;

/// Delivery of due-loan alerts.
pub mod notify;

/// Read operations for retrieving books.
///
/// This module provides operations for:
/// - Getting a single book by its identity
/// - Scanning the whole table
pub mod read;

/// Record store gateway.
pub mod store;

/// Write operations for modifying books.
///
/// This module provides operations for:
/// - Putting newly created books
/// - Updating fields of an existing book
pub mod write;

pub use error::{Error, Result};
