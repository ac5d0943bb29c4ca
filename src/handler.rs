//! Request handlers for the book collection.
//!
//! Each operation parses a proxy event, delegates to the codecs and the
//! [`store::BookStore`], and always answers with a [`ProxyResponse`]: failures
//! are mapped to a status code and a `{"message": ...}` body at this boundary.

/// Proxy event and response types.
pub mod proxy;

pub use proxy::{ProxyRequest, ProxyResponse};

use crate::{
    Error, Result,
    common::{self, record},
    loans, notify, store,
    write::update_item::SetInputs,
};

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

const MISSING_ID: &str = "Book ID is required";

/// Handlers for create, list, get and update over one store.
///
/// The store is built once per process and reused by every invocation.
#[derive(Debug)]
pub struct BookHandler<S> {
    store: S,
}

#[derive(Serialize)]
struct DueLoanReport {
    message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    notified: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Vec<loans::DueLoan>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notification: Option<loans::Notification>,
}

fn book_id(request: &ProxyRequest) -> Result<&str> {
    request
        .get_path_parameter(record::ID)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| Error::BadRequest(MISSING_ID.to_string()))
}

fn parse_record(request: &ProxyRequest) -> Result<record::Record> {
    let body = request.body.as_deref().unwrap_or_default();
    Ok(serde_json::from_str(body)?)
}

fn respond<T: Serialize>(operation: &str, status_code: u16, result: Result<T>) -> ProxyResponse {
    match result.and_then(|payload| ProxyResponse::json(status_code, &payload)) {
        Ok(response) => response,
        Err(error) => {
            log_failure(operation, &error);
            ProxyResponse::error(&error)
        }
    }
}

#[cfg(feature = "tracing")]
fn log_failure(operation: &str, error: &Error) {
    match error.status_code() {
        500 => tracing::error!(operation, %error, "request failed"),
        status_code => tracing::warn!(operation, status_code, %error, "request rejected"),
    }
}

#[cfg(not(feature = "tracing"))]
fn log_failure(_operation: &str, _error: &Error) {}

impl<S: store::BookStore> BookHandler<S> {
    /// Handler over `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Create a book from the request body and assign it a fresh `id`.
    ///
    /// Responds 201 with the stored book.
    pub async fn create(&self, request: &ProxyRequest) -> ProxyResponse {
        respond("create", 201, self.try_create(request).await)
    }

    /// List every book. Responds 200 with a JSON array.
    pub async fn list(&self, _request: &ProxyRequest) -> ProxyResponse {
        respond("list", 200, self.try_list().await)
    }

    /// Fetch the book named by the `id` path parameter.
    pub async fn get(&self, request: &ProxyRequest) -> ProxyResponse {
        respond("get", 200, self.try_get(request).await)
    }

    /// Apply the request body as a partial update to the book named by the
    /// `id` path parameter. Responds 200 with the full updated book.
    pub async fn update(&self, request: &ProxyRequest) -> ProxyResponse {
        respond("update", 200, self.try_update(request).await)
    }

    async fn try_create(&self, request: &ProxyRequest) -> Result<record::Record> {
        let mut book = parse_record(request)?;
        let id = uuid::Uuid::new_v4().to_string();
        book.insert(record::ID.to_string(), Value::String(id));
        self.store.put(record::to_item(&book)).await?;
        Ok(book)
    }

    async fn try_list(&self) -> Result<Vec<record::Record>> {
        let items = self.store.scan(None).await?;
        Ok(items.iter().map(record::from_item).collect())
    }

    async fn try_get(&self, request: &ProxyRequest) -> Result<record::Record> {
        let id = book_id(request)?;
        let item = self.store.get(id).await?.ok_or(Error::NotFound)?;
        Ok(record::from_item(&item))
    }

    async fn try_update(&self, request: &ProxyRequest) -> Result<record::Record> {
        let id = book_id(request)?;
        let mut changes = parse_record(request)?;
        changes.shift_remove(record::ID);
        if changes.is_empty() {
            return Err(Error::NoFieldsToUpdate);
        }
        let update_expression: common::ExpressionInput = SetInputs(changes).try_into()?;
        let item = self
            .store
            .update(id, update_expression)
            .await?
            .ok_or(Error::NotFound)?;
        Ok(record::from_item(&item))
    }

    /// Publish an alert through `notifier` for lent books due back within
    /// the alert window as of `now`.
    ///
    /// Nothing is published when no loan is due. Responds 200 with the due
    /// loans and the published notification, or 500 when the scan or the
    /// publish fails.
    pub async fn check_due_loans<N: notify::Notifier>(
        &self,
        notifier: &N,
        now: DateTime<Utc>,
    ) -> ProxyResponse {
        match self.try_check_due_loans(notifier, now).await {
            Ok(report) => respond("check_due_loans", 200, Ok(report)),
            Err(error) => {
                log_failure("check_due_loans", &error);
                let body = serde_json::json!({
                    "message": "Error processing due loans",
                    "error": error.to_string(),
                });
                ProxyResponse::json(500, &body).unwrap_or_else(|_| ProxyResponse::error(&error))
            }
        }
    }

    async fn try_check_due_loans<N: notify::Notifier>(
        &self,
        notifier: &N,
        now: DateTime<Utc>,
    ) -> Result<DueLoanReport> {
        let items = self.store.scan(Some(loans::lent_filter())).await?;
        let due = loans::due_loans(&items, now.date_naive());
        if due.is_empty() {
            return Ok(DueLoanReport {
                message: "No books due soon",
                notified: None,
                details: None,
                notification: None,
            });
        }
        let notification = loans::Notification::new(&due, now);
        notifier.publish(&notification).await?;
        Ok(DueLoanReport {
            message: "Due loans found",
            notified: Some(due.len()),
            details: Some(due),
            notification: Some(notification),
        })
    }
}
