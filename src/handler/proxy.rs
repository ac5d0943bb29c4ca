use crate::{Error, Result};

use serde::{Deserialize, Serialize};
use std::collections;

const BAD_REQUEST_BODY: &str = r#"{"message": "Bad request"}"#;
const NOT_FOUND_BODY: &str = r#"{"message": "Book not found"}"#;
const INTERNAL_ERROR_BODY: &str = r#"{"message": "Internal server error"}"#;

/// Inbound proxy event: the parts of an HTTP request the handlers read.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyRequest {
    /// Route parameters such as `id`.
    #[serde(default)]
    pub path_parameters: Option<collections::HashMap<String, String>>,
    /// Raw request body.
    #[serde(default)]
    pub body: Option<String>,
}

impl ProxyRequest {
    /// Request carrying `body` and no path parameters.
    pub fn with_body(body: impl Into<String>) -> Self {
        Self {
            body: Some(body.into()),
            ..Default::default()
        }
    }

    /// Add a path parameter.
    pub fn path_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.path_parameters
            .get_or_insert_with(Default::default)
            .insert(name.into(), value.into());
        self
    }

    /// Look up a path parameter.
    pub fn get_path_parameter(&self, name: &str) -> Option<&str> {
        self.path_parameters
            .as_ref()
            .and_then(|parameters| parameters.get(name))
            .map(String::as_str)
    }
}

/// Outbound proxy response.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    /// HTTP status code.
    pub status_code: u16,
    /// Response headers.
    pub headers: collections::HashMap<String, String>,
    /// JSON body.
    pub body: String,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    message: &'a str,
}

impl ProxyResponse {
    fn new(status_code: u16, body: String) -> Self {
        Self {
            status_code,
            headers: collections::HashMap::from([(
                "Content-Type".to_string(),
                "application/json".to_string(),
            )]),
            body,
        }
    }

    /// Response with `payload` serialized as the JSON body.
    pub fn json<T: Serialize + ?Sized>(status_code: u16, payload: &T) -> Result<Self> {
        let body = serde_json::to_string(payload)?;
        Ok(Self::new(status_code, body))
    }

    /// `{"message": ...}` response for `error`.
    ///
    /// Falls back to a fixed body for the status when the message cannot be
    /// serialized, so building it never fails.
    pub fn error(error: &Error) -> Self {
        let status_code = error.status_code();
        let message = error.to_string();
        let body = serde_json::to_string(&ErrorBody { message: &message })
            .unwrap_or_else(|_| fallback_body(status_code).to_string());
        Self::new(status_code, body)
    }

    /// Parse the body back into JSON.
    pub fn json_body(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

pub(crate) fn fallback_body(status_code: u16) -> &'static str {
    match status_code {
        400 => BAD_REQUEST_BODY,
        404 => NOT_FOUND_BODY,
        _ => INTERNAL_ERROR_BODY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case::bad_request(
        Error::BadRequest("Book ID is required".to_string()),
        400,
        json!({"message": "Book ID is required"})
    )]
    #[case::no_fields(
        Error::NoFieldsToUpdate,
        400,
        json!({"message": "No fields to update"})
    )]
    #[case::not_found(
        Error::NotFound,
        404,
        json!({"message": "Book not found"})
    )]
    #[case::internal(
        Error::Storage("Error getting all books: timeout".to_string()),
        500,
        json!({"message": "Error getting all books: timeout"})
    )]
    fn test_error_response(
        #[case] error: Error,
        #[case] status_code: u16,
        #[case] body: serde_json::Value,
    ) {
        let response = ProxyResponse::error(&error);
        assert_eq!(response.status_code, status_code);
        assert_eq!(response.json_body().unwrap(), body);
        assert_eq!(
            response.headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
    }

    #[rstest]
    #[case::bad_request(400)]
    #[case::not_found(404)]
    #[case::internal(500)]
    fn test_fallback_bodies_are_valid_json(#[case] status_code: u16) {
        let body: serde_json::Value = serde_json::from_str(fallback_body(status_code)).unwrap();
        assert!(body.get("message").is_some_and(|message| message.is_string()));
    }

    #[test]
    fn test_request_wire_format() {
        let request: ProxyRequest = serde_json::from_value(json!({
            "pathParameters": {"id": "abc"},
            "body": "{\"year\":1965}",
            "httpMethod": "PUT"
        }))
        .unwrap();
        assert_eq!(request.get_path_parameter("id"), Some("abc"));
        assert_eq!(request.body.as_deref(), Some("{\"year\":1965}"));
    }

    #[test]
    fn test_request_without_parameters() {
        let request: ProxyRequest =
            serde_json::from_value(json!({"pathParameters": null})).unwrap();
        assert_eq!(request.get_path_parameter("id"), None);
        assert_eq!(request.body, None);
    }

    #[test]
    fn test_response_wire_format() {
        let response = ProxyResponse::json(201, &json!({"id": "abc"})).unwrap();
        let wire = serde_json::to_value(&response).unwrap();
        assert_eq!(wire["statusCode"], json!(201));
        assert_eq!(wire["body"], json!("{\"id\":\"abc\"}"));
    }
}
