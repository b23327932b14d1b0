//! Client for the published sheet endpoints.
//!
//! Both datasets come from a spreadsheet published as a web app that
//! answers GET with a JSON array of row objects. The inventory endpoint is
//! additionally required to declare a JSON content type.

use std::time::Duration;

use anyhow::Result;
use reqwest::{header, Client, Response};
use serde_json::{Map, Value};
use tracing::{debug, error};

use super::ApiError;

/// One loosely typed row as published by the sheet.
pub type RawRow = Map<String, Value>;

/// HTTP client for the sheet endpoints.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct SheetClient {
    client: Client,
}

impl SheetClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Fetch the schedule rows. The content type is not checked; the body
    /// only has to decode as a JSON array.
    pub async fn fetch_schedule_rows(&self, url: &str) -> Result<Vec<RawRow>, ApiError> {
        self.get_rows(url, false).await
    }

    /// Fetch the inventory rows, rejecting anything not served as JSON.
    pub async fn fetch_inventory_rows(&self, url: &str) -> Result<Vec<RawRow>, ApiError> {
        self.get_rows(url, true).await
    }

    async fn get_rows(&self, url: &str, require_json: bool) -> Result<Vec<RawRow>, ApiError> {
        let response = self.client.get(url).send().await?;
        let response = Self::check_response(response).await?;

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let body = response.text().await?;

        if require_json && !Self::is_json_content_type(content_type.as_deref()) {
            error!(url = url, content_type = ?content_type, "Expected JSON response");
            return Err(ApiError::unexpected_content_type(content_type, &body));
        }

        let value: Value = serde_json::from_str(&body)?;
        let rows = Self::rows_from_value(value)?;
        debug!(url = url, count = rows.len(), "Fetched sheet rows");
        Ok(rows)
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: Response) -> Result<Response, ApiError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body))
        }
    }

    fn is_json_content_type(content_type: Option<&str>) -> bool {
        content_type
            .map(|ct| ct.to_ascii_lowercase().contains("application/json"))
            .unwrap_or(false)
    }

    fn rows_from_value(value: Value) -> Result<Vec<RawRow>, ApiError> {
        let items = match value {
            Value::Array(items) => items,
            other => return Err(ApiError::NotAnArray(Self::json_kind(&other))),
        };

        let total = items.len();
        let rows: Vec<RawRow> = items
            .into_iter()
            .filter_map(|item| match item {
                Value::Object(row) => Some(row),
                _ => None,
            })
            .collect();

        if rows.len() != total {
            debug!(skipped = total - rows.len(), "Skipped non-object rows");
        }
        Ok(rows)
    }

    fn json_kind(value: &Value) -> &'static str {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "a boolean",
            Value::Number(_) => "a number",
            Value::String(_) => "a string",
            Value::Array(_) => "an array",
            Value::Object(_) => "an object",
        }
    }
}
