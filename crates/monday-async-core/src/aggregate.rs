//! Aggregation of a response's error payload into one diagnostic.

use serde_json::{Map, Value};

use crate::exception::MondayApiError;
use crate::kind::ErrorKind;
use crate::logging::targets;
use crate::record::{
    ErrorEntry, ErrorRecord, FIELD_MARGIN, PathSegment, loose_code, loose_integer, loose_string,
    render_fields,
};

/// Message used when neither the response nor any record carries one.
pub const DEFAULT_ERROR_MESSAGE: &str = "An error occurred";

const MULTIPLE_ERRORS_HEADER: &str = "Multiple errors occurred:";

/// Every error reported by one response, reconciled into a single view.
///
/// The monday.com API reports errors either as a GraphQL `errors` array or
/// as flat `error_code`/`error_message` fields, sometimes both. This type
/// accepts either shape, picks a primary code and renders one message.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedError {
    error_message: String,
    has_explicit_message: bool,
    error_code: Option<String>,
    status_code: Option<i64>,
    error_data: Map<String, Value>,
    extensions: Map<String, Value>,
    path: Vec<PathSegment>,
    errors: Vec<ErrorRecord>,
    formatted_message: String,
}

impl AggregatedError {
    /// Build the aggregate for `response`.
    ///
    /// Returns `None` when the response is not an object or has none of the
    /// `errors`, `error_message` and `error_code` keys. `original_query` is
    /// the exact text that was sent; reported locations are resolved against
    /// it.
    pub fn from_response(response: &Value, original_query: &str) -> Option<Self> {
        let object = response.as_object()?;
        if !["errors", "error_message", "error_code"]
            .iter()
            .any(|key| object.contains_key(*key))
        {
            return None;
        }

        let lines: Vec<&str> = original_query.lines().collect();
        let errors: Vec<ErrorRecord> = decode_entries(object.get("errors"))
            .into_iter()
            .map(|entry| ErrorRecord::from_entry(entry, &lines))
            .collect();

        let top_message = object
            .get("error_message")
            .and_then(loose_string)
            .filter(|m| !m.is_empty());
        let top_code = object.get("error_code").and_then(loose_code);
        let top_status = object.get("status_code").and_then(loose_integer);
        let top_data = object
            .get("error_data")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();

        let primary = errors.iter().find(|record| record.error_code().is_some());
        let (error_code, status_code, error_data, extensions, path) = match primary {
            Some(record) => {
                tracing::trace!(
                    target: targets::AGGREGATE,
                    code = record.error_code(),
                    "primary error code taken from record"
                );
                (
                    record.error_code().map(str::to_string),
                    record.status_code().or(top_status),
                    record.error_data().clone(),
                    record.extensions().clone(),
                    record.path().to_vec(),
                )
            }
            None => (
                top_code.clone(),
                top_status,
                top_data,
                Map::new(),
                Vec::new(),
            ),
        };

        let has_explicit_message = top_message.is_some();
        let error_message = top_message
            .or_else(|| {
                errors
                    .iter()
                    .map(ErrorRecord::message)
                    .find(|m| !m.is_empty())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string());

        let mut aggregate = Self {
            error_message,
            has_explicit_message,
            error_code,
            status_code,
            error_data,
            extensions,
            path,
            errors,
            formatted_message: String::new(),
        };
        aggregate.formatted_message = aggregate.render(top_code.as_deref(), top_status);
        Some(aggregate)
    }

    /// Whether the response actually reported an error.
    ///
    /// True when there is at least one record or a non-empty top-level
    /// `error_message`. A bare `error_code` alone is not an error.
    pub fn has_error(&self) -> bool {
        !self.errors.is_empty() || self.has_explicit_message
    }

    /// The kind resolved from the primary error code.
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::resolve(self.error_code.as_deref())
    }

    /// Convert into the error returned to callers.
    pub fn into_api_error(self) -> MondayApiError {
        let mut error = MondayApiError::new(self.kind(), self.formatted_message)
            .with_error_data(self.error_data)
            .with_extensions(self.extensions)
            .with_path(self.path);
        if let Some(code) = self.error_code {
            error = error.with_error_code(code);
        }
        if let Some(status) = self.status_code {
            error = error.with_status_code(status);
        }
        error
    }

    /// The top-level `error_message`, else the first non-empty record
    /// message, else [`DEFAULT_ERROR_MESSAGE`].
    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    /// The primary error code.
    pub fn error_code(&self) -> Option<&str> {
        self.error_code.as_deref()
    }

    /// The payload status code of the primary error.
    pub fn status_code(&self) -> Option<i64> {
        self.status_code
    }

    /// Structured data attached to the primary error.
    pub fn error_data(&self) -> &Map<String, Value> {
        &self.error_data
    }

    /// Extensions of the primary error.
    pub fn extensions(&self) -> &Map<String, Value> {
        &self.extensions
    }

    /// Response path of the primary error.
    pub fn path(&self) -> &[PathSegment] {
        &self.path
    }

    /// Records in the order the server sent them.
    pub fn errors(&self) -> &[ErrorRecord] {
        &self.errors
    }

    /// The rendered diagnostic.
    pub fn formatted_message(&self) -> &str {
        &self.formatted_message
    }

    fn render(&self, top_code: Option<&str>, top_status: Option<i64>) -> String {
        let mut out = Vec::new();

        match self.errors.as_slice() {
            [] => {
                out.push(self.error_message.clone());
                render_fields(&mut out, self.error_code.as_deref(), self.status_code);
                if !self.error_data.is_empty() {
                    let data = Value::Object(self.error_data.clone());
                    out.push(format!("{FIELD_MARGIN}- Error Data: {data}"));
                }
            }
            [record] => record.render_into(&mut out, top_code, top_status),
            records => {
                out.push(MULTIPLE_ERRORS_HEADER.to_string());
                for record in records {
                    out.push(String::new());
                    record.render_into(&mut out, None, None);
                }
            }
        }

        out.join("\n")
    }
}

fn decode_entries(errors: Option<&Value>) -> Vec<ErrorEntry> {
    let raw: Vec<&Value> = match errors {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.iter().collect(),
        Some(single) => vec![single],
    };

    raw.into_iter()
        .filter_map(|value| {
            let entry = ErrorEntry::classify(value);
            if entry.is_none() {
                tracing::trace!(
                    target: targets::AGGREGATE,
                    entry = %value,
                    "dropping error entry that is neither a string nor an object"
                );
            }
            entry
        })
        .collect()
}

/// Return the API error described by `response`, if any.
///
/// `original_query` must be the text that was sent. Responses without an
/// error give `Ok(())`.
pub fn raise_for_errors(response: &Value, original_query: &str) -> Result<(), MondayApiError> {
    match AggregatedError::from_response(response, original_query) {
        Some(aggregate) if aggregate.has_error() => Err(aggregate.into_api_error()),
        _ => Ok(()),
    }
}
