//! Normalized server-reported errors.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::aggregate::DEFAULT_ERROR_MESSAGE;
use crate::location::Location;

/// A segment in an error path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// A field name.
    Field(String),
    /// An array index.
    Index(usize),
}

impl PathSegment {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(name) => Some(Self::Field(name.clone())),
            Value::Number(n) => n
                .as_u64()
                .and_then(|idx| usize::try_from(idx).ok())
                .map(Self::Index),
            _ => None,
        }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => write!(f, "{name}"),
            Self::Index(idx) => write!(f, "[{idx}]"),
        }
    }
}

/// One entry of a response's `errors` array, classified once at decode time.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorEntry {
    /// A plain string entry.
    BareMessage(String),
    /// A GraphQL error object.
    Structured(StructuredEntry),
}

/// The fields of a GraphQL error object that survived decoding.
///
/// Fields with the wrong shape are dropped rather than rejected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StructuredEntry {
    /// The `message` field.
    pub message: Option<String>,
    /// `(line, column)` pairs from the `locations` field.
    pub locations: Vec<(usize, usize)>,
    /// The `extensions` object.
    pub extensions: Map<String, Value>,
    /// The `path` field.
    pub path: Vec<PathSegment>,
}

impl ErrorEntry {
    /// Classify a raw `errors` entry.
    ///
    /// Returns `None` for entries that are neither strings nor objects.
    pub fn classify(value: &Value) -> Option<Self> {
        match value {
            Value::String(message) => Some(Self::BareMessage(message.clone())),
            Value::Object(object) => Some(Self::Structured(StructuredEntry::from_object(object))),
            _ => None,
        }
    }
}

impl StructuredEntry {
    fn from_object(object: &Map<String, Value>) -> Self {
        let message = object.get("message").and_then(loose_string);

        let locations = object
            .get("locations")
            .and_then(Value::as_array)
            .map(|locations| locations.iter().filter_map(position).collect())
            .unwrap_or_default();

        let extensions = object
            .get("extensions")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();

        let path = object
            .get("path")
            .and_then(Value::as_array)
            .map(|path| path.iter().filter_map(PathSegment::from_value).collect())
            .unwrap_or_default();

        Self {
            message,
            locations,
            extensions,
            path,
        }
    }
}

fn position(value: &Value) -> Option<(usize, usize)> {
    let line = value.get("line")?.as_u64()?;
    let column = value.get("column")?.as_u64()?;
    Some((usize::try_from(line).ok()?, usize::try_from(column).ok()?))
}

/// Read a value that should be a string, accepting numbers and booleans.
pub(crate) fn loose_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Read an error code. Empty codes count as absent.
pub(crate) fn loose_code(value: &Value) -> Option<String> {
    loose_string(value).filter(|code| !code.is_empty())
}

/// Read a value that should be an integer, accepting numeric strings.
pub(crate) fn loose_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// A single server-reported error, normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorRecord {
    message: String,
    locations: Vec<Location>,
    error_code: Option<String>,
    status_code: Option<i64>,
    error_data: Map<String, Value>,
    extensions: Map<String, Value>,
    path: Vec<PathSegment>,
}

impl ErrorRecord {
    /// Build a record from a classified entry, resolving its locations
    /// against the lines of the query that was sent.
    pub fn from_entry(entry: ErrorEntry, query_lines: &[&str]) -> Self {
        match entry {
            ErrorEntry::BareMessage(message) => Self {
                message,
                locations: Vec::new(),
                error_code: None,
                status_code: None,
                error_data: Map::new(),
                extensions: Map::new(),
                path: Vec::new(),
            },
            ErrorEntry::Structured(entry) => {
                let extensions = entry.extensions;
                let error_code = extensions
                    .get("code")
                    .and_then(loose_code)
                    .or_else(|| extensions.get("error_code").and_then(loose_code));
                let status_code = extensions.get("status_code").and_then(loose_integer);
                let error_data = extensions
                    .get("error_data")
                    .and_then(Value::as_object)
                    .cloned()
                    .unwrap_or_default();

                Self {
                    message: entry.message.unwrap_or_default(),
                    locations: entry
                        .locations
                        .into_iter()
                        .map(|(line, column)| Location::resolve(query_lines, line, column))
                        .collect(),
                    error_code,
                    status_code,
                    error_data,
                    extensions,
                    path: entry.path,
                }
            }
        }
    }

    /// The error message, empty if the server sent none.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Resolved locations in the query text.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// The machine-readable code from `extensions.code`.
    pub fn error_code(&self) -> Option<&str> {
        self.error_code.as_deref()
    }

    /// The status code from `extensions.status_code`.
    pub fn status_code(&self) -> Option<i64> {
        self.status_code
    }

    /// The `extensions.error_data` object.
    pub fn error_data(&self) -> &Map<String, Value> {
        &self.error_data
    }

    /// The whole `extensions` object.
    pub fn extensions(&self) -> &Map<String, Value> {
        &self.extensions
    }

    /// The response path of the failing field.
    pub fn path(&self) -> &[PathSegment] {
        &self.path
    }

    /// Append this record's diagnostic lines to `out`.
    ///
    /// `fallback_code`/`fallback_status` are shown when the record carries
    /// none of its own.
    pub(crate) fn render_into(
        &self,
        out: &mut Vec<String>,
        fallback_code: Option<&str>,
        fallback_status: Option<i64>,
    ) {
        if self.message.is_empty() {
            out.push(DEFAULT_ERROR_MESSAGE.to_string());
        } else {
            out.push(self.message.clone());
        }
        for location in &self.locations {
            location.render_into(out, FIELD_MARGIN, LOCATION_MARGIN);
        }
        render_fields(
            out,
            self.error_code().or(fallback_code),
            self.status_code.or(fallback_status),
        );
    }
}

pub(crate) const FIELD_MARGIN: &str = "  ";
pub(crate) const LOCATION_MARGIN: &str = "    ";

pub(crate) fn render_fields(out: &mut Vec<String>, code: Option<&str>, status: Option<i64>) {
    if let Some(code) = code {
        out.push(format!("{FIELD_MARGIN}- Error Code: {code}"));
    }
    if let Some(status) = status {
        out.push(format!("{FIELD_MARGIN}- Status Code: {status}"));
    }
}
