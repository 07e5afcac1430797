//! Error types for the transport.

use std::fmt;

use monday_async_core::{MondayApiError, QuerySyntaxError};

/// Errors returned by the monday.com clients.
#[derive(Debug, Clone)]
pub enum ClientError {
    /// The API reported an error in the response body.
    Api(Box<MondayApiError>),
    /// The query text could not be parsed; nothing was sent.
    QuerySyntax(QuerySyntaxError),
    /// HTTP request failed.
    Request(String),
    /// Invalid URL provided.
    InvalidUrl(String),
    /// Request timed out.
    Timeout,
    /// Connection refused or failed.
    Connection(String),
    /// Invalid header name or value.
    InvalidHeader(String),
    /// JSON serialization/deserialization error.
    Json(String),
    /// I/O error, e.g. reading a file to upload.
    Io(String),
    /// The response body was not JSON.
    InvalidBody {
        /// The HTTP status code.
        status: u16,
        /// The body text, if it could be read.
        body: Option<String>,
    },
    /// Proxy configuration error.
    Proxy(String),
}

impl ClientError {
    /// The API error, if this is one.
    pub fn api_error(&self) -> Option<&MondayApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(err) => write!(f, "{err}"),
            Self::QuerySyntax(err) => write!(f, "{err}"),
            Self::Request(msg) => write!(f, "HTTP request error: {msg}"),
            Self::InvalidUrl(msg) => write!(f, "Invalid URL: {msg}"),
            Self::Timeout => write!(f, "Request timed out"),
            Self::Connection(msg) => write!(f, "Connection error: {msg}"),
            Self::InvalidHeader(msg) => write!(f, "Invalid header: {msg}"),
            Self::Json(msg) => write!(f, "JSON error: {msg}"),
            Self::Io(msg) => write!(f, "I/O error: {msg}"),
            Self::InvalidBody { status, body } => match body {
                Some(body) => write!(f, "HTTP {status}: response is not JSON: {body}"),
                None => write!(f, "HTTP {status}: response is not JSON"),
            },
            Self::Proxy(msg) => write!(f, "Proxy error: {msg}"),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(err) => Some(err.as_ref()),
            Self::QuerySyntax(err) => Some(err),
            _ => None,
        }
    }
}

impl From<MondayApiError> for ClientError {
    fn from(err: MondayApiError) -> Self {
        Self::Api(Box::new(err))
    }
}

impl From<QuerySyntaxError> for ClientError {
    fn from(err: QuerySyntaxError) -> Self {
        Self::QuerySyntax(err)
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::Connection(err.to_string())
        } else {
            Self::Request(err.to_string())
        }
    }
}

impl From<url::ParseError> for ClientError {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidUrl(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<http::header::InvalidHeaderName> for ClientError {
    fn from(err: http::header::InvalidHeaderName) -> Self {
        Self::InvalidHeader(err.to_string())
    }
}

impl From<http::header::InvalidHeaderValue> for ClientError {
    fn from(err: http::header::InvalidHeaderValue) -> Self {
        Self::InvalidHeader(err.to_string())
    }
}

/// A specialized Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
