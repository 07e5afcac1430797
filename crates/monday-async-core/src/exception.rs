//! The typed error surfaced to callers.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

use crate::kind::ErrorKind;
use crate::record::PathSegment;

static COMPLEXITY_BUDGET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"budget remaining (\d+) out of \d+ reset in (\d+) seconds")
        .expect("complexity budget pattern is valid")
});

/// Remaining complexity budget parsed from a complexity error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComplexityBudget {
    /// Complexity points left in the current window.
    pub remaining: u64,
    /// Seconds until the budget resets.
    pub reset_in_seconds: u64,
}

impl ComplexityBudget {
    /// Extract the budget from a server message, if it has the usual wording.
    pub fn parse(message: &str) -> Option<Self> {
        let captures = COMPLEXITY_BUDGET.captures(message)?;
        Some(Self {
            remaining: captures.get(1)?.as_str().parse().ok()?,
            reset_in_seconds: captures.get(2)?.as_str().parse().ok()?,
        })
    }
}

/// An error reported by the monday.com API.
///
/// The [`kind`](Self::kind) identifies what went wrong; the message is the
/// full diagnostic, including query locations when the server reported them.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct MondayApiError {
    kind: ErrorKind,
    message: String,
    error_code: Option<String>,
    status_code: Option<i64>,
    error_data: Map<String, Value>,
    extensions: Map<String, Value>,
    path: Vec<PathSegment>,
    budget: Option<ComplexityBudget>,
}

impl MondayApiError {
    /// Create an error of the given kind.
    ///
    /// An empty message is replaced by the kind's default message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        let mut message = message.into();
        if message.is_empty() {
            message = kind.default_message().to_string();
        }
        let budget = match kind {
            ErrorKind::Complexity => ComplexityBudget::parse(&message),
            _ => None,
        };

        Self {
            kind,
            message,
            error_code: None,
            status_code: None,
            error_data: Map::new(),
            extensions: Map::new(),
            path: Vec::new(),
            budget,
        }
    }

    /// Create an error for a code, resolving its kind.
    pub fn from_code(code: Option<&str>, message: impl Into<String>) -> Self {
        let mut error = Self::new(ErrorKind::resolve(code), message);
        error.error_code = code.map(str::to_string);
        error
    }

    /// Set the error code.
    pub fn with_error_code(mut self, code: impl Into<String>) -> Self {
        self.error_code = Some(code.into());
        self
    }

    /// Set the status code.
    pub fn with_status_code(mut self, status: i64) -> Self {
        self.status_code = Some(status);
        self
    }

    /// Set the error data.
    pub fn with_error_data(mut self, data: Map<String, Value>) -> Self {
        self.error_data = data;
        self
    }

    /// Set the extensions object.
    pub fn with_extensions(mut self, extensions: Map<String, Value>) -> Self {
        self.extensions = extensions;
        self
    }

    /// Set the error path.
    pub fn with_path(mut self, path: Vec<PathSegment>) -> Self {
        self.path = path;
        self
    }

    /// The kind resolved from the error code.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The rendered diagnostic.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The error code reported by the server.
    pub fn error_code(&self) -> Option<&str> {
        self.error_code.as_deref()
    }

    /// The status code embedded in the payload.
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

    /// The remaining complexity budget, for complexity errors whose message
    /// carries one.
    pub fn complexity_budget(&self) -> Option<ComplexityBudget> {
        self.budget
    }

    /// Shorthand for `self.kind().is_rate_limit()`.
    pub fn is_rate_limit(&self) -> bool {
        self.kind.is_rate_limit()
    }

    /// Shorthand for `self.kind().is_authorization()`.
    pub fn is_authorization(&self) -> bool {
        self.kind.is_authorization()
    }
}
