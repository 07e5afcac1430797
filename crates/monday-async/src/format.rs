//! Helpers for splicing values into query text.

use std::fmt;

use monday_async_core::logging::targets;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Render a value as a GraphQL argument literal.
///
/// Uses the JSON encoding, which is valid GraphQL for strings, numbers,
/// booleans, lists and `null`. `None` renders as `null`.
///
/// ```ignore
/// assert_eq!(format_param_value(&"Done"), r#""Done""#);
/// assert_eq!(format_param_value(&vec![1, 2]), "[1,2]");
/// assert_eq!(format_param_value(&None::<u64>), "null");
/// ```
pub fn format_param_value<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        tracing::error!(target: targets::RESOURCES, "Failed to serialize argument: {}", e);
        "null".to_string()
    })
}

/// Encode a JSON value twice, for arguments that take a JSON string.
///
/// monday.com expects values such as column values and webhook configs as
/// a string containing JSON. `None` renders as `null`, not `"null"`.
pub fn monday_json_stringify(value: Option<&Value>) -> String {
    match value {
        Some(value) => format_param_value(&value.to_string()),
        None => "null".to_string(),
    }
}

/// An identifier that monday.com accepts either as a number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    Int(u64),
    Str(String),
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(id) => write!(f, "{id}"),
            Self::Str(id) => write!(f, "{id}"),
        }
    }
}

impl From<u64> for Id {
    fn from(id: u64) -> Self {
        Self::Int(id)
    }
}

impl From<&str> for Id {
    fn from(id: &str) -> Self {
        Self::Str(id.to_string())
    }
}

impl From<String> for Id {
    fn from(id: String) -> Self {
        Self::Str(id)
    }
}

/// One identifier or a list of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IdList {
    One(Id),
    Many(Vec<Id>),
}

impl IdList {
    /// Number of identifiers.
    pub fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Many(ids) => ids.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn is_list(&self) -> bool {
        matches!(self, Self::Many(_))
    }
}

impl From<Id> for IdList {
    fn from(id: Id) -> Self {
        Self::One(id)
    }
}

impl From<u64> for IdList {
    fn from(id: u64) -> Self {
        Self::One(id.into())
    }
}

impl From<&str> for IdList {
    fn from(id: &str) -> Self {
        Self::One(id.into())
    }
}

impl From<String> for IdList {
    fn from(id: String) -> Self {
        Self::One(id.into())
    }
}

impl From<Vec<Id>> for IdList {
    fn from(ids: Vec<Id>) -> Self {
        Self::Many(ids)
    }
}

impl From<Vec<u64>> for IdList {
    fn from(ids: Vec<u64>) -> Self {
        Self::Many(ids.into_iter().map(Id::from).collect())
    }
}

impl From<Vec<&str>> for IdList {
    fn from(ids: Vec<&str>) -> Self {
        Self::Many(ids.into_iter().map(Id::from).collect())
    }
}

impl From<Vec<String>> for IdList {
    fn from(ids: Vec<String>) -> Self {
        Self::Many(ids.into_iter().map(Id::from).collect())
    }
}
