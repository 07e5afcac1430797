//! GraphQL request types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Variable name that marks a request as a file upload.
pub const FILE_VARIABLE: &str = "file";

/// The `map` part of an upload, binding multipart part `0` to `$file`.
pub(crate) const FILE_UPLOAD_MAP: &str = r#"{"0": ["variables.file"]}"#;

/// A GraphQL request body.
///
/// Serializes to `{"query": ...}` or `{"query": ..., "variables": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphQLRequest {
    /// The GraphQL query string.
    pub query: String,

    /// Optional variables for the query.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<Value>,
}

impl GraphQLRequest {
    /// Create a request without variables.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            variables: None,
        }
    }

    /// Set a variable value.
    pub fn variable(mut self, name: impl Into<String>, value: impl Serialize) -> Self {
        let variables = self
            .variables
            .get_or_insert_with(|| Value::Object(Default::default()));
        if let Value::Object(map) = variables
            && let Ok(value) = serde_json::to_value(value)
        {
            map.insert(name.into(), value);
        }
        self
    }

    /// Set all variables from a serializable value.
    pub fn variables(mut self, variables: impl Serialize) -> Self {
        self.variables = serde_json::to_value(variables).ok();
        self
    }

    /// The local path of the file to upload, if the `file` variable is set.
    pub fn file_path(&self) -> Option<&str> {
        self.variables.as_ref()?.get(FILE_VARIABLE)?.as_str()
    }
}
