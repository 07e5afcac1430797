//! Canonical query formatting.

use graphql_parser::query::parse_query;

use crate::logging::targets;

/// A query that could not be parsed as a GraphQL executable document.
///
/// This is raised on the client side, before anything is sent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid GraphQL query: {message}")]
pub struct QuerySyntaxError {
    message: String,
}

impl QuerySyntaxError {
    /// Create a syntax error with the given parser message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The parser's description of the problem.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Parse `raw` and print it back in canonical form.
///
/// The output uses two-space indentation, one selection per line and no
/// trailing whitespace, so line numbers reported by the server for the sent
/// text can be mapped back onto it. Formatting is deterministic and
/// formatting an already formatted query returns it unchanged.
///
/// # Example
///
/// ```ignore
/// let query = format_query("{ boards { id } }")?;
/// assert_eq!(query, "{\n  boards {\n    id\n  }\n}");
/// ```
pub fn format_query(raw: &str) -> Result<String, QuerySyntaxError> {
    let document = parse_query::<String>(raw).map_err(|e| {
        tracing::debug!(target: targets::QUERY, error = %e, "rejected malformed query");
        QuerySyntaxError::new(e.to_string().trim())
    })?;

    Ok(document
        .to_string()
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_simple_query() {
        let formatted = format_query("{ boards { id } }").unwrap();
        assert_eq!(formatted, "{\n  boards {\n    id\n  }\n}");
    }

    #[test]
    fn test_format_ignores_caller_whitespace() {
        let compact = format_query("query{boards(ids:1){id name}}").unwrap();
        let spread = format_query(
            r#"
            query {
                boards (ids: 1) {
                    id
                    name
                }
            }
            "#,
        )
        .unwrap();

        assert_eq!(compact, spread);
    }

    #[test]
    fn test_format_is_idempotent() {
        let raw = r#"
            mutation {
                create_notification (user_id: 1, target_id: 2, text: "hi", target_type: Project) {
                    text
                }
            }
        "#;
        let once = format_query(raw).unwrap();
        let twice = format_query(&once).unwrap();

        assert_eq!(once, twice);
        assert_eq!(format_query(raw).unwrap(), once);
    }

    #[test]
    fn test_format_has_no_trailing_whitespace() {
        let formatted = format_query("query {   me { id  name }   }   ").unwrap();
        assert!(formatted.lines().all(|line| line == line.trim_end()));
        assert!(!formatted.ends_with('\n'));
    }

    #[test]
    fn test_unbalanced_braces_rejected() {
        let err = format_query("query { boards { id }").unwrap_err();
        assert!(!err.message().is_empty());
        assert!(err.to_string().starts_with("Invalid GraphQL query"));
    }

    #[test]
    fn test_invalid_token_rejected() {
        assert!(format_query("query { boards(ids: @) { id } }").is_err());
        assert!(format_query("").is_err());
    }
}
