//! API version queries.

use monday_async_core::{QuerySyntaxError, format_query};

use super::complexity;

/// Query the API version used to serve the request.
pub fn get_current_api_version_query(with_complexity: bool) -> Result<String, QuerySyntaxError> {
    format_query(&format!(
        "query {{ {} version {{ display_name kind value }} }}",
        complexity(with_complexity)
    ))
}

/// Query every available API version.
pub fn get_all_api_versions_query(with_complexity: bool) -> Result<String, QuerySyntaxError> {
    format_query(&format!(
        "query {{ {} versions {{ display_name kind value }} }}",
        complexity(with_complexity)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queries::test_support::assert_query;

    #[test]
    fn test_current_version() {
        assert_query(
            get_current_api_version_query(false),
            r#"
            query {
                version {
                    display_name
                    kind
                    value
                }
            }
            "#,
        );
    }

    #[test]
    fn test_all_versions_with_complexity() {
        let query = get_all_api_versions_query(true).unwrap();

        assert!(query.contains("complexity {"));
        assert!(query.contains("reset_in_x_seconds"));
        assert!(query.contains("versions {"));
        assert!(!get_all_api_versions_query(false).unwrap().contains("complexity"));
    }
}
