//! File upload mutations.

use monday_async_core::{QuerySyntaxError, format_query};

use super::complexity;
use crate::format::{Id, format_param_value};

/// Attach the uploaded `$file` to a file column of an item.
///
/// Send it to the file endpoint with a `file` variable naming the local
/// path.
pub fn upload_file_to_column_query(
    item_id: impl Into<Id>,
    column_id: &str,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    format_query(&format!(
        r#"
        mutation ($file: File!) {{
            {}
            add_file_to_column (item_id: {}, column_id: {}, file: $file) {{ id name url }}
        }}
        "#,
        complexity(with_complexity),
        format_param_value(&item_id.into()),
        format_param_value(column_id),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queries::test_support::assert_query;

    #[test]
    fn test_upload_file_to_column() {
        assert_query(
            upload_file_to_column_query(42u64, "files", false),
            r#"mutation ($file: File!) { add_file_to_column (item_id: 42, column_id: "files", file: $file) { id name url } }"#,
        );
    }

    #[test]
    fn test_upload_declares_file_variable() {
        let query = upload_file_to_column_query("42", "files", true).unwrap();
        assert!(query.contains("$file: File!"));
        assert!(query.contains("file: $file"));
        assert!(query.contains("complexity {"));
    }
}
