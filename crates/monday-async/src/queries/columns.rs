//! Board column queries.

use monday_async_core::{QuerySyntaxError, format_query};
use serde_json::Value;

use super::complexity;
use crate::format::{Id, format_param_value, monday_json_stringify};
use crate::types::ColumnType;

/// `null` for no filter, else the types as a list of bare enum values.
fn column_types(types: &[ColumnType]) -> String {
    if types.is_empty() {
        return "null".to_string();
    }
    let values: Vec<&str> = types.iter().map(|t| t.as_str()).collect();
    format!("[{}]", values.join(", "))
}

fn string_list(values: &[&str]) -> String {
    if values.is_empty() {
        "null".to_string()
    } else {
        format_param_value(values)
    }
}

/// Query the columns of a board.
///
/// An empty `ids` or `types` slice means no filter on that argument.
pub fn get_columns_by_board_query(
    board_id: impl Into<Id>,
    ids: &[&str],
    types: &[ColumnType],
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    format_query(&format!(
        r#"
        query {{
            {}
            boards (ids: {}) {{
                id
                name
                columns (ids: {}, types: {}) {{ id title type description settings_str }}
            }}
        }}
        "#,
        complexity(with_complexity),
        format_param_value(&board_id.into()),
        string_list(ids),
        column_types(types),
    ))
}

/// Parameters of [`create_column_query`] beyond the board, title and type.
#[derive(Debug, Clone, Copy, Default)]
pub struct NewColumn<'a> {
    pub description: Option<&'a str>,
    /// Column settings, sent as a JSON string.
    pub defaults: Option<&'a Value>,
    /// Requested column ID. Left to the server when unset or empty.
    pub column_id: Option<&'a str>,
    pub after_column_id: Option<&'a str>,
}

/// Create a column on a board.
pub fn create_column_query(
    board_id: impl Into<Id>,
    title: &str,
    column_type: ColumnType,
    column: NewColumn<'_>,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let id_argument = column
        .column_id
        .filter(|id| !id.is_empty())
        .map(|id| format!(", id: {}", format_param_value(id)))
        .unwrap_or_default();

    format_query(&format!(
        r#"
        mutation {{
            {}
            create_column (
                board_id: {},
                title: {},
                column_type: {column_type},
                description: {},
                defaults: {},
                after_column_id: {}{id_argument}
            ) {{ id title type description }}
        }}
        "#,
        complexity(with_complexity),
        format_param_value(&board_id.into()),
        format_param_value(title),
        format_param_value(&column.description),
        monday_json_stringify(column.defaults),
        format_param_value(&column.after_column_id),
    ))
}

/// Rename a column.
pub fn change_column_title_query(
    board_id: impl Into<Id>,
    column_id: &str,
    title: &str,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    format_query(&format!(
        "mutation {{ {} change_column_title (board_id: {}, column_id: {}, title: {}) {{ id title }} }}",
        complexity(with_complexity),
        format_param_value(&board_id.into()),
        format_param_value(column_id),
        format_param_value(title),
    ))
}

/// Change a column's description.
pub fn change_column_description_query(
    board_id: impl Into<Id>,
    column_id: &str,
    description: &str,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    format_query(&format!(
        r#"
        mutation {{
            {}
            change_column_metadata (
                board_id: {},
                column_id: {},
                column_property: description,
                value: {}
            ) {{ id description }}
        }}
        "#,
        complexity(with_complexity),
        format_param_value(&board_id.into()),
        format_param_value(column_id),
        format_param_value(description),
    ))
}

/// Delete a column.
pub fn delete_column_query(
    board_id: impl Into<Id>,
    column_id: &str,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    format_query(&format!(
        "mutation {{ {} delete_column (board_id: {}, column_id: {}) {{ id }} }}",
        complexity(with_complexity),
        format_param_value(&board_id.into()),
        format_param_value(column_id),
    ))
}
