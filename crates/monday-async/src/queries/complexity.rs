//! Complexity budget query.

use monday_async_core::{QuerySyntaxError, format_query};

use super::COMPLEXITY_SELECTION;

/// Query the remaining complexity budget.
pub fn get_complexity_query() -> Result<String, QuerySyntaxError> {
    format_query(&format!("query {{ {COMPLEXITY_SELECTION} }}"))
}
