//! Account query.

use monday_async_core::{QuerySyntaxError, format_query};

use super::complexity;

/// Query the account the token belongs to, with its plan.
pub fn get_account_query(with_complexity: bool) -> Result<String, QuerySyntaxError> {
    format_query(&format!(
        r#"
        query {{
            {}
            account {{
                id
                name
                slug
                tier
                country_code
                plan {{ max_users tier period version }}
            }}
        }}
        "#,
        complexity(with_complexity)
    ))
}
