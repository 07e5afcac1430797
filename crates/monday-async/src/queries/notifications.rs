//! Notification mutation.

use monday_async_core::{QuerySyntaxError, format_query};

use super::complexity;
use crate::format::{Id, format_param_value};
use crate::types::TargetType;

/// Send a notification to a user.
///
/// `target_id` is an item or board ID for [`TargetType::Project`], and an
/// update or reply ID for [`TargetType::Post`].
pub fn create_notification_query(
    user_id: impl Into<Id>,
    target_id: impl Into<Id>,
    text: &str,
    target_type: TargetType,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    format_query(&format!(
        r#"
        mutation {{
            {}
            create_notification (
                user_id: {},
                target_id: {},
                text: {},
                target_type: {target_type}
            ) {{ text }}
        }}
        "#,
        complexity(with_complexity),
        format_param_value(&user_id.into()),
        format_param_value(&target_id.into()),
        format_param_value(text),
    ))
}
