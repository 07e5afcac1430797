//! Webhook queries and mutations.

use monday_async_core::{QuerySyntaxError, format_query};
use serde_json::Value;

use super::complexity;
use crate::format::{Id, format_param_value, monday_json_stringify};
use crate::types::WebhookEventType;

/// Query the webhooks of a board.
pub fn get_webhooks_by_board_id_query(
    board_id: impl Into<Id>,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    format_query(&format!(
        "query {{ {} webhooks (board_id: {}) {{ id event board_id config }} }}",
        complexity(with_complexity),
        format_param_value(&board_id.into()),
    ))
}

/// Create a webhook that posts `event`s of a board to `url`.
///
/// `config` is sent as a JSON string, e.g. `{"columnId": "status"}` for
/// column-specific events.
pub fn create_webhook_query(
    board_id: impl Into<Id>,
    url: &str,
    event: WebhookEventType,
    config: Option<&Value>,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    format_query(&format!(
        r#"
        mutation {{
            {}
            create_webhook (
                board_id: {},
                url: {},
                event: {event},
                config: {}
            ) {{ id board_id event config }}
        }}
        "#,
        complexity(with_complexity),
        format_param_value(&board_id.into()),
        format_param_value(url),
        monday_json_stringify(config),
    ))
}

/// Delete a webhook.
pub fn delete_webhook_query(
    webhook_id: impl Into<Id>,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    format_query(&format!(
        "mutation {{ {} delete_webhook (id: {}) {{ id board_id }} }}",
        complexity(with_complexity),
        format_param_value(&webhook_id.into()),
    ))
}
