//! monday-async - An async client for the monday.com GraphQL API.
//!
//! This is the main crate. It re-exports the error core and adds the
//! client, its resources and the query builders.
//!
//! # Example
//!
//! ```no_run
//! use monday_async::{ClientError, MondayClient};
//!
//! # async fn run() -> Result<(), ClientError> {
//! let client = MondayClient::new("my-token")?;
//!
//! match client.custom().execute_custom_query("query { me { id name } }").await {
//!     Ok(response) => println!("{}", response["data"]["me"]["name"]),
//!     Err(ClientError::Api(err)) => eprintln!("{err}"),
//!     Err(err) => return Err(err),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! A server-reported error prints the offending line of the query:
//!
//! ```text
//! Field 'nme' doesn't exist on type 'User'
//!   Location: Line 3, Column 5
//!     2)   me {
//!     3)     nme
//!            ^
//!     4)   }
//!   - Error Code: undefinedField
//! ```

pub use monday_async_core::*;

mod client;
pub mod format;
pub mod queries;
pub mod resources;
pub mod types;

pub use client::{
    DEFAULT_API_VERSION, DEFAULT_ENDPOINT, DEFAULT_FILE_ENDPOINT, MondayClient,
    MondayClientBuilder, MondayClientConfig,
};
pub use format::{Id, IdList};
pub use monday_async_net::{ClientError, Result};
pub use types::{
    ColumnType, GroupAttributes, GroupColors, GroupUpdateColors, PositionRelative, TargetType,
    UserKind, WebhookEventType,
};

/// Transport layer.
pub mod net {
    pub use monday_async_net::*;
}
