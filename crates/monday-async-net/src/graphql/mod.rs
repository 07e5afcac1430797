//! GraphQL transport for the monday.com API.
//!
//! Requests are posted as JSON, or as `multipart/form-data` when the
//! variables name a file to upload:
//!
//! ```ignore
//! use monday_async_net::graphql::GraphQLClient;
//!
//! let files = GraphQLClient::builder("https://api.monday.com/v2/file")
//!     .token(token)
//!     .build()?;
//!
//! let response = files
//!     .execute(
//!         "mutation ($file: File!) {\n  add_file_to_column (item_id: 1, column_id: \"files\", file: $file) {\n    id\n  }\n}",
//!         Some(serde_json::json!({ "file": "./report.pdf" })),
//!     )
//!     .await?;
//! ```
//!
//! Error payloads never reach the caller as data; they are mapped to
//! [`ClientError::Api`](crate::ClientError::Api).

mod client;
mod request;

pub use client::{GraphQLClient, GraphQLClientBuilder};
pub use request::{FILE_VARIABLE, GraphQLRequest};
