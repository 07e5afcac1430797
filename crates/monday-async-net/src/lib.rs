//! Async transport for the monday.com GraphQL API.
//!
//! This crate sends queries to the monday.com API and turns error payloads
//! into typed errors:
//!
//! - **GraphQL client**: [`graphql::GraphQLClient`] posts a query (with
//!   optional variables) to one endpoint and returns the raw JSON response
//! - **File uploads**: a `file` variable switches the request to a multipart
//!   upload of that file
//! - **Errors**: every response goes through
//!   [`raise_for_errors`](monday_async_core::raise_for_errors); failures
//!   surface as [`ClientError`]
//!
//! # Example
//!
//! ```ignore
//! use monday_async_net::{ClientError, graphql::GraphQLClient};
//!
//! let client = GraphQLClient::builder("https://api.monday.com/v2")
//!     .token(token)
//!     .build()?;
//!
//! match client.execute("{\n  me {\n    id\n  }\n}", None).await {
//!     Ok(response) => println!("{}", response["data"]),
//!     Err(ClientError::Api(err)) if err.is_rate_limit() => retry_later(),
//!     Err(err) => return Err(err),
//! }
//! ```
//!
//! # Configuration
//!
//! ```ignore
//! let http = HttpClient::builder()
//!     .timeout(Duration::from_secs(60))
//!     .user_agent("MyApp/1.0")
//!     .build()?;
//!
//! let client = GraphQLClient::builder("https://api.monday.com/v2")
//!     .http_client(http)
//!     .build()?;
//! ```

pub mod error;
pub mod graphql;
pub mod http;

pub use error::{ClientError, Result};
pub use graphql::{GraphQLClient, GraphQLClientBuilder, GraphQLRequest};
pub use self::http::{HttpClient, HttpClientBuilder, HttpClientConfig};
