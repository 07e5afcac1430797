//! HTTP layer used by the GraphQL clients.
//!
//! ```ignore
//! use monday_async_net::http::HttpClient;
//!
//! let client = HttpClient::builder()
//!     .timeout(Duration::from_secs(30))
//!     .build()?;
//!
//! let response = client
//!     .post("https://api.monday.com/v2")
//!     .headers(headers)
//!     .json(&serde_json::json!({"query": "{ me { id } }"}))
//!     .send()
//!     .await?;
//! ```

mod client;
mod request;
mod response;

pub use client::{HttpClient, HttpClientBuilder, HttpClientConfig};
pub use request::{HttpRequestBuilder, MultipartForm};
pub use response::HttpResponse;
