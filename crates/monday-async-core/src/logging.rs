//! Tracing targets used across the monday-async crates.
//!
//! The library never installs a subscriber. To see its events, install one
//! in your application and filter on these targets:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("monday_async_net::graphql=debug")
//!     .init();
//! ```

/// Target names for log filtering.
pub mod targets {
    /// Error aggregation (dropped entries, primary error selection).
    pub const AGGREGATE: &str = "monday_async_core::aggregate";
    /// Query formatting.
    pub const QUERY: &str = "monday_async_core::query";
    /// GraphQL transport.
    pub const GRAPHQL: &str = "monday_async_net::graphql";
    /// HTTP transport.
    pub const HTTP: &str = "monday_async_net::http";
    /// Resource wrappers of the facade crate.
    pub const RESOURCES: &str = "monday_async::resources";
}
