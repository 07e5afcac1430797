//! Core error handling for the monday.com GraphQL API.
//!
//! This crate turns the loosely-structured error payloads returned by the
//! monday.com API into a single typed error with a readable diagnostic:
//!
//! - **Query formatting**: [`format_query`] prints a query in a canonical,
//!   line-addressable form so that server-reported line numbers are stable
//! - **Error records**: each entry of a GraphQL `errors` array becomes an
//!   [`ErrorRecord`], with its locations resolved against the query text
//! - **Aggregation**: [`AggregatedError`] reconciles the `errors` array with
//!   the flat `error_code`/`error_message` shape and renders the diagnostic
//! - **Dispatch**: [`ErrorKind::resolve`] maps an error code to a kind,
//!   falling back to [`ErrorKind::Generic`]
//!
//! # Example
//!
//! ```ignore
//! use monday_async_core::{raise_for_errors, ErrorKind};
//!
//! let query = "query {\n  boards {\n    id\n  }\n}";
//! let response = serde_json::json!({
//!     "errors": [{
//!         "message": "Rate limit exceeded",
//!         "extensions": { "code": "RateLimitExceeded", "status_code": 429 }
//!     }]
//! });
//!
//! let err = raise_for_errors(&response, query).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::RateLimitExceeded);
//! println!("{err}");
//! ```
//!
//! # Rendering
//!
//! The rendered message is a stable format. A single error with a location
//! looks like this:
//!
//! ```text
//! Field 'nme' doesn't exist on type 'Board'
//!   Location: Line 3, Column 5
//!     2)   boards {
//!     3)     nme
//!            ^
//!     4)   }
//!   - Error Code: undefinedField
//! ```

mod aggregate;
mod exception;
mod kind;
mod location;
pub mod logging;
mod query;
mod record;

pub use aggregate::{AggregatedError, DEFAULT_ERROR_MESSAGE, raise_for_errors};
pub use exception::{ComplexityBudget, MondayApiError};
pub use kind::ErrorKind;
pub use location::Location;
pub use query::{QuerySyntaxError, format_query};
pub use record::{ErrorEntry, ErrorRecord, PathSegment, StructuredEntry};
