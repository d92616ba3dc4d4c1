//! # Resolvent Engine
//!
//! The execution value layer for queries against a schema-described data
//! graph. An execution pipeline resolves one field at a time; this crate
//! defines the value such a pipeline hands around for each resolved field:
//! the unwrapped value, the raw resolver output it came from, the errors
//! raised along the way, optional side-channel extensions, and the local
//! context threaded to child field resolutions.
//!
//! ## Usage
//!
//! ```rust
//! use resolvent_engine::FetchedValue;
//! use serde_json::json;
//!
//! let fetched = FetchedValue::builder()
//!     .fetched_value(json!("Frodo"))
//!     .raw_fetched_value(json!({ "name": "Frodo" }))
//!     .build();
//!
//! assert_eq!(fetched.fetched_value(), &json!("Frodo"));
//! assert!(fetched.errors().is_empty());
//! assert!(fetched.extensions().is_none());
//!
//! // Derived copies never mutate the original.
//! let coerced = fetched.transform(|b| b.fetched_value(json!("FRODO")));
//! assert_eq!(fetched.fetched_value(), &json!("Frodo"));
//! assert_eq!(coerced.fetched_value(), &json!("FRODO"));
//! ```
//!
//! ## Architecture
//!
//! - **`fetched`**: the immutable [`FetchedValue`] holder, its builder, and
//!   the copy-transform operation
//! - error records, result paths, and the extensions mapping live in
//!   `resolvent-types` and are re-exported here for convenience

pub mod fetched;

pub use fetched::{FetchedValue, FetchedValueBuilder};

// Re-export commonly used types for convenience
pub use resolvent_types::{
    ErrorClassification, ErrorRecord, ErrorRecordBuilder, Extensions, FieldPath, PathParseError, PathSegment, SourceLocation,
};
