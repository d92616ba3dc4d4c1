//! Shared type definitions for the resolvent execution value layer.
//!
//! These types describe the data carried alongside a resolved field: the
//! structured per-field error record, the source locations and result paths
//! it points at, and the ordered extensions mapping used for side-channel
//! metadata. The execution value itself lives in `resolvent-engine`; this
//! crate only defines the shapes both sides agree on.

use indexmap::IndexMap;
use serde_json::Value;

pub mod error;
pub mod path;

pub use error::{ErrorClassification, ErrorRecord, ErrorRecordBuilder, SourceLocation};
pub use path::{FieldPath, PathParseError, PathSegment};

/// Ordered side-channel metadata attached to a resolved value or an error.
///
/// Insertion order is preserved. At use sites the mapping is wrapped in an
/// `Option`: absence is a valid state of its own and is not collapsed into an
/// empty mapping.
pub type Extensions = IndexMap<String, Value>;
