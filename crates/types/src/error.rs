//! Field error records.
//!
//! An [`ErrorRecord`] describes one error raised while resolving one field.
//! It is carried as data next to the resolved value rather than raised; the
//! execution pipeline decides how records aggregate across a whole query.
//! Records are immutable and built through [`ErrorRecordBuilder`].

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use thiserror::Error;

use crate::Extensions;
use crate::path::FieldPath;

/// A 1-based line/column position in the query document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    /// 1-based line number.
    pub line: usize,
    /// 1-based column number.
    pub column: usize,
}

impl SourceLocation {
    /// Creates a location from 1-based line and column numbers.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Standard classification of a field error.
///
/// Serialized with the variant name verbatim, both standalone and when
/// folded into an error's extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorClassification {
    /// The query document failed to parse.
    InvalidSyntax,
    /// The query document failed validation against the schema.
    ValidationError,
    /// A resolving function raised or returned an error.
    DataFetchingException,
    /// A null value surfaced where the schema requires a value.
    NullValueInNonNullableField,
    /// The requested operation kind is not supported.
    OperationNotSupported,
    /// Execution was aborted before this field completed.
    ExecutionAborted,
}

impl ErrorClassification {
    /// The serialized name of this classification.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidSyntax => "InvalidSyntax",
            Self::ValidationError => "ValidationError",
            Self::DataFetchingException => "DataFetchingException",
            Self::NullValueInNonNullableField => "NullValueInNonNullableField",
            Self::OperationNotSupported => "OperationNotSupported",
            Self::ExecutionAborted => "ExecutionAborted",
        }
    }
}

impl std::fmt::Display for ErrorClassification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One error raised while resolving one field.
///
/// Implements [`std::error::Error`] (the display form is the message) so a
/// record can travel through `?` chains when a field failure must abort an
/// execution. Serialization produces the response-format object: `message`,
/// then `locations`, `path`, and `extensions` when present, with a present
/// classification folded into `extensions.classification`.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ErrorRecord {
    message: String,
    locations: Vec<SourceLocation>,
    path: Option<FieldPath>,
    classification: Option<ErrorClassification>,
    extensions: Option<Extensions>,
}

impl ErrorRecord {
    /// Creates a blank builder.
    pub fn builder() -> ErrorRecordBuilder {
        ErrorRecordBuilder::default()
    }

    /// The human-readable error description.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Positions in the query document this error points at.
    pub fn locations(&self) -> &[SourceLocation] {
        &self.locations
    }

    /// Path from the result root to the field that produced this error.
    pub fn path(&self) -> Option<&FieldPath> {
        self.path.as_ref()
    }

    /// Standard classification, when one was assigned.
    pub fn classification(&self) -> Option<ErrorClassification> {
        self.classification
    }

    /// Side-channel metadata attached to this error.
    pub fn extensions(&self) -> Option<&Extensions> {
        self.extensions.as_ref()
    }

    /// The response-format JSON object for this record.
    ///
    /// A present classification lands under `extensions.classification`;
    /// explicitly supplied extensions win on key collision. The record
    /// itself is left untouched.
    pub fn to_specification(&self) -> Value {
        serde_json::to_value(self).expect("error record serializes as a JSON object")
    }

    fn specification_extensions(&self) -> Option<Extensions> {
        match (self.classification, &self.extensions) {
            (None, None) => None,
            (None, Some(extensions)) => Some(extensions.clone()),
            (Some(classification), supplied) => {
                let mut merged = Extensions::new();
                merged.insert(
                    "classification".to_string(),
                    Value::String(classification.as_str().to_string()),
                );
                if let Some(extensions) = supplied {
                    merged.extend(extensions.iter().map(|(key, value)| (key.clone(), value.clone())));
                }
                Some(merged)
            }
        }
    }
}

impl Serialize for ErrorRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("message", &self.message)?;
        if !self.locations.is_empty() {
            map.serialize_entry("locations", &self.locations)?;
        }
        if let Some(path) = &self.path {
            map.serialize_entry("path", path)?;
        }
        if let Some(extensions) = self.specification_extensions() {
            map.serialize_entry("extensions", &extensions)?;
        }
        map.end()
    }
}

/// Staging area for constructing an [`ErrorRecord`].
///
/// Setters consume and return the builder for chaining. `build` performs no
/// validation; an empty message is accepted.
#[derive(Debug, Clone, Default)]
pub struct ErrorRecordBuilder {
    message: String,
    locations: Vec<SourceLocation>,
    path: Option<FieldPath>,
    classification: Option<ErrorClassification>,
    extensions: Option<Extensions>,
}

impl ErrorRecordBuilder {
    /// Sets the error message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Appends one source location.
    pub fn location(mut self, location: SourceLocation) -> Self {
        self.locations.push(location);
        self
    }

    /// Replaces the source locations wholesale.
    pub fn locations(mut self, locations: Vec<SourceLocation>) -> Self {
        self.locations = locations;
        self
    }

    /// Sets the result path.
    pub fn path(mut self, path: FieldPath) -> Self {
        self.path = Some(path);
        self
    }

    /// Sets the classification.
    pub fn classification(mut self, classification: ErrorClassification) -> Self {
        self.classification = Some(classification);
        self
    }

    /// Replaces the extensions mapping; `None` marks it absent.
    pub fn extensions(mut self, extensions: Option<Extensions>) -> Self {
        self.extensions = extensions;
        self
    }

    /// Inserts one extensions entry, creating the mapping if absent.
    pub fn extension(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extensions.get_or_insert_with(Extensions::new).insert(key.into(), value);
        self
    }

    /// Produces the immutable record.
    pub fn build(self) -> ErrorRecord {
        ErrorRecord {
            message: self.message,
            locations: self.locations,
            path: self.path,
            classification: self.classification,
            extensions: self.extensions,
        }
    }
}
