//! Result paths for field errors.
//!
//! A [`FieldPath`] names one field in a response tree as the trail of object
//! field names and list indices leading to it from the root. Paths render as
//! `/parent/child[0]/name` and serialize as the flat list form
//! (`["parent", "child", 0, "name"]`) used inside error payloads.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// One step in a [`FieldPath`]: an object field name or a list index.
///
/// Serializes untagged, so a segment appears as a bare string or number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// Index into a list value.
    Index(usize),
    /// Name of an object field.
    Field(String),
}

/// Failure modes of [`FieldPath::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathParseError {
    /// Two separators in a row, or a trailing separator.
    #[error("empty path segment")]
    EmptySegment,
    /// A `[` with no matching `]`.
    #[error("unterminated list index in segment '{0}'")]
    UnterminatedIndex(String),
    /// Index brackets around something that is not a non-negative integer.
    #[error("invalid list index in segment '{0}'")]
    InvalidIndex(String),
    /// Characters after a closing `]` that do not open another index.
    #[error("unexpected characters after list index in segment '{0}'")]
    TrailingCharacters(String),
}

/// Path from the result root down to a single field.
///
/// The root path is empty. Paths are built by consuming-append calls
/// ([`FieldPath::field`], [`FieldPath::index`]) or parsed from the textual
/// `/a/b[0]` form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    /// The empty path addressing the response root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns true when this path addresses the response root.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Appends an object field name.
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.segments.push(PathSegment::Field(name.into()));
        self
    }

    /// Appends a list index.
    pub fn index(mut self, index: usize) -> Self {
        self.segments.push(PathSegment::Index(index));
        self
    }

    /// The path one segment up, or `None` at the root.
    pub fn parent(&self) -> Option<FieldPath> {
        if self.segments.is_empty() {
            return None;
        }
        let mut segments = self.segments.clone();
        segments.pop();
        Some(FieldPath { segments })
    }

    /// The segments from root to leaf.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// The flat list form used inside error payloads.
    pub fn to_json_list(&self) -> Vec<Value> {
        self.segments
            .iter()
            .map(|segment| match segment {
                PathSegment::Field(name) => Value::String(name.clone()),
                PathSegment::Index(index) => Value::from(*index),
            })
            .collect()
    }

    /// Parses the textual `/a/b[0]` form.
    ///
    /// The leading `/` is optional and an empty or `/` input yields the root
    /// path. Each `/`-separated segment is a field name followed by zero or
    /// more `[n]` index suffixes; a segment may also be indices alone.
    pub fn parse(input: &str) -> Result<Self, PathParseError> {
        let trimmed = input.trim();
        let trimmed = trimmed.strip_prefix('/').unwrap_or(trimmed);
        if trimmed.is_empty() {
            return Ok(Self::root());
        }

        let mut segments = Vec::new();
        for raw in trimmed.split('/') {
            if raw.is_empty() {
                return Err(PathParseError::EmptySegment);
            }
            let (name, indices) = match raw.find('[') {
                Some(bracket) => raw.split_at(bracket),
                None => (raw, ""),
            };
            if !name.is_empty() {
                segments.push(PathSegment::Field(name.to_string()));
            }

            let mut remaining = indices;
            while let Some(open) = remaining.strip_prefix('[') {
                let Some(close) = open.find(']') else {
                    return Err(PathParseError::UnterminatedIndex(raw.to_string()));
                };
                let index = open[..close]
                    .parse::<usize>()
                    .map_err(|_| PathParseError::InvalidIndex(raw.to_string()))?;
                segments.push(PathSegment::Index(index));
                remaining = &open[close + 1..];
            }
            if !remaining.is_empty() {
                return Err(PathParseError::TrailingCharacters(raw.to_string()));
            }
        }

        Ok(Self { segments })
    }
}

impl From<Vec<PathSegment>> for FieldPath {
    fn from(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("/");
        }
        for segment in &self.segments {
            match segment {
                PathSegment::Field(name) => write!(f, "/{name}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}
