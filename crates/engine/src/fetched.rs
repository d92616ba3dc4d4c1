//! Resolved field values.
//!
//! A [`FetchedValue`] records the outcome of resolving one field. Instances
//! are immutable; the pipeline derives adjusted copies through
//! [`FetchedValue::transform`] instead of mutating a published value, so a
//! value already handed to result assembly can never change underneath it.

use serde::Serialize;
use serde_json::Value;

use resolvent_types::{ErrorRecord, Extensions};

/// Immutable outcome of resolving a single field.
///
/// The unwrapped value is the plain payload, never a wrapper type carrying
/// its own value/error channel; `Value::Null` is the in-band representation
/// of "no value". Reads of the error sequence and the extensions mapping
/// return independent copies, so a caller mutating a returned container
/// cannot corrupt a shared instance. Construction goes through
/// [`FetchedValue::builder`]; no combination of fields is rejected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FetchedValue {
    fetched_value: Value,
    raw_fetched_value: Value,
    local_context: Value,
    errors: Vec<ErrorRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    extensions: Option<Extensions>,
}

impl FetchedValue {
    /// Creates a blank builder with an empty error sequence.
    pub fn builder() -> FetchedValueBuilder {
        FetchedValueBuilder::default()
    }

    /// Creates a builder pre-populated with this instance's fields.
    ///
    /// The error sequence and extensions mapping are copied through the
    /// reading accessors, so the builder shares no containers with this
    /// instance; the three opaque values are cloned as-is.
    pub fn to_builder(&self) -> FetchedValueBuilder {
        FetchedValueBuilder::default()
            .fetched_value(self.fetched_value.clone())
            .raw_fetched_value(self.raw_fetched_value.clone())
            .errors(self.errors())
            .extensions(self.extensions())
            .local_context(self.local_context.clone())
    }

    /// The resolved value, fully unwrapped.
    pub fn fetched_value(&self) -> &Value {
        &self.fetched_value
    }

    /// The value exactly as the resolving function returned it, before
    /// unwrapping or normalization.
    pub fn raw_fetched_value(&self) -> &Value {
        &self.raw_fetched_value
    }

    /// Context propagated to the resolution of this field's children.
    pub fn local_context(&self) -> &Value {
        &self.local_context
    }

    /// Errors raised while resolving this field, in insertion order.
    ///
    /// Returns an independent copy; mutating it does not affect this
    /// instance or other reads.
    pub fn errors(&self) -> Vec<ErrorRecord> {
        self.errors.clone()
    }

    /// Side-channel metadata in insertion order, or `None` when none was
    /// supplied at construction.
    ///
    /// Returns an independent copy. Absence is a distinct state from an
    /// empty mapping and is reported as `None`, never as an empty map.
    pub fn extensions(&self) -> Option<Extensions> {
        self.extensions.clone()
    }

    /// Builds a derived copy, leaving this instance unmodified.
    ///
    /// The callback receives a builder seeded from this instance and may
    /// chain any subset of its setters. This is the only supported way to
    /// produce a modified copy.
    pub fn transform<F>(&self, mutator: F) -> FetchedValue
    where
        F: FnOnce(FetchedValueBuilder) -> FetchedValueBuilder,
    {
        mutator(self.to_builder()).build()
    }
}

/// Staging area for constructing a [`FetchedValue`].
///
/// Setters consume and return the builder for chaining. The error sequence
/// defaults to empty and the opaque values to `Value::Null`; `build` accepts
/// any combination of fields without validation. A builder is a short-lived,
/// single-owner construction aid, not a shared object.
#[derive(Debug, Clone, Default)]
pub struct FetchedValueBuilder {
    fetched_value: Value,
    raw_fetched_value: Value,
    local_context: Value,
    errors: Vec<ErrorRecord>,
    extensions: Option<Extensions>,
}

impl FetchedValueBuilder {
    /// Sets the unwrapped resolved value. `Value::Null` stands for "no value".
    pub fn fetched_value(mut self, value: Value) -> Self {
        self.fetched_value = value;
        self
    }

    /// Sets the pre-unwrap raw resolver output.
    pub fn raw_fetched_value(mut self, value: Value) -> Self {
        self.raw_fetched_value = value;
        self
    }

    /// Sets the context propagated to child field resolutions.
    pub fn local_context(mut self, value: Value) -> Self {
        self.local_context = value;
        self
    }

    /// Replaces the error sequence wholesale.
    ///
    /// The sequence is taken as-is; the built instance copies it on every
    /// read instead.
    pub fn errors(mut self, errors: Vec<ErrorRecord>) -> Self {
        self.errors = errors;
        self
    }

    /// Sets the extensions mapping; `None` marks extensions as absent.
    pub fn extensions(mut self, extensions: Option<Extensions>) -> Self {
        self.extensions = extensions;
        self
    }

    /// Produces the immutable value from the builder's current fields.
    pub fn build(self) -> FetchedValue {
        FetchedValue {
            fetched_value: self.fetched_value,
            raw_fetched_value: self.raw_fetched_value,
            local_context: self.local_context,
            errors: self.errors,
            extensions: self.extensions,
        }
    }
}
