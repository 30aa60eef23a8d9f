// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the sensor descriptor tables.
//!
//! Extraction failures are data-contract errors: the payload handed in by
//! the host does not have the shape a descriptor expects. They are never
//! recovered here and are returned to the caller, which decides whether to
//! mark the affected sensor unavailable.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// A field could not be extracted from a payload.
    #[error("extract error: {0}")]
    Extract(#[from] ExtractError),

    /// A configuration value was rejected.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// JSON decoding failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while extracting a value from a payload.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// The descriptor's key is absent from the payload.
    #[error("missing field in payload: {0}")]
    MissingField(String),

    /// The raw value cannot be coerced to the descriptor's kind.
    #[error("failed to parse {field}: {message}")]
    InvalidValue {
        /// The payload key that failed to coerce.
        field: String,
        /// Description of the coercion failure.
        message: String,
    },

    /// The raw response is not shaped as expected.
    #[error("unexpected payload format: {0}")]
    UnexpectedFormat(String),
}

impl ExtractError {
    pub(crate) fn invalid(field: &str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Errors related to configuration values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// An unknown unit system name was provided.
    #[error("invalid unit system: {0}")]
    InvalidUnitSystem(String),

    /// An unknown feature name was provided.
    #[error("invalid feature: {0}")]
    InvalidFeature(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_display() {
        let err = ExtractError::MissingField("temperature".to_string());
        assert_eq!(err.to_string(), "missing field in payload: temperature");
    }

    #[test]
    fn invalid_value_display() {
        let err = ExtractError::invalid("uvIndex", "expected an integer, got \"high\"");
        assert_eq!(
            err.to_string(),
            "failed to parse uvIndex: expected an integer, got \"high\""
        );
    }

    #[test]
    fn error_from_extract_error() {
        let err: Error = ExtractError::MissingField("windSpeed".to_string()).into();
        assert!(matches!(err, Error::Extract(ExtractError::MissingField(ref k)) if k == "windSpeed"));
    }

    #[test]
    fn value_error_display() {
        let err = ValueError::InvalidUnitSystem("kelvin".to_string());
        assert_eq!(err.to_string(), "invalid unit system: kelvin");
    }
}
