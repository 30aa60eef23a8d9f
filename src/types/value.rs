// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scalar sensor values.

use std::fmt;

use serde::Serialize;

/// A scalar value extracted from a payload.
///
/// Serializes as the bare JSON scalar (`"NW"`, `64`, `21.5`, `null`).
///
/// # Examples
///
/// ```
/// use weathercom_sensors::types::SensorValue;
///
/// let value = SensorValue::Float(0.0);
/// assert_eq!(value.as_float(), Some(0.0));
/// assert_eq!(value.as_integer(), None);
/// assert_eq!(SensorValue::Text("NW".into()).to_string(), "NW");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SensorValue {
    /// A text value.
    Text(String),
    /// An integer value.
    Integer(i64),
    /// A floating point value.
    Float(f64),
    /// The payload held `null` for a float field.
    Unknown,
}

impl SensorValue {
    /// Returns the text value, if this is [`SensorValue::Text`].
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer value, if this is [`SensorValue::Integer`].
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the float value, if this is [`SensorValue::Float`].
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns true for [`SensorValue::Unknown`].
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

impl fmt::Display for SensorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Unknown => f.write_str("unknown"),
        }
    }
}
