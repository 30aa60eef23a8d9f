// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Field descriptor tables.
//!
//! A [`FieldDescriptor`] declares how one field of a Weather.com payload
//! becomes a sensor: where to read it, how to coerce it, which unit label
//! to attach and how to present it. Two tables exist, one per payload
//! shape (see [`Feature`]), and both are static, insertion-ordered data.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use weathercom_sensors::descriptor::{Feature, find_descriptor};
//! use weathercom_sensors::types::{SensorValue, Unit};
//!
//! let temperature = find_descriptor(Feature::CurrentConditions, "temperature").unwrap();
//! let payload = json!({"temperature": 0.0});
//! let payload = payload.as_object().unwrap();
//!
//! assert_eq!(temperature.extract(payload, "").unwrap(), SensorValue::Float(0.0));
//! assert_eq!(temperature.unit(true), Some(Unit::Celsius));
//! assert_eq!(temperature.unit(false), Some(Unit::Fahrenheit));
//! ```

mod current_conditions;
mod observations;

pub use observations::observation_payload;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ExtractError, ValueError};
use crate::types::{DeviceClass, SensorValue, StateClass, Unit, UnitSystem};

/// A flat payload mapping as returned by the Weather.com fetch.
pub type Payload = serde_json::Map<String, Value>;

/// Selects the unit label for a field from the host's unit system.
pub type UnitFn = fn(UnitSystem) -> Option<Unit>;

pub(crate) const ICON_THERMOMETER: &str = "mdi:thermometer";
pub(crate) const ICON_UMBRELLA: &str = "mdi:umbrella";
pub(crate) const ICON_WIND: &str = "mdi:weather-windy";

/// The API response section a descriptor reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    /// The `v3/wx/observations/current` response.
    CurrentConditions,
    /// The personal weather station `v2/pws/observations/current` response.
    Observations,
}

impl Feature {
    /// Every feature, in table order.
    pub const ALL: [Self; 2] = [Self::CurrentConditions, Self::Observations];

    /// Returns the snake case name of the feature.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CurrentConditions => "current_conditions",
            Self::Observations => "observations",
        }
    }

    /// Returns the descriptor table for this feature.
    #[must_use]
    pub fn descriptors(self) -> &'static [FieldDescriptor] {
        match self {
            Self::CurrentConditions => current_conditions::DESCRIPTORS,
            Self::Observations => observations::DESCRIPTORS,
        }
    }

    /// Returns the payload key holding the local observation time.
    #[must_use]
    pub const fn time_key(&self) -> &'static str {
        match self {
            Self::CurrentConditions => "validTimeLocal",
            Self::Observations => "obsTimeLocal",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Feature {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "current_conditions" | "currentconditions" => Ok(Self::CurrentConditions),
            "observations" => Ok(Self::Observations),
            _ => Err(ValueError::InvalidFeature(s.to_string())),
        }
    }
}

/// The type a payload field is coerced to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Text; falsy values become `""`.
    Text,
    /// Integer; falsy values become `0`.
    Integer,
    /// Float; passed through as-is, including `0.0`. `null` becomes
    /// [`SensorValue::Unknown`].
    Float,
}

impl ValueKind {
    /// Coerces a raw payload value to this kind.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::InvalidValue`] if the value cannot be
    /// represented as this kind.
    pub fn coerce(self, field: &str, raw: &Value) -> Result<SensorValue, ExtractError> {
        match self {
            Self::Text => {
                if is_falsy(raw) {
                    tracing::trace!(field, "substituting empty text for falsy value");
                    return Ok(SensorValue::Text(String::new()));
                }
                match raw {
                    Value::String(s) => Ok(SensorValue::Text(s.clone())),
                    Value::Number(n) => Ok(SensorValue::Text(n.to_string())),
                    other => Err(ExtractError::invalid(
                        field,
                        format!("expected text, got {other}"),
                    )),
                }
            }
            Self::Integer => {
                let value = coerce_integer(field, raw)?;
                if value == 0 {
                    tracing::trace!(field, "substituting zero for falsy value");
                }
                Ok(SensorValue::Integer(value))
            }
            Self::Float => match raw {
                Value::Null => Ok(SensorValue::Unknown),
                Value::Number(n) => n
                    .as_f64()
                    .map(SensorValue::Float)
                    .ok_or_else(|| ExtractError::invalid(field, format!("{n} is not a float"))),
                Value::String(s) => s
                    .trim()
                    .parse::<f64>()
                    .map(SensorValue::Float)
                    .map_err(|e| ExtractError::invalid(field, format!("{s:?}: {e}"))),
                other => Err(ExtractError::invalid(
                    field,
                    format!("expected a float, got {other}"),
                )),
            },
        }
    }
}

fn is_falsy(raw: &Value) -> bool {
    match raw {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn coerce_integer(field: &str, raw: &Value) -> Result<i64, ExtractError> {
    if is_falsy(raw) {
        return Ok(0);
    }
    match raw {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Ok(i);
            }
            // Fractional readings truncate toward zero.
            let truncated = n.as_f64().map(f64::trunc).filter(|f| {
                *f >= i64::MIN as f64 && *f <= i64::MAX as f64
            });
            truncated
                .map(|f| f as i64)
                .ok_or_else(|| ExtractError::invalid(field, format!("{n} is out of range")))
        }
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|e| ExtractError::invalid(field, format!("{s:?}: {e}"))),
        other => Err(ExtractError::invalid(
            field,
            format!("expected an integer, got {other}"),
        )),
    }
}

/// Describes one sensor backed by one payload field.
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    /// The payload key, unique within its table.
    pub key: &'static str,
    /// Human-readable sensor name.
    pub name: &'static str,
    /// Material Design icon identifier.
    pub icon: &'static str,
    /// What the sensor measures, if classified.
    pub device_class: Option<DeviceClass>,
    /// Aggregation semantics, if any.
    pub state_class: Option<StateClass>,
    /// The type the raw value is coerced to.
    pub kind: ValueKind,
    /// Unit selection for this field.
    pub unit_fn: UnitFn,
    /// The payload shape this field belongs to.
    pub feature: Feature,
}

impl FieldDescriptor {
    /// Extracts this field's value from a payload.
    ///
    /// `context` is reserved for per-call context such as a locale and is
    /// not used by any current descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::MissingField`] if the key is absent and
    /// [`ExtractError::InvalidValue`] if the value cannot be coerced.
    pub fn extract(&self, payload: &Payload, _context: &str) -> Result<SensorValue, ExtractError> {
        let raw = payload
            .get(self.key)
            .ok_or_else(|| ExtractError::MissingField(self.key.to_string()))?;
        self.kind.coerce(self.key, raw)
    }

    /// Returns the unit label for the given metric flag.
    #[must_use]
    pub fn unit(&self, is_metric: bool) -> Option<Unit> {
        self.unit_for(UnitSystem::from(is_metric))
    }

    /// Returns the unit label for the given unit system.
    #[must_use]
    pub fn unit_for(&self, units: UnitSystem) -> Option<Unit> {
        (self.unit_fn)(units)
    }
}

/// Returns the ordered descriptor table for a feature.
///
/// The order is fixed and identical across calls.
#[must_use]
pub fn list_descriptors(feature: Feature) -> &'static [FieldDescriptor] {
    feature.descriptors()
}

/// Finds the descriptor for `key` within a feature's table.
#[must_use]
pub fn find_descriptor(feature: Feature, key: &str) -> Option<&'static FieldDescriptor> {
    feature.descriptors().iter().find(|d| d.key == key)
}

pub(crate) const fn no_unit(_: UnitSystem) -> Option<Unit> {
    None
}

pub(crate) const fn percentage(_: UnitSystem) -> Option<Unit> {
    Some(Unit::Percentage)
}

pub(crate) const fn degrees(_: UnitSystem) -> Option<Unit> {
    Some(Unit::Degree)
}

pub(crate) const fn uv_index(_: UnitSystem) -> Option<Unit> {
    Some(Unit::UvIndex)
}

pub(crate) const fn irradiance(_: UnitSystem) -> Option<Unit> {
    Some(Unit::WattsPerSquareMeter)
}

pub(crate) const fn temperature(units: UnitSystem) -> Option<Unit> {
    Some(match units {
        UnitSystem::Metric => Unit::Celsius,
        UnitSystem::Imperial => Unit::Fahrenheit,
    })
}

pub(crate) const fn precipitation(units: UnitSystem) -> Option<Unit> {
    Some(match units {
        UnitSystem::Metric => Unit::Millimeters,
        UnitSystem::Imperial => Unit::Inches,
    })
}

pub(crate) const fn precipitation_rate(units: UnitSystem) -> Option<Unit> {
    Some(match units {
        UnitSystem::Metric => Unit::MillimetersPerHour,
        UnitSystem::Imperial => Unit::InchesPerHour,
    })
}

pub(crate) const fn pressure(units: UnitSystem) -> Option<Unit> {
    Some(match units {
        UnitSystem::Metric => Unit::Millibar,
        UnitSystem::Imperial => Unit::InchesOfMercury,
    })
}

pub(crate) const fn wind_speed(units: UnitSystem) -> Option<Unit> {
    Some(match units {
        UnitSystem::Metric => Unit::KilometersPerHour,
        UnitSystem::Imperial => Unit::MilesPerHour,
    })
}

pub(crate) const fn elevation(units: UnitSystem) -> Option<Unit> {
    Some(match units {
        UnitSystem::Metric => Unit::Meters,
        UnitSystem::Imperial => Unit::Feet,
    })
}
