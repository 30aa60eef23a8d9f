// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Descriptors for personal weather station observations.
//!
//! The PWS response nests its unit-dependent readings under a section named
//! after the requested unit system:
//!
//! ```json
//! {"observations":[{
//!     "stationID": "KMAHANOV10",
//!     "obsTimeLocal": "2024-01-15 10:30:00",
//!     "humidity": 64,
//!     "metric": {"temp": 3.1, "pressure": 1016.9}
//! }]}
//! ```
//!
//! [`observation_payload`] flattens that into the mapping the descriptors
//! are keyed against.

use serde_json::Value;

use super::{
    Feature, FieldDescriptor, ICON_THERMOMETER, ICON_UMBRELLA, ICON_WIND, Payload, ValueKind,
    degrees, elevation, irradiance, no_unit, percentage, precipitation, precipitation_rate,
    pressure, temperature, uv_index, wind_speed,
};
use crate::error::ExtractError;
use crate::types::{DeviceClass, StateClass, UnitSystem};

const UNIT_SECTIONS: [&str; 4] = ["metric", "imperial", "metric_si", "uk_hybrid"];

/// Flattens a raw PWS observations response into a flat payload.
///
/// Accepts either the full response (`{"observations": [...]}`, first
/// observation used) or a single observation object. Top-level fields are
/// kept and the section matching `units` is merged in; other unit
/// sections are dropped.
///
/// # Errors
///
/// Returns [`ExtractError::UnexpectedFormat`] if the response holds no
/// observation object or lacks the requested unit section.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use weathercom_sensors::descriptor::observation_payload;
/// use weathercom_sensors::types::UnitSystem;
///
/// let response = json!({"observations": [{
///     "humidity": 64,
///     "metric": {"temp": 3.1},
///     "imperial": {"temp": 38}
/// }]});
///
/// let payload = observation_payload(&response, UnitSystem::Imperial).unwrap();
/// assert_eq!(payload["temp"], json!(38));
/// assert_eq!(payload["humidity"], json!(64));
/// assert!(!payload.contains_key("metric"));
/// ```
pub fn observation_payload(response: &Value, units: UnitSystem) -> Result<Payload, ExtractError> {
    let observation = match response.get("observations") {
        Some(Value::Array(list)) => list.first().ok_or_else(|| {
            ExtractError::UnexpectedFormat("observations list is empty".to_string())
        })?,
        Some(other) => {
            return Err(ExtractError::UnexpectedFormat(format!(
                "observations is not a list: {other}"
            )));
        }
        None => response,
    };

    let Value::Object(fields) = observation else {
        return Err(ExtractError::UnexpectedFormat(format!(
            "observation is not an object: {observation}"
        )));
    };

    let section = match fields.get(units.as_str()) {
        Some(Value::Object(section)) => section,
        _ => {
            return Err(ExtractError::UnexpectedFormat(format!(
                "missing `{units}` section in observation"
            )));
        }
    };

    let mut payload: Payload = fields
        .iter()
        .filter(|(key, _)| !UNIT_SECTIONS.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    payload.extend(section.iter().map(|(k, v)| (k.clone(), v.clone())));
    Ok(payload)
}

/// Sensors read from `v2/pws/observations/current`, in display order.
pub(super) static DESCRIPTORS: &[FieldDescriptor] = &[
    FieldDescriptor {
        key: "obsTimeLocal",
        name: "Local Observation Time",
        icon: "mdi:clock",
        device_class: None,
        state_class: None,
        kind: ValueKind::Text,
        unit_fn: no_unit,
        feature: Feature::Observations,
    },
    FieldDescriptor {
        key: "stationID",
        name: "Station ID",
        icon: "mdi:identifier",
        device_class: None,
        state_class: None,
        kind: ValueKind::Text,
        unit_fn: no_unit,
        feature: Feature::Observations,
    },
    FieldDescriptor {
        key: "neighborhood",
        name: "Neighborhood",
        icon: "mdi:map-marker",
        device_class: None,
        state_class: None,
        kind: ValueKind::Text,
        unit_fn: no_unit,
        feature: Feature::Observations,
    },
    FieldDescriptor {
        key: "solarRadiation",
        name: "Solar Radiation",
        icon: "mdi:weather-sunny",
        device_class: Some(DeviceClass::Irradiance),
        state_class: Some(StateClass::Measurement),
        kind: ValueKind::Float,
        unit_fn: irradiance,
        feature: Feature::Observations,
    },
    FieldDescriptor {
        key: "uv",
        name: "UV Index",
        icon: "mdi:sunglasses",
        device_class: None,
        state_class: Some(StateClass::Measurement),
        kind: ValueKind::Float,
        unit_fn: uv_index,
        feature: Feature::Observations,
    },
    FieldDescriptor {
        key: "winddir",
        name: "Wind Direction - Degrees",
        icon: ICON_WIND,
        device_class: None,
        state_class: Some(StateClass::Measurement),
        kind: ValueKind::Integer,
        unit_fn: degrees,
        feature: Feature::Observations,
    },
    FieldDescriptor {
        key: "humidity",
        name: "Relative Humidity",
        icon: "mdi:water-percent",
        device_class: Some(DeviceClass::Humidity),
        state_class: Some(StateClass::Measurement),
        kind: ValueKind::Integer,
        unit_fn: percentage,
        feature: Feature::Observations,
    },
    FieldDescriptor {
        key: "temp",
        name: "Temperature",
        icon: ICON_THERMOMETER,
        device_class: Some(DeviceClass::Temperature),
        state_class: Some(StateClass::Measurement),
        kind: ValueKind::Float,
        unit_fn: temperature,
        feature: Feature::Observations,
    },
    FieldDescriptor {
        key: "heatIndex",
        name: "Heat Index",
        icon: ICON_THERMOMETER,
        device_class: Some(DeviceClass::Temperature),
        state_class: Some(StateClass::Measurement),
        kind: ValueKind::Float,
        unit_fn: temperature,
        feature: Feature::Observations,
    },
    FieldDescriptor {
        key: "dewpt",
        name: "Dewpoint",
        icon: "mdi:water",
        device_class: Some(DeviceClass::Temperature),
        state_class: Some(StateClass::Measurement),
        kind: ValueKind::Float,
        unit_fn: temperature,
        feature: Feature::Observations,
    },
    FieldDescriptor {
        key: "windChill",
        name: "Wind Chill",
        icon: ICON_THERMOMETER,
        device_class: Some(DeviceClass::Temperature),
        state_class: Some(StateClass::Measurement),
        kind: ValueKind::Float,
        unit_fn: temperature,
        feature: Feature::Observations,
    },
    FieldDescriptor {
        key: "windSpeed",
        name: "Wind Speed",
        icon: ICON_WIND,
        device_class: Some(DeviceClass::WindSpeed),
        state_class: Some(StateClass::Measurement),
        kind: ValueKind::Float,
        unit_fn: wind_speed,
        feature: Feature::Observations,
    },
    FieldDescriptor {
        key: "windGust",
        name: "Wind Gust",
        icon: ICON_WIND,
        device_class: Some(DeviceClass::WindSpeed),
        state_class: Some(StateClass::Measurement),
        kind: ValueKind::Float,
        unit_fn: wind_speed,
        feature: Feature::Observations,
    },
    FieldDescriptor {
        key: "pressure",
        name: "Pressure",
        icon: "mdi:gauge",
        device_class: Some(DeviceClass::Pressure),
        state_class: Some(StateClass::Measurement),
        kind: ValueKind::Float,
        unit_fn: pressure,
        feature: Feature::Observations,
    },
    FieldDescriptor {
        key: "precipRate",
        name: "Precipitation Rate",
        icon: ICON_UMBRELLA,
        device_class: Some(DeviceClass::PrecipitationIntensity),
        state_class: Some(StateClass::Measurement),
        kind: ValueKind::Float,
        unit_fn: precipitation_rate,
        feature: Feature::Observations,
    },
    FieldDescriptor {
        key: "precipTotal",
        name: "Precipitation - Today",
        icon: ICON_UMBRELLA,
        device_class: Some(DeviceClass::Precipitation),
        state_class: Some(StateClass::TotalIncreasing),
        kind: ValueKind::Float,
        unit_fn: precipitation,
        feature: Feature::Observations,
    },
    FieldDescriptor {
        key: "elev",
        name: "Elevation",
        icon: "mdi:elevation-rise",
        device_class: Some(DeviceClass::Distance),
        state_class: None,
        kind: ValueKind::Float,
        unit_fn: elevation,
        feature: Feature::Observations,
    },
];
