// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Descriptors for the current conditions response.

use super::{
    Feature, FieldDescriptor, ICON_THERMOMETER, ICON_UMBRELLA, ICON_WIND, ValueKind, degrees,
    no_unit, percentage, precipitation, pressure, temperature, uv_index, wind_speed,
};
use crate::types::{DeviceClass, StateClass};

/// Sensors read from `v3/wx/observations/current`, in display order.
pub(super) static DESCRIPTORS: &[FieldDescriptor] = &[
    FieldDescriptor {
        key: "validTimeLocal",
        name: "Local Observation Time",
        icon: "mdi:clock",
        device_class: None,
        state_class: None,
        kind: ValueKind::Text,
        unit_fn: no_unit,
        feature: Feature::CurrentConditions,
    },
    FieldDescriptor {
        key: "relativeHumidity",
        name: "Relative Humidity",
        icon: "mdi:water-percent",
        device_class: Some(DeviceClass::Humidity),
        state_class: Some(StateClass::Measurement),
        kind: ValueKind::Integer,
        unit_fn: percentage,
        feature: Feature::CurrentConditions,
    },
    FieldDescriptor {
        key: "uvIndex",
        name: "UV Index",
        icon: "mdi:sunglasses",
        device_class: None,
        state_class: Some(StateClass::Measurement),
        kind: ValueKind::Integer,
        unit_fn: uv_index,
        feature: Feature::CurrentConditions,
    },
    FieldDescriptor {
        key: "windDirection",
        name: "Wind Direction - Degrees",
        icon: ICON_WIND,
        device_class: None,
        state_class: Some(StateClass::Measurement),
        kind: ValueKind::Integer,
        unit_fn: degrees,
        feature: Feature::CurrentConditions,
    },
    FieldDescriptor {
        key: "windDirectionCardinal",
        name: "Wind Direction - Cardinal",
        icon: ICON_WIND,
        device_class: None,
        state_class: None,
        kind: ValueKind::Text,
        unit_fn: no_unit,
        feature: Feature::CurrentConditions,
    },
    FieldDescriptor {
        key: "temperatureDewPoint",
        name: "Dewpoint",
        icon: "mdi:water",
        device_class: Some(DeviceClass::Temperature),
        state_class: Some(StateClass::Measurement),
        kind: ValueKind::Float,
        unit_fn: temperature,
        feature: Feature::CurrentConditions,
    },
    FieldDescriptor {
        key: "temperatureFeelsLike",
        name: "Temperature - Feels Like",
        icon: ICON_THERMOMETER,
        device_class: Some(DeviceClass::Temperature),
        state_class: Some(StateClass::Measurement),
        kind: ValueKind::Float,
        unit_fn: temperature,
        feature: Feature::CurrentConditions,
    },
    FieldDescriptor {
        key: "temperature",
        name: "Temperature",
        icon: ICON_THERMOMETER,
        device_class: Some(DeviceClass::Temperature),
        state_class: Some(StateClass::Measurement),
        kind: ValueKind::Float,
        unit_fn: temperature,
        feature: Feature::CurrentConditions,
    },
    FieldDescriptor {
        key: "temperatureHeatIndex",
        name: "Heat Index",
        icon: ICON_THERMOMETER,
        device_class: Some(DeviceClass::Temperature),
        state_class: Some(StateClass::Measurement),
        kind: ValueKind::Float,
        unit_fn: temperature,
        feature: Feature::CurrentConditions,
    },
    FieldDescriptor {
        key: "temperatureWindChill",
        name: "Wind Chill",
        icon: ICON_THERMOMETER,
        device_class: Some(DeviceClass::Temperature),
        state_class: Some(StateClass::Measurement),
        kind: ValueKind::Float,
        unit_fn: temperature,
        feature: Feature::CurrentConditions,
    },
    FieldDescriptor {
        key: "precip1Hour",
        name: "Precipitation - Last hour",
        icon: ICON_UMBRELLA,
        device_class: Some(DeviceClass::Precipitation),
        state_class: Some(StateClass::TotalIncreasing),
        kind: ValueKind::Float,
        unit_fn: precipitation,
        feature: Feature::CurrentConditions,
    },
    FieldDescriptor {
        key: "precip6Hour",
        name: "Precipitation - Last 6 hours",
        icon: ICON_UMBRELLA,
        device_class: Some(DeviceClass::Precipitation),
        state_class: Some(StateClass::TotalIncreasing),
        kind: ValueKind::Float,
        unit_fn: precipitation,
        feature: Feature::CurrentConditions,
    },
    FieldDescriptor {
        key: "precip24Hour",
        name: "Precipitation - Last 24 hours",
        icon: ICON_UMBRELLA,
        device_class: Some(DeviceClass::Precipitation),
        state_class: Some(StateClass::TotalIncreasing),
        kind: ValueKind::Float,
        unit_fn: precipitation,
        feature: Feature::CurrentConditions,
    },
    FieldDescriptor {
        key: "pressureAltimeter",
        name: "Pressure",
        icon: "mdi:gauge",
        device_class: Some(DeviceClass::Pressure),
        state_class: Some(StateClass::Measurement),
        kind: ValueKind::Float,
        unit_fn: pressure,
        feature: Feature::CurrentConditions,
    },
    FieldDescriptor {
        key: "windGust",
        name: "Wind Gust",
        icon: ICON_WIND,
        device_class: Some(DeviceClass::WindSpeed),
        state_class: Some(StateClass::Measurement),
        kind: ValueKind::Float,
        unit_fn: wind_speed,
        feature: Feature::CurrentConditions,
    },
    FieldDescriptor {
        key: "windSpeed",
        name: "Wind Speed",
        icon: ICON_WIND,
        device_class: Some(DeviceClass::WindSpeed),
        state_class: Some(StateClass::Measurement),
        kind: ValueKind::Float,
        unit_fn: wind_speed,
        feature: Feature::CurrentConditions,
    },
];
