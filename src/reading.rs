// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Materializing sensor readings from fetched payloads.
//!
//! This is the iteration a host runs once per polling cycle: walk a
//! descriptor table against the payload fetched for its feature, extract
//! each value, resolve each unit and attach the display metadata. A field
//! that fails to extract does not abort the cycle; its reading is marked
//! unavailable and keeps the error.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use weathercom_sensors::config::SensorConfig;
//! use weathercom_sensors::descriptor::Feature;
//! use weathercom_sensors::reading::read_table;
//!
//! let payload = json!({"temperature": 21.5});
//! let readings = read_table(
//!     Feature::CurrentConditions,
//!     payload.as_object().unwrap(),
//!     &SensorConfig::default(),
//! );
//!
//! let temperature = readings.iter().find(|r| r.key == "temperature").unwrap();
//! assert!(temperature.is_available());
//! assert_eq!(temperature.unit.unwrap().as_str(), "°C");
//!
//! // Everything else was absent from the payload.
//! assert_eq!(readings.iter().filter(|r| !r.is_available()).count(), readings.len() - 1);
//! ```

use std::collections::HashMap;

use serde::Serialize;

use crate::config::SensorConfig;
use crate::descriptor::{Feature, FieldDescriptor, Payload};
use crate::error::ExtractError;
use crate::types::{DeviceClass, ObservationTime, SensorValue, StateClass, Unit};

/// One sensor's state for one polling cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorReading {
    /// The payload key the reading came from.
    pub key: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Icon identifier.
    pub icon: &'static str,
    /// Device classification.
    pub device_class: Option<DeviceClass>,
    /// State classification.
    pub state_class: Option<StateClass>,
    /// The table the reading belongs to.
    pub feature: Feature,
    /// Unit label for the configured unit system.
    pub unit: Option<Unit>,
    /// The extracted value, `None` when unavailable.
    pub value: Option<SensorValue>,
    /// Why the value is unavailable.
    #[serde(skip)]
    pub error: Option<ExtractError>,
}

impl SensorReading {
    /// Reads one descriptor against a payload.
    #[must_use]
    pub fn from_descriptor(
        descriptor: &'static FieldDescriptor,
        payload: &Payload,
        config: &SensorConfig,
    ) -> Self {
        let (value, error) = match descriptor.extract(payload, &config.context) {
            Ok(value) => (Some(value), None),
            Err(e) => {
                tracing::warn!(key = descriptor.key, error = %e, "Marking sensor unavailable");
                (None, Some(e))
            }
        };

        Self {
            key: descriptor.key,
            name: descriptor.name,
            icon: descriptor.icon,
            device_class: descriptor.device_class,
            state_class: descriptor.state_class,
            feature: descriptor.feature,
            unit: descriptor.unit_for(config.units),
            value,
            error,
        }
    }

    /// Returns true if a value was extracted.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.value.is_some()
    }
}

/// Reads every descriptor of a table, in table order.
#[must_use]
pub fn read_table(feature: Feature, payload: &Payload, config: &SensorConfig) -> Vec<SensorReading> {
    let readings: Vec<_> = feature
        .descriptors()
        .iter()
        .map(|d| SensorReading::from_descriptor(d, payload, config))
        .collect();

    tracing::debug!(
        feature = %feature,
        count = readings.len(),
        unavailable = readings.iter().filter(|r| !r.is_available()).count(),
        "Read sensor table"
    );
    readings
}

/// The readings of one table together with its observation time.
#[derive(Debug, Clone, PartialEq)]
pub struct TableReadings {
    /// The table that was read.
    pub feature: Feature,
    /// Local observation time reported in the payload, if parseable.
    pub observed_at: Option<ObservationTime>,
    /// Readings in table order.
    pub readings: Vec<SensorReading>,
}

impl TableReadings {
    /// Reads a table and its observation time from a payload.
    #[must_use]
    pub fn read(feature: Feature, payload: &Payload, config: &SensorConfig) -> Self {
        let observed_at = payload
            .get(feature.time_key())
            .and_then(|v| v.as_str())
            .and_then(ObservationTime::parse);

        Self {
            feature,
            observed_at,
            readings: read_table(feature, payload, config),
        }
    }

    /// Returns the reading for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&SensorReading> {
        self.readings.iter().find(|r| r.key == key)
    }

    /// Returns the number of unavailable readings.
    #[must_use]
    pub fn unavailable_count(&self) -> usize {
        self.readings.iter().filter(|r| !r.is_available()).count()
    }
}

/// Readings for every configured table from one polling cycle.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Snapshot {
    tables: Vec<TableReadings>,
}

impl Snapshot {
    /// Reads each configured feature from its fetched payload.
    ///
    /// Features without a payload in `payloads` are skipped.
    #[must_use]
    pub fn capture(config: &SensorConfig, payloads: &HashMap<Feature, Payload>) -> Self {
        let tables = config
            .features
            .iter()
            .filter_map(|feature| match payloads.get(feature) {
                Some(payload) => Some(TableReadings::read(*feature, payload, config)),
                None => {
                    tracing::debug!(feature = %feature, "No payload fetched, skipping table");
                    None
                }
            })
            .collect();

        Self { tables }
    }

    /// Returns the readings of one table.
    #[must_use]
    pub fn table(&self, feature: Feature) -> Option<&TableReadings> {
        self.tables.iter().find(|t| t.feature == feature)
    }

    /// Returns all tables, in configuration order.
    #[must_use]
    pub fn tables(&self) -> &[TableReadings] {
        &self.tables
    }

    /// Returns the reading for `key` in a table.
    #[must_use]
    pub fn get(&self, feature: Feature, key: &str) -> Option<&SensorReading> {
        self.table(feature).and_then(|t| t.get(key))
    }

    /// Iterates over every reading of every table.
    pub fn readings(&self) -> impl Iterator<Item = &SensorReading> {
        self.tables.iter().flat_map(|t| t.readings.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UnitSystem;
    use serde_json::json;

    fn current() -> Payload {
        json!({
            "validTimeLocal": "2024-01-15T10:30:00-0500",
            "relativeHumidity": 64,
            "uvIndex": 0,
            "windDirection": 270,
            "windDirectionCardinal": "W",
            "temperatureDewPoint": -2.0,
            "temperatureFeelsLike": -1.0,
            "temperature": 0.0,
            "temperatureHeatIndex": 0.0,
            "temperatureWindChill": -1.0,
            "precip1Hour": 0.0,
            "precip6Hour": 0.3,
            "precip24Hour": 1.2,
            "pressureAltimeter": 1016.9,
            "windGust": null,
            "windSpeed": 11.0
        })
        .as_object()
        .cloned()
        .unwrap()
    }

    #[test]
    fn complete_payload_is_fully_available() {
        let readings = read_table(Feature::CurrentConditions, &current(), &SensorConfig::default());
        assert_eq!(readings.len(), Feature::CurrentConditions.descriptors().len());
        assert!(readings.iter().all(SensorReading::is_available));
    }

    #[test]
    fn null_gust_is_available_but_unknown() {
        let readings = read_table(Feature::CurrentConditions, &current(), &SensorConfig::default());
        let gust = readings.iter().find(|r| r.key == "windGust").unwrap();
        assert_eq!(gust.value, Some(SensorValue::Unknown));
    }

    #[test]
    fn missing_key_marks_one_reading_unavailable() {
        let mut payload = current();
        payload.remove("pressureAltimeter");

        let table = TableReadings::read(Feature::CurrentConditions, &payload, &SensorConfig::default());
        assert_eq!(table.unavailable_count(), 1);

        let pressure = table.get("pressureAltimeter").unwrap();
        assert!(!pressure.is_available());
        assert_eq!(
            pressure.error,
            Some(ExtractError::MissingField("pressureAltimeter".to_string()))
        );
    }

    #[test]
    fn units_follow_config() {
        let config = SensorConfig::new().with_units(UnitSystem::Imperial);
        let table = TableReadings::read(Feature::CurrentConditions, &current(), &config);
        assert_eq!(table.get("windSpeed").unwrap().unit, Some(Unit::MilesPerHour));
        assert_eq!(table.get("windDirectionCardinal").unwrap().unit, None);
    }

    #[test]
    fn observed_at_is_parsed() {
        let table = TableReadings::read(Feature::CurrentConditions, &current(), &SensorConfig::default());
        let observed = table.observed_at.unwrap();
        assert_eq!(observed.timezone_offset().unwrap().local_minus_utc(), -5 * 3600);
    }

    #[test]
    fn observed_at_is_none_for_unparseable_time() {
        let mut payload = current();
        payload.insert("validTimeLocal".to_string(), json!("soon"));
        let table = TableReadings::read(Feature::CurrentConditions, &payload, &SensorConfig::default());
        assert!(table.observed_at.is_none());
        assert!(table.get("validTimeLocal").unwrap().is_available());
    }

    #[test]
    fn snapshot_skips_features_without_payload() {
        let payloads = HashMap::from([(Feature::CurrentConditions, current())]);
        let snapshot = Snapshot::capture(&SensorConfig::default(), &payloads);

        assert_eq!(snapshot.tables().len(), 1);
        assert!(snapshot.table(Feature::Observations).is_none());
        assert_eq!(
            snapshot.get(Feature::CurrentConditions, "windDirectionCardinal").unwrap().value,
            Some(SensorValue::Text("W".to_string()))
        );
        assert_eq!(
            snapshot.readings().count(),
            Feature::CurrentConditions.descriptors().len()
        );
    }

    #[test]
    fn reading_serializes_without_error() {
        let mut payload = current();
        payload.remove("temperature");
        let table = TableReadings::read(Feature::CurrentConditions, &payload, &SensorConfig::default());

        let json = serde_json::to_value(table.get("temperature").unwrap()).unwrap();
        assert_eq!(json["value"], json!(null));
        assert_eq!(json["unit"], json!("°C"));
        assert_eq!(json["device_class"], json!("temperature"));
        assert!(json.get("error").is_none());
    }
}
