// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for materializing a full polling cycle.

use std::collections::HashMap;

use serde_json::{Value, json};
use weathercom_sensors::{
    Feature, Payload, SensorConfig, SensorValue, Snapshot, Unit, UnitSystem, observation_payload,
};

fn current_conditions() -> Payload {
    let value = json!({
        "validTimeLocal": "2024-07-04T14:00:00-0400",
        "relativeHumidity": 48,
        "uvIndex": 8,
        "windDirection": 200,
        "windDirectionCardinal": "SSW",
        "temperatureDewPoint": 62.0,
        "temperatureFeelsLike": 86.0,
        "temperature": 84.0,
        "temperatureHeatIndex": 86.0,
        "temperatureWindChill": 84.0,
        "precip1Hour": 0.0,
        "precip6Hour": 0.0,
        "precip24Hour": 0.12,
        "pressureAltimeter": 29.95,
        "windGust": 21.0,
        "windSpeed": 9.0
    });
    value.as_object().cloned().unwrap()
}

fn pws_response() -> Value {
    json!({"observations": [{
        "stationID": "KMAHANOV10",
        "obsTimeLocal": "2024-07-04 14:02:11",
        "neighborhood": "Hanover",
        "solarRadiation": 812.4,
        "uv": 8.0,
        "winddir": 205,
        "humidity": 47,
        "qcStatus": 1,
        "imperial": {
            "temp": 85, "heatIndex": 87, "dewpt": 62, "windChill": 85,
            "windSpeed": 8, "windGust": 19, "pressure": 29.94,
            "precipRate": 0.0, "precipTotal": 0.0, "elev": 66
        }
    }]})
}

// ============================================================================
// Snapshot
// ============================================================================

mod snapshot {
    use super::*;

    fn capture() -> Snapshot {
        let config = SensorConfig::new().with_units(UnitSystem::Imperial);
        let observations = observation_payload(&pws_response(), config.units).unwrap();
        let payloads = HashMap::from([
            (Feature::CurrentConditions, current_conditions()),
            (Feature::Observations, observations),
        ]);
        Snapshot::capture(&config, &payloads)
    }

    #[test]
    fn every_reading_is_available() {
        let snapshot = capture();
        assert_eq!(snapshot.tables().len(), 2);
        assert!(snapshot.readings().all(|r| r.is_available()));
    }

    #[test]
    fn tables_follow_configuration_order() {
        let snapshot = capture();
        let features: Vec<_> = snapshot.tables().iter().map(|t| t.feature).collect();
        assert_eq!(features, [Feature::CurrentConditions, Feature::Observations]);
    }

    #[test]
    fn imperial_units_are_attached() {
        let snapshot = capture();
        let temp = snapshot.get(Feature::Observations, "temp").unwrap();
        assert_eq!(temp.unit, Some(Unit::Fahrenheit));
        assert_eq!(temp.value, Some(SensorValue::Float(85.0)));

        let pressure = snapshot.get(Feature::CurrentConditions, "pressureAltimeter").unwrap();
        assert_eq!(pressure.unit, Some(Unit::InchesOfMercury));
    }

    #[test]
    fn zero_precipitation_stays_zero() {
        let snapshot = capture();
        let total = snapshot.get(Feature::Observations, "precipTotal").unwrap();
        assert_eq!(total.value, Some(SensorValue::Float(0.0)));
    }

    #[test]
    fn observation_times_are_parsed() {
        let snapshot = capture();

        let current = snapshot.table(Feature::CurrentConditions).unwrap();
        let offset = current.observed_at.unwrap().timezone_offset().unwrap();
        assert_eq!(offset.local_minus_utc(), -4 * 3600);

        let pws = snapshot.table(Feature::Observations).unwrap();
        let observed = pws.observed_at.unwrap();
        assert!(observed.timezone_offset().is_none());
        assert_eq!(observed.to_string(), "2024-07-04 14:02:11");
    }

    #[test]
    fn unconfigured_features_are_not_read() {
        let config = SensorConfig::new().with_features([Feature::Observations]);
        let payloads = HashMap::from([(Feature::CurrentConditions, current_conditions())]);
        let snapshot = Snapshot::capture(&config, &payloads);
        assert!(snapshot.tables().is_empty());
    }
}

// ============================================================================
// Partial payloads
// ============================================================================

mod partial {
    use super::*;

    #[test]
    fn metric_section_missing_is_reported() {
        let err = observation_payload(&pws_response(), UnitSystem::Metric).unwrap_err();
        assert!(err.to_string().contains("metric"));
    }

    #[test]
    fn dropped_fields_are_unavailable_only_for_themselves() {
        let mut payload = current_conditions();
        payload.remove("uvIndex");
        payload.remove("windGust");

        let config = SensorConfig::default().with_features([Feature::CurrentConditions]);
        let snapshot = Snapshot::capture(
            &config,
            &HashMap::from([(Feature::CurrentConditions, payload)]),
        );

        let table = snapshot.table(Feature::CurrentConditions).unwrap();
        assert_eq!(table.unavailable_count(), 2);
        assert!(!table.get("uvIndex").unwrap().is_available());
        assert!(!table.get("windGust").unwrap().is_available());
        assert!(table.get("windSpeed").unwrap().is_available());
    }
}
