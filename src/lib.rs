// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Weathercom Sensors - Weather.com fields as home-automation sensors.
//!
//! This library declares, for each Weather.com response shape, the ordered
//! list of fields a home-automation host surfaces as sensor entities: how
//! each value is read and coerced, which unit label it carries in metric or
//! imperial mode, and how it is named and classified.
//!
//! # Tables
//!
//! - **Current conditions**: `v3/wx/observations/current`
//! - **Observations**: personal weather station `v2/pws/observations/current`
//!
//! Fetching the payloads, scheduling polls and registering entities belong
//! to the host.
//!
//! # Quick Start
//!
//! ## Reading descriptors directly
//!
//! ```
//! use serde_json::json;
//! use weathercom_sensors::{Feature, list_descriptors};
//!
//! let payload = json!({"relativeHumidity": 0, "windDirectionCardinal": "", "temperature": 0.0});
//! let payload = payload.as_object().unwrap();
//!
//! for descriptor in list_descriptors(Feature::CurrentConditions) {
//!     match descriptor.extract(payload, "") {
//!         Ok(value) => println!("{}: {value} {:?}", descriptor.name, descriptor.unit(true)),
//!         Err(e) => println!("{} unavailable: {e}", descriptor.name),
//!     }
//! }
//! ```
//!
//! ## Capturing a polling cycle
//!
//! ```
//! use std::collections::HashMap;
//!
//! use serde_json::json;
//! use weathercom_sensors::{Feature, SensorConfig, Snapshot, UnitSystem, observation_payload};
//!
//! let config = SensorConfig::new().with_units(UnitSystem::Imperial);
//!
//! let response = json!({"observations": [{
//!     "obsTimeLocal": "2024-01-15 10:30:00",
//!     "humidity": 64,
//!     "imperial": {"temp": 38}
//! }]});
//! let observations = observation_payload(&response, config.units)?;
//!
//! let snapshot = Snapshot::capture(&config, &HashMap::from([(Feature::Observations, observations)]));
//! let temp = snapshot.get(Feature::Observations, "temp").unwrap();
//! assert_eq!(temp.unit.unwrap().as_str(), "°F");
//! # Ok::<(), weathercom_sensors::Error>(())
//! ```

pub mod config;
pub mod descriptor;
pub mod error;
pub mod reading;
pub mod types;

pub use config::SensorConfig;
pub use descriptor::{
    Feature, FieldDescriptor, Payload, UnitFn, ValueKind, find_descriptor, list_descriptors,
    observation_payload,
};
pub use error::{Error, ExtractError, Result, ValueError};
pub use reading::{SensorReading, Snapshot, TableReadings, read_table};
pub use types::{
    DeviceClass, ObservationTime, ObservationTimeParseError, SensorValue, StateClass, Unit,
    UnitSystem,
};
