// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sensor classifications used by the host for grouping and statistics.

use std::fmt;

use serde::Serialize;

/// Coarse classification of what a sensor measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceClass {
    /// Air or dew point temperature.
    Temperature,
    /// Relative humidity.
    Humidity,
    /// Atmospheric pressure.
    Pressure,
    /// Accumulated precipitation.
    Precipitation,
    /// Precipitation rate.
    PrecipitationIntensity,
    /// Wind speed or gust.
    WindSpeed,
    /// Solar irradiance.
    Irradiance,
    /// A length, such as station elevation.
    Distance,
}

impl DeviceClass {
    /// Returns the host's identifier for this class.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::Humidity => "humidity",
            Self::Pressure => "pressure",
            Self::Precipitation => "precipitation",
            Self::PrecipitationIntensity => "precipitation_intensity",
            Self::WindSpeed => "wind_speed",
            Self::Irradiance => "irradiance",
            Self::Distance => "distance",
        }
    }
}

impl fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregation semantics of a sensor's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StateClass {
    /// An instantaneous reading.
    Measurement,
    /// A monotonically increasing accumulator that may reset.
    TotalIncreasing,
}

impl StateClass {
    /// Returns the host's identifier for this class.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Measurement => "measurement",
            Self::TotalIncreasing => "total_increasing",
        }
    }
}

impl fmt::Display for StateClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_names_match_as_str() {
        for class in [
            DeviceClass::Temperature,
            DeviceClass::WindSpeed,
            DeviceClass::PrecipitationIntensity,
        ] {
            let json = serde_json::to_string(&class).unwrap();
            assert_eq!(json, format!("\"{}\"", class.as_str()));
        }

        let json = serde_json::to_string(&StateClass::TotalIncreasing).unwrap();
        assert_eq!(json, r#""total_increasing""#);
    }
}
