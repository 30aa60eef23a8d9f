// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Units of measurement and the metric/imperial toggle.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use crate::error::ValueError;

/// The unit system the host displays readings in.
///
/// Weather.com returns values already converted to the requested system,
/// so this only selects the unit label attached to a reading.
///
/// # Examples
///
/// ```
/// use weathercom_sensors::types::UnitSystem;
///
/// assert_eq!(UnitSystem::from(true), UnitSystem::Metric);
/// assert_eq!("imperial".parse::<UnitSystem>().unwrap(), UnitSystem::Imperial);
/// assert_eq!("e".parse::<UnitSystem>().unwrap(), UnitSystem::Imperial);
/// assert!(UnitSystem::Metric.is_metric());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Celsius, millimeters, millibar, km/h.
    #[default]
    #[serde(alias = "m")]
    Metric,
    /// Fahrenheit, inches, inHg, mph.
    #[serde(alias = "e")]
    Imperial,
}

impl UnitSystem {
    /// Returns true for [`UnitSystem::Metric`].
    #[must_use]
    pub const fn is_metric(self) -> bool {
        matches!(self, Self::Metric)
    }

    /// Returns the lowercase name of the unit system.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
        }
    }
}

impl From<bool> for UnitSystem {
    fn from(is_metric: bool) -> Self {
        if is_metric { Self::Metric } else { Self::Imperial }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitSystem {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "metric" | "m" | "true" => Ok(Self::Metric),
            "imperial" | "e" | "false" => Ok(Self::Imperial),
            _ => Err(ValueError::InvalidUnitSystem(s.to_string())),
        }
    }
}

/// A unit of measurement attached to a sensor reading.
///
/// The string forms match the unit labels used by the host platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// Degrees Celsius.
    Celsius,
    /// Degrees Fahrenheit.
    Fahrenheit,
    /// Millimeters.
    Millimeters,
    /// Inches.
    Inches,
    /// Meters.
    Meters,
    /// Feet.
    Feet,
    /// Millibar.
    Millibar,
    /// Inches of mercury.
    InchesOfMercury,
    /// Kilometers per hour.
    KilometersPerHour,
    /// Miles per hour.
    MilesPerHour,
    /// Millimeters per hour.
    MillimetersPerHour,
    /// Inches per hour.
    InchesPerHour,
    /// Watts per square meter.
    WattsPerSquareMeter,
    /// Percentage.
    Percentage,
    /// Angular degrees.
    Degree,
    /// UV index, dimensionless.
    UvIndex,
}

impl Unit {
    /// Returns the display label of the unit.
    ///
    /// # Examples
    ///
    /// ```
    /// use weathercom_sensors::types::Unit;
    ///
    /// assert_eq!(Unit::Celsius.as_str(), "°C");
    /// assert_eq!(Unit::InchesOfMercury.as_str(), "inHg");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
            Self::Millimeters => "mm",
            Self::Inches => "in",
            Self::Meters => "m",
            Self::Feet => "ft",
            Self::Millibar => "mbar",
            Self::InchesOfMercury => "inHg",
            Self::KilometersPerHour => "km/h",
            Self::MilesPerHour => "mph",
            Self::MillimetersPerHour => "mm/h",
            Self::InchesPerHour => "in/h",
            Self::WattsPerSquareMeter => "W/m²",
            Self::Percentage => "%",
            Self::Degree => "°",
            Self::UvIndex => "UV index",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Unit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
