// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Host-side settings for materializing sensor readings.

use serde::Deserialize;

use crate::descriptor::Feature;
use crate::types::UnitSystem;

/// Context string handed to descriptors when none is configured.
pub const DEFAULT_CONTEXT: &str = "en-US";

/// Settings applied when turning payloads into readings.
///
/// Missing fields fall back to their defaults when deserializing, so a host
/// can keep only the settings it overrides in its own configuration.
///
/// # Examples
///
/// ```
/// use weathercom_sensors::config::SensorConfig;
/// use weathercom_sensors::descriptor::Feature;
/// use weathercom_sensors::types::UnitSystem;
///
/// let config = SensorConfig::new()
///     .with_units(UnitSystem::Imperial)
///     .with_features([Feature::CurrentConditions]);
/// assert!(!config.units.is_metric());
///
/// let config: SensorConfig = serde_json::from_str(r#"{"units": "e"}"#).unwrap();
/// assert_eq!(config.units, UnitSystem::Imperial);
/// assert_eq!(config.context, "en-US");
/// assert_eq!(config.features.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SensorConfig {
    /// Unit system used to label readings.
    pub units: UnitSystem,
    /// Per-call context passed to every descriptor.
    pub context: String,
    /// Tables materialized by [`Snapshot::capture`](crate::reading::Snapshot::capture).
    pub features: Vec<Feature>,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            units: UnitSystem::default(),
            context: DEFAULT_CONTEXT.to_string(),
            features: Feature::ALL.to_vec(),
        }
    }
}

impl SensorConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the unit system.
    #[must_use]
    pub fn with_units(mut self, units: UnitSystem) -> Self {
        self.units = units;
        self
    }

    /// Sets the unit system from a metric flag.
    #[must_use]
    pub fn with_metric(self, is_metric: bool) -> Self {
        self.with_units(UnitSystem::from(is_metric))
    }

    /// Sets the context string.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    /// Sets the tables to materialize.
    #[must_use]
    pub fn with_features(mut self, features: impl IntoIterator<Item = Feature>) -> Self {
        self.features = features.into_iter().collect();
        self
    }

    /// Parses a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`](crate::Error::Json) if the input is not a
    /// valid configuration object.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SensorConfig::default();
        assert_eq!(config.units, UnitSystem::Metric);
        assert_eq!(config.context, DEFAULT_CONTEXT);
        assert_eq!(
            config.features,
            vec![Feature::CurrentConditions, Feature::Observations]
        );
    }

    #[test]
    fn builder() {
        let config = SensorConfig::new()
            .with_metric(false)
            .with_context("de-DE")
            .with_features([Feature::Observations]);
        assert_eq!(config.units, UnitSystem::Imperial);
        assert_eq!(config.context, "de-DE");
        assert_eq!(config.features, vec![Feature::Observations]);
    }

    #[test]
    fn from_json_full() {
        let config = SensorConfig::from_json(
            r#"{"units": "imperial", "context": "fr-FR", "features": ["observations"]}"#,
        )
        .unwrap();
        assert_eq!(config.units, UnitSystem::Imperial);
        assert_eq!(config.context, "fr-FR");
        assert_eq!(config.features, vec![Feature::Observations]);
    }

    #[test]
    fn from_json_rejects_unknown_units() {
        let err = SensorConfig::from_json(r#"{"units": "kelvin"}"#).unwrap_err();
        assert!(matches!(err, crate::Error::Json(_)));
    }
}
