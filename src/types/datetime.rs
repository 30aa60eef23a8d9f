// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Observation timestamps reported by Weather.com.
//!
//! The two payload shapes report their local observation time differently:
//!
//! - Current conditions (`validTimeLocal`): `"2024-01-15T10:30:00-0500"`
//! - PWS observations (`obsTimeLocal`): `"2024-01-15 10:30:00"`, no offset
//!
//! RFC 3339 strings (`"2024-01-15T10:30:00-05:00"`) are accepted as well.
//!
//! # Examples
//!
//! ```
//! use weathercom_sensors::types::ObservationTime;
//!
//! let t: ObservationTime = "2024-01-15T10:30:00-0500".parse().unwrap();
//! assert_eq!(t.timezone_offset().unwrap().local_minus_utc(), -5 * 3600);
//!
//! let t: ObservationTime = "2024-01-15 10:30:00".parse().unwrap();
//! assert!(t.timezone_offset().is_none());
//! ```

use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDateTime};

/// Error returned when an observation timestamp cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservationTimeParseError {
    input: String,
}

impl ObservationTimeParseError {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }

    /// Returns the input string that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl std::fmt::Display for ObservationTimeParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "failed to parse observation time: '{}'", self.input)
    }
}

impl std::error::Error for ObservationTimeParseError {}

/// A local observation time, with its UTC offset when the payload gave one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObservationTime {
    naive: NaiveDateTime,
    offset_secs: Option<i32>,
}

impl ObservationTime {
    /// Parses a timestamp, returning `None` on failure.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        s.parse().ok()
    }

    fn parse_with_offset(s: &str) -> Option<Self> {
        let datetime = DateTime::parse_from_rfc3339(s)
            .or_else(|_| DateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%z"))
            .ok()?;
        Some(datetime.into())
    }

    fn parse_naive(s: &str) -> Option<Self> {
        ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"]
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
            .map(Self::from)
    }

    /// Returns the local wall-clock time of the observation.
    #[must_use]
    pub const fn naive(&self) -> NaiveDateTime {
        self.naive
    }

    /// Returns the UTC offset, if the payload included one.
    #[must_use]
    pub fn timezone_offset(&self) -> Option<FixedOffset> {
        self.offset_secs.and_then(FixedOffset::east_opt)
    }

    /// Returns the timezone-aware datetime, if the offset is known.
    #[must_use]
    pub fn to_datetime(&self) -> Option<DateTime<FixedOffset>> {
        self.timezone_offset()
            .and_then(|tz| self.naive.and_local_timezone(tz).single())
    }
}

impl FromStr for ObservationTime {
    type Err = ObservationTimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::parse_with_offset(s)
            .or_else(|| Self::parse_naive(s))
            .ok_or_else(|| ObservationTimeParseError::new(s))
    }
}

impl From<NaiveDateTime> for ObservationTime {
    fn from(naive: NaiveDateTime) -> Self {
        Self {
            naive,
            offset_secs: None,
        }
    }
}

impl From<DateTime<FixedOffset>> for ObservationTime {
    fn from(datetime: DateTime<FixedOffset>) -> Self {
        Self {
            naive: datetime.naive_local(),
            offset_secs: Some(datetime.offset().local_minus_utc()),
        }
    }
}

impl std::fmt::Display for ObservationTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(dt) = self.to_datetime() {
            write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S %:z"))
        } else {
            write!(f, "{}", self.naive.format("%Y-%m-%d %H:%M:%S"))
        }
    }
}
