// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types shared by the descriptor tables.
//!
//! # Types
//!
//! - [`UnitSystem`] - Metric/imperial toggle
//! - [`Unit`] - Unit label attached to a reading
//! - [`DeviceClass`] / [`StateClass`] - Host classifications
//! - [`SensorValue`] - Extracted scalar
//! - [`ObservationTime`] - Provider local timestamp

mod class;
mod datetime;
mod unit;
mod value;

pub use class::{DeviceClass, StateClass};
pub use datetime::{ObservationTime, ObservationTimeParseError};
pub use unit::{Unit, UnitSystem};
pub use value::SensorValue;
