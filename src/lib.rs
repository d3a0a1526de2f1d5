// SPDX-FileCopyrightText: 2026 Camille019
// SPDX-License-Identifier: MPL-2.0

#![forbid(unsafe_code)]

mod config;
mod error;
mod exit;
pub mod frame;
mod locator;
mod monitor;
mod screen;
pub mod sensor;
mod sysfs;

pub use crate::config::{Config, LEGION_DRIVER};
pub use crate::error::{Error, Result};
pub use crate::exit::{report, EXIT_FAILURE, EXIT_OK};
pub use crate::locator::{locate, SensorRoot};
pub use crate::monitor::{Monitor, State, FAREWELL};
pub use crate::screen::{Screen, Terminal};
pub use crate::sensor::{read_fan_rpm, read_temp_celsius, Sample};
pub use crate::sysfs::SYSFS_MOUNT;
